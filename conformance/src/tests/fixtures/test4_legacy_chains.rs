//! Test 4: pre-OWL 2 chain encodings under `rdfs:subPropertyOf`.
//!
//! `ex:uncle` reaches its chain through the removed `owl:propertyChain`
//! term; the aunt chain is a list used directly as the subject. Lenient
//! consumers read both as chain inclusions; strict consumers leave them.

use super::{Expected, Fixture};

/// Legacy chain forms.
pub const TEST4_LEGACY_CHAINS: Fixture = Fixture {
    name: "test4_legacy_chains",
    turtle: r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix ex:   <http://example.org/family#> .

ex:uncle owl:propertyChain ( ex:hasParent ex:hasBrother ) ;
    rdfs:subPropertyOf ex:hasUncle .

( ex:hasMother ex:hasSister ) rdfs:subPropertyOf ex:hasAunt .

ex:hasParent a owl:ObjectProperty .
"#,
    strict: Expected {
        axioms: 1,
        annotated: 0,
        residuals: 11,
    },
    lenient: Expected {
        axioms: 3,
        annotated: 0,
        residuals: 0,
    },
};
