//! Test 10: a property chain whose list loops back on itself.
//!
//! The chain and every list link stay unconsumed; the declaration next to
//! it still resolves.

use super::{Expected, Fixture};

/// A cyclic chain list.
pub const TEST10_MALFORMED_LISTS: Fixture = Fixture {
    name: "test10_malformed_lists",
    turtle: r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix ex:   <http://example.org/family#> .

ex:hasUncle owl:propertyChainAxiom _:a .
_:a rdf:first ex:hasParent ;
    rdf:rest _:b .
_:b rdf:first ex:hasBrother ;
    rdf:rest _:a .

ex:hasParent a owl:ObjectProperty .
"#,
    strict: Expected {
        axioms: 1,
        annotated: 0,
        residuals: 5,
    },
    lenient: Expected {
        axioms: 1,
        annotated: 0,
        residuals: 5,
    },
};
