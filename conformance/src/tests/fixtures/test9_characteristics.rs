//! Test 9: property characteristics, equivalence, and inverses.
//!
//! `owl:FunctionalProperty` applies to both property kinds, so it only
//! resolves once the property is classified by other evidence.

use super::{Expected, Fixture};

/// Characteristics on declared and inferred properties.
pub const TEST9_CHARACTERISTICS: Fixture = Fixture {
    name: "test9_characteristics",
    turtle: r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix ex:   <http://example.org/family#> .

ex:hasAncestor a owl:TransitiveProperty .
ex:hasSibling a owl:SymmetricProperty ;
    owl:equivalentProperty ex:siblingOf .
ex:hasParent owl:inverseOf ex:hasChild .
ex:birthYear a owl:FunctionalProperty, owl:DatatypeProperty .
ex:hasMother a owl:FunctionalProperty ;
    rdfs:subPropertyOf ex:hasParent .
"#,
    strict: Expected {
        axioms: 8,
        annotated: 0,
        residuals: 0,
    },
    lenient: Expected {
        axioms: 8,
        annotated: 0,
        residuals: 0,
    },
};
