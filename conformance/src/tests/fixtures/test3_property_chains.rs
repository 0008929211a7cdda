//! Test 3: `owl:propertyChainAxiom` with canonical RDF lists.

use super::{Expected, Fixture};

/// Two chains, one repeating the same property.
pub const TEST3_PROPERTY_CHAINS: Fixture = Fixture {
    name: "test3_property_chains",
    turtle: r#"
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix ex:   <http://example.org/family#> .

ex:hasUncle owl:propertyChainAxiom ( ex:hasParent ex:hasBrother ) .
ex:hasGreatGrandparent owl:propertyChainAxiom ( ex:hasParent ex:hasParent ex:hasParent ) .
ex:hasParent a owl:ObjectProperty .
"#,
    strict: Expected {
        axioms: 3,
        annotated: 0,
        residuals: 0,
    },
    lenient: Expected {
        axioms: 3,
        annotated: 0,
        residuals: 0,
    },
};
