//! Test 7: domains and ranges; the range decides object vs data property.

use super::{Expected, Fixture};

/// An object property and a data property, classified by their ranges.
pub const TEST7_DOMAIN_RANGE: Fixture = Fixture {
    name: "test7_domain_range",
    turtle: r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix ex:   <http://example.org/family#> .

ex:knows rdfs:domain ex:Person ;
    rdfs:range ex:Person .
ex:age rdfs:domain ex:Person ;
    rdfs:range xsd:integer .
ex:Person a owl:Class .
"#,
    strict: Expected {
        axioms: 5,
        annotated: 0,
        residuals: 0,
    },
    lenient: Expected {
        axioms: 5,
        annotated: 0,
        residuals: 0,
    },
};
