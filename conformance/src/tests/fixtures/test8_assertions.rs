//! Test 8: class, object, data, and annotation assertions.
//!
//! `ex:bob ex:knows "Robert"` gives an object property a literal value and
//! is left over in both modes.

use super::{Expected, Fixture};

/// Facts about individuals.
pub const TEST8_ASSERTIONS: Fixture = Fixture {
    name: "test8_assertions",
    turtle: r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix ex:   <http://example.org/family#> .

ex:knows  a owl:ObjectProperty .
ex:age    a owl:DatatypeProperty .
ex:Person a owl:Class .

ex:alice a ex:Person ;
    ex:knows ex:bob ;
    ex:age "42"^^xsd:integer ;
    rdfs:label "Alice"@en .

ex:bob ex:knows "Robert" .
"#,
    strict: Expected {
        axioms: 7,
        annotated: 0,
        residuals: 1,
    },
    lenient: Expected {
        axioms: 7,
        annotated: 0,
        residuals: 1,
    },
};
