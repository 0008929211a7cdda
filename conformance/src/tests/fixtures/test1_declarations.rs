//! Test 1: one declaration of every entity kind plus the ontology header.

use super::{Expected, Fixture};

/// Declarations only; nothing depends on inference.
pub const TEST1_DECLARATIONS: Fixture = Fixture {
    name: "test1_declarations",
    turtle: r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix ex:   <http://example.org/family#> .

ex:ontology a owl:Ontology .

ex:Person    a owl:Class .
ex:knows     a owl:ObjectProperty .
ex:age       a owl:DatatypeProperty .
ex:note      a owl:AnnotationProperty .
ex:alice     a owl:NamedIndividual .
ex:Celsius   a rdfs:Datatype .
"#,
    strict: Expected {
        axioms: 6,
        annotated: 0,
        residuals: 0,
    },
    lenient: Expected {
        axioms: 6,
        annotated: 0,
        residuals: 0,
    },
};
