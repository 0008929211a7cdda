//! Test 2: `rdfs:subPropertyOf` for each property kind, with the
//! declaration arriving after the use and classification flowing along
//! the hierarchy. Annotation sub-properties are only assembled when
//! lenient, so strict mode leaves that link residual.

use super::{Expected, Fixture};

/// Object, data, and annotation sub-property hierarchies.
pub const TEST2_SUB_PROPERTIES: Fixture = Fixture {
    name: "test2_sub_properties",
    turtle: r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix ex:   <http://example.org/family#> .

ex:hasMother   rdfs:subPropertyOf ex:hasParent .
ex:hasParent   rdfs:subPropertyOf ex:hasAncestor .
ex:hasAncestor a owl:ObjectProperty .

ex:birthYear   rdfs:subPropertyOf ex:dateValue .
ex:dateValue   a owl:DatatypeProperty .

ex:shortNote   rdfs:subPropertyOf ex:note .
ex:note        a owl:AnnotationProperty .
"#,
    strict: Expected {
        axioms: 6,
        annotated: 0,
        residuals: 1,
    },
    lenient: Expected {
        axioms: 7,
        annotated: 0,
        residuals: 0,
    },
};
