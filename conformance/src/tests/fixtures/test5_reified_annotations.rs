//! Test 5: annotations on a reified `owl:Axiom` node attach to the one
//! axiom they name, not to other axioms about the same subject.

use super::{Expected, Fixture};

/// A declaration and an annotated sub-property axiom on the same subject.
pub const TEST5_REIFIED_ANNOTATIONS: Fixture = Fixture {
    name: "test5_reified_annotations",
    turtle: r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix ex:   <http://example.org/family#> .

ex:hasParent a owl:ObjectProperty ;
    rdfs:subPropertyOf ex:hasAncestor .

[] a owl:Axiom ;
    owl:annotatedSource   ex:hasParent ;
    owl:annotatedProperty rdfs:subPropertyOf ;
    owl:annotatedTarget   ex:hasAncestor ;
    rdfs:comment "Every parent is an ancestor." ;
    rdfs:seeAlso ex:genealogy .
"#,
    strict: Expected {
        axioms: 2,
        annotated: 1,
        residuals: 0,
    },
    lenient: Expected {
        axioms: 2,
        annotated: 1,
        residuals: 0,
    },
};
