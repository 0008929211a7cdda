//! Test 6: properties that are used but never declared.
//!
//! Lenient consumers read them as annotation properties once nothing
//! else can be learned; strict consumers report them.

use super::{Expected, Fixture};

/// Undeclared sub-property, assertion, and domain.
pub const TEST6_UNDECLARED: Fixture = Fixture {
    name: "test6_undeclared",
    turtle: r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix ex:   <http://example.org/family#> .

ex:a   rdfs:subPropertyOf ex:b .
ex:s   ex:tag "draft" .
ex:p   rdfs:domain ex:C .
"#,
    strict: Expected {
        axioms: 0,
        annotated: 0,
        residuals: 3,
    },
    lenient: Expected {
        axioms: 3,
        annotated: 0,
        residuals: 0,
    },
};
