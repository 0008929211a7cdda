//! Turtle fixtures for the mapping validators.
//!
//! Each fixture is a small graph covering one corner of the RDF mapping,
//! with the axiom and residual counts a conforming consumer produces in
//! each mode.

mod test1_declarations;
mod test2_sub_properties;
mod test3_property_chains;
mod test4_legacy_chains;
mod test5_reified_annotations;
mod test6_undeclared;
mod test7_domain_range;
mod test8_assertions;
mod test9_characteristics;
mod test10_malformed_lists;

pub use test1_declarations::TEST1_DECLARATIONS;
pub use test2_sub_properties::TEST2_SUB_PROPERTIES;
pub use test3_property_chains::TEST3_PROPERTY_CHAINS;
pub use test4_legacy_chains::TEST4_LEGACY_CHAINS;
pub use test5_reified_annotations::TEST5_REIFIED_ANNOTATIONS;
pub use test6_undeclared::TEST6_UNDECLARED;
pub use test7_domain_range::TEST7_DOMAIN_RANGE;
pub use test8_assertions::TEST8_ASSERTIONS;
pub use test9_characteristics::TEST9_CHARACTERISTICS;
pub use test10_malformed_lists::TEST10_MALFORMED_LISTS;

/// What one parse of a fixture must produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expected {
    /// Distinct axioms in the document.
    pub axioms: usize,
    /// Axioms carrying at least one annotation.
    pub annotated: usize,
    /// Triples left unconsumed.
    pub residuals: usize,
}

/// A named Turtle graph with its expected outcome per mode.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    /// Short identifier used in report entries.
    pub name: &'static str,
    /// The graph, in Turtle.
    pub turtle: &'static str,
    /// Outcome in strict mode.
    pub strict: Expected,
    /// Outcome in lenient mode.
    pub lenient: Expected,
}

/// Every fixture, in report order.
pub const ALL: &[Fixture] = &[
    TEST1_DECLARATIONS,
    TEST2_SUB_PROPERTIES,
    TEST3_PROPERTY_CHAINS,
    TEST4_LEGACY_CHAINS,
    TEST5_REIFIED_ANNOTATIONS,
    TEST6_UNDECLARED,
    TEST7_DOMAIN_RANGE,
    TEST8_ASSERTIONS,
    TEST9_CHARACTERISTICS,
    TEST10_MALFORMED_LISTS,
];
