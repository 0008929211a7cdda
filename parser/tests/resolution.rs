//! Dispatch, classification propagation, and the strict/lenient policy.

use owl_rdf_model::{
    vocab, AnnotationProperty, AxiomKind, DataProperty, Literal, Node, ObjectProperty, Triple,
};
use owl_rdf_parser::{
    parse, Classification, Deferred, HandlerRegistry, ParseError, ParseMode, ParserConfig,
    RdfConsumer,
};

fn n(name: &str) -> Node {
    Node::iri(format!("http://example.org/{name}"))
}

fn t(s: Node, p: &str, o: Node) -> Triple {
    Triple::new(s, Node::iri(p), o)
}

fn declare(node: Node, kind: &str) -> Triple {
    t(node, vocab::RDF_TYPE, Node::iri(kind))
}

#[test]
fn dispatching_twice_is_a_no_op() {
    let triple = declare(n("p"), vocab::OWL_OBJECT_PROPERTY);
    let mut consumer = RdfConsumer::new(ParserConfig::strict());
    consumer.feed(triple.clone());

    assert_eq!(consumer.dispatch(&triple), Ok(()));
    assert_eq!(consumer.document().axiom_count(), 1);
    assert!(consumer.store().is_empty());
    assert!(consumer.classifier().is_object_property(&n("p")));

    assert_eq!(consumer.dispatch(&triple), Ok(()));
    consumer.feed(triple.clone());
    assert_eq!(consumer.document().axiom_count(), 1);
    assert!(consumer.store().is_empty());

    let outcome = consumer.finish();
    assert!(outcome.is_complete());
    assert_eq!(outcome.document.axiom_count(), 1);
}

#[test]
fn dispatching_an_unfed_triple_does_nothing() {
    let mut consumer = RdfConsumer::new(ParserConfig::lenient());
    let triple = t(n("a"), vocab::RDFS_SUB_PROPERTY_OF, n("b"));
    assert_eq!(consumer.dispatch(&triple), Ok(()));
    assert_eq!(consumer.document().axiom_count(), 0);
}

#[test]
fn declaration_after_use_still_classifies() {
    let uses = t(n("p"), vocab::RDFS_SUB_PROPERTY_OF, n("q"));
    let decl = declare(n("q"), vocab::OWL_DATATYPE_PROPERTY);
    let expected = AxiomKind::SubDataPropertyOf {
        sub: DataProperty(n("p")),
        sup: DataProperty(n("q")),
    };

    for mode in [ParseMode::Buffered, ParseMode::Streaming] {
        let config = ParserConfig::strict().with_mode(mode);
        for triples in [
            vec![uses.clone(), decl.clone()],
            vec![decl.clone(), uses.clone()],
        ] {
            let outcome = parse(triples, &config);
            assert!(outcome.is_complete(), "{mode}: {:?}", outcome.residuals);
            assert!(outcome.document.contains_kind(&expected), "{mode}");
        }
    }
}

#[test]
fn classification_flows_from_subject_to_object() {
    let triples = vec![
        t(n("q"), vocab::RDFS_SUB_PROPERTY_OF, n("r")),
        t(n("p"), vocab::RDFS_SUB_PROPERTY_OF, n("q")),
        declare(n("p"), vocab::OWL_OBJECT_PROPERTY),
    ];
    let mut consumer = RdfConsumer::new(ParserConfig::strict());
    consumer.feed_all(triples);
    let outcome = consumer.finish();
    assert!(outcome.is_complete());
    assert!(outcome
        .document
        .contains_kind(&AxiomKind::SubObjectPropertyOf {
            sub: ObjectProperty(n("q")),
            sup: ObjectProperty(n("r")),
        }));
}

#[test]
fn range_decides_property_kind() {
    let triples = vec![
        t(n("age"), vocab::RDFS_RANGE, Node::iri(vocab::XSD_INTEGER)),
        t(
            n("alice"),
            "http://example.org/age",
            Node::literal(Literal::typed("42", vocab::XSD_INTEGER)),
        ),
        t(n("knows"), vocab::RDFS_RANGE, n("Person")),
        declare(n("Person"), vocab::OWL_CLASS),
        t(n("alice"), "http://example.org/knows", n("bob")),
    ];
    let outcome = parse(triples, &ParserConfig::strict());
    assert!(outcome.is_complete(), "{:?}", outcome.residuals);
    assert_eq!(outcome.document.axioms_named("DataPropertyAssertion").count(), 1);
    assert_eq!(outcome.document.axioms_named("ObjectPropertyAssertion").count(), 1);
    assert_eq!(outcome.document.axioms_named("ObjectPropertyRange").count(), 1);
    assert_eq!(outcome.document.axioms_named("DataPropertyRange").count(), 1);
}

#[test]
fn strict_and_lenient_diverge_on_undeclared_properties() {
    let triples = vec![t(n("a"), vocab::RDFS_SUB_PROPERTY_OF, n("b"))];

    let lenient = parse(triples.clone(), &ParserConfig::lenient());
    assert!(lenient.is_complete());
    assert!(lenient
        .document
        .contains_kind(&AxiomKind::SubAnnotationPropertyOf {
            sub: AnnotationProperty(n("a")),
            sup: AnnotationProperty(n("b")),
        }));
    assert!(lenient.ensure_resolved().is_ok());

    let strict = parse(triples.clone(), &ParserConfig::strict());
    assert_eq!(strict.document.axiom_count(), 0);
    assert_eq!(strict.residuals.len(), 1);
    assert_eq!(strict.residuals[0].triple, triples[0]);
    assert_eq!(
        strict.residuals[0].reason,
        Some(Deferred::Unclassified {
            subject: Classification::Unclassified,
            object: Classification::Unclassified,
        })
    );
    match strict.ensure_resolved() {
        Err(ParseError::Unresolved { count, first }) => {
            assert_eq!(count, 1);
            assert_eq!(*first, triples[0]);
        }
        other => panic!("expected an unresolved error, got {other:?}"),
    }
}

#[test]
fn lenient_guess_does_not_preempt_later_evidence() {
    // `q` is only known to be an object property through `r`; the guess
    // must not fire before that has propagated.
    let triples = vec![
        t(n("p"), vocab::RDFS_SUB_PROPERTY_OF, n("q")),
        t(n("q"), vocab::RDFS_SUB_PROPERTY_OF, n("r")),
        declare(n("r"), vocab::OWL_OBJECT_PROPERTY),
    ];
    let outcome = parse(triples, &ParserConfig::lenient());
    assert!(outcome.is_complete());
    assert_eq!(outcome.document.axioms_named("SubAnnotationPropertyOf").count(), 0);
    assert!(outcome
        .document
        .contains_kind(&AxiomKind::SubObjectPropertyOf {
            sub: ObjectProperty(n("p")),
            sup: ObjectProperty(n("q")),
        }));
}

#[test]
fn unknown_assertion_predicate_becomes_annotation_when_lenient() {
    let triples = vec![t(n("s"), "http://example.org/note", n("o"))];
    let lenient = parse(triples.clone(), &ParserConfig::lenient());
    assert_eq!(lenient.document.axioms_named("AnnotationAssertion").count(), 1);

    let strict = parse(triples, &ParserConfig::strict());
    assert_eq!(
        strict.residuals[0].reason,
        Some(Deferred::UnclassifiedPredicate(Classification::Unclassified))
    );
}

#[test]
fn unmapped_reserved_predicates_stay_residual() {
    let triples = vec![t(
        n("A"),
        "http://www.w3.org/2002/07/owl#disjointWith",
        n("B"),
    )];
    let outcome = parse(triples, &ParserConfig::lenient());
    assert_eq!(outcome.residuals.len(), 1);
    assert_eq!(outcome.residuals[0].reason, Some(Deferred::Unmapped));
}

#[test]
fn empty_registry_leaves_everything_pending() {
    let triples = vec![declare(n("p"), vocab::OWL_OBJECT_PROPERTY)];
    let mut consumer = RdfConsumer::with_registry(ParserConfig::lenient(), HandlerRegistry::new());
    consumer.feed_all(triples);
    let outcome = consumer.finish();
    assert_eq!(outcome.residuals.len(), 1);
    assert_eq!(outcome.residuals[0].reason, Some(Deferred::Unmapped));
}

#[test]
fn conflicting_declarations_are_recorded_once() {
    let triples = vec![
        declare(n("p"), vocab::OWL_OBJECT_PROPERTY),
        declare(n("p"), vocab::OWL_DATATYPE_PROPERTY),
    ];
    let outcome = parse(triples, &ParserConfig::lenient());
    assert_eq!(outcome.conflicts.len(), 1);
    assert_eq!(outcome.conflicts[0].node, n("p"));
}

#[test]
fn ontology_header_is_recorded() {
    let triples = vec![
        declare(n("onto"), vocab::OWL_ONTOLOGY),
        declare(n("Person"), vocab::OWL_CLASS),
    ];
    let outcome = parse(triples, &ParserConfig::strict());
    assert!(outcome.is_complete());
    assert_eq!(outcome.document.ontology_iri, Some(n("onto")));
    assert_eq!(outcome.document.axiom_count(), 1);
}

#[test]
fn pass_limit_bounds_resolution() {
    let config = ParserConfig {
        max_passes: 1,
        ..ParserConfig::lenient()
    };
    let triples = vec![t(n("a"), vocab::RDFS_SUB_PROPERTY_OF, n("b"))];
    let outcome = parse(triples, &config);
    assert_eq!(outcome.passes, 1);
    assert_eq!(outcome.residuals.len(), 1);
}

#[test]
fn declared_annotation_sub_property_needs_lenient_mode() {
    let triples = vec![
        declare(n("a"), vocab::OWL_ANNOTATION_PROPERTY),
        declare(n("b"), vocab::OWL_ANNOTATION_PROPERTY),
        t(n("a"), vocab::RDFS_SUB_PROPERTY_OF, n("b")),
    ];
    let strict = parse(triples.clone(), &ParserConfig::strict());
    assert_eq!(strict.document.axioms_named("SubAnnotationPropertyOf").count(), 0);
    assert_eq!(strict.residuals.len(), 1);
    assert_eq!(strict.residuals[0].triple, triples[2]);

    let lenient = parse(triples, &ParserConfig::lenient());
    assert!(lenient.is_complete());
    assert_eq!(lenient.document.axioms_named("SubAnnotationPropertyOf").count(), 1);
}
