//! Axiom annotations: reified `owl:Axiom` nodes and the pending buffer.

use owl_rdf_model::{vocab, AnnotationProperty, AxiomKind, DataFactory, Literal, Node, Triple};
use owl_rdf_parser::{parse, parse_str, ParserConfig, RdfConsumer, SourceFormat};

fn n(name: &str) -> Node {
    Node::iri(format!("http://example.org/{name}"))
}

fn t(s: Node, p: &str, o: Node) -> Triple {
    Triple::new(s, Node::iri(p), o)
}

const REIFIED: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix ex:   <http://example.org/> .

[] a owl:Axiom ;
    owl:annotatedSource ex:hasParent ;
    owl:annotatedProperty rdfs:subPropertyOf ;
    owl:annotatedTarget ex:hasAncestor ;
    rdfs:comment "every parent is an ancestor" .

ex:hasParent a owl:ObjectProperty ;
    rdfs:subPropertyOf ex:hasAncestor .
"#;

#[test]
fn reified_annotation_attaches_to_its_axiom_only() {
    for config in [ParserConfig::strict(), ParserConfig::lenient()] {
        let outcome =
            parse_str(REIFIED, SourceFormat::Turtle, &config).expect("fixture should parse");
        assert!(outcome.is_complete(), "{:?}", outcome.residuals);
        assert!(outcome.dangling_annotations.is_empty());

        let sub = outcome
            .document
            .axioms_named("SubObjectPropertyOf")
            .next()
            .expect("sub-property axiom");
        assert_eq!(sub.annotations.len(), 1);
        let annotation = sub.annotations.iter().next().expect("one annotation");
        assert_eq!(annotation.property, AnnotationProperty(Node::iri(vocab::RDFS_COMMENT)));
        assert_eq!(
            annotation.value,
            Node::literal(Literal::string("every parent is an ancestor"))
        );

        let declaration = outcome
            .document
            .axioms_named("Declaration")
            .next()
            .expect("declaration");
        assert!(!declaration.is_annotated());
    }
}

#[test]
fn reification_without_owl_axiom_type_is_residual() {
    let x = Node::blank("x");
    let triples = vec![
        t(x.clone(), vocab::OWL_ANNOTATED_SOURCE, n("p")),
        t(x.clone(), vocab::OWL_ANNOTATED_PROPERTY, Node::iri(vocab::RDFS_SUB_PROPERTY_OF)),
        t(x, vocab::OWL_ANNOTATED_TARGET, n("q")),
    ];
    let outcome = parse(triples, &ParserConfig::lenient());
    assert_eq!(outcome.residuals.len(), 3);
}

#[test]
fn externally_buffered_annotation_is_drained_by_its_axiom() {
    let factory = DataFactory::new();
    let mut consumer = RdfConsumer::new(ParserConfig::strict());
    consumer.feed_all([
        t(n("q"), vocab::RDF_TYPE, Node::iri(vocab::OWL_OBJECT_PROPERTY)),
        t(n("p"), vocab::RDFS_SUB_PROPERTY_OF, n("q")),
    ]);
    consumer.pending_annotations_mut().add_pending(
        n("p"),
        factory.annotation(
            Node::iri(vocab::RDFS_LABEL),
            Node::literal(Literal::lang("parent", "en")),
        ),
    );
    assert!(consumer.pending_annotations().has_pending(&n("p")));

    let outcome = consumer.finish();
    assert!(outcome.is_complete());
    assert!(outcome.dangling_annotations.is_empty());
    let sub = outcome
        .document
        .axioms_named("SubObjectPropertyOf")
        .next()
        .expect("sub-property axiom");
    assert!(sub.is_annotated());
    assert!(matches!(sub.kind, AxiomKind::SubObjectPropertyOf { .. }));
}

#[test]
fn annotation_without_an_axiom_is_reported_dangling() {
    let factory = DataFactory::new();
    let mut consumer = RdfConsumer::new(ParserConfig::lenient());
    consumer.pending_annotations_mut().add_pending(
        n("ghost"),
        factory.annotation(Node::iri(vocab::RDFS_COMMENT), n("nothing")),
    );
    let outcome = consumer.finish();
    assert!(outcome.is_complete());
    assert_eq!(outcome.dangling_annotations.len(), 1);
    assert_eq!(outcome.dangling_annotations[0].0, n("ghost"));
}
