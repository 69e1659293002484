//! Integration tests for building documents from markup trees.

use vellum_dom::{Document, ElementKind, NodeId};
use vellum_reader::{MarkupNode, ReadError, SvgReader};

fn read(root: &MarkupNode) -> Document {
    SvgReader::new().read(&root).expect("svg root")
}

fn tags(doc: &Document, id: NodeId) -> Vec<&'static str> {
    doc.tree()
        .children(id)
        .iter()
        .map(|&child| doc.tree().get(child).unwrap().tag_name())
        .collect()
}

#[test]
fn test_non_svg_root_is_rejected() {
    let err = SvgReader::new().read(&&MarkupNode::new("html")).unwrap_err();
    assert!(matches!(err, ReadError::UnexpectedRoot { ref found } if found == "html"));
}

#[test]
fn test_dimensions_from_width_and_height() {
    let doc = read(&MarkupNode::new("svg").attr("width", "100").attr("height", "50"));
    assert_eq!((doc.width(), doc.height()), (100.0, 50.0));
}

#[test]
fn test_dimensions_fall_back_to_view_box_size() {
    let doc = read(&MarkupNode::new("svg").attr("viewBox", "10 20 200 80"));
    assert_eq!((doc.width(), doc.height()), (200.0, 80.0));
}

#[test]
fn test_zero_width_and_height_use_view_box() {
    let doc = read(
        &MarkupNode::new("svg")
            .attr("width", "0")
            .attr("height", "")
            .attr("viewBox", "0,0,30,40"),
    );
    assert_eq!((doc.width(), doc.height()), (30.0, 40.0));
}

#[test]
fn test_missing_dimensions_give_zero_size() {
    let doc = read(&MarkupNode::new("svg"));
    assert_eq!((doc.width(), doc.height()), (0.0, 0.0));

    let doc = read(&MarkupNode::new("svg").attr("viewBox", "0 0 10"));
    assert_eq!((doc.width(), doc.height()), (0.0, 0.0));
}

#[test]
fn test_unit_suffixes_are_best_effort() {
    let doc = read(&MarkupNode::new("svg").attr("width", "120px").attr("height", "3cm"));
    assert_eq!((doc.width(), doc.height()), (120.0, 3.0));
}

#[test]
fn test_unknown_elements_drop_their_subtree() {
    let root = MarkupNode::new("svg")
        .child(MarkupNode::new("rect"))
        .child(
            MarkupNode::new("foreignObject")
                .child(MarkupNode::new("circle"))
                .child(MarkupNode::new("g").child(MarkupNode::new("path"))),
        )
        .child(MarkupNode::new("ellipse"));
    let doc = read(&root);

    assert_eq!(tags(&doc, NodeId::ROOT), vec!["rect", "ellipse"]);
    let all: Vec<_> = doc
        .tree()
        .descendants(NodeId::ROOT)
        .map(|id| doc.tree().get(id).unwrap().tag_name())
        .collect();
    assert_eq!(all, vec!["svg", "rect", "ellipse"]);
}

#[test]
fn test_children_keep_document_order() {
    let root = MarkupNode::new("svg").child(
        MarkupNode::new("g")
            .child(MarkupNode::new("line"))
            .child(MarkupNode::new("polygon"))
            .child(MarkupNode::new("polyline")),
    );
    let doc = read(&root);
    let group = doc.tree().children(NodeId::ROOT)[0];
    assert_eq!(tags(&doc, group), vec!["line", "polygon", "polyline"]);
}

#[test]
fn test_leaf_children_are_not_built() {
    let root = MarkupNode::new("svg").child(MarkupNode::new("rect").child(MarkupNode::new("circle")));
    let doc = read(&root);
    let rect = doc.tree().children(NodeId::ROOT)[0];
    assert!(doc.tree().children(rect).is_empty());
    assert_eq!(doc.tree().len(), 2);
}

#[test]
fn test_presentation_attributes_become_styles() {
    let root = MarkupNode::new("svg").child(
        MarkupNode::new("rect")
            .attr("x", "5")
            .attr("fill", "red")
            .attr("stroke-width", "2"),
    );
    let doc = read(&root);
    let rect = doc.tree().get(doc.tree().children(NodeId::ROOT)[0]).unwrap();

    assert_eq!(rect.style("fill"), Some("red"));
    assert_eq!(rect.style("stroke-width"), Some("2"));
    assert_eq!(rect.attribute("fill"), None);
    assert_eq!(rect.attribute("x"), Some("5"));
    let ElementKind::Rect(data) = rect.kind() else {
        panic!("expected rect");
    };
    assert_eq!(data.x, Some(5.0));
}

#[test]
fn test_style_text_overrides_presentation_attribute() {
    let root = MarkupNode::new("svg").child(
        MarkupNode::new("circle")
            .attr("fill", "red")
            .attr("style", "fill: blue; bogus; opacity : 0.5"),
    );
    let doc = read(&root);
    let circle = doc.tree().get(doc.tree().children(NodeId::ROOT)[0]).unwrap();

    assert_eq!(circle.style("fill"), Some("blue"));
    assert_eq!(circle.style("opacity"), Some("0.5"));
    assert_eq!(circle.attribute("style"), None);
}

#[test]
fn test_root_attributes_and_styles_are_applied() {
    let doc = read(
        &MarkupNode::new("svg")
            .attr("width", "10")
            .attr("height", "10")
            .attr("font-family", "serif")
            .attr("style", "color: green"),
    );
    let root = doc.tree().get(NodeId::ROOT).unwrap();
    assert_eq!(root.attribute("width"), Some("10"));
    assert_eq!(root.style("font-family"), Some("serif"));
    assert_eq!(root.style("color"), Some("green"));
}

#[test]
fn test_namespaced_attributes_are_qualified_plain_attributes() {
    let root = MarkupNode::new("svg")
        .namespace("")
        .namespace("xlink")
        .child(
            MarkupNode::new("image")
                .ns_attr("xlink", "href", "logo.png")
                .ns_attr("xlink", "fill", "red")
                .ns_attr("svg", "stroke", "blue"),
        );
    let doc = read(&root);
    let image = doc.tree().get(doc.tree().children(NodeId::ROOT)[0]).unwrap();

    assert_eq!(image.attribute("xlink:href"), Some("logo.png"));
    assert_eq!(image.attribute("xlink:fill"), Some("red"));
    assert_eq!(image.style("fill"), None);
    assert_eq!(image.style("stroke"), Some("blue"));
    let ElementKind::Image(data) = image.kind() else {
        panic!("expected image");
    };
    assert_eq!(data.href(), Some("logo.png"));
}

#[test]
fn test_xlink_href_is_kept_under_its_own_name() {
    let root = MarkupNode::new("svg")
        .namespace("xlink")
        .child(MarkupNode::new("image").ns_attr("xlink", "href", "logo.png"));
    let mut doc = read(&root);
    let id = doc.tree().children(NodeId::ROOT)[0];

    let image = doc.tree().get(id).unwrap();
    let keys: Vec<&str> = image.attributes().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["xlink:href"]);

    let image = doc.tree_mut().get_mut(id).unwrap();
    assert_eq!(image.remove_attribute("xlink:href"), Some("logo.png".to_string()));
    assert!(image.attributes().is_empty());
    let ElementKind::Image(data) = image.kind() else {
        panic!("expected image");
    };
    assert_eq!(data.href(), None);
}

#[test]
fn test_gradient_stops_keep_authored_order() {
    let root = MarkupNode::new("svg").child(
        MarkupNode::new("defs").child(
            MarkupNode::new("linearGradient")
                .attr("id", "fade")
                .attr("gradientUnits", "userSpaceOnUse")
                .child(MarkupNode::new("stop").attr("offset", "0").attr("stop-color", "#000"))
                .child(MarkupNode::new("stop").attr("offset", "0.5"))
                .child(MarkupNode::new("stop").attr("offset", "1")),
        ),
    );
    let doc = read(&root);
    let gradient = doc.tree().find_by_id("fade").unwrap();

    let offsets: Vec<f64> = doc
        .tree()
        .gradient_stops(gradient)
        .into_iter()
        .map(|id| match doc.tree().get(id).unwrap().kind() {
            ElementKind::GradientStop(stop) => stop.offset(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(offsets, vec![0.0, 0.5, 1.0]);

    let first = doc.tree().get(doc.tree().gradient_stops(gradient)[0]).unwrap();
    assert_eq!(first.style("stop-color"), Some("#000"));
}

#[test]
fn test_text_reads_position_and_content() {
    let root = MarkupNode::new("svg").child(
        MarkupNode::new("text")
            .attr("x", "4")
            .attr("y", "8")
            .attr("text-anchor", "middle")
            .with_text("Hello"),
    );
    let doc = read(&root);
    let text = doc.tree().get(doc.tree().children(NodeId::ROOT)[0]).unwrap();
    let ElementKind::Text(data) = text.kind() else {
        panic!("expected text");
    };
    assert_eq!((data.x, data.y), (Some(4.0), Some(8.0)));
    assert_eq!(data.content, "Hello");
    assert_eq!(text.style("text-anchor"), Some("middle"));
}

#[test]
fn test_reader_is_reusable() {
    let reader = SvgReader::new();
    let first = reader.read(&&MarkupNode::new("svg").attr("width", "1").attr("height", "1")).unwrap();
    let second = reader
        .read(&&MarkupNode::new("svg").child(MarkupNode::new("g")))
        .unwrap();

    assert_eq!(first.tree().len(), 1);
    assert_eq!(second.tree().len(), 2);
    assert_eq!((second.width(), second.height()), (0.0, 0.0));
}
