//! Integration tests for the rasterization dispatcher.

use vellum_dom::{Document, ElementKind, Node, NodeId};
use vellum_raster::{DisplayList, NodeRef, ParamValue, Params, Rasterizer, RenderSink, ShapeKind};
use vellum_reader::SvgReader;

fn parse(svg: &str) -> Document {
    SvgReader::new().parse_string(svg).expect("valid svg")
}

fn kinds(doc: &Document) -> Vec<ShapeKind> {
    Rasterizer::new(doc)
        .display_list()
        .instructions()
        .iter()
        .map(|instruction| instruction.kind)
        .collect()
}

fn number(params: &Params, key: &str) -> f64 {
    params[key].as_number().expect("numeric param")
}

#[test]
fn test_shapes_paint_in_document_order() {
    let doc = parse(
        r#"<svg width="10" height="10">
            <rect width="1" height="1"/>
            <g><circle r="2"/><line x2="3"/></g>
            <path d="M0 0"/>
        </svg>"#,
    );
    assert_eq!(
        kinds(&doc),
        vec![ShapeKind::Rect, ShapeKind::Circle, ShapeKind::Line, ShapeKind::Path]
    );
}

#[test]
fn test_empty_document_draws_nothing() {
    let doc = parse(r#"<svg width="10" height="10"/>"#);
    assert!(Rasterizer::new(&doc).display_list().is_empty());
}

#[test]
fn test_display_none_suppresses_subtree() {
    let doc = parse(
        r#"<svg width="10" height="10">
            <g display="none"><rect/><circle style="display: inline"/></g>
            <ellipse/>
        </svg>"#,
    );
    assert_eq!(kinds(&doc), vec![ShapeKind::Ellipse]);
}

#[test]
fn test_display_none_on_leaf() {
    let doc = parse(
        r#"<svg width="10" height="10">
            <rect style="display:none"/><circle/>
        </svg>"#,
    );
    assert_eq!(kinds(&doc), vec![ShapeKind::Circle]);
}

#[test]
fn test_hidden_container_still_draws_visible_children() {
    let doc = parse(
        r#"<svg width="10" height="10">
            <g visibility="hidden">
                <rect/>
                <circle visibility="visible"/>
            </g>
        </svg>"#,
    );
    assert_eq!(kinds(&doc), vec![ShapeKind::Circle]);
}

#[test]
fn test_collapse_hides_like_hidden() {
    let doc = parse(
        r#"<svg width="10" height="10">
            <rect style="visibility: collapse"/><line/>
        </svg>"#,
    );
    assert_eq!(kinds(&doc), vec![ShapeKind::Line]);
}

#[test]
fn test_definitions_and_gradients_are_not_painted() {
    let doc = parse(
        r##"<svg width="10" height="10">
            <defs><rect id="template"/></defs>
            <linearGradient id="fade"><stop offset="0"/></linearGradient>
            <radialGradient id="glow"><stop offset="1"/></radialGradient>
            <style>rect { fill: red }</style>
            <rect fill="url(#fade)"/>
        </svg>"##,
    );
    assert_eq!(kinds(&doc), vec![ShapeKind::Rect]);
}

#[test]
fn test_rect_parameters() {
    let doc = parse(
        r#"<svg width="10" height="10">
            <rect x="1" y="2" width="30px" height="40" rx="5"/>
        </svg>"#,
    );
    let list = Rasterizer::new(&doc).display_list();
    let params = &list.instructions()[0].params;
    assert_eq!(number(params, "x"), 1.0);
    assert_eq!(number(params, "y"), 2.0);
    assert_eq!(number(params, "width"), 30.0);
    assert_eq!(number(params, "height"), 40.0);
    assert_eq!(number(params, "rx"), 5.0);
    assert_eq!(number(params, "ry"), 0.0);
}

#[test]
fn test_polygon_and_text_parameters() {
    let doc = parse(
        r#"<svg width="10" height="10">
            <polygon points="0,0 10,0 5,5"/>
            <text x="3" y="4">Hello</text>
        </svg>"#,
    );
    let list = Rasterizer::new(&doc).display_list();
    let instructions = list.instructions();
    assert_eq!(
        instructions[0].params["points"],
        ParamValue::Points(vec![(0.0, 0.0), (10.0, 0.0), (5.0, 5.0)])
    );
    assert_eq!(instructions[1].kind, ShapeKind::Text);
    assert_eq!(instructions[1].params["content"].as_text(), Some("Hello"));
    assert_eq!(number(&instructions[1].params, "x"), 3.0);
}

#[test]
fn test_image_href_from_xlink() {
    let doc = parse(
        r#"<svg xmlns:xlink="http://www.w3.org/1999/xlink" width="10" height="10">
            <image width="4" height="4" xlink:href="cat.png"/>
        </svg>"#,
    );
    let list = Rasterizer::new(&doc).display_list();
    assert_eq!(list.instructions()[0].params["href"].as_text(), Some("cat.png"));
}

#[test]
fn test_instruction_records_source_node() {
    let doc = parse(r#"<svg width="10" height="10"><circle id="dot" r="1"/></svg>"#);
    let dot = doc.tree().find_by_id("dot").unwrap();
    let list = Rasterizer::new(&doc).display_list();
    assert_eq!(list.instructions()[0].node, dot);
}

/// A sink that captures the fill each shape would be painted with.
#[derive(Default)]
struct FillSink {
    fills: Vec<Option<String>>,
}

impl RenderSink for FillSink {
    fn render(&mut self, _kind: ShapeKind, _params: Params, node: NodeRef<'_>) {
        self.fills.push(node.computed_style("fill").map(str::to_string));
    }
}

#[test]
fn test_sink_resolves_inherited_paint() {
    let doc = parse(
        r#"<svg width="10" height="10" fill="blue">
            <g style="fill: red"><rect/><circle fill="inherit"/></g>
            <line stroke="black"/>
            <ellipse fill="green"/>
        </svg>"#,
    );
    let mut sink = FillSink::default();
    Rasterizer::new(&doc).rasterize(&mut sink);
    assert_eq!(
        sink.fills,
        vec![
            Some("red".to_string()),
            Some("red".to_string()),
            Some("blue".to_string()),
            Some("green".to_string()),
        ]
    );
}

#[test]
fn test_programmatic_tree_is_rasterized() {
    let mut doc = Document::new(20.0, 20.0);
    let tree = doc.tree_mut();
    let group = tree.alloc(Node::new(ElementKind::Group));
    tree.append_child(NodeId::ROOT, group).unwrap();
    let circle = tree.alloc(Node::new(ElementKind::Circle(
        vellum_dom::kind::Circle::new(5.0, 5.0, 2.0),
    )));
    tree.append_child(group, circle).unwrap();

    let mut list = DisplayList::new();
    Rasterizer::new(&doc).rasterize(&mut list);
    assert_eq!(list.len(), 1);
    assert_eq!(number(&list.instructions()[0].params, "r"), 2.0);
}
