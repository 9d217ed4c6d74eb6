use webdom::{
    find_element, Align, Content, Direction, Display, Edges, Element, HeadingLevel, Size, Style,
    Tag,
};

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_row_is_flex() {
    let row = Element::row();
    assert_eq!(row.tag, Tag::Box);
    assert_eq!(row.style.get("display"), Some("flex"));
    assert_eq!(row.style.get("flex-direction"), None);
}

#[test]
fn test_col_sets_direction() {
    let col = Element::col();
    assert_eq!(col.style.get("display"), Some("flex"));
    assert_eq!(col.style.get("flex-direction"), Some("column"));
}

#[test]
fn test_layout_setters_write_css() {
    let el = Element::box_()
        .width(Size::percent(20.0))
        .height(Size::rem(16.0))
        .padding(Edges::symmetric(Size::rem(0.75), Size::rem(1.5)))
        .margin(Edges::new(Size::Zero, Size::Auto, Size::rem(0.75), Size::Auto))
        .align(Align::Center);

    assert_eq!(el.style.get("width"), Some("20%"));
    assert_eq!(el.style.get("height"), Some("16rem"));
    assert_eq!(el.style.get("padding"), Some("0.75rem 1.5rem"));
    assert_eq!(el.style.get("margin"), Some("0 auto 0.75rem"));
    assert_eq!(el.style.get("align-items"), Some("center"));
}

#[test]
fn test_style_merges_with_layout() {
    let el = Element::box_()
        .width(Size::Full)
        .style(Style::new().set("width", "50%").set("color", "red"));

    assert_eq!(el.style.get("width"), Some("50%"));
    assert_eq!(el.style.get("color"), Some("red"));
    assert_eq!(el.style.len(), 2);
}

#[test]
fn test_child_replaces_text() {
    let el = Element::text("hello").child(Element::span("world"));
    assert_eq!(el.children_slice().len(), 1);
    assert_eq!(el.text_content(), "world");
}

#[test]
fn test_children_extend() {
    let el = Element::box_()
        .child(Element::span("a"))
        .children([Element::span("b"), Element::span("c")]);
    assert_eq!(el.children_slice().len(), 3);
    assert_eq!(el.text_content(), "abc");
}

#[test]
fn test_icon_carries_name_and_label() {
    let icon = Element::icon("mic", "Microphone icon");
    assert_eq!(icon.icon_name(), Some("mic"));
    assert_eq!(icon.get_attr("aria-label"), Some("Microphone icon"));
    assert_eq!(icon.get_attr("class"), Some("icon-mic"));
    assert_eq!(Element::box_().icon_name(), None);
}

#[test]
fn test_prop_sets_untyped_property() {
    let el = Element::box_()
        .prop("z-index", "10")
        .prop("z-index", "20");
    assert_eq!(el.style.get("z-index"), Some("20"));
    assert_eq!(el.style.len(), 1);
}

#[test]
fn test_stylesheet_is_raw() {
    let el = Element::stylesheet("body { margin: 0; }");
    assert_eq!(el.tag, Tag::Style);
    assert_eq!(el.content, Content::Raw("body { margin: 0; }".into()));
}

#[test]
fn test_builders_are_structurally_equal() {
    let build = || {
        Element::col()
            .direction(Direction::Column)
            .display(Display::Flex)
            .child(Element::heading(HeadingLevel::H2, "Title"))
    };
    assert_eq!(build(), build());
}

// ============================================================================
// Query Tests
// ============================================================================

#[test]
fn test_find_element_nested() {
    let root = Element::box_().id("root").child(
        Element::box_()
            .id("middle")
            .child(Element::span("leaf").id("leaf")),
    );

    assert_eq!(find_element(&root, "root").map(|e| e.tag), Some(Tag::Box));
    assert_eq!(
        find_element(&root, "leaf").map(|e| e.text_content()),
        Some("leaf".to_string())
    );
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_descendants_preorder() {
    let root = Element::box_()
        .child(Element::box_().id("a").child(Element::box_().id("a1")))
        .child(Element::box_().id("b"));

    let ids: Vec<_> = root
        .descendants()
        .into_iter()
        .filter_map(|e| e.id.as_deref())
        .collect();
    assert_eq!(ids, vec!["a", "a1", "b"]);
}
