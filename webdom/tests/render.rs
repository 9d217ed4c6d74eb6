use webdom::{
    render_document, render_html, render_outline, Color, Element, HeadingLevel, Size, Style,
};

// ============================================================================
// HTML Tests
// ============================================================================

#[test]
fn test_text_is_escaped() {
    let el = Element::text("a < b & \"c\"");
    assert_eq!(render_html(&el), "<p>a &lt; b &amp; &quot;c&quot;</p>");
}

#[test]
fn test_attribute_values_are_escaped() {
    let el = Element::link("stylesheet", "https://x.test/?a=1&b=2");
    assert_eq!(
        render_html(&el),
        "<link href=\"https://x.test/?a=1&amp;b=2\" rel=\"stylesheet\">"
    );
}

#[test]
fn test_raw_style_is_verbatim() {
    let el = Element::stylesheet("a > b { color: red; }");
    assert_eq!(render_html(&el), "<style>a > b { color: red; }</style>");
}

#[test]
fn test_id_and_inline_style() {
    let el = Element::heading(HeadingLevel::H1, "Hi")
        .id("title")
        .style(Style::new().foreground(Color::hex(0x4F46E5)).font_weight(700));
    assert_eq!(
        render_html(&el),
        "<h1 id=\"title\" style=\"color: #4F46E5; font-weight: 700;\">Hi</h1>"
    );
}

#[test]
fn test_breakpoint_rule() {
    let el = Element::grid()
        .grid_columns(1)
        .breakpoint(Size::px(768.0), Style::new().set("grid-template-columns", "repeat(2, minmax(0, 1fr))"));
    let html = render_html(&el);
    assert!(html.contains(
        "@media (min-width: 768px) { .wd-0 { grid-template-columns: repeat(2, minmax(0, 1fr)); } }"
    ));
    assert!(html.contains("<div class=\"wd-0\" style=\"display: grid; grid-template-columns: repeat(1, minmax(0, 1fr));\">"));
}

#[test]
fn test_render_is_deterministic() {
    let build = || {
        Element::button()
            .style_hover(Style::new().background(Color::hex(0x4338CA)))
            .child(Element::icon("mic", "Mic"))
            .child(Element::text_node("Go"))
    };
    assert_eq!(render_html(&build()), render_html(&build()));
}

#[test]
fn test_document_puts_rules_in_head() {
    let el = Element::button().style_hover(Style::new().set("color", "red"));
    let doc = render_document("Home & Away", &el);

    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("<title>Home &amp; Away</title>"));
    let head_end = doc.find("</head>").unwrap();
    let rule = doc.find(".wd-0:hover").unwrap();
    assert!(rule < head_end);
    assert!(doc.ends_with("</button></body></html>"));
}

// ============================================================================
// Outline Tests
// ============================================================================

#[test]
fn test_outline_structure() {
    let el = Element::box_()
        .id("card")
        .child(Element::heading(HeadingLevel::H2, "Title"))
        .child(Element::icon("smile", "Calm"))
        .child(Element::text_node("tail"));

    assert_eq!(
        render_outline(&el, 40),
        "div#card\n  h2 \"Title\"\n  i [smile]\n  #text \"tail\"\n"
    );
}

#[test]
fn test_outline_truncates_text() {
    let el = Element::text("hello world");
    assert_eq!(render_outline(&el, 8), "p \"hello w…\"\n");
}
