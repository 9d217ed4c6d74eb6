use crate::element::{Content, Element};
use crate::text::escape_html;

/// Prefix for classes generated to carry hover and breakpoint rules.
const CLASS_PREFIX: &str = "wd-";

/// Accumulates markup and the generated stylesheet rules for one render.
struct HtmlWriter {
    markup: String,
    rules: Vec<String>,
    next_class: usize,
    element_count: usize,
}

impl HtmlWriter {
    fn new() -> Self {
        Self {
            markup: String::with_capacity(16 * 1024),
            rules: Vec::new(),
            next_class: 0,
            element_count: 0,
        }
    }

    fn write_element(&mut self, element: &Element) {
        self.element_count += 1;

        let Some(name) = element.tag.html_name() else {
            self.write_content(&element.content);
            return;
        };

        self.markup.push('<');
        self.markup.push_str(name);

        if let Some(id) = &element.id {
            self.write_attr("id", id);
        }
        // Generated classes join any class the element already carries.
        let class = match (element.get_attr("class"), self.generated_rules(element)) {
            (Some(own), Some(generated)) => Some(format!("{own} {generated}")),
            (Some(own), None) => Some(own.to_string()),
            (None, generated) => generated,
        };
        if let Some(class) = class {
            self.write_attr("class", &class);
        }
        for (key, value) in element.attrs.iter().filter(|(key, _)| *key != "class") {
            self.write_attr(key, value);
        }
        if !element.style.is_empty() {
            self.write_attr("style", &element.style.to_css());
        }
        self.markup.push('>');

        if element.tag.is_void() {
            return;
        }

        self.write_content(&element.content);

        self.markup.push_str("</");
        self.markup.push_str(name);
        self.markup.push('>');
    }

    fn write_content(&mut self, content: &Content) {
        match content {
            Content::None => {}
            Content::Text(text) => self.markup.push_str(&escape_html(text)),
            Content::Raw(raw) => self.markup.push_str(raw),
            Content::Children(children) => {
                for child in children {
                    self.write_element(child);
                }
            }
        }
    }

    fn write_attr(&mut self, key: &str, value: &str) {
        self.markup.push(' ');
        self.markup.push_str(key);
        self.markup.push_str("=\"");
        self.markup.push_str(&escape_html(value));
        self.markup.push('"');
    }

    /// Emit hover/breakpoint rules for `element` and return the class they target.
    /// Classes are numbered in pre-order so identical trees render identically.
    fn generated_rules(&mut self, element: &Element) -> Option<String> {
        let hover = element.style_hover.as_ref().filter(|s| !s.is_empty());
        if hover.is_none() && element.breakpoints.is_empty() {
            return None;
        }

        let class = format!("{CLASS_PREFIX}{}", self.next_class);
        self.next_class += 1;

        if let Some(hover) = hover {
            self.rules
                .push(format!(".{class}:hover {{ {} }}", hover.to_css()));
        }
        for bp in &element.breakpoints {
            self.rules.push(format!(
                "@media (min-width: {}) {{ .{class} {{ {} }} }}",
                bp.min_width.to_css(),
                bp.style.to_css()
            ));
        }

        Some(class)
    }

    fn stylesheet(&self) -> Option<String> {
        if self.rules.is_empty() {
            None
        } else {
            Some(format!("<style>{}</style>", self.rules.join("\n")))
        }
    }
}

fn write_tree(root: &Element) -> HtmlWriter {
    let mut writer = HtmlWriter::new();
    writer.write_element(root);
    log::debug!(
        "rendered {} elements, {} generated rules, {} bytes",
        writer.element_count,
        writer.rules.len(),
        writer.markup.len()
    );
    writer
}

/// Render a tree to an HTML fragment.
///
/// Generated hover and breakpoint rules come first in their own `<style>` block.
pub fn render_html(root: &Element) -> String {
    let writer = write_tree(root);
    match writer.stylesheet() {
        Some(sheet) => sheet + &writer.markup,
        None => writer.markup,
    }
}

/// Render a tree as the body of a complete HTML document.
pub fn render_document(title: &str, root: &Element) -> String {
    let writer = write_tree(root);
    let mut doc = String::with_capacity(writer.markup.len() + 512);
    doc.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    doc.push_str("<title>");
    doc.push_str(&escape_html(title));
    doc.push_str("</title>");
    if let Some(sheet) = writer.stylesheet() {
        doc.push_str(&sheet);
    }
    doc.push_str("</head><body>");
    doc.push_str(&writer.markup);
    doc.push_str("</body></html>");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Size, Style};

    #[test]
    fn fragment_has_no_wrapper() {
        let el = Element::fragment()
            .child(Element::text_node("a"))
            .child(Element::span("b"));
        assert_eq!(render_html(&el), "a<span>b</span>");
    }

    #[test]
    fn classes_count_in_preorder() {
        let hover = Style::new().set("color", "red");
        let el = Element::box_()
            .style_hover(hover.clone())
            .child(Element::box_().style_hover(hover));
        let html = render_html(&el);
        assert!(html.contains("<div class=\"wd-0\"><div class=\"wd-1\"></div></div>"));
        assert!(html.starts_with("<style>.wd-0:hover { color: red; }\n.wd-1:hover"));
    }

    #[test]
    fn empty_hover_generates_nothing() {
        let el = Element::box_()
            .style_hover(Style::new())
            .width(Size::Full);
        assert_eq!(render_html(&el), "<div style=\"width: 100%;\"></div>");
    }

    #[test]
    fn icon_class_joins_generated_class() {
        let el = Element::icon("mic", "Mic").style_hover(Style::new().set("color", "red"));
        let html = render_html(&el);
        assert!(html.ends_with("<i class=\"icon-mic wd-0\" aria-label=\"Mic\" role=\"img\"></i>"));
        assert_eq!(html.matches("class=").count(), 1);
    }
}
