use crate::element::{Content, Element, Tag};
use crate::text::truncate_to_width;

/// Render an indented one-node-per-line outline of the tree.
///
/// Each line reads `tag#id [icon] "text"`; text longer than `max_width`
/// display columns is truncated with an ellipsis.
pub fn render_outline(root: &Element, max_width: usize) -> String {
    let mut out = String::new();
    write_node(root, 0, max_width, &mut out);
    out
}

fn write_node(element: &Element, depth: usize, max_width: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }

    out.push_str(&label(element));

    if let Some(id) = &element.id {
        out.push('#');
        out.push_str(id);
    }
    if let Some(icon) = element.icon_name() {
        out.push_str(" [");
        out.push_str(icon);
        out.push(']');
    }

    match &element.content {
        Content::Text(text) => {
            out.push_str(" \"");
            out.push_str(&truncate_to_width(text, max_width));
            out.push('"');
        }
        Content::Raw(raw) => out.push_str(&format!(" ({} bytes)", raw.len())),
        Content::None | Content::Children(_) => {}
    }
    out.push('\n');

    for child in element.children_slice() {
        write_node(child, depth + 1, max_width, out);
    }
}

fn label(element: &Element) -> String {
    match (element.tag, &element.content) {
        (Tag::Fragment, Content::Text(_)) => "#text".to_string(),
        (Tag::Fragment, _) => "fragment".to_string(),
        (tag, _) => tag.html_name().unwrap_or("fragment").to_string(),
    }
}
