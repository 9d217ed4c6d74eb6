use std::collections::BTreeMap;

use super::Content;
use crate::types::{
    Align, Breakpoint, Direction, Display, Edges, Justify, Overflow, Position, Size, Style,
};

/// Class prefix used by icon fonts such as lucide-static.
pub const ICON_CLASS_PREFIX: &str = "icon-";

/// What an element renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tag {
    /// `<link>`, a void element pointing at an external resource.
    Link,
    /// `<style>` with a raw stylesheet body.
    Style,
    #[default]
    Box,
    /// Block of text (`<p>`).
    Text,
    /// Inline run of text (`<span>`).
    Span,
    Heading(HeadingLevel),
    Icon,
    Button,
    List,
    ListItem,
    /// Renders only its content, without a wrapper.
    Fragment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
}

impl Tag {
    /// HTML tag name, or `None` for fragments.
    pub const fn html_name(self) -> Option<&'static str> {
        match self {
            Tag::Link => Some("link"),
            Tag::Style => Some("style"),
            Tag::Box => Some("div"),
            Tag::Text => Some("p"),
            Tag::Span => Some("span"),
            Tag::Heading(HeadingLevel::H1) => Some("h1"),
            Tag::Heading(HeadingLevel::H2) => Some("h2"),
            Tag::Heading(HeadingLevel::H3) => Some("h3"),
            Tag::Heading(HeadingLevel::H4) => Some("h4"),
            Tag::Icon => Some("i"),
            Tag::Button => Some("button"),
            Tag::List => Some("ul"),
            Tag::ListItem => Some("li"),
            Tag::Fragment => None,
        }
    }

    /// Void elements have no closing tag and no content.
    pub const fn is_void(self) -> bool {
        matches!(self, Tag::Link)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    // Identity
    pub id: Option<String>,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Visual
    pub style: Style,
    /// Declarations applied while the pointer is over the element.
    pub style_hover: Option<Style>,
    /// Responsive overrides, in ascending order of `min_width`.
    pub breakpoints: Vec<Breakpoint>,

    // Extra HTML attributes (href, rel, aria-label, ...)
    pub attrs: BTreeMap<String, String>,
}

impl Element {
    fn tagged(tag: Tag) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn box_() -> Self {
        Self::tagged(Tag::Box)
    }

    /// Flex container laid out left to right.
    pub fn row() -> Self {
        Self::box_().display(Display::Flex)
    }

    /// Flex container laid out top to bottom.
    pub fn col() -> Self {
        Self::box_()
            .display(Display::Flex)
            .direction(Direction::Column)
    }

    pub fn grid() -> Self {
        Self::box_().display(Display::Grid)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::tagged(Tag::Text)
        }
    }

    pub fn span(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::tagged(Tag::Span)
        }
    }

    /// Bare text with no wrapping tag, for mixing with inline siblings.
    pub fn text_node(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::tagged(Tag::Fragment)
        }
    }

    pub fn heading(level: HeadingLevel, content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::tagged(Tag::Heading(level))
        }
    }

    /// A named icon glyph. `alt` becomes the accessible label.
    ///
    /// The glyph is drawn by an icon font stylesheet keyed on the
    /// `icon-{name}` class.
    pub fn icon(name: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::tagged(Tag::Icon)
            .attr("class", format!("{ICON_CLASS_PREFIX}{}", name.into()))
            .attr("role", "img")
            .attr("aria-label", alt)
    }

    pub fn button() -> Self {
        Self::tagged(Tag::Button).attr("type", "button")
    }

    pub fn list() -> Self {
        Self::tagged(Tag::List)
    }

    pub fn list_item() -> Self {
        Self::tagged(Tag::ListItem)
    }

    pub fn link(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self::tagged(Tag::Link).attr("rel", rel).attr("href", href)
    }

    /// A `<style>` block. The body is not escaped.
    pub fn stylesheet(css: impl Into<String>) -> Self {
        Self {
            content: Content::Raw(css.into()),
            ..Self::tagged(Tag::Style)
        }
    }

    pub fn fragment() -> Self {
        Self::tagged(Tag::Fragment)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Name of the glyph for icon elements.
    pub fn icon_name(&self) -> Option<&str> {
        match self.tag {
            Tag::Icon => self
                .get_attr("class")?
                .split_whitespace()
                .find_map(|class| class.strip_prefix(ICON_CLASS_PREFIX)),
            _ => None,
        }
    }

    // Visual

    /// Merge `style` into the element's declarations.
    pub fn style(mut self, style: Style) -> Self {
        self.style = self.style.merge(&style);
        self
    }

    pub fn style_hover(mut self, style: Style) -> Self {
        self.style_hover = Some(style);
        self
    }

    pub fn breakpoint(mut self, min_width: Size, style: Style) -> Self {
        self.breakpoints.push(Breakpoint::new(min_width, style));
        self
    }

    /// Set a CSS property no typed setter covers.
    pub fn prop(mut self, name: &str, value: impl Into<String>) -> Self {
        self.style.insert(name.to_string(), value.into());
        self
    }

    // Layout (box model)
    pub fn width(self, width: Size) -> Self {
        self.prop("width", width.to_css())
    }

    pub fn height(self, height: Size) -> Self {
        self.prop("height", height.to_css())
    }

    pub fn max_width(self, max_width: Size) -> Self {
        self.prop("max-width", max_width.to_css())
    }

    pub fn padding(self, padding: Edges) -> Self {
        self.prop("padding", padding.to_css())
    }

    pub fn margin(self, margin: Edges) -> Self {
        self.prop("margin", margin.to_css())
    }

    pub fn margin_top(self, value: Size) -> Self {
        self.prop("margin-top", value.to_css())
    }

    pub fn margin_right(self, value: Size) -> Self {
        self.prop("margin-right", value.to_css())
    }

    pub fn margin_bottom(self, value: Size) -> Self {
        self.prop("margin-bottom", value.to_css())
    }

    // Positioning
    pub fn position(self, position: Position) -> Self {
        self.prop("position", position.as_css())
    }

    pub fn top(self, top: Size) -> Self {
        self.prop("top", top.to_css())
    }

    pub fn left(self, left: Size) -> Self {
        self.prop("left", left.to_css())
    }

    pub fn right(self, right: Size) -> Self {
        self.prop("right", right.to_css())
    }

    pub fn bottom(self, bottom: Size) -> Self {
        self.prop("bottom", bottom.to_css())
    }

    // Flex / grid container
    pub fn display(self, display: Display) -> Self {
        self.prop("display", display.as_css())
    }

    pub fn direction(self, direction: Direction) -> Self {
        self.prop("flex-direction", direction.as_css())
    }

    pub fn gap(self, gap: Size) -> Self {
        self.prop("gap", gap.to_css())
    }

    pub fn justify(self, justify: Justify) -> Self {
        self.prop("justify-content", justify.as_css())
    }

    pub fn align(self, align: Align) -> Self {
        self.prop("align-items", align.as_css())
    }

    /// `repeat(n, minmax(0, 1fr))` columns.
    pub fn grid_columns(self, columns: u16) -> Self {
        self.prop(
            "grid-template-columns",
            format!("repeat({columns}, minmax(0, 1fr))"),
        )
    }

    // Overflow
    /// Set both horizontal and vertical overflow behavior.
    pub fn overflow(self, overflow: Overflow) -> Self {
        self.prop("overflow", overflow.as_css())
    }

    /// Set vertical overflow behavior.
    pub fn overflow_y(self, overflow: Overflow) -> Self {
        self.prop("overflow-y", overflow.as_css())
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Queries

    /// Direct children, empty for leaf elements.
    pub fn children_slice(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// All descendants in pre-order, not including `self`.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_descendants(self, &mut out);
        out
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_descendants<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    for child in element.children_slice() {
        out.push(child);
        collect_descendants(child, out);
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::Text(s) => out.push_str(s),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
        Content::None | Content::Raw(_) => {}
    }
}
