//! Page composer: global assets plus every section, in display order.

use webdom::{find_element, Edges, Element, Size, Style};

use crate::sections::{
    discussion_grid, emotion_detection_section, header, mediator_suggestions_section,
    recording_section, trends_section, EMOTION_ID, HEADER_ID, RECORDING_ID, SUGGESTIONS_ID,
    TRENDS_ID, DISCUSSION_GRID_ID,
};
use crate::primitives::stylesheet_link;
use crate::theme::{GRAY_50, GRAY_800};

pub const TAILWIND_URL: &str =
    "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css";
pub const INTER_FONT_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap";
pub const LUCIDE_FONT_URL: &str = "https://unpkg.com/lucide-static@latest/font/Lucide.ttf";
/// Glyph classes (`icon-{name}::before`) for every icon on the page. Pinned
/// to a release that still ships the `check-circle` name.
pub const LUCIDE_ICONS_URL: &str = "https://unpkg.com/lucide-static@0.263.1/font/lucide.css";

pub const MAIN_CONTENT_ID: &str = "main-content";

/// Section ids in the order `page_sections` returns them.
pub const SECTION_ORDER: [&str; 6] = [
    HEADER_ID,
    RECORDING_ID,
    DISCUSSION_GRID_ID,
    EMOTION_ID,
    SUGGESTIONS_ID,
    TRENDS_ID,
];

fn global_styles() -> Element {
    Element::stylesheet(format!(
        "\n@font-face {{\n    font-family: 'LucideIcons';\n    src: url({LUCIDE_FONT_URL}) format('truetype');\n}}\nbody {{\n    font-family: 'Inter', sans-serif;\n}}\n"
    ))
}

pub fn main_content() -> Element {
    Element::col()
        .id(MAIN_CONTENT_ID)
        .gap(Size::rem(2.0))
        .child(recording_section())
        .child(discussion_grid())
        .child(emotion_detection_section())
        .child(mediator_suggestions_section())
        .child(trends_section())
}

/// The whole dashboard: stylesheet links, font face, and the centered page.
pub fn main_layout() -> Element {
    let container = Element::box_()
        .max_width(Size::rem(64.0))
        .margin(Edges::horizontal(Size::Auto))
        .padding(Edges::all(Size::rem(1.0)))
        .child(header())
        .child(main_content());

    Element::fragment()
        .child(stylesheet_link(TAILWIND_URL))
        .child(stylesheet_link(INTER_FONT_URL))
        .child(stylesheet_link(LUCIDE_ICONS_URL))
        .child(global_styles())
        .child(
            Element::box_()
                .style(Style::new().background(GRAY_50).foreground(GRAY_800))
                .child(container),
        )
}

/// The header and the top-level sections of a composed page, in order.
///
/// Ids that are missing from `root` are skipped.
pub fn page_sections(root: &Element) -> Vec<&Element> {
    SECTION_ORDER
        .iter()
        .filter_map(|id| find_element(root, id))
        .collect()
}
