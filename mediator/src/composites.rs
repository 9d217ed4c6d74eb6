//! Small groups of primitives with fixed internal spacing.

use std::time::Duration;

use webdom::{
    Align, Color, Display, Edges, Element, Easing, Justify, Overflow, Size, Style, TextAlign,
    Transitions,
};

use crate::primitives::{
    centered_icon, checkmark_icon, highlighted_span, highlighted_text, legend_swatch,
    microphone_icon, small_text_span, subtext, subtitle_heading, text_span,
};
use crate::theme::{surface, text_sm, GRAY_200, GRAY_600, INDIGO_600, INDIGO_700, RADIUS_FULL, WHITE};

/// White panel holding `children`.
pub fn card(children: impl IntoIterator<Item = Element>) -> Element {
    Element::box_()
        .padding(Edges::all(Size::rem(1.5)))
        .style(surface())
        .children(children)
}

/// Fixed-height card whose content scrolls vertically.
pub fn scroll_card(children: impl IntoIterator<Item = Element>) -> Element {
    card(children)
        .height(Size::rem(20.0))
        .overflow_y(Overflow::Auto)
}

/// `label` highlighted, followed by the spoken line.
pub fn speaker_text(label: &str, body: &str) -> Element {
    Element::text("")
        .margin_bottom(Size::rem(0.75))
        .child(highlighted_span(label))
        .child(Element::text_node(body))
}

pub fn fact_check_item(claim: &str, status: &str, status_color: Color, explanation: &str) -> Element {
    Element::box_()
        .child(subtitle_heading(&format!("Claim: {claim}")))
        .child(
            Element::text(format!("Status: {status}"))
                .margin_top(Size::rem(0.25))
                .style(text_sm().font_weight(500).foreground(status_color)),
        )
        .child(subtext(Size::rem(0.5), explanation))
}

pub fn icon_with_labels(alt: &str, icon: &str, primary: &str, secondary: &str) -> Element {
    Element::box_()
        .style(Style::new().text_align(TextAlign::Center))
        .child(centered_icon(alt, icon))
        .child(highlighted_text(primary))
        .child(subtext(Size::rem(0.25), secondary))
}

pub fn checklist_item(text: &str) -> Element {
    Element::list_item()
        .display(Display::Flex)
        .align(Align::Start)
        .child(checkmark_icon())
        .child(text_span(text))
}

/// Space-between row of small grey labels.
pub fn label_row(labels: &[&str], text_style: Style) -> Element {
    Element::row()
        .justify(Justify::SpaceBetween)
        .style(Style::new().foreground(GRAY_600).merge(&text_style))
        .children(labels.iter().map(|label| text_span(label)))
}

/// Pill-shaped track filled to `percent`, with time labels underneath.
pub fn progress_bar(start_label: &str, end_label: &str, percent: f64) -> Element {
    let fill = Element::box_()
        .width(Size::percent(percent))
        .height(Size::rem(1.0))
        .style(Style::new().background(INDIGO_600).radius(RADIUS_FULL));

    let track = Element::box_()
        .height(Size::rem(1.0))
        .margin_bottom(Size::rem(0.5))
        .style(Style::new().background(GRAY_200).radius(RADIUS_FULL))
        .child(fill);

    Element::box_()
        .max_width(Size::rem(28.0))
        .width(Size::Full)
        .child(track)
        .child(label_row(&[start_label, end_label], text_sm()))
}

pub fn recording_button() -> Element {
    let transitions =
        Transitions::new(Duration::from_millis(300), Easing::Standard).all_visual();

    Element::button()
        .display(Display::Flex)
        .align(Align::Center)
        .margin_bottom(Size::rem(1.5))
        .padding(Edges::symmetric(Size::rem(0.75), Size::rem(1.5)))
        .style(
            Style::new()
                .background(INDIGO_600)
                .foreground(WHITE)
                .font_weight(600)
                .radius(RADIUS_FULL)
                .transitions(&transitions),
        )
        .style_hover(Style::new().background(INDIGO_700))
        .child(microphone_icon())
        .child(Element::text_node(" Start Recording "))
}

pub fn legend_entry(swatch_color: Color, opacity: Option<f32>, label: &str) -> Element {
    Element::row()
        .align(Align::Center)
        .child(legend_swatch(swatch_color, opacity))
        .child(small_text_span(label))
}

/// Flex column with horizontally centered children.
pub fn centered_column(children: impl IntoIterator<Item = Element>) -> Element {
    Element::col()
        .align(Align::Center)
        .children(children)
}
