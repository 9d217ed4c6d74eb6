//! Single-element builders.
//!
//! Every function here is total and returns a fresh element; styling is
//! fixed and only the literal arguments vary.

use webdom::{Color, Edges, Element, HeadingLevel, Size, Style};

use crate::theme::{text_sm, BLUE_400, INDIGO_600, INDIGO_700, INDIGO_800, TRANSLUCENT};

pub fn stylesheet_link(url: &str) -> Element {
    Element::link("stylesheet", url)
}

/// Claim title inside the fact-checking panel.
pub fn subtitle_heading(text: &str) -> Element {
    Element::heading(HeadingLevel::H3, text).style(
        Style::new()
            .font_weight(600)
            .foreground(INDIGO_700)
            .text_size(Size::rem(1.125), Size::rem(1.75)),
    )
}

/// Title above each dashboard panel.
pub fn section_heading(text: &str) -> Element {
    Element::heading(HeadingLevel::H2, text)
        .margin_bottom(Size::rem(1.0))
        .style(
            Style::new()
                .font_weight(600)
                .text_size(Size::rem(1.5), Size::rem(2.0))
                .foreground(INDIGO_800),
        )
}

pub fn text_span(text: &str) -> Element {
    Element::span(text)
}

pub fn highlighted_span(text: &str) -> Element {
    Element::span(text).style(Style::new().font_weight(600).foreground(INDIGO_600))
}

pub fn small_text_span(text: &str) -> Element {
    Element::span(text).style(text_sm())
}

pub fn subtext(margin_top: Size, text: &str) -> Element {
    Element::text(text).margin_top(margin_top).style(text_sm())
}

pub fn highlighted_text(text: &str) -> Element {
    Element::text(text).style(Style::new().font_weight(500).foreground(INDIGO_600))
}

/// 3rem icon centered horizontally above its labels.
pub fn centered_icon(alt: &str, icon: &str) -> Element {
    Element::icon(icon, alt)
        .width(Size::rem(3.0))
        .height(Size::rem(3.0))
        .style(Style::new().font_size(Size::rem(3.0)))
        .margin(Edges::new(Size::Zero, Size::Auto, Size::rem(0.75), Size::Auto))
}

pub fn checkmark_icon() -> Element {
    Element::icon("check-circle", "Checkmark")
        .width(Size::rem(1.25))
        .height(Size::rem(1.25))
        .style(Style::new().font_size(Size::rem(1.25)))
        .margin_right(Size::rem(0.75))
        .margin_top(Size::rem(0.25))
}

pub fn microphone_icon() -> Element {
    Element::icon("mic", "Microphone icon")
        .width(Size::rem(1.25))
        .height(Size::rem(1.25))
        .style(Style::new().font_size(Size::rem(1.25)))
        .margin_right(Size::rem(0.5))
}

/// One bar of a chart series; `height` is a percentage of the chart.
pub fn colored_bar(color: Color, height: f64) -> Element {
    Element::box_()
        .width(Size::percent(20.0))
        .height(Size::percent(height))
        .style(Style::new().background(color))
}

pub fn semi_transparent_bar(height: f64) -> Element {
    colored_bar(BLUE_400, height).style(Style::new().opacity(TRANSLUCENT))
}

/// 1rem color square in front of a legend label.
pub fn legend_swatch(color: Color, opacity: Option<f32>) -> Element {
    let style = match opacity {
        Some(opacity) => Style::new().background(color).opacity(opacity),
        None => Style::new().background(color),
    };
    Element::box_()
        .width(Size::rem(1.0))
        .height(Size::rem(1.0))
        .margin_right(Size::rem(0.5))
        .style(style)
}
