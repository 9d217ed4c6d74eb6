use webdom::{Align, Edges, Element, Justify, Overflow, Position, Size, Style};

use super::{
    EMOTION_SERIES_ID, MOOD_SCALE_ID, PRODUCTIVITY_SERIES_ID, TIME_AXIS_ID, TRENDS_ID,
    TREND_LEGEND_ID,
};
use crate::composites::{card, label_row, legend_entry};
use crate::content::{EMOTION_SERIES, MOOD_SCALE, PRODUCTIVITY_SERIES, TIME_AXIS, TRENDS_HEADING};
use crate::primitives::{colored_bar, section_heading, semi_transparent_bar};
use crate::theme::{text_xs, BLUE_400, EMERALD_400, GRAY_100, RADIUS_LG, TRANSLUCENT};

/// Full-size layer pinned to the graph's bottom-left corner.
fn overlay() -> Element {
    Element::row()
        .position(Position::Absolute)
        .bottom(Size::Zero)
        .left(Size::Zero)
        .width(Size::Full)
        .height(Size::Full)
}

fn emotion_bars() -> Element {
    overlay()
        .id(EMOTION_SERIES_ID)
        .align(Align::End)
        .children(EMOTION_SERIES.map(|(color, height)| colored_bar(color, height)))
}

fn productivity_bars() -> Element {
    overlay()
        .id(PRODUCTIVITY_SERIES_ID)
        .align(Align::End)
        .children(PRODUCTIVITY_SERIES.map(semi_transparent_bar))
}

/// Mood scale along the top, time axis along the bottom.
fn graph_labels() -> Element {
    Element::col()
        .position(Position::Absolute)
        .top(Size::Zero)
        .left(Size::Zero)
        .width(Size::Full)
        .height(Size::Full)
        .justify(Justify::SpaceBetween)
        .padding(Edges::all(Size::rem(1.0)))
        .child(label_row(&MOOD_SCALE, text_xs()).id(MOOD_SCALE_ID))
        .child(label_row(&TIME_AXIS, text_xs()).id(TIME_AXIS_ID))
}

pub fn trend_graph() -> Element {
    let plot = Element::box_()
        .position(Position::Relative)
        .width(Size::Full)
        .height(Size::Full)
        .child(emotion_bars())
        .child(productivity_bars())
        .child(graph_labels());

    Element::box_()
        .width(Size::Full)
        .height(Size::rem(16.0))
        .overflow(Overflow::Hidden)
        .style(Style::new().background(GRAY_100).radius(RADIUS_LG))
        .child(plot)
}

pub fn trend_legend() -> Element {
    Element::row()
        .id(TREND_LEGEND_ID)
        .align(Align::Center)
        .justify(Justify::SpaceBetween)
        .margin_top(Size::rem(1.0))
        .child(legend_entry(EMERALD_400, None, "Emotional State"))
        .child(legend_entry(BLUE_400, Some(TRANSLUCENT), "Productivity Level"))
}

pub fn trends_section() -> Element {
    Element::box_()
        .id(TRENDS_ID)
        .child(section_heading(TRENDS_HEADING))
        .child(card([trend_graph(), trend_legend()]))
}
