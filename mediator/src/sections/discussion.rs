use webdom::{Element, Size, Style};

use super::{
    DISCUSSION_GRID_ID, FACT_CHECKING_ID, FACT_CHECK_LIST_ID, TRANSCRIPTION_ID, TRANSCRIPT_LOG_ID,
};
use crate::composites::{fact_check_item, scroll_card, speaker_text};
use crate::content::{CLAIMS, FACT_CHECK_HEADING, TRANSCRIPT, TRANSCRIPTION_HEADING};
use crate::primitives::section_heading;

/// Viewport width from which transcript and fact-checks sit side by side.
const TWO_COLUMN_MIN_WIDTH: Size = Size::px(768.0);

pub fn transcription_section() -> Element {
    let log = scroll_card(TRANSCRIPT.map(|(label, line)| speaker_text(label, line)))
        .id(TRANSCRIPT_LOG_ID);

    Element::box_()
        .id(TRANSCRIPTION_ID)
        .child(section_heading(TRANSCRIPTION_HEADING))
        .child(log)
}

pub fn fact_checking_section() -> Element {
    let last = CLAIMS.len() - 1;
    let items = CLAIMS.into_iter().enumerate().map(|(i, c)| {
        let item = fact_check_item(c.claim, c.status, c.status_color, c.explanation);
        if i < last {
            item.margin_bottom(Size::rem(1.5))
        } else {
            item
        }
    });

    Element::box_()
        .id(FACT_CHECKING_ID)
        .child(section_heading(FACT_CHECK_HEADING))
        .child(scroll_card(items).id(FACT_CHECK_LIST_ID))
}

/// Transcript and fact-checks: one column on narrow screens, two from 768px.
pub fn discussion_grid() -> Element {
    Element::grid()
        .id(DISCUSSION_GRID_ID)
        .gap(Size::rem(2.0))
        .grid_columns(1)
        .breakpoint(
            TWO_COLUMN_MIN_WIDTH,
            Style::new().set("grid-template-columns", "repeat(2, minmax(0, 1fr))"),
        )
        .child(transcription_section())
        .child(fact_checking_section())
}
