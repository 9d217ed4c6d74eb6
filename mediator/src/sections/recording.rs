use webdom::{Edges, Element, Size};

use super::RECORDING_ID;
use crate::composites::{centered_column, progress_bar, recording_button};
use crate::content::{RECORDING_END, RECORDING_PROGRESS, RECORDING_START};
use crate::theme::surface;

/// Record button above the elapsed-time bar.
pub fn recording_section() -> Element {
    Element::box_()
        .id(RECORDING_ID)
        .padding(Edges::all(Size::rem(2.0)))
        .style(surface())
        .child(centered_column([
            recording_button(),
            progress_bar(RECORDING_START, RECORDING_END, RECORDING_PROGRESS),
        ]))
}
