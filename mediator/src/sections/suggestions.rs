use webdom::{Direction, Display, Element, Size};

use super::{SUGGESTIONS_ID, SUGGESTION_LIST_ID};
use crate::composites::{card, checklist_item};
use crate::content::{SUGGESTIONS, SUGGESTIONS_HEADING};
use crate::primitives::section_heading;

pub fn mediator_suggestions_section() -> Element {
    let list = Element::list()
        .id(SUGGESTION_LIST_ID)
        .display(Display::Flex)
        .direction(Direction::Column)
        .gap(Size::rem(0.875))
        .children(SUGGESTIONS.map(checklist_item));

    Element::box_()
        .id(SUGGESTIONS_ID)
        .child(section_heading(SUGGESTIONS_HEADING))
        .child(card([list]))
}
