use webdom::{Element, Justify};

use super::{EMOTION_ID, MOOD_LIST_ID};
use crate::composites::{card, icon_with_labels};
use crate::content::{EMOTION_HEADING, MOODS};
use crate::primitives::section_heading;

pub fn emotion_detection_section() -> Element {
    let moods = Element::row()
        .id(MOOD_LIST_ID)
        .justify(Justify::SpaceAround)
        .children(MOODS.map(|m| icon_with_labels(m.mood, m.icon, m.speaker, m.mood)));

    Element::box_()
        .id(EMOTION_ID)
        .child(section_heading(EMOTION_HEADING))
        .child(card([moods]))
}
