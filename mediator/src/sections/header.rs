use webdom::{Edges, Element, HeadingLevel, Size, Style};

use super::HEADER_ID;
use crate::content::TITLE;
use crate::theme::{surface, INDIGO_600};

pub fn header() -> Element {
    Element::box_()
        .id(HEADER_ID)
        .margin_bottom(Size::rem(2.0))
        .padding(Edges::all(Size::rem(1.5)))
        .style(surface())
        .child(
            Element::heading(HeadingLevel::H1, TITLE).style(
                Style::new()
                    .font_weight(700)
                    .text_size(Size::rem(1.875), Size::rem(2.25))
                    .foreground(INDIGO_600),
            ),
        )
}
