use webdom::{Element, HeadingLevel, Size, Style};

use crate::layout::main_layout;

pub const HOME_PATH: &str = "/home";
pub const HOME_TITLE: &str = "Home";

/// The dashboard under a "User Dashboard" heading.
pub fn home() -> Element {
    Element::col()
        .id("home")
        .gap(Size::rem(3.0))
        .width(Size::Full)
        .child(
            Element::heading(HeadingLevel::H1, "User Dashboard")
                .style(Style::new().text_size(Size::rem(1.25), Size::rem(1.75))),
        )
        .child(main_layout())
}
