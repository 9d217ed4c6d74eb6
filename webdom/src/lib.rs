pub mod element;
pub mod render;
pub mod text;
pub mod transitions;
pub mod types;

pub use element::{find_element, Content, Element, HeadingLevel, Tag, ICON_CLASS_PREFIX};
pub use render::{render_document, render_html, render_outline};
pub use transitions::{Easing, Transitions};
pub use types::*;
