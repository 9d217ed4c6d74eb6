mod html;
mod outline;

pub use html::{render_document, render_html};
pub use outline::render_outline;
