mod color;
mod edges;
mod enums;
mod style;

pub use color::{Color, Rgb};
pub use edges::Edges;
pub use enums::{Align, Direction, Display, Justify, Overflow, Position, Size, TextAlign};
pub use style::{Breakpoint, Shadow, Style};
