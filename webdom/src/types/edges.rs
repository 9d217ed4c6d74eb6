use super::Size;

/// Box edges for margin and padding, rendered as the four-value CSS shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: Size,
    pub right: Size,
    pub bottom: Size,
    pub left: Size,
}

impl Edges {
    pub const fn new(top: Size, right: Size, bottom: Size, left: Size) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: Size) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn horizontal(value: Size) -> Self {
        Self::new(Size::Zero, value, Size::Zero, value)
    }

    pub const fn vertical(value: Size) -> Self {
        Self::new(value, Size::Zero, value, Size::Zero)
    }

    pub const fn symmetric(vertical: Size, horizontal: Size) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub const fn top(value: Size) -> Self {
        Self::new(value, Size::Zero, Size::Zero, Size::Zero)
    }

    pub const fn right(value: Size) -> Self {
        Self::new(Size::Zero, value, Size::Zero, Size::Zero)
    }

    pub const fn bottom(value: Size) -> Self {
        Self::new(Size::Zero, Size::Zero, value, Size::Zero)
    }

    pub const fn left(value: Size) -> Self {
        Self::new(Size::Zero, Size::Zero, Size::Zero, value)
    }

    /// Collapse to the shortest equivalent CSS shorthand.
    pub fn to_css(&self) -> String {
        let (t, r, b, l) = (
            self.top.to_css(),
            self.right.to_css(),
            self.bottom.to_css(),
            self.left.to_css(),
        );
        if t == r && r == b && b == l {
            t
        } else if t == b && r == l {
            format!("{t} {r}")
        } else if r == l {
            format!("{t} {r} {b}")
        } else {
            format!("{t} {r} {b} {l}")
        }
    }
}
