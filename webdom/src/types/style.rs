use super::{Color, Size, TextAlign};
use crate::transitions::Transitions;

/// An ordered set of CSS declarations.
///
/// Setting a property that is already present replaces its value in place,
/// so declaration order stays the order in which properties were first set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    props: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary CSS property.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name.into(), value.into());
        self
    }

    pub(crate) fn insert(&mut self, name: String, value: String) {
        match self.props.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.props.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of this style.
    pub fn merge(mut self, other: &Style) -> Self {
        for (name, value) in &other.props {
            self.insert(name.clone(), value.clone());
        }
        self
    }

    /// `name: value;` pairs separated by single spaces.
    pub fn to_css(&self) -> String {
        self.props
            .iter()
            .map(|(n, v)| format!("{n}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    // Colors

    pub fn background(self, color: Color) -> Self {
        self.set("background-color", color.to_css())
    }

    pub fn foreground(self, color: Color) -> Self {
        self.set("color", color.to_css())
    }

    pub fn opacity(self, opacity: f32) -> Self {
        self.set("opacity", opacity.to_string())
    }

    // Typography

    pub fn font_size(self, size: Size) -> Self {
        self.set("font-size", size.to_css())
    }

    pub fn line_height(self, size: Size) -> Self {
        self.set("line-height", size.to_css())
    }

    /// Font size and line height together, the way utility frameworks pair them.
    pub fn text_size(self, size: Size, line_height: Size) -> Self {
        self.font_size(size).line_height(line_height)
    }

    pub fn font_weight(self, weight: u16) -> Self {
        self.set("font-weight", weight.to_string())
    }

    pub fn text_align(self, align: TextAlign) -> Self {
        self.set("text-align", align.as_css())
    }

    // Decoration

    pub fn radius(self, radius: Size) -> Self {
        self.set("border-radius", radius.to_css())
    }

    pub fn shadow(self, shadow: Shadow) -> Self {
        self.set("box-shadow", shadow.to_css())
    }

    pub fn transitions(self, transitions: &Transitions) -> Self {
        transitions
            .declarations()
            .into_iter()
            .fold(self, |style, (name, value)| style.set(name, value))
    }
}

/// A single `box-shadow` layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub x: Size,
    pub y: Size,
    pub blur: Size,
    pub spread: Size,
    pub color: Color,
}

impl Shadow {
    /// The subtle one-pixel drop shadow used on cards.
    pub const fn sm() -> Self {
        Self {
            x: Size::Zero,
            y: Size::Px(1.0),
            blur: Size::Px(2.0),
            spread: Size::Zero,
            color: Color::rgba(0, 0, 0, 0.05),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.x.to_css(),
            self.y.to_css(),
            self.blur.to_css(),
            self.spread.to_css(),
            self.color.to_css()
        )
    }
}

/// Style overrides that apply from a minimum viewport width upward.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoint {
    pub min_width: Size,
    pub style: Style,
}

impl Breakpoint {
    pub fn new(min_width: Size, style: Style) -> Self {
        Self { min_width, style }
    }
}
