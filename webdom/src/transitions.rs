use std::time::Duration;

/// Timing function for CSS transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// `cubic-bezier(0.4, 0, 0.2, 1)`, the usual utility-framework default.
    Standard,
}

impl Easing {
    pub const fn as_css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Standard => "cubic-bezier(0.4, 0, 0.2, 1)",
        }
    }
}

/// Transitions configuration for an element.
/// Similar to Style, this is a builder for configuring property transitions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transitions {
    properties: Vec<&'static str>,
    duration: Duration,
    easing: Easing,
}

impl Transitions {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            properties: Vec::new(),
            duration,
            easing,
        }
    }

    pub fn property(mut self, name: &'static str) -> Self {
        if !self.properties.contains(&name) {
            self.properties.push(name);
        }
        self
    }

    /// Set transition for colors (background, border, text, svg fill/stroke).
    pub fn colors(self) -> Self {
        self.property("background-color")
            .property("border-color")
            .property("color")
            .property("fill")
            .property("stroke")
    }

    /// Colors plus opacity, shadow and transform.
    pub fn all_visual(self) -> Self {
        self.colors()
            .property("opacity")
            .property("box-shadow")
            .property("transform")
    }

    /// Returns true if any transition is configured.
    pub fn has_any(&self) -> bool {
        !self.properties.is_empty()
    }

    pub(crate) fn declarations(&self) -> Vec<(&'static str, String)> {
        if !self.has_any() {
            return Vec::new();
        }
        vec![
            ("transition-duration", format!("{}ms", self.duration.as_millis())),
            ("transition-property", self.properties.join(", ")),
            ("transition-timing-function", self.easing.as_css().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_transitions_emit_nothing() {
        let t = Transitions::new(Duration::from_millis(300), Easing::Linear);
        assert!(!t.has_any());
        assert!(t.declarations().is_empty());
    }

    #[test]
    fn duplicate_properties_are_ignored() {
        let t = Transitions::new(Duration::from_millis(150), Easing::EaseOut)
            .property("color")
            .colors();
        let decls = t.declarations();
        assert_eq!(decls[0], ("transition-duration", "150ms".to_string()));
        assert_eq!(
            decls[1].1,
            "color, background-color, border-color, fill, stroke"
        );
        assert_eq!(decls[2].1, "ease-out");
    }
}
