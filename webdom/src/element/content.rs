#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    /// Escaped on output.
    Text(String),
    Children(Vec<super::Element>),
    /// Emitted verbatim. Only stylesheet bodies use this.
    Raw(String),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(s) | Self::Raw(s) => s.is_empty(),
            Self::Children(c) => c.is_empty(),
        }
    }
}
