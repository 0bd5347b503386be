//! Graphic rendition attributes

/// Character attributes for select-graphic-rendition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Disable all attributes
    Normal,
    Bold,
    Underline,
    Blink,
    ReverseVideo,
}

impl Attribute {
    /// SGR parameter code for this attribute
    pub(crate) fn sgr_code(self) -> u8 {
        match self {
            Attribute::Normal => 0,
            Attribute::Bold => 1,
            Attribute::Underline => 4,
            Attribute::Blink => 5,
            Attribute::ReverseVideo => 7,
        }
    }
}
