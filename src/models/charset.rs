//! Character set selection types

/// Selectable character sets
///
/// Mapped to their single-byte designators at encode time. The closed enum
/// means an invalid selection cannot reach the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterSet {
    /// United States (ASCII)
    UnitedStates,
    /// United Kingdom
    UnitedKingdom,
    /// DEC special graphics (line drawing)
    Drawing,
    /// Alternate character ROM
    Alternate,
    /// Alternate character ROM, special graphics
    AlternateSpecial,
}

impl CharacterSet {
    /// Final byte of the designation sequence
    pub(crate) fn code(self) -> u8 {
        match self {
            CharacterSet::UnitedStates => b'B',
            CharacterSet::UnitedKingdom => b'A',
            CharacterSet::Drawing => b'0',
            CharacterSet::Alternate => b'1',
            CharacterSet::AlternateSpecial => b'2',
        }
    }
}

/// Character set slot a set is designated into
///
/// G2 and G3 cannot be designated, only shifted to (see
/// `ServerTerminal::single_shift2` / `single_shift3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharsetSlot {
    G0,
    G1,
}

impl CharsetSlot {
    /// Intermediate byte selecting this slot
    pub(crate) fn designator(self) -> u8 {
        match self {
            CharsetSlot::G0 => b'(',
            CharsetSlot::G1 => b')',
        }
    }
}
