use crate::MirrorFieldError;

/// The state of a single mirror-field grid cell.
///
/// Forms a cyclic group of order 3 under [`spin`](Self::spin)
/// (`Forward -> Straight -> Backward -> Forward`), plus one inert state that
/// never spins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorGlyph {
    /// `/`, code 0.
    Forward,
    /// `-`, code 1. Passes rays through unchanged but still counts as a
    /// mirror for spin purposes.
    Straight,
    /// `\`, code 2.
    Backward,
    /// ` `, code 3. No mirror; rays pass through and this cell never spins.
    Empty,
}

impl MirrorGlyph {
    /// Parses one of the four glyph bytes used in a serialised key.
    pub fn from_glyph(byte: u8) -> Result<Self, MirrorFieldError> {
        match byte {
            b'/' => Ok(MirrorGlyph::Forward),
            b'-' => Ok(MirrorGlyph::Straight),
            b'\\' => Ok(MirrorGlyph::Backward),
            b' ' => Ok(MirrorGlyph::Empty),
            byte => Err(MirrorFieldError::InvalidKeyGlyph { byte }),
        }
    }

    /// The glyph byte this cell would serialise to.
    pub fn to_glyph(self) -> u8 {
        match self {
            MirrorGlyph::Forward => b'/',
            MirrorGlyph::Straight => b'-',
            MirrorGlyph::Backward => b'\\',
            MirrorGlyph::Empty => b' ',
        }
    }

    /// Whether this cell reflects rays at all. `Straight` counts as a mirror
    /// even though it doesn't change direction, because it still spins.
    pub fn is_mirror(self) -> bool {
        !matches!(self, MirrorGlyph::Empty)
    }

    /// Advances the cell one spin step. Empty cells are fixed points.
    pub fn spin(self) -> Self {
        match self {
            MirrorGlyph::Forward => MirrorGlyph::Straight,
            MirrorGlyph::Straight => MirrorGlyph::Backward,
            MirrorGlyph::Backward => MirrorGlyph::Forward,
            MirrorGlyph::Empty => MirrorGlyph::Empty,
        }
    }

    /// Reverses one spin step. Used to undo the spin applied on a cell's
    /// first visit within a character, before it reflects a ray a second
    /// time. Empty cells are fixed points, so this is a no-op for them even
    /// though the underlying modular arithmetic (`(code + 2) % 3`) would
    /// otherwise turn an empty cell into a backward mirror; see the module
    /// docs for why that branch should never actually be reached.
    pub fn unspin(self) -> Self {
        match self {
            MirrorGlyph::Forward => MirrorGlyph::Backward,
            MirrorGlyph::Straight => MirrorGlyph::Forward,
            MirrorGlyph::Backward => MirrorGlyph::Straight,
            MirrorGlyph::Empty => MirrorGlyph::Empty,
        }
    }
}

/// Whether `byte` is one of the four glyphs a mirror-field grid cell can be
/// serialised as (`/`, `-`, `\`, ` `).
pub fn is_mirror_glyph(byte: u8) -> bool {
    matches!(byte, b'/' | b'-' | b'\\' | b' ')
}

/// Whether `byte` belongs to `alphabet`, i.e. could occupy a perimeter slot
/// drawn from it. The mirror-field alphabet isn't a single compile-time
/// charset (see [`SUPPORTED_CHARS`](super::SUPPORTED_CHARS) for the
/// convenience default) — `validate` itself only rejects duplicates, not
/// unsupported bytes — so this takes the alphabet the caller cares about
/// rather than assuming one.
pub fn is_supported(byte: u8, alphabet: &[u8]) -> bool {
    alphabet.contains(&byte)
}
