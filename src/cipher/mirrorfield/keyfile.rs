use crate::{MirrorFieldError, MirrorGlyph};

/// A convenience default alphabet: every printable ASCII character, in
/// order. Mirrors the original generator's habit of drawing its perimeter
/// from a fixed printable charset rather than forcing every caller to spell
/// one out. Callers with a `4*N` that doesn't divide evenly into this range
/// should supply their own alphabet instead; this is a starting point, not
/// an enforced part of the key format (see [`RawKey::new`]'s lack of an
/// alphabet-membership check, per spec: uniqueness is all that's required).
pub const SUPPORTED_CHARS: &[u8] = {
    const fn printable_ascii() -> [u8; 95] {
        let mut chars = [0u8; 95];
        let mut i = 0;
        while i < 95 {
            chars[i] = 0x20 + i as u8;
            i += 1;
        }
        chars
    }
    const CHARS: [u8; 95] = printable_ascii();
    &CHARS
};

/// The decoded contents of a mirror-field key: the grid of cells and the
/// perimeter permutation, before either is fed into a [`MirrorField`].
///
/// This is the in-memory representation of the flat `N*N + 4*N` character
/// stream described by the key format; the base64-per-character wrapping
/// used to put that stream on disk is an external collaborator's concern,
/// not this crate's.
///
/// [`MirrorField`]: super::MirrorField
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKey<const N: usize> {
    /// Row-major grid of `N*N` cells.
    pub grid: Vec<MirrorGlyph>,
    /// The `4*N` perimeter bytes, in slot order.
    pub perim: Vec<u8>,
}

impl<const N: usize> RawKey<N> {
    /// Number of interior grid cells.
    pub const CELLS: usize = N * N;
    /// Number of perimeter slots.
    pub const PERIMETER: usize = 4 * N;
    /// Total serialised length.
    pub const LEN: usize = Self::CELLS + Self::PERIMETER;

    /// Builds a key from an already-decoded grid and perimeter, checking the
    /// same invariants [`MirrorField::validate`](super::MirrorField::validate)
    /// does: grid length, perimeter length, and perimeter uniqueness.
    pub fn new(grid: Vec<MirrorGlyph>, perim: Vec<u8>) -> Result<Self, MirrorFieldError> {
        if grid.len() != Self::CELLS || perim.len() != Self::PERIMETER {
            return Err(MirrorFieldError::OverflowingKey);
        }
        check_unique(&perim)?;
        Ok(Self { grid, perim })
    }

    /// Serialises the key to the flat byte stream consumed by
    /// [`MirrorField::set`](super::MirrorField::set): row-major grid cells
    /// first, then the perimeter in slot order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::LEN);
        out.extend(self.grid.iter().copied().map(MirrorGlyph::to_glyph));
        out.extend_from_slice(&self.perim);
        out
    }

    /// Parses a flat byte stream produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MirrorFieldError> {
        if bytes.len() != Self::LEN {
            return Err(MirrorFieldError::OverflowingKey);
        }
        let grid = bytes[..Self::CELLS]
            .iter()
            .map(|&b| MirrorGlyph::from_glyph(b))
            .collect::<Result<Vec<_>, _>>()?;
        let perim = bytes[Self::CELLS..].to_vec();
        check_unique(&perim)?;
        Ok(Self { grid, perim })
    }
}

fn check_unique(perim: &[u8]) -> Result<(), MirrorFieldError> {
    let mut seen = [false; 256];
    for &byte in perim {
        if seen[byte as usize] {
            return Err(MirrorFieldError::DuplicatePerimeter { byte });
        }
        seen[byte as usize] = true;
    }
    Ok(())
}
