use crate::{Csprng, MirrorGlyph, RawKey};

/// Default mirror density divisor from the original key generator: a cell
/// is mirrored on roughly 2 of every `DEFAULT_DENSITY` draws, the rest empty.
pub const DEFAULT_DENSITY: u32 = 6;

/// Default number of [`shuffle`] rounds.
pub const DEFAULT_SHUFFLE_ROUNDS: usize = 1000;

/// Generates fresh [`RawKey`]s.
///
/// The grid is filled by independently drawing each cell from
/// `uniform{0..density-1}`, emitting a forward mirror on `1`, a backward
/// mirror on `2`, and leaving every other draw empty. The perimeter is
/// produced by [`shuffle`]ing the caller-supplied alphabet. Straight mirrors
/// are never generated this way, matching the original generator; they may
/// still appear in hand-authored keys, which the engine handles just fine.
#[derive(Debug, Clone, Copy)]
pub struct MirrorFieldKeyGenerator {
    density: u32,
    shuffle_rounds: usize,
}

impl Default for MirrorFieldKeyGenerator {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            shuffle_rounds: DEFAULT_SHUFFLE_ROUNDS,
        }
    }
}

impl MirrorFieldKeyGenerator {
    /// `density` is the divisor used when drawing each cell's state; `rounds`
    /// is the number of [`shuffle`] iterations used to scramble the
    /// perimeter. The original used `6` and `1000` respectively.
    pub fn new(density: u32, shuffle_rounds: usize) -> Self {
        Self {
            density,
            shuffle_rounds,
        }
    }

    /// Generates a key for an `N`-sized grid out of `alphabet`, which must
    /// contain exactly `4*N` distinct bytes in the order they should start
    /// out on the perimeter.
    ///
    /// A mismatched alphabet length is a programming error on the caller's
    /// part, not a condition the mirror-field key format itself can express,
    /// so it is asserted rather than returned as a [`MirrorFieldError`].
    ///
    /// [`MirrorFieldError`]: crate::MirrorFieldError
    pub fn generate<const N: usize, R: Csprng>(&self, rng: &mut R, alphabet: &[u8]) -> RawKey<N> {
        assert_eq!(
            alphabet.len(),
            RawKey::<N>::PERIMETER,
            "alphabet must contain exactly 4*N bytes"
        );

        let grid = (0..RawKey::<N>::CELLS)
            .map(|_| match uniform(rng, self.density) {
                1 => MirrorGlyph::Forward,
                2 => MirrorGlyph::Backward,
                _ => MirrorGlyph::Empty,
            })
            .collect();

        let mut perim = alphabet.to_vec();
        shuffle(rng, &mut perim, self.shuffle_rounds);

        RawKey { grid, perim }
    }
}

/// Draws a uniform value in `0..bound` from `rng`, rejecting bytes that
/// would bias the result toward the low end of the range.
fn uniform<R: Csprng>(rng: &mut R, bound: u32) -> u32 {
    assert!(bound > 0 && bound <= 256, "bound must fit in a byte");
    let limit = 256 - (256 % bound);
    loop {
        let x = rng.next() as u32;
        if x < limit {
            return x % bound;
        }
    }
}

/// The biased but deterministic scrambler used to turn an ordered alphabet
/// into a perimeter permutation. It must be reproduced exactly, byte for
/// byte against the same RNG output, for on-disk key compatibility.
///
/// One slot is chosen and held aside as `carry`; `rounds` times, a different
/// random slot is chosen, the carried byte is dropped into it, and the
/// displaced byte becomes the new carry. Finally the carry is dropped into
/// the originally chosen slot. Because every step is a swap, the result is
/// guaranteed to be a permutation of the input.
pub fn shuffle<R: Csprng>(rng: &mut R, s: &mut [u8], rounds: usize) {
    let len = s.len();
    let s_index = uniform(rng, len as u32) as usize;
    let mut carry = s[s_index];
    for _ in 0..rounds {
        let mut r_index = uniform(rng, len as u32) as usize;
        while r_index == s_index {
            r_index = uniform(rng, len as u32) as usize;
        }
        let next = s[r_index];
        s[r_index] = carry;
        carry = next;
    }
    s[s_index] = carry;
}
