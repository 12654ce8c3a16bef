use crate::{MirrorFieldError, MirrorGlyph, RawKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineState {
    /// Accepting `set` calls; not yet fully loaded or validated.
    Loading,
    Ready,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Down,
    Left,
    Right,
    Up,
}

/// The mirror-field engine: a symmetric, stateful, single-character-at-a-time
/// cipher. See the [module docs](super) for the shape of the algorithm and
/// [`doc::mirrorfield`](crate::doc::mirrorfield) for a literate walkthrough.
///
/// A freshly constructed field starts in the `Loading` state. Feed it
/// exactly `N*N + 4*N` bytes with [`set`](Self::set) — the grid, row-major,
/// followed by the perimeter, in slot order — then call
/// [`validate`](Self::validate) to move it into `Ready`. Only a `Ready` field
/// accepts [`crypt`](Self::crypt) calls. Any loading or validation failure
/// moves the field to a terminal `Invalid` state; there is no way back out
/// of it.
///
/// Two independent `MirrorField`s loaded from byte-identical keys produce
/// byte-identical output for byte-identical input, and running the same
/// field's output back through a second field loaded from the same key
/// recovers the original input — encryption and decryption are the same
/// operation.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorField<const N: usize> {
    state: EngineState,
    loaded: usize,
    grid: Vec<MirrorGlyph>,
    perim: Vec<u8>,
    evenodd: bool,
    last_start: Option<usize>,
    last_end: Option<usize>,
}

impl<const N: usize> Default for MirrorField<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MirrorField<N> {
    /// Number of interior grid cells, `N*N`.
    pub const CELLS: usize = N * N;
    /// Number of perimeter slots, `4*N`.
    pub const PERIMETER: usize = 4 * N;

    /// Establishes a fresh field in the `Loading` state.
    pub fn new() -> Self {
        tracing::debug!(n = N, "initializing mirror field");
        Self {
            state: EngineState::Loading,
            loaded: 0,
            grid: vec![MirrorGlyph::Empty; Self::CELLS],
            perim: vec![0; Self::PERIMETER],
            evenodd: false,
            last_start: None,
            last_end: None,
        }
    }

    /// Loads and validates a field in one step from an already-decoded key.
    pub fn from_key(key: &RawKey<N>) -> Result<Self, MirrorFieldError> {
        let mut field = Self::new();
        for byte in key.to_bytes() {
            field.set(byte)?;
        }
        field.validate()?;
        Ok(field)
    }

    /// Feeds one byte of the serialised key (see [`RawKey::to_bytes`]) into
    /// the field. The first `N*N` calls populate the grid; the next `4*N`
    /// populate the perimeter. Any call beyond that, or any grid byte that
    /// isn't one of `/`, `\`, `-`, ` `, moves the field to `Invalid` and
    /// returns an error.
    pub fn set(&mut self, byte: u8) -> Result<(), MirrorFieldError> {
        if self.state != EngineState::Loading {
            tracing::debug!(byte, "set called outside the loading phase");
            return Err(MirrorFieldError::OverflowingKey);
        }
        if self.loaded < Self::CELLS {
            match MirrorGlyph::from_glyph(byte) {
                Ok(glyph) => self.grid[self.loaded] = glyph,
                Err(err) => {
                    self.state = EngineState::Invalid;
                    return Err(err);
                }
            }
        } else if self.loaded < Self::CELLS + Self::PERIMETER {
            self.perim[self.loaded - Self::CELLS] = byte;
        } else {
            self.state = EngineState::Invalid;
            return Err(MirrorFieldError::OverflowingKey);
        }
        self.loaded += 1;
        Ok(())
    }

    /// Gates the field from `Loading` to `Ready`. Fails if fewer than
    /// `N*N + 4*N` bytes were loaded, or if the perimeter holds a duplicate
    /// byte. Grid bytes are always valid by this point, since [`set`](Self::set)
    /// rejects an invalid glyph immediately instead of storing it.
    pub fn validate(&mut self) -> Result<(), MirrorFieldError> {
        if self.loaded != Self::CELLS + Self::PERIMETER {
            self.state = EngineState::Invalid;
            return Err(MirrorFieldError::NotReady);
        }
        let mut seen = [false; 256];
        for &byte in &self.perim {
            if seen[byte as usize] {
                self.state = EngineState::Invalid;
                return Err(MirrorFieldError::DuplicatePerimeter { byte });
            }
            seen[byte as usize] = true;
        }
        self.state = EngineState::Ready;
        tracing::debug!(n = N, "mirror field validated");
        Ok(())
    }

    /// Transforms one character by routing it through the grid as a ray,
    /// mutating the grid and perimeter along the way. Returns
    /// [`MirrorFieldError::NotReady`] if the field hasn't been validated, or
    /// [`MirrorFieldError::UnknownInput`] if `ch` isn't on the perimeter —
    /// both checked before any state is touched, so a failing call never
    /// partially mutates the field.
    #[docext::docext]
    pub fn crypt(&mut self, ch: u8) -> Result<u8, MirrorFieldError> {
        if self.state != EngineState::Ready {
            return Err(MirrorFieldError::NotReady);
        }
        // Find the perimeter slot holding `ch` before touching any state.
        // The original scans and falls through with an out-of-bounds index
        // if the character isn't found; we reject it cleanly instead.
        let start = self
            .perim
            .iter()
            .position(|&b| b == ch)
            .ok_or(MirrorFieldError::UnknownInput { byte: ch })?;

        // Parity toggles once per successfully resolved character.
        self.evenodd = !self.evenodd;

        let end = self.trace(start);
        let mut ech = self.perim[end];

        // Fixed-point rule: a perimeter slot whose byte value equals its own
        // index self-encrypts on alternate (evenodd) occurrences, which is
        // what keeps the traversal's self-inverse property intact.
        if self.perim[start] as usize == start || self.perim[end] as usize == end {
            if self.evenodd {
                ech = self.perim[start];
            }
        }

        self.roll(start, end);
        Ok(ech)
    }

    /// Whether `byte` currently occupies some perimeter slot.
    pub fn perim_contains(&self, byte: u8) -> bool {
        self.perim.contains(&byte)
    }

    /// Whether grid cell `index` is currently empty.
    pub fn cell_is_empty(&self, index: usize) -> bool {
        self.grid[index] == MirrorGlyph::Empty
    }

    /// Rides a ray from perimeter slot `start` through the grid, mutating
    /// mirrors along the way, and returns the perimeter slot it exits at.
    fn trace(&mut self, start: usize) -> usize {
        let n = N as isize;
        let (mut r, mut c, mut dir) = entry(N, start);
        let mut visited = vec![false; Self::CELLS];

        loop {
            let t = (r as usize) * N + (c as usize);

            if visited[t] {
                // Un-spin before reflecting a second time off the same cell.
                // Only mirror cells are ever marked visited (see below), so
                // this branch can't actually observe an empty cell; the
                // guard keeps it that way rather than relying on that fact.
                if self.grid[t].is_mirror() {
                    self.grid[t] = self.grid[t].unspin();
                }
            }

            dir = reflect(dir, self.grid[t]);

            if self.grid[t].is_mirror() {
                self.grid[t] = self.grid[t].spin();
                visited[t] = true;
            }

            #[cfg(feature = "trace-steps")]
            tracing::trace!(r, c, ?dir, "ray step");

            match dir {
                Direction::Down => {
                    r += 1;
                    if r == n {
                        return (c as usize) + 3 * N;
                    }
                }
                Direction::Left => {
                    c -= 1;
                    if c == -1 {
                        return (r as usize) + 2 * N;
                    }
                }
                Direction::Right => {
                    c += 1;
                    if c == n {
                        return (r as usize) + N;
                    }
                }
                Direction::Up => {
                    r -= 1;
                    if r == -1 {
                        return c as usize;
                    }
                }
            }
        }
    }

    /// Mutates the perimeter after a character, so the substitution keeps
    /// shifting as the message is processed.
    fn roll(&mut self, s: usize, e: usize) {
        let p = Self::PERIMETER;
        let half = N / 2;

        let mut rs = (s + self.perim[s] as usize + self.perim[neighbor(s)] as usize) % p;
        while rs == s || rs == e || Some(rs) == self.last_start || Some(rs) == self.last_end {
            rs = (rs + half) % p;
        }

        let mut re = (e + self.perim[e] as usize + self.perim[neighbor(e)] as usize) % p;
        while re == e || re == s || Some(re) == self.last_end || Some(re) == self.last_start {
            re = (re + half) % p;
        }

        // Roll the larger-valued slot first; only matters when the two roll
        // targets collide, but must be reproduced exactly for compatibility.
        if self.perim[s] > self.perim[e] {
            self.perim.swap(s, rs);
            self.perim.swap(e, re);
        } else {
            self.perim.swap(e, re);
            self.perim.swap(s, rs);
        }

        self.last_start = Some(s);
        self.last_end = Some(e);
    }
}

/// `neigh(x)` from the roll procedure: the adjacent perimeter slot used to
/// seed the roll target, wrapping at the low end only.
fn neighbor(x: usize) -> usize {
    if x == 0 {
        x + 1
    } else {
        x - 1
    }
}

/// Maps a perimeter slot to its grid entry point and initial ray direction.
fn entry(n: usize, slot: usize) -> (isize, isize, Direction) {
    if slot < n {
        (0, slot as isize, Direction::Down)
    } else if slot < 2 * n {
        ((slot - n) as isize, (n - 1) as isize, Direction::Left)
    } else if slot < 3 * n {
        ((slot - 2 * n) as isize, 0, Direction::Right)
    } else {
        ((n - 1) as isize, (slot - 3 * n) as isize, Direction::Up)
    }
}

/// Changes direction according to the mirror at the current cell.
/// `Straight` and `Empty` cells never redirect a ray.
fn reflect(dir: Direction, glyph: MirrorGlyph) -> Direction {
    match glyph {
        MirrorGlyph::Forward => match dir {
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Right,
        },
        MirrorGlyph::Backward => match dir {
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Up,
            Direction::Right => Direction::Down,
            Direction::Up => Direction::Left,
        },
        MirrorGlyph::Straight | MirrorGlyph::Empty => dir,
    }
}
