//! A mirror-field key is a square grid of cells, each either empty or
//! holding a mirror, surrounded on all four sides by a permutation of the
//! supported alphabet. Every alphabet character therefore owns exactly one
//! perimeter slot, and every slot identifies both an edge position and a
//! direction a ray enters the grid from.
//!
//! # Tracing a character
//!
//! Encrypting a character means finding its slot on the perimeter, firing a
//! ray into the grid from that slot's position and direction, and following
//! it until it exits the grid through some other slot. The character
//! assigned to the exit slot is the result.
//!
//! A forward mirror (`/`) and a backward mirror (`\`) redirect the ray the
//! way an actual mirror would; a straight mirror (`-`) and an empty cell let
//! it pass untouched, but only the straight mirror still counts as a mirror
//! for the next step.
//!
//! # Spin
//!
//! Every mirror the ray touches advances one step around a 3-state cycle
//! (`/ -> - -> \ -> /`) once the ray has passed it. This is what makes the
//! cipher dynamic: the same input character rarely traces the same path
//! twice, because the grid it's tracing through keeps changing underneath
//! it.
//!
//! If a single ray crosses the same cell twice while tracing one character
//! — which can happen once a path loops back on itself — the second
//! encounter first undoes the first encounter's spin, so a cell is never
//! spun more than once per character no matter how many times a single ray
//! bounces off it.
//!
//! # Roll
//!
//! After a character is resolved, the perimeter itself is disturbed: the
//! slot the ray entered and the slot it exited are each swapped with a
//! different slot, derived from the current perimeter contents so the
//! target shifts unpredictably from one character to the next. This keeps
//! the substitution from settling into a fixed pattern even for long runs
//! of the same input character.
//!
//! # Why encryption and decryption are the same operation
//!
//! Running a message through a field produces ciphertext; running that
//! ciphertext through a second field loaded from the same key recovers the
//! message. This works because every step of the algorithm is symmetric in
//! the entry and exit slot: the traversal itself doesn't care which
//! direction it's conceptually going, the spin-then-unspin rule on a
//! doubly-visited cell leaves the grid in the same state it would reach
//! either way, and the roll procedure treats its two slots symmetrically.
//! The one place where direction matters — a fixed-point slot whose value
//! equals its own index — is guarded by a parity bit that toggles the same
//! way for both parties as long as they process characters in the same
//! order from the same starting key.
