//! The mirror-field cipher: a symmetric character-stream cipher whose key is
//! a square grid of self-mutating mirrors surrounded by a permutation of the
//! supported alphabet. Each character is routed as a light ray entering the
//! grid from its assigned perimeter slot, bouncing off mirrors, and exiting
//! at another slot whose character is the result. After each character, the
//! mirrors it touched spin and the perimeter is rolled, so the substitution
//! keeps changing as the message is processed.
//!
//! Encryption and decryption are the same operation: running a message
//! through a [`MirrorField`] loaded from a key produces the ciphertext;
//! running that ciphertext through a second field loaded from the same key
//! recovers the original message, because the traversal is symmetric in its
//! entry and exit points and the roll procedure is symmetric in its two
//! slots. See [`doc::mirrorfield`](crate::doc::mirrorfield) for the details.
//!
//! No security claim is made for this cipher. There is no authentication, no
//! integrity check, and no key derivation; the design preserves the
//! original algorithm exactly.

mod engine;
mod error;
mod glyph;
mod keyfile;
mod keygen;
mod stream;

pub use {
    engine::MirrorField,
    error::MirrorFieldError,
    glyph::{is_mirror_glyph, is_supported, MirrorGlyph},
    keyfile::{RawKey, SUPPORTED_CHARS},
    keygen::{MirrorFieldKeyGenerator, DEFAULT_DENSITY, DEFAULT_SHUFFLE_ROUNDS},
    stream::{crypt_stream, decrypt_stream, encrypt_stream},
};
