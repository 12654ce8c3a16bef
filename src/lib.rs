#[cfg(test)]
mod test;

#[cfg(doc)]
pub mod doc;

mod cipher;
mod key;
mod random;
mod text;

pub use {
    cipher::{
        crypt_stream,
        decrypt_stream,
        encrypt_stream,
        is_mirror_glyph,
        is_supported,
        mirrorfield,
        MirrorField,
        MirrorFieldError,
        MirrorFieldKeyGenerator,
        MirrorGlyph,
        RawKey,
        DEFAULT_DENSITY,
        DEFAULT_SHUFFLE_ROUNDS,
        SUPPORTED_CHARS,
    },
    key::Key,
    random::{Csprng, RandCsprng},
    text::{Ciphertext, Plaintext},
};
