pub mod mirrorfield;

pub use mirrorfield::{
    crypt_stream,
    decrypt_stream,
    encrypt_stream,
    is_mirror_glyph,
    is_supported,
    MirrorField,
    MirrorFieldError,
    MirrorFieldKeyGenerator,
    MirrorGlyph,
    RawKey,
    DEFAULT_DENSITY,
    DEFAULT_SHUFFLE_ROUNDS,
    SUPPORTED_CHARS,
};
