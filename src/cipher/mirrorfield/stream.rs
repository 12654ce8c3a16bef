use crate::{Ciphertext, Key, MirrorField, MirrorFieldError, Plaintext, RawKey};

/// Runs every byte of `data` through a freshly loaded [`MirrorField`].
///
/// Because encryption and decryption are the same state-evolving operation
/// (see the [module docs](super)), this single function backs both
/// [`encrypt_stream`] and [`decrypt_stream`] — they differ only in which
/// wrapper type the caller gets back.
pub fn crypt_stream<const N: usize>(data: &[u8], key: &RawKey<N>) -> Result<Vec<u8>, MirrorFieldError> {
    let mut field = MirrorField::from_key(key)?;
    data.iter().map(|&byte| field.crypt(byte)).collect()
}

/// Encrypts `data` under `key`, loading a fresh [`MirrorField`] for the
/// operation.
pub fn encrypt_stream<const N: usize>(
    data: Plaintext<&[u8]>,
    key: Key<&RawKey<N>>,
) -> Result<Ciphertext<Vec<u8>>, MirrorFieldError> {
    crypt_stream(data.0, key.0).map(Ciphertext)
}

/// Decrypts `data` under `key`, loading a fresh [`MirrorField`] for the
/// operation. Two parties must start from byte-identical keys and process
/// their respective streams in the same order for this to recover the
/// original plaintext.
pub fn decrypt_stream<const N: usize>(
    data: Ciphertext<&[u8]>,
    key: Key<&RawKey<N>>,
) -> Result<Plaintext<Vec<u8>>, MirrorFieldError> {
    crypt_stream(data.0, key.0).map(Plaintext)
}
