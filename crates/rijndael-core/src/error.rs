//! Error type shared by context creation and the buffer helpers.

use thiserror::Error;

/// Errors returned by the cipher API.
///
/// Decrypting corrupted or foreign ciphertext is not an error: raw AES has no
/// integrity check and simply yields unrelated plaintext.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The key is not 16, 24 or 32 bytes long.
    #[error("invalid key length {len}: expected 16, 24 or 32 bytes")]
    InvalidKeyLength {
        /// Length of the rejected key in bytes.
        len: usize,
    },
    /// A key schedule or output buffer could not be allocated.
    #[error("failed to allocate cipher buffer")]
    AllocationFailure,
    /// Ciphertext handed to decryption is not a whole number of blocks.
    #[error("input length {len} is not a multiple of the 16-byte block size")]
    UnalignedInput {
        /// Length of the rejected input in bytes.
        len: usize,
    },
    /// A length-preserving decrypt asked for more bytes than the padded plaintext holds.
    #[error("requested plaintext length {requested} exceeds decrypted length {available}")]
    PlaintextLengthOutOfRange {
        /// Plaintext length the caller asked for.
        requested: usize,
        /// Number of bytes actually decrypted.
        available: usize,
    },
}
