//! The 16-byte unit every cipher operation works on.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, stored column-major: byte `i` sits in column `i >> 2`, row `i & 3`.
pub type Block = [u8; BLOCK_SIZE];
