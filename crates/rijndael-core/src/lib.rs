//! From-scratch AES (Rijndael) implementation with 128, 192 and 256-bit keys.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - GF(2^8) logarithm tables and S-boxes generated at runtime rather than hardcoded.
//! - Key schedule expansion for all three key sizes.
//! - Single-block encryption and decryption through a [`CipherContext`].
//! - Buffer-level helpers that zero-pad and process each block independently.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened. The buffer
//! helpers are ECB-equivalent and provide no authentication, no chaining between
//! blocks and no reversible padding.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod chunk;
mod cipher;
mod context;
mod error;
mod gf256;
mod key;
pub mod round;
mod sbox;
mod tables;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::chunk::padded_len;
pub use crate::cipher::{decrypt_state, encrypt_state, expand_key};
pub use crate::context::CipherContext;
pub use crate::error::CipherError;
pub use crate::gf256::gf_mul_manual;
pub use crate::key::{KeySchedule, KeySize, Word};
pub use crate::tables::Gf256Tables;
