//! Key sizes and the expanded key schedule.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;
use crate::error::CipherError;

/// A key schedule word as four explicit bytes.
///
/// Byte `0` is the one injected into row 0 of its state column, so no machine
/// byte order is involved in rotation, substitution or round-key injection.
pub type Word = [u8; 4];

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// All key sizes, smallest first.
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Maps a raw key length in bytes to its key size.
    pub fn from_key_len(len: usize) -> Result<Self, CipherError> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            _ => Err(CipherError::InvalidKeyLength { len }),
        }
    }

    /// Maps a key size in bits (128, 192 or 256).
    pub fn from_bits(bits: usize) -> Option<Self> {
        Self::from_key_len(bits / 8).ok().filter(|_| bits % 8 == 0)
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /// Key length in bits.
    pub const fn bits(self) -> usize {
        self.key_len() * 8
    }

    /// Number of 32-bit words in the raw key (`Nk`).
    pub const fn key_words(self) -> usize {
        self.key_len() / 4
    }

    /// Number of rounds (`Nr`).
    pub const fn rounds(self) -> usize {
        self.key_words() + 6
    }

    /// Number of words in the expanded schedule, `4 * (Nr + 1)`.
    pub const fn schedule_words(self) -> usize {
        4 * (self.rounds() + 1)
    }
}

/// Expanded key schedule: `4 * (rounds + 1)` words, zeroed on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    words: Vec<Word>,
    #[zeroize(skip)]
    size: KeySize,
}

impl KeySchedule {
    pub(crate) fn new(words: Vec<Word>, size: KeySize) -> Self {
        debug_assert_eq!(words.len(), size.schedule_words());
        Self { words, size }
    }

    /// Key size this schedule was expanded from.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds driven by this schedule.
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// All schedule words in order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the round key at the requested index (`0..=rounds`) laid out like the state.
    #[inline]
    pub fn round_key(&self, round: usize) -> Block {
        let mut key = [0u8; 16];
        for (column, word) in self.words[round * 4..round * 4 + 4].iter().enumerate() {
            key[column * 4..column * 4 + 4].copy_from_slice(word);
        }
        key
    }
}

impl core::fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeySchedule")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
