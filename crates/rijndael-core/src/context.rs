//! Cipher context: one expanded key schedule plus a reusable working state.

use tracing::debug;
use zeroize::Zeroize;

use crate::block::Block;
use crate::cipher::{decrypt_state, encrypt_state, expand_key};
use crate::error::CipherError;
use crate::key::{KeySchedule, KeySize};
use crate::tables::Gf256Tables;

/// Expanded key plus working state for single-block encryption and decryption.
///
/// Block operations borrow the context mutably because they run through the
/// embedded state; use one context per thread. The schedule and state are zeroed
/// when the context is released or dropped.
pub struct CipherContext<'t> {
    tables: &'t Gf256Tables,
    schedule: KeySchedule,
    state: Block,
}

impl CipherContext<'static> {
    /// Creates a context for a 16, 24 or 32-byte key using the process-wide tables.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Self::with_tables(Gf256Tables::global(), key)
    }
}

impl<'t> CipherContext<'t> {
    /// Creates a context that reads from the given tables.
    pub fn with_tables(tables: &'t Gf256Tables, key: &[u8]) -> Result<Self, CipherError> {
        let schedule = expand_key(tables, key)?;
        debug!(rounds = schedule.rounds(), "created cipher context");
        Ok(Self {
            tables,
            schedule,
            state: [0u8; 16],
        })
    }

    /// Key size the context was created with.
    pub fn key_size(&self) -> KeySize {
        self.schedule.key_size()
    }

    /// Number of rounds per block.
    pub fn rounds(&self) -> usize {
        self.schedule.rounds()
    }

    /// The expanded key schedule.
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Tables the context reads from.
    pub fn tables(&self) -> &'t Gf256Tables {
        self.tables
    }

    /// Encrypts one 16-byte block.
    pub fn encrypt_block(&mut self, input: &Block) -> Block {
        self.state = *input;
        encrypt_state(&mut self.state, &self.schedule, self.tables);
        self.state
    }

    /// Decrypts one 16-byte block.
    pub fn decrypt_block(&mut self, input: &Block) -> Block {
        self.state = *input;
        decrypt_state(&mut self.state, &self.schedule, self.tables);
        self.state
    }

    /// Releases the context, zeroing the key schedule and working state.
    pub fn release(self) {
        debug!(rounds = self.rounds(), "released cipher context");
    }
}

impl Drop for CipherContext<'_> {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl core::fmt::Debug for CipherContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CipherContext")
            .field("key_size", &self.key_size())
            .field("rounds", &self.rounds())
            .finish_non_exhaustive()
    }
}
