//! Process-wide GF(2^8) lookup tables.

use std::sync::OnceLock;

use tracing::debug;

use crate::gf256::{log_tables, GROUP_ORDER};
use crate::sbox::build_sboxes;

static GLOBAL: OnceLock<Gf256Tables> = OnceLock::new();

/// Discrete logarithm tables and S-boxes, generated rather than hardcoded.
///
/// A value is immutable once built. [`Gf256Tables::global`] hands out a lazily
/// initialized process-wide instance; [`Gf256Tables::build`] produces an independent
/// one that can be threaded explicitly into
/// [`CipherContext::with_tables`](crate::CipherContext::with_tables).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gf256Tables {
    log: [u8; 256],
    ilog: [u8; 256],
    sbox: [u8; 256],
    isbox: [u8; 256],
}

impl Gf256Tables {
    /// Generates the logarithm tables and both S-boxes.
    pub fn build() -> Self {
        let (log, ilog) = log_tables();
        let mut tables = Self {
            log,
            ilog,
            sbox: [0u8; 256],
            isbox: [0u8; 256],
        };
        let (sbox, isbox) = build_sboxes(|a| tables.inv(a));
        tables.sbox = sbox;
        tables.isbox = isbox;
        debug!("generated GF(2^8) logarithm tables and S-boxes");
        tables
    }

    /// Returns the shared tables, building them on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::build)
    }

    /// Multiplies two field elements through the logarithm tables.
    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let exponent = self.log[a as usize] as usize + self.log[b as usize] as usize;
        self.ilog[exponent % GROUP_ORDER]
    }

    /// Multiplicative inverse, with `inv(0) == 0` by convention.
    #[inline]
    pub fn inv(&self, a: u8) -> u8 {
        if a == 0 {
            return 0;
        }
        // log[1] == 0 would index ilog[255], which the generator never reaches.
        self.ilog[(GROUP_ORDER - self.log[a as usize] as usize) % GROUP_ORDER]
    }

    /// Forward S-box lookup.
    #[inline]
    pub fn sbox(&self, x: u8) -> u8 {
        self.sbox[x as usize]
    }

    /// Inverse S-box lookup.
    #[inline]
    pub fn inv_sbox(&self, x: u8) -> u8 {
        self.isbox[x as usize]
    }

    /// Discrete logarithm table; entry 0 is unused.
    pub fn log_table(&self) -> &[u8; 256] {
        &self.log
    }

    /// Antilogarithm table (powers of the generator); entry 255 is unused.
    pub fn ilog_table(&self) -> &[u8; 256] {
        &self.ilog
    }

    /// The full forward S-box.
    pub fn sbox_table(&self) -> &[u8; 256] {
        &self.sbox
    }

    /// The full inverse S-box.
    pub fn inv_sbox_table(&self) -> &[u8; 256] {
        &self.isbox
    }
}
