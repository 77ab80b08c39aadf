//! Arithmetic in GF(2^8) with the AES reduction polynomial.

/// Reduction polynomial `x^8 + x^4 + x^3 + x + 1`.
pub(crate) const REDUCTION_POLY: u16 = 0x011b;

/// Generator of the multiplicative group used for the logarithm tables (`x + 1`).
pub(crate) const GENERATOR: u8 = 0x03;

/// Order of the multiplicative group of GF(2^8).
pub(crate) const GROUP_ORDER: usize = 255;

/// Multiplies two field elements with the shift-and-reduce algorithm.
///
/// This is the slow path used to bootstrap the logarithm tables; once they exist,
/// [`Gf256Tables::mul`](crate::Gf256Tables::mul) is the multiplication used by the cipher.
pub const fn gf_mul_manual(a: u8, mut b: u8) -> u8 {
    let mut acc = a as u16;
    let mut product = 0u8;
    while b != 0 {
        if b & 0x01 != 0 {
            product ^= acc as u8;
        }
        acc <<= 1;
        b >>= 1;
        if acc & 0x0100 != 0 {
            acc ^= REDUCTION_POLY;
        }
    }
    product
}

/// Builds the discrete logarithm table and its inverse under [`GENERATOR`].
///
/// `log[0]` has no meaning and is left at zero; `ilog` is only populated for
/// exponents `0..255`, so lookups must reduce the exponent modulo [`GROUP_ORDER`].
pub(crate) fn log_tables() -> ([u8; 256], [u8; 256]) {
    let mut log = [0u8; 256];
    let mut ilog = [0u8; 256];
    let mut g = 1u8;
    for exponent in 0..GROUP_ORDER {
        log[g as usize] = exponent as u8;
        ilog[exponent] = g;
        g = gf_mul_manual(g, GENERATOR);
    }
    (log, ilog)
}
