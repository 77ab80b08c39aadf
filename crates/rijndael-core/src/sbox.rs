//! S-box construction from field inverses and the FIPS-197 affine transform.

/// Additive constant `c` of the affine transform (FIPS-197 eq. 5.1).
pub(crate) const AFFINE_CONSTANT: u8 = 0x63;

#[inline]
const fn bit(value: u8, index: u32) -> u8 {
    (value >> (index & 7)) & 1
}

/// Applies the S-box affine transform to a multiplicative inverse.
///
/// Output bit `b` is the XOR of input bits `b`, `b+4`, `b+5`, `b+6`, `b+7` (mod 8)
/// and bit `b` of [`AFFINE_CONSTANT`].
pub(crate) fn affine_transform(inv: u8) -> u8 {
    let mut out = 0u8;
    for b in 0..8u32 {
        let value = bit(inv, b)
            ^ bit(inv, b + 4)
            ^ bit(inv, b + 5)
            ^ bit(inv, b + 6)
            ^ bit(inv, b + 7)
            ^ bit(AFFINE_CONSTANT, b);
        out |= value << b;
    }
    out
}

/// Builds the forward S-box and its point inverse from a field inversion function.
pub(crate) fn build_sboxes(inv: impl Fn(u8) -> u8) -> ([u8; 256], [u8; 256]) {
    let mut sbox = [0u8; 256];
    let mut isbox = [0u8; 256];
    for a in 0..=255u8 {
        let s = affine_transform(inv(a));
        sbox[a as usize] = s;
        isbox[s as usize] = a;
    }
    (sbox, isbox)
}
