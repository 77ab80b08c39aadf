//! AES round transformations over a column-major 16-byte state.
//!
//! Byte `i` of the state holds row `i & 3` of column `i >> 2`.

use crate::block::Block;
use crate::tables::Gf256Tables;

const MIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

#[inline]
const fn index(row: usize, column: usize) -> usize {
    column * 4 + row
}

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block, tables: &Gf256Tables) {
    for byte in state.iter_mut() {
        *byte = tables.sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block, tables: &Gf256Tables) {
    for byte in state.iter_mut() {
        *byte = tables.inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let mut tmp = [0u8; 16];
    for row in 0..4 {
        for column in 0..4 {
            tmp[index(row, column)] = state[index(row, (column + row) & 3)];
        }
    }
    *state = tmp;
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r` columns.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let mut tmp = [0u8; 16];
    for row in 0..4 {
        for column in 0..4 {
            tmp[index(row, (column + row) & 3)] = state[index(row, column)];
        }
    }
    *state = tmp;
}

fn mix_single_column(col: &mut [u8; 4], matrix: &[[u8; 4]; 4], tables: &Gf256Tables) {
    let input = *col;
    for (out, coefficients) in col.iter_mut().zip(matrix.iter()) {
        *out = coefficients
            .iter()
            .zip(input.iter())
            .fold(0u8, |acc, (&c, &a)| acc ^ tables.mul(c, a));
    }
}

fn mix_all_columns(state: &mut Block, matrix: &[[u8; 4]; 4], tables: &Gf256Tables) {
    for chunk in state.chunks_exact_mut(4) {
        let mut column = [chunk[0], chunk[1], chunk[2], chunk[3]];
        mix_single_column(&mut column, matrix, tables);
        chunk.copy_from_slice(&column);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block, tables: &Gf256Tables) {
    mix_all_columns(state, &MIX, tables);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block, tables: &Gf256Tables) {
    mix_all_columns(state, &INV_MIX, tables);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    for (byte, key) in state.iter_mut().zip(round_key.iter()) {
        *byte ^= *key;
    }
}
