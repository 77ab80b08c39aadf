//! AES key schedule and the per-block round sequence.

use tracing::debug;

use crate::block::Block;
use crate::error::CipherError;
use crate::key::{KeySchedule, KeySize, Word};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::tables::Gf256Tables;

fn rot_word(word: Word) -> Word {
    let [b0, b1, b2, b3] = word;
    [b1, b2, b3, b0]
}

fn sub_word(word: Word, tables: &Gf256Tables) -> Word {
    word.map(|byte| tables.sbox(byte))
}

fn xor_words(a: Word, b: Word) -> Word {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

/// Expands a 16, 24 or 32-byte key into `4 * (rounds + 1)` schedule words.
pub fn expand_key(tables: &Gf256Tables, key: &[u8]) -> Result<KeySchedule, CipherError> {
    let size = KeySize::from_key_len(key.len())?;
    let nk = size.key_words();
    let total = size.schedule_words();

    let mut w: Vec<Word> = Vec::new();
    w.try_reserve_exact(total)
        .map_err(|_| CipherError::AllocationFailure)?;
    for chunk in key.chunks_exact(4) {
        w.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let mut rcon = 0x01u8;
    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = xor_words(sub_word(rot_word(temp), tables), [rcon, 0, 0, 0]);
            rcon = tables.mul(rcon, 0x02);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp, tables);
        }
        w.push(xor_words(w[i - nk], temp));
    }

    debug!(
        key_bits = size.bits(),
        rounds = size.rounds(),
        words = w.len(),
        "expanded key schedule"
    );
    Ok(KeySchedule::new(w, size))
}

/// Encrypts the state in place with an expanded schedule.
pub fn encrypt_state(state: &mut Block, schedule: &KeySchedule, tables: &Gf256Tables) {
    let rounds = schedule.rounds();

    add_round_key(state, &schedule.round_key(0));

    for round in 1..rounds {
        sub_bytes(state, tables);
        shift_rows(state);
        mix_columns(state, tables);
        add_round_key(state, &schedule.round_key(round));
    }

    sub_bytes(state, tables);
    shift_rows(state);
    add_round_key(state, &schedule.round_key(rounds));
}

/// Decrypts the state in place with an expanded schedule.
pub fn decrypt_state(state: &mut Block, schedule: &KeySchedule, tables: &Gf256Tables) {
    let rounds = schedule.rounds();

    add_round_key(state, &schedule.round_key(rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(state);
        inv_sub_bytes(state, tables);
        add_round_key(state, &schedule.round_key(round));
        inv_mix_columns(state, tables);
    }
    inv_shift_rows(state);
    inv_sub_bytes(state, tables);
    add_round_key(state, &schedule.round_key(0));
}
