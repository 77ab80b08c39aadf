//! Buffer-level encryption over independent 16-byte blocks.
//!
//! These helpers are ECB-equivalent: every block is processed on its own with no
//! IV and no chaining, so equal plaintext blocks give equal ciphertext blocks.
//! There is no authentication, and the zero padding added on encryption does not
//! record how many bytes were added. Encryption always appends padding: input that
//! already fills whole blocks gains one extra zero block. Decryption therefore returns the original
//! data followed by the zero tail; callers that need the exact length must track
//! it themselves and can use [`CipherContext::decrypt_buffer_truncated`].

use tracing::trace;

use crate::block::{Block, BLOCK_SIZE};
use crate::context::CipherContext;
use crate::error::CipherError;

/// Ciphertext length for `len` bytes of plaintext: always at least one byte of padding.
pub fn padded_len(len: usize) -> usize {
    (len / BLOCK_SIZE + 1) * BLOCK_SIZE
}

fn output_buffer(len: usize) -> Result<Vec<u8>, CipherError> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| CipherError::AllocationFailure)?;
    Ok(out)
}

impl CipherContext<'_> {
    /// Zero-pads `input` and encrypts each block independently.
    ///
    /// The ciphertext length is `padded_len(input.len())`, so empty input gives one
    /// block and a 16-byte input gives two.
    pub fn encrypt_buffer(&mut self, input: &[u8]) -> Result<Vec<u8>, CipherError> {
        let out_len = padded_len(input.len());
        let mut output = output_buffer(out_len)?;
        for offset in (0..out_len).step_by(BLOCK_SIZE) {
            let chunk = &input[offset..(offset + BLOCK_SIZE).min(input.len())];
            let mut block: Block = [0u8; BLOCK_SIZE];
            block[..chunk.len()].copy_from_slice(chunk);
            output.extend_from_slice(&self.encrypt_block(&block));
        }
        trace!(input_len = input.len(), output_len = output.len(), "encrypted buffer");
        Ok(output)
    }

    /// Decrypts each 16-byte block of `input` independently.
    ///
    /// Padding added by [`encrypt_buffer`](Self::encrypt_buffer) is not stripped.
    pub fn decrypt_buffer(&mut self, input: &[u8]) -> Result<Vec<u8>, CipherError> {
        if input.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::UnalignedInput { len: input.len() });
        }
        let mut output = output_buffer(input.len())?;
        for chunk in input.chunks_exact(BLOCK_SIZE) {
            let mut block: Block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            output.extend_from_slice(&self.decrypt_block(&block));
        }
        trace!(len = output.len(), "decrypted buffer");
        Ok(output)
    }

    /// Decrypts like [`decrypt_buffer`](Self::decrypt_buffer), then truncates to a
    /// plaintext length tracked by the caller.
    pub fn decrypt_buffer_truncated(
        &mut self,
        input: &[u8],
        plaintext_len: usize,
    ) -> Result<Vec<u8>, CipherError> {
        let mut output = self.decrypt_buffer(input)?;
        if plaintext_len > output.len() {
            return Err(CipherError::PlaintextLengthOutOfRange {
                requested: plaintext_len,
                available: output.len(),
            });
        }
        output.truncate(plaintext_len);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeySize;
    use rand::{Rng, RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn context(size: KeySize) -> CipherContext<'static> {
        let key: Vec<u8> = (0..size.key_len() as u8).collect();
        CipherContext::new(&key).unwrap()
    }

    #[test]
    fn padded_len_always_adds_padding() {
        assert_eq!(padded_len(0), 16);
        assert_eq!(padded_len(1), 16);
        assert_eq!(padded_len(15), 16);
        assert_eq!(padded_len(16), 32);
        assert_eq!(padded_len(17), 32);
        assert_eq!(padded_len(48), 64);
    }

    #[test]
    fn single_byte_decrypts_with_zero_tail() {
        let mut ctx = context(KeySize::Aes128);
        let ct = ctx.encrypt_buffer(b"A").unwrap();
        assert_eq!(ct.len(), 16);
        assert_eq!(hex::encode(&ct), "f7b2411d5ea6a832f62447fb44cfafbf");

        let pt = ctx.decrypt_buffer(&ct).unwrap();
        let mut expected = vec![0u8; 16];
        expected[0] = b'A';
        assert_eq!(pt, expected);
    }

    #[test]
    fn blocks_are_encrypted_independently() {
        let mut ctx = context(KeySize::Aes256);
        let ct = ctx.encrypt_buffer(&[0x5a; 40]).unwrap();
        assert_eq!(ct.len(), 48);
        assert_eq!(ct[..16], ct[16..32]);
        assert_eq!(ct[..16], ctx.encrypt_block(&[0x5a; 16]));
        let mut tail = [0u8; 16];
        tail[..8].fill(0x5a);
        assert_eq!(ct[32..], ctx.encrypt_block(&tail));
    }

    #[test]
    fn empty_buffer_encrypts_to_one_zero_block() {
        let mut ctx = context(KeySize::Aes128);
        let ct = ctx.encrypt_buffer(&[]).unwrap();
        assert_eq!(hex::encode(&ct), "c6a13b37878f5b826f4f8162a1c8d879");
        assert_eq!(ctx.decrypt_buffer(&ct).unwrap(), vec![0u8; 16]);
        assert!(ctx.decrypt_buffer_truncated(&ct, 0).unwrap().is_empty());
    }

    #[test]
    fn aligned_buffer_gains_a_full_zero_block() {
        let mut ctx = context(KeySize::Aes128);
        let ct = ctx.encrypt_buffer(&[0x41; 16]).unwrap();
        assert_eq!(ct.len(), 32);
        assert_eq!(ct[..16], ctx.encrypt_block(&[0x41; 16]));
        assert_eq!(hex::encode(&ct[16..]), "c6a13b37878f5b826f4f8162a1c8d879");

        let pt = ctx.decrypt_buffer(&ct).unwrap();
        assert_eq!(pt[..16], [0x41; 16]);
        assert_eq!(pt[16..], [0u8; 16]);
    }

    #[test]
    fn round_trip_pads_with_zeros_for_every_key_size() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        for size in KeySize::ALL {
            let mut key = vec![0u8; size.key_len()];
            rng.fill_bytes(&mut key);
            let mut ctx = CipherContext::new(&key).unwrap();
            for _ in 0..20 {
                let len = rng.gen_range(0..100);
                let mut plain = vec![0u8; len];
                rng.fill_bytes(&mut plain);

                let ct = ctx.encrypt_buffer(&plain).unwrap();
                assert_eq!(ct.len(), padded_len(len));

                let mut expected = plain.clone();
                expected.resize(padded_len(len), 0);
                assert_eq!(ctx.decrypt_buffer(&ct).unwrap(), expected);
                assert_eq!(ctx.decrypt_buffer_truncated(&ct, len).unwrap(), plain);
            }
        }
    }

    #[test]
    fn unaligned_ciphertext_is_rejected() {
        let mut ctx = context(KeySize::Aes128);
        assert_eq!(
            ctx.decrypt_buffer(&[0u8; 17]),
            Err(CipherError::UnalignedInput { len: 17 })
        );
    }

    #[test]
    fn truncation_past_the_padded_length_is_rejected() {
        let mut ctx = context(KeySize::Aes128);
        let ct = ctx.encrypt_buffer(b"hello").unwrap();
        assert_eq!(
            ctx.decrypt_buffer_truncated(&ct, 17),
            Err(CipherError::PlaintextLengthOutOfRange {
                requested: 17,
                available: 16,
            })
        );
    }

    #[test]
    fn wrong_key_yields_garbage_not_an_error() {
        let mut ctx = context(KeySize::Aes128);
        let ct = ctx.encrypt_buffer(b"attack at dawn").unwrap();
        let mut other = CipherContext::new(&[0xffu8; 16]).unwrap();
        let pt = other.decrypt_buffer(&ct).unwrap();
        assert_eq!(pt.len(), 16);
        assert_ne!(&pt[..14], b"attack at dawn");
    }
}
