//! End-to-end checks of the public API against FIPS-197 and the buffer semantics.

use rijndael_core::{padded_len, CipherContext, CipherError, Gf256Tables, KeySize};

const PLAIN: &str = "00112233445566778899aabbccddeeff";

fn sequential_key(size: KeySize) -> Vec<u8> {
    (0..size.key_len() as u8).collect()
}

#[test]
fn fips197_appendix_c_vectors() {
    let expected = [
        (KeySize::Aes128, "69c4e0d86a7b0430d8cdb78070b4c55a"),
        (KeySize::Aes192, "dda97ca4864cdfe06eaf70a0ec0d7191"),
        (KeySize::Aes256, "8ea2b7ca516745bfeafc49904b496089"),
    ];
    let plain: [u8; 16] = hex::decode(PLAIN).unwrap().try_into().unwrap();
    for (size, cipher_hex) in expected {
        let mut ctx = CipherContext::new(&sequential_key(size)).unwrap();
        assert_eq!(ctx.key_size(), size);
        let ct = ctx.encrypt_block(&plain);
        assert_eq!(hex::encode(ct), cipher_hex, "{size:?}");
        assert_eq!(ctx.decrypt_block(&ct), plain, "{size:?}");
    }
}

#[test]
fn buffer_api_agrees_with_block_api() {
    let mut ctx = CipherContext::new(&sequential_key(KeySize::Aes128)).unwrap();
    let plain = hex::decode(PLAIN).unwrap();
    let ct = ctx.encrypt_buffer(&plain).unwrap();
    assert_eq!(ct.len(), 32);
    assert_eq!(hex::encode(&ct[..16]), "69c4e0d86a7b0430d8cdb78070b4c55a");
    assert_eq!(ct[16..], ctx.encrypt_block(&[0u8; 16]));

    let pt = ctx.decrypt_buffer(&ct).unwrap();
    assert_eq!(pt[..16], plain[..]);
    assert_eq!(pt[16..], [0u8; 16]);
    assert_eq!(ctx.decrypt_buffer_truncated(&ct, 16).unwrap(), plain);
}

#[test]
fn empty_buffer_encrypts_to_one_block() {
    let mut ctx = CipherContext::new(&sequential_key(KeySize::Aes128)).unwrap();
    let ct = ctx.encrypt_buffer(&[]).unwrap();
    assert_eq!(ct.len(), 16);
    assert_eq!(ctx.decrypt_buffer(&ct).unwrap(), vec![0u8; 16]);
}

#[test]
fn short_key_is_rejected() {
    assert_eq!(
        CipherContext::new(b"0123456789").unwrap_err(),
        CipherError::InvalidKeyLength { len: 10 }
    );
}

#[test]
fn zero_padding_is_not_stripped() {
    let mut ctx = CipherContext::new(&sequential_key(KeySize::Aes256)).unwrap();
    let ct = ctx.encrypt_buffer(b"A").unwrap();
    assert_eq!(ct.len(), 16);
    let pt = ctx.decrypt_buffer(&ct).unwrap();
    assert_eq!(pt.len(), 16);
    assert_eq!(pt[0], b'A');
    assert!(pt[1..].iter().all(|&b| b == 0));
}

#[test]
fn message_spanning_several_blocks_round_trips() {
    let message = b"The quick brown fox jumps over the lazy dog";
    for size in KeySize::ALL {
        let mut ctx = CipherContext::new(&sequential_key(size)).unwrap();
        let ct = ctx.encrypt_buffer(message).unwrap();
        assert_eq!(ct.len(), padded_len(message.len()));
        let pt = ctx.decrypt_buffer(&ct).unwrap();
        assert_eq!(&pt[..message.len()], message);
        assert!(pt[message.len()..].iter().all(|&b| b == 0));
    }
}

#[test]
fn independently_built_tables_give_identical_ciphertext() {
    let message = b"determinism check";
    let key = sequential_key(KeySize::Aes192);
    let mut runs = Vec::new();
    for _ in 0..3 {
        let tables = Gf256Tables::build();
        let mut ctx = CipherContext::with_tables(&tables, &key).unwrap();
        runs.push(ctx.encrypt_buffer(message).unwrap());
    }
    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
}

#[test]
fn contexts_on_separate_threads() {
    let handles: Vec<_> = KeySize::ALL
        .into_iter()
        .map(|size| {
            std::thread::spawn(move || {
                let mut ctx = CipherContext::new(&sequential_key(size)).unwrap();
                let ct = ctx.encrypt_buffer(b"per-thread context").unwrap();
                ctx.decrypt_buffer_truncated(&ct, 18).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), b"per-thread context");
    }
}
