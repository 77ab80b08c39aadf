//! Encrypts a short message with AES-128 and decrypts it back.

use rijndael_core::CipherContext;

fn main() {
    let key: Vec<u8> = (0u8..16).collect();
    let mut ctx = CipherContext::new(&key).expect("16-byte key is valid");

    let message = b"first block here and a tail";
    let ciphertext = ctx.encrypt_buffer(message).expect("encrypt");
    let plaintext = ctx
        .decrypt_buffer_truncated(&ciphertext, message.len())
        .expect("decrypt");
    assert_eq!(plaintext, message);

    println!("ciphertext: {}", hex::encode(&ciphertext));
    ctx.release();
}
