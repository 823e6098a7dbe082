use super::*;
use hex;
use rand::rngs::OsRng;
use rand::RngCore;

fn test_key() -> BlockKey {
    let bytes = hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")
        .unwrap();
    BlockKey::from_slice(&bytes).unwrap()
}

#[test]
fn test_g_r() {
    assert_eq!(g_r(0, 0), 0xB1B1B1B1);
    assert_eq!(g_r(0x00000001, 8), 0xB1B194B1);
}

#[test]
fn test_encrypt_block_known_answer() {
    let cipher = Stb::new(&test_key());
    let mut block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "bdc7830f96f0c2e89ae3c2ef547cd26f");

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "00112233445566778899aabbccddeeff");
}

#[test]
fn test_random_blocks_roundtrip() {
    let mut rng = OsRng;
    for _ in 0..64 {
        let key = BlockKey::random(&mut rng);
        let cipher = Stb::new(&key);
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        let original = block;
        cipher.encrypt_block(&mut block).unwrap();
        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(block, original);
    }
}

#[test]
fn test_wrong_block_length() {
    let cipher = Stb::new(&test_key());
    assert!(cipher.encrypt_block(&mut [0u8; 8]).is_err());
    assert!(cipher.decrypt_block(&mut [0u8; 17]).is_err());
}
