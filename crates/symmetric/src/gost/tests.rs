use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const HEX_KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

fn nonce(hex_str: &str) -> GostNonce {
    GostNonce::from_slice(&hex::decode(hex_str).unwrap()).unwrap()
}

#[test]
fn test_known_answer_hex_key() {
    let key = SymmetricKey::prepare(HEX_KEY).unwrap();
    let ct = GostCipher::encrypt_with_nonce(
        &key,
        &nonce("0102030405060708"),
        b"Hello, GOST 28147-89!",
    )
    .unwrap();
    assert_eq!(
        ct.to_string(),
        "0102030405060708:517e95891a516126c8ef189a5a58ae37f84cb3c753"
    );
}

#[test]
fn test_known_answer_text_key_cyrillic() {
    let key = SymmetricKey::prepare("password").unwrap();
    let ct = GostCipher::encrypt_with_nonce(
        &key,
        &nonce("ffffffffffffffff"),
        "Привет, мир! Gamma".as_bytes(),
    )
    .unwrap();
    let text = ct.to_string();
    assert_eq!(
        text,
        "ffffffffffffffff:208d3e493970a32856b3c417f274e2573c8943c9ded361dda10363"
    );
    assert_eq!(GostCipher::decrypt_text(&key, &text).unwrap(), "Привет, мир! Gamma");
}

#[test]
fn test_text_roundtrip_random_nonce() {
    let mut rng = ChaCha20Rng::seed_from_u64(28147);
    let key = SymmetricKey::generate(&mut rng);
    let a = GostCipher::encrypt_text(&key, "same message", &mut rng).unwrap();
    let b = GostCipher::encrypt_text(&key, "same message", &mut rng).unwrap();
    assert_ne!(a, b);
    assert_eq!(GostCipher::decrypt_text(&key, &a).unwrap(), "same message");
    assert_eq!(GostCipher::decrypt_text(&key, &b).unwrap(), "same message");
}

#[test]
fn test_bytes_roundtrip_and_empty() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let key = SymmetricKey::prepare("k").unwrap();
    let data: Vec<u8> = (0..=255u8).collect();
    let sealed = GostCipher::encrypt_bytes(&key, &data, &mut rng).unwrap();
    assert_eq!(GostCipher::decrypt_bytes(&key, &sealed).unwrap(), data);

    let empty = GostCipher::encrypt_bytes(&key, &[], &mut rng).unwrap();
    assert_eq!(empty.len(), 17);
    assert!(GostCipher::decrypt_bytes(&key, &empty).unwrap().is_empty());
}

#[test]
fn test_malformed_ciphertexts() {
    let key = SymmetricKey::prepare("k").unwrap();
    for bad in [
        "0102030405060708517e95",
        "01020304050607:517e",
        "010203040506070809:517e",
        "zz02030405060708:517e",
        "0102030405060708:517",
        "0102030405060708:xyz0",
    ] {
        assert!(
            matches!(
                GostCipher::decrypt_bytes(&key, bad),
                Err(Error::MalformedCiphertext { .. })
            ),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn test_decrypt_text_reports_invalid_utf8() {
    let key = SymmetricKey::prepare("k").unwrap();
    let n = nonce("0000000000000000");
    let ct = GostCipher::encrypt_with_nonce(&key, &n, &[0xff, 0xfe, 0xfd]).unwrap();
    assert!(matches!(
        GostCipher::decrypt_text(&key, &ct.to_string()),
        Err(Error::Decoding { .. })
    ));
}

#[test]
fn test_trait_surface() {
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let key = SymmetricKey::generate(&mut rng);
    let ct = <GostCipher as SymmetricCipher>::encrypt(&key, b"abc", &mut rng).unwrap();
    assert_eq!(ct.body().len(), 3);
    let reparsed: GostCiphertext = ct.to_string().parse().unwrap();
    assert_eq!(reparsed, ct);
    assert_eq!(<GostCipher as SymmetricCipher>::decrypt(&key, &reparsed).unwrap(), b"abc");
    assert_eq!(<GostCipher as SymmetricCipher>::name(), "GOST 28147-89");
}
