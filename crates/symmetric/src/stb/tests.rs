use super::*;
use rand::rngs::OsRng;

const HEX_KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

fn hex_key() -> SymmetricKey {
    SymmetricKey::prepare(HEX_KEY).unwrap()
}

#[test]
fn test_known_answers() {
    let key = hex_key();
    assert_eq!(
        StbCipher::encrypt_bytes(&key, b"").unwrap(),
        "73fa6e280935fe25655671d373f8e0cd"
    );
    assert_eq!(
        StbCipher::encrypt_text(&key, "0123456789abcdef").unwrap(),
        "ad7c6befc22a985d8c81c9e0a13c80b873fa6e280935fe25655671d373f8e0cd"
    );

    let text_key = SymmetricKey::prepare("secret").unwrap();
    assert_eq!(
        StbCipher::encrypt_text(&text_key, "Hello, STB!").unwrap(),
        "4b24725f12a5172b4a9b40e31341a216"
    );
    assert_eq!(
        StbCipher::decrypt_text(&text_key, "4b24725f12a5172b4a9b40e31341a216").unwrap(),
        "Hello, STB!"
    );
}

#[test]
fn test_roundtrip_lengths() {
    let key = SymmetricKey::generate(&mut OsRng);
    for len in [0usize, 1, 15, 16, 17, 31, 32, 100] {
        let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let sealed = StbCipher::seal(&key, &data).unwrap();
        assert_eq!(sealed.blocks(), len / 16 + 1);
        assert_eq!(StbCipher::open(&key, &sealed).unwrap(), data);
    }
}

#[test]
fn test_cyrillic_text() {
    let key = SymmetricKey::prepare("ключ").unwrap();
    let sealed = StbCipher::encrypt_text(&key, "Съешь же ещё этих мягких булок").unwrap();
    assert_eq!(
        StbCipher::decrypt_text(&key, &sealed).unwrap(),
        "Съешь же ещё этих мягких булок"
    );
}

#[test]
fn test_malformed_ciphertexts() {
    let key = hex_key();
    for bad in ["", "73fa", "73fa6e280935fe25655671d373f8e0c", "zz", "73fa6e280935fe25655671d373f8e0cdzz"] {
        assert!(
            matches!(
                StbCipher::decrypt_bytes(&key, bad),
                Err(Error::MalformedCiphertext { .. })
            ),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_wrong_key_fails_padding_check() {
    let sealed = StbCipher::encrypt_text(&hex_key(), "attack at dawn").unwrap();
    let other = SymmetricKey::prepare("another key").unwrap();
    // a random final block passes the padding check with probability about 1/256
    match StbCipher::decrypt_bytes(&other, &sealed) {
        Err(Error::MalformedCiphertext { .. }) => {}
        Ok(bytes) => assert_ne!(bytes, b"attack at dawn"),
        Err(e) => panic!("unexpected error {e:?}"),
    }
}

#[test]
fn test_trait_surface_is_deterministic() {
    let key = hex_key();
    let a = <StbCipher as SymmetricCipher>::encrypt(&key, b"x", &mut OsRng).unwrap();
    let b = <StbCipher as SymmetricCipher>::encrypt(&key, b"x", &mut OsRng).unwrap();
    assert_eq!(a, b);
    assert_eq!(<StbCipher as SymmetricCipher>::decrypt(&key, &a).unwrap(), b"x");
    assert_eq!(<StbCipher as SymmetricCipher>::name(), "STB 34.101.31");
}
