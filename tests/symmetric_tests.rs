//! Integration tests for the symmetric ciphers

use cryptolab::prelude::*;
use cryptolab::symmetric::{GostCiphertext, StbCiphertext};
use rand::rngs::OsRng;

const HEX_KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

#[test]
fn test_gost_text_roundtrip() {
    let key = SymmetricKey::prepare("integration key").unwrap();
    for text in ["", "a", "Hello, GOST 28147-89!", "Съешь же ещё этих мягких французских булок"] {
        let sealed = GostCipher::encrypt_text(&key, text, &mut OsRng).unwrap();
        let (nonce, body) = sealed.split_once(':').unwrap();
        assert_eq!(nonce.len(), 16);
        assert_eq!(body.len(), text.len() * 2);
        assert_eq!(GostCipher::decrypt_text(&key, &sealed).unwrap(), text);
    }
}

#[test]
fn test_gost_fresh_nonce_per_message() {
    let key = SymmetricKey::generate(&mut OsRng);
    let a = GostCipher::encrypt_text(&key, "same text", &mut OsRng).unwrap();
    let b = GostCipher::encrypt_text(&key, "same text", &mut OsRng).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_gost_rejects_malformed_transport() {
    let key = SymmetricKey::prepare(HEX_KEY).unwrap();
    for bad in ["", "00", "0102030405060708", "01020304:abcd", "0102030405060708:xyz"] {
        assert!(GostCipher::decrypt_text(&key, bad).is_err(), "{:?}", bad);
        assert!(bad.parse::<GostCiphertext>().is_err(), "{:?}", bad);
    }
}

#[test]
fn test_stb_known_answer_and_roundtrip() {
    let key = SymmetricKey::prepare("secret").unwrap();
    let sealed = StbCipher::encrypt_text(&key, "Hello, STB!").unwrap();
    assert_eq!(sealed, "4b24725f12a5172b4a9b40e31341a216");
    assert_eq!(StbCipher::decrypt_text(&key, &sealed).unwrap(), "Hello, STB!");

    let long = "СТБ 34.101.31-2011 ".repeat(10);
    let sealed = StbCipher::encrypt_text(&key, &long).unwrap();
    assert_eq!(sealed.len() % 32, 0);
    assert_eq!(StbCipher::decrypt_text(&key, &sealed).unwrap(), long);
}

#[test]
fn test_stb_rejects_malformed_ciphertext() {
    let key = SymmetricKey::prepare(HEX_KEY).unwrap();
    for bad in ["", "abc", "00112233", "zz24725f12a5172b4a9b40e31341a216"] {
        let err = StbCipher::decrypt_text(&key, bad).unwrap_err();
        let api: Error = err.into();
        assert!(
            matches!(api, Error::MalformedCiphertext { .. } | Error::Decoding { .. }),
            "{:?} gave {:?}",
            bad,
            api
        );
    }
    assert!("".parse::<StbCiphertext>().is_err());
}

#[test]
fn test_keys_are_interchangeable_between_forms() {
    let from_hex = SymmetricKey::prepare(HEX_KEY).unwrap();
    let again = SymmetricKey::prepare(&from_hex.to_hex()).unwrap();
    assert_eq!(from_hex, again);

    // 63 hex digits is not a hex key, so it is taken as a passphrase
    let passphrase = SymmetricKey::prepare(&HEX_KEY[..63]).unwrap();
    assert_ne!(passphrase, from_hex);

    assert!(SymmetricKey::prepare("").is_err());
}

#[test]
fn test_trait_surface() {
    let key = SymmetricKey::generate(&mut OsRng);
    let ct = <GostCipher as SymmetricCipher>::encrypt(&key, b"bytes\x00\xff", &mut OsRng).unwrap();
    assert_eq!(
        <GostCipher as SymmetricCipher>::decrypt(&key, &ct).unwrap(),
        b"bytes\x00\xff"
    );
    let ct = <StbCipher as SymmetricCipher>::encrypt(&key, b"bytes\x00\xff", &mut OsRng).unwrap();
    assert_eq!(
        <StbCipher as SymmetricCipher>::decrypt(&key, &ct).unwrap(),
        b"bytes\x00\xff"
    );
}
