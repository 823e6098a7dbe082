//! Integration tests for GOST R 34.10-2012 signatures

use cryptolab::prelude::*;
use cryptolab::sign::traditional::gost3410::{
    generate_key_pair, sign_text, verify_text, PublicKeyHex, SignatureHex,
};
use rand::rngs::OsRng;

#[test]
fn test_gost3410_signature() {
    let mut rng = OsRng;
    let (public_key, secret_key) = Gost3410::keypair(&mut rng).unwrap();

    let message = b"Test message for GOST R 34.10-2012";
    let signature = Gost3410::sign(message, &secret_key, &mut rng).unwrap();
    assert!(Gost3410::verify(message, &signature, &public_key).is_ok());

    let modified = b"Modified message that should not verify";
    assert!(Gost3410::verify(modified, &signature, &public_key).is_err());

    let (other_public, _) = Gost3410::keypair(&mut rng).unwrap();
    assert!(Gost3410::verify(message, &signature, &other_public).is_err());
}

#[test]
fn test_text_workflow() {
    let mut rng = OsRng;
    let keys = generate_key_pair(&mut rng).unwrap();
    let signature = sign_text("подпись", &keys.private_key, &mut rng).unwrap();
    assert!(verify_text("подпись", &signature, &keys.public_key));
    assert!(!verify_text("подпись ", &signature, &keys.public_key));

    let swapped = SignatureHex {
        r: signature.s.clone(),
        s: signature.r.clone(),
    };
    assert!(!verify_text("подпись", &swapped, &keys.public_key));
}

#[test]
fn test_verify_text_never_panics_on_garbage() {
    let sig = SignatureHex {
        r: "not hex".into(),
        s: "".into(),
    };
    let key = PublicKeyHex {
        x: "".into(),
        y: "ZZ".into(),
    };
    assert!(!verify_text("anything", &sig, &key));
}

#[test]
fn test_sign_with_bad_private_key() {
    let err = sign_text("m", "0", &mut OsRng).unwrap_err();
    assert!(matches!(err, Error::InvalidKeyFormat { .. }));
}
