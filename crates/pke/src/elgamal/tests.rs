use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x456c_4761)
}

#[test]
fn test_unit_key_is_generator() {
    let sk = ElGamalSecretKey::new(&BigUint::from(1u8)).unwrap();
    let curve = secp256k1::curve().unwrap();
    assert_eq!(sk.public_key().unwrap().point(), &curve.generator);
    assert_eq!(
        sk.public_key().unwrap().to_string(),
        "(55066263022277343669578718895168534326250603453777594175500187360389116729240, \
         32670510020758816978083085130507043184471273380659243275938904335757337482424)"
    );
}

#[test]
fn test_message_encoding() {
    let curve = secp256k1::curve().unwrap();
    for message in [&b""[..], b"A", b"Hi there", &[b'a'; 31]] {
        let point = encode_message(&curve, message).unwrap();
        assert!(curve.is_on_curve(&point));
        let x = point.x().unwrap();
        assert_eq!(x >> 8usize, BigUint::from_bytes_be(message));
        assert_eq!(decode_point(&point).unwrap(), message);
    }

    assert!(matches!(
        encode_message(&curve, &[b'a'; 32]),
        Err(Error::MessageTooLarge(_))
    ));
    assert!(matches!(
        encode_message(&curve, &[0xff; 31]),
        Err(Error::MessageTooLarge(_))
    ));
    assert!(decode_point(&Point::Infinity).is_err());
}

#[test]
fn test_text_roundtrip() {
    let mut r = rng();
    let keys = generate_keys(&mut r).unwrap();
    for message in ["", "Hello, ElGamal", "Привет, мир"] {
        let ct = encrypt_text(&keys.public_key, message, &mut r).unwrap();
        assert!(ct.c1.starts_with('(') && ct.c2.ends_with(')'));
        assert_eq!(decrypt_text(&keys.private_key, &ct).unwrap(), message);
    }
}

#[test]
fn test_encryption_is_randomized() {
    let mut r = rng();
    let (pk, sk) = keypair(&mut r).unwrap();
    let a = encrypt(&pk, b"same", &mut r).unwrap();
    let b = encrypt(&pk, b"same", &mut r).unwrap();
    assert_ne!(a, b);
    assert_eq!(decrypt(&sk, &a).unwrap(), b"same");
    assert_eq!(decrypt(&sk, &b).unwrap(), b"same");
}

#[test]
fn test_wrong_key_does_not_recover_message() {
    let mut r = rng();
    let (pk, _) = keypair(&mut r).unwrap();
    let (_, other) = keypair(&mut r).unwrap();
    let ct = encrypt(&pk, b"secret", &mut r).unwrap();
    if let Ok(bytes) = decrypt(&other, &ct) {
        assert_ne!(bytes, b"secret");
    }
}

#[test]
fn test_private_key_validation() {
    let order = secp256k1::curve().unwrap().order.to_string();
    for bad in ["0", "", "-5", "12ab", order.as_str()] {
        assert!(
            matches!(ElGamalSecretKey::from_decimal(bad), Err(Error::InvalidKeyFormat(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_off_curve_points_rejected() {
    let mut r = rng();
    let keys = generate_keys(&mut r).unwrap();
    let mut ct = encrypt_text(&keys.public_key, "x", &mut r).unwrap();
    ct.c1 = "(1, 1)".into();
    assert!(matches!(
        decrypt_text(&keys.private_key, &ct),
        Err(Error::Api(cryptolab_api::Error::PointNotOnCurve { .. }))
    ));

    assert!(matches!(
        encrypt_text("(1, 1)", "x", &mut r),
        Err(Error::Api(cryptolab_api::Error::PointNotOnCurve { .. }))
    ));
    assert!(matches!(
        encrypt_text("(null, null)", "x", &mut r),
        Err(Error::InvalidKeyFormat(_))
    ));
    assert!(matches!(
        encrypt_text("not a point", "x", &mut r),
        Err(Error::Api(cryptolab_api::Error::InvalidParameter { .. }))
    ));
}

#[test]
fn test_pke_trait_surface() {
    let mut r = rng();
    let (pk, sk) = <ElGamal as Pke>::keypair(&mut r).unwrap();
    let ct = <ElGamal as Pke>::encrypt(&pk, b"trait", &mut r).unwrap();
    assert_eq!(<ElGamal as Pke>::decrypt(&sk, &ct).unwrap(), b"trait");

    let err = <ElGamal as Pke>::encrypt(&pk, &[b'z'; 40], &mut r).unwrap_err();
    assert!(matches!(err, cryptolab_api::Error::MessageTooLarge { .. }));
}
