//! Property tests: decryption inverts encryption for arbitrary input

use cryptolab::pke::mceliece;
use cryptolab::prelude::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn gost_roundtrip(key in any::<[u8; 32]>(), data in proptest::collection::vec(any::<u8>(), 0..200), seed in any::<u64>()) {
        let key = SymmetricKey::new(key);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let sealed = GostCipher::encrypt_bytes(&key, &data, &mut rng).unwrap();
        prop_assert_eq!(GostCipher::decrypt_bytes(&key, &sealed).unwrap(), data);
    }

    #[test]
    fn stb_roundtrip(key in any::<[u8; 32]>(), data in proptest::collection::vec(any::<u8>(), 0..200)) {
        let key = SymmetricKey::new(key);
        let sealed = StbCipher::encrypt_bytes(&key, &data).unwrap();
        prop_assert_eq!(sealed.len() % 32, 0);
        prop_assert_eq!(StbCipher::decrypt_bytes(&key, &sealed).unwrap(), data);
    }

    #[test]
    fn stb_text_roundtrip(text in "\\PC{0,60}", passphrase in "[a-zA-Z0-9 ]{1,40}") {
        let key = SymmetricKey::from_text(&passphrase).unwrap();
        let sealed = StbCipher::encrypt_text(&key, &text).unwrap();
        prop_assert_eq!(StbCipher::decrypt_text(&key, &sealed).unwrap(), text);
    }

    #[test]
    fn mceliece_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..64), seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (pk, sk) = mceliece::keypair(&mut rng).unwrap();
        let framed = mceliece::encrypt_bytes(&pk, &data, &mut rng).unwrap();
        prop_assert_eq!(mceliece::decrypt_bytes(&sk, &framed).unwrap(), data);
    }
}
