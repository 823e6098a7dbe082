//! Integration tests for the hash functions

use cryptolab::algorithms::hash::{Sha1, Streebog256, Streebog512};
use cryptolab::prelude::*;

#[test]
fn test_sha1_vectors() {
    assert_eq!(
        hash_hex("", HashVariant::Sha1).unwrap(),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
    assert_eq!(
        hash_hex("The quick brown fox jumps over the lazy dog", HashVariant::Sha1).unwrap(),
        "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"
    );
}

#[test]
fn test_streebog_vectors() {
    assert_eq!(
        hash_hex("", HashVariant::Streebog512).unwrap(),
        "8e945da209aa869f0455928529bcae4679e9873ab707b55315f56ceb98bef0a7362f715528356ee83cda5f2aac4c6ad2ba3a715c1bcd81cb8e9f90bf4c1c1a8a"
    );
    assert_eq!(
        hash_hex("abc", HashVariant::Streebog256).unwrap(),
        "4e2919cf137ed41ec4fb6270c61826cc4fffb660341e0af3688cd0626d23b481"
    );
}

#[test]
fn test_streaming_matches_one_shot() {
    let text = "Привет, Стрибог! ".repeat(20);
    let data = text.as_bytes();
    let mut h = Streebog512::new();
    for chunk in data.chunks(13) {
        h.update(chunk).unwrap();
    }
    assert_eq!(
        h.finalize().unwrap().as_ref(),
        Streebog512::digest(data).unwrap().as_ref()
    );

    let mut h = Sha1::new();
    for chunk in data.chunks(7) {
        h.update(chunk).unwrap();
    }
    assert_eq!(h.finalize().unwrap().as_ref(), Sha1::digest(data).unwrap().as_ref());
}

#[test]
fn test_output_sizes() {
    assert_eq!(hash_hex("x", HashVariant::Sha1).unwrap().len(), 40);
    assert_eq!(hash_hex("x", HashVariant::Streebog256).unwrap().len(), 64);
    assert_eq!(hash_hex("x", HashVariant::Streebog512).unwrap().len(), 128);
    assert_eq!(Streebog256::output_size(), 32);
    assert!(HashVariant::streebog(384).is_err());
}

#[test]
fn test_hex_is_lower_case() {
    let digest = hash_hex("case", HashVariant::Streebog256).unwrap();
    assert_eq!(digest, digest.to_lowercase());
}
