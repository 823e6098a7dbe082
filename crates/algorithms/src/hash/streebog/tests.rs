use super::*;

const M1: &[u8] = b"012345678901234567890123456789012345678901234567890123456789012";

fn m2() -> Vec<u8> {
    let mut m = hex::decode(
        "fbe2e5f0eee3c820fbeafaebef20fffbf0e1e0f0f520e0ed20e8ece0ebe5f0f2f120fff0eeec20f120faf2fee5e2202ce8f6f3ede220e8e6eee1e8f0f2d1202ce8f0f2e5e220e5d1",
    )
    .unwrap();
    m.reverse();
    m
}

#[test]
fn test_empty_message() {
    assert_eq!(
        Streebog512::digest(b"").unwrap().to_hex(),
        "8e945da209aa869f0455928529bcae4679e9873ab707b55315f56ceb98bef0a7362f715528356ee83cda5f2aac4c6ad2ba3a715c1bcd81cb8e9f90bf4c1c1a8a"
    );
    assert_eq!(
        Streebog256::digest(b"").unwrap().to_hex(),
        "3f539a213e97c802cc229d474c6aa32a825a360b2a933a949fd925208d9ce1bb"
    );
}

#[test]
fn test_63_byte_message() {
    assert_eq!(
        Streebog512::digest(M1).unwrap().to_hex(),
        "1b54d01a4af5b9d5cc3d86d68d285462b19abc2475222f35c085122be4ba1ffa00ad30f8767b3a82384c6574f024c311e2a481332b08ef7f41797891c1646f48"
    );
    assert_eq!(
        Streebog256::digest(M1).unwrap().to_hex(),
        "9d151eefd8590b89daa6ba6cb74af9275dd051026bb149a452fd84e5e57b5500"
    );
}

#[test]
fn test_72_byte_message() {
    let m = m2();
    assert_eq!(m.len(), 72);
    assert_eq!(
        Streebog512::digest(&m).unwrap().to_hex(),
        "1e88e62226bfca6f9994f1f2d51569e0daf8475a3b0fe61a5300eee46d961376035fe83549ada2b8620fcd7c496ce5b33f0cb9dddc2b6460143b03dabac9fb28"
    );
    assert_eq!(
        Streebog256::digest(&m).unwrap().to_hex(),
        "9dd2fe4e90409e5da87f53976d7405b0c0cac628fc669a741d50063c557e8f50"
    );
}

#[test]
fn test_abc_256() {
    assert_eq!(
        Streebog256::digest(b"abc").unwrap().to_hex(),
        "4e2919cf137ed41ec4fb6270c61826cc4fffb660341e0af3688cd0626d23b481"
    );
}

#[test]
fn test_streaming_across_block_boundary() {
    let m = m2();
    let expected = Streebog512::digest(&m).unwrap();
    for split in [0, 1, 63, 64, 65, 71] {
        let mut h = Streebog512::new();
        h.update(&m[..split]).unwrap();
        h.update(&m[split..]).unwrap();
        assert_eq!(h.finalize().unwrap(), expected);
    }
}

#[test]
fn test_add_512_carries() {
    let mut a = [0xffu8; 64];
    let mut one = [0u8; 64];
    one[0] = 1;
    add_512(&mut a, &one);
    assert_eq!(a, [0u8; 64]);

    let mut b = [0u8; 64];
    b[0] = 0xff;
    add_bits(&mut b, 1);
    assert_eq!(b[0], 0);
    assert_eq!(b[1], 1);
}

#[test]
fn test_metadata() {
    assert_eq!(Streebog512::output_size(), 64);
    assert_eq!(Streebog256::output_size(), 32);
    assert_eq!(Streebog256::block_size(), 64);
    assert_eq!(<Streebog256 as HashFunction>::name(), "Streebog-256");
}
