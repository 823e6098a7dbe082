//! Domain parameters for GOST R 34.10-2012 (TC26 512-bit parameter set A)

/// Field modulus p = 2^512 - 569
pub const GOST512A_P: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC7";

/// Curve coefficient a = p - 3
pub const GOST512A_A: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC4";

/// Curve coefficient b
pub const GOST512A_B: &str = "E8C2505DEDFC86DDC1BD0B2B6667F1DA34B82574761CB0E879BD081CFD0B6265EE3CB090F30D27614CB4574010DA90DD862EF9D4EBEE4761503190785A71C760";

/// Order q of the base point subgroup
pub const GOST512A_Q: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF27E69532F48D89116FF22B8D4E0560609B4B38ABFAD2B85DCACDB1411F10B275";

/// Base point x-coordinate
pub const GOST512A_GX: &str = "3";

/// Base point y-coordinate
pub const GOST512A_GY: &str = "7503CFE87A836AE3A61B8816E25450E6CE5E1C93ACF1ABC1778064FDCBEFA921DF1626BE4FD036E93D75E6A50E3A41E98028FE5FC235F5B889A589CB5215F2A4";

/// Byte length of scalars and coordinates
pub const GOST512A_SCALAR_SIZE: usize = 64;

/// Nonce draws allowed per signature before signing fails
pub const SIGN_MAX_ATTEMPTS: usize = 64;
