use super::*;

#[test]
fn test_error_conversion() {
    let core_err = CoreError::from(Error::param("key", "must not be empty"));
    match core_err {
        CoreError::InvalidParameter { message, .. } => {
            assert_eq!(message, "key: must not be empty");
        }
        _ => panic!("Expected InvalidParameter error"),
    }

    let core_err = CoreError::from(Error::Length {
        context: "buffer",
        expected: 32,
        actual: 16,
    });
    match core_err {
        CoreError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "buffer");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        _ => panic!("Expected InvalidLength error"),
    }

    assert!(matches!(
        CoreError::from(Error::Padding {
            context: "unpad",
            details: "bad byte"
        }),
        CoreError::MalformedCiphertext { context: "unpad", .. }
    ));
    assert!(matches!(
        CoreError::from(Error::SingularMatrix { context: "inverse" }),
        CoreError::SingularMatrix { context: "inverse", .. }
    ));
}

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    match validate::parameter(false, "test", "should fail").unwrap_err() {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected Parameter error"),
    }

    assert!(validate::length("buffer", 32, 32).is_ok());
    assert!(validate::length("buffer", 16, 32).is_err());
    assert!(validate::min_length("buffer", 4, 8).is_err());
    assert!(validate::block_aligned("blocks", 32, 16).is_ok());
    assert_eq!(
        validate::block_aligned("blocks", 20, 16),
        Err(Error::Length {
            context: "blocks",
            expected: 32,
            actual: 20
        })
    );
}

#[test]
fn test_to_core_result_relabels() {
    let r: Result<()> = Err(Error::Other("boom"));
    let err = to_core_result(r, "outer").unwrap_err();
    assert_eq!(err.context(), "outer");
}
