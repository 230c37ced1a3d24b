use super::*;

#[test]
fn can_join_many_errors() {
    let errors = vec![GenericError::from("first"), GenericError::from("second".to_string())];

    assert_eq!(GenericError::join_many(&errors, ", "), "first, second");
}

#[test]
fn can_convert_from_io_error() {
    let error: GenericError = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into();

    assert_eq!(error.to_string(), "no such file");
}

#[test]
fn can_convert_from_json_error() {
    let error: GenericError = serde_json::from_str::<Vec<u32>>("[1, ").unwrap_err().into();

    assert!(error.message().starts_with("json error:"));
}
