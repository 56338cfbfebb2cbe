use crate::error::AppError;

#[test]
fn test_app_error_exit_codes() {
    assert_eq!(AppError::Validation("test".into()).exit_code(), 2);
    assert_eq!(AppError::NotFound("test".into()).exit_code(), 3);
    assert_eq!(AppError::Config("test".into()).exit_code(), 4);
    assert_eq!(AppError::Io("test".into()).exit_code(), 5);
    assert_eq!(AppError::Parse("test".into()).exit_code(), 5);
}

#[test]
fn test_app_error_error_codes() {
    assert_eq!(AppError::Config("test".into()).error_code(), "CONFIG_ERROR");
    assert_eq!(AppError::Io("test".into()).error_code(), "IO_ERROR");
    assert_eq!(AppError::Parse("test".into()).error_code(), "PARSE_ERROR");
    assert_eq!(AppError::NotFound("test".into()).error_code(), "NOT_FOUND");
    assert_eq!(
        AppError::Validation("test".into()).error_code(),
        "VALIDATION_ERROR"
    );
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        format!("{}", AppError::Config("msg".into())),
        "Configuration error: msg"
    );
    assert_eq!(format!("{}", AppError::Io("msg".into())), "I/O error: msg");
    assert_eq!(
        format!("{}", AppError::Parse("msg".into())),
        "Parse error: msg"
    );
    assert_eq!(
        format!("{}", AppError::NotFound("msg".into())),
        "Not found: msg"
    );
    assert_eq!(
        format!("{}", AppError::Validation("msg".into())),
        "Validation error: msg"
    );
}

#[test]
fn test_app_error_from_json() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let app: AppError = err.into();
    assert!(matches!(app, AppError::Parse(_)));
}

#[test]
fn test_app_error_from_io() {
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
    let app: AppError = err.into();
    assert_eq!(app.error_code(), "IO_ERROR");
}
