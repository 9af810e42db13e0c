//! Unit tests for application error display and conversions.

use fabric_mcp::codec::DecodeError;
use fabric_mcp::registry::CompositionError;
use fabric_mcp::AppError;

#[test]
fn display_prefixes_each_family() {
    let cases: Vec<(AppError, &str)> = vec![
        (AppError::Config("bad port".into()), "config: bad port"),
        (
            AppError::Platform("store unavailable".into()),
            "platform: store unavailable",
        ),
        (
            AppError::NotFound("connection conn-1".into()),
            "not found: connection conn-1",
        ),
        (AppError::Mcp("stream closed".into()), "mcp: stream closed"),
    ];
    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn decode_error_converts_and_keeps_structure() {
    let decode = DecodeError::UnknownDiscriminator {
        value: "Kerberos".into(),
    };
    let err: AppError = decode.into();
    assert!(matches!(
        err,
        AppError::Decode(DecodeError::UnknownDiscriminator { ref value }) if value == "Kerberos"
    ));
    assert!(err.to_string().starts_with("decode: "));
}

#[test]
fn composition_error_converts_and_keeps_structure() {
    let compose = CompositionError::DuplicateTool {
        name: "list_connections".into(),
    };
    let err: AppError = compose.into();
    assert!(matches!(
        err,
        AppError::Compose(CompositionError::DuplicateTool { ref name }) if name == "list_connections"
    ));
    assert_eq!(
        err.to_string(),
        "compose: duplicate tool name 'list_connections'"
    );
}

#[test]
fn decode_error_messages_name_the_failing_field() {
    let missing = DecodeError::MissingRequiredField {
        variant: "Basic",
        field: "password",
    };
    let text = missing.to_string();
    assert!(text.contains("Basic"), "got: {text}");
    assert!(text.contains("password"), "got: {text}");

    let mismatch = DecodeError::TypeMismatch {
        field: "username",
        expected: "a string",
    };
    let text = mismatch.to_string();
    assert!(text.contains("username"), "got: {text}");
    assert!(text.contains("a string"), "got: {text}");
}

#[test]
fn unknown_discriminator_message_names_the_value() {
    let err = DecodeError::UnknownDiscriminator {
        value: "Teradata".into(),
    };
    assert!(err.to_string().contains("Teradata"));
}

#[test]
fn already_composed_has_a_clear_message() {
    assert_eq!(
        CompositionError::AlreadyComposed.to_string(),
        "tool registry already composed"
    );
}

#[test]
fn errors_implement_the_error_trait() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&AppError::Config("x".into()));
    assert_error(&DecodeError::UnknownDiscriminator { value: "x".into() });
    assert_error(&CompositionError::AlreadyComposed);
}
