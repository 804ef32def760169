// Unit tests for transport error classification.
//
// The classification functions are pure — no network involved. They pin
// the backend's free-text error messages to the closed AnalyzeError
// taxonomy at the boundary.

use callwarden::client::error::{classify_error_body, classify_server_message};
use callwarden::client::AnalyzeError;

// ============================================================
// classify_server_message — known message substrings
// ============================================================

#[test]
fn empty_audio_message_maps_to_empty_file() {
    let err = classify_server_message(400, "Empty audio file");
    assert!(matches!(err, AnalyzeError::EmptyFile));
}

#[test]
fn unsupported_format_message() {
    let err = classify_server_message(400, "Unsupported audio codec");
    assert!(matches!(err, AnalyzeError::UnsupportedFormat));
}

#[test]
fn no_clear_speech_message() {
    let err = classify_server_message(422, "Audio contains no clear speech");
    assert!(matches!(err, AnalyzeError::NoSpeechDetected));
}

#[test]
fn file_is_empty_maps_to_corrupt() {
    let err = classify_server_message(400, "File is empty");
    assert!(matches!(err, AnalyzeError::CorruptFile));
}

#[test]
fn api_key_message_maps_to_authentication() {
    let err = classify_server_message(400, "Invalid or missing API key");
    assert!(matches!(err, AnalyzeError::AuthenticationFailed));
}

#[test]
fn auth_status_codes_win_regardless_of_message() {
    assert!(matches!(
        classify_server_message(401, "whatever"),
        AnalyzeError::AuthenticationFailed
    ));
    assert!(matches!(
        classify_server_message(403, "Empty audio file"),
        AnalyzeError::AuthenticationFailed
    ));
}

#[test]
fn classification_is_case_insensitive() {
    assert!(matches!(
        classify_server_message(400, "EMPTY AUDIO FILE detected"),
        AnalyzeError::EmptyFile
    ));
}

#[test]
fn unrecognized_message_stays_server_error() {
    let err = classify_server_message(500, "unexpected whisper crash");
    match err {
        AnalyzeError::ServerError { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "unexpected whisper crash");
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

// ============================================================
// classify_error_body — JSON probing
// ============================================================

#[test]
fn json_body_detail_key_is_probed() {
    let err = classify_error_body(400, r#"{"detail": "Empty audio file"}"#);
    assert!(matches!(err, AnalyzeError::EmptyFile));
}

#[test]
fn json_body_error_key_takes_precedence() {
    let err = classify_error_body(500, r#"{"error": "boom", "detail": "Empty audio file"}"#);
    assert!(matches!(err, AnalyzeError::ServerError { .. }));
}

#[test]
fn json_body_message_key_is_probed_last() {
    let err = classify_error_body(422, r#"{"message": "no clear speech detected"}"#);
    assert!(matches!(err, AnalyzeError::NoSpeechDetected));
}

#[test]
fn json_body_without_known_keys_gets_generic_message() {
    let err = classify_error_body(503, r#"{"status": "down"}"#);
    match err {
        AnalyzeError::ServerError { code, message } => {
            assert_eq!(code, 503);
            assert_eq!(message, "API error: 503");
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[test]
fn non_json_body_becomes_server_error_with_code() {
    let err = classify_error_body(502, "<html>Bad Gateway</html>");
    match err {
        AnalyzeError::ServerError { code, .. } => assert_eq!(code, 502),
        other => panic!("expected ServerError, got {other:?}"),
    }
}

// ============================================================
// user_message — fixed user-facing sentences
// ============================================================

#[test]
fn each_kind_has_a_fixed_sentence() {
    assert_eq!(
        AnalyzeError::EmptyFile.user_message(),
        "The audio file is empty. Please upload a valid audio file."
    );
    assert_eq!(
        AnalyzeError::AuthenticationFailed.user_message(),
        "Authentication error: Invalid API key."
    );
    assert_eq!(
        AnalyzeError::NoSpeechDetected.user_message(),
        "Could not hear clear speech in the audio. Please upload a call recording."
    );
}

#[test]
fn unrecognized_server_message_is_prefixed_not_suppressed() {
    let err = AnalyzeError::ServerError {
        code: 500,
        message: "whisper crashed".to_string(),
    };
    assert_eq!(err.user_message(), "Error: whisper crashed");
}
