// Transport error taxonomy.
//
// The backend reports failures as free-text messages inside JSON bodies.
// classify_error_body / classify_server_message pin each one to a closed
// kind right at the transport boundary, so everything downstream matches
// on the enum and the substring heuristics cannot leak anywhere else.

use thiserror::Error;

/// Terminal failure modes for one analysis attempt. Every kind ends the
/// attempt; none is retried automatically.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("audio file is empty")]
    EmptyFile,

    #[error("unsupported audio format")]
    UnsupportedFormat,

    #[error("no clear speech detected in the audio")]
    NoSpeechDetected,

    #[error("audio file is corrupt or unreadable")]
    CorruptFile,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("analysis backend unreachable")]
    NetworkUnreachable(#[source] reqwest::Error),

    #[error("server error {code}: {message}")]
    ServerError { code: u16, message: String },

    #[error("malformed response from the analysis backend")]
    MalformedResponse(#[source] serde_json::Error),
}

impl AnalyzeError {
    /// The one fixed sentence shown to the user for this kind. Unrecognized
    /// server messages surface behind a generic "Error:" marker rather
    /// than being suppressed.
    pub fn user_message(&self) -> String {
        match self {
            AnalyzeError::EmptyFile => {
                "The audio file is empty. Please upload a valid audio file.".to_string()
            }
            AnalyzeError::UnsupportedFormat => {
                "Audio format issue. Try uploading a different format.".to_string()
            }
            AnalyzeError::NoSpeechDetected => {
                "Could not hear clear speech in the audio. Please upload a call recording."
                    .to_string()
            }
            AnalyzeError::CorruptFile => {
                "File is empty or corrupt. Please upload a valid audio file.".to_string()
            }
            AnalyzeError::AuthenticationFailed => {
                "Authentication error: Invalid API key.".to_string()
            }
            AnalyzeError::NetworkUnreachable(_) => {
                "Failed to reach the analysis backend. Make sure the server is running."
                    .to_string()
            }
            AnalyzeError::ServerError { message, .. } => format!("Error: {message}"),
            AnalyzeError::MalformedResponse(_) => {
                "The analysis backend returned a response that could not be parsed.".to_string()
            }
        }
    }
}

/// Classify an error response body.
///
/// A JSON body is probed for the backend's message under `error`, `detail`,
/// or `message` (in that order). A non-JSON body becomes a bare ServerError
/// carrying the status code — raw HTTP never reaches the caller.
pub fn classify_error_body(status: u16, body: &str) -> AnalyzeError {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            let message = ["error", "detail", "message"]
                .iter()
                .find_map(|key| value.get(*key))
                .map(|v| match v {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .unwrap_or_else(|| format!("API error: {status}"));
            classify_server_message(status, &message)
        }
        Err(_) => AnalyzeError::ServerError {
            code: status,
            message: format!("non-JSON response ({status})"),
        },
    }
}

/// Map a backend error message to its tagged kind.
///
/// The substring checks mirror the backend's known message set; anything
/// unrecognized stays a ServerError with the original text.
pub fn classify_server_message(status: u16, message: &str) -> AnalyzeError {
    if status == 401 || status == 403 {
        return AnalyzeError::AuthenticationFailed;
    }

    let lower = message.to_lowercase();
    if lower.contains("empty audio file") {
        AnalyzeError::EmptyFile
    } else if lower.contains("unsupported") {
        AnalyzeError::UnsupportedFormat
    } else if lower.contains("no clear speech") {
        AnalyzeError::NoSpeechDetected
    } else if lower.contains("file is empty") {
        AnalyzeError::CorruptFile
    } else if lower.contains("invalid or missing api key") {
        AnalyzeError::AuthenticationFailed
    } else {
        AnalyzeError::ServerError {
            code: status,
            message: message.to_string(),
        }
    }
}
