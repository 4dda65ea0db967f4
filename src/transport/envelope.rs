use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Application-level success code inside the provider envelope.
///
/// Distinct from the HTTP status code; the provider wraps every payload in
/// `{status, message?, data}` and signals success with exactly `200`.
const ENVELOPE_OK: i64 = 200;

#[derive(Debug, thiserror::Error)]
pub enum EnvelopeFailure {
    /// Non-2xx HTTP status, regardless of body content.
    #[error("unexpected HTTP status: {status}")]
    Http { status: u16, message: Option<String> },

    /// Envelope `status` other than 200 on a successful HTTP response.
    #[error("provider reported failure")]
    Api { message: Option<String> },

    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response envelope is missing the data field")]
    MissingData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct Envelope<T> {
    status: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// First validation step: the transport-level HTTP status.
///
/// A status outside `200..=299` fails the call no matter what the body says;
/// the body is still inspected leniently for a provider `message` so the
/// caller can surface it.
pub fn check_transport(status: u16, body: &str) -> Result<(), EnvelopeFailure> {
    if (200..=299).contains(&status) {
        return Ok(());
    }
    Err(EnvelopeFailure::Http {
        status,
        message: provider_message(body),
    })
}

/// Second validation step: decode the envelope, require application-level
/// `status` 200, and unwrap the `data` payload.
pub fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<T, EnvelopeFailure> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    if envelope.status != ENVELOPE_OK {
        return Err(EnvelopeFailure::Api {
            message: envelope.message,
        });
    }
    envelope.data.ok_or(EnvelopeFailure::MissingData)
}

fn provider_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
    struct Payload {
        value: String,
    }

    #[test]
    fn check_transport_accepts_the_success_range() {
        assert!(check_transport(200, "").is_ok());
        assert!(check_transport(204, "").is_ok());
        assert!(check_transport(299, "").is_ok());
    }

    #[test]
    fn check_transport_fails_outside_the_success_range() {
        let err = check_transport(401, r#"{"message":"Unauthorized"}"#).unwrap_err();
        match err {
            EnvelopeFailure::Http { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message.as_deref(), Some("Unauthorized"));
            }
            other => panic!("unexpected failure: {other:?}"),
        }

        assert!(check_transport(199, "").is_err());
        assert!(check_transport(300, "").is_err());
    }

    #[test]
    fn check_transport_tolerates_unparseable_error_bodies() {
        let err = check_transport(500, "<html>oops</html>").unwrap_err();
        match err {
            EnvelopeFailure::Http { status, message } => {
                assert_eq!(status, 500);
                assert!(message.is_none());
            }
            other => panic!("unexpected failure: {other:?}"),
        }
    }

    #[test]
    fn check_transport_handles_error_bodies_without_a_message() {
        let err = check_transport(404, r#"{"detail":"nope"}"#).unwrap_err();
        assert!(matches!(
            err,
            EnvelopeFailure::Http {
                status: 404,
                message: None
            }
        ));
    }

    #[test]
    fn unwrap_envelope_returns_the_data_payload() {
        let body = r#"{"status":200,"data":{"value":"ok"}}"#;
        let payload: Payload = unwrap_envelope(body).unwrap();
        assert_eq!(
            payload,
            Payload {
                value: "ok".to_owned()
            }
        );
    }

    #[test]
    fn unwrap_envelope_fails_on_non_success_envelope_status() {
        let body = r#"{"status":403,"message":"Sender not active"}"#;
        let err = unwrap_envelope::<Payload>(body).unwrap_err();
        match err {
            EnvelopeFailure::Api { message } => {
                assert_eq!(message.as_deref(), Some("Sender not active"));
            }
            other => panic!("unexpected failure: {other:?}"),
        }

        let body = r#"{"status":500}"#;
        let err = unwrap_envelope::<Payload>(body).unwrap_err();
        assert!(matches!(err, EnvelopeFailure::Api { message: None }));
    }

    #[test]
    fn unwrap_envelope_fails_on_invalid_json() {
        let err = unwrap_envelope::<Payload>("{ not json }").unwrap_err();
        assert!(matches!(err, EnvelopeFailure::Decode(_)));
    }

    #[test]
    fn unwrap_envelope_requires_data_on_success() {
        let err = unwrap_envelope::<Payload>(r#"{"status":200}"#).unwrap_err();
        assert!(matches!(err, EnvelopeFailure::MissingData));
    }
}
