use serde::{Deserialize, Serialize};

use super::envelope::{EnvelopeFailure, check_transport, unwrap_envelope};
use crate::domain::{SendSingle, SendSingleResponse};

#[derive(Debug, Clone, Serialize)]
struct SendSingleJsonBody<'a> {
    phone_number: &'a str,
    message: &'a str,
    sender_id: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendSingleJsonData {
    message_id: String,
    status: String,
}

impl From<SendSingleJsonData> for SendSingleResponse {
    fn from(value: SendSingleJsonData) -> Self {
        Self {
            message_id: value.message_id,
            status: value.status,
        }
    }
}

pub fn encode_send_single_body(request: &SendSingle) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SendSingleJsonBody {
        phone_number: &request.phone_number,
        message: &request.message,
        sender_id: &request.sender_id,
    })
}

pub fn decode_send_single_response(
    status: u16,
    body: &str,
) -> Result<SendSingleResponse, EnvelopeFailure> {
    check_transport(status, body)?;
    let data: SendSingleJsonData = unwrap_envelope(body)?;
    Ok(data.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_body_uses_snake_case_wire_fields() {
        let request = SendSingle::new("255600000", "hello", "137");
        let body = encode_send_single_body(&request).unwrap();
        assert_eq!(
            body,
            r#"{"phone_number":"255600000","message":"hello","sender_id":"137"}"#
        );
    }

    #[test]
    fn decode_success_envelope_into_receipt() {
        let body = r#"
        {
          "status": 200,
          "data": { "messageId": "156022", "status": "queued" }
        }
        "#;

        let receipt = decode_send_single_response(200, body).unwrap();
        assert_eq!(receipt.message_id, "156022");
        assert_eq!(receipt.status, "queued");
    }

    #[test]
    fn decode_envelope_level_failure() {
        let body = r#"{"status":422,"message":"Invalid phone number"}"#;
        let err = decode_send_single_response(200, body).unwrap_err();
        match err {
            EnvelopeFailure::Api { message } => {
                assert_eq!(message.as_deref(), Some("Invalid phone number"));
            }
            other => panic!("unexpected failure: {other:?}"),
        }
    }

    #[test]
    fn decode_checks_http_status_before_the_envelope() {
        let body = r#"{"message":"Unauthorized"}"#;
        let err = decode_send_single_response(401, body).unwrap_err();
        assert!(matches!(err, EnvelopeFailure::Http { status: 401, .. }));
    }
}
