use serde::{Deserialize, Serialize};

use super::envelope::{EnvelopeFailure, check_transport, unwrap_envelope};
use crate::domain::{SendBatch, SendBatchResponse};

#[derive(Debug, Clone, Serialize)]
struct SendBatchJsonBody<'a> {
    phone_numbers: &'a [String],
    message: &'a str,
    sender_id: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendBatchJsonData {
    message_count: u64,
    credits_deducted: f64,
    remaining_balance: f64,
}

impl From<SendBatchJsonData> for SendBatchResponse {
    fn from(value: SendBatchJsonData) -> Self {
        Self {
            message_count: value.message_count,
            credits_deducted: value.credits_deducted,
            remaining_balance: value.remaining_balance,
        }
    }
}

pub fn encode_send_batch_body(request: &SendBatch) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SendBatchJsonBody {
        phone_numbers: &request.phone_numbers,
        message: &request.message,
        sender_id: &request.sender_id,
    })
}

pub fn decode_send_batch_response(
    status: u16,
    body: &str,
) -> Result<SendBatchResponse, EnvelopeFailure> {
    check_transport(status, body)?;
    let data: SendBatchJsonData = unwrap_envelope(body)?;
    Ok(data.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_body_preserves_recipient_order() {
        let request = SendBatch::new(
            vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
            "hi all",
            "137",
        );
        let body = encode_send_batch_body(&request).unwrap();
        assert_eq!(
            body,
            r#"{"phone_numbers":["a","b","c"],"message":"hi all","sender_id":"137"}"#
        );
    }

    #[test]
    fn encode_body_passes_an_empty_batch_through() {
        let request = SendBatch::new(Vec::new(), "hi", "137");
        let body = encode_send_batch_body(&request).unwrap();
        assert_eq!(
            body,
            r#"{"phone_numbers":[],"message":"hi","sender_id":"137"}"#
        );
    }

    #[test]
    fn decode_success_envelope_into_receipt() {
        let body = r#"
        {
          "status": 200,
          "data": { "messageCount": 2, "creditsDeducted": 2, "remainingBalance": 98 }
        }
        "#;

        let receipt = decode_send_batch_response(200, body).unwrap();
        assert_eq!(receipt.message_count, 2);
        assert_eq!(receipt.credits_deducted, 2.0);
        assert_eq!(receipt.remaining_balance, 98.0);
    }

    #[test]
    fn decode_accepts_fractional_credit_amounts() {
        let body = r#"
        {
          "status": 200,
          "data": { "messageCount": 3, "creditsDeducted": 1.5, "remainingBalance": 96.5 }
        }
        "#;

        let receipt = decode_send_batch_response(200, body).unwrap();
        assert_eq!(receipt.message_count, 3);
        assert_eq!(receipt.credits_deducted, 1.5);
        assert_eq!(receipt.remaining_balance, 96.5);
    }

    #[test]
    fn decode_envelope_level_failure_without_message() {
        let body = r#"{"status":402}"#;
        let err = decode_send_batch_response(200, body).unwrap_err();
        assert!(matches!(err, EnvelopeFailure::Api { message: None }));
    }
}
