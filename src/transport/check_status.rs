use serde::Deserialize;

use super::envelope::{EnvelopeFailure, check_transport, unwrap_envelope};
use crate::domain::MessageStatusResponse;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageStatusJsonData {
    message_id: String,
    status: String,
    #[serde(default)]
    sent_at: Option<String>,
    #[serde(default)]
    delivered_at: Option<String>,
}

impl From<MessageStatusJsonData> for MessageStatusResponse {
    fn from(value: MessageStatusJsonData) -> Self {
        Self {
            message_id: value.message_id,
            status: value.status,
            sent_at: value.sent_at,
            delivered_at: value.delivered_at,
        }
    }
}

pub fn decode_message_status_response(
    status: u16,
    body: &str,
) -> Result<MessageStatusResponse, EnvelopeFailure> {
    check_transport(status, body)?;
    let data: MessageStatusJsonData = unwrap_envelope(body)?;
    Ok(data.into())
}
