/// Request to send one message to one recipient.
///
/// Values are passed to the provider verbatim. The client performs no
/// phone-number or message-length validation; the provider is authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSingle {
    pub phone_number: String,
    pub message: String,
    pub sender_id: String,
}

impl SendSingle {
    pub fn new(
        phone_number: impl Into<String>,
        message: impl Into<String>,
        sender_id: impl Into<String>,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            message: message.into(),
            sender_id: sender_id.into(),
        }
    }
}

/// Request to send the same message to many recipients in one call.
///
/// The recipient sequence is preserved exactly as given (order and count).
/// An empty sequence is sent as-is, not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendBatch {
    pub phone_numbers: Vec<String>,
    pub message: String,
    pub sender_id: String,
}

impl SendBatch {
    pub fn new(
        phone_numbers: Vec<String>,
        message: impl Into<String>,
        sender_id: impl Into<String>,
    ) -> Self {
        Self {
            phone_numbers,
            message: message.into(),
            sender_id: sender_id.into(),
        }
    }
}
