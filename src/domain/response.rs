/// Receipt for a single-message send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSingleResponse {
    /// Provider-assigned message id, usable with the status operation.
    pub message_id: String,
    /// Processing status reported by the provider (e.g. `"queued"`).
    pub status: String,
}

/// Receipt for a batch send.
#[derive(Debug, Clone, PartialEq)]
pub struct SendBatchResponse {
    pub message_count: u64,
    pub credits_deducted: f64,
    pub remaining_balance: f64,
}

/// Delivery status of a previously sent message.
///
/// Timestamps are ISO-8601 strings; `None` until the corresponding event
/// has happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStatusResponse {
    pub message_id: String,
    pub status: String,
    pub sent_at: Option<String>,
    pub delivered_at: Option<String>,
}
