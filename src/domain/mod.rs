//! Domain layer: plain typed records, no I/O and no wire-format concerns.

mod request;
mod response;

pub use request::{SendBatch, SendSingle};
pub use response::{MessageStatusResponse, SendBatchResponse, SendSingleResponse};
