//! Typed Rust client for the Notify Africa SMS HTTP API.
//!
//! The design follows a small layered shape: a domain layer of plain typed
//! records, a transport layer for the provider's wire format (the response
//! envelope in particular), and a client layer orchestrating requests.
//!
//! ```rust,no_run
//! use notify_africa::NotifyAfricaClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), notify_africa::NotifyAfricaError> {
//!     let client = NotifyAfricaClient::new("your-api-token");
//!     let receipt = client
//!         .send_single_message("255689737459", "hello", "137")
//!         .await?;
//!     println!("queued as {} ({})", receipt.message_id, receipt.status);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{NotifyAfricaClient, NotifyAfricaClientBuilder, NotifyAfricaError, Operation};
pub use domain::{
    MessageStatusResponse, SendBatch, SendBatchResponse, SendSingle, SendSingleResponse,
};
