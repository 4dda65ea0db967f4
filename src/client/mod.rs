//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::{
    MessageStatusResponse, SendBatch, SendBatchResponse, SendSingle, SendSingleResponse,
};
use crate::transport::{self, EnvelopeFailure};

const DEFAULT_BASE_URL: &str = "https://api.notify.africa";

const SEND_SINGLE_PATH: &str = "/api/v1/api/messages/send";
const SEND_BATCH_PATH: &str = "/api/v1/api/messages/batch";
const CHECK_STATUS_PATH: &str = "/api/v1/api/messages/status/";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        bearer_token: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn get<'a>(
        &'a self,
        url: &'a str,
        bearer_token: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        bearer_token: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .bearer_auth(bearer_token)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
        bearer_token: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).bearer_auth(bearer_token).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The three API operations, used to tag errors with their origin.
pub enum Operation {
    SendSingle,
    SendBatch,
    CheckStatus,
}

impl Operation {
    fn prefix(self) -> &'static str {
        match self {
            Self::SendSingle => "Error sending single message",
            Self::SendBatch => "Error sending batch messages",
            Self::CheckStatus => "Error checking message status",
        }
    }

    /// Fixed message used when the provider envelope reports a failure
    /// without a `message` field.
    fn fallback(self) -> &'static str {
        match self {
            Self::SendSingle => "Failed to send message",
            Self::SendBatch => "Failed to send batch messages",
            Self::CheckStatus => "Failed to retrieve message status",
        }
    }
}

fn http_error_text(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("unexpected HTTP status: {status}"),
    }
}

fn api_error_text<'a>(op: &Operation, message: &'a Option<String>) -> &'a str {
    message.as_deref().unwrap_or(op.fallback())
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`NotifyAfricaClient`].
///
/// Every operation failure renders as `<operation prefix>: <inner text>`, so
/// the inner message stays recoverable by substring match and the prefix
/// identifies which operation failed. The inner text comes from, in priority
/// order: the provider's `message` field, the operation's fixed fallback
/// string, or the numeric HTTP status code.
pub enum NotifyAfricaError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("{}: {}", .op.prefix(), .source)]
    Transport {
        op: Operation,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Non-successful HTTP status code returned by the server.
    #[error("{}: {}", .op.prefix(), http_error_text(.status, .message))]
    HttpStatus {
        op: Operation,
        status: u16,
        message: Option<String>,
    },

    /// The provider envelope carried an application-level `status` other
    /// than 200.
    #[error("{}: {}", .op.prefix(), api_error_text(.op, .message))]
    Api {
        op: Operation,
        message: Option<String>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("{}: {}", .op.prefix(), .source)]
    Parse {
        op: Operation,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The customized HTTP client could not be constructed.
    #[error("failed to construct HTTP client: {0}")]
    Http(#[source] Box<dyn StdError + Send + Sync>),
}

impl NotifyAfricaError {
    /// Which operation failed, when the failure came from one.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Transport { op, .. }
            | Self::HttpStatus { op, .. }
            | Self::Api { op, .. }
            | Self::Parse { op, .. } => Some(*op),
            Self::Http(_) => None,
        }
    }

    /// Transport-level HTTP status code, for [`NotifyAfricaError::HttpStatus`].
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn envelope_error(op: Operation, failure: EnvelopeFailure) -> NotifyAfricaError {
    match failure {
        EnvelopeFailure::Http { status, message } => NotifyAfricaError::HttpStatus {
            op,
            status,
            message,
        },
        EnvelopeFailure::Api { message } => NotifyAfricaError::Api { op, message },
        other => NotifyAfricaError::Parse {
            op,
            source: Box::new(other),
        },
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}

#[derive(Debug, Clone)]
/// Builder for [`NotifyAfricaClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct NotifyAfricaClientBuilder {
    api_token: String,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl NotifyAfricaClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent
    /// override.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL. Trailing slashes are stripped.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`NotifyAfricaClient`].
    pub fn build(self) -> Result<NotifyAfricaClient, NotifyAfricaError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| NotifyAfricaError::Http(Box::new(err)))?;

        Ok(NotifyAfricaClient {
            api_token: self.api_token,
            base_url: normalize_base_url(&self.base_url),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Notify Africa client.
///
/// Holds the API token and the normalized base URL; each operation is an
/// independent request/parse/unwrap sequence, so one instance can serve
/// concurrent calls with no ordering guarantee between their completions.
pub struct NotifyAfricaClient {
    api_token: String,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl NotifyAfricaClient {
    /// Create a client against the production endpoint.
    ///
    /// For more customization, use [`NotifyAfricaClient::builder`].
    pub fn new(api_token: impl Into<String>) -> Self {
        Self::with_base_url(api_token, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL. Trailing slashes are
    /// stripped, so `https://x/` and `https://x` behave identically.
    pub fn with_base_url(api_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: normalize_base_url(&base_url.into()),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_token: impl Into<String>) -> NotifyAfricaClientBuilder {
        NotifyAfricaClientBuilder::new(api_token)
    }

    /// Send one message to one recipient.
    ///
    /// Inputs are passed to the provider verbatim; no client-side validation
    /// of phone-number format or message length is performed.
    ///
    /// Errors:
    /// - [`NotifyAfricaError::Transport`] when the request itself fails,
    /// - [`NotifyAfricaError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`NotifyAfricaError::Api`] when the envelope `status` is not 200,
    /// - [`NotifyAfricaError::Parse`] when the body cannot be decoded.
    pub async fn send_single_message(
        &self,
        phone_number: impl Into<String>,
        message: impl Into<String>,
        sender_id: impl Into<String>,
    ) -> Result<SendSingleResponse, NotifyAfricaError> {
        let op = Operation::SendSingle;
        let request = SendSingle::new(phone_number, message, sender_id);
        let url = format!("{}{SEND_SINGLE_PATH}", self.base_url);
        debug!("sending single message via {url}");

        let body = transport::encode_send_single_body(&request).map_err(|err| {
            NotifyAfricaError::Parse {
                op,
                source: Box::new(err),
            }
        })?;

        let response = self
            .http
            .post_json(&url, &self.api_token, body)
            .await
            .map_err(|source| NotifyAfricaError::Transport { op, source })?;

        transport::decode_send_single_response(response.status, &response.body)
            .map_err(|failure| envelope_error(op, failure))
    }

    /// Send the same message to many recipients in one call.
    ///
    /// The recipient sequence is forwarded unchanged (order and count); an
    /// empty sequence is passed through rather than rejected client-side.
    pub async fn send_batch_messages(
        &self,
        phone_numbers: impl IntoIterator<Item = impl Into<String>>,
        message: impl Into<String>,
        sender_id: impl Into<String>,
    ) -> Result<SendBatchResponse, NotifyAfricaError> {
        let op = Operation::SendBatch;
        let request = SendBatch::new(
            phone_numbers.into_iter().map(Into::into).collect(),
            message,
            sender_id,
        );
        let url = format!("{}{SEND_BATCH_PATH}", self.base_url);
        debug!(
            "sending batch of {} messages via {url}",
            request.phone_numbers.len()
        );

        let body = transport::encode_send_batch_body(&request).map_err(|err| {
            NotifyAfricaError::Parse {
                op,
                source: Box::new(err),
            }
        })?;

        let response = self
            .http
            .post_json(&url, &self.api_token, body)
            .await
            .map_err(|source| NotifyAfricaError::Transport { op, source })?;

        transport::decode_send_batch_response(response.status, &response.body)
            .map_err(|failure| envelope_error(op, failure))
    }

    /// Query delivery status of a previously sent message.
    ///
    /// Issues a GET with only the `Authorization` header; the message id is
    /// embedded in the path verbatim.
    pub async fn check_message_status(
        &self,
        message_id: impl AsRef<str>,
    ) -> Result<MessageStatusResponse, NotifyAfricaError> {
        let op = Operation::CheckStatus;
        let url = format!("{}{CHECK_STATUS_PATH}{}", self.base_url, message_id.as_ref());
        debug!("checking message status via {url}");

        let response = self
            .http
            .get(&url, &self.api_token)
            .await
            .map_err(|source| NotifyAfricaError::Transport { op, source })?;

        transport::decode_message_status_response(response.status, &response.body)
            .map_err(|failure| envelope_error(op, failure))
    }
}
