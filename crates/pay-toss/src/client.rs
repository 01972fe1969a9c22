//! # Toss Payments Client
//!
//! HTTPS client for the three payment APIs the processor uses: confirm,
//! inquiry and cancel. Each call is made once; failures are returned as
//! [`ProcessorError`] without retrying.

use crate::config::TossConfig;
use crate::error_codes::GatewayOperation;
use crate::payment::{CancelRequest, ConfirmRequest, GatewayErrorBody, PaymentRecord};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use session_core::{ProcessorError, ProcessorResult, ValidationKind};
use tracing::{debug, error, instrument, warn};

/// Payment gateway operations consumed by the processor.
#[async_trait]
pub trait GatewayClient: Send + Sync {
    /// Approve an authenticated payment.
    ///
    /// Must be called within 10 minutes of client-side authentication, with
    /// the exact amount the customer authenticated.
    async fn confirm(
        &self,
        payment_key: &str,
        order_id: &str,
        amount: i64,
    ) -> ProcessorResult<PaymentRecord>;

    /// Look a payment up by its payment key.
    async fn inquire(&self, payment_key: &str) -> ProcessorResult<PaymentRecord>;

    /// Look a payment up by the merchant's order id.
    async fn inquire_by_order_id(&self, order_id: &str) -> ProcessorResult<PaymentRecord>;

    /// Cancel a confirmed payment. `amount` of `None` cancels the full balance.
    async fn cancel(
        &self,
        payment_key: &str,
        reason: &str,
        amount: Option<i64>,
    ) -> ProcessorResult<PaymentRecord>;
}

/// reqwest-backed Toss Payments client
pub struct TossClient {
    config: TossConfig,
    client: Client,
}

impl TossClient {
    /// Create a new client
    pub fn new(config: TossConfig) -> ProcessorResult<Self> {
        let client = Client::builder().build().map_err(|e| {
            ProcessorError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> ProcessorResult<Self> {
        Self::new(TossConfig::from_env()?)
    }

    pub fn config(&self) -> &TossConfig {
        &self.config
    }

    /// Join path segments onto the API base URL.
    ///
    /// Each segment is percent-encoded, so a payment key or order id can
    /// never change which endpoint is called.
    fn url(&self, segments: &[&str]) -> ProcessorResult<Url> {
        if let Some(segment) = segments.iter().find(|s| **s == "." || **s == "..") {
            return Err(ProcessorError::validation(
                ValidationKind::InvalidArgument,
                format!("Invalid path segment: {:?}", segment),
            ));
        }

        let invalid_base = || {
            ProcessorError::Configuration(format!(
                "Invalid API base URL: {}",
                self.config.api_base_url
            ))
        };

        let mut url = Url::parse(&self.config.api_base_url).map_err(|_| invalid_base())?;
        url.path_segments_mut()
            .map_err(|_| invalid_base())?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", self.config.auth_header())
            .header("Content-Type", "application/json")
    }

    /// Send a request and decode the payment record, mapping failures.
    async fn execute(
        &self,
        operation: GatewayOperation,
        request: RequestBuilder,
    ) -> ProcessorResult<PaymentRecord> {
        let response = request
            .send()
            .await
            .map_err(|e| ProcessorError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProcessorError::Transport(e.to_string()))?;

        if !status.is_success() {
            error!(
                "Toss Payments {} error: status={}, body={}",
                operation.as_str(),
                status,
                body
            );

            return Err(match serde_json::from_str::<GatewayErrorBody>(&body) {
                Ok(error_body) => {
                    if !operation.is_known_code(&error_body.code) {
                        warn!(
                            "Undocumented {} error code from Toss Payments: {}",
                            operation.as_str(),
                            error_body.code
                        );
                    }
                    ProcessorError::Gateway {
                        status: status.as_u16(),
                        code: error_body.code,
                        message: error_body.message,
                    }
                }
                Err(_) => ProcessorError::Gateway {
                    status: status.as_u16(),
                    code: String::new(),
                    message: body,
                },
            });
        }

        let record: PaymentRecord = serde_json::from_str(&body).map_err(|e| {
            ProcessorError::Serialization(format!("Failed to parse Toss Payments response: {}", e))
        })?;

        debug!(
            "Toss Payments {} ok: status={}, payment_key={:?}",
            operation.as_str(),
            record.status,
            record.payment_key
        );

        Ok(record)
    }
}

#[async_trait]
impl GatewayClient for TossClient {
    #[instrument(skip(self, payment_key))]
    async fn confirm(
        &self,
        payment_key: &str,
        order_id: &str,
        amount: i64,
    ) -> ProcessorResult<PaymentRecord> {
        let body = ConfirmRequest {
            payment_key: payment_key.to_string(),
            order_id: order_id.to_string(),
            amount,
        };

        let url = self.url(&["v1", "payments", "confirm"])?;
        let request = self.authorized(self.client.post(url)).json(&body);

        self.execute(GatewayOperation::Confirm, request).await
    }

    #[instrument(skip(self, payment_key))]
    async fn inquire(&self, payment_key: &str) -> ProcessorResult<PaymentRecord> {
        let url = self.url(&["v1", "payments", payment_key])?;
        let request = self.authorized(self.client.get(url));

        self.execute(GatewayOperation::Inquiry, request).await
    }

    #[instrument(skip(self))]
    async fn inquire_by_order_id(&self, order_id: &str) -> ProcessorResult<PaymentRecord> {
        let url = self.url(&["v1", "payments", "orders", order_id])?;
        let request = self.authorized(self.client.get(url));

        self.execute(GatewayOperation::Inquiry, request).await
    }

    #[instrument(skip(self, payment_key, reason))]
    async fn cancel(
        &self,
        payment_key: &str,
        reason: &str,
        amount: Option<i64>,
    ) -> ProcessorResult<PaymentRecord> {
        let body = CancelRequest {
            cancel_reason: reason.to_string(),
            cancel_amount: amount,
        };

        let url = self.url(&["v1", "payments", payment_key, "cancel"])?;
        let request = self
            .authorized(self.client.post(url))
            .header("Idempotency-Key", cancel_idempotency_key(payment_key, amount))
            .json(&body);

        self.execute(GatewayOperation::Cancel, request).await
    }
}

/// Idempotency key for a cancel request.
///
/// A full cancellation can only succeed once per payment, so its key is
/// derived from the payment key and a resent full cancel is answered with
/// the first result. Partial cancels of equal amounts may be legitimate
/// repeats and get a fresh key each time.
fn cancel_idempotency_key(payment_key: &str, amount: Option<i64>) -> String {
    match amount {
        None => {
            let name = format!("tosspayments:cancel:{}", payment_key);
            uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
        }
        Some(_) => uuid::Uuid::new_v4().to_string(),
    }
}
