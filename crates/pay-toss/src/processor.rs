//! # Toss Payments Processor
//!
//! Drives one payment session through the host's lifecycle:
//!
//! ```text
//! initiate ──► update* ──► authorize (confirm) ──► retrieve (inquiry)
//!                                   │
//!                                   └──► refund (cancel)
//! ```
//!
//! The processor keeps a single [`SessionStore`] and never persists anything.
//! Every failure is returned to the host as an [`AdapterError`].

use crate::client::{GatewayClient, TossClient};
use crate::config::TossConfig;
use crate::status::{translate, GatewayStatus};
use crate::store::SessionStore;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Map, Value};
use session_core::{
    amount_field, str_field, AdapterError, AuthorizeResponse, HostSessionStatus, PaymentContext,
    PaymentIntent, PaymentProcessor, ProcessorError, ProcessorOutcome, ProcessorResult,
    SessionData, SessionResponse, ValidationKind,
};
use tracing::{debug, info, instrument};

/// Identifier the host registers the processor under
pub const IDENTIFIER: &str = "tosspayments";

const REINITIATE_ERROR: &str =
    "Error in update_payment during the re-initiate of the new payment for new customer";
const UPDATE_DATA_ERROR: &str =
    "Error in update_payment_data during the retrieve of the custom data";
const AUTHORIZE_ERROR: &str =
    "Error in authorize_payment during the request to Toss Payments API";
const RETRIEVE_ERROR: &str =
    "Error in retrieve_payment getting payment information from Toss Payments API";
const REFUND_ERROR: &str = "Error in refund_payment";

/// Host payment processor backed by Toss Payments
pub struct TossPaymentsProcessor<G = TossClient> {
    client: G,
    store: SessionStore,
    debug: bool,
}

impl TossPaymentsProcessor<TossClient> {
    /// Create a processor talking to the Toss Payments API
    pub fn new(config: TossConfig) -> ProcessorResult<Self> {
        let debug = config.debug;
        Ok(Self::with_client(TossClient::new(config)?, debug))
    }

    /// Create from the host's plugin options
    pub fn from_options(options: &Map<String, Value>) -> ProcessorResult<Self> {
        Self::new(TossConfig::from_options(options)?)
    }

    /// Create from environment variables
    pub fn from_env() -> ProcessorResult<Self> {
        Self::new(TossConfig::from_env()?)
    }
}

impl<G: GatewayClient> TossPaymentsProcessor<G> {
    /// Create a processor over any gateway client
    pub fn with_client(client: G, debug: bool) -> Self {
        Self {
            client,
            store: SessionStore::new(),
            debug,
        }
    }

    pub fn client(&self) -> &G {
        &self.client
    }

    /// Last known gateway status
    pub fn gateway_status(&self) -> Option<GatewayStatus> {
        self.store.status()
    }

    pub fn current_intent(&self) -> Option<&PaymentIntent> {
        self.store.intent()
    }

    /// Log a payload when debug mode is on
    fn trace_payload(&self, operation: &str, payload: &impl Serialize) {
        if self.debug {
            let payload = serde_json::to_string_pretty(payload).unwrap_or_default();
            info!(operation, payload = %payload, "TOSSPAYMENTS_PAYMENT_DEBUG");
        }
    }
}

/// Session fields required to confirm a payment
struct ConfirmKeys {
    payment_key: String,
    order_id: String,
    amount: i64,
}

impl ConfirmKeys {
    fn from_session(data: &SessionData) -> ProcessorResult<Self> {
        let payment_key = str_field(data, "paymentKey");
        let order_id = str_field(data, "orderId");
        let amount = amount_field(data, "amount").filter(|a| *a != 0);

        match (payment_key, order_id, amount) {
            (Some(payment_key), Some(order_id), Some(amount)) => Ok(Self {
                payment_key: payment_key.to_string(),
                order_id: order_id.to_string(),
                amount,
            }),
            _ => Err(ProcessorError::validation(
                ValidationKind::NotAllowed,
                "Can not find necessary keys in authorize_payment",
            )),
        }
    }
}

fn required_payment_key<'a>(
    data: &'a SessionData,
    kind: ValidationKind,
    operation: &str,
) -> ProcessorResult<&'a str> {
    str_field(data, "paymentKey").ok_or_else(|| {
        ProcessorError::validation(
            kind,
            format!("Can not find necessary keys in {}", operation),
        )
    })
}

#[async_trait]
impl<G: GatewayClient> PaymentProcessor for TossPaymentsProcessor<G> {
    fn identifier(&self) -> &'static str {
        IDENTIFIER
    }

    #[instrument(skip(self, context), fields(resource_id = %context.resource_id))]
    async fn initiate_payment(
        &mut self,
        context: &PaymentContext,
    ) -> ProcessorOutcome<SessionResponse> {
        self.trace_payload("initiate_payment", context);

        let intent = self
            .store
            .initialize(&context.resource_id, &context.email, context.amount)
            .clone();

        Ok(intent.into())
    }

    #[instrument(skip(self, context), fields(resource_id = %context.resource_id))]
    async fn update_payment(
        &mut self,
        context: &PaymentContext,
    ) -> ProcessorOutcome<SessionResponse> {
        self.trace_payload("update_payment", context);
        self.trace_payload("update_payment.intent", &self.store.intent());

        let is_same_resource = self
            .store
            .intent()
            .is_some_and(|intent| intent.id() == Some(context.resource_id.as_str()));

        if !is_same_resource {
            debug!("No intent for resource, starting a new payment");
            return self
                .initiate_payment(context)
                .await
                .map_err(|e| AdapterError::chain(REINITIATE_ERROR, &e));
        }

        // Amount changes always come from the host, never from stored session data
        let is_stale = self
            .store
            .intent()
            .is_some_and(|intent| {
                intent.email().is_none() || intent.amount() != Some(context.amount)
            });

        if is_stale {
            let intent = self
                .store
                .merge_contact(&context.email, context.amount)
                .clone();
            return Ok(intent.into());
        }

        let intent = self
            .store
            .replace(context.payment_session_data.clone())
            .clone();
        self.trace_payload("update_payment.updated", &intent);

        Ok(intent.into())
    }

    #[instrument(skip(self, data))]
    async fn update_payment_data(
        &self,
        session_id: &str,
        data: SessionData,
    ) -> ProcessorOutcome<SessionData> {
        self.trace_payload("update_payment_data", &data);

        let stored_amount = self.store.intent().and_then(PaymentIntent::amount);
        if amount_field(&data, "amount") != stored_amount {
            let cause = ProcessorError::validation(
                ValidationKind::InvalidData,
                "Can not update amount from update_payment_data",
            );
            return Err(AdapterError::new(UPDATE_DATA_ERROR, &cause));
        }

        Ok(data)
    }

    fn get_payment_status(&self, session_data: &SessionData) -> HostSessionStatus {
        self.trace_payload("get_payment_status", session_data);

        if str_field(session_data, "id").is_none() {
            return HostSessionStatus::Pending;
        }

        translate(self.store.status())
    }

    #[instrument(skip(self, session_data, context))]
    async fn authorize_payment(
        &mut self,
        session_data: SessionData,
        context: &SessionData,
    ) -> ProcessorOutcome<AuthorizeResponse> {
        self.trace_payload(
            "authorize_payment",
            &json!({ "sessionData": &session_data, "context": context }),
        );

        let keys = ConfirmKeys::from_session(&session_data)
            .map_err(|e| AdapterError::new(AUTHORIZE_ERROR, &e))?;

        let record = self
            .client
            .confirm(&keys.payment_key, &keys.order_id, keys.amount)
            .await
            .map_err(|e| AdapterError::new(AUTHORIZE_ERROR, &e))?;
        self.trace_payload("authorize_payment.confirm", &record);

        self.store.set_status(record.status);
        let status = self.get_payment_status(&session_data);

        info!(
            "Confirmed payment: order_id={}, gateway_status={}, status={}",
            keys.order_id,
            record.status,
            status.as_str()
        );

        let mut data = session_data;
        data.insert("receipt".to_string(), json!(record.receipt_url()));
        data.insert("checkout".to_string(), json!(record.checkout_url()));
        data.insert("method".to_string(), json!(record.method));
        data.insert("card".to_string(), record.card.unwrap_or(Value::Null));

        Ok(AuthorizeResponse { status, data })
    }

    #[instrument(skip(self, session_data))]
    async fn retrieve_payment(&self, session_data: SessionData) -> ProcessorOutcome<SessionData> {
        self.trace_payload("retrieve_payment", &session_data);

        let payment_key =
            required_payment_key(&session_data, ValidationKind::InvalidData, "retrieve_payment")
                .map_err(|e| AdapterError::new(RETRIEVE_ERROR, &e))?;

        // The record only proves the payment still exists upstream; local status is not reconciled
        let record = self
            .client
            .inquire(payment_key)
            .await
            .map_err(|e| AdapterError::new(RETRIEVE_ERROR, &e))?;
        self.trace_payload("retrieve_payment.inquiry", &record);

        Ok(session_data)
    }

    #[instrument(skip(self, session_data))]
    async fn refund_payment(
        &self,
        session_data: SessionData,
        refund_amount: i64,
    ) -> ProcessorOutcome<SessionData> {
        self.trace_payload(
            "refund_payment",
            &json!({ "sessionData": &session_data, "refundAmount": refund_amount }),
        );

        let payment_key = required_payment_key(
            &session_data,
            ValidationKind::InvalidArgument,
            "refund_payment",
        )
        .map_err(|e| AdapterError::new(REFUND_ERROR, &e))?;

        // Always a full cancellation; refund_amount is not forwarded
        let record = self
            .client
            .cancel(payment_key, "", None)
            .await
            .map_err(|e| AdapterError::new(REFUND_ERROR, &e))?;
        self.trace_payload("refund_payment.cancel", &record);

        Ok(session_data)
    }

    /// Toss settles funds at confirmation, so there is nothing to capture.
    async fn capture_payment(&self, session_data: SessionData) -> ProcessorOutcome<SessionData> {
        Ok(session_data)
    }

    async fn cancel_payment(&self, session_data: SessionData) -> ProcessorOutcome<SessionData> {
        Ok(session_data)
    }

    async fn delete_payment(&self, session_data: SessionData) -> ProcessorOutcome<SessionData> {
        Ok(session_data)
    }
}
