//! # Payment Processor Trait
//!
//! The contract a host platform drives during checkout. One processor
//! instance tracks one payment session at a time.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  PaymentProcessor (trait)                   │
//! │  storefront: initiate / update / update_data / authorize    │
//! │  lookup:     get_payment_status / retrieve                  │
//! │  admin:      refund / capture / cancel / delete             │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                  ┌─────────┴─────────┐
//!                  │ TossPayments      │
//!                  │   Processor       │
//!                  └───────────────────┘
//! ```
//!
//! Operations that change the tracked session take `&mut self`, so callers
//! serialize calls for a session through ordinary ownership.

use crate::error::ProcessorOutcome;
use crate::session::{
    AuthorizeResponse, HostSessionStatus, PaymentContext, SessionData, SessionResponse,
};
use async_trait::async_trait;

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Identifier the host registers this processor under.
    fn identifier(&self) -> &'static str;

    /// Start a new payment session for the host resource in `context`.
    async fn initiate_payment(
        &mut self,
        context: &PaymentContext,
    ) -> ProcessorOutcome<SessionResponse>;

    /// Refresh the session after the cart (amount, customer) changed.
    async fn update_payment(
        &mut self,
        context: &PaymentContext,
    ) -> ProcessorOutcome<SessionResponse>;

    /// Update the session's data field directly. The amount may not change here.
    async fn update_payment_data(
        &self,
        session_id: &str,
        data: SessionData,
    ) -> ProcessorOutcome<SessionData>;

    /// Current host status of the session.
    fn get_payment_status(&self, session_data: &SessionData) -> HostSessionStatus;

    /// Confirm the payment with the provider.
    ///
    /// # Arguments
    /// * `session_data` - Session data carrying the provider's payment identifiers
    /// * `context` - Extra host context (unused by some providers)
    async fn authorize_payment(
        &mut self,
        session_data: SessionData,
        context: &SessionData,
    ) -> ProcessorOutcome<AuthorizeResponse>;

    /// Look the payment up at the provider.
    async fn retrieve_payment(&self, session_data: SessionData) -> ProcessorOutcome<SessionData>;

    /// Refund an order's payment.
    async fn refund_payment(
        &self,
        session_data: SessionData,
        refund_amount: i64,
    ) -> ProcessorOutcome<SessionData>;

    /// Capture funds for an authorized payment.
    async fn capture_payment(&self, session_data: SessionData) -> ProcessorOutcome<SessionData>;

    /// Cancel an order's payment.
    async fn cancel_payment(&self, session_data: SessionData) -> ProcessorOutcome<SessionData>;

    /// Called before the host deletes a payment session.
    async fn delete_payment(&self, session_data: SessionData) -> ProcessorOutcome<SessionData>;
}

/// Type alias for a boxed payment processor (dynamic dispatch)
pub type BoxedPaymentProcessor = Box<dyn PaymentProcessor>;
