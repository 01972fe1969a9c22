//! # session-core
//!
//! Host-side contract for the toss-session payment adapter.
//!
//! This crate provides:
//! - `PaymentProcessor` trait, the ten operations a host drives per checkout
//! - `SessionData`, `PaymentIntent` and `PaymentContext` for session state
//! - `HostSessionStatus`, the host's view of a payment
//! - `ProcessorError` and the host-facing `AdapterError`
//!
//! ## Example
//!
//! ```rust,ignore
//! use session_core::{PaymentContext, PaymentProcessor};
//!
//! let context = PaymentContext::new("cart_01", "buyer@example.com", 15000);
//! let session = processor.initiate_payment(&context).await?;
//!
//! // ... customer completes the payment widget, host stores paymentKey/orderId ...
//!
//! let authorized = processor.authorize_payment(session_data, &Default::default()).await?;
//! ```

pub mod error;
pub mod processor;
pub mod session;

// Re-exports for convenience
pub use error::{
    AdapterError, ProcessorError, ProcessorOutcome, ProcessorResult, ValidationKind,
};
pub use processor::{BoxedPaymentProcessor, PaymentProcessor};
pub use session::{
    amount_field, str_field, AuthorizeResponse, HostSessionStatus, PaymentContext,
    PaymentIntent, SessionData, SessionResponse,
};
