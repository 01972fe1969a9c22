//! # pay-toss
//!
//! Toss Payments processor for toss-session-rs.
//!
//! The processor tracks one checkout's payment session and talks to three
//! Toss Payments APIs:
//!
//! 1. **Confirm** (`POST /v1/payments/confirm`) - on `authorize_payment`
//! 2. **Inquiry** (`GET /v1/payments/{paymentKey}`) - on `retrieve_payment`
//! 3. **Cancel** (`POST /v1/payments/{paymentKey}/cancel`) - on `refund_payment`
//!
//! Funds settle at confirmation, so `capture_payment` is a pass-through.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_toss::TossPaymentsProcessor;
//! use session_core::{PaymentContext, PaymentProcessor};
//!
//! // Secret key and API version from the environment
//! let mut processor = TossPaymentsProcessor::from_env()?;
//!
//! let session = processor
//!     .initiate_payment(&PaymentContext::new("cart_01", "buyer@example.com", 15000))
//!     .await?;
//!
//! // The storefront widget adds paymentKey/orderId to the session data
//! let authorized = processor.authorize_payment(session_data, &Default::default()).await?;
//! ```

pub mod client;
pub mod config;
pub mod error_codes;
pub mod payment;
pub mod processor;
pub mod status;
pub mod store;

// Re-exports
pub use client::{GatewayClient, TossClient};
pub use config::{TossConfig, DEFAULT_API_BASE_URL, SUPPORTED_API_VERSION};
pub use error_codes::GatewayOperation;
pub use payment::{PaymentRecord, UrlRef};
pub use processor::{TossPaymentsProcessor, IDENTIFIER};
pub use status::{translate, GatewayStatus};
pub use store::SessionStore;
