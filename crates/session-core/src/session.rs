//! # Session Types
//!
//! Host-side payment session data. Session data is an open JSON object: the
//! host stores whatever the processor returns and hands it back on the next call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form session data exchanged with the host
pub type SessionData = Map<String, Value>;

/// Read a non-empty string field from session data
pub fn str_field<'a>(data: &'a SessionData, key: &str) -> Option<&'a str> {
    data.get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
}

/// Read an integer amount from session data.
///
/// Whole-number floats (`1000.0`) are accepted, fractional amounts are not.
pub fn amount_field(data: &SessionData, key: &str) -> Option<i64> {
    let value = data.get(key)?;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Host-facing status of a payment session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostSessionStatus {
    /// Not yet linked to a confirmed payment
    Pending,
    /// Payment confirmed (or awaiting deposit) by the gateway
    Authorized,
    /// Payment fully or partially canceled
    Canceled,
    /// Payment aborted or expired
    Error,
}

impl HostSessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostSessionStatus::Pending => "pending",
            HostSessionStatus::Authorized => "authorized",
            HostSessionStatus::Canceled => "canceled",
            HostSessionStatus::Error => "error",
        }
    }
}

impl Default for HostSessionStatus {
    fn default() -> Self {
        HostSessionStatus::Pending
    }
}

/// The processor's local working record of a payment.
///
/// Starts as `{id, email, amount}` and picks up gateway fields
/// (`paymentKey`, `orderId`, ...) as the host relays them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentIntent(SessionData);

impl PaymentIntent {
    /// Create a fresh intent for a host resource
    pub fn new(id: impl Into<String>, email: impl Into<String>, amount: i64) -> Self {
        let mut data = SessionData::new();
        data.insert("id".to_string(), Value::String(id.into()));
        data.insert("email".to_string(), Value::String(email.into()));
        data.insert("amount".to_string(), Value::from(amount));
        Self(data)
    }

    /// Adopt host session data as-is
    pub fn from_data(data: SessionData) -> Self {
        Self(data)
    }

    pub fn id(&self) -> Option<&str> {
        str_field(&self.0, "id")
    }

    pub fn email(&self) -> Option<&str> {
        str_field(&self.0, "email")
    }

    pub fn amount(&self) -> Option<i64> {
        amount_field(&self.0, "amount")
    }

    /// Overwrite email and amount, keeping every other field
    pub fn merge_contact(&mut self, email: impl Into<String>, amount: i64) {
        self.0
            .insert("email".to_string(), Value::String(email.into()));
        self.0.insert("amount".to_string(), Value::from(amount));
    }

    pub fn data(&self) -> &SessionData {
        &self.0
    }

    pub fn into_data(self) -> SessionData {
        self.0
    }
}

/// Context passed by the host when a session is created or refreshed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentContext {
    /// Host resource (cart) the session belongs to
    pub resource_id: String,

    /// Customer email
    pub email: String,

    /// Amount in the smallest currency unit
    pub amount: i64,

    /// Session data currently stored by the host
    #[serde(default)]
    pub payment_session_data: SessionData,
}

impl PaymentContext {
    pub fn new(resource_id: impl Into<String>, email: impl Into<String>, amount: i64) -> Self {
        Self {
            resource_id: resource_id.into(),
            email: email.into(),
            amount,
            payment_session_data: SessionData::new(),
        }
    }

    /// Builder: attach the host's stored session data
    pub fn with_session_data(mut self, data: SessionData) -> Self {
        self.payment_session_data = data;
        self
    }
}

/// Session data returned from initiate/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_data: SessionData,
}

impl From<PaymentIntent> for SessionResponse {
    fn from(intent: PaymentIntent) -> Self {
        Self {
            session_data: intent.into_data(),
        }
    }
}

/// Result of a successful authorization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizeResponse {
    pub status: HostSessionStatus,
    pub data: SessionData,
}
