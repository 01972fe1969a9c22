//! # Session Store
//!
//! The one payment intent and gateway status a processor instance tracks
//! between calls. Nothing is persisted.

use crate::status::GatewayStatus;
use session_core::{PaymentIntent, SessionData};

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    status: Option<GatewayStatus>,
    intent: Option<PaymentIntent>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start over with a fresh intent in `READY`.
    pub fn initialize(&mut self, id: &str, email: &str, amount: i64) -> &PaymentIntent {
        self.status = Some(GatewayStatus::Ready);
        self.intent.insert(PaymentIntent::new(id, email, amount))
    }

    /// Replace the intent with host session data.
    pub fn replace(&mut self, data: SessionData) -> &PaymentIntent {
        self.intent.insert(PaymentIntent::from_data(data))
    }

    /// Overwrite email and amount on the stored intent, creating one if absent.
    pub fn merge_contact(&mut self, email: &str, amount: i64) -> &PaymentIntent {
        let intent = self.intent.get_or_insert_with(PaymentIntent::default);
        intent.merge_contact(email, amount);
        intent
    }

    pub fn intent(&self) -> Option<&PaymentIntent> {
        self.intent.as_ref()
    }

    pub fn status(&self) -> Option<GatewayStatus> {
        self.status
    }

    pub fn set_status(&mut self, status: GatewayStatus) {
        self.status = Some(status);
    }
}
