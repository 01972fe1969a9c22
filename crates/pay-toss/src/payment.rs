//! # Toss Payments API Types
//!
//! Request bodies and the payment record returned by confirm, inquiry and
//! cancel. Only the fields the processor reads are typed; everything else is
//! kept verbatim in [`PaymentRecord::extra`].

use crate::status::GatewayStatus;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A payment as reported by Toss Payments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    #[serde(default)]
    pub payment_key: Option<String>,

    #[serde(default)]
    pub order_id: Option<String>,

    pub status: GatewayStatus,

    /// Payment method label as sent by the gateway (e.g. "카드", "가상계좌")
    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub total_amount: Option<i64>,

    /// Amount still cancelable
    #[serde(default)]
    pub balance_amount: Option<i64>,

    #[serde(default)]
    pub is_partial_cancelable: Option<bool>,

    #[serde(default)]
    pub requested_at: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub approved_at: Option<DateTime<FixedOffset>>,

    /// Card details, passed through untouched
    #[serde(default)]
    pub card: Option<Value>,

    #[serde(default)]
    pub receipt: Option<UrlRef>,

    #[serde(default)]
    pub checkout: Option<UrlRef>,

    /// Every other field of the record
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaymentRecord {
    pub fn receipt_url(&self) -> Option<&str> {
        self.receipt.as_ref().map(|r| r.url.as_str())
    }

    pub fn checkout_url(&self) -> Option<&str> {
        self.checkout.as_ref().map(|c| c.url.as_str())
    }
}

/// `{ "url": ... }` object used for receipts and checkout pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRef {
    pub url: String,
}

/// Body of `POST /v1/payments/confirm`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequest {
    pub payment_key: String,
    pub order_id: String,
    pub amount: i64,
}

/// Body of `POST /v1/payments/{paymentKey}/cancel`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRequest {
    pub cancel_reason: String,
    /// Omitted for a full cancellation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_amount: Option<i64>,
}

/// Error body returned with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayErrorBody {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_keeps_unknown_fields() {
        let body = json!({
            "paymentKey": "pk_1",
            "orderId": "order_1",
            "status": "DONE",
            "method": "카드",
            "totalAmount": 1000,
            "requestedAt": "2024-02-13T12:17:57+09:00",
            "approvedAt": "2024-02-13T12:18:14+09:00",
            "receipt": { "url": "https://r" },
            "checkout": { "url": "https://c" },
            "card": { "number": "4330****", "installmentPlanMonths": 0 },
            "mId": "tosspayments",
            "currency": "KRW"
        });

        let record: PaymentRecord = serde_json::from_value(body).unwrap();

        assert_eq!(record.status, GatewayStatus::Done);
        assert_eq!(record.receipt_url(), Some("https://r"));
        assert_eq!(record.checkout_url(), Some("https://c"));
        assert_eq!(record.method.as_deref(), Some("카드"));
        assert_eq!(record.extra.get("mId"), Some(&json!("tosspayments")));
        assert!(record.approved_at.unwrap() > record.requested_at.unwrap());
    }

    #[test]
    fn test_full_cancel_omits_amount() {
        let body = serde_json::to_value(CancelRequest {
            cancel_reason: String::new(),
            cancel_amount: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "cancelReason": "" }));

        let body = serde_json::to_value(CancelRequest {
            cancel_reason: "changed mind".into(),
            cancel_amount: Some(500),
        })
        .unwrap();
        assert_eq!(body, json!({ "cancelReason": "changed mind", "cancelAmount": 500 }));
    }
}
