//! # Payment Status
//!
//! Toss Payments' status vocabulary and its translation to host session status.

use serde::{Deserialize, Serialize};
use session_core::HostSessionStatus;

/// Status of a payment as reported by Toss Payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayStatus {
    /// Payment created, not yet authenticated
    Ready,
    /// Authenticated, awaiting confirmation
    InProgress,
    /// Virtual account issued, awaiting deposit
    WaitingForDeposit,
    /// Confirmed
    Done,
    /// Fully canceled
    Canceled,
    /// Partially canceled
    PartialCanceled,
    /// Confirmation failed
    Aborted,
    /// Not confirmed within the authorization window, or deposit deadline passed
    Expired,
    /// Any status this processor does not know
    #[serde(other)]
    Unknown,
}

impl GatewayStatus {
    pub const ALL: [GatewayStatus; 8] = [
        GatewayStatus::Ready,
        GatewayStatus::InProgress,
        GatewayStatus::WaitingForDeposit,
        GatewayStatus::Done,
        GatewayStatus::Canceled,
        GatewayStatus::PartialCanceled,
        GatewayStatus::Aborted,
        GatewayStatus::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GatewayStatus::Ready => "READY",
            GatewayStatus::InProgress => "IN_PROGRESS",
            GatewayStatus::WaitingForDeposit => "WAITING_FOR_DEPOSIT",
            GatewayStatus::Done => "DONE",
            GatewayStatus::Canceled => "CANCELED",
            GatewayStatus::PartialCanceled => "PARTIAL_CANCELED",
            GatewayStatus::Aborted => "ABORTED",
            GatewayStatus::Expired => "EXPIRED",
            GatewayStatus::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for GatewayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translate the last known gateway status into a host session status.
///
/// Unset and unknown statuses are `Pending`.
pub fn translate(status: Option<GatewayStatus>) -> HostSessionStatus {
    match status {
        Some(GatewayStatus::Ready) => HostSessionStatus::Pending,
        Some(GatewayStatus::Canceled | GatewayStatus::PartialCanceled) => {
            HostSessionStatus::Canceled
        }
        Some(GatewayStatus::Aborted | GatewayStatus::Expired) => HostSessionStatus::Error,
        Some(
            GatewayStatus::InProgress | GatewayStatus::WaitingForDeposit | GatewayStatus::Done,
        ) => HostSessionStatus::Authorized,
        Some(GatewayStatus::Unknown) | None => HostSessionStatus::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_table() {
        let expected = [
            (GatewayStatus::Ready, HostSessionStatus::Pending),
            (GatewayStatus::InProgress, HostSessionStatus::Authorized),
            (GatewayStatus::WaitingForDeposit, HostSessionStatus::Authorized),
            (GatewayStatus::Done, HostSessionStatus::Authorized),
            (GatewayStatus::Canceled, HostSessionStatus::Canceled),
            (GatewayStatus::PartialCanceled, HostSessionStatus::Canceled),
            (GatewayStatus::Aborted, HostSessionStatus::Error),
            (GatewayStatus::Expired, HostSessionStatus::Error),
        ];

        for (gateway, host) in expected {
            assert_eq!(translate(Some(gateway)), host, "status {}", gateway);
        }
        assert_eq!(expected.len(), GatewayStatus::ALL.len());
    }

    #[test]
    fn test_unset_and_unknown_are_pending() {
        assert_eq!(translate(None), HostSessionStatus::Pending);
        assert_eq!(
            translate(Some(GatewayStatus::Unknown)),
            HostSessionStatus::Pending
        );
    }

    #[test]
    fn test_wire_format() {
        let status: GatewayStatus = serde_json::from_str("\"WAITING_FOR_DEPOSIT\"").unwrap();
        assert_eq!(status, GatewayStatus::WaitingForDeposit);

        let status: GatewayStatus = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(status, GatewayStatus::Unknown);

        for status in GatewayStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
