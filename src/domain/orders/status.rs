//! Order fulfillment status.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A persisted status value outside the closed enumeration.
///
/// This is a data-integrity failure: unknown values are rejected at the
/// read boundary, never silently coerced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized order status {0:?}")]
pub struct InvalidStatusValue(pub String);

/// Fulfillment state of an order.
///
/// Orders are created `pending` and either advance linearly through
/// `approved` and `in_transit` to `complete`, or move from `pending`
/// straight to `cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Approved,
    #[serde(alias = "delivering")]
    InTransit,
    Complete,
    Cancelled,
}

impl OrderStatus {
    /// Canonical persisted string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::InTransit => "in_transit",
            Self::Complete => "complete",
            Self::Cancelled => "cancelled",
        }
    }

    /// The single legal next step on the fulfillment path.
    ///
    /// Terminal states have no next step. Cancellation is not a step on
    /// this path; it is guarded separately.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Approved),
            Self::Approved => Some(Self::InTransit),
            Self::InTransit => Some(Self::Complete),
            Self::Complete | Self::Cancelled => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Cancelled)
    }

    /// Whether the customer may still cancel the order.
    #[must_use]
    pub const fn can_cancel(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = InvalidStatusValue;

    /// Parse a persisted status value.
    ///
    /// This is the one place legacy data is normalized: `delivering` is an
    /// old synonym for `in_transit` still present in historical records.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "in_transit" | "delivering" => Ok(Self::InTransit),
            "complete" => Ok(Self::Complete),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(InvalidStatusValue(other.to_string())),
        }
    }
}
