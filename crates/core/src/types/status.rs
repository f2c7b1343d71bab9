//! Order status state machine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Order lifecycle status as reported by the order service.
///
/// The dashboard only ever moves an order forward: `pending` to `processing`
/// to `completed`. The transition table lives in [`OrderStatus::next`] so the
/// allowed moves are checked in code, not inferred from which buttons a page
/// happens to render.
///
/// Any status value outside this set deserializes to [`OrderStatus::Unknown`]
/// and is treated as terminal, so one unexpected order cannot fail an entire
/// list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    /// A status value the dashboard does not handle.
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// The single allowed next status, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Processing),
            Self::Processing => Some(Self::Completed),
            Self::Completed | Self::Unknown => None,
        }
    }

    /// Whether moving to `target` is an allowed transition.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }

    /// Whether no further transition is available.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Label for the action button that advances this status, if one exists.
    #[must_use]
    pub const fn action_label(self) -> Option<&'static str> {
        match self {
            Self::Pending => Some("Start Processing"),
            Self::Processing => Some("Complete"),
            Self::Completed | Self::Unknown => None,
        }
    }

    /// Wire representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing an order status from a request parameter.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid order status: {0}")]
pub struct ParseStatusError(String);

impl std::str::FromStr for OrderStatus {
    type Err = ParseStatusError;

    /// Parse a requested status. Only the three handled statuses are
    /// accepted; `unknown` is not a real wire value and cannot be requested.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Processing));
        assert_eq!(
            OrderStatus::Processing.next(),
            Some(OrderStatus::Completed)
        );
        assert_eq!(OrderStatus::Completed.next(), None);
        assert_eq!(OrderStatus::Unknown.next(), None);
    }

    #[test]
    fn test_only_forward_transitions_allowed() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Processing));
        assert!(OrderStatus::Processing.can_transition_to(OrderStatus::Completed));

        // No skipping ahead, no moving back
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Completed));
        assert!(!OrderStatus::Processing.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Processing.is_terminal());
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Unknown.is_terminal());
    }

    #[test]
    fn test_action_labels_match_affordances() {
        assert_eq!(OrderStatus::Pending.action_label(), Some("Start Processing"));
        assert_eq!(OrderStatus::Processing.action_label(), Some("Complete"));
        assert_eq!(OrderStatus::Completed.action_label(), None);
        assert_eq!(OrderStatus::Unknown.action_label(), None);
    }

    #[test]
    fn test_serde_lowercase_wire_format() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            "\"processing\""
        );
        let status: OrderStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, OrderStatus::Pending);
    }

    #[test]
    fn test_unhandled_wire_value_deserializes_to_unknown() {
        let status: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Unknown);

        // A single odd status must not poison a whole list
        let statuses: Vec<OrderStatus> =
            serde_json::from_str("[\"pending\",\"shipped\",\"completed\"]").unwrap();
        assert_eq!(
            statuses,
            vec![
                OrderStatus::Pending,
                OrderStatus::Unknown,
                OrderStatus::Completed
            ]
        );
    }

    #[test]
    fn test_from_str_accepts_only_handled_statuses() {
        assert_eq!("pending".parse(), Ok(OrderStatus::Pending));
        assert_eq!("processing".parse(), Ok(OrderStatus::Processing));
        assert_eq!("completed".parse(), Ok(OrderStatus::Completed));
        assert!("unknown".parse::<OrderStatus>().is_err());
        assert!("PENDING".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }
}
