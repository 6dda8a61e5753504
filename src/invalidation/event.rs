//! Invalidation Event Module
//!
//! Reason codes, scopes, and the ephemeral event passed to listeners.

use std::fmt;

use serde::{Deserialize, Serialize};

// == Invalidation Reason ==
/// Why a set of cache entries was cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidationReason {
    UserAction,
    DataUpdate,
    TimeExpired,
    ManualClear,
    ErrorRecovery,
}

impl fmt::Display for InvalidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InvalidationReason::UserAction => "user_action",
            InvalidationReason::DataUpdate => "data_update",
            InvalidationReason::TimeExpired => "time_expired",
            InvalidationReason::ManualClear => "manual_clear",
            InvalidationReason::ErrorRecovery => "error_recovery",
        };
        f.write_str(name)
    }
}

// == Scope ==
/// The invalidation target: everything, one category, or one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Category(u32),
    Store(u32),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => f.write_str("all"),
            Scope::Category(id) => write!(f, "category {id}"),
            Scope::Store(id) => write!(f, "store {id}"),
        }
    }
}

// == Invalidation Event ==
/// Passed by reference to listeners for the duration of one dispatch;
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidationEvent {
    pub scope: Scope,
    pub reason: InvalidationReason,
}

// == Data Change ==
/// A coarse-grained change notification mapped onto an invalidation.
///
/// The mapping deliberately over-invalidates: a product or pricing change
/// may surface in any cached grouping, so both clear everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataChange {
    Product,
    Category(Option<u32>),
    Store(Option<u32>),
    Pricing,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_serializes_snake_case() {
        let json = serde_json::to_string(&InvalidationReason::UserAction).unwrap();
        assert_eq!(json, "\"user_action\"");
        let back: InvalidationReason = serde_json::from_str("\"error_recovery\"").unwrap();
        assert_eq!(back, InvalidationReason::ErrorRecovery);
    }

    #[test]
    fn test_reason_display_matches_serde() {
        assert_eq!(InvalidationReason::TimeExpired.to_string(), "time_expired");
        assert_eq!(InvalidationReason::ManualClear.to_string(), "manual_clear");
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(Scope::All.to_string(), "all");
        assert_eq!(Scope::Category(5).to_string(), "category 5");
        assert_eq!(Scope::Store(3).to_string(), "store 3");
    }
}
