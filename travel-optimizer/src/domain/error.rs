//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from document and summary-client errors.

use super::CityId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Consecutive path segments don't share a city
    #[error("segment {index} departs from {found} but the previous segment arrives at {expected}")]
    DisconnectedPath {
        index: usize,
        expected: CityId,
        found: CityId,
    },
}
