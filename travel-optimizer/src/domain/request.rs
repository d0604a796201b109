//! Travel requests.

use super::{CityId, Criteria};

/// One request in a batch: get from `source` to `destination`, optimising
/// for `criteria`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelRequest {
    /// Key under which the result is reported. Not required to be unique.
    pub id: String,
    pub source: CityId,
    pub destination: CityId,
    pub criteria: Criteria,
}

impl TravelRequest {
    /// Create a new request.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<CityId>,
        destination: impl Into<CityId>,
        criteria: Criteria,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            destination: destination.into(),
            criteria,
        }
    }
}
