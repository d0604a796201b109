//! City identifiers.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// An opaque city identifier.
///
/// Cities are compared by exact string match: no trimming or case folding
/// is applied, so `"Delhi"` and `"delhi "` are different cities. The name is
/// reference-counted so identifiers can be cloned into search maps cheaply.
///
/// # Examples
///
/// ```
/// use travel_optimizer::domain::CityId;
///
/// let a = CityId::new("Mumbai");
/// assert_eq!(a.as_str(), "Mumbai");
/// assert_ne!(a, CityId::new("mumbai"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(Arc<str>);

impl CityId {
    /// Create an identifier from any string.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CityId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CityId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl Borrow<str> for CityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityId({})", self.as_str())
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
