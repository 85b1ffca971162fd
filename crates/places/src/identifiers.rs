//! Type-safe place names.
//!
//! Names use Arc<str> so the catalog, rounds and guess trails can share them cheaply.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct PlaceName(Arc<str>);

impl PlaceName {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for PlaceName {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for PlaceName {}

impl Hash for PlaceName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with `str`'s hash for the `Borrow<str>` lookups below
        self.0.hash(state);
    }
}

impl Borrow<str> for PlaceName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PlaceName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for PlaceName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlaceName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PlaceName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_equality() {
        let n1 = PlaceName::new("Balatonfüred");
        let n2 = PlaceName::new("Balatonfüred");
        let n3 = n1.clone();

        assert_eq!(n1, n2);
        assert_eq!(n1, n3);
        assert!(Arc::ptr_eq(&n1.0, &n3.0)); // Clone shares Arc
        assert_eq!(n1, "Balatonfüred");
    }

    #[test]
    fn test_name_lookup_by_str() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(PlaceName::new("Tihany"), 42);

        assert_eq!(map.get("Tihany"), Some(&42));
        assert_eq!(map.get("tihany"), None);
    }

    #[test]
    fn test_name_display() {
        let name = PlaceName::new("Keszthely");
        assert_eq!(format!("{}", name), "Keszthely");
    }
}
