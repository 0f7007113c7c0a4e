//! Three-way result of a remote lookup

use crate::DocsError;

/// Result of a single API call.
///
/// Absence is not an error: `NotFound` covers empty search results, a 404 and
/// an empty documentation body. `Failed` carries transport, status and decode
/// errors that have already been logged.
#[derive(Debug)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
    Failed(DocsError),
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// The found value, discarding the reason for any miss
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound | Lookup::Failed(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
            Lookup::Failed(err) => Lookup::Failed(err),
        }
    }
}

impl<T> From<DocsError> for Lookup<T> {
    fn from(err: DocsError) -> Self {
        Lookup::Failed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_discards_miss_reason() {
        assert_eq!(Lookup::Found(3).found(), Some(3));
        assert_eq!(Lookup::<i32>::NotFound.found(), None);
        let failed: Lookup<i32> = DocsError::Status {
            status: 500,
            body: "boom".into(),
        }
        .into();
        assert!(!failed.is_found());
        assert_eq!(failed.found(), None);
    }

    #[test]
    fn map_keeps_variant() {
        assert!(matches!(Lookup::Found(2).map(|n| n * 2), Lookup::Found(4)));
        assert!(matches!(Lookup::<i32>::NotFound.map(|n| n * 2), Lookup::NotFound));
    }
}
