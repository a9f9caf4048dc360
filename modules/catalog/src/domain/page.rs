use serde::{Deserialize, Serialize};

/// One slice of a paginated listing.
///
/// Slice semantics only: `has_more` tells the caller whether another page
/// exists, no total count is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            has_more: self.has_more,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

/// A page request with a per-entity sort key.
///
/// `limit` is resolved against [`LimitCfg`] at the repository level; the
/// offset defaults to zero.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest<S> {
    pub limit: Option<u64>,
    pub offset: u64,
    pub sort: S,
    pub dir: SortDir,
}

impl<S: Default> Default for PageRequest<S> {
    fn default() -> Self {
        Self {
            limit: None,
            offset: 0,
            sort: S::default(),
            dir: SortDir::default(),
        }
    }
}

/// Page size limits applied by repositories.
#[derive(Debug, Clone, Copy)]
pub struct LimitCfg {
    pub default: u64,
    pub max: u64,
}

impl Default for LimitCfg {
    fn default() -> Self {
        Self {
            default: 50,
            max: 500,
        }
    }
}

impl LimitCfg {
    /// Resolve a requested limit: fall back to the default, clamp to the max.
    pub fn resolve(&self, requested: Option<u64>) -> u64 {
        requested.unwrap_or(self.default).min(self.max).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::LimitCfg;

    #[test]
    fn resolves_default_and_clamps() {
        let cfg = LimitCfg {
            default: 25,
            max: 100,
        };
        assert_eq!(cfg.resolve(None), 25);
        assert_eq!(cfg.resolve(Some(7)), 7);
        assert_eq!(cfg.resolve(Some(1000)), 100);
        assert_eq!(cfg.resolve(Some(0)), 1);
    }
}
