//! Page identifier type.

use std::fmt;

/// Identifies a page in a reference sequence.
///
/// Pages carry no meaning beyond equality. Empty frames are modelled with
/// `Option<PageId>`, so every `u32` is a usable page number and there is no
/// sentinel value.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// assert_eq!(page_id, PageId::from(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    #[inline]
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert a slice of raw page numbers into a reference sequence.
pub fn pages(ids: &[u32]) -> Vec<PageId> {
    ids.iter().copied().map(PageId).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
    }

    #[test]
    fn test_page_id_zero_and_max_are_ordinary_pages() {
        // No sentinel: both ends of the range are real pages.
        assert_ne!(PageId::new(0), PageId::new(u32::MAX));
        assert_eq!(format!("{}", PageId::new(u32::MAX)), u32::MAX.to_string());
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "42");
    }

    #[test]
    fn test_pages_helper() {
        assert_eq!(pages(&[1, 2, 3]), vec![PageId(1), PageId(2), PageId(3)]);
        assert!(pages(&[]).is_empty());
    }
}
