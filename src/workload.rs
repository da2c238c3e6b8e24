//! Reference-sequence sources: random generation and text parsing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::config::{MAX_PAGE_RANGE, MAX_REFERENCE_LEN, MIN_PAGE_RANGE};
use crate::common::PageId;
use crate::error::{Error, Result};

/// Random reference-string generator.
///
/// Pages are drawn uniformly from `0..range`. A seeded generator always
/// produces the same sequences, which keeps randomly driven runs
/// reproducible.
///
/// # Example
/// ```
/// use pagesim::workload::ReferenceGenerator;
///
/// let a = ReferenceGenerator::from_seed(7).generate(20, 5).unwrap();
/// let b = ReferenceGenerator::from_seed(7).generate(20, 5).unwrap();
/// assert_eq!(a, b);
/// assert!(a.iter().all(|p| p.0 < 5));
/// ```
pub struct ReferenceGenerator {
    rng: StdRng,
}

impl ReferenceGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generate `len` pages in `0..range`.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if `len` is outside
    /// `1..=MAX_REFERENCE_LEN` or `range` outside
    /// `MIN_PAGE_RANGE..=MAX_PAGE_RANGE`.
    pub fn generate(&mut self, len: usize, range: u32) -> Result<Vec<PageId>> {
        if !(1..=MAX_REFERENCE_LEN).contains(&len) {
            return Err(Error::InvalidInput(format!(
                "reference length {} is outside 1..={}",
                len, MAX_REFERENCE_LEN
            )));
        }
        if !(MIN_PAGE_RANGE..=MAX_PAGE_RANGE).contains(&range) {
            return Err(Error::InvalidInput(format!(
                "page range {} is outside {}..={}",
                range, MIN_PAGE_RANGE, MAX_PAGE_RANGE
            )));
        }

        Ok((0..len)
            .map(|_| PageId(self.rng.gen_range(0..range)))
            .collect())
    }
}

/// Parse a reference string of non-negative integers separated by
/// whitespace and/or commas.
///
/// # Errors
/// Returns `Error::Parse` for any token that is not a `u32`.
pub fn parse_reference(input: &str) -> Result<Vec<PageId>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .map(PageId)
                .map_err(|e| Error::Parse(format!("bad page '{}': {}", token, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    #[test]
    fn test_generate_respects_bounds() {
        let mut generator = ReferenceGenerator::from_seed(1);
        let reference = generator.generate(50, 2).unwrap();

        assert_eq!(reference.len(), 50);
        assert!(reference.iter().all(|p| p.0 < 2));
    }

    #[test]
    fn test_generate_rejects_bad_arguments() {
        let mut generator = ReferenceGenerator::from_seed(1);

        assert!(matches!(generator.generate(0, 5), Err(Error::InvalidInput(_))));
        assert!(matches!(generator.generate(51, 5), Err(Error::InvalidInput(_))));
        assert!(matches!(generator.generate(10, 1), Err(Error::InvalidInput(_))));
        assert!(matches!(generator.generate(10, 21), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = ReferenceGenerator::from_seed(1).generate(50, 20).unwrap();
        let b = ReferenceGenerator::from_seed(2).generate(50, 20).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_reference() {
        assert_eq!(parse_reference("1 2 3").unwrap(), pages(&[1, 2, 3]));
        assert_eq!(parse_reference(" 7,0, 1\n2 ").unwrap(), pages(&[7, 0, 1, 2]));
        assert!(parse_reference("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_reference_rejects_negative() {
        assert!(matches!(parse_reference("1 -1"), Err(Error::Parse(_))));
        assert!(matches!(parse_reference("1 x"), Err(Error::Parse(_))));
    }
}
