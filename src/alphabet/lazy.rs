//! Deferred alphabet sizes.
//!
//! A word list that has not been loaded only knows a lower bound on its
//! length. Comparisons first try to decide from that bound; only when the
//! bound cannot settle the answer is the list loaded. After that the value
//! is an ordinary known length.
//!
//! The bound of an unloaded word list is assumed rather than measured, so
//! answers decided from it are wrong for lists shorter than the bound.
//! [`AlphabetCatalog::select`](crate::catalog::AlphabetCatalog::select)
//! retries against forced sizes before reporting that nothing matched.

use super::wordlist::{WordList, WordListError};

/// The size of an alphabet, possibly not yet known.
#[derive(Debug, Clone, Copy)]
pub enum LazyLength<'a> {
    /// The exact size.
    Known(usize),
    /// A word list that has not been loaded yet.
    Pending {
        /// Size the list is known to reach at least.
        lower_bound: usize,
        /// List to load when the bound is not enough.
        list: &'a WordList,
    },
}

impl<'a> LazyLength<'a> {
    /// Resolves to the exact size, loading the list if needed.
    ///
    /// Loading happens at most once per list; every proxy of the same list
    /// shares the loaded words.
    pub fn force(&mut self) -> Result<usize, WordListError> {
        match *self {
            LazyLength::Known(n) => Ok(n),
            LazyLength::Pending { list, .. } => {
                let n = list.words()?.len();
                *self = LazyLength::Known(n);
                Ok(n)
            }
        }
    }

    /// Returns true once the exact size is known.
    pub fn is_known(&self) -> bool {
        matches!(self, LazyLength::Known(_))
    }

    /// Best known lower bound (the exact size once known).
    pub fn lower_bound(&self) -> usize {
        match *self {
            LazyLength::Known(n) => n,
            LazyLength::Pending { lower_bound, .. } => lower_bound,
        }
    }

    /// `size == v`
    pub fn equals(&mut self, v: usize) -> Result<bool, WordListError> {
        self.decide(|lb| (lb > v).then_some(false), |n| n == v)
    }

    /// `size < v`
    pub fn less_than(&mut self, v: usize) -> Result<bool, WordListError> {
        self.decide(|lb| (lb >= v).then_some(false), |n| n < v)
    }

    /// `size <= v`
    pub fn at_most(&mut self, v: usize) -> Result<bool, WordListError> {
        self.decide(|lb| (lb > v).then_some(false), |n| n <= v)
    }

    /// `size > v`
    pub fn greater_than(&mut self, v: usize) -> Result<bool, WordListError> {
        self.decide(|lb| (lb > v).then_some(true), |n| n > v)
    }

    /// `size >= v`
    pub fn at_least(&mut self, v: usize) -> Result<bool, WordListError> {
        self.decide(|lb| (lb >= v).then_some(true), |n| n >= v)
    }

    fn decide(
        &mut self,
        from_bound: impl FnOnce(usize) -> Option<bool>,
        exact: impl FnOnce(usize) -> bool,
    ) -> Result<bool, WordListError> {
        if let LazyLength::Pending { lower_bound, .. } = *self {
            if let Some(answer) = from_bound(lower_bound) {
                return Ok(answer);
            }
        }
        Ok(exact(self.force()?))
    }
}

impl From<usize> for LazyLength<'_> {
    fn from(n: usize) -> Self {
        LazyLength::Known(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_list(len: usize, loads: Arc<AtomicUsize>) -> WordList {
        WordList::from_loader("test", move || {
            loads.fetch_add(1, Ordering::SeqCst);
            Ok((0..len).map(|i| format!("w{i}")).collect())
        })
    }

    #[test]
    fn test_bound_decides_without_loading() {
        let loads = Arc::new(AtomicUsize::new(0));
        let list = counting_list(500, loads.clone());
        let mut size = list.size();

        assert_eq!(size.lower_bound(), 100);
        assert!(!size.equals(71).unwrap());
        assert!(!size.less_than(100).unwrap());
        assert!(!size.at_most(99).unwrap());
        assert!(size.greater_than(62).unwrap());
        assert!(size.at_least(100).unwrap());

        assert!(!size.is_known());
        assert!(!list.is_loaded());
        assert_eq!(loads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_undecided_comparison_loads_once() {
        let loads = Arc::new(AtomicUsize::new(0));
        let list = counting_list(500, loads.clone());
        let mut size = list.size();

        assert!(!size.equals(200).unwrap());
        assert!(size.is_known());
        assert_eq!(loads.load(Ordering::SeqCst), 1);

        // Behaves like a plain integer afterwards
        assert!(size.equals(500).unwrap());
        assert!(size.greater_than(499).unwrap());
        assert!(!size.greater_than(500).unwrap());
        assert!(size.at_most(500).unwrap());
        assert!(size.less_than(501).unwrap());
        assert!(!size.at_least(501).unwrap());
        assert_eq!(size.lower_bound(), 500);

        // A fresh proxy sees the loaded list
        let mut other = list.size();
        assert!(other.is_known());
        assert_eq!(other.force().unwrap(), 500);
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_short_list_below_bound() {
        let loads = Arc::new(AtomicUsize::new(0));
        let list = counting_list(40, loads.clone());
        let mut size = list.size();

        // The bound is optimistic; the true length wins once loaded
        assert!(size.at_most(100).unwrap());
        assert_eq!(size.force().unwrap(), 40);
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_load_failure_surfaces() {
        let list = WordList::from_loader("broken", || {
            Err(WordListError::Read {
                origin: "broken".into(),
                reason: "truncated stream".into(),
            })
        });
        let mut size = list.size();

        assert!(size.equals(150).is_err());
        assert!(!size.is_known());
    }

    #[test]
    fn test_known_never_loads() {
        let mut size = LazyLength::from(62);
        assert!(size.equals(62).unwrap());
        assert!(size.less_than(71).unwrap());
    }
}
