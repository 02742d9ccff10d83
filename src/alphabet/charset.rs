//! Character sets and classed character sets.

/// An ordered set of single-character symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    symbols: Vec<char>,
}

impl Charset {
    /// Creates a set from the characters of `symbols`, in order.
    pub fn new(symbols: &str) -> Self {
        Self {
            symbols: symbols.chars().collect(),
        }
    }

    /// Returns the symbols.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the set has no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns true if `c` belongs to the set.
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }
}

/// Disjoint character classes plus their union.
///
/// Every class contributes at least one symbol to each generated secret;
/// the remaining symbols come from the union of all classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassedCharset {
    classes: Vec<Charset>,
    union: Charset,
}

impl ClassedCharset {
    /// Creates a classed set. The union preserves class order.
    pub fn new(classes: Vec<Charset>) -> Self {
        let union = Charset {
            symbols: classes.iter().flat_map(|c| c.symbols.iter().copied()).collect(),
        };
        Self { classes, union }
    }

    /// Returns the mandatory classes in order.
    #[inline]
    pub fn classes(&self) -> &[Charset] {
        &self.classes
    }

    /// Returns the union of all classes.
    #[inline]
    pub fn union(&self) -> &Charset {
        &self.union
    }

    /// Returns the size of each class, in order.
    pub fn class_sizes(&self) -> Vec<usize> {
        self.classes.iter().map(Charset::len).collect()
    }
}
