//! Symbol-count derivation.
//!
//! Integer symbol counts overshoot the requested entropy, so the achieved
//! entropy (not the request) decides how many random bits are drawn. All
//! arithmetic is exact: `s^L` is computed as a big integer and
//! `ceil(log2(x))` is the bit length of `x - 1`.

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// How many symbols to draw, from which bases, and how many bits to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolPlan {
    /// Base of each digit, in draw order.
    bases: Vec<usize>,
    /// `ceil(log2(product of bases))`.
    entropy_bits: u64,
}

impl SymbolPlan {
    /// Plans a secret of `bits` from `alphabet`.
    ///
    /// Loads a word list if it is not in memory yet.
    pub fn for_alphabet(bits: u32, alphabet: &Alphabet) -> Result<Self> {
        match alphabet {
            Alphabet::Flat(set) => Self::uniform(bits, set.len()),
            Alphabet::Classed(set) => Self::classed(bits, &set.class_sizes()),
            Alphabet::Words(list) => Self::uniform(bits, list.words()?.len()),
        }
    }

    /// Plans a draw of `bits` of entropy from a single alphabet of `size`.
    pub fn uniform(bits: u32, size: usize) -> Result<Self> {
        let (length, combinations) = smallest_power_reaching(bits, size)?;
        Ok(Self {
            bases: vec![size; length],
            entropy_bits: ceil_log2(&combinations),
        })
    }

    /// Plans a draw from mandatory classes followed by their union.
    ///
    /// One symbol is taken from each class in order, then union symbols
    /// until the number of combinations reaches `2^achieved` where
    /// `achieved` is what a uniform draw from the union would achieve.
    pub fn classed(bits: u32, class_sizes: &[usize]) -> Result<Self> {
        if class_sizes.is_empty() {
            return Err(Error::DegenerateAlphabet { size: 0 });
        }
        if let Some(&empty) = class_sizes.iter().find(|&&size| size == 0) {
            return Err(Error::DegenerateAlphabet { size: empty });
        }

        let union: usize = class_sizes.iter().sum();
        let target_bits = achieved_bits(bits, union)?;

        let mandatory: BigUint = class_sizes.iter().map(|&s| BigUint::from(s)).product();
        let (extra, combinations) = smallest_exponent(&mandatory, union, target_bits);

        let mut bases = class_sizes.to_vec();
        bases.resize(class_sizes.len() + extra, union);

        Ok(Self {
            bases,
            entropy_bits: ceil_log2(&combinations),
        })
    }

    /// Base of each digit, in draw order.
    #[inline]
    pub fn bases(&self) -> &[usize] {
        &self.bases
    }

    /// Number of symbols in the secret.
    #[inline]
    pub fn symbol_count(&self) -> usize {
        self.bases.len()
    }

    /// Entropy actually achieved, and the number of bits to draw.
    #[inline]
    pub fn entropy_bits(&self) -> u64 {
        self.entropy_bits
    }
}

/// Number of symbols from an alphabet of `size` needed for `bits` of entropy.
///
/// The smallest `L` with `size^L >= 2^bits`.
pub fn symbol_count(bits: u32, size: usize) -> Result<usize> {
    Ok(smallest_power_reaching(bits, size)?.0)
}

/// Entropy achieved by [`symbol_count`] symbols: `ceil(log2(size^L))`.
///
/// Always at least `bits`.
pub fn achieved_bits(bits: u32, size: usize) -> Result<u64> {
    Ok(ceil_log2(&smallest_power_reaching(bits, size)?.1))
}

fn smallest_power_reaching(bits: u32, size: usize) -> Result<(usize, BigUint)> {
    if size <= 1 {
        return Err(Error::DegenerateAlphabet { size });
    }
    Ok(smallest_exponent(&BigUint::one(), size, bits as u64))
}

/// Smallest `k` with `start * base^k >= 2^target_bits`, and that product.
///
/// `start` must be non-zero and `base` at least 2. `k` is estimated from
/// logarithms and then corrected with exact comparisons, so the result does
/// not depend on floating-point rounding.
fn smallest_exponent(start: &BigUint, base: usize, target_bits: u64) -> (usize, BigUint) {
    let target = BigUint::one() << target_bits as usize;
    let big_base = BigUint::from(base);
    let product = |k: usize| start * big_base.pow(k as u32);

    // bits() - 1 <= log2(start) < bits()
    let have = start.bits().saturating_sub(1) as f64;
    let missing = (target_bits as f64 - have).max(0.0);
    let mut k = (missing / (base as f64).log2()).ceil() as usize;

    while k > 0 && product(k - 1) >= target {
        k -= 1;
    }
    let mut combinations = product(k);
    while combinations < target {
        combinations *= &big_base;
        k += 1;
    }
    (k, combinations)
}

fn ceil_log2(n: &BigUint) -> u64 {
    if n.is_zero() {
        return 0;
    }
    (n.clone() - 1u32).bits()
}
