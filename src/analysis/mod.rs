//! Empirical bias auditing.
//!
//! Draws many secrets and tallies which symbols come out, so a skewed
//! mapping from random bits to symbols can be spotted. Passing is necessary
//! but not sufficient for unbiased output.

mod frequency;

pub use frequency::SymbolFrequencies;

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::generator::PasswordGenerator;
use rand_core::{CryptoRng, RngCore};

/// Draws `samples` secrets of `bits` from `alphabet` and counts symbols.
///
/// Mandatory-class positions of classed alphabets are skipped; only the
/// union positions are counted, since those should be uniform over the
/// whole alphabet.
pub fn audit<R>(
    generator: &mut PasswordGenerator<R>,
    alphabet: &Alphabet,
    bits: u32,
    samples: u64,
) -> Result<SymbolFrequencies>
where
    R: RngCore + CryptoRng,
{
    let mut frequencies = SymbolFrequencies::new(alphabet.exact_size()?);
    let skip = alphabet.mandatory_count();

    for _ in 0..samples {
        let draw = generator.draw(bits, alphabet)?;
        frequencies.record_all(draw.digits().iter().skip(skip).copied());
    }

    tracing::debug!(
        samples,
        observations = frequencies.total(),
        chi_square = frequencies.chi_square(),
        "Audit finished"
    );

    Ok(frequencies)
}
