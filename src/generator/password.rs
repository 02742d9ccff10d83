//! Entropy-bounded secret generation.

use super::sizing::SymbolPlan;
use crate::alphabet::Alphabet;
use crate::catalog::{AlphabetCatalog, Selector};
use crate::entropy::BitPool;
use crate::error::{Error, Result};
use rand_core::{CryptoRng, OsRng, RngCore};

/// Default safety floor, in bits.
pub const DEFAULT_MIN_BITS: u32 = 40;

/// A generated password or passphrase.
#[derive(Clone)]
pub struct GeneratedSecret {
    secret: String,
    symbol_count: usize,
    entropy_bits: u64,
}

impl GeneratedSecret {
    /// Returns the secret.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.secret
    }

    /// Consumes the value and returns the secret.
    pub fn into_string(self) -> String {
        self.secret
    }

    /// Number of symbols (characters or words) in the secret.
    #[inline]
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// Entropy achieved, never below the request.
    #[inline]
    pub fn entropy_bits(&self) -> u64 {
        self.entropy_bits
    }
}

impl std::fmt::Debug for GeneratedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedSecret")
            .field("symbol_count", &self.symbol_count)
            .field("entropy_bits", &self.entropy_bits)
            .finish_non_exhaustive()
    }
}

/// Digits drawn for one secret, before rendering.
#[derive(Debug, Clone)]
pub struct Draw {
    plan: SymbolPlan,
    digits: Vec<usize>,
}

impl Draw {
    /// The plan the digits were drawn for.
    pub fn plan(&self) -> &SymbolPlan {
        &self.plan
    }

    /// Drawn digits; `digits[i] < plan.bases()[i]`.
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }
}

/// Generates secrets from a cryptographically secure source.
///
/// Each secret costs exactly one draw from the source; nothing is retried.
pub struct PasswordGenerator<R = OsRng> {
    source: R,
    min_bits: u32,
    secrets_generated: u64,
}

impl PasswordGenerator<OsRng> {
    /// Creates a generator backed by the operating system CSPRNG.
    pub fn from_os_entropy() -> Self {
        Self::new(OsRng)
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    /// Creates a generator with the default safety floor.
    pub fn new(source: R) -> Self {
        Self {
            source,
            min_bits: DEFAULT_MIN_BITS,
            secrets_generated: 0,
        }
    }

    /// Sets the safety floor.
    pub fn with_min_bits(self, min_bits: u32) -> Self {
        Self { min_bits, ..self }
    }

    /// Returns the safety floor.
    pub fn min_bits(&self) -> u32 {
        self.min_bits
    }

    /// Number of secrets generated so far.
    pub fn secrets_generated(&self) -> u64 {
        self.secrets_generated
    }

    /// Rejects requests below the safety floor.
    pub fn check_floor(&self, bits: u32) -> Result<()> {
        if bits < self.min_bits {
            return Err(Error::InvalidEntropyFloor {
                requested: bits,
                floor: self.min_bits,
            });
        }
        Ok(())
    }

    /// Draws the digits for one secret without rendering them.
    pub fn draw(&mut self, bits: u32, alphabet: &Alphabet) -> Result<Draw> {
        self.check_floor(bits)?;
        let plan = SymbolPlan::for_alphabet(bits, alphabet)?;

        let mut pool = BitPool::draw(&mut self.source, plan.entropy_bits())?;
        let digits = plan.bases().iter().map(|&base| pool.next_digit(base)).collect();

        Ok(Draw { plan, digits })
    }

    /// Generates one secret of at least `bits` of entropy from `alphabet`.
    pub fn generate(&mut self, bits: u32, alphabet: &Alphabet) -> Result<GeneratedSecret> {
        let draw = self.draw(bits, alphabet)?;
        let secret = alphabet.render(draw.digits())?;
        self.secrets_generated += 1;

        tracing::debug!(
            alphabet = alphabet.kind(),
            requested_bits = bits,
            entropy_bits = draw.plan().entropy_bits(),
            symbols = draw.plan().symbol_count(),
            "Generated secret"
        );

        Ok(GeneratedSecret {
            secret,
            symbol_count: draw.plan().symbol_count(),
            entropy_bits: draw.plan().entropy_bits(),
        })
    }

    /// Selects an alphabet from `catalog` and generates one secret from it.
    pub fn generate_secret(
        &mut self,
        bits: u32,
        catalog: &AlphabetCatalog,
        selector: &Selector,
    ) -> Result<GeneratedSecret> {
        self.check_floor(bits)?;
        let candidates = catalog.select(selector, &mut self.source)?;
        // select never returns an empty list
        let first = &candidates[0];

        tracing::debug!(alphabet = first.name(), "Selected alphabet");
        self.generate(bits, first.alphabet())
    }
}
