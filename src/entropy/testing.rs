//! Deterministic sources for unit tests.

use rand_core::{impls, CryptoRng, RngCore};

/// Replays a fixed byte pattern and records every request size.
///
/// Marked `CryptoRng` so it can stand in for the system source; it is of
/// course nothing of the sort.
#[derive(Debug, Clone)]
pub(crate) struct ScriptedSource {
    pattern: Vec<u8>,
    position: usize,
    requests: Vec<usize>,
}

impl ScriptedSource {
    pub(crate) fn new(pattern: Vec<u8>) -> Self {
        assert!(!pattern.is_empty(), "pattern must not be empty");
        Self {
            pattern,
            position: 0,
            requests: Vec::new(),
        }
    }

    /// A source that always yields the same byte.
    pub(crate) fn constant(byte: u8) -> Self {
        Self::new(vec![byte])
    }

    pub(crate) fn requests(&self) -> &[usize] {
        &self.requests
    }
}

impl RngCore for ScriptedSource {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.requests.push(dest.len());
        for byte in dest.iter_mut() {
            *byte = self.pattern[self.position % self.pattern.len()];
            self.position += 1;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ScriptedSource {}

/// A source whose every draw fails.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingSource;

impl RngCore for FailingSource {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("FailingSource only supports try_fill_bytes");
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Err(rand_core::Error::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            "entropy device unplugged",
        )))
    }
}

impl CryptoRng for FailingSource {}
