use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::PieceKind;

/// Seed for deterministic piece generation.
///
/// This is a 128-bit (16-byte) seed used to initialize the random number
/// generator behind [`SeedBuffer`]. Using the same seed produces the same
/// sequence of pieces, which makes sessions reproducible.
///
/// The textual form (serde and [`FromStr`]/[`Display`](fmt::Display)) is a
/// 32-character big-endian hex string.
///
/// # Example
///
/// ```
/// use tetrad_engine::{PieceSeed, SeedBuffer};
///
/// let seed: PieceSeed = "0123456789abcdeffedcba9876543210".parse().unwrap();
///
/// let mut a = SeedBuffer::with_seed(seed);
/// let mut b = SeedBuffer::with_seed(seed);
/// assert_eq!(a.pop_next_seed(), b.pop_next_seed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSeed([u8; 16]);

impl PieceSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePieceSeedError {
    #[display("invalid hex: expected 32 characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("invalid hex: {_0}")]
    InvalidDigit(#[error(not(source))] String),
}

impl FromStr for PieceSeed {
    type Err = ParsePieceSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParsePieceSeedError::InvalidLength(s.len()));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParsePieceSeedError::InvalidDigit(s.to_owned()));
        }
        let num = u128::from_str_radix(s, 16)
            .map_err(|_| ParsePieceSeedError::InvalidDigit(s.to_owned()))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl Serialize for PieceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PieceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `PieceSeed` values with `rng.random()`.
impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

/// One-slot buffer of the next spawn seed.
///
/// The buffered value is what the next spawn will use, so it doubles as the
/// next-piece preview. Popping hands it out and draws a fresh uniform `u8`.
#[derive(Debug, Clone)]
pub struct SeedBuffer {
    rng: Pcg32,
    next: u8,
}

impl Default for SeedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedBuffer {
    /// Creates a buffer with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic piece generation.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        let mut rng = Pcg32::from_seed(seed.0);
        let next = rng.random();
        Self { rng, next }
    }

    #[must_use]
    pub fn peek_next_seed(&self) -> u8 {
        self.next
    }

    /// Shape the next spawn will have.
    #[must_use]
    pub fn peek_next_kind(&self) -> PieceKind {
        PieceKind::from_seed(self.next)
    }

    /// Returns the buffered seed and refills the buffer.
    pub fn pop_next_seed(&mut self) -> u8 {
        let fresh = self.rng.random();
        std::mem::replace(&mut self.next, fresh)
    }
}
