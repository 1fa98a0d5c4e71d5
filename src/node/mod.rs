//! Node identifiers
//!
//! Every clock carries the id of the node that owns it. Ids are short opaque strings over a
//! lowercase alphanumeric alphabet; they only break ties between clocks and never take part
//! in advancing one.
//!
//! Ids come from a [`NodeIdSource`]. [`RngNodeIds`] is the provided strategy and can wrap any
//! RNG: [`RngNodeIds::os`] draws from the operating system's cryptographically strong source,
//! [`RngNodeIds::seeded`] from a reproducible ChaCha stream.

use core::fmt;
use std::sync::Arc;

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{ClockError, ClockResult};
use crate::traits::NodeIdSource;

/// Characters node ids are drawn from
pub const NODE_ID_ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Default generated node id length
pub const DEFAULT_NODE_ID_LENGTH: usize = 8;

/// Opaque identifier of the node owning a clock
///
/// Cheap to clone: every timestamp a clock issues shares its id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Creates a node id from an externally assigned string
    ///
    /// The id must be non-empty and must not contain the `:` field separator.
    ///
    /// # Example
    /// ```rust
    /// use hlclock::node::NodeId;
    ///
    /// assert!(NodeId::new("ab12cd34").is_ok());
    /// assert!(NodeId::new("").is_err());
    /// assert!(NodeId::new("a:b").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> ClockResult<Self> {
        let id = id.as_ref();
        if id.is_empty() || id.contains(':') {
            return Err(ClockError::InvalidNodeId);
        }
        Ok(Self(Arc::from(id)))
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length of the id in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; node ids are never empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Node id strategy backed by a random number generator
#[derive(Debug, Clone)]
pub struct RngNodeIds<R> {
    rng: R,
}

impl<R: RngCore> RngNodeIds<R> {
    /// Wraps an arbitrary RNG
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngNodeIds<OsRng> {
    /// Strategy drawing from the operating system's cryptographically strong RNG
    pub fn os() -> Self {
        Self::new(OsRng)
    }
}

impl RngNodeIds<ChaCha8Rng> {
    /// Pseudo-random strategy producing the same ids for the same seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> NodeIdSource for RngNodeIds<R> {
    fn generate(&mut self, length: usize) -> ClockResult<NodeId> {
        let id: String = (0..length)
            .map(|_| NODE_ID_ALPHABET[self.rng.gen_range(0..NODE_ID_ALPHABET.len())] as char)
            .collect();
        NodeId::new(id)
    }
}

/// Generates a fresh node id of `length` characters from the OS RNG
pub fn new_id(length: usize) -> ClockResult<NodeId> {
    RngNodeIds::os().generate(length)
}
