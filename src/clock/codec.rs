//! Canonical textual form of a timestamp
//!
//! ```not_rust
//! <decimal millis>:<4 uppercase hex digit counter>:<node id>
//! 1700000000000:0001:ab12cd34
//! ```
//!
//! This is the only representation exchanged between nodes or persisted.

use core::fmt;
use core::str::FromStr;

use crate::clock::HlcTimestamp;
use crate::error::{ClockError, ClockResult, FormatError};
use crate::node::NodeId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Field separator of the canonical form
pub const SEPARATOR: char = ':';

/// Width of the hexadecimal counter field
pub const COUNTER_WIDTH: usize = 4;

/// Serializes a timestamp to its canonical textual form
///
/// # Example
/// ```rust
/// use hlclock::clock::{HlcTimestamp, serialize};
/// use hlclock::node::NodeId;
///
/// let ts = HlcTimestamp::new(1_700_000_000_000, 255, NodeId::new("ab12cd34")?);
/// assert_eq!(serialize(&ts), "1700000000000:00FF:ab12cd34");
/// # Ok::<(), hlclock::error::ClockError>(())
/// ```
pub fn serialize(timestamp: &HlcTimestamp) -> String {
    timestamp.to_string()
}

/// Parses a timestamp from its canonical textual form
///
/// Accepts exactly three `:`-separated fields. Anything else, including signs, whitespace or
/// counters wider than four hex digits, fails with [`ClockError::InvalidClockFormat`].
pub fn parse(text: &str) -> ClockResult<HlcTimestamp> {
    let fields: Vec<&str> = text.split(SEPARATOR).collect();
    let [physical_time, counter, node_id] = fields.as_slice() else {
        return Err(FormatError::FieldCount(fields.len()).into());
    };

    Ok(HlcTimestamp::new(
        parse_physical_time(physical_time)?,
        parse_counter(counter)?,
        parse_node_id(node_id)?,
    ))
}

fn parse_physical_time(field: &str) -> Result<u64, FormatError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::PhysicalTime);
    }
    field.parse().map_err(|_| FormatError::PhysicalTime)
}

fn parse_counter(field: &str) -> Result<u16, FormatError> {
    if field.is_empty()
        || field.len() > COUNTER_WIDTH
        || !field.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(FormatError::Counter);
    }
    u16::from_str_radix(field, 16).map_err(|_| FormatError::Counter)
}

fn parse_node_id(field: &str) -> Result<NodeId, FormatError> {
    NodeId::new(field).map_err(|_| FormatError::NodeId)
}

impl fmt::Display for HlcTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{:0width$X}{SEPARATOR}{}",
            self.physical_time(),
            self.counter(),
            self.node_id(),
            width = COUNTER_WIDTH
        )
    }
}

impl FromStr for HlcTimestamp {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for HlcTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for HlcTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(serde::de::Error::custom)
    }
}
