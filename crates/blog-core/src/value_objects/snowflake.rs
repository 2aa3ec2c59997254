//! Snowflake ID - 64-bit time-ordered identifier for users and comments
//!
//! Layout:
//! - Bits 63-22: milliseconds since [`Snowflake::EPOCH`]
//! - Bits 21-12: worker ID (0-1023)
//! - Bits 11-0:  per-millisecond sequence (0-4095)

use parking_lot::Mutex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const WORKER_BITS: u32 = 10;
const SEQUENCE_BITS: u32 = 12;
const MAX_WORKER_ID: u16 = (1 << WORKER_BITS) - 1;
const SEQUENCE_MASK: i64 = (1 << SEQUENCE_BITS) - 1;

/// Unique identifier for domain entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Custom epoch: 2024-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_704_067_200_000;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Milliseconds since the Unix epoch at which this id was minted
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> (WORKER_BITS + SEQUENCE_BITS)) + Self::EPOCH
    }

    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> SEQUENCE_BITS) & i64::from(MAX_WORKER_ID)) as u16
    }

    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// Ids travel as JSON strings; JavaScript clients lose precision above 2^53.
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Str(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(value) => Ok(Snowflake(value)),
            Raw::Str(value) => value
                .parse::<i64>()
                .map(Snowflake)
                .map_err(|_| serde::de::Error::custom("invalid snowflake string")),
        }
    }
}

#[derive(Debug, Default)]
struct GeneratorState {
    last_timestamp: i64,
    sequence: i64,
}

/// Snowflake ID generator shared by all request tasks
///
/// Up to 4096 ids per millisecond per worker; the critical section is a few
/// integer operations so a plain mutex is enough.
#[derive(Debug)]
pub struct SnowflakeGenerator {
    worker_id: u16,
    state: Mutex<GeneratorState>,
}

impl SnowflakeGenerator {
    /// # Panics
    /// Panics if `worker_id` does not fit in 10 bits
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id <= MAX_WORKER_ID, "Worker ID must be < 1024");
        Self {
            worker_id,
            state: Mutex::new(GeneratorState::default()),
        }
    }

    pub fn generate(&self) -> Snowflake {
        let mut state = self.state.lock();
        let mut now = current_millis().max(state.last_timestamp);

        if now == state.last_timestamp {
            state.sequence = (state.sequence + 1) & SEQUENCE_MASK;
            if state.sequence == 0 {
                // Sequence exhausted for this millisecond
                while now <= state.last_timestamp {
                    std::hint::spin_loop();
                    now = current_millis();
                }
            }
        } else {
            state.sequence = 0;
        }
        state.last_timestamp = now;

        Snowflake::new(
            ((now - Snowflake::EPOCH) << (WORKER_BITS + SEQUENCE_BITS))
                | (i64::from(self.worker_id) << SEQUENCE_BITS)
                | state.sequence,
        )
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

fn current_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_snowflake_parse() {
        assert_eq!(Snowflake::parse("123456789").unwrap(), Snowflake::new(123_456_789));
        assert!(Snowflake::parse("abc").is_err());
    }

    #[test]
    fn test_snowflake_json_is_string() {
        let json = serde_json::to_string(&Snowflake::new(123_456_789_012_345_678)).unwrap();
        assert_eq!(json, "\"123456789012345678\"");
    }

    #[test]
    fn test_snowflake_deserialize_string_or_number() {
        let from_str: Snowflake = serde_json::from_str("\"42\"").unwrap();
        let from_num: Snowflake = serde_json::from_str("42").unwrap();
        assert_eq!(from_str, from_num);
        assert!(serde_json::from_str::<Snowflake>("\"forty-two\"").is_err());
    }

    #[test]
    fn test_generator_ids_are_unique_and_increasing() {
        let gen = SnowflakeGenerator::new(3);
        let mut last = Snowflake::default();
        for _ in 0..5000 {
            let id = gen.generate();
            assert!(id > last);
            last = id;
        }
        assert_eq!(last.worker_id(), 3);
    }

    #[test]
    fn test_generator_across_threads() {
        let gen = Arc::new(SnowflakeGenerator::new(1));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let gen = Arc::clone(&gen);
                thread::spawn(move || (0..1000).map(|_| gen.generate()).collect::<Vec<_>>())
            })
            .collect();

        let ids: HashSet<_> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(ids.len(), 4000);
    }

    #[test]
    fn test_timestamp_roundtrip() {
        let before = current_millis();
        let id = SnowflakeGenerator::default().generate();
        assert!(id.timestamp() >= before);
        assert!(id.timestamp() <= current_millis());
    }

    #[test]
    #[should_panic(expected = "Worker ID must be < 1024")]
    fn test_generator_invalid_worker_id() {
        SnowflakeGenerator::new(1024);
    }
}
