//! Generator configuration.
//!
//! Configuration is resolved once at process startup and passed into [`UuidGenerator`]. Nothing in
//! this crate reads environment variables; callers that take a node id from the environment pass
//! the raw value to [`node_id_from_env_value`].
//!
//! [`UuidGenerator`]: crate::UuidGenerator

use crate::{UuidError, UuidResult};

/// Configuration for [`UuidGenerator`](crate::UuidGenerator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    node_id: [u8; 6],
}

impl GeneratorConfig {
    /// Create a configuration with an explicit 48-bit node id for v1 UUIDs.
    pub fn new(node_id: [u8; 6]) -> Self {
        Self { node_id }
    }

    /// Create a configuration with a random node id.
    ///
    /// The multicast bit is set so the id can never collide with a real IEEE 802 MAC address
    /// (RFC 4122 §4.5).
    pub fn random() -> Self {
        Self::new(random_node_id())
    }

    pub fn node_id(&self) -> [u8; 6] {
        self.node_id
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::random()
    }
}

/// Parse a v1 node id from an optional string value.
///
/// Accepts six hex octets separated by `:` or `-` (`aa:bb:cc:dd:ee:ff`), or 12 bare hex digits.
/// If `value` is `None` or empty/whitespace, returns a random node id.
///
/// # Errors
///
/// Returns [`UuidError::InvalidInput`] if the value is present but malformed.
pub fn node_id_from_env_value(value: Option<String>) -> UuidResult<[u8; 6]> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(value) = value else {
        return Ok(random_node_id());
    };

    let digits: String = if value.contains([':', '-']) {
        let octets: Vec<&str> = value.split([':', '-']).collect();
        if octets.len() != 6 || octets.iter().any(|octet| octet.len() != 2) {
            return Err(UuidError::InvalidInput(format!(
                "node id must have six two-digit octets, got: '{}'",
                value
            )));
        }
        octets.concat()
    } else {
        value.clone()
    };

    let mut node_id = [0u8; 6];
    hex::decode_to_slice(&digits, &mut node_id).map_err(|e| {
        UuidError::InvalidInput(format!("invalid node id '{}': {}", value, e))
    })?;
    Ok(node_id)
}

fn random_node_id() -> [u8; 6] {
    let mut node_id: [u8; 6] = rand::random();
    node_id[0] |= 0x01;
    node_id
}
