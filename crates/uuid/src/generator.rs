//! Generation of fresh UUIDs, returned directly in binary form.

use crate::{BinaryUuid, GeneratorConfig};
use std::fmt;
use std::sync::OnceLock;
use uuid::{ContextV1, Timestamp, Uuid};

static DEFAULT_GENERATOR: OnceLock<UuidGenerator> = OnceLock::new();

/// Produces v1 and v4 UUIDs already encoded as [`BinaryUuid`].
///
/// A generator owns the clock sequence used for v1 values. Successive v1 values from the same
/// generator never repeat: the sequence advances whenever two calls land on the same timestamp
/// tick. Share one generator across threads rather than creating one per call.
pub struct UuidGenerator {
    context: ContextV1,
    node_id: [u8; 6],
}

impl UuidGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        tracing::debug!(node_id = %hex::encode(config.node_id()), "initialising UUID generator");
        Self {
            context: ContextV1::new_random(),
            node_id: config.node_id(),
        }
    }

    /// Returns the process-wide generator used by [`v1`] and [`v4`].
    ///
    /// It is created on first use with a random node id.
    pub fn shared() -> &'static UuidGenerator {
        DEFAULT_GENERATOR.get_or_init(|| UuidGenerator::new(GeneratorConfig::random()))
    }

    pub fn node_id(&self) -> [u8; 6] {
        self.node_id
    }

    /// Generates a time-based (version 1) UUID.
    pub fn generate_v1(&self) -> BinaryUuid {
        let ts = Timestamp::now(&self.context);
        BinaryUuid::from(Uuid::new_v1(ts, &self.node_id))
    }

    /// Generates a random (version 4) UUID.
    pub fn generate_v4(&self) -> BinaryUuid {
        BinaryUuid::from(Uuid::new_v4())
    }
}

impl fmt::Debug for UuidGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UuidGenerator")
            .field("node_id", &hex::encode(self.node_id))
            .finish_non_exhaustive()
    }
}

impl Default for UuidGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

/// Generates a time-based (version 1) UUID using the shared generator.
pub fn v1() -> BinaryUuid {
    UuidGenerator::shared().generate_v1()
}

/// Generates a random (version 4) UUID using the shared generator.
pub fn v4() -> BinaryUuid {
    UuidGenerator::shared().generate_v4()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_canonical;
    use chrono::Utc;
    use std::collections::HashSet;

    #[test]
    fn test_v4_is_valid_binary_uuid() {
        let binary = v4();

        assert_eq!(binary.len(), 16);
        assert_eq!(binary.version(), Some(4));
        assert!(is_canonical(&binary.to_text()));
    }

    #[test]
    fn test_v1_is_valid_binary_uuid() {
        let binary = v1();

        assert_eq!(binary.len(), 16);
        assert_eq!(binary.version(), Some(1));
        assert!(is_canonical(&binary.to_text()));
    }

    #[test]
    fn test_v4_successive_values_differ() {
        assert_ne!(v4(), v4());
    }

    #[test]
    fn test_v1_successive_values_differ() {
        let generator = UuidGenerator::default();
        let values: HashSet<BinaryUuid> = (0..1_000).map(|_| generator.generate_v1()).collect();

        assert_eq!(values.len(), 1_000);
    }

    #[test]
    fn test_v1_carries_configured_node_id() {
        let node_id = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab];
        let generator = UuidGenerator::new(GeneratorConfig::new(node_id));

        let binary = generator.generate_v1();

        assert_eq!(&binary.as_bytes()[10..16], &node_id);
        assert!(binary.to_text().ends_with("-0123456789ab"));
    }

    #[test]
    fn test_v1_timestamp_is_recent() {
        let before = Utc::now() - chrono::Duration::seconds(5);
        let binary = v1();
        let after = Utc::now() + chrono::Duration::seconds(5);

        let ts = binary.timestamp().unwrap();
        assert!(ts > before && ts < after);
    }

    #[test]
    fn test_shared_generator_is_reused() {
        let a = UuidGenerator::shared() as *const UuidGenerator;
        let b = UuidGenerator::shared() as *const UuidGenerator;

        assert_eq!(a, b);
    }
}
