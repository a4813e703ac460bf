use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Message served by the bus app backend.
pub const BUS_APP_MESSAGE: &str = "Hello, this is your JSON data.";

/// Message served by the standalone spring backend.
pub const SPRING_MESSAGE: &str = "Hello, this is your JSON data. Jaden was here. So was Neal.";

/// JSON body returned by the data endpoint.
///
/// Serializes to an object with exactly one key, `message`. The message is
/// a compile-time constant, so every payload built from the same variant
/// serializes to the same bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DataPayload {
    pub message: &'static str,
}

impl DataPayload {
    /// Creates a payload carrying the given fixed message.
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Which deployment's message a process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    BusApp,
    Spring,
}

impl Variant {
    /// All known variants, in selector order.
    pub const ALL: [Variant; 2] = [Variant::BusApp, Variant::Spring];

    /// Returns the value used to select this variant in configuration.
    pub fn selector(&self) -> &'static str {
        match self {
            Variant::BusApp => "bus-app",
            Variant::Spring => "spring",
        }
    }

    /// Returns the fixed message for this variant.
    pub fn message(&self) -> &'static str {
        match self {
            Variant::BusApp => BUS_APP_MESSAGE,
            Variant::Spring => SPRING_MESSAGE,
        }
    }

    /// Builds the response payload for this variant.
    pub fn payload(&self) -> DataPayload {
        DataPayload::new(self.message())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Error returned when a selector names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown data variant `{0}` (expected one of: bus-app, spring)")]
pub struct ParseVariantError(pub String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.selector().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseVariantError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_is_bus_app() {
        assert_eq!(Variant::default(), Variant::BusApp);
    }

    #[test]
    fn variants_carry_distinct_messages() {
        assert_eq!(Variant::BusApp.message(), "Hello, this is your JSON data.");
        assert_eq!(
            Variant::Spring.message(),
            "Hello, this is your JSON data. Jaden was here. So was Neal."
        );
        assert_ne!(Variant::BusApp.message(), Variant::Spring.message());
    }

    #[test]
    fn variant_parses_its_own_selector() {
        for variant in Variant::ALL {
            let parsed: Variant = variant.selector().parse().unwrap();
            assert_eq!(parsed, variant);
            assert_eq!(variant.to_string(), variant.selector());
        }
    }

    #[test]
    fn variant_parse_ignores_case_and_whitespace() {
        assert_eq!(" Spring ".parse::<Variant>().unwrap(), Variant::Spring);
        assert_eq!("BUS-APP".parse::<Variant>().unwrap(), Variant::BusApp);
    }

    #[test]
    fn variant_parse_rejects_unknown() {
        let err = "backend".parse::<Variant>().unwrap_err();
        assert_eq!(err, ParseVariantError("backend".to_string()));
        assert!(err.to_string().contains("`backend`"));
    }

    #[test]
    fn payload_serializes_single_message_key() {
        let json = serde_json::to_string(&Variant::BusApp.payload()).unwrap();
        assert_eq!(json, r#"{"message":"Hello, this is your JSON data."}"#);

        let value = serde_json::to_value(Variant::Spring.payload()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["message"], SPRING_MESSAGE);
    }

    #[test]
    fn payload_is_deterministic() {
        let first = serde_json::to_vec(&Variant::Spring.payload()).unwrap();
        let second = serde_json::to_vec(&Variant::Spring.payload()).unwrap();
        assert_eq!(first, second);
    }
}
