//! Strength of a hero's power

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Allowed strength values. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    pub const ALL: [Strength; 3] = [Strength::Strong, Strength::Weak, Strength::Average];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Weak => "Weak",
            Strength::Average => "Average",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strength {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strength::ALL
            .into_iter()
            .find(|strength| strength.as_str() == s)
            .ok_or(ValidationError::InvalidStrength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_values() {
        assert_eq!("Strong".parse::<Strength>().unwrap(), Strength::Strong);
        assert_eq!("Weak".parse::<Strength>().unwrap(), Strength::Weak);
        assert_eq!("Average".parse::<Strength>().unwrap(), Strength::Average);
    }

    #[test]
    fn test_parse_is_case_sensitive_and_untrimmed() {
        for raw in ["strong", "WEAK", " Average", "Average ", ""] {
            assert!(raw.parse::<Strength>().is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&Strength::Average).unwrap();
        assert_eq!(json, "\"Average\"");
        let back: Strength = serde_json::from_str("\"Weak\"").unwrap();
        assert_eq!(back, Strength::Weak);
    }
}
