use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A metadata filter, sent on the query string as `key:value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataPair {
    pub key: String,
    pub value: String,
}

impl MetadataPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for MetadataPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

impl Serialize for MetadataPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MetadataPair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.split_once(':') {
            Some((key, value)) => Ok(MetadataPair::new(key, value)),
            None => Err(serde::de::Error::custom(format!(
                "metadata pair '{}' is not in key:value form",
                raw
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_pair_serializes_as_key_value() {
        let pair = MetadataPair::new("team", "infra");
        assert_eq!(serde_json::to_string(&pair).unwrap(), "\"team:infra\"");
    }

    #[test]
    fn test_metadata_pair_requires_separator() {
        assert!(serde_json::from_str::<MetadataPair>("\"team\"").is_err());
        let parsed: MetadataPair = serde_json::from_str("\"team:infra:east\"").unwrap();
        assert_eq!(parsed.value, "infra:east");
    }
}
