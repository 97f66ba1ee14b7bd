//! YAML deserialization helpers.

use serde::de::DeserializeOwned;

use super::SerializationError;

/// Deserializes YAML from a string.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or doesn't match the expected type.
pub fn from_yaml<T: DeserializeOwned>(yaml: &str) -> Result<T, SerializationError> {
    serde_yaml::from_str(yaml).map_err(SerializationError::Yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_from_yaml() {
        let map: BTreeMap<String, String> =
            from_yaml("name: test\nother: value\n").expect("deserialization should work");
        assert_eq!(map["name"], "test");
        assert_eq!(map["other"], "value");
    }

    #[test]
    fn test_from_yaml_invalid() {
        let result: Result<BTreeMap<String, String>, _> = from_yaml("name: [unclosed");
        assert!(matches!(result, Err(SerializationError::Yaml(_))));
    }
}
