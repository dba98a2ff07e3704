use std::time::Duration;

use serde::Deserialize;

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (wildcard "*" or explicit list)
    #[serde(default)]
    pub origins: AnyOrArray,
    /// Allowed HTTP methods (wildcard "*" or explicit list)
    #[serde(default)]
    pub methods: AnyOrArray,
    /// Allowed headers (wildcard "*" or explicit list)
    #[serde(default)]
    pub headers: AnyOrArray,
    /// Allow credentials
    #[serde(default)]
    pub credentials: bool,
    /// Max age for preflight cache in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl CorsConfig {
    /// Any origin, any method, any header
    ///
    /// Matches what the browser frontend expects when it calls the
    /// backend from a different port.
    pub fn permissive() -> Self {
        Self {
            origins: AnyOrArray::Any,
            methods: AnyOrArray::Any,
            headers: AnyOrArray::Any,
            credentials: false,
            max_age: None,
        }
    }

    /// Get max age as Duration
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}

/// Either a wildcard "*" or explicit list of values
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "OneOrMany")]
pub enum AnyOrArray {
    /// Match any value
    #[default]
    Any,
    /// Explicit list
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for AnyOrArray {
    fn from(value: OneOrMany) -> Self {
        let values = match value {
            OneOrMany::One(single) => vec![single],
            OneOrMany::Many(values) => values,
        };

        if values.iter().any(|v| v == "*") {
            Self::Any
        } else {
            Self::List(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        origins: AnyOrArray,
    }

    fn parse(value: &str) -> AnyOrArray {
        toml::from_str::<Wrapper>(&format!("origins = {value}")).unwrap().origins
    }

    #[test]
    fn wildcard_string_is_any() {
        assert_eq!(parse("\"*\""), AnyOrArray::Any);
    }

    #[test]
    fn wildcard_inside_list_is_any() {
        assert_eq!(parse("[\"http://localhost:3000\", \"*\"]"), AnyOrArray::Any);
    }

    #[test]
    fn single_origin_becomes_list() {
        assert_eq!(
            parse("\"http://localhost:3000\""),
            AnyOrArray::List(vec!["http://localhost:3000".to_owned()])
        );
    }
}
