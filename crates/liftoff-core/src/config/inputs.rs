//! GitHub Actions inputs
//!
//! When Liftoff runs as an action step, the runner exposes every `with:`
//! input as an `INPUT_<NAME>` environment variable, where `<NAME>` is the
//! input name upper-cased with spaces replaced by underscores. Hyphens are
//! kept, so `slack-webhook-url` becomes `INPUT_SLACK-WEBHOOK-URL`.

use std::collections::HashMap;

/// Source of named string inputs
pub trait InputSource {
    /// Get an input by name. Blank values are reported as absent.
    fn input(&self, name: &str) -> Option<String>;
}

/// Environment variable backing an action input
pub fn input_env_var(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Action inputs read from the process environment, or from a fixed map
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    overrides: Option<HashMap<String, String>>,
}

impl ActionInputs {
    /// Read inputs from the process environment
    pub fn from_env() -> Self {
        Self { overrides: None }
    }

    /// Use a fixed set of inputs, keyed by input name
    pub fn from_map<I, K, V>(inputs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            overrides: Some(
                inputs
                    .into_iter()
                    .map(|(k, v)| (input_env_var(&k.into()), v.into()))
                    .collect(),
            ),
        }
    }
}

impl InputSource for ActionInputs {
    fn input(&self, name: &str) -> Option<String> {
        let key = input_env_var(name);
        let raw = match &self.overrides {
            Some(map) => map.get(&key).cloned(),
            None => std::env::var(&key).ok(),
        }?;

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_env_var() {
        assert_eq!(input_env_var("slack-webhook-url"), "INPUT_SLACK-WEBHOOK-URL");
        assert_eq!(input_env_var("service name"), "INPUT_SERVICE_NAME");
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let inputs = ActionInputs::from_map([("service-name", "  billing \n")]);
        assert_eq!(inputs.input("service-name").as_deref(), Some("billing"));
    }

    #[test]
    fn test_blank_input_is_absent() {
        let inputs = ActionInputs::from_map([("service-name", "   ")]);
        assert!(inputs.input("service-name").is_none());
        assert!(inputs.input("repository").is_none());
    }
}
