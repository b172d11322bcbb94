//! State rating-value registry.
//!
//! This module provides the [`StateRegistry`] type for loading per-state
//! rating values from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::StateRating;

/// Loads and serves per-state rating values.
///
/// One YAML file per jurisdiction lives in the reference-data directory;
/// lookups are keyed by uppercase 2-letter state code. A state without a
/// file fails loudly rather than falling back to guessed rating values.
///
/// # Directory Structure
///
/// ```text
/// config/states/
/// ├── ga.yaml   # Georgia (NCCI)
/// └── ca.yaml   # California (WCIRB, formula unimplemented)
/// ```
///
/// # Example
///
/// ```no_run
/// use emod_engine::config::StateRegistry;
///
/// let registry = StateRegistry::load("./config/states").unwrap();
/// let georgia = registry.get("GA").unwrap();
/// println!("SAL per claim: {}", georgia.sal_per_claim);
/// ```
#[derive(Debug, Clone)]
pub struct StateRegistry {
    states: HashMap<String, StateRating>,
}

impl StateRegistry {
    /// Loads every `*.yaml` rating file in the given directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when the directory is missing or holds no
    /// rating files, and `ConfigParseError` when a file is not valid YAML
    /// or is missing required fields.
    pub fn load<P: AsRef<Path>>(dir: P) -> EngineResult<Self> {
        let dir = dir.as_ref();
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut states = HashMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let rating = Self::load_yaml(&path)?;
                states.insert(rating.state_code.to_uppercase(), rating);
            }
        }

        if states.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rating files found)", dir_str),
            });
        }

        Ok(Self { states })
    }

    /// Loads and parses one rating-value file.
    fn load_yaml(path: &Path) -> EngineResult<StateRating> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Looks up rating values for a state code (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `StateNotSupported` naming the supported set when no rating
    /// file is registered for the code.
    pub fn get(&self, state_code: &str) -> EngineResult<&StateRating> {
        let key = state_code.to_uppercase();
        self.states
            .get(&key)
            .ok_or_else(|| EngineError::StateNotSupported {
                state: key.clone(),
                supported: self.supported_states(),
            })
    }

    /// Returns the sorted list of state codes the registry can rate.
    pub fn supported_states(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.states.keys().cloned().collect();
        codes.sort();
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Bureau;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn states_dir() -> &'static str {
        "./config/states"
    }

    #[test]
    fn test_load_shipped_rating_files() {
        let result = StateRegistry::load(states_dir());
        assert!(result.is_ok(), "Failed to load registry: {:?}", result.err());
    }

    #[test]
    fn test_get_georgia_rating_values() {
        let registry = StateRegistry::load(states_dir()).unwrap();
        let georgia = registry.get("GA").unwrap();

        assert_eq!(georgia.state_name, "Georgia");
        assert_eq!(georgia.split_point, dec("21500.00"));
        assert_eq!(georgia.sal_per_claim, dec("176000.00"));
        assert_eq!(georgia.sal_multiple_claim, dec("352000.00"));
        assert_eq!(georgia.s_value, dec("3162500.00"));
        assert_eq!(georgia.era_discount, dec("0.30"));
        assert_eq!(georgia.bureau, Bureau::Ncci);
        assert!(georgia.is_era_state);
        assert!(georgia.is_ncci_state);
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let registry = StateRegistry::load(states_dir()).unwrap();
        let georgia = registry.get("ga").unwrap();
        assert_eq!(georgia.state_code, "GA");
    }

    #[test]
    fn test_california_registered_but_not_ncci() {
        let registry = StateRegistry::load(states_dir()).unwrap();
        let california = registry.get("CA").unwrap();

        assert_eq!(california.bureau, Bureau::Wcirb);
        assert!(!california.is_ncci_state);
        assert!(california.w_and_b(dec("50000")).is_err());
    }

    #[test]
    fn test_unknown_state_names_supported_set() {
        let registry = StateRegistry::load(states_dir()).unwrap();
        let result = registry.get("TX");

        match result {
            Err(EngineError::StateNotSupported { state, supported }) => {
                assert_eq!(state, "TX");
                assert_eq!(supported, vec!["CA".to_string(), "GA".to_string()]);
            }
            other => panic!("Expected StateNotSupported, got {:?}", other),
        }
    }

    #[test]
    fn test_supported_states_sorted() {
        let registry = StateRegistry::load(states_dir()).unwrap();
        assert_eq!(registry.supported_states(), vec!["CA", "GA"]);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = StateRegistry::load("/nonexistent/path");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }
}
