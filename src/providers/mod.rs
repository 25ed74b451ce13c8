//! Provider module for AlphaChat
//!
//! This module contains the remote model client abstraction and the
//! Cohere implementation.

pub mod base;
pub mod cohere;

pub use base::Provider;
pub use cohere::{CohereProvider, COHERE_API_KEY_ENV};

use crate::config::ProviderConfig;
use crate::error::Result;

/// Create a provider instance based on configuration
///
/// # Arguments
///
/// * `provider_type` - Type of provider ("cohere")
/// * `config` - Provider configuration
///
/// # Returns
///
/// Returns a boxed provider instance
///
/// # Errors
///
/// Returns error if the provider type is unknown or initialization fails
/// (for example a missing credential).
pub fn create_provider(provider_type: &str, config: &ProviderConfig) -> Result<Box<dyn Provider>> {
    match provider_type {
        "cohere" => Ok(Box::new(cohere::CohereProvider::new(
            config.cohere.clone(),
        )?)),
        _ => Err(crate::error::AlphachatError::Provider(format!(
            "Unknown provider type: {}",
            provider_type
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CohereConfig;

    #[test]
    fn test_create_provider_invalid_type() {
        let config = ProviderConfig {
            provider_type: "invalid".to_string(),
            cohere: CohereConfig::default(),
        };

        let result = create_provider("invalid", &config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unknown provider type"));
    }

    #[test]
    fn test_create_provider_cohere_with_key() {
        let config = ProviderConfig {
            provider_type: "cohere".to_string(),
            cohere: CohereConfig {
                api_base: None,
                api_key: Some("test-key".to_string()),
            },
        };

        let result = create_provider("cohere", &config);
        assert!(result.is_ok());
        assert_eq!(result.unwrap().name(), "cohere");
    }
}
