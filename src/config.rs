//! Runtime configuration.
//!
//! Values come from the process environment first (native builds load `.env`
//! at startup), then from the bundled `assets/config.env`, which is the only
//! source available to web builds.

use anyhow::{Context, Result};
use std::collections::HashMap;

/// Bundled config for web and mobile builds
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

const API_KEY_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY"];
const MODEL_VAR: &str = "GEMINI_MODEL";
const ENDPOINT_VAR: &str = "GEMINI_ENDPOINT";

/// Resolved key/value settings with environment overrides applied.
#[derive(Clone, Debug, Default)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    /// Load the bundled defaults and overlay the process environment.
    pub fn load() -> Self {
        match Self::from_sources(BUNDLED_CONFIG, |key| std::env::var(key).ok()) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("ignoring bundled config: {err:#}");
                Self::from_env_only()
            }
        }
    }

    fn from_env_only() -> Self {
        let mut settings = Self::default();
        settings.overlay(|key| std::env::var(key).ok());
        settings
    }

    /// Parse `bundle` as dotenv text, then let `lookup` override each known key.
    pub fn from_sources(bundle: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut values = HashMap::new();
        for entry in dotenvy::from_read_iter(bundle.as_bytes()) {
            let (key, value) = entry.context("malformed line in bundled config")?;
            values.insert(key, value);
        }
        let mut settings = Self { values };
        settings.overlay(lookup);
        Ok(settings)
    }

    fn overlay(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let keys = API_KEY_VARS.iter().copied().chain([MODEL_VAR, ENDPOINT_VAR]);
        for key in keys {
            if let Some(value) = lookup(key) {
                self.values.insert(key.to_string(), value);
            }
        }
    }

    /// Non-empty value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

/// Connection details for the generation service.
#[derive(Clone, Debug, PartialEq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self::from_settings(&Settings::load())
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|key| settings.get(key))
            .map(str::to_string);
        let model = settings.get(MODEL_VAR).unwrap_or(DEFAULT_MODEL).to_string();
        let endpoint = settings
            .get(ENDPOINT_VAR)
            .unwrap_or(DEFAULT_ENDPOINT)
            .trim_end_matches('/')
            .to_string();
        Self {
            api_key,
            model,
            endpoint,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
