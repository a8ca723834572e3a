//! Tunables for reading and reporting on a word list.
//!
//! The `[input]` table decides which lines become words, `[resolve]` fixes
//! the order ties are broken in, and `[report]` controls what is printed.
//! Defaults live in `default_settings.toml` and are compiled in.
//!
//! Library entry points take `&Settings` explicitly. Binaries install a user
//! file with [`init_custom`] and then read the process-wide copy through
//! [`settings`].

use std::sync::OnceLock;

use serde::Deserialize;

use crate::resolve::ResolveOrder;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Install a user settings file. Only takes effect before the first
/// [`settings`] call, and the content is validated first.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// The installed settings, or the compiled-in defaults.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Default settings TOML, as printed by `lwtool settings-export`.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub input: InputSettings,
    pub resolve: ResolveSettings,
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub min_word_len: usize,
    pub on_invalid: InvalidLinePolicy,
}

/// What to do with a line that is not a plain `a..=z` word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidLinePolicy {
    Skip,
    Fail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolveSettings {
    pub order: ResolveOrder,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    pub list_matches: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.input.min_word_len == 0 {
        return Err(SettingsError::InvalidValue {
            field: "input.min_word_len".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}
