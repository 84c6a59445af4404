use std::{env, path::PathBuf, str::FromStr};
use thiserror::Error;

use crate::application::forms::FormSettings;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    fixtures_path: Option<PathBuf>,
    forms: FormSettings,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const JSON_ESCAPED_CHAR_BYTES: usize = 6;
const BODY_OVERHEAD_BYTES: usize = 1024 * 1024;

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

/// Numeric variable: absent means `default`, anything unparsable is an error.
fn number<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got '{raw}'"))),
    }
}

/// Size limit: like [`number`], but zero would reject every non-empty value.
fn limit<T: FromStr + Default + PartialEq>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    let value = number(lookup, key, default)?;
    if value == T::default() {
        return Err(ConfigError::Invalid(format!("{key} must be a positive number, got 0")));
    }
    Ok(value)
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let fixtures_path = lookup("FIXTURES_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let defaults = FormSettings::default();
        let antispam_seconds = number(
            &lookup,
            "ANTISPAM_DELAY_SECONDS",
            defaults.antispam_delay.num_seconds(),
        )?;
        if antispam_seconds < 0 {
            return Err(ConfigError::Invalid(
                "ANTISPAM_DELAY_SECONDS must not be negative".into(),
            ));
        }

        let forms = FormSettings {
            site_name: lookup("SITE_NAME").unwrap_or(defaults.site_name),
            licence_info_url: lookup("LICENCE_INFO_URL").unwrap_or(defaults.licence_info_url),
            licence_info_label: lookup("LICENCE_INFO_LABEL").unwrap_or(defaults.licence_info_label),
            title_max_length: limit(&lookup, "TITLE_MAX_LENGTH", defaults.title_max_length)?,
            description_max_length: limit(
                &lookup,
                "DESCRIPTION_MAX_LENGTH",
                defaults.description_max_length,
            )?,
            commit_message_max_length: limit(
                &lookup,
                "COMMIT_MESSAGE_MAX_LENGTH",
                defaults.commit_message_max_length,
            )?,
            max_post_length: limit(&lookup, "MAX_POST_LENGTH", defaults.max_post_length)?,
            image_max_size: limit(&lookup, "IMAGE_MAX_SIZE", defaults.image_max_size)?,
            antispam_delay: chrono::Duration::seconds(antispam_seconds),
        };

        Ok(Self {
            listen_addr,
            allowed_origins,
            fixtures_path,
            forms,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// JSON file seeding the in-memory store, if any.
    pub fn fixtures_path(&self) -> Option<&PathBuf> {
        self.fixtures_path.as_ref()
    }

    pub fn forms(&self) -> &FormSettings {
        &self.forms
    }

    /// Largest accepted request body, in bytes. A note of `MAX_POST_LENGTH`
    /// characters must fit even when every character is JSON-escaped
    /// (`\uXXXX`), plus room for the other fields.
    pub fn request_body_limit(&self) -> usize {
        self.forms
            .max_post_length
            .saturating_mul(JSON_ESCAPED_CHAR_BYTES)
            .saturating_add(BODY_OVERHEAD_BYTES)
    }
}
