// Start of file: /src/config/response_config.rs

// * Settings that shape every JSON response: the active transform, the
// * default Content-Type and the indent flag. Each one sits behind its own
// * mutex so a reader sees either the old or the new value, never a mix.

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::response::transform::{
    DefaultTransform, MessageCode, MessageCodeExcuse, Passthrough, Transform, DATA_KEY,
};

// ! Defaults used by `ResponseConfig::default()` and for missing variables
pub const DEFAULT_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const DEFAULT_CODE_FIELD: &str = "code";

pub struct ResponseConfig {
    transformer: Mutex<Arc<dyn Transform>>,
    content_type: Mutex<String>,
    indent: Mutex<bool>,
}

// * The guarded values are plain data, so a poisoned lock is still usable
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            transformer: Mutex::new(Arc::new(DefaultTransform)),
            content_type: Mutex::new(DEFAULT_CONTENT_TYPE.to_owned()),
            indent: Mutex::new(false),
        }
    }
}

impl fmt::Debug for ResponseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transformer: Arc<dyn Transform> = self.transformer();
        f.debug_struct("ResponseConfig")
            .field("transformer", &transformer.name())
            .field("content_type", &self.default_content_type())
            .field("indent", &self.indent())
            .finish()
    }
}

impl ResponseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // * Returns the process-wide configuration used by the convenience API
    pub fn global() -> &'static Self {
        static INSTANCE: Lazy<ResponseConfig> = Lazy::new(ResponseConfig::default);
        &INSTANCE
    }

    /// Replaces the active transform. Responses emitted afterwards use it.
    pub fn set_transformer(&self, transformer: impl Transform + 'static) {
        self.set_shared_transformer(Arc::new(transformer));
    }

    pub fn set_shared_transformer(&self, transformer: Arc<dyn Transform>) {
        debug!("Switching response transformer to '{}'", transformer.name());
        *lock(&self.transformer) = transformer;
    }

    pub fn reset_transformer(&self) {
        self.set_transformer(DefaultTransform);
    }

    // * Cloning the Arc keeps the lock short; the transform runs unlocked
    pub fn transformer(&self) -> Arc<dyn Transform> {
        Arc::clone(&lock(&self.transformer))
    }

    /// Sets the Content-Type added when neither the transform nor the
    /// envelope chose one. An empty string disables it on the generic path.
    pub fn set_default_content_type(&self, content_type: impl Into<String>) {
        *lock(&self.content_type) = content_type.into();
    }

    pub fn default_content_type(&self) -> String {
        lock(&self.content_type).clone()
    }

    /// Turns tab-indented output on or off.
    pub fn set_indent(&self, indent: bool) {
        *lock(&self.indent) = indent;
    }

    pub fn indent(&self) -> bool {
        *lock(&self.indent)
    }

    // * Builds a config from JSON_RESPONSE_* variables (and .env outside production)
    pub fn from_env() -> Result<Self> {
        let config: ResponseConfig = ResponseConfig::default();
        config.apply_env()?;
        Ok(config)
    }

    // * Overwrites the settings named by JSON_RESPONSE_* variables in place,
    // * e.g. `ResponseConfig::global().apply_env()` at startup
    pub fn apply_env(&self) -> Result<()> {
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        self.apply_lookup(|key| std::env::var(key).ok())
    }

    // * Everything is parsed before anything is set, so an invalid variable
    // * leaves the current settings untouched
    fn apply_lookup(&self, get_var: impl Fn(&str) -> Option<String>) -> Result<()> {
        let content_type: Option<String> = get_var("JSON_RESPONSE_CONTENT_TYPE");

        let indent: Option<bool> = get_var("JSON_RESPONSE_INDENT")
            .map(|s| parse_flag(&s).context("Invalid JSON_RESPONSE_INDENT"))
            .transpose()?;

        let data_field: String = get_var("JSON_RESPONSE_DATA_FIELD").unwrap_or_else(|| DATA_KEY.to_owned());
        let code_field: String =
            get_var("JSON_RESPONSE_CODE_FIELD").unwrap_or_else(|| DEFAULT_CODE_FIELD.to_owned());

        let transformer: Option<Arc<dyn Transform>> = match get_var("JSON_RESPONSE_TRANSFORM").as_deref() {
            None => {
                debug!("Missing JSON_RESPONSE_TRANSFORM, keeping the current transform");
                None
            }
            Some("default") => Some(Arc::new(DefaultTransform)),
            Some("passthrough") => Some(Arc::new(Passthrough)),
            Some("message-code") => Some(Arc::new(MessageCode::new(data_field, code_field))),
            Some("message-code-excuse") => Some(Arc::new(MessageCodeExcuse::new(data_field, code_field))),
            Some(other) => bail!("Invalid JSON_RESPONSE_TRANSFORM '{other}'"),
        };

        if let Some(content_type) = content_type {
            self.set_default_content_type(content_type);
        }
        if let Some(indent) = indent {
            self.set_indent(indent);
        }
        if let Some(transformer) = transformer {
            self.set_shared_transformer(transformer);
        }

        if cfg!(debug_assertions) {
            debug!("Loaded response configuration: {:?}", self);
        }

        Ok(())
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected true/false, got '{other}'"),
    }
}

// * Process-wide shortcuts, kept for callers that never build their own config

pub fn set_transformer(transformer: impl Transform + 'static) {
    ResponseConfig::global().set_transformer(transformer);
}

pub fn reset_transformer() {
    ResponseConfig::global().reset_transformer();
}

pub fn set_default_content_type(content_type: impl Into<String>) {
    ResponseConfig::global().set_default_content_type(content_type);
}

pub fn set_indent(indent: bool) {
    ResponseConfig::global().set_indent(indent);
}


// End of file: /src/config/response_config.rs
