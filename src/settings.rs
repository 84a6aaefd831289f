//! Persisted configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::hotkey::{parse_hotkey, Hotkey};

pub const DEFAULT_PATH: &str = "translator_config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApiType {
    #[default]
    Google,
    /// A locally running Pot instance.
    Pot,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub api_type: ApiType,
    /// Key for authenticated services. The Google web endpoint works without
    /// one.
    #[serde(default)]
    pub api_key: String,
    /// `"auto"` or an ISO language code.
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    #[serde(default = "default_hotkey")]
    pub hotkey: Option<String>,
    #[serde(default = "default_quit_hotkey")]
    pub quit_hotkey: Option<String>,
    /// Skip the translation round-trip when the captured text is plain
    /// ASCII. A coarse "already in the target language" guess; disable it
    /// when translating between Latin-script languages.
    #[serde(default = "default_skip_ascii")]
    pub skip_ascii_source: bool,
    /// Minimum interval between accepted triggers.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Base URL of the Pot HTTP API when `api_type` is `pot`.
    #[serde(default = "default_pot_url")]
    pub pot_url: String,
    /// When enabled the logger is initialised at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Append the log to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_source_lang() -> String {
    "auto".into()
}

fn default_target_lang() -> String {
    "en".into()
}

fn default_hotkey() -> Option<String> {
    Some("Shift+F11".into())
}

fn default_quit_hotkey() -> Option<String> {
    Some("Shift+F12".into())
}

fn default_skip_ascii() -> bool {
    true
}

fn default_cooldown_ms() -> u64 {
    1000
}

fn default_request_timeout_secs() -> u64 {
    5
}

fn default_pot_url() -> String {
    "http://localhost:8080".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_type: ApiType::Google,
            api_key: String::new(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            hotkey: default_hotkey(),
            quit_hotkey: default_quit_hotkey(),
            skip_ascii_source: default_skip_ascii(),
            cooldown_ms: default_cooldown_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            pot_url: default_pot_url(),
            debug_logging: false,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the configuration, or write a template on first launch. `None`
    /// means the template was just created and the pipeline should stay
    /// disabled until the user has reviewed it.
    pub fn load_or_create(path: &str) -> anyhow::Result<Option<Self>> {
        if !std::path::Path::new(path).exists() {
            Self::default().save(path)?;
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&std::fs::read_to_string(path)?)?))
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn translate_hotkey(&self) -> Hotkey {
        if let Some(hotkey) = &self.hotkey {
            match parse_hotkey(hotkey) {
                Some(k) => return k,
                None => {
                    tracing::warn!(
                        "provided hotkey string '{}' is invalid; using default Shift+F11",
                        hotkey
                    );
                }
            }
        }
        Hotkey {
            vk: 0x7A, // VK_F11
            ctrl: false,
            shift: true,
            alt: false,
            win: false,
        }
    }

    pub fn quit_hotkey(&self) -> Option<Hotkey> {
        if let Some(hotkey) = &self.quit_hotkey {
            match parse_hotkey(hotkey) {
                Some(k) => return Some(k),
                None => {
                    tracing::warn!(
                        "provided quit_hotkey string '{}' is invalid; ignoring",
                        hotkey
                    );
                }
            }
        }
        None
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
