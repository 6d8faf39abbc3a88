//! Client configuration
//!
//! Lookup order:
//! 1. `<script id="pdf-chat-config" type="application/toml">` in the host page
//! 2. Falls back to the embedded defaults
//!
//! Every field has a default, so the host page only lists what it changes.

use serde::Deserialize;

/// Id of the host page element carrying a TOML override
pub const CONFIG_ELEMENT_ID: &str = "pdf-chat-config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub polling: PollingConfig,
    pub attachments: AttachmentConfig,
    pub toast: ToastConfig,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
    pub commands: Vec<CommandPreset>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for endpoint paths; empty means same origin
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PollingConfig {
    pub max_attempts: u32,
    pub interval_ms: u32,
    /// Pause after a failed status request
    pub retry_pause_ms: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct AttachmentConfig {
    pub max_image_bytes: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ToastConfig {
    pub duration_ms: u32,
    pub fade_ms: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Below this viewport width the document list collapses after a selection
    pub narrow_breakpoint_px: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

/// Preset prompt shown as a shortcut button
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CommandPreset {
    pub label: String,
    pub text: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            polling: PollingConfig::default(),
            attachments: AttachmentConfig::default(),
            toast: ToastConfig::default(),
            layout: LayoutConfig::default(),
            logging: LoggingConfig::default(),
            commands: default_commands(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval_ms: 2000,
            retry_pause_ms: 1000,
        }
    }
}

impl Default for AttachmentConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: 5 * 1024 * 1024,
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: 3000,
            fade_ms: 300,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: 768.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

fn default_commands() -> Vec<CommandPreset> {
    [
        ("Summary", "Summarize this document"),
        ("Quiz", "Create a quiz about this document"),
        ("Key concepts", "Extract the key concepts of this document"),
    ]
    .into_iter()
    .map(|(label, text)| CommandPreset {
        label: label.to_string(),
        text: text.to_string(),
    })
    .collect()
}

impl LoggingConfig {
    /// Unknown names fall back to `Info`
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Info)
    }
}

pub fn parse_config(source: &str) -> Result<ClientConfig, toml::de::Error> {
    toml::from_str(source)
}

/// Load configuration from the host page, falling back to the defaults
pub fn load_config() -> ClientConfig {
    let Some(source) = host_page_config() else {
        return ClientConfig::default();
    };

    match parse_config(&source) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
            ClientConfig::default()
        }
    }
}

fn host_page_config() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content()
}
