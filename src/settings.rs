//! Page settings
//!
//! UI tunables only. Read once at startup from an optional inline JSON block;
//! nothing is ever written back.

use serde::{Deserialize, Serialize};

/// Typing animation timing (milliseconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingSettings {
    /// Commands cycled in the hero terminal
    pub commands: Vec<String>,
    /// Delay after typing one character
    pub type_ms: u32,
    /// Delay after deleting one character
    pub delete_ms: u32,
    /// Hold with the full command shown
    pub hold_ms: u32,
    /// Pause before typing the next command
    pub next_ms: u32,
}

impl Default for TypingSettings {
    fn default() -> Self {
        Self {
            commands: ["whoami", "cat about.txt", "ls projects/", "npm start", "git status"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
            next_ms: 500,
        }
    }
}

/// Page settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Contact form ===
    /// How long the submit confirmation stays up
    pub success_message_ms: u32,
    /// Confirmation text
    pub success_message: String,

    // === Navigation ===
    /// Header gets the "scrolled" class past this scrollY
    pub header_scroll_threshold: f64,
    /// Offset added to scrollY when picking the active section
    pub active_section_offset: f64,

    // === Skills ===
    /// Visible fraction of a skill bar that triggers its reveal
    pub reveal_threshold: f64,

    // === Hero ===
    pub typing: TypingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            success_message_ms: 5000,
            success_message: "Thank you! Your message has been sent successfully.".to_string(),

            header_scroll_threshold: 100.0,
            active_section_offset: 150.0,

            reveal_threshold: 0.3,

            typing: TypingSettings::default(),
        }
    }
}

impl Settings {
    /// Element id of the optional inline settings block
    pub const ELEMENT_ID: &'static str = "folio-settings";

    /// Parse settings JSON; unknown keys are ignored, missing keys keep defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from the page's inline JSON block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded page settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed page settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native: always the defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
