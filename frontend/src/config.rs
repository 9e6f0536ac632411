use serde::Deserialize;
use web_sys::Document;

use crate::error::ControllerError;

/// Id of the optional `<script type="application/json">` block that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Tunables for the landing page controller.
///
/// Every field has a default, so a config block only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub toast_duration_ms: u32,
    /// How long the signup submit button stays in its "processing" state.
    pub processing_delay_ms: u32,
    /// Delay before the follow-up modal when a signup form has no submit button.
    pub fallback_delay_ms: u32,
    pub signin_close_delay_ms: u32,
    pub scroll_threshold_px: f64,
    pub min_password_len: usize,
    pub languages: Vec<String>,
    pub language_icon_src: String,
    pub language_button_selector: String,
    pub messages: Messages,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3_000,
            processing_delay_ms: 900,
            fallback_delay_ms: 600,
            signin_close_delay_ms: 600,
            scroll_threshold_px: 50.0,
            min_password_len: 4,
            languages: ["English", "हिन्दी", "বাংলা", "தமிழ்", "తెలుగు", "मराठी"]
                .iter()
                .map(|l| l.to_string())
                .collect(),
            language_icon_src: "image/down-icon.png".to_string(),
            // The second class keeps older markup with the misspelled marker working.
            language_button_selector: ".language-btn, .langauage-btn".to_string(),
            messages: Messages::default(),
        }
    }
}

/// User-facing strings shown in toasts and buttons.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub email_required: String,
    pub email_invalid: String,
    pub signup_processing: String,
    pub processing_label: String,
    pub signup_complete: String,
    pub signin_email_invalid: String,
    /// `{min}` is replaced with the minimum password length.
    pub signin_password_short: String,
    pub signin_success: String,
    /// `{language}` is replaced with the selected language label.
    pub language_selected: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            email_required: "Please enter your email address.".to_string(),
            email_invalid: "Please enter a valid email address.".to_string(),
            signup_processing: "Great! Taking you to the next step…".to_string(),
            processing_label: "Processing...".to_string(),
            signup_complete: "Account setup complete (demo).".to_string(),
            signin_email_invalid: "Valid email required.".to_string(),
            signin_password_short: "Please enter a valid password (min {min} chars).".to_string(),
            signin_success: "Signed in (demo).".to_string(),
            language_selected: "Language set to {language} (demo)".to_string(),
        }
    }
}

impl Messages {
    pub fn password_too_short(&self, min: usize) -> String {
        self.signin_password_short.replace("{min}", &min.to_string())
    }

    pub fn language_set(&self, language: &str) -> String {
        self.language_selected.replace("{language}", language)
    }
}

impl LandingConfig {
    pub fn from_json(raw: &str) -> Result<Self, ControllerError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the config block embedded in the page, falling back to defaults when absent.
    pub fn from_document(document: &Document) -> Result<Self, ControllerError> {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
            .unwrap_or_default();

        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json(&raw)
    }
}
