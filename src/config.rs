//! Page Configuration
//!
//! Which element groups to bind and how each one talks to the endpoint.
//! Pages may override the defaults with a JSON blob in
//! `<script type="application/json" id="pepper-ui-config">`.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_ELEMENT_ID: &str = "pepper-ui-config";
pub const DEFAULT_ENDPOINT: &str = "/pepper/send_command";
pub const NOTIFICATION_DELAY_MS: u32 = 1500;
/// Delay used by the first version of the console
#[cfg(test)]
pub const LEGACY_NOTIFICATION_DELAY_MS: u32 = 3000;

/// Shape of the JSON body sent for a group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadShape {
    /// `{"item_id": "<raw>"}`
    #[default]
    Item,
    /// `{"session_id": n, "item_type": "..", "item_id": n}`
    Session,
}

/// How the DOM id of the element to activate is derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveIdRule {
    /// `data-itemid` as is
    #[default]
    ItemId,
    /// `data-type` + `data-sessionid` + `data-itemid`
    Composite,
}

/// One collection of interactive elements sharing a handler
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupConfig {
    pub class_name: String,
    #[serde(default)]
    pub payload: PayloadShape,
    #[serde(default)]
    pub active_id: ActiveIdRule,
    /// Play `<audio id="audio-<itemid>">` on success
    #[serde(default)]
    pub audio: bool,
    #[serde(default = "default_delay")]
    pub notification_delay_ms: u32,
}

fn default_delay() -> u32 {
    NOTIFICATION_DELAY_MS
}

impl GroupConfig {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            payload: PayloadShape::Item,
            active_id: ActiveIdRule::ItemId,
            audio: false,
            notification_delay_ms: NOTIFICATION_DELAY_MS,
        }
    }

    pub fn session(class_name: impl Into<String>) -> Self {
        Self {
            payload: PayloadShape::Session,
            active_id: ActiveIdRule::Composite,
            ..Self::new(class_name)
        }
    }

    pub fn with_audio(mut self) -> Self {
        self.audio = true;
        self
    }

    #[cfg(test)]
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.notification_delay_ms = delay_ms;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub endpoint: String,
    pub notifications_id: String,
    pub session_select_id: String,
    pub sessions_path: String,
    pub audio_prefix: String,
    /// Also show network/decode failures to the user, not just the log
    pub notify_transport_errors: bool,
    pub log_level: String,
    pub groups: Vec<GroupConfig>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            notifications_id: "notifications".to_string(),
            session_select_id: "sessionList".to_string(),
            sessions_path: "/sessions/".to_string(),
            audio_prefix: "audio-".to_string(),
            notify_transport_errors: false,
            log_level: "debug".to_string(),
            groups: vec![
                GroupConfig::new("say-move-item").with_audio(),
                GroupConfig::new("move-item"),
                GroupConfig::session("question-item"),
                GroupConfig::session("answer-item"),
            ],
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON override; absent fields keep their defaults
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: UiConfig = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint is empty".to_string()));
        }
        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.class_name.trim().is_empty() {
                return Err(ConfigError::Invalid("group without class_name".to_string()));
            }
            if group.notification_delay_ms == 0 {
                return Err(ConfigError::Invalid(format!(
                    "group {} has a zero notification delay",
                    group.class_name
                )));
            }
            if !seen.insert(group.class_name.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate group {}", group.class_name)));
            }
        }
        Ok(())
    }

    /// Config from the page's JSON blob, falling back to defaults when it
    /// is absent or unusable
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => {
                log::info!("[CONFIG] loaded {} groups from page", config.groups.len());
                config
            }
            Err(err) => {
                log::warn!("[CONFIG] {}, using defaults", err);
                Self::default()
            }
        }
    }

    #[cfg(test)]
    pub fn group(&self, class_name: &str) -> Option<&GroupConfig> {
        self.groups.iter().find(|g| g.class_name == class_name)
    }
}
