//! Error Types
//!
//! Failures of a single command dispatch and of page configuration.

/// Why a click did not produce a rendered reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A dataset attribute the payload needs is absent
    MissingAttribute(&'static str),
    /// `data-sessionid` is not an integer
    InvalidSessionId(String),
    /// `data-itemid` is not an integer where one is required
    InvalidItemId(String),
    /// Network failure, the request never got a body back
    Transport(String),
    /// The body was not the expected JSON
    Decode(String),
}

impl DispatchError {
    /// Rejected before anything was sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DispatchError::MissingAttribute(_)
                | DispatchError::InvalidSessionId(_)
                | DispatchError::InvalidItemId(_)
        )
    }
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::MissingAttribute(name) => write!(f, "Missing attribute: {}", name),
            DispatchError::InvalidSessionId(raw) => write!(f, "Invalid session id: {:?}", raw),
            DispatchError::InvalidItemId(raw) => write!(f, "Invalid item id: {:?}", raw),
            DispatchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            DispatchError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for DispatchError {}

/// Problems with the page-supplied configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
