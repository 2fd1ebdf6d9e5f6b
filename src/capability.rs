//! The nine fixed capabilities every record must describe.
//!
//! `CapabilityName` is the single source for the capability set and for the
//! per-capability allowed-key lookup; `validate_capability` checks one
//! capability value against it.

use crate::formats::is_valid_url;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

const BASE_KEYS: &[&str] = &["supported", "details", "docs_url"];
const SLASH_COMMAND_KEYS: &[&str] = &["supported", "details", "customizable", "docs_url"];

/// Identifier for one of the fixed capability entries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CapabilityName {
    SlashCommands,
    MultiFileEditing,
    CodebaseUnderstanding,
    GitIntegration,
    TerminalAccess,
    WebSearch,
    McpServers,
    ParallelAgents,
    Hooks,
}

impl CapabilityName {
    /// Every required capability, in the order records are checked.
    pub const ALL: [CapabilityName; 9] = [
        CapabilityName::SlashCommands,
        CapabilityName::MultiFileEditing,
        CapabilityName::CodebaseUnderstanding,
        CapabilityName::GitIntegration,
        CapabilityName::TerminalAccess,
        CapabilityName::WebSearch,
        CapabilityName::McpServers,
        CapabilityName::ParallelAgents,
        CapabilityName::Hooks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CapabilityName::SlashCommands => "slash_commands",
            CapabilityName::MultiFileEditing => "multi_file_editing",
            CapabilityName::CodebaseUnderstanding => "codebase_understanding",
            CapabilityName::GitIntegration => "git_integration",
            CapabilityName::TerminalAccess => "terminal_access",
            CapabilityName::WebSearch => "web_search",
            CapabilityName::McpServers => "mcp_servers",
            CapabilityName::ParallelAgents => "parallel_agents",
            CapabilityName::Hooks => "hooks",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.as_str() == value)
    }

    /// Keys a capability object of this name may carry.
    pub fn allowed_keys(self) -> &'static [&'static str] {
        match self {
            CapabilityName::SlashCommands => SLASH_COMMAND_KEYS,
            _ => BASE_KEYS,
        }
    }

    fn accepts_customizable(self) -> bool {
        self.allowed_keys().contains(&"customizable")
    }
}

impl fmt::Display for CapabilityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CapabilityName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Check one capability value, returning every violation found.
///
/// A non-object value short-circuits with a single message since none of the
/// field checks apply to it. Otherwise all checks run and their messages are
/// prefixed with the capability name.
pub fn validate_capability(value: &Value, name: CapabilityName) -> Vec<String> {
    let mut errors = Vec::new();
    let Some(fields) = value.as_object() else {
        errors.push(format!("{name} must be an object"));
        return errors;
    };

    if !fields.get("supported").is_some_and(Value::is_boolean) {
        errors.push(format!("{name}.supported must be a boolean"));
    }

    if !is_non_empty_string(fields.get("details")) {
        errors.push(format!("{name}.details must be a non-empty string"));
    }

    if name.accepts_customizable() {
        if let Some(customizable) = fields.get("customizable") {
            if !customizable.is_boolean() {
                errors.push(format!("{name}.customizable must be a boolean"));
            }
        }
    }

    if let Some(docs_url) = fields.get("docs_url") {
        if !docs_url.as_str().is_some_and(is_valid_url) {
            errors.push(format!("{name}.docs_url must be a valid HTTP/HTTPS URL"));
        }
    }

    let allowed = name.allowed_keys();
    for key in fields.keys() {
        if !allowed.contains(&key.as_str()) {
            errors.push(format!("{name} has unexpected property: {key}"));
        }
    }

    errors
}

pub(crate) fn is_non_empty_string(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|text| !text.is_empty())
}
