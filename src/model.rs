//! Deserializable representation of a validated agentic coder record.
//!
//! The types mirror the record schema so consumers can work with typed data
//! once `validate_record` has accepted a document. Unknown keys are rejected
//! at every level, matching the validator's closed schema.

use crate::capability::CapabilityName;
use crate::record::validate_record;
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// One product entry as stored under `data/agentic-coders/`.
pub struct Record {
    pub name: String,
    pub vendor: String,
    pub website: String,
    pub description: String,
    pub capabilities: Capabilities,
    pub pricing: Pricing,
    pub last_updated: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// The fixed capability map; every entry is required.
pub struct Capabilities {
    pub slash_commands: SlashCommands,
    pub multi_file_editing: CapabilityEntry,
    pub codebase_understanding: CapabilityEntry,
    pub git_integration: CapabilityEntry,
    pub terminal_access: CapabilityEntry,
    pub web_search: CapabilityEntry,
    pub mcp_servers: CapabilityEntry,
    pub parallel_agents: CapabilityEntry,
    pub hooks: CapabilityEntry,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapabilityEntry {
    pub supported: bool,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// `slash_commands` is the only capability that may declare `customizable`.
pub struct SlashCommands {
    pub supported: bool,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customizable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pricing {
    pub model: PricingModel,
    pub details: String,
}

/// How a product is billed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PricingModel {
    Subscription,
    UsageBased,
    Free,
    Hybrid,
}

impl PricingModel {
    pub const ALL: [PricingModel; 4] = [
        PricingModel::Subscription,
        PricingModel::UsageBased,
        PricingModel::Free,
        PricingModel::Hybrid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PricingModel::Subscription => "subscription",
            PricingModel::UsageBased => "usage-based",
            PricingModel::Free => "free",
            PricingModel::Hybrid => "hybrid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|model| model.as_str() == value)
    }

    /// Comma-separated list of every accepted value, for error messages.
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(|model| model.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Serialize for PricingModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PricingModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "unknown pricing model '{value}' (expected one of: {})",
                Self::allowed_list()
            ))
        })
    }
}

impl Capabilities {
    /// Whether the named capability is marked as supported.
    pub fn is_supported(&self, name: CapabilityName) -> bool {
        match name {
            CapabilityName::SlashCommands => self.slash_commands.supported,
            CapabilityName::MultiFileEditing => self.multi_file_editing.supported,
            CapabilityName::CodebaseUnderstanding => self.codebase_understanding.supported,
            CapabilityName::GitIntegration => self.git_integration.supported,
            CapabilityName::TerminalAccess => self.terminal_access.supported,
            CapabilityName::WebSearch => self.web_search.supported,
            CapabilityName::McpServers => self.mcp_servers.supported,
            CapabilityName::ParallelAgents => self.parallel_agents.supported,
            CapabilityName::Hooks => self.hooks.supported,
        }
    }

    /// Supported capabilities in canonical order.
    pub fn supported(&self) -> Vec<CapabilityName> {
        CapabilityName::ALL
            .into_iter()
            .filter(|name| self.is_supported(*name))
            .collect()
    }
}

impl Record {
    /// Convert a JSON document into a typed record.
    ///
    /// Runs the full validator first so callers get the same messages the
    /// directory report would show, rather than serde's first-error-only view.
    pub fn from_value(value: Value) -> Result<Self> {
        let errors = validate_record(&value);
        if !errors.is_empty() {
            bail!("record failed validation:\n  {}", errors.join("\n  "));
        }
        serde_json::from_value(value).context("converting validated record")
    }
}

/// Read, validate, and convert a single record file.
pub fn load_record(path: &Path) -> Result<Record> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Record::from_value(value).with_context(|| format!("loading record {}", path.display()))
}
