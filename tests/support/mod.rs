use anyhow::{Context, Result, anyhow};
use coder_schema::find_repo_root;
use jsonschema::JSONSchema;
use serde_json::{Value, json};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn repo_root() -> PathBuf {
    find_repo_root().expect("tests require repository root")
}

/// Compile the published record schema under `schema/`.
pub fn record_schema() -> Result<JSONSchema> {
    let path = repo_root().join("schema").join("agentic-coder.schema.json");
    let schema: Value = serde_json::from_reader(
        File::open(&path).with_context(|| format!("opening schema {}", path.display()))?,
    )
    .with_context(|| format!("parsing schema {}", path.display()))?;
    JSONSchema::compile(&schema).map_err(|err| anyhow!("compiling {}: {err}", path.display()))
}

/// A record that passes every check.
pub fn valid_record() -> Value {
    let capability = json!({"supported": true, "details": "Available"});
    json!({
        "name": "Fixture Coder",
        "vendor": "Fixture Labs",
        "website": "https://fixture.example",
        "description": "Agentic coder used by the integration suite",
        "capabilities": {
            "slash_commands": {"supported": true, "details": "Custom commands", "customizable": true},
            "multi_file_editing": capability,
            "codebase_understanding": capability,
            "git_integration": capability,
            "terminal_access": capability,
            "web_search": {"supported": false, "details": "Not available"},
            "mcp_servers": capability,
            "parallel_agents": capability,
            "hooks": {"supported": true, "details": "Lifecycle hooks", "docs_url": "https://fixture.example/hooks"}
        },
        "pricing": {"model": "hybrid", "details": "Seat plus usage"},
        "last_updated": "2025-04-10",
        "docs_url": "https://fixture.example/docs"
    })
}

pub fn write_record(dir: &Path, name: &str, value: &Value) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Run the validator binary against `data_dir` with extra arguments.
pub fn run_validator(data_dir: &Path, extra_args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_validate-schemas"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(extra_args)
        .output()
        .context("failed to run validate-schemas")
}
