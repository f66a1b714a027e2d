//! Provenance sidecars for CLI outputs.
//!
//! Every CSV written by a subcommand gets `<stem>.provenance.json` next to it,
//! recording the code revision, the command and its parameters, and the row
//! counts of the tables read and written.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A table read or written by a command.
#[derive(Debug, Clone, Serialize)]
pub struct TableRef {
    pub path: String,
    pub rows: usize,
}

#[derive(Debug, Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// What a command ran with; completed into a sidecar by `write_sidecar`.
#[derive(Debug)]
pub struct Payload {
    command: &'static str,
    params: Value,
    tag: Option<String>,
    inputs: Vec<TableRef>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            tag: None,
            inputs: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_input(mut self, path: impl Into<String>, rows: usize) -> Self {
        self.inputs.push(TableRef {
            path: path.into(),
            rows,
        });
        self
    }
}

#[derive(Debug, Serialize)]
struct Sidecar {
    code_rev: String,
    graphnum_version: &'static str,
    callsite: Callsite,
    command: &'static str,
    tag: Option<String>,
    params: Value,
    inputs: Vec<TableRef>,
    outputs: Vec<TableRef>,
}

/// Write the sidecar for `artifact` (a table of `rows` rows) and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, rows: usize, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let callsite = Location::caller();
    let sidecar = Sidecar {
        code_rev: code_rev(),
        graphnum_version: graphnum::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        command: payload.command,
        tag: payload.tag,
        params: payload.params,
        inputs: payload.inputs,
        outputs: vec![TableRef {
            path: artifact.to_string_lossy().into_owned(),
            rows,
        }],
    };
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), command = sidecar.command, "provenance sidecar written");
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "table".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Git revision: `GIT_COMMIT` at build or run time, else `git rev-parse HEAD`.
pub fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_owned())
        .unwrap_or_else(|| "unknown".to_owned())
}
