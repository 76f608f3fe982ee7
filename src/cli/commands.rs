//! Command implementations
//!
//! Each command returns the text to print on stdout. Errors are `AccessFormError` values
//! wrapped in `anyhow` so `run()` can report them and pick the exit code.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::replay::{GroupState, replay_group_session, replay_secret_session};
use crate::session::{GroupSession, SecretSession, load_session};
use accessform_config::Config;
use accessform_utils::error::AccessFormError;
use accessform_utils::logging::session_span;

/// Execute the `group` command
pub fn execute_group_command(session_path: &Path, state: bool, config: &Config) -> Result<String> {
    let span = session_span("group", &session_path.display().to_string());
    let _enter = span.enter();

    let session: GroupSession = load_session(session_path).map_err(AccessFormError::from)?;
    let editor = replay_group_session(session, config.selection.strict)?;

    if state {
        return emit_json(&GroupState::from(&editor), config.output.pretty);
    }

    let request = editor.submit().map_err(AccessFormError::from)?;
    info!(
        members = editor.member_ids().len(),
        collections = request.collections.len(),
        "group request built"
    );
    emit_json(&request, config.output.pretty)
}

/// Execute the `secret` command
pub fn execute_secret_command(session_path: &Path, config: &Config) -> Result<String> {
    let span = session_span("secret", &session_path.display().to_string());
    let _enter = span.enter();

    let session: SecretSession = load_session(session_path).map_err(AccessFormError::from)?;
    let submission = replay_secret_session(session)?;
    emit_json(&submission, config.output.pretty)
}

/// Execute the `config` command
pub fn execute_config_command(config: &Config) -> String {
    let mut output = String::from("Effective configuration:\n");
    for (key, (value, source)) in config.effective_config() {
        output.push_str(&format!("  {key} = {value} ({source})\n"));
    }
    output
}

fn emit_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    Ok(json.map_err(|e| AccessFormError::Io(std::io::Error::other(e)))?)
}
