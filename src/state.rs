//! Model persistence. Models flatten to a JSON key-value bundle and come back unchanged.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::TaskloopError;

pub fn to_bundle<T: Serialize>(model: &T) -> Result<Value, TaskloopError> {
    Ok(serde_json::to_value(model)?)
}

pub fn from_bundle<T: DeserializeOwned>(bundle: Value) -> Result<T, TaskloopError> {
    Ok(serde_json::from_value(bundle)?)
}

/// Write `model` to `path`, replacing what was there.
pub fn save<T: Serialize>(path: &Path, model: &T) -> Result<(), TaskloopError> {
    let bundle = to_bundle(model)?;
    let body = serde_json::to_string_pretty(&bundle)?;
    fs::write(path, body)
        .map_err(|e| TaskloopError::config(format!("Cannot write {}: {e}", path.display())))?;
    debug!(path = %path.display(), "saved state");
    Ok(())
}

/// `None` when nothing was saved yet. A corrupt file is discarded rather than reported.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, TaskloopError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| TaskloopError::config(format!("Cannot read {}: {e}", path.display())))?;
    let restored = serde_json::from_str::<Value>(&raw)
        .map_err(TaskloopError::from)
        .and_then(from_bundle);
    match restored {
        Ok(model) => Ok(Some(model)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable saved state");
            Ok(None)
        }
    }
}
