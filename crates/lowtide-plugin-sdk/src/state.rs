use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ParameterStore;

#[derive(Debug, Serialize, Deserialize)]
struct StateBlob {
    parameters: BTreeMap<String, f32>,
}

/// Serializes the current parameter values into an opaque blob the host
/// stores alongside the session.
pub fn encode_state(store: &ParameterStore) -> Vec<u8> {
    let blob = StateBlob {
        parameters: store
            .entries()
            .map(|(def, value)| (def.id.as_str().to_owned(), value))
            .collect(),
    };
    serde_json::to_vec(&blob).unwrap_or_default()
}

/// Restores parameter values from a blob produced by [`encode_state`].
///
/// A malformed or truncated blob restores defaults instead of failing the
/// call; the plugin must still load. Identifiers the current layout does
/// not know are skipped, so state saved by a newer build degrades
/// gracefully.
pub fn decode_state(store: &ParameterStore, blob: &[u8]) {
    match serde_json::from_slice::<StateBlob>(blob) {
        Ok(state) => {
            store.reset_to_defaults();
            for (id, value) in &state.parameters {
                if store.set(id, *value).is_err() {
                    tracing::warn!(parameter = id.as_str(), "ignoring unknown parameter in saved state");
                }
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "saved state could not be parsed, restoring defaults");
            store.reset_to_defaults();
        }
    }
}
