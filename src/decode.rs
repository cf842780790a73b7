//! Entity-aware JSON decoding.
//!
//! Thin wrappers over `serde_json` that tag failures with the entity kind,
//! so a bad payload surfaces as `decoding game: missing field ...` instead
//! of a bare serde error.

use serde_json::Value;
use tracing::debug;

use crate::entity::Entity;
use crate::error::DecodeError;

/// Decodes an entity from a JSON string.
pub fn from_json_str<E: Entity>(payload: &str) -> Result<E, DecodeError> {
    serde_json::from_str(payload).map_err(fail::<E>)
}

/// Decodes an entity from raw JSON bytes.
pub fn from_json_slice<E: Entity>(payload: &[u8]) -> Result<E, DecodeError> {
    serde_json::from_slice(payload).map_err(fail::<E>)
}

/// Decodes an entity from an already-parsed JSON value.
pub fn from_json_value<E: Entity>(payload: Value) -> Result<E, DecodeError> {
    serde_json::from_value(payload).map_err(fail::<E>)
}

fn fail<E: Entity>(source: serde_json::Error) -> DecodeError {
    debug!(entity = E::KIND, error = %source, "failed to decode payload");
    DecodeError {
        entity: E::KIND,
        source,
    }
}
