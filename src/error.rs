use thiserror::Error;

/// Returned when a platform payload cannot be decoded into an entity.
///
/// The underlying `serde_json` error names the offending field and its
/// position in the payload; `entity` says which record type was expected.
#[derive(Error, Debug)]
#[error("decoding {entity}: {source}")]
pub struct DecodeError {
    /// Wire name of the entity that failed to decode.
    pub entity: &'static str,
    #[source]
    pub source: serde_json::Error,
}
