use serde::de::DeserializeOwned;

/// Implemented by every record the platform serves.
///
/// `KIND` is the wire-style entity name (`"downloadKey"`, `"buildFile"`,
/// ...) used to tag decode errors and log events.
pub trait Entity: DeserializeOwned {
    const KIND: &'static str;
}
