//! Persisted domain records.

/// Data required to persist a new short link record.
///
/// `(host, path)` is unique in storage. Guessable records (where
/// `is_unguessable` is false) are additionally looked up by
/// `(host, query_params)` to satisfy the reuse policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDynamicLink {
    pub host: String,
    pub path: String,
    pub query_params: String,
    pub is_unguessable: bool,
}
