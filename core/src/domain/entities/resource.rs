//! Common shape of the id-addressed resume content records.

use serde::{de::DeserializeOwned, Serialize};

/// A content record that is listed, fetched, created, updated and deleted by id.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Singular name used in messages, e.g. "project"
    const LABEL: &'static str;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Secondary ordering key; lists are ordered by `(sort_order, id)`.
    fn sort_order(&self) -> i64 {
        0
    }
}
