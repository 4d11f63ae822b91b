use thiserror::Error;

/// Errors reported by an [`EntityStore`](super::EntityStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A replace or delete targeted a record that does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// The backend failed while reading.
    #[error("Store read failed: {0}")]
    Read(String),

    /// The backend rejected a write (constraint violation, lost connection).
    #[error("Store write failed: {0}")]
    Write(String),
}
