use fes_core::region::ListingKind;

/// Failure talking to, or reading from, the listing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store was unreachable or rejected the query.
    #[error("Listing store unavailable: {0}")]
    Connectivity(#[source] sqlx::Error),

    /// A row did not have the column layout expected for its listing kind.
    #[error("Malformed {kind} row: {source}")]
    Decode {
        kind: ListingKind,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    /// Sort a sqlx error into connectivity vs. row-shape failures.
    pub fn classify(kind: ListingKind, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => StoreError::Decode { kind, source: err },
            other => StoreError::Connectivity(other),
        }
    }
}
