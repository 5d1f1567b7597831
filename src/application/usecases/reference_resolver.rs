use std::future::Future;

use thiserror::Error;
use tracing::debug;

use crate::domain::value_objects::{collections::Collection, document_id::DocumentId};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{collection} {id} not found")]
    NotFound { collection: Collection, id: String },
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ResolveError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}

/// Confirms that `raw_id` names an existing document of `collection`.
///
/// A malformed identifier is reported as `NotFound` without touching the store.
/// `find` is the collection's point lookup.
pub async fn resolve<T, F, Fut>(
    collection: Collection,
    raw_id: &str,
    find: F,
) -> Result<T, ResolveError>
where
    F: FnOnce(DocumentId) -> Fut,
    Fut: Future<Output = anyhow::Result<Option<T>>>,
{
    let not_found = || ResolveError::NotFound {
        collection,
        id: raw_id.to_string(),
    };

    let id = match DocumentId::parse(raw_id) {
        Ok(id) => id,
        Err(err) => {
            debug!(%collection, error = %err, "reference_resolver: malformed id");
            return Err(not_found());
        }
    };

    match find(id).await? {
        Some(document) => Ok(document),
        None => {
            debug!(%collection, %id, "reference_resolver: no such document");
            Err(not_found())
        }
    }
}
