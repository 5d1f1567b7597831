use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    application::usecases::{
        entity_validator::validate_entity,
        errors::{UseCaseError, UseCaseResult},
    },
    domain::{
        repositories::customers::CustomerRepository,
        value_objects::{customers::CreateCustomerModel, document_id::DocumentId},
    },
};

pub struct CustomerUseCase<T>
where
    T: CustomerRepository + Send + Sync,
{
    customer_repository: Arc<T>,
}

impl<T> CustomerUseCase<T>
where
    T: CustomerRepository + Send + Sync,
{
    pub fn new(customer_repository: Arc<T>) -> Self {
        Self {
            customer_repository,
        }
    }

    pub async fn create_customer(
        &self,
        create_customer_model: CreateCustomerModel,
    ) -> UseCaseResult<DocumentId> {
        if let Err(err) = validate_entity(&create_customer_model) {
            warn!(field = %err.field, constraint = %err.constraint, "customers: rejected candidate");
            return Err(err.into());
        }

        let customer_id = self
            .customer_repository
            .insert(create_customer_model.to_entity())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "customers: failed to insert customer");
                UseCaseError::from_store(err)
            })?;

        info!(%customer_id, "customers: customer created");
        Ok(customer_id)
    }
}
