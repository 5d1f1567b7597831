use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    application::usecases::{
        entity_validator::validate_booking,
        errors::{SUBSCRIPTION_NOT_FOUND, UseCaseError, UseCaseResult},
        reference_resolver::{ResolveError, resolve},
    },
    domain::{
        entities::bookings::InsertBookingEntity,
        repositories::{bookings::BookingRepository, subscriptions::SubscriptionRepository},
        value_objects::{
            bookings::{BookingModel, CreateBookingModel},
            collections::Collection,
            enums::booking_statuses::BookingStatus,
        },
    },
};

pub struct BookingUseCase<S, B>
where
    S: SubscriptionRepository + Send + Sync,
    B: BookingRepository + Send + Sync,
{
    subscription_repository: Arc<S>,
    booking_repository: Arc<B>,
}

impl<S, B> BookingUseCase<S, B>
where
    S: SubscriptionRepository + Send + Sync,
    B: BookingRepository + Send + Sync,
{
    pub fn new(subscription_repository: Arc<S>, booking_repository: Arc<B>) -> Self {
        Self {
            subscription_repository,
            booking_repository,
        }
    }

    /// Admits a booking under an existing subscription. The subscription's
    /// status and the schedule's position in time are not checked.
    pub async fn create_booking(
        &self,
        create_booking_model: CreateBookingModel,
    ) -> UseCaseResult<BookingModel> {
        let scheduled_date = match validate_booking(&create_booking_model) {
            Ok(scheduled_date) => scheduled_date,
            Err(err) => {
                warn!(field = %err.field, constraint = %err.constraint, "bookings: rejected candidate");
                return Err(err.into());
            }
        };

        let subscription = resolve(
            Collection::Subscription,
            &create_booking_model.subscription_id,
            |id| self.subscription_repository.find_by_id(id),
        )
        .await
        .map_err(|err| match err {
            ResolveError::NotFound { .. } => {
                warn!(
                    subscription_id = %create_booking_model.subscription_id,
                    "bookings: subscription not found"
                );
                UseCaseError::Reference(SUBSCRIPTION_NOT_FOUND)
            }
            ResolveError::Store(err) => {
                error!(db_error = ?err, "bookings: failed to resolve subscription");
                UseCaseError::from_store(err)
            }
        })?;

        let CreateBookingModel {
            service_type,
            location,
            notes,
            ..
        } = create_booking_model;
        let status = BookingStatus::Scheduled;

        let entity = InsertBookingEntity {
            subscription_id: subscription.id,
            service_type,
            scheduled_date,
            location,
            notes,
            status: status.to_string(),
        };

        let stored = self
            .booking_repository
            .insert(entity)
            .await
            .map_err(|err| {
                error!(
                    subscription_id = %subscription.id,
                    db_error = ?err,
                    "bookings: failed to insert booking"
                );
                UseCaseError::from_store(err)
            })?;

        info!(
            booking_id = %stored.id,
            subscription_id = %subscription.id,
            subscription_status = %subscription.status,
            %scheduled_date,
            "bookings: booking scheduled"
        );

        BookingModel::try_from(stored).map_err(UseCaseError::Internal)
    }
}
