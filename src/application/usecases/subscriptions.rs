use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::{
    application::usecases::{
        entity_validator::validate_entity,
        errors::{CUSTOMER_OR_PLAN_NOT_FOUND, UseCaseError, UseCaseResult},
        reference_resolver::{ResolveError, resolve},
    },
    domain::{
        entities::subscriptions::InsertSubscriptionEntity,
        repositories::{
            customers::CustomerRepository, plans::PlanRepository,
            subscriptions::SubscriptionRepository,
        },
        value_objects::{
            collections::Collection,
            document_id::DocumentId,
            enums::subscription_statuses::SubscriptionStatus,
            subscriptions::{
                CreateSubscriptionModel, ListSubscriptionsFilter, SubscriptionModel,
                SubscriptionPeriod,
            },
        },
    },
};

pub struct SubscriptionUseCase<C, P, S>
where
    C: CustomerRepository + Send + Sync,
    P: PlanRepository + Send + Sync,
    S: SubscriptionRepository + Send + Sync,
{
    customer_repository: Arc<C>,
    plan_repository: Arc<P>,
    subscription_repository: Arc<S>,
}

impl<C, P, S> SubscriptionUseCase<C, P, S>
where
    C: CustomerRepository + Send + Sync,
    P: PlanRepository + Send + Sync,
    S: SubscriptionRepository + Send + Sync,
{
    pub fn new(
        customer_repository: Arc<C>,
        plan_repository: Arc<P>,
        subscription_repository: Arc<S>,
    ) -> Self {
        Self {
            customer_repository,
            plan_repository,
            subscription_repository,
        }
    }

    /// Enrolls a customer into a plan. Both references must resolve; the
    /// failure does not say which one did not.
    pub async fn create_subscription(
        &self,
        create_subscription_model: CreateSubscriptionModel,
    ) -> UseCaseResult<SubscriptionModel> {
        validate_entity(&create_subscription_model)?;

        let CreateSubscriptionModel {
            customer_id,
            plan_id,
        } = create_subscription_model;

        let customer = resolve(Collection::Customer, &customer_id, |id| {
            self.customer_repository.find_by_id(id)
        })
        .await;
        let plan = resolve(Collection::Plan, &plan_id, |id| {
            self.plan_repository.find_by_id(id)
        })
        .await;

        let (customer, plan) = match (customer, plan) {
            (Ok(customer), Ok(plan)) => (customer, plan),
            (Err(ResolveError::Store(err)), _) | (_, Err(ResolveError::Store(err))) => {
                error!(db_error = ?err, "subscriptions: failed to resolve references");
                return Err(UseCaseError::from_store(err));
            }
            _ => {
                warn!(
                    customer_id = %customer_id,
                    plan_id = %plan_id,
                    "subscriptions: customer or plan not found"
                );
                return Err(UseCaseError::Reference(CUSTOMER_OR_PLAN_NOT_FOUND));
            }
        };

        let period = SubscriptionPeriod::starting_at(Utc::now());
        let status = SubscriptionStatus::Active;

        let stored = self
            .subscription_repository
            .insert(InsertSubscriptionEntity {
                customer_id: customer.id,
                plan_id: plan.id,
                status: status.to_string(),
                starts_at: period.starts_at,
                renews_at: period.renews_at,
            })
            .await
            .map_err(|err| {
                error!(
                    customer_id = %customer.id,
                    plan_id = %plan.id,
                    db_error = ?err,
                    "subscriptions: failed to insert subscription"
                );
                UseCaseError::from_store(err)
            })?;

        info!(
            subscription_id = %stored.id,
            customer_id = %customer.id,
            plan_tier = %plan.tier,
            renews_at = %stored.renews_at,
            "subscriptions: subscription created"
        );

        SubscriptionModel::try_from(stored).map_err(UseCaseError::Internal)
    }

    /// All subscriptions, or those of one customer. An unparseable filter matches nothing.
    pub async fn list_subscriptions(
        &self,
        filter: ListSubscriptionsFilter,
    ) -> UseCaseResult<Vec<SubscriptionModel>> {
        let customer_id = match filter.customer_id.as_deref().filter(|v| !v.is_empty()) {
            None => None,
            Some(raw) => match DocumentId::parse(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    info!(customer_id = %raw, "subscriptions: filter matches no stored id");
                    return Ok(Vec::new());
                }
            },
        };

        let subscriptions = self
            .subscription_repository
            .list(customer_id)
            .await
            .map_err(|err| {
                error!(db_error = ?err, "subscriptions: failed to list subscriptions");
                UseCaseError::from_store(err)
            })?;

        subscriptions
            .into_iter()
            .map(|entity| SubscriptionModel::try_from(entity).map_err(UseCaseError::Internal))
            .collect()
    }
}
