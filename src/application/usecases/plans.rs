use std::sync::Arc;

use tracing::{error, info};

use crate::{
    application::usecases::{
        entity_validator::validate_entity,
        errors::{UseCaseError, UseCaseResult},
    },
    domain::{
        repositories::plans::PlanRepository,
        value_objects::plans::{PlanDto, PlanTemplate, default_plan_catalog},
    },
};

pub struct PlanUseCase<T>
where
    T: PlanRepository + Send + Sync,
{
    plan_repository: Arc<T>,
    catalog: Vec<PlanTemplate>,
}

impl<T> PlanUseCase<T>
where
    T: PlanRepository + Send + Sync,
{
    pub fn new(plan_repository: Arc<T>) -> Self {
        Self::with_catalog(plan_repository, default_plan_catalog())
    }

    pub fn with_catalog(plan_repository: Arc<T>, catalog: Vec<PlanTemplate>) -> Self {
        Self {
            plan_repository,
            catalog,
        }
    }

    /// Active plans in whatever order the store scan yields.
    pub async fn list_active_plans(&self) -> UseCaseResult<Vec<PlanDto>> {
        info!("plans: listing active plans");
        let plans = self
            .plan_repository
            .list_active_plans()
            .await
            .map_err(|err| {
                error!(db_error = ?err, "plans: failed to list active plans");
                UseCaseError::from_store(err)
            })?;

        let plans: Vec<PlanDto> = plans
            .into_iter()
            .filter(|plan| plan.is_active)
            .map(PlanDto::from)
            .collect();
        let plan_count = plans.len();
        info!(plan_count, "plans: active plans loaded");
        Ok(plans)
    }

    /// Inserts each catalog template whose tier is not stored yet; returns how many were added.
    pub async fn seed_default_plans(&self) -> UseCaseResult<usize> {
        let mut inserted = 0;

        for template in &self.catalog {
            validate_entity(template)?;

            let existing = self
                .plan_repository
                .find_by_tier(&template.tier)
                .await
                .map_err(|err| {
                    error!(tier = %template.tier, db_error = ?err, "plans: failed to look up tier");
                    UseCaseError::from_store(err)
                })?;

            if existing.is_some() {
                continue;
            }

            let plan_id = self
                .plan_repository
                .insert(template.to_entity())
                .await
                .map_err(|err| {
                    error!(tier = %template.tier, db_error = ?err, "plans: failed to insert plan");
                    UseCaseError::from_store(err)
                })?;

            info!(tier = %template.tier, %plan_id, "plans: seeded plan");
            inserted += 1;
        }

        info!(inserted, "plans: seed finished");
        Ok(inserted)
    }
}
