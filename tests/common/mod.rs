use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use axum::{Router, body::Body, http::Request};
use car_care_subscriptions::{
    config::{
        config_model::{Database, DotEnvyConfig, Server},
        stage::Stage,
    },
    domain::{
        entities::{
            bookings::{BookingEntity, InsertBookingEntity},
            customers::{CustomerEntity, InsertCustomerEntity},
            plans::{InsertPlanEntity, PlanEntity},
            subscriptions::{InsertSubscriptionEntity, SubscriptionEntity},
        },
        repositories::{
            bookings::BookingRepository, customers::CustomerRepository, plans::PlanRepository,
            store_probe::StoreProbeRepository, subscriptions::SubscriptionRepository,
        },
        value_objects::{document_id::DocumentId, store::StoreInfo},
    },
    infrastructure::axum_http::http_serve,
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

/// Process-local store backing every repository trait.
#[derive(Default)]
pub struct InMemoryStore {
    customers: Mutex<Vec<CustomerEntity>>,
    plans: Mutex<Vec<PlanEntity>>,
    subscriptions: Mutex<Vec<SubscriptionEntity>>,
    bookings: Mutex<Vec<BookingEntity>>,
}

impl InMemoryStore {
    pub fn bookings(&self) -> Vec<BookingEntity> {
        self.bookings.lock().unwrap().clone()
    }

    pub fn subscriptions(&self) -> Vec<SubscriptionEntity> {
        self.subscriptions.lock().unwrap().clone()
    }

    pub fn plans(&self) -> Vec<PlanEntity> {
        self.plans.lock().unwrap().clone()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn insert(&self, entity: InsertCustomerEntity) -> Result<DocumentId> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        self.customers.lock().unwrap().push(CustomerEntity {
            id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            city: entity.city,
            country: entity.country,
            car_make: entity.car_make,
            car_model: entity.car_model,
            car_year: entity.car_year,
            plate_number: entity.plate_number,
            created_at: now,
            updated_at: now,
        });
        Ok(id.into())
    }

    async fn find_by_id(&self, customer_id: DocumentId) -> Result<Option<CustomerEntity>> {
        Ok(self
            .customers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == customer_id.as_uuid())
            .cloned())
    }
}

#[async_trait]
impl PlanRepository for InMemoryStore {
    async fn find_by_id(&self, plan_id: DocumentId) -> Result<Option<PlanEntity>> {
        Ok(self
            .plans
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == plan_id.as_uuid())
            .cloned())
    }

    async fn find_by_tier(&self, tier: &str) -> Result<Option<PlanEntity>> {
        Ok(self
            .plans
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.tier == tier)
            .cloned())
    }

    async fn list_active_plans(&self) -> Result<Vec<PlanEntity>> {
        Ok(self
            .plans
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect())
    }

    async fn insert(&self, entity: InsertPlanEntity) -> Result<DocumentId> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        self.plans.lock().unwrap().push(PlanEntity {
            id,
            name: entity.name,
            tier: entity.tier,
            price_qr: entity.price_qr,
            description: entity.description,
            features: serde_json::from_value(entity.features)?,
            is_active: entity.is_active,
            created_at: now,
            updated_at: now,
        });
        Ok(id.into())
    }
}

#[async_trait]
impl SubscriptionRepository for InMemoryStore {
    async fn insert(&self, entity: InsertSubscriptionEntity) -> Result<SubscriptionEntity> {
        let stored = SubscriptionEntity {
            id: Uuid::new_v4(),
            customer_id: entity.customer_id,
            plan_id: entity.plan_id,
            status: entity.status,
            starts_at: entity.starts_at,
            renews_at: entity.renews_at,
            created_at: Utc::now(),
        };
        self.subscriptions.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, subscription_id: DocumentId) -> Result<Option<SubscriptionEntity>> {
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == subscription_id.as_uuid())
            .cloned())
    }

    async fn list(&self, customer_id: Option<DocumentId>) -> Result<Vec<SubscriptionEntity>> {
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| customer_id.is_none_or(|id| s.customer_id == id.as_uuid()))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn insert(&self, entity: InsertBookingEntity) -> Result<BookingEntity> {
        let stored = BookingEntity {
            id: Uuid::new_v4(),
            subscription_id: entity.subscription_id,
            service_type: entity.service_type,
            scheduled_date: entity.scheduled_date,
            location: entity.location,
            notes: entity.notes,
            status: entity.status,
            created_at: Utc::now(),
        };
        self.bookings.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl StoreProbeRepository for InMemoryStore {
    async fn probe(&self) -> Result<StoreInfo> {
        Ok(StoreInfo {
            database_name: "car_care".to_string(),
            collections: vec![
                "booking".to_string(),
                "customer".to_string(),
                "plan".to_string(),
                "subscription".to_string(),
            ],
        })
    }
}

pub fn test_config() -> DotEnvyConfig {
    DotEnvyConfig {
        server: Server {
            port: 0,
            body_limit: 1,
            timeout: 5,
        },
        database: Database {
            url: "postgres://localhost/car_care".to_string(),
        },
        stage: Stage::Local,
    }
}

/// The production route tree and middleware, backed by `store`.
pub fn app(store: Arc<InMemoryStore>) -> Router {
    let api = http_serve::api_routes(
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&store),
        true,
    );

    http_serve::with_layers(api, &test_config()).unwrap()
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (u16, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}
