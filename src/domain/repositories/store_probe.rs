use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::store::StoreInfo;

#[automock]
#[async_trait]
pub trait StoreProbeRepository {
    async fn probe(&self) -> Result<StoreInfo>;
}
