//! TaskPublisher trait definition.
//!
//! One-way notification sink for analytics/notification work. The gateway
//! publishes fire-and-forget and must not depend on any acknowledgment.

use async_trait::async_trait;

use super::TaskPublishError;

/// Best-effort task queue seam.
#[async_trait]
pub trait TaskPublisher: Send + Sync {
    async fn publish(
        &self,
        topic: &str,
        payload: serde_json::Value,
    ) -> Result<(), TaskPublishError>;
}
