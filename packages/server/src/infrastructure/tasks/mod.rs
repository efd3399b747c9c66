//! TaskPublisher implementations.
//!
//! The shipped implementation only logs; a broker-backed one (RabbitMQ,
//! Redis streams) can slot in behind the same trait.

use async_trait::async_trait;

use crate::domain::{TaskPublishError, TaskPublisher};

/// Fire-and-forget sink that records published tasks in the log stream.
pub struct LoggingTaskPublisher;

#[async_trait]
impl TaskPublisher for LoggingTaskPublisher {
    async fn publish(
        &self,
        topic: &str,
        payload: serde_json::Value,
    ) -> Result<(), TaskPublishError> {
        tracing::debug!("Task published to '{}': {}", topic, payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logging_publisher_always_accepts() {
        // given:
        let publisher = LoggingTaskPublisher;

        // when:
        let result = publisher
            .publish("chat.message_created", serde_json::json!({"id": 1}))
            .await;

        // then:
        assert!(result.is_ok());
    }
}
