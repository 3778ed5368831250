//! Queue Error Types
//!
//! Defines error types for broker connection and queue inspection.

use thiserror::Error;

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Errors that can occur while talking to the broker
#[derive(Debug, Error, Clone)]
pub enum QueueError {
    /// Broker unreachable or handshake failed
    #[error("Error connecting to RabbitMQ: {message}")]
    ConnectionFailed { message: String },

    /// Queue declaration (inspection) failed for a single queue
    #[error("Error checking message count for queue {queue}: {message}")]
    DeclareFailed { queue: String, message: String },

    /// The channel used for inspection is no longer open
    #[error("Broker channel is closed")]
    ChannelClosed,
}

impl QueueError {
    /// Create a connection failed error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            message: message.into(),
        }
    }

    /// Create a declare failed error for the named queue
    pub fn declare_failed(queue: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DeclareFailed {
            queue: queue.into(),
            message: message.into(),
        }
    }

    /// Whether this error occurred before the monitor could start
    pub fn is_startup_failure(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_error_messages() {
        let error = QueueError::connection_failed("connection refused");
        assert_eq!(error.to_string(), "Error connecting to RabbitMQ: connection refused");
        assert!(error.is_startup_failure());

        let error = QueueError::declare_failed("BIRTH", "channel error");
        assert_eq!(
            error.to_string(),
            "Error checking message count for queue BIRTH: channel error"
        );
        assert!(!error.is_startup_failure());

        assert_eq!(QueueError::ChannelClosed.to_string(), "Broker channel is closed");
    }
}
