//! Shared types for the driver interface.

use serde::{Deserialize, Serialize};

/// Health status of a backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HealthStatus {
    /// Backend is fully operational
    Healthy,
    /// Backend is operational but with reduced performance
    Degraded {
        /// Description of the degradation
        message: String,
    },
    /// Backend is not operational
    Unhealthy {
        /// Description of the problem
        message: String,
    },
}

impl HealthStatus {
    /// Whether the backend can serve requests at all.
    pub fn is_available(&self) -> bool {
        !matches!(self, HealthStatus::Unhealthy { .. })
    }
}
