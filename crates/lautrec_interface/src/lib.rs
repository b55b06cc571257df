//! Trait definitions for the external generation collaborators.
//!
//! The pipeline never talks to a remote API directly; it goes through the
//! driver traits defined here. Tests substitute mock drivers, production
//! wires in the clients from `lautrec_models`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{CopyDriver, Health, ImageDriver};
pub use types::HealthStatus;
