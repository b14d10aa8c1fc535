//! Client-side pieces of the workspace provisioning flow: typed HTTP clients for the
//! portal backends and the workspace name field with its shared availability lookup.

pub mod api;
pub mod config;
pub mod workspace_name;

pub use config::AvailabilityClientConfig;
