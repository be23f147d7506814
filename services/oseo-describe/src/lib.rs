//! OpenSearch EO parameter description service library.
//!
//! Loads the service configuration and renders the parameter catalog for
//! capability documents.

pub mod config;
pub mod render;
