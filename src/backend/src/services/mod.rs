//! Business logic services
//!
//! This module contains business logic separated from HTTP concerns so it
//! can be tested without spinning up the server.

pub mod alarm;
pub mod node_config;
