//! Literacy Pulse - Survey Response Analytics Engine
//!
//! This crate scores AI-literacy survey responses across five dimensions,
//! aggregates them into organization-level dashboards, and tracks rank
//! progression and time savings over time.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
