//! Core types shared across likeness facilities
//!
//! This crate provides the canonical schema constants used by the logging
//! facility and the diagnostics layer so that every emitted event carries
//! the same field keys and event names.

pub mod schema;
