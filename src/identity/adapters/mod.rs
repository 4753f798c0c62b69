//! Adapter implementations for identity resolution.

pub mod memory;
