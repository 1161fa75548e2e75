//! Adapters that connect the domain ports to external systems.

pub mod persistence;
