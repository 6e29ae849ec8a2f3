//! Reusable editor components.

pub mod workflow_node;
