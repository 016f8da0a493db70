//! Reusable view components.

pub mod animated_graph;
