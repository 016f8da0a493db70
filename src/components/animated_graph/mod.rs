//! The `AnimatedGraphNodes` component and the engine behind it.

mod browser;
mod component;
pub mod config;
pub mod driver;
pub mod edges;
mod instance;
pub mod physics;
pub mod presets;
pub mod render;
pub mod sampler;
pub mod scale;
pub mod state;
pub mod store;
mod types;

pub use component::AnimatedGraphNodes;
pub use config::{HoverEffect, SimulationConfig};
pub use instance::GraphInstance;
pub use presets::{PRESETS, Preset};
pub use state::GraphState;
pub use types::Pointer;
