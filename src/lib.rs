//! This crate implements the flow-field navigation core for a real-time strategy engine: given
//! one chunk's cost grid and a target descriptor, it produces an integration field, a flow
//! field of discrete directions, and a line-of-sight field, the way a crowd of actors paths
//! across a tiled world without per-agent A*. A thin Bevy plugin registers the caches that hold
//! built fields for reuse.
//!

pub mod error;
pub mod flowfields;
pub mod plugin;

pub mod prelude;
</content>
