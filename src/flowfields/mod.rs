//! Flow fields are a means of handling pathfinding for a crowd of actors, avoiding a per-agent
//! A* search by instead computing, once per destination, a vector field that any number of
//! actors can follow simultaneously.
//!
//! ## Useful definitions
//!
//! * Chunk - a fixed-size tile grid; a game world is represented by many chunks
//! * NavChunk - the read-only per-cell cost/blocker data of a chunk
//! * Integration field - a 2D array of accumulated minimum cost to reach a target, built from a
//!   `NavChunk` via multi-source Dijkstra. It's ephemeral - it exists to produce a `FlowField`
//!   and isn't itself cached
//! * Flow field - a 2D array describing how an actor should move (flow) across a chunk,
//!   derived from an integration field
//! * LOS field - a 2D array of per-cell visibility/shadow bits for a target, propagated
//!   seamlessly across chunk boundaries
//! * Target descriptor - what a field build is aiming at: a tile, a portal band, or a faction's
//!   hostile entities
//! * Field ID - a deterministic 64-bit cache key derived from a target descriptor and chunk
//! * Ordinal - a direction based on compass ordinals: N, NE, E, SE, S, SW, W, NW
//! * Field cell - an element of a 2D field array
//!

pub mod cache;
pub mod fields;
pub mod grid;
pub mod identity;
pub mod queue;
pub mod target;
pub mod world;
</content>
