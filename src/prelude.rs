//! `use flowfield_core::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use bevy::log::{debug, error, info, trace};

#[doc(hidden)]
pub use crate::error::*;
#[doc(hidden)]
pub use crate::flowfields::{
	cache::*,
	fields::{flow_field::*, integration_field::*, los_field::*, nav_chunk::*, *},
	grid::*,
	identity::*,
	queue::*,
	target::*,
	world::*,
};
#[doc(hidden)]
pub use crate::plugin::*;
</content>
