//! A thin Bevy [Plugin] that registers this crate's caches as app resources, mirroring the way
//! the teacher's `FlowFieldTilesPlugin` wires its own resources into an `App`. The higher-level
//! chunk graph and route caching that would drive *when* fields get built is an external
//! collaborator and isn't registered here.

use bevy::prelude::*;

use crate::prelude::*;

/// Registers [FlowFieldCache] and [LosFieldCache] as resources on the host `App`.
pub struct FlowFieldCorePlugin;

impl Plugin for FlowFieldCorePlugin {
	fn build(&self, app: &mut App) {
		app.init_resource::<FlowFieldCache>()
			.init_resource::<LosFieldCache>();
	}
}

</content>
