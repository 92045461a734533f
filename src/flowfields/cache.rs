//! The caches a host app registers alongside this crate's plugin: built flow and LOS fields
//! keyed by [FieldId] so repeat requests for the same logical (chunk, target) pair are free.
//! Mirrors the teacher's `FlowFieldCache` component, but as Bevy `Resource`s since a single
//! cache serves the whole app rather than one actor.

use std::collections::BTreeMap;

use bevy::prelude::*;

use crate::prelude::*;

/// Every built [FlowField](crate::flowfields::fields::flow_field::FlowField), keyed by the
/// [FieldId] of the request that produced it.
#[derive(Resource, Default)]
pub struct FlowFieldCache(BTreeMap<FieldId, FlowField>);

impl FlowFieldCache {
	/// Look up a cached field
	pub fn get(&self, id: FieldId) -> Option<&FlowField> {
		self.0.get(&id)
	}
	/// Insert a built field
	pub fn insert(&mut self, id: FieldId, field: FlowField) {
		self.0.insert(id, field);
	}
	/// Remove a cached field, e.g. when its chunk's cost grid changes
	pub fn remove(&mut self, id: FieldId) {
		self.0.remove(&id);
	}
}

/// Every built [LosField], keyed by the [FieldId] of the request that produced it.
#[derive(Resource, Default)]
pub struct LosFieldCache(BTreeMap<FieldId, LosField>);

impl LosFieldCache {
	/// Look up a cached field
	pub fn get(&self, id: FieldId) -> Option<&LosField> {
		self.0.get(&id)
	}
	/// Insert a built field
	pub fn insert(&mut self, id: FieldId, field: LosField) {
		self.0.insert(id, field);
	}
	/// Remove a cached field
	pub fn remove(&mut self, id: FieldId) {
		self.0.remove(&id);
	}
}

</content>
