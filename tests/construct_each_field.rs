//! End-to-end scenarios exercising the full integration -> flow -> LOS pipeline for one chunk,
//! and the chunk-boundary continuation protocol across two chunks.
//!

use flowfield_core::prelude::*;

struct FlatWorld;
impl WorldGeometry for FlatWorld {
	fn tile_bounds(&self, _map_pos: MapPos, tile: TileDesc) -> BoxXZ {
		BoxXZ::from_centre(tile.column() as f32, tile.row() as f32, 1.0, 1.0)
	}
	fn chunk_bounds(&self, map_pos: MapPos, chunk: ChunkCoord) -> BoxXZ {
		default_chunk_bounds(map_pos, chunk)
	}
}

struct NoEntities;
impl EntitySnapshot for NoEntities {
	fn entities_in_rect(&self, _bounds: BoxXZ) -> Vec<EntityHandle> {
		vec![]
	}
	fn faction_of(&self, _entity: EntityHandle) -> FactionId {
		unreachable!()
	}
	fn is_combat_capable(&self, _entity: EntityHandle) -> bool {
		unreachable!()
	}
	fn diplomacy_state(&self, _a: FactionId, _b: FactionId) -> DiplomacyState {
		unreachable!()
	}
	fn position_of(&self, _entity: EntityHandle) -> (f32, f32) {
		unreachable!()
	}
}

struct FixedEntities(Vec<(EntityHandle, FactionId, bool, (f32, f32))>);
impl EntitySnapshot for FixedEntities {
	fn entities_in_rect(&self, _bounds: BoxXZ) -> Vec<EntityHandle> {
		self.0.iter().map(|(h, ..)| *h).collect()
	}
	fn faction_of(&self, entity: EntityHandle) -> FactionId {
		self.0.iter().find(|(h, ..)| *h == entity).unwrap().1
	}
	fn is_combat_capable(&self, entity: EntityHandle) -> bool {
		self.0.iter().find(|(h, ..)| *h == entity).unwrap().2
	}
	fn diplomacy_state(&self, a: FactionId, b: FactionId) -> DiplomacyState {
		if a == b {
			DiplomacyState::Peace
		} else {
			DiplomacyState::War
		}
	}
	fn position_of(&self, entity: EntityHandle) -> (f32, f32) {
		self.0.iter().find(|(h, ..)| *h == entity).unwrap().3
	}
}

#[test]
fn scenario_s1_flat_field_single_tile_target() {
	let chunk = NavChunk::default();
	let world = FlatWorld;
	let entities = NoEntities;
	let target = TargetDescriptor::Tile { tile: FieldCell::new(4, 4) };
	let seeds = target.resolve(ChunkCoord::new(0, 0), &world, &entities);
	let integration = IntegrationField::build(&chunk, &seeds);
	for r in 0..FIELD_RES_R {
		for c in 0..FIELD_RES_C {
			let expected = (r as i32 - 4).abs() + (c as i32 - 4).abs();
			assert_eq!(integration.get_grid_value(FieldCell::new(r, c)), expected as f32);
		}
	}
	let flow = FlowField::build(&integration);
	assert_eq!(flow.get_grid_value(FieldCell::new(4, 4)), FlowDirection::None);
}

#[test]
fn scenario_s3_portal_target_with_fixup() {
	let chunk = NavChunk::default();
	let world = FlatWorld;
	let entities = NoEntities;
	let target = TargetDescriptor::Portal {
		endpoints: [FieldCell::new(0, 2), FieldCell::new(0, 5)],
		connected_chunk: ChunkCoord::new(0, 1),
	};
	let this_chunk = ChunkCoord::new(1, 1);
	let seeds = target.resolve(this_chunk, &world, &entities);
	let integration = IntegrationField::build(&chunk, &seeds);
	let mut flow = FlowField::build(&integration);
	flow.fixup_portal_edges(&integration, this_chunk, ChunkCoord::new(0, 1));
	for r in 2..=5 {
		assert_eq!(flow.get_grid_value(FieldCell::new(0, r)), FlowDirection::North);
	}
}

#[test]
fn scenario_s6_enemies_target_seeds_hostiles_only() {
	let world = FlatWorld;
	let chunk_coord = ChunkCoord::new(0, 0);
	let entities = FixedEntities(vec![
		(EntityHandle(1), FactionId(0), true, (1.0, 1.0)),
		(EntityHandle(2), FactionId(0), true, (2.0, 2.0)),
		(EntityHandle(3), FactionId(0), true, (3.0, 3.0)),
		(EntityHandle(4), FactionId(1), true, (2.0, 2.0)),
		(EntityHandle(5), FactionId(1), true, (6.0, 5.0)),
	]);
	let target = TargetDescriptor::Enemies {
		faction_id: FactionId(0),
		chunk: chunk_coord,
		map_pos: MapPos::default(),
	};
	let seeds = target.resolve(chunk_coord, &world, &entities);
	assert_eq!(seeds.len(), 2);
	let chunk = NavChunk::default();
	let integration = IntegrationField::build(&chunk, &seeds);
	for seed in seeds {
		assert_eq!(integration.get_grid_value(seed), 0.0);
	}
}

#[test]
fn scenario_s4_los_with_a_pillar() {
	let mut chunk = NavChunk::default();
	chunk.set_grid_value(COST_IMPASSABLE, FieldCell::new(4, 4));
	let target = FieldCell::new(7, 7);
	let field = LosField::build_destination(ChunkCoord::new(0, 0), &chunk, target, &FlatWorld, MapPos::default());
	assert!(field.is_visible(target));
	let any_shadow = (0..FIELD_RES_R).any(|r| (0..FIELD_RES_C).any(|c| field.is_wavefront_blocked(FieldCell::new(r, c))));
	assert!(any_shadow);
}

#[test]
fn scenario_s5_los_continuation_across_chunks() {
	let chunk_a_coord = ChunkCoord::new(0, 1);
	let chunk_b_coord = ChunkCoord::new(0, 0);
	let chunk_a = NavChunk::default();
	let chunk_b = NavChunk::default();
	let target_tile = FieldCell::new(0, 0);
	let los_a = LosField::build_destination(chunk_a_coord, &chunk_a, target_tile, &FlatWorld, MapPos::default());
	let los_b = LosField::build_continuation(
		chunk_b_coord,
		&chunk_b,
		&los_a,
		&FlatWorld,
		MapPos::default(),
		(chunk_a_coord, target_tile),
	);
	assert_eq!(los_b.chunk(), chunk_b_coord);
}

#[test]
fn field_identity_round_trips_through_cache() {
	let target = TargetDescriptor::Tile { tile: FieldCell::new(4, 4) };
	let chunk_coord = ChunkCoord::new(2, 3);
	let id = FieldId::new(&target, chunk_coord);
	let chunk = NavChunk::default();
	let integration = IntegrationField::build(&chunk, &[FieldCell::new(4, 4)]);
	let flow = FlowField::build(&integration);
	let mut cache = FlowFieldCache::default();
	cache.insert(id, flow);
	assert!(cache.get(id).is_some());
	assert_eq!(id, FieldId::new(&target, chunk_coord));
}
</content>
