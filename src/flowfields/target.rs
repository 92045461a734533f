//! The target descriptor: what an integration/flow field build is aiming at, and how that
//! intent is turned into Dijkstra seed cells.

use std::collections::BTreeSet;

use crate::prelude::*;

/// What a field build is aiming at.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetDescriptor {
	/// A single cell in the chunk
	Tile {
		/// Cell the field should converge on
		tile: FieldCell,
	},
	/// A rectangular band of cells on a chunk edge, connecting to another chunk
	Portal {
		/// Inclusive corners of the band
		endpoints: [FieldCell; 2],
		/// The chunk on the other side of this portal
		connected_chunk: ChunkCoord,
	},
	/// All hostile combat-capable entities inside the chunk
	Enemies {
		/// Faction requesting the field
		faction_id: FactionId,
		/// Chunk being queried
		chunk: ChunkCoord,
		/// World position of the map origin, for the bounding-box query
		map_pos: MapPos,
	},
}

impl TargetDescriptor {
	/// Resolve this target into Dijkstra seed cells within `chunk_coord`. Panics if resolution
	/// would produce zero seeds - callers must not request an empty target.
	pub fn resolve<W: WorldGeometry, E: EntitySnapshot>(
		&self,
		chunk_coord: ChunkCoord,
		world: &W,
		entities: &E,
	) -> Vec<FieldCell> {
		let seeds = match *self {
			TargetDescriptor::Tile { tile } => vec![tile],
			TargetDescriptor::Portal { endpoints, .. } => {
				let [a, b] = endpoints;
				let (r0, r1) = (a.row().min(b.row()), a.row().max(b.row()));
				let (c0, c1) = (a.column().min(b.column()), a.column().max(b.column()));
				let mut cells = Vec::new();
				for r in r0..=r1 {
					for c in c0..=c1 {
						cells.push(FieldCell::new(r, c));
					}
				}
				cells
			}
			TargetDescriptor::Enemies { faction_id, chunk, map_pos } => {
				let bounds = world.chunk_bounds(map_pos, chunk);
				let mut tiles = BTreeSet::new();
				for entity in entities.entities_in_rect(bounds) {
					let other_faction = entities.faction_of(entity);
					if other_faction == faction_id {
						continue;
					}
					if !entities.is_combat_capable(entity) {
						continue;
					}
					if entities.diplomacy_state(faction_id, other_faction) != DiplomacyState::War {
						continue;
					}
					let pos = entities.position_of(entity);
					let cell = world.tile_for_pos(map_pos, chunk, pos);
					tiles.insert(cell);
				}
				tiles.into_iter().collect()
			}
		};
		assert!(!seeds.is_empty(), "target resolved to zero seeds for chunk {:?}", chunk_coord);
		seeds
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct FlatWorld;
	impl WorldGeometry for FlatWorld {
		fn tile_bounds(&self, _map_pos: MapPos, tile: TileDesc) -> BoxXZ {
			BoxXZ::from_centre(tile.column() as f32, tile.row() as f32, 1.0, 1.0)
		}
		fn chunk_bounds(&self, map_pos: MapPos, chunk: ChunkCoord) -> BoxXZ {
			default_chunk_bounds(map_pos, chunk)
		}
	}

	struct FixedEntities {
		entities: Vec<(EntityHandle, FactionId, bool, (f32, f32))>,
	}
	impl EntitySnapshot for FixedEntities {
		fn entities_in_rect(&self, _bounds: BoxXZ) -> Vec<EntityHandle> {
			self.entities.iter().map(|(h, ..)| *h).collect()
		}
		fn faction_of(&self, entity: EntityHandle) -> FactionId {
			self.entities.iter().find(|(h, ..)| *h == entity).unwrap().1
		}
		fn is_combat_capable(&self, entity: EntityHandle) -> bool {
			self.entities.iter().find(|(h, ..)| *h == entity).unwrap().2
		}
		fn diplomacy_state(&self, a: FactionId, b: FactionId) -> DiplomacyState {
			if a == b {
				DiplomacyState::Peace
			} else {
				DiplomacyState::War
			}
		}
		fn position_of(&self, entity: EntityHandle) -> (f32, f32) {
			self.entities.iter().find(|(h, ..)| *h == entity).unwrap().3
		}
	}

	#[test]
	fn tile_target_single_seed() {
		let target = TargetDescriptor::Tile { tile: FieldCell::new(3, 3) };
		let world = FlatWorld;
		let entities = FixedEntities { entities: vec![] };
		let seeds = target.resolve(ChunkCoord::new(0, 0), &world, &entities);
		assert_eq!(seeds, vec![FieldCell::new(3, 3)]);
	}
	#[test]
	fn portal_target_spans_band() {
		let target = TargetDescriptor::Portal {
			endpoints: [FieldCell::new(0, 2), FieldCell::new(0, 5)],
			connected_chunk: ChunkCoord::new(0, 0),
		};
		let world = FlatWorld;
		let entities = FixedEntities { entities: vec![] };
		let seeds = target.resolve(ChunkCoord::new(1, 1), &world, &entities);
		assert_eq!(seeds.len(), 4);
	}
	#[test]
	fn enemies_target_filters_hostiles_and_dedups() {
		let target = TargetDescriptor::Enemies {
			faction_id: FactionId(0),
			chunk: ChunkCoord::new(0, 0),
			map_pos: MapPos::default(),
		};
		let world = FlatWorld;
		let entities = FixedEntities {
			entities: vec![
				(EntityHandle(1), FactionId(0), true, (2.0, 2.0)), // friendly, excluded
				(EntityHandle(2), FactionId(1), false, (5.0, 5.0)), // not combat-capable
				(EntityHandle(3), FactionId(1), true, (2.0, 2.0)), // hostile
				(EntityHandle(4), FactionId(1), true, (6.0, 6.0)), // hostile, distinct tile
			],
		};
		let seeds = target.resolve(ChunkCoord::new(0, 0), &world, &entities);
		assert_eq!(seeds.len(), 2);
	}
}
</content>
