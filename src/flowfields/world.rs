//! The hooks this crate consumes from its host engine: world geometry (tile/chunk bounding
//! boxes) and entity queries (for `Enemies` targets). Neither is implemented here - the host
//! supplies concrete types implementing these traits, keeping the field builders decoupled from
//! the engine's map representation and entity simulation.

use crate::prelude::*;

/// World-space position of a chunk map's origin, in XZ.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPos {
	/// World X of the map origin
	pub x: f32,
	/// World Z of the map origin
	pub z: f32,
}

/// An axis-aligned bounding box in the world's XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxXZ {
	/// Minimum X
	pub x_min: f32,
	/// Maximum X
	pub x_max: f32,
	/// Minimum Z
	pub z_min: f32,
	/// Maximum Z
	pub z_max: f32,
}

impl BoxXZ {
	/// Build a box centred on `(x, z)` with the given full width/height.
	pub fn from_centre(x: f32, z: f32, width: f32, height: f32) -> Self {
		BoxXZ {
			x_min: x - width / 2.0,
			x_max: x + width / 2.0,
			z_min: z - height / 2.0,
			z_max: z + height / 2.0,
		}
	}
	/// Centre point of the box
	pub fn centre(&self) -> (f32, f32) {
		((self.x_min + self.x_max) / 2.0, (self.z_min + self.z_max) / 2.0)
	}
}

/// Identifies a single tile for a world-geometry query: the chunk it belongs to, plus its
/// row/column inside that chunk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileDesc {
	chunk: ChunkCoord,
	r: usize,
	c: usize,
}

impl TileDesc {
	/// Build a new [TileDesc]
	pub fn new(chunk: ChunkCoord, r: usize, c: usize) -> Self {
		TileDesc { chunk, r, c }
	}
	/// Chunk this tile belongs to
	pub fn chunk(&self) -> ChunkCoord {
		self.chunk
	}
	/// Row inside the chunk
	pub fn row(&self) -> usize {
		self.r
	}
	/// Column inside the chunk
	pub fn column(&self) -> usize {
		self.c
	}
}

/// World-geometry hooks this crate consumes. Implemented by the host's concrete map type.
pub trait WorldGeometry {
	/// World-XZ bounding box of a single tile.
	fn tile_bounds(&self, map_pos: MapPos, tile: TileDesc) -> BoxXZ;
	/// World-XZ bounding rectangle of a whole chunk.
	fn chunk_bounds(&self, map_pos: MapPos, chunk: ChunkCoord) -> BoxXZ;
	/// Inverse of [WorldGeometry::chunk_bounds]: the tile coordinate inside `chunk` that
	/// contains world position `xz`, clamped to the chunk's valid index range.
	fn tile_for_pos(&self, map_pos: MapPos, chunk: ChunkCoord, xz: (f32, f32)) -> FieldCell {
		let bounds = self.chunk_bounds(map_pos, chunk);
		let nav_tile_width = (bounds.x_max - bounds.x_min) / FIELD_RES_C as f32;
		let nav_tile_height = (bounds.z_max - bounds.z_min) / FIELD_RES_R as f32;
		let r = ((xz.1 - bounds.z_min) / nav_tile_height) as i64;
		let c_from_east = ((xz.0 - bounds.x_min) / nav_tile_width) as i64;
		let c = FIELD_RES_C as i64 - c_from_east;
		let r = r.clamp(0, FIELD_RES_R as i64 - 1) as usize;
		let c = c.clamp(0, FIELD_RES_C as i64 - 1) as usize;
		FieldCell::new(r, c)
	}
}

/// Default `chunk_bounds` implementation matching the world-coordinate skew described in §4.8:
/// X increases westward, so a chunk's `x_max` is at the *smaller* column index side.
pub fn default_chunk_bounds(map_pos: MapPos, chunk: ChunkCoord) -> BoxXZ {
	let chunk_x_dim = TILES_PER_CHUNK_WIDTH as f32 * X_COORDS_PER_TILE;
	let chunk_z_dim = TILES_PER_CHUNK_HEIGHT as f32 * Z_COORDS_PER_TILE;
	let x_max = map_pos.x - chunk.column() as f32 * chunk_x_dim;
	let x_min = x_max - chunk_x_dim;
	let z_min = map_pos.z + chunk.row() as f32 * chunk_z_dim;
	let z_max = z_min + chunk_z_dim;
	BoxXZ { x_min, x_max, z_min, z_max }
}

/// A faction identifier, used by [EntitySnapshot] and the `Enemies` target descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FactionId(pub u8);

/// Diplomatic relationship between two factions, as seen by the host's diplomacy system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiplomacyState {
	/// Not hostile
	Peace,
	/// Hostile; combat-capable entities should be pathed toward
	War,
}

/// Opaque handle to an entity in the host's ECS, passed back through the hooks below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityHandle(pub u64);

/// Entity-query hooks this crate consumes to resolve `Enemies` targets (§4.5). Implemented by
/// the host's concrete entity/combat/diplomacy systems.
pub trait EntitySnapshot {
	/// All entities whose position lies within `bounds`.
	fn entities_in_rect(&self, bounds: BoxXZ) -> Vec<EntityHandle>;
	/// The faction of `entity`.
	fn faction_of(&self, entity: EntityHandle) -> FactionId;
	/// Whether `entity` is flagged as able to fight.
	fn is_combat_capable(&self, entity: EntityHandle) -> bool;
	/// Diplomatic relationship between two factions.
	fn diplomacy_state(&self, a: FactionId, b: FactionId) -> DiplomacyState;
	/// World-XZ position of `entity`.
	fn position_of(&self, entity: EntityHandle) -> (f32, f32);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn chunk_bounds_skew_west_positive() {
		let map_pos = MapPos { x: 100.0, z: 0.0 };
		let origin = default_chunk_bounds(map_pos, ChunkCoord::new(0, 0));
		let next_column = default_chunk_bounds(map_pos, ChunkCoord::new(0, 1));
		// Moving one chunk column over decreases x, since x increases westward.
		assert!(next_column.x_max < origin.x_max);
	}
}
</content>
