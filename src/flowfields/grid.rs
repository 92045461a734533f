//! Grid primitives shared by every field: the fixed-size coordinate type, the compile-time
//! chunk/field dimensions, and the two neighbour-enumeration rules (pathing vs line-of-sight)
//! that every builder in this crate walks.
//!

/// Number of rows in every field array. A fixed, compile-time size lets fields live inline
/// on the stack/heap as plain 2D arrays rather than heap-allocated `Vec`s, avoiding allocation
/// churn on the hot path.
pub const FIELD_RES_R: usize = 10;
/// Number of columns in every field array.
pub const FIELD_RES_C: usize = 10;
/// Number of tiles spanning the width of a chunk. Must evenly divide [FIELD_RES_C].
pub const TILES_PER_CHUNK_WIDTH: usize = 10;
/// Number of tiles spanning the height of a chunk. Must evenly divide [FIELD_RES_R].
pub const TILES_PER_CHUNK_HEIGHT: usize = 10;
/// World-space extent of one tile along the X axis.
pub const X_COORDS_PER_TILE: f32 = 1.0;
/// World-space extent of one tile along the Z axis.
pub const Z_COORDS_PER_TILE: f32 = 1.0;
/// Sentinel `cost_base` value denoting a permanently unwalkable cell.
pub const COST_IMPASSABLE: u8 = u8::MAX;

/// A single field cell addressed row-major within one chunk.
///
/// NB: always in `[0, FIELD_RES_R) x [0, FIELD_RES_C)`; out of range values are a programming
/// error and will panic the first time they're used to index a field.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldCell {
	r: usize,
	c: usize,
}

impl FieldCell {
	/// Create a new [FieldCell], panics if either axis is outside of the field bounds
	pub fn new(r: usize, c: usize) -> Self {
		assert!(r < FIELD_RES_R, "row {} out of bounds (max {})", r, FIELD_RES_R - 1);
		assert!(c < FIELD_RES_C, "column {} out of bounds (max {})", c, FIELD_RES_C - 1);
		FieldCell { r, c }
	}
	/// Row of the cell
	pub fn row(&self) -> usize {
		self.r
	}
	/// Column of the cell
	pub fn column(&self) -> usize {
		self.c
	}
}

/// A chunk's `(row, column)` position within the wider map, not to be confused with a
/// [FieldCell] which addresses a single tile *inside* a chunk.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkCoord {
	r: u32,
	c: u32,
}

impl ChunkCoord {
	/// Create a new [ChunkCoord]
	pub fn new(r: u32, c: u32) -> Self {
		ChunkCoord { r, c }
	}
	/// Row of the chunk
	pub fn row(&self) -> u32 {
		self.r
	}
	/// Column of the chunk
	pub fn column(&self) -> u32 {
		self.c
	}
}

/// The eight compass directions plus the "arrived/blocked" zero vector, used throughout the
/// flow field and its neighbour-walking helpers.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Ordinal {
	North,
	NorthEast,
	East,
	SouthEast,
	South,
	SouthWest,
	West,
	NorthWest,
	/// The goal, or a direction that cannot be resolved
	None,
}

impl Ordinal {
	/// Cardinal-only neighbours of a [FieldCell] that lie inside the grid (up to 4). Diagonal
	/// motion is never expressed here -- only the flow field resolver emits diagonals, and only
	/// under the corner-safety rule.
	pub fn get_cardinal_cell_neighbours(cell: FieldCell) -> Vec<FieldCell> {
		let mut neighbours = Vec::with_capacity(4);
		if cell.r > 0 {
			neighbours.push(FieldCell::new(cell.r - 1, cell.c)); // north
		}
		if cell.c < FIELD_RES_C - 1 {
			neighbours.push(FieldCell::new(cell.r, cell.c + 1)); // east
		}
		if cell.r < FIELD_RES_R - 1 {
			neighbours.push(FieldCell::new(cell.r + 1, cell.c)); // south
		}
		if cell.c > 0 {
			neighbours.push(FieldCell::new(cell.r, cell.c - 1)); // west
		}
		assert!(neighbours.len() <= 4);
		neighbours
	}
	/// A single cardinal step from `cell` in `ord`, or [None] if it would leave the grid.
	/// Only the four cardinal ordinals are valid input; a diagonal or [Ordinal::None] panics.
	pub fn step(cell: FieldCell, ord: Ordinal) -> Option<FieldCell> {
		match ord {
			Ordinal::North if cell.r > 0 => Some(FieldCell::new(cell.r - 1, cell.c)),
			Ordinal::South if cell.r < FIELD_RES_R - 1 => Some(FieldCell::new(cell.r + 1, cell.c)),
			Ordinal::East if cell.c < FIELD_RES_C - 1 => Some(FieldCell::new(cell.r, cell.c + 1)),
			Ordinal::West if cell.c > 0 => Some(FieldCell::new(cell.r, cell.c - 1)),
			Ordinal::North | Ordinal::South | Ordinal::East | Ordinal::West => None,
			_ => panic!("step() only accepts a cardinal Ordinal, got {:?}", ord),
		}
	}
	/// For two orthogonally adjacent cells, the [Ordinal] from `source` to `target`. Panics if
	/// the cells are not exactly one cardinal step apart.
	pub fn cell_to_cell_direction(target: FieldCell, source: FieldCell) -> Self {
		let dr = target.r as i32 - source.r as i32;
		let dc = target.c as i32 - source.c as i32;
		match (dr, dc) {
			(-1, 0) => Ordinal::North,
			(1, 0) => Ordinal::South,
			(0, 1) => Ordinal::East,
			(0, -1) => Ordinal::West,
			_ => panic!(
				"Cell {:?} is not orthogonally adjacent to {:?}",
				target, source
			),
		}
	}
	/// For two orthogonally adjacent chunks, the [Ordinal] from `source` to `target`. Returns
	/// `None` if the chunks aren't exactly one cardinal step apart instead of panicking, since
	/// callers use this to assert adjacency themselves (see portal fixup).
	pub fn chunk_to_chunk_direction(target: ChunkCoord, source: ChunkCoord) -> Option<Self> {
		let dr = target.r as i64 - source.r as i64;
		let dc = target.c as i64 - source.c as i64;
		match (dr, dc) {
			(-1, 0) => Some(Ordinal::North),
			(1, 0) => Some(Ordinal::South),
			(0, 1) => Some(Ordinal::East),
			(0, -1) => Some(Ordinal::West),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn corner_neighbours() {
		let result = Ordinal::get_cardinal_cell_neighbours(FieldCell::new(0, 0));
		assert_eq!(result, vec![FieldCell::new(0, 1), FieldCell::new(1, 0)]);
	}
	#[test]
	fn centre_neighbours() {
		let result = Ordinal::get_cardinal_cell_neighbours(FieldCell::new(4, 4));
		assert_eq!(result.len(), 4);
	}
	#[test]
	fn direction_north() {
		let result = Ordinal::cell_to_cell_direction(FieldCell::new(3, 3), FieldCell::new(4, 3));
		assert_eq!(result, Ordinal::North);
	}
	#[test]
	#[should_panic]
	fn direction_panics_on_diagonal() {
		Ordinal::cell_to_cell_direction(FieldCell::new(3, 3), FieldCell::new(4, 4));
	}
	#[test]
	fn chunk_direction_none_when_not_adjacent() {
		let result = Ordinal::chunk_to_chunk_direction(ChunkCoord::new(5, 5), ChunkCoord::new(0, 0));
		assert_eq!(result, None);
	}
}
</content>
