//! A [FlowField] is a FIELD_RES_R x FIELD_RES_C array of discrete directions, built from an
//! [IntegrationField]. A steering pipeline/character controller reads and interprets a
//! [FlowField] to produce movement; this crate only produces the directions.
//!

use crate::prelude::*;

/// Discrete flow direction of one cell, plus the `None` sentinel for the goal itself (and
/// cells a caller has not yet resolved, such as the far side of a disjoint island).
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowDirection {
	#[default]
	None,
	North,
	NorthEast,
	East,
	SouthEast,
	South,
	SouthWest,
	West,
	NorthWest,
}

impl FlowDirection {
	/// Unit XZ vector for this direction, `(0,0)` for [FlowDirection::None]. X increases
	/// westward in this world frame; callers must not "correct" the sign.
	pub fn to_vec2(self) -> (f32, f32) {
		const DIAG: f32 = std::f32::consts::FRAC_1_SQRT_2;
		match self {
			FlowDirection::None => (0.0, 0.0),
			FlowDirection::North => (0.0, -1.0),
			FlowDirection::South => (0.0, 1.0),
			FlowDirection::East => (-1.0, 0.0),
			FlowDirection::West => (1.0, 0.0),
			FlowDirection::NorthWest => (DIAG, -DIAG),
			FlowDirection::NorthEast => (-DIAG, -DIAG),
			FlowDirection::SouthWest => (DIAG, DIAG),
			FlowDirection::SouthEast => (-DIAG, DIAG),
		}
	}
}

impl From<Ordinal> for FlowDirection {
	fn from(ord: Ordinal) -> Self {
		match ord {
			Ordinal::North => FlowDirection::North,
			Ordinal::NorthEast => FlowDirection::NorthEast,
			Ordinal::East => FlowDirection::East,
			Ordinal::SouthEast => FlowDirection::SouthEast,
			Ordinal::South => FlowDirection::South,
			Ordinal::SouthWest => FlowDirection::SouthWest,
			Ordinal::West => FlowDirection::West,
			Ordinal::NorthWest => FlowDirection::NorthWest,
			Ordinal::None => FlowDirection::None,
		}
	}
}

/// A FIELD_RES_R x FIELD_RES_C array of [FlowDirection]s, one per chunk cell.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone)]
pub struct FlowField([[FlowDirection; FIELD_RES_C]; FIELD_RES_R]);

impl Default for FlowField {
	fn default() -> Self {
		FlowField([[FlowDirection::None; FIELD_RES_C]; FIELD_RES_R])
	}
}

impl Field<FlowDirection> for FlowField {
	fn get_field(&self) -> &[[FlowDirection; FIELD_RES_C]; FIELD_RES_R] {
		&self.0
	}
	fn get_grid_value(&self, cell: FieldCell) -> FlowDirection {
		self.0[cell.row()][cell.column()]
	}
	fn set_grid_value(&mut self, value: FlowDirection, cell: FieldCell) {
		self.0[cell.row()][cell.column()] = value;
	}
}

/// Scan order mandated for the cardinal-preference tie-break: cardinals first, then diagonals,
/// in this exact order.
const TIE_BREAK_ORDER: [Ordinal; 8] = [
	Ordinal::North,
	Ordinal::South,
	Ordinal::East,
	Ordinal::West,
	Ordinal::NorthWest,
	Ordinal::NorthEast,
	Ordinal::SouthWest,
	Ordinal::SouthEast,
];

impl FlowField {
	/// Build a [FlowField] from a finished [IntegrationField]. Cells with integration `0`
	/// become [FlowDirection::None]; cells with `+inf` integration are left untouched so callers
	/// composing a multi-chunk path can pre-seed disjoint islands before calling this.
	pub fn build(integration: &IntegrationField) -> Self {
		let mut field = FlowField::default();
		for r in 0..FIELD_RES_R {
			for c in 0..FIELD_RES_C {
				let cell = FieldCell::new(r, c);
				let cost = integration.get_grid_value(cell);
				if cost == 0.0 {
					field.set_grid_value(FlowDirection::None, cell);
					continue;
				}
				if !cost.is_finite() {
					continue;
				}
				field.set_grid_value(resolve_direction(integration, cell).into(), cell);
			}
		}
		field
	}
	/// Overwrite the flow direction of every cell whose integration is `0` (the portal's seed
	/// band) with the cardinal direction toward `connected_chunk`. Asserts that `this_chunk` and
	/// `connected_chunk` are exactly one cardinal step apart.
	pub fn fixup_portal_edges(
		&mut self,
		integration: &IntegrationField,
		this_chunk: ChunkCoord,
		connected_chunk: ChunkCoord,
	) {
		let direction = Ordinal::chunk_to_chunk_direction(connected_chunk, this_chunk)
			.expect("portal fixup requires chunks to be exactly one cardinal step apart");
		for r in 0..FIELD_RES_R {
			for c in 0..FIELD_RES_C {
				let cell = FieldCell::new(r, c);
				if integration.get_grid_value(cell) == 0.0 {
					self.set_grid_value(direction.into(), cell);
				}
			}
		}
	}
}

/// Resolve the flow direction at `cell`, which must have finite, non-zero integration.
fn resolve_direction(integration: &IntegrationField, cell: FieldCell) -> Ordinal {
	let mut min_cost = f32::INFINITY;
	let mut cardinal_cost = [f32::INFINITY; 4]; // N, S, E, W indexed to match TIE_BREAK_ORDER[0..4]
	for (i, ord) in [Ordinal::North, Ordinal::South, Ordinal::East, Ordinal::West]
		.into_iter()
		.enumerate()
	{
		if let Some(n) = Ordinal::step(cell, ord) {
			let cost = integration.get_grid_value(n);
			cardinal_cost[i] = cost;
			if cost < min_cost {
				min_cost = cost;
			}
		}
	}
	let north_ok = cardinal_cost[0].is_finite();
	let south_ok = cardinal_cost[1].is_finite();
	let east_ok = cardinal_cost[2].is_finite();
	let west_ok = cardinal_cost[3].is_finite();
	let mut diag_cost = [f32::INFINITY; 4]; // NW, NE, SW, SE
	if north_ok && west_ok {
		diag_cost[0] = cardinal_cost[0].min(cardinal_cost[3]);
	}
	if north_ok && east_ok {
		diag_cost[1] = cardinal_cost[0].min(cardinal_cost[2]);
	}
	if south_ok && west_ok {
		diag_cost[2] = cardinal_cost[1].min(cardinal_cost[3]);
	}
	if south_ok && east_ok {
		diag_cost[3] = cardinal_cost[1].min(cardinal_cost[2]);
	}
	for cost in diag_cost {
		if cost < min_cost {
			min_cost = cost;
		}
	}
	assert!(min_cost.is_finite(), "no finite neighbour at a finite cell");
	for ord in TIE_BREAK_ORDER {
		let candidate = match ord {
			Ordinal::North => cardinal_cost[0],
			Ordinal::South => cardinal_cost[1],
			Ordinal::East => cardinal_cost[2],
			Ordinal::West => cardinal_cost[3],
			Ordinal::NorthWest => diag_cost[0],
			Ordinal::NorthEast => diag_cost[1],
			Ordinal::SouthWest => diag_cost[2],
			Ordinal::SouthEast => diag_cost[3],
			Ordinal::None => f32::INFINITY,
		};
		if candidate == min_cost {
			return ord;
		}
	}
	unreachable!("min_cost was derived from the same candidate set scanned above")
}

</content>
