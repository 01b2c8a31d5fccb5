/// The module takes a compound formula and produces the deterministic
/// pseudo-3D atom placements the molecule viewer draws: a ring of atoms
/// with alternating depth, a y-axis rotation for the animation frame and
/// a perspective scale for projection. Pure coordinate generation; canvas
/// drawing and frame scheduling belong to the display layer.
pub mod molecule_layout;
