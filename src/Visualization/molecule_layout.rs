use crate::Formulas::formula_tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// radius of the ring the atoms are placed on, in canvas units
pub const RING_RADIUS: f64 = 60.0;
/// angular slots per full turn of the ring
pub const RING_SLOTS: usize = 8;
/// distance between the forward and backward depth planes
pub const DEPTH_STEP: f64 = 40.0;

/// One atom of a laid-out molecule. Coordinates are canvas-relative;
/// the drawing collaborator adds its own center offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomPlacement {
    pub element: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Pseudo-3D placement of a formula's atoms: every token expands into
/// `count` placements on a ring in the xy-plane, offset alternately
/// forward/backward in z to fake perspective. The layout depends only on
/// the formula, the per-frame rotation is applied by [`MoleculeScene::rotated`].
#[derive(Debug, Clone)]
pub struct MoleculeScene {
    pub formula: String,
    pub atoms: Vec<AtomPlacement>,
}

impl MoleculeScene {
    pub fn new(formula: &str) -> Self {
        let mut atoms = Vec::new();
        let mut index: usize = 0;
        for token in tokenize(formula) {
            for _ in 0..token.count {
                let angle = index as f64 * PI * 2.0 / RING_SLOTS as f64;
                atoms.push(AtomPlacement {
                    element: token.element.clone(),
                    x: angle.cos() * RING_RADIUS,
                    y: angle.sin() * RING_RADIUS,
                    z: (index % 2) as f64 * DEPTH_STEP - DEPTH_STEP / 2.0,
                });
                index += 1;
            }
        }
        Self {
            formula: formula.to_string(),
            atoms,
        }
    }

    /// All placements rotated by `rotation` radians about the y axis,
    /// ready for projection. Deterministic per (formula, rotation).
    pub fn rotated(&self, rotation: f64) -> Vec<AtomPlacement> {
        self.atoms
            .iter()
            .map(|atom| rotate_about_y(atom, rotation))
            .collect()
    }
}

pub fn rotate_about_y(atom: &AtomPlacement, rotation: f64) -> AtomPlacement {
    let cos = rotation.cos();
    let sin = rotation.sin();
    AtomPlacement {
        element: atom.element.clone(),
        x: atom.x * cos - atom.z * sin,
        y: atom.y,
        z: atom.x * sin + atom.z * cos,
    }
}

/// scale factor faking perspective for a depth coordinate
pub fn perspective_scale(z: f64) -> f64 {
    1.0 + z / 200.0
}

/// CPK-style display color for an element symbol, grey for anything else
pub fn element_color(symbol: &str) -> &'static str {
    match symbol {
        "H" => "#ffffff",
        "C" => "#909090",
        "N" => "#3050f8",
        "O" => "#ff0d0d",
        "S" => "#ffff30",
        "P" => "#ff8000",
        "Cl" => "#1ff01f",
        "F" => "#90e050",
        "Br" => "#a62929",
        _ => "#cccccc",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_placement_count_is_sum_of_token_counts() {
        assert_eq!(MoleculeScene::new("H2O").atoms.len(), 3);
        assert_eq!(MoleculeScene::new("C6H8O6").atoms.len(), 20);
        assert!(MoleculeScene::new("").atoms.is_empty());
    }

    #[test]
    fn test_first_atom_sits_on_the_ring() {
        let scene = MoleculeScene::new("H2O");
        let first = &scene.atoms[0];
        assert_eq!(first.element, "H");
        assert_relative_eq!(first.x, RING_RADIUS);
        assert_relative_eq!(first.y, 0.0);
        assert_relative_eq!(first.z, -DEPTH_STEP / 2.0);
        // second atom lands one slot further, on the forward depth plane
        let second = &scene.atoms[1];
        assert_relative_eq!(second.z, DEPTH_STEP / 2.0);
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let scene = MoleculeScene::new("CH4");
        let rotated = scene.rotated(0.0);
        for (a, b) in scene.atoms.iter().zip(rotated.iter()) {
            assert_relative_eq!(a.x, b.x);
            assert_relative_eq!(a.y, b.y);
            assert_relative_eq!(a.z, b.z);
        }
    }

    #[test]
    fn test_rotation_preserves_y_and_xz_radius() {
        let scene = MoleculeScene::new("CO2");
        let rotated = scene.rotated(1.234);
        for (a, b) in scene.atoms.iter().zip(rotated.iter()) {
            assert_relative_eq!(a.y, b.y);
            assert_relative_eq!(
                a.x * a.x + a.z * a.z,
                b.x * b.x + b.z * b.z,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_same_rotation_same_positions() {
        let scene = MoleculeScene::new("NH3");
        assert_eq!(scene.rotated(0.5), scene.rotated(0.5));
    }

    #[test]
    fn test_perspective_scale() {
        assert_relative_eq!(perspective_scale(0.0), 1.0);
        assert_relative_eq!(perspective_scale(-20.0), 0.9);
        assert_relative_eq!(perspective_scale(20.0), 1.1);
    }

    #[test]
    fn test_element_colors() {
        assert_eq!(element_color("O"), "#ff0d0d");
        assert_eq!(element_color("Zz"), "#cccccc");
    }
}
