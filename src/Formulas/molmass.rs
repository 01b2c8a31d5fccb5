/// Module to calculate the atomic composition and molar mass of a chemical formula
use crate::Formulas::formula_tokenizer::atomic_composition;
use crate::Formulas::periodic_table::element_by_symbol;
use log::warn;
use nalgebra::DMatrix;
use std::collections::{HashMap, HashSet};

/// Molar mass in g/mol of a substance given its chemical formula, together
/// with the atomic composition the mass was computed from. Symbols missing
/// from the periodic table contribute zero mass and are logged, the formula
/// itself is never rejected.
pub fn calculate_molar_mass(formula: &str) -> (f64, HashMap<String, usize>) {
    let counts = atomic_composition(formula);
    let mut molar_mass = 0.0;
    for (element, count) in &counts {
        match element_by_symbol(element) {
            Some(e) => molar_mass += e.atomic_mass * *count as f64,
            None => warn!(
                "element {} of formula {} is not in the periodic table, counted as zero mass",
                element, formula
            ),
        }
    }
    (molar_mass, counts)
}

/// Molar masses for a vector of chemical formulas
pub fn calculate_molar_mass_of_vector_of_subs(vec_of_formulae: Vec<&str>) -> Vec<f64> {
    vec_of_formulae
        .iter()
        .map(|formula| calculate_molar_mass(formula).0)
        .collect()
}

/// Element composition matrix for a vector of substances: one row per
/// substance, one column per element, entry = atom count of that element in
/// that substance. Columns are sorted by element symbol so the layout is
/// stable between runs. Returned together with the column element names.
pub fn create_elem_composition_matrix(vec_of_formulae: Vec<&str>) -> (DMatrix<f64>, Vec<String>) {
    let mut vec_of_compositions = Vec::new();
    let mut set_of_elems: HashSet<String> = HashSet::new();
    for formula in vec_of_formulae.iter() {
        let counts = atomic_composition(formula);
        set_of_elems.extend(counts.keys().cloned());
        vec_of_compositions.push(counts);
    }
    let mut unique_vec_of_elems: Vec<String> = set_of_elems.into_iter().collect();
    unique_vec_of_elems.sort();

    let mut matrix = DMatrix::zeros(vec_of_formulae.len(), unique_vec_of_elems.len());
    for (i, composition) in vec_of_compositions.iter().enumerate() {
        for (j, element) in unique_vec_of_elems.iter().enumerate() {
            if let Some(count) = composition.get(element) {
                matrix[(i, j)] = *count as f64;
            }
        }
    }
    (matrix, unique_vec_of_elems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_calculate_molar_mass() {
        let (molar_mass, _) = calculate_molar_mass("H2O");
        assert_relative_eq!(molar_mass, 18.015, epsilon = 1e-2);

        let (molar_mass, _) = calculate_molar_mass("NaCl");
        assert_relative_eq!(molar_mass, 58.44, epsilon = 1e-2);

        let (molar_mass, _) = calculate_molar_mass("C6H8O6");
        assert_relative_eq!(molar_mass, 176.12, epsilon = 1e-2);
    }

    #[test]
    fn test_phase_mark_is_ignored() {
        let (molar_mass, _) = calculate_molar_mass("H2O(g)");
        assert!((molar_mass - 18.015).abs() < 1e-2);
    }

    #[test]
    fn test_unknown_symbol_counts_zero() {
        // Xx is not a real element, the known part still contributes
        let (molar_mass, counts) = calculate_molar_mass("XxO2");
        assert_relative_eq!(molar_mass, 2.0 * 15.999, epsilon = 1e-3);
        assert_eq!(counts.get("Xx"), Some(&1));
    }

    #[test]
    fn test_calculate_molar_mass_of_vector_of_substances() {
        let vec_of_formulae = vec!["H2O", "NaCl", "C6H8O6"];
        let expected_molar_masses = vec![18.01528, 58.44316, 176.12];

        let calculated_molar_masses = calculate_molar_mass_of_vector_of_subs(vec_of_formulae);

        for (i, &expected_molar_mass) in expected_molar_masses.iter().enumerate() {
            assert!((calculated_molar_masses[i] - expected_molar_mass).abs() < 1e-2);
        }
    }

    #[test]
    fn test_element_matrix() {
        let vec_of_formulae = vec!["H2O", "NaCl", "C3H8", "CH4"]; // 5 elements
        let (matrix, elements) = create_elem_composition_matrix(vec_of_formulae);
        assert_eq!(matrix.nrows(), 4);
        assert_eq!(matrix.ncols(), 5);
        assert_eq!(
            elements,
            vec![
                "C".to_string(),
                "Cl".to_string(),
                "H".to_string(),
                "Na".to_string(),
                "O".to_string()
            ]
        );
        // row for H2O: 2 hydrogens, 1 oxygen, nothing else
        let h = elements.iter().position(|e| e == "H").unwrap();
        let o = elements.iter().position(|e| e == "O").unwrap();
        assert_eq!(matrix[(0, h)], 2.0);
        assert_eq!(matrix[(0, o)], 1.0);
        assert_eq!(matrix.row(0).sum(), 3.0);
    }
}
