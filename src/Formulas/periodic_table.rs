use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

/// Broad element family, as shown in the periodic table legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementCategory {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
}

impl ElementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCategory::AlkaliMetal => "alkali-metal",
            ElementCategory::AlkalineEarthMetal => "alkaline-earth-metal",
            ElementCategory::TransitionMetal => "transition-metal",
            ElementCategory::PostTransitionMetal => "post-transition-metal",
            ElementCategory::Metalloid => "metalloid",
            ElementCategory::Nonmetal => "nonmetal",
            ElementCategory::Halogen => "halogen",
            ElementCategory::NobleGas => "noble-gas",
        }
    }
}

// Define a struct to hold element data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChemElement {
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_number: u32,
    pub atomic_mass: f64,
    pub period: u32,
    pub group: Option<u32>,
    pub category: ElementCategory,
    pub electron_config: &'static str,
}

use ElementCategory::*;

// Elements of periods 1-4 with the data the application displays
pub const PERIODIC_TABLE: &[ChemElement] = &[
    ChemElement { symbol: "H", name: "Hydrogen", atomic_number: 1, atomic_mass: 1.008, period: 1, group: Some(1), category: Nonmetal, electron_config: "1s1" },
    ChemElement { symbol: "He", name: "Helium", atomic_number: 2, atomic_mass: 4.0026, period: 1, group: Some(18), category: NobleGas, electron_config: "1s2" },
    ChemElement { symbol: "Li", name: "Lithium", atomic_number: 3, atomic_mass: 6.94, period: 2, group: Some(1), category: AlkaliMetal, electron_config: "[He] 2s1" },
    ChemElement { symbol: "Be", name: "Beryllium", atomic_number: 4, atomic_mass: 9.0122, period: 2, group: Some(2), category: AlkalineEarthMetal, electron_config: "[He] 2s2" },
    ChemElement { symbol: "B", name: "Boron", atomic_number: 5, atomic_mass: 10.81, period: 2, group: Some(13), category: Metalloid, electron_config: "[He] 2s2 2p1" },
    ChemElement { symbol: "C", name: "Carbon", atomic_number: 6, atomic_mass: 12.011, period: 2, group: Some(14), category: Nonmetal, electron_config: "[He] 2s2 2p2" },
    ChemElement { symbol: "N", name: "Nitrogen", atomic_number: 7, atomic_mass: 14.007, period: 2, group: Some(15), category: Nonmetal, electron_config: "[He] 2s2 2p3" },
    ChemElement { symbol: "O", name: "Oxygen", atomic_number: 8, atomic_mass: 15.999, period: 2, group: Some(16), category: Nonmetal, electron_config: "[He] 2s2 2p4" },
    ChemElement { symbol: "F", name: "Fluorine", atomic_number: 9, atomic_mass: 18.998, period: 2, group: Some(17), category: Halogen, electron_config: "[He] 2s2 2p5" },
    ChemElement { symbol: "Ne", name: "Neon", atomic_number: 10, atomic_mass: 20.18, period: 2, group: Some(18), category: NobleGas, electron_config: "[He] 2s2 2p6" },
    ChemElement { symbol: "Na", name: "Sodium", atomic_number: 11, atomic_mass: 22.99, period: 3, group: Some(1), category: AlkaliMetal, electron_config: "[Ne] 3s1" },
    ChemElement { symbol: "Mg", name: "Magnesium", atomic_number: 12, atomic_mass: 24.305, period: 3, group: Some(2), category: AlkalineEarthMetal, electron_config: "[Ne] 3s2" },
    ChemElement { symbol: "Al", name: "Aluminium", atomic_number: 13, atomic_mass: 26.98, period: 3, group: Some(13), category: PostTransitionMetal, electron_config: "[Ne] 3s2 3p1" },
    ChemElement { symbol: "Si", name: "Silicon", atomic_number: 14, atomic_mass: 28.085, period: 3, group: Some(14), category: Metalloid, electron_config: "[Ne] 3s2 3p2" },
    ChemElement { symbol: "P", name: "Phosphorus", atomic_number: 15, atomic_mass: 30.974, period: 3, group: Some(15), category: Nonmetal, electron_config: "[Ne] 3s2 3p3" },
    ChemElement { symbol: "S", name: "Sulfur", atomic_number: 16, atomic_mass: 32.065, period: 3, group: Some(16), category: Nonmetal, electron_config: "[Ne] 3s2 3p4" },
    ChemElement { symbol: "Cl", name: "Chlorine", atomic_number: 17, atomic_mass: 35.45, period: 3, group: Some(17), category: Halogen, electron_config: "[Ne] 3s2 3p5" },
    ChemElement { symbol: "Ar", name: "Argon", atomic_number: 18, atomic_mass: 39.948, period: 3, group: Some(18), category: NobleGas, electron_config: "[Ne] 3s2 3p6" },
    ChemElement { symbol: "K", name: "Potassium", atomic_number: 19, atomic_mass: 39.098, period: 4, group: Some(1), category: AlkaliMetal, electron_config: "[Ar] 4s1" },
    ChemElement { symbol: "Ca", name: "Calcium", atomic_number: 20, atomic_mass: 40.078, period: 4, group: Some(2), category: AlkalineEarthMetal, electron_config: "[Ar] 4s2" },
    ChemElement { symbol: "Sc", name: "Scandium", atomic_number: 21, atomic_mass: 44.9559, period: 4, group: Some(3), category: TransitionMetal, electron_config: "[Ar] 3d1 4s2" },
    ChemElement { symbol: "Ti", name: "Titanium", atomic_number: 22, atomic_mass: 47.867, period: 4, group: Some(4), category: TransitionMetal, electron_config: "[Ar] 3d2 4s2" },
    ChemElement { symbol: "V", name: "Vanadium", atomic_number: 23, atomic_mass: 50.9415, period: 4, group: Some(5), category: TransitionMetal, electron_config: "[Ar] 3d3 4s2" },
    ChemElement { symbol: "Cr", name: "Chromium", atomic_number: 24, atomic_mass: 51.9961, period: 4, group: Some(6), category: TransitionMetal, electron_config: "[Ar] 3d5 4s1" },
    ChemElement { symbol: "Mn", name: "Manganese", atomic_number: 25, atomic_mass: 54.938, period: 4, group: Some(7), category: TransitionMetal, electron_config: "[Ar] 3d5 4s2" },
    ChemElement { symbol: "Fe", name: "Iron", atomic_number: 26, atomic_mass: 55.845, period: 4, group: Some(8), category: TransitionMetal, electron_config: "[Ar] 3d6 4s2" },
    ChemElement { symbol: "Co", name: "Cobalt", atomic_number: 27, atomic_mass: 58.933, period: 4, group: Some(9), category: TransitionMetal, electron_config: "[Ar] 3d7 4s2" },
    ChemElement { symbol: "Ni", name: "Nickel", atomic_number: 28, atomic_mass: 58.693, period: 4, group: Some(10), category: TransitionMetal, electron_config: "[Ar] 3d8 4s2" },
    ChemElement { symbol: "Cu", name: "Copper", atomic_number: 29, atomic_mass: 63.546, period: 4, group: Some(11), category: TransitionMetal, electron_config: "[Ar] 3d10 4s1" },
    ChemElement { symbol: "Zn", name: "Zinc", atomic_number: 30, atomic_mass: 65.38, period: 4, group: Some(12), category: TransitionMetal, electron_config: "[Ar] 3d10 4s2" },
    ChemElement { symbol: "Ga", name: "Gallium", atomic_number: 31, atomic_mass: 69.723, period: 4, group: Some(13), category: PostTransitionMetal, electron_config: "[Ar] 3d10 4s2 4p1" },
    ChemElement { symbol: "Ge", name: "Germanium", atomic_number: 32, atomic_mass: 72.63, period: 4, group: Some(14), category: Metalloid, electron_config: "[Ar] 3d10 4s2 4p2" },
    ChemElement { symbol: "As", name: "Arsenic", atomic_number: 33, atomic_mass: 74.9216, period: 4, group: Some(15), category: Metalloid, electron_config: "[Ar] 3d10 4s2 4p3" },
    ChemElement { symbol: "Se", name: "Selenium", atomic_number: 34, atomic_mass: 78.971, period: 4, group: Some(16), category: Nonmetal, electron_config: "[Ar] 3d10 4s2 4p4" },
    ChemElement { symbol: "Br", name: "Bromine", atomic_number: 35, atomic_mass: 79.904, period: 4, group: Some(17), category: Halogen, electron_config: "[Ar] 3d10 4s2 4p5" },
    ChemElement { symbol: "Kr", name: "Krypton", atomic_number: 36, atomic_mass: 83.798, period: 4, group: Some(18), category: NobleGas, electron_config: "[Ar] 3d10 4s2 4p6" },
];

/// Find the record for an element symbol, `None` for symbols outside the table.
pub fn element_by_symbol(symbol: &str) -> Option<&'static ChemElement> {
    PERIODIC_TABLE.iter().find(|e| e.symbol == symbol)
}

/// largest period present in the table (number of table rows to display)
pub fn max_period() -> u32 {
    PERIODIC_TABLE.iter().map(|e| e.period).max().unwrap_or(0)
}

/// Print the whole table to stdout, one row per element.
pub fn pretty_print_periodic_table() {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Z"),
        Cell::new("Symbol"),
        Cell::new("Name"),
        Cell::new("Mass"),
        Cell::new("Period"),
        Cell::new("Group"),
        Cell::new("Category"),
        Cell::new("Electron config"),
    ]));
    for element in PERIODIC_TABLE {
        let group = match element.group {
            Some(g) => g.to_string(),
            None => "-".to_string(),
        };
        table.add_row(Row::new(vec![
            Cell::new(&element.atomic_number.to_string()),
            Cell::new(element.symbol),
            Cell::new(element.name),
            Cell::new(&element.atomic_mass.to_string()),
            Cell::new(&element.period.to_string()),
            Cell::new(&group),
            Cell::new(element.category.as_str()),
            Cell::new(element.electron_config),
        ]));
    }
    table.printstd();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_by_symbol() {
        let fe = element_by_symbol("Fe").unwrap();
        assert_eq!(fe.name, "Iron");
        assert_eq!(fe.atomic_number, 26);
        assert_eq!(fe.category, ElementCategory::TransitionMetal);

        assert!(element_by_symbol("Xx").is_none());
    }

    #[test]
    fn test_table_is_ordered_by_atomic_number() {
        for (i, element) in PERIODIC_TABLE.iter().enumerate() {
            assert_eq!(element.atomic_number as usize, i + 1);
        }
    }

    #[test]
    fn test_max_period() {
        assert_eq!(max_period(), 4);
    }

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&ElementCategory::NobleGas).unwrap();
        assert_eq!(json, "\"noble-gas\"");
    }
}
