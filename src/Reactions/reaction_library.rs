//! # Reaction Library Module
//!
//! ## Purpose
//! Provides the built-in library of well-known classroom reactions and the
//! bookkeeping around it: loading the embedded JSON base, searching entries
//! by display name or by equation text, analyzing every entry with the
//! equation parser, printing the result as a table and exporting it to JSON.
//!
//! ## Main Data Structures
//! - `LibraryEntry`: one named reaction of the library (name + equation text)
//! - `ReactionLibrary`: loaded entries, an equation -> entry index and the
//!   analyzed `ChemicalEquation`s
//!
//! ## Usage Pattern
//! ```rust
//! use ChemCode::Reactions::reaction_library::ReactionLibrary;
//! let mut library = ReactionLibrary::new();
//! library.open_common_library();
//! library.analyze_all();
//! assert_eq!(library.analyzed.len(), library.entries.len());
//! ```

use crate::Reactions::equation_parser::{ChemicalEquation, parse_reaction_equation};
use log::{info, warn};
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;

/// One named entry of the reaction library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub name: String,
    pub eq: String,
}

// The classroom reactions shipped with the application.
const COMMON_REACTIONS_JSON: &str = r#"[
  { "name": "Water Formation", "eq": "2H2 + O2 → 2H2O" },
  { "name": "Methane Combustion", "eq": "CH4 + 2O2 → CO2 + 2H2O" },
  { "name": "Ammonia Synthesis", "eq": "N2 + 3H2 → 2NH3" },
  { "name": "Limestone Decomposition", "eq": "CaCO3 → CaO + CO2" },
  { "name": "Zinc with Acid", "eq": "Zn + 2HCl → ZnCl2 + H2" },
  { "name": "Precipitation Reaction", "eq": "NaCl + AgNO3 → NaNO3 + AgCl" },
  { "name": "Displacement Reaction", "eq": "Fe + CuSO4 → FeSO4 + Cu" },
  { "name": "Salt Formation", "eq": "2Na + Cl2 → 2NaCl" }
]"#;

#[derive(Debug, Clone)]
pub struct ReactionLibrary {
    pub entries: Vec<LibraryEntry>,
    pub equation_index: HashMap<String, usize>, // {'equation': index into entries}
    pub analyzed: Vec<ChemicalEquation>,
}

impl ReactionLibrary {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            equation_index: HashMap::new(),
            analyzed: Vec::new(),
        }
    }

    /// Load the embedded library of common reactions and build the
    /// equation -> entry index.
    pub fn open_common_library(&mut self) {
        let entries: Vec<LibraryEntry> =
            serde_json::from_str(COMMON_REACTIONS_JSON).expect("embedded reaction library is valid JSON");
        self.equation_index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.eq.clone(), i))
            .collect();
        info!("loaded {} common reactions", entries.len());
        self.entries = entries;
    }

    /// all equations of the library, in library order
    pub fn all_equations(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.eq.clone()).collect()
    }

    /// all display names of the library, in library order
    pub fn all_names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn search_by_name(&self, name: &str) -> Option<&LibraryEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn search_by_equation(&self, equation: &str) -> Option<&LibraryEntry> {
        self.equation_index
            .get(equation)
            .map(|&i| &self.entries[i])
    }

    /// Run the equation parser over every entry. Entries that fail to parse
    /// are logged and skipped; the shipped library always parses in full.
    pub fn analyze_all(&mut self) {
        let mut analyzed = Vec::new();
        for entry in &self.entries {
            match parse_reaction_equation(&entry.eq) {
                Ok(parsed) => analyzed.push(parsed),
                Err(e) => warn!("library entry {:?} failed to parse: {}", entry.name, e),
            }
        }
        self.analyzed = analyzed;
    }

    /// Print the analyzed reactions to stdout as a table.
    pub fn pretty_print_analyzed(&self) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Name"),
            Cell::new("Equation"),
            Cell::new("Reactants"),
            Cell::new("Products"),
            Cell::new("Type"),
        ]));
        for (entry, parsed) in self.entries.iter().zip(self.analyzed.iter()) {
            table.add_row(Row::new(vec![
                Cell::new(&entry.name),
                Cell::new(&parsed.eq),
                Cell::new(&parsed.reactants.join(", ")),
                Cell::new(&parsed.products.join(", ")),
                Cell::new(parsed.classification.label_key()),
            ]));
        }
        table.printstd();
    }

    /// Write the analyzed reactions to a JSON file.
    pub fn save_analyzed(&self, path: &str) -> Result<(), std::io::Error> {
        let mut file = File::create(path)?;
        file.write_all(serde_json::to_string_pretty(&self.analyzed)?.as_bytes())?;
        info!("analyzed reactions have been written to {}", path);
        Ok(())
    }
}
