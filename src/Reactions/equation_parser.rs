use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse shape-based tag assigned from reactant/product counts only.
/// The classification never inspects chemical content, so redox and
/// multi-term reactions can land in the wrong bucket; the tag is meant
/// for display labels, nothing downstream depends on it being right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionClass {
    Combination,
    Decomposition,
    Displacement,
    Other,
}

impl ReactionClass {
    /// key of the human-readable label in the translation catalog
    pub fn label_key(&self) -> &'static str {
        match self {
            ReactionClass::Combination => "combination",
            ReactionClass::Decomposition => "decomposition",
            ReactionClass::Displacement => "displacement",
            ReactionClass::Other => "other",
        }
    }
}

/// error types for equation parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReactionParseError {
    #[error("expected exactly one reaction arrow in {0:?}")]
    MalformedEquation(String),
    #[error("no compound terms on one side of {0:?}")]
    EmptySide(String),
}

/// One parsed reaction equation. Immutable snapshot of a single parse:
/// the term lists keep the left-to-right order of the input and `eq`
/// keeps the source text verbatim for display and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalEquation {
    pub reactants: Vec<String>,
    pub products: Vec<String>,
    pub classification: ReactionClass,
    pub eq: String,
    /// always false: stoichiometric balancing is not implemented
    pub balanced: bool,
}

impl ChemicalEquation {
    /// all compound terms of the equation, deduplicated, in order of occurrence
    pub fn substances(&self) -> Vec<String> {
        let mut substances: Vec<String> = Vec::new();
        for term in self.reactants.iter().chain(self.products.iter()) {
            if !substances.contains(term) {
                substances.push(term.clone());
            }
        }
        substances
    }
}

/// Parse a textual reaction equation like "2H2 + O2 → 2H2O" or
/// "Zn + 2HCl -> ZnCl2 + H2". Both arrow spellings are accepted
/// identically. Compound terms are whatever non-empty strings stand
/// between the `+` separators; they are not checked against any table
/// of known substances.
pub fn parse_reaction_equation(input: &str) -> Result<ChemicalEquation, ReactionParseError> {
    let arrow = Regex::new(r"→|->").unwrap();
    let sides: Vec<&str> = arrow.split(input).collect();
    if sides.len() != 2 {
        warn!("expected exactly one reaction arrow: {:?}", input);
        return Err(ReactionParseError::MalformedEquation(input.to_string()));
    }

    let reactants = split_side(sides[0]);
    let products = split_side(sides[1]);
    if reactants.is_empty() || products.is_empty() {
        warn!("one side of {:?} has no compound terms", input);
        return Err(ReactionParseError::EmptySide(input.to_string()));
    }

    let classification = classify_reaction(reactants.len(), products.len());
    Ok(ChemicalEquation {
        reactants,
        products,
        classification,
        eq: input.to_string(),
        balanced: false,
    })
}

/// Classification is a pure function of the two term counts.
pub fn classify_reaction(n_reactants: usize, n_products: usize) -> ReactionClass {
    if n_reactants > 1 && n_products == 1 {
        ReactionClass::Combination
    } else if n_reactants == 1 && n_products > 1 {
        ReactionClass::Decomposition
    } else if n_reactants == 2 && n_products == 2 {
        ReactionClass::Displacement
    } else {
        ReactionClass::Other
    }
}

fn split_side(side: &str) -> Vec<String> {
    side.split('+')
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
        .map(|term| term.to_string())
        .collect()
}
