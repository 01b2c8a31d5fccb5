use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One (element symbol, count) pair extracted from a compound formula,
/// e.g. "H2O" yields (H, 2) and (O, 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaToken {
    pub element: String,
    pub count: usize,
}

/// Lazy scanner over a compound formula. Matches runs of
/// "uppercase letter, optional lowercase letter, optional digits";
/// anything between matches (brackets, phase marks, stray punctuation)
/// is skipped without error. The same input always yields the same
/// token sequence, call [`tokenize`] again to restart.
pub struct FormulaTokens<'a> {
    formula: &'a str,
    pos: usize,
    re: Regex,
}

impl<'a> Iterator for FormulaTokens<'a> {
    type Item = FormulaToken;

    fn next(&mut self) -> Option<FormulaToken> {
        if self.pos >= self.formula.len() {
            return None;
        }
        let rest = &self.formula[self.pos..];
        let caps = self.re.captures(rest)?;
        let matched = caps.get(0).unwrap();
        self.pos += matched.end();
        let element = caps.get(1).unwrap().as_str().to_string();
        let digits = caps.get(2).unwrap().as_str();
        let count = if digits.is_empty() {
            1
        } else {
            digits.parse().unwrap_or(1)
        };
        Some(FormulaToken { element, count })
    }
}

/// Scan `formula` left to right and produce its (element, count) tokens.
/// The tokenizer is display-oriented: symbols are not checked against the
/// periodic table and malformed spans are dropped silently.
pub fn tokenize(formula: &str) -> FormulaTokens<'_> {
    let re = Regex::new(r"([A-Z][a-z]?)(\d*)").unwrap();
    FormulaTokens {
        formula,
        pos: 0,
        re,
    }
}

/// Fold the token stream of `formula` into a map of element -> total atom count.
/// Repeated symbols accumulate, so "C5H6OOH" gives {"C": 5, "H": 7, "O": 2}.
pub fn atomic_composition(formula: &str) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokenize(formula) {
        *counts.entry(token.element).or_insert(0) += token.count;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(formula: &str) -> Vec<(String, usize)> {
        tokenize(formula)
            .map(|t| (t.element, t.count))
            .collect()
    }

    #[test]
    fn test_tokenize_water() {
        assert_eq!(
            collect("H2O"),
            vec![("H".to_string(), 2), ("O".to_string(), 1)]
        );
    }

    #[test]
    fn test_tokenize_two_letter_symbols() {
        assert_eq!(
            collect("CaCO3"),
            vec![
                ("Ca".to_string(), 1),
                ("C".to_string(), 1),
                ("O".to_string(), 3)
            ]
        );
        assert_eq!(
            collect("NaCl"),
            vec![("Na".to_string(), 1), ("Cl".to_string(), 1)]
        );
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert_eq!(collect(""), vec![]);
    }

    #[test]
    fn test_tokenize_skips_malformed_spans() {
        // leading stoichiometric prefix and phase mark are not element tokens
        assert_eq!(
            collect("2H2O"),
            vec![("H".to_string(), 2), ("O".to_string(), 1)]
        );
        assert_eq!(
            collect("H2O(g)"),
            vec![("H".to_string(), 2), ("O".to_string(), 1)]
        );
        assert_eq!(collect("+ -> 123 xyz"), vec![]);
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let first: Vec<_> = tokenize("CH4").collect();
        let second: Vec<_> = tokenize("CH4").collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_multidigit_count() {
        assert_eq!(collect("C12"), vec![("C".to_string(), 12)]);
    }

    #[test]
    fn test_atomic_composition_accumulates() {
        let counts = atomic_composition("C5H6OOH");
        let expected = HashMap::from([
            ("C".to_string(), 5),
            ("H".to_string(), 7),
            ("O".to_string(), 2),
        ]);
        assert_eq!(counts, expected);
    }

    #[test]
    fn test_atomic_composition_empty() {
        assert!(atomic_composition("").is_empty());
    }
}
