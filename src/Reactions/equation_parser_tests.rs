/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Reactions::equation_parser::{
        ChemicalEquation, ReactionClass, ReactionParseError, classify_reaction,
        parse_reaction_equation,
    };

    #[test]
    fn test_parse_combination() {
        let parsed = parse_reaction_equation("2H2 + O2 → 2H2O").unwrap();
        assert_eq!(parsed.reactants, vec!["2H2".to_string(), "O2".to_string()]);
        assert_eq!(parsed.products, vec!["2H2O".to_string()]);
        assert_eq!(parsed.classification, ReactionClass::Combination);
        assert_eq!(parsed.eq, "2H2 + O2 → 2H2O");
        assert_eq!(parsed.balanced, false);
    }

    #[test]
    fn test_parse_decomposition() {
        let parsed = parse_reaction_equation("CaCO3 → CaO + CO2").unwrap();
        assert_eq!(parsed.reactants, vec!["CaCO3".to_string()]);
        assert_eq!(parsed.products, vec!["CaO".to_string(), "CO2".to_string()]);
        assert_eq!(parsed.classification, ReactionClass::Decomposition);
    }

    #[test]
    fn test_parse_displacement() {
        let parsed = parse_reaction_equation("NaCl + AgNO3 → NaNO3 + AgCl").unwrap();
        assert_eq!(parsed.classification, ReactionClass::Displacement);
    }

    #[test]
    fn test_both_arrow_spellings_parse_identically() {
        let unicode = parse_reaction_equation("Zn + 2HCl → ZnCl2 + H2").unwrap();
        let ascii = parse_reaction_equation("Zn + 2HCl -> ZnCl2 + H2").unwrap();
        assert_eq!(unicode.reactants, ascii.reactants);
        assert_eq!(unicode.products, ascii.products);
        assert_eq!(unicode.classification, ascii.classification);
    }

    #[test]
    fn test_no_arrow_is_malformed() {
        let result = parse_reaction_equation("no arrow here");
        assert_eq!(
            result,
            Err(ReactionParseError::MalformedEquation(
                "no arrow here".to_string()
            ))
        );
    }

    #[test]
    fn test_two_arrows_is_malformed() {
        let result = parse_reaction_equation("A → B → C");
        assert!(matches!(
            result,
            Err(ReactionParseError::MalformedEquation(_))
        ));
    }

    #[test]
    fn test_empty_side() {
        let result = parse_reaction_equation("A + B → ");
        assert_eq!(
            result,
            Err(ReactionParseError::EmptySide("A + B → ".to_string()))
        );
        let result = parse_reaction_equation(" → C");
        assert!(matches!(result, Err(ReactionParseError::EmptySide(_))));
    }

    #[test]
    fn test_empty_terms_are_dropped() {
        // doubled plus and stray whitespace, terms survive trimmed and in order
        let parsed = parse_reaction_equation("  A +  + B →  C  ").unwrap();
        assert_eq!(parsed.reactants, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(parsed.products, vec!["C".to_string()]);
    }

    #[test]
    fn test_reparse_is_idempotent() {
        let first = parse_reaction_equation("CH4 + 2O2 → CO2 + 2H2O").unwrap();
        let second = parse_reaction_equation(&first.eq).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_by_counts_only() {
        assert_eq!(classify_reaction(2, 1), ReactionClass::Combination);
        assert_eq!(classify_reaction(3, 1), ReactionClass::Combination);
        assert_eq!(classify_reaction(1, 2), ReactionClass::Decomposition);
        assert_eq!(classify_reaction(2, 2), ReactionClass::Displacement);
        assert_eq!(classify_reaction(1, 1), ReactionClass::Other);
        assert_eq!(classify_reaction(3, 2), ReactionClass::Other);
    }

    #[test]
    fn test_substances_deduplicates_in_order() {
        let parsed = parse_reaction_equation("C + O2 → CO2 + C").unwrap();
        assert_eq!(
            parsed.substances(),
            vec!["C".to_string(), "O2".to_string(), "CO2".to_string()]
        );
    }

    #[test]
    fn test_equation_serialization_roundtrip() {
        let parsed = parse_reaction_equation("N2 + 3H2 → 2NH3").unwrap();
        let json = serde_json::to_string(&parsed).unwrap();
        assert!(json.contains("\"combination\""));
        let back: ChemicalEquation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, back);
    }
}
