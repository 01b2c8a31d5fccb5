/// The module takes a reaction equation given as a string, splits it into
/// reactant and product compound lists and classifies the reaction shape
/// from the two list lengths. Any non-empty trimmed string between the `+`
/// separators counts as a compound; nothing is validated against real
/// chemistry.
///
///  # Examples
/// ```
/// use ChemCode::Reactions::equation_parser::{parse_reaction_equation, ReactionClass};
/// let parsed = parse_reaction_equation("2H2 + O2 → 2H2O").unwrap();
/// assert_eq!(parsed.reactants, vec!["2H2".to_string(), "O2".to_string()]);
/// assert_eq!(parsed.classification, ReactionClass::Combination);
/// ```
pub mod equation_parser;
pub mod equation_parser_tests;
/// Built-in library of well-known classroom reactions: load, search by name
/// or equation, analyze all entries with the equation parser, pretty-print
/// and export the result.
pub mod reaction_library;
