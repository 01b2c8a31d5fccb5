/// The module takes a compound formula given as a string and produces its
/// sequence of (element symbol, count) tokens. Tokenizing is lenient by
/// design: the tokenizer serves display and layout, not chemical validation,
/// so spans that do not look like an element symbol are skipped silently.
///
///  # Examples
/// ```
/// use ChemCode::Formulas::formula_tokenizer::{tokenize, atomic_composition};
/// let tokens: Vec<_> = tokenize("CaCO3").collect();
/// assert_eq!(tokens.len(), 3);
/// let composition = atomic_composition("H2O");
/// assert_eq!(composition.get("H"), Some(&2));
/// ```
pub mod formula_tokenizer;
/// Module to calculate the atomic composition and molar mass of a chemical formula
///
///  # Examples
/// ```
/// use ChemCode::Formulas::molmass::calculate_molar_mass;
/// let (molar_mass, element_composition) = calculate_molar_mass("C6H8O6");
/// println!("Element counts: {:?}", element_composition);
/// println!("Molar mass: {:?} g/mol", molar_mass);
/// ```
pub mod molmass;
/// Static periodic table data: symbol, name, atomic number and mass, period,
/// group, category and electron configuration for the elements the
/// application displays. Pure data, consulted by the molar mass calculator
/// and by the display layer; the tokenizer never validates against it.
pub mod periodic_table;
