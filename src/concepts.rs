//! # Concepts Module
//!
//! ## Purpose
//! The study catalogue of the application: the fixed set of chemistry
//! concepts (atomic structure, bonding kinds, acids and bases, reaction
//! types) with their localized key points and example formulas, unified
//! with the classroom reaction library behind one trait so the display
//! layer can list both the same way.
//!
//! Concept identifiers are a tagged enum; icons, gradients and other
//! rendering handles are NOT part of the data model here, the display
//! layer keeps its own identifier -> presentation mapping.

use crate::Reactions::equation_parser::parse_reaction_equation;
use crate::Reactions::reaction_library::LibraryEntry;
use crate::locale::{Language, Translations};
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

/// identifiers of the concept cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConceptId {
    #[serde(rename = "atomic")]
    AtomicStructure,
    #[serde(rename = "ionic")]
    IonicBonding,
    #[serde(rename = "covalent")]
    CovalentBonding,
    #[serde(rename = "metallic")]
    MetallicBonding,
    #[serde(rename = "acids")]
    AcidsAndBases,
    #[serde(rename = "reactions")]
    ReactionTypes,
}

impl ConceptId {
    pub fn all() -> [ConceptId; 6] {
        [
            ConceptId::AtomicStructure,
            ConceptId::IonicBonding,
            ConceptId::CovalentBonding,
            ConceptId::MetallicBonding,
            ConceptId::AcidsAndBases,
            ConceptId::ReactionTypes,
        ]
    }

    /// translation catalog key of the card title
    pub fn title_key(&self) -> &'static str {
        match self {
            ConceptId::AtomicStructure => "atomicStructure",
            ConceptId::IonicBonding => "ionic",
            ConceptId::CovalentBonding => "covalent",
            ConceptId::MetallicBonding => "metallic",
            ConceptId::AcidsAndBases => "acidsAndBases",
            ConceptId::ReactionTypes => "reactionTypes",
        }
    }

    /// translation catalog key of the one-line description. Two cards reuse
    /// their title key: they never had a separate description text.
    pub fn desc_key(&self) -> &'static str {
        match self {
            ConceptId::AtomicStructure => "atomicStructureDesc",
            ConceptId::IonicBonding => "ionicDesc",
            ConceptId::CovalentBonding => "covalentDesc",
            ConceptId::MetallicBonding => "metallicDesc",
            ConceptId::AcidsAndBases => "acidsAndBases",
            ConceptId::ReactionTypes => "reactionTypes",
        }
    }
}

/// One concept card: localized key points ([en, hi, mr] slices) and the
/// example formulas the molecule viewer renders for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptEntry {
    pub id: ConceptId,
    pub key_points: [&'static [&'static str]; 3],
    pub examples: &'static [&'static str],
}

impl ConceptEntry {
    pub fn key_points_for(&self, lang: Language) -> &'static [&'static str] {
        self.key_points[lang.index()]
    }
}

/// Localized access shared by everything the study catalogue lists.
#[enum_dispatch]
pub trait StudyContent {
    fn title(&self, tr: &Translations, lang: Language) -> String;
    fn summary(&self, tr: &Translations, lang: Language) -> String;
    fn body_lines(&self, tr: &Translations, lang: Language) -> Vec<String>;
    fn example_formulas(&self) -> Vec<String>;
}

impl StudyContent for ConceptEntry {
    fn title(&self, tr: &Translations, lang: Language) -> String {
        tr.translate(self.id.title_key(), lang).to_string()
    }

    fn summary(&self, tr: &Translations, lang: Language) -> String {
        tr.translate(self.id.desc_key(), lang).to_string()
    }

    fn body_lines(&self, _tr: &Translations, lang: Language) -> Vec<String> {
        self.key_points_for(lang)
            .iter()
            .map(|line| line.to_string())
            .collect()
    }

    fn example_formulas(&self) -> Vec<String> {
        self.examples.iter().map(|e| e.to_string()).collect()
    }
}

impl StudyContent for LibraryEntry {
    fn title(&self, _tr: &Translations, _lang: Language) -> String {
        self.name.clone()
    }

    fn summary(&self, _tr: &Translations, _lang: Language) -> String {
        self.eq.clone()
    }

    fn body_lines(&self, tr: &Translations, lang: Language) -> Vec<String> {
        match parse_reaction_equation(&self.eq) {
            Ok(parsed) => vec![
                format!(
                    "{}: {}",
                    tr.translate("reactants", lang),
                    parsed.reactants.join(", ")
                ),
                format!(
                    "{}: {}",
                    tr.translate("products", lang),
                    parsed.products.join(", ")
                ),
                format!(
                    "{}: {}",
                    tr.translate("reactionType", lang),
                    tr.translate(parsed.classification.label_key(), lang)
                ),
            ],
            Err(_) => vec![self.eq.clone()],
        }
    }

    fn example_formulas(&self) -> Vec<String> {
        parse_reaction_equation(&self.eq)
            .map(|parsed| parsed.substances())
            .unwrap_or_default()
    }
}

/// One item of the study catalogue.
#[enum_dispatch(StudyContent)]
#[derive(Debug, Clone)]
pub enum StudyItem {
    Concept(ConceptEntry),
    Reaction(LibraryEntry),
}

/// The six concept cards of the application with their original content.
pub fn concept_catalogue() -> Vec<ConceptEntry> {
    vec![
        ConceptEntry {
            id: ConceptId::AtomicStructure,
            key_points: [
                &[
                    "Protons: Positively charged particles in the nucleus",
                    "Neutrons: Neutral particles in the nucleus",
                    "Electrons: Negatively charged particles orbiting the nucleus",
                    "Atomic number = number of protons",
                    "Mass number = protons + neutrons",
                ],
                &[
                    "प्रोटॉन: नाभिक में धनात्मक आवेशित कण",
                    "न्यूट्रॉन: नाभिक में तटस्थ कण",
                    "इलेक्ट्रॉन: नाभिक के चारों ओर घूमने वाले ऋणात्मक आवेशित कण",
                    "परमाणु संख्या = प्रोटॉन की संख्या",
                    "द्रव्यमान संख्या = प्रोटॉन + न्यूट्रॉन",
                ],
                &[
                    "प्रोटॉन: केंद्रकातील धनात्मक आवेशित कण",
                    "न्यूट्रॉन: केंद्रकातील तटस्थ कण",
                    "इलेक्ट्रॉन: केंद्रकाभोवती फिरणारे ऋण आवेशित कण",
                    "अणुक्रमांक = प्रोटॉनची संख्या",
                    "वस्तुमान संख्या = प्रोटॉन + न्यूट्रॉन",
                ],
            ],
            examples: &["H", "O", "C"],
        },
        ConceptEntry {
            id: ConceptId::IonicBonding,
            key_points: [
                &[
                    "Transfer of electrons between atoms",
                    "Forms between metals and non-metals",
                    "Creates oppositely charged ions",
                    "Strong electrostatic attraction",
                    "High melting and boiling points",
                ],
                &[
                    "परमाणुओं के बीच इलेक्ट्रॉनों का स्थानांतरण",
                    "धातुओं और अधातुओं के बीच बनता है",
                    "विपरीत आवेशित आयन बनाता है",
                    "मजबूत स्थिरवैद्युत आकर्षण",
                    "उच्च गलनांक और क्वथनांक",
                ],
                &[
                    "अणूंमध्ये इलेक्ट्रॉनांचे स्थानांतरण",
                    "धातू आणि अधातूंमध्ये तयार होते",
                    "विरुद्ध आवेशित आयन तयार करते",
                    "मजबूत स्थिरवैद्युत आकर्षण",
                    "उच्च वितळण्याचा आणि उकळण्याचा बिंदू",
                ],
            ],
            examples: &["NaCl", "MgO", "CaCl2"],
        },
        ConceptEntry {
            id: ConceptId::CovalentBonding,
            key_points: [
                &[
                    "Sharing of electrons between atoms",
                    "Forms between non-metals",
                    "Can form single, double, or triple bonds",
                    "Lower melting and boiling points",
                    "Can be polar or non-polar",
                ],
                &[
                    "परमाणुओं के बीच इलेक्ट्रॉनों की साझेदारी",
                    "अधातुओं के बीच बनता है",
                    "एकल, दोहरे या तिहरे बंधन बना सकता है",
                    "कम गलनांक और क्वथनांक",
                    "ध्रुवीय या अध्रुवीय हो सकता है",
                ],
                &[
                    "अणूंमध्ये इलेक्ट्रॉनांची सामायिकता",
                    "अधातूंमध्ये तयार होते",
                    "एकल, दुहेरी किंवा तिहेरी बंध तयार करू शकते",
                    "कमी वितळण्याचा आणि उकळण्याचा बिंदू",
                    "ध्रुवीय किंवा अध्रुवीय असू शकते",
                ],
            ],
            examples: &["H2O", "CO2", "CH4"],
        },
        ConceptEntry {
            id: ConceptId::MetallicBonding,
            key_points: [
                &[
                    "Sea of delocalized electrons",
                    "Found in metal elements",
                    "Conducts electricity and heat",
                    "Malleable and ductile",
                    "Metallic luster",
                ],
                &[
                    "विस्थानिक इलेक्ट्रॉनों का सागर",
                    "धातु तत्वों में पाया जाता है",
                    "बिजली और गर्मी का संचालन करता है",
                    "लचीला और तन्य",
                    "धात्विक चमक",
                ],
                &[
                    "विस्थापित इलेक्ट्रॉनांचा समुद्र",
                    "धातू घटकांमध्ये आढळतो",
                    "वीज आणि उष्णता चालवते",
                    "लवचिक आणि तन्य",
                    "धातूची चमक",
                ],
            ],
            examples: &["Fe", "Cu", "Au"],
        },
        ConceptEntry {
            id: ConceptId::AcidsAndBases,
            key_points: [
                &[
                    "Acids: Donate H+ ions, pH < 7",
                    "Bases: Accept H+ ions, pH > 7",
                    "Neutralization: Acid + Base → Salt + Water",
                    "Indicators show pH changes",
                    "Strong vs weak acids/bases",
                ],
                &[
                    "अम्ल: H+ आयन दान करते हैं, pH < 7",
                    "क्षार: H+ आयन स्वीकार करते हैं, pH > 7",
                    "उदासीनीकरण: अम्ल + क्षार → लवण + जल",
                    "संकेतक pH परिवर्तन दिखाते हैं",
                    "प्रबल बनाम कमजोर अम्ल/क्षार",
                ],
                &[
                    "आम्ल: H+ आयन दान करतात, pH < 7",
                    "क्षार: H+ आयन स्वीकारतात, pH > 7",
                    "तटस्थीकरण: आम्ल + क्षार → मीठ + पाणी",
                    "सूचक pH बदल दर्शवितात",
                    "मजबूत विरुद्ध कमकुवत आम्ल/क्षार",
                ],
            ],
            examples: &["HCl", "NaOH", "H2SO4"],
        },
        ConceptEntry {
            id: ConceptId::ReactionTypes,
            key_points: [
                &[
                    "Combination: A + B → AB",
                    "Decomposition: AB → A + B",
                    "Displacement: AB + C → AC + B",
                    "Redox: Transfer of electrons",
                    "Double displacement: AB + CD → AD + CB",
                ],
                &[
                    "संयोजन: A + B → AB",
                    "अपघटन: AB → A + B",
                    "विस्थापन: AB + C → AC + B",
                    "रेडॉक्स: इलेक्ट्रॉनों का स्थानांतरण",
                    "दोहरा विस्थापन: AB + CD → AD + CB",
                ],
                &[
                    "संयोजन: A + B → AB",
                    "विघटन: AB → A + B",
                    "विस्थापन: AB + C → AC + B",
                    "रेडॉक्स: इलेक्ट्रॉनांचे स्थानांतरण",
                    "दुहेरी विस्थापन: AB + CD → AD + CB",
                ],
            ],
            examples: &["2H2 + O2 → 2H2O", "CaCO3 → CaO + CO2"],
        },
    ]
}

/// The full study catalogue: every concept card followed by every reaction
/// of the given library.
pub fn study_catalogue(library_entries: &[LibraryEntry]) -> Vec<StudyItem> {
    let mut items: Vec<StudyItem> = concept_catalogue()
        .into_iter()
        .map(StudyItem::from)
        .collect();
    items.extend(library_entries.iter().cloned().map(StudyItem::from));
    items
}
