//! # Locale Module
//!
//! ## Purpose
//! Multilingual labels for the display layer. The catalog is an immutable
//! mapping from (key, language) to string: it is built once, handed to
//! whoever renders text and never reached through ambient global state.
//! Lookups of unknown keys fall back to the key itself, so a missing
//! translation degrades to readable English-ish text instead of failing.
//!
//! ## Usage Pattern
//! ```rust
//! use ChemCode::locale::{Language, Translations};
//! let tr = Translations::default_catalog();
//! assert_eq!(tr.translate("reactants", Language::En), "Reactants");
//! assert_eq!(tr.translate("noSuchKey", Language::Hi), "noSuchKey");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// display languages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Mr,
}

impl Language {
    pub fn all() -> [Language; 3] {
        [Language::En, Language::Hi, Language::Mr]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Language::En => 0,
            Language::Hi => 1,
            Language::Mr => 2,
        }
    }
}

/// Immutable translation catalog. Entries are [en, hi, mr] triples.
#[derive(Debug, Clone)]
pub struct Translations {
    catalog: HashMap<&'static str, [&'static str; 3]>,
}

impl Translations {
    /// The catalog shipped with the application.
    pub fn default_catalog() -> Self {
        let mut catalog: HashMap<&'static str, [&'static str; 3]> = HashMap::new();
        catalog.insert("appName", ["NAJ's ChemCode", "NAJ's ChemCode", "NAJ's ChemCode"]);
        catalog.insert("home", ["Home", "होम", "होम"]);
        catalog.insert("concepts", ["Concepts", "अवधारणाएं", "संकल्पना"]);
        catalog.insert("periodicTable", ["Periodic Table", "आवर्त सारणी", "आवर्त सारणी"]);
        catalog.insert("reactions", ["Reactions", "प्रतिक्रियाएं", "प्रतिक्रिया"]);
        catalog.insert("atomicStructure", ["Atomic Structure", "परमाणु संरचना", "अणू रचना"]);
        catalog.insert("bonding", ["Chemical Bonding", "रासायनिक बंधन", "रासायनिक बंध"]);
        catalog.insert("acidsAndBases", ["Acids and Bases", "अम्ल और क्षार", "आम्ल आणि क्षार"]);
        catalog.insert("reactionTypes", ["Reaction Types", "प्रतिक्रिया के प्रकार", "प्रतिक्रियांचे प्रकार"]);
        catalog.insert("enterReaction", ["Enter Chemical Reaction", "रासायनिक प्रतिक्रिया दर्ज करें", "रासायनिक प्रतिक्रिया प्रविष्ट करा"]);
        catalog.insert("visualBuilder", ["Visual Builder", "विजुअल बिल्डर", "व्हिज्युअल बिल्डर"]);
        catalog.insert("textInput", ["Text Input", "टेक्स्ट इनपुट", "मजकूर इनपुट"]);
        catalog.insert("analyze", ["Analyze", "विश्लेषण करें", "विश्लेषण करा"]);
        catalog.insert("exportPDF", ["Export PDF", "PDF निर्यात करें", "PDF निर्यात करा"]);
        catalog.insert("exportPNG", ["Export PNG", "PNG निर्यात करें", "PNG निर्यात करा"]);
        catalog.insert("reactants", ["Reactants", "अभिकारक", "अभिकारक"]);
        catalog.insert("products", ["Products", "उत्पाद", "उत्पादने"]);
        catalog.insert("reactionType", ["Reaction Type", "प्रतिक्रिया प्रकार", "प्रतिक्रिया प्रकार"]);
        catalog.insert("combination", ["Combination", "संयोजन", "संयोजन"]);
        catalog.insert("decomposition", ["Decomposition", "अपघटन", "विघटन"]);
        catalog.insert("displacement", ["Displacement", "विस्थापन", "विस्थापन"]);
        catalog.insert("redox", ["Redox", "रेडॉक्स", "रेडॉक्स"]);
        catalog.insert("ionic", ["Ionic Bonding", "आयनिक बंधन", "आयनिक बंध"]);
        catalog.insert("covalent", ["Covalent Bonding", "सहसंयोजक बंधन", "सहसंयोजक बंध"]);
        catalog.insert("metallic", ["Metallic Bonding", "धात्विक बंधन", "धातुबंध"]);
        catalog.insert("atomicStructureDesc", [
            "Atoms consist of a nucleus containing protons and neutrons, surrounded by electrons in energy levels.",
            "परमाणु में एक नाभिक होता है जिसमें प्रोटॉन और न्यूट्रॉन होते हैं, जो ऊर्जा स्तरों में इलेक्ट्रॉनों से घिरा होता है।",
            "अणूमध्ये प्रोटॉन आणि न्यूट्रॉन असलेले केंद्रक असते, ज्याभोवती ऊर्जा स्तरांमध्ये इलेक्ट्रॉन असतात।",
        ]);
        catalog.insert("ionicDesc", [
            "Ionic bonding involves the transfer of electrons from one atom to another, forming ions.",
            "आयनिक बंधन में एक परमाणु से दूसरे परमाणु में इलेक्ट्रॉनों का स्थानांतरण होता है, जिससे आयन बनते हैं।",
            "आयनिक बंधनामध्ये एका अणूपासून दुसऱ्या अणूकडे इलेक्ट्रॉनांचे स्थानांतरण होते, ज्यामुळे आयन तयार होतात.",
        ]);
        catalog.insert("covalentDesc", [
            "Covalent bonding involves the sharing of electrons between atoms.",
            "सहसंयोजक बंधन में परमाणुओं के बीच इलेक्ट्रॉनों की साझेदारी होती है।",
            "सहसंयोजक बंधनामध्ये अणूंमध्ये इलेक्ट्रॉनांची सामायिक होते.",
        ]);
        catalog.insert("metallicDesc", [
            "Metallic bonding involves a sea of delocalized electrons shared among metal atoms.",
            "धात्विक बंधन में धातु परमाणुओं के बीच साझा किए गए विस्थानिक इलेक्ट्रॉनों का सागर शामिल है।",
            "धातुबंधामध्ये धातूच्या अणूंमध्ये सामायिक केलेल्या विस्थापित इलेक्ट्रॉनांचा समुद्र असतो.",
        ]);
        catalog.insert("explore", ["Explore Chemistry", "रसायन विज्ञान का अन्वेषण करें", "रसायनशास्त्र एक्सप्लोर करा"]);
        catalog.insert("learnInteractive", [
            "Learn chemistry concepts interactively with 3D visualizations and step-by-step breakdowns.",
            "3D विज़ुअलाइज़ेशन और चरण-दर-चरण विवरण के साथ रसायन विज्ञान की अवधारणाओं को इंटरैक्टिव रूप से सीखें।",
            "3D व्हिज्युअलायझेशन आणि चरण-दर-चरण विश्लेषणासह रसायनशास्त्राच्या संकल्पना परस्परसंवादीपणे शिका.",
        ]);
        Self { catalog }
    }

    /// Look up `key` for `lang`; unknown keys come back unchanged.
    pub fn translate<'a>(&self, key: &'a str, lang: Language) -> &'a str {
        match self.catalog.get(key) {
            Some(entry) => entry[lang.index()],
            None => key,
        }
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.catalog.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reactions::equation_parser::ReactionClass;

    #[test]
    fn test_translate_known_key() {
        let tr = Translations::default_catalog();
        assert_eq!(tr.translate("products", Language::En), "Products");
        assert_eq!(tr.translate("products", Language::Hi), "उत्पाद");
        assert_eq!(tr.translate("products", Language::Mr), "उत्पादने");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let tr = Translations::default_catalog();
        assert_eq!(tr.translate("definitelyMissing", Language::Mr), "definitelyMissing");
    }

    #[test]
    fn test_classification_labels_resolve() {
        let tr = Translations::default_catalog();
        for class in [
            ReactionClass::Combination,
            ReactionClass::Decomposition,
            ReactionClass::Displacement,
        ] {
            assert!(tr.has_key(class.label_key()));
        }
        // "other" has no catalog entry on purpose, the fallback shows the tag itself
        assert_eq!(
            tr.translate(ReactionClass::Other.label_key(), Language::En),
            "other"
        );
    }

    #[test]
    fn test_language_tags() {
        assert_eq!(Language::En.as_str(), "en");
        assert_eq!(Language::all().len(), 3);
        let json = serde_json::to_string(&Language::Mr).unwrap();
        assert_eq!(json, "\"mr\"");
    }
}
