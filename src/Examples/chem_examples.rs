pub fn chem_examples(task: usize) {
    //

    match task {
        0 => {
            // REACTION LIBRARY ANALYSIS
            use crate::Reactions::equation_parser::ReactionClass;
            use crate::Reactions::reaction_library::ReactionLibrary;
            let mut library = ReactionLibrary::new();
            library.open_common_library();
            library.analyze_all();
            assert_eq!(library.analyzed.len(), library.entries.len());
            let water = library.search_by_name("Water Formation").unwrap();
            println!("water formation equation: {}", water.eq);
            let parsed = &library.analyzed[0];
            assert_eq!(parsed.classification, ReactionClass::Combination);
            library.pretty_print_analyzed();
        }
        1 => {
            //  Calculation of atomic composition, molar masses and matrix of atomic composition
            use crate::Formulas::formula_tokenizer::atomic_composition;
            use crate::Formulas::molmass::{
                calculate_molar_mass, calculate_molar_mass_of_vector_of_subs,
                create_elem_composition_matrix,
            };
            let formula = "C6H8O6";
            let (molar_mass, element_composition) = calculate_molar_mass(formula);
            println!("Element counts: {:?}", element_composition);
            println!("Molar mass: {:?} g/mol", molar_mass);

            let composition = atomic_composition("CaCO3");
            println!("{:?}", composition);

            let vec_of_formulae = vec!["H2O", "NaCl", "C6H8O6"];
            let expected_molar_masses = vec![18.01528, 58.44316, 176.12];
            let calculated_molar_masses = calculate_molar_mass_of_vector_of_subs(vec_of_formulae);

            for (i, &expected_molar_mass) in expected_molar_masses.iter().enumerate() {
                println!("molar mass: {:?} g/mol", calculated_molar_masses[i]);
                assert!((calculated_molar_masses[i] - expected_molar_mass).abs() < 1e-2);
            }

            let vec_of_formulae = vec!["H2O", "NaCl", "C3H8", "CH4"]; // 5 elements
            let (matrix, elements) = create_elem_composition_matrix(vec_of_formulae);
            println!("elements: {:?}", elements);
            println!("{}", matrix);
        }
        2 => {
            // PERIODIC TABLE
            use crate::Formulas::periodic_table::{element_by_symbol, pretty_print_periodic_table};
            pretty_print_periodic_table();
            let fe = element_by_symbol("Fe").unwrap();
            println!(
                "{} ({}): Z = {}, M = {} g/mol, {}",
                fe.name,
                fe.symbol,
                fe.atomic_number,
                fe.atomic_mass,
                fe.electron_config
            );
        }
        3 => {
            // MOLECULE LAYOUT FOR THE VIEWER
            use crate::Visualization::molecule_layout::{
                MoleculeScene, element_color, perspective_scale,
            };
            let scene = MoleculeScene::new("H2O");
            println!("layout of {}:", scene.formula);
            for atom in scene.rotated(0.5) {
                println!(
                    "  {} at ({:.2}, {:.2}, {:.2}) scale {:.3} color {}",
                    atom.element,
                    atom.x,
                    atom.y,
                    atom.z,
                    perspective_scale(atom.z),
                    element_color(&atom.element)
                );
            }
        }
        4 => {
            // STUDY CATALOGUE IN ALL LANGUAGES
            use crate::Reactions::reaction_library::ReactionLibrary;
            use crate::concepts::{StudyContent, study_catalogue};
            use crate::locale::{Language, Translations};
            let tr = Translations::default_catalog();
            let mut library = ReactionLibrary::new();
            library.open_common_library();
            for item in study_catalogue(&library.entries) {
                for lang in Language::all() {
                    println!("[{}] {}", lang.as_str(), item.title(&tr, lang));
                }
                for line in item.body_lines(&tr, Language::En) {
                    println!("   {}", line);
                }
            }
        }
        _ => {
            println!("there is no task with number {}", task);
        }
    }
}
