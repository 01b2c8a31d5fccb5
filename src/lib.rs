#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Formulas;
#[allow(non_snake_case)]
pub mod Reactions;
#[allow(non_snake_case)]
pub mod Visualization;
pub mod concepts;
pub mod locale;
