//! examples of usage of RustedPolyCalc
/// building polynomials, arithmetic, evaluation, composition and a calculator session
pub mod poly_examples;
