// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! # Polynomial stack calculator
//!
//! Text front end of the polynomial engine: a line parser for the polynomial notation, the
//! command vocabulary, a stack of polynomials and the line-by-line interpreter.
//!
//! ```text
//! (1,2)+(3,0)     push 3 + x0^2
//! CLONE           duplicate the top
//! MUL             pop two, push the product
//! PRINT           (9,0)+(6,2)+(1,4)
//! ```
//! Malformed lines produce `ERROR <line> <MESSAGE>` on the error stream and are otherwise
//! skipped.
/// line interpreter
pub mod calc_engine;
/// error messages
pub mod calc_errors;
/// command vocabulary
pub mod commands;
/// text notation for polynomials
pub mod poly_parser;
/// stack of polynomials
pub mod poly_stack;

pub use calc_engine::Calculator;
pub use calc_errors::{CalcError, LineError};
pub use commands::Command;
pub use poly_stack::PolyStack;
