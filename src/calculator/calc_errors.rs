// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
use std::fmt;

/// Error types of the calculator. The polynomial engine itself never fails; these are
/// detected by the parser, the command reader and the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// letter-initial line that is not a known command
    WrongCommand,
    /// line that is neither ignored nor a command and does not parse as a polynomial
    WrongPolynomial,
    /// not enough polynomials on the stack
    StackUnderflow,
    /// missing or malformed variable index of `DEG_BY`
    DegByWrongVariable,
    /// missing or malformed point of `AT`
    AtWrongValue,
    /// missing or malformed parameter of `COMPOSE`
    ComposeWrongParameter,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalcError::WrongCommand => write!(f, "WRONG COMMAND"),
            CalcError::WrongPolynomial => write!(f, "WRONG POLY"),
            CalcError::StackUnderflow => write!(f, "STACK UNDERFLOW"),
            CalcError::DegByWrongVariable => write!(f, "DEG BY WRONG VARIABLE"),
            CalcError::AtWrongValue => write!(f, "AT WRONG VALUE"),
            CalcError::ComposeWrongParameter => write!(f, "COMPOSE WRONG PARAMETER"),
        }
    }
}

impl std::error::Error for CalcError {}

/// A calculator error tied to the input line it happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineError {
    pub line_number: usize,
    pub error: CalcError,
}

impl LineError {
    pub fn new(line_number: usize, error: CalcError) -> Self {
        LineError { line_number, error }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ERROR {} {}", self.line_number, self.error)
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
