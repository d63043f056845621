// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
use crate::calculator::calc_errors::CalcError;
use crate::calculator::poly_parser::{parse_coeff_arg, parse_unsigned_arg};
use crate::polynomial::poly_engine::PolyCoeff;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Names of the calculator commands as they are spelled in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum CommandKind {
    #[strum(serialize = "ZERO")]
    Zero,
    #[strum(serialize = "IS_COEFF")]
    IsCoeff,
    #[strum(serialize = "IS_ZERO")]
    IsZero,
    #[strum(serialize = "CLONE")]
    Clone,
    #[strum(serialize = "ADD")]
    Add,
    #[strum(serialize = "MUL")]
    Mul,
    #[strum(serialize = "NEG")]
    Neg,
    #[strum(serialize = "SUB")]
    Sub,
    #[strum(serialize = "IS_EQ")]
    IsEq,
    #[strum(serialize = "DEG")]
    Deg,
    #[strum(serialize = "DEG_BY")]
    DegBy,
    #[strum(serialize = "AT")]
    At,
    #[strum(serialize = "PRINT")]
    Print,
    #[strum(serialize = "POP")]
    Pop,
    #[strum(serialize = "COMPOSE")]
    Compose,
}

impl CommandKind {
    /// commands followed by a space and a numeric argument
    pub fn takes_argument(self) -> bool {
        matches!(self, CommandKind::DegBy | CommandKind::At | CommandKind::Compose)
    }

    /// error reported when the argument is missing or malformed
    fn argument_error(self) -> CalcError {
        match self {
            CommandKind::DegBy => CalcError::DegByWrongVariable,
            CommandKind::At => CalcError::AtWrongValue,
            CommandKind::Compose => CalcError::ComposeWrongParameter,
            _ => CalcError::WrongCommand,
        }
    }
}

/// A command ready to run, with its argument already validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Zero,
    IsCoeff,
    IsZero,
    Clone,
    Add,
    Mul,
    Neg,
    Sub,
    IsEq,
    Deg,
    DegBy(usize),
    At(PolyCoeff),
    Print,
    Pop,
    Compose(usize),
}

impl Command {
    /// Reads a command line.
    ///
    /// `DEG_BY`, `AT` and `COMPOSE` are recognised by their prefix, so once the name matches
    /// any problem with what follows it is an argument error of that command. Every other
    /// command must match the whole line.
    pub fn parse(line: &str) -> Result<Command, CalcError> {
        let with_argument = CommandKind::iter()
            .filter(|kind| kind.takes_argument())
            .find(|kind| line.starts_with(<&'static str>::from(*kind)));
        if let Some(kind) = with_argument {
            let name: &'static str = kind.into();
            let arg = line[name.len()..]
                .strip_prefix(' ')
                .ok_or(kind.argument_error())?;
            return Command::with_argument(kind, arg).ok_or(kind.argument_error());
        }
        let kind = CommandKind::from_str(line).map_err(|_| CalcError::WrongCommand)?;
        Ok(match kind {
            CommandKind::Zero => Command::Zero,
            CommandKind::IsCoeff => Command::IsCoeff,
            CommandKind::IsZero => Command::IsZero,
            CommandKind::Clone => Command::Clone,
            CommandKind::Add => Command::Add,
            CommandKind::Mul => Command::Mul,
            CommandKind::Neg => Command::Neg,
            CommandKind::Sub => Command::Sub,
            CommandKind::IsEq => Command::IsEq,
            CommandKind::Deg => Command::Deg,
            CommandKind::Print => Command::Print,
            CommandKind::Pop => Command::Pop,
            CommandKind::DegBy | CommandKind::At | CommandKind::Compose => {
                return Err(kind.argument_error());
            }
        })
    }

    fn with_argument(kind: CommandKind, arg: &str) -> Option<Command> {
        match kind {
            CommandKind::DegBy => parse_unsigned_arg(arg).map(Command::DegBy),
            CommandKind::At => parse_coeff_arg(arg).map(Command::At),
            CommandKind::Compose => parse_unsigned_arg(arg).map(Command::Compose),
            _ => None,
        }
    }
}

/// What a line of input is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// empty line or a `#` comment
    Ignored,
    /// starts with a letter
    Command,
    /// anything else
    Polynomial,
}

impl LineKind {
    pub fn of(line: &str) -> LineKind {
        match line.chars().next() {
            None | Some('#') => LineKind::Ignored,
            Some(ch) if ch.is_ascii_alphabetic() => LineKind::Command,
            Some(_) => LineKind::Polynomial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_commands() {
        assert_eq!(Command::parse("ZERO"), Ok(Command::Zero));
        assert_eq!(Command::parse("IS_COEFF"), Ok(Command::IsCoeff));
        assert_eq!(Command::parse("IS_ZERO"), Ok(Command::IsZero));
        assert_eq!(Command::parse("CLONE"), Ok(Command::Clone));
        assert_eq!(Command::parse("ADD"), Ok(Command::Add));
        assert_eq!(Command::parse("MUL"), Ok(Command::Mul));
        assert_eq!(Command::parse("NEG"), Ok(Command::Neg));
        assert_eq!(Command::parse("SUB"), Ok(Command::Sub));
        assert_eq!(Command::parse("IS_EQ"), Ok(Command::IsEq));
        assert_eq!(Command::parse("DEG"), Ok(Command::Deg));
        assert_eq!(Command::parse("PRINT"), Ok(Command::Print));
        assert_eq!(Command::parse("POP"), Ok(Command::Pop));
    }

    #[test]
    fn test_wrong_commands() {
        for bad in ["add", "ADD ", "ADDX", "ZEROS", "DE", "DEGB", "P", "IS_EQ2", "CLONE\r", "X"] {
            assert_eq!(Command::parse(bad), Err(CalcError::WrongCommand), "line {:?}", bad);
        }
    }

    #[test]
    fn test_commands_with_arguments() {
        assert_eq!(Command::parse("DEG_BY 0"), Ok(Command::DegBy(0)));
        assert_eq!(Command::parse("DEG_BY 12"), Ok(Command::DegBy(12)));
        assert_eq!(Command::parse("AT -5"), Ok(Command::At(-5)));
        assert_eq!(Command::parse("AT 9223372036854775807"), Ok(Command::At(i64::MAX)));
        assert_eq!(Command::parse("COMPOSE 3"), Ok(Command::Compose(3)));
    }

    #[test]
    fn test_argument_errors() {
        for bad in ["DEG_BY", "DEG_BY ", "DEG_BY -1", "DEG_BY 1 ", "DEG_BY  1", "DEG_BYX", "DEG_BY a"] {
            assert_eq!(Command::parse(bad), Err(CalcError::DegByWrongVariable), "line {:?}", bad);
        }
        for bad in ["AT", "AT ", "AT x", "AT 1.5", "ATX", "AT 9223372036854775808", "AT +1"] {
            assert_eq!(Command::parse(bad), Err(CalcError::AtWrongValue), "line {:?}", bad);
        }
        for bad in ["COMPOSE", "COMPOSE ", "COMPOSE -1", "COMPOSEX", "COMPOSE 2x"] {
            assert_eq!(Command::parse(bad), Err(CalcError::ComposeWrongParameter), "line {:?}", bad);
        }
    }

    #[test]
    fn test_command_names_round_trip() {
        for kind in CommandKind::iter() {
            let name = kind.to_string();
            assert_eq!(CommandKind::from_str(&name), Ok(kind));
        }
    }

    #[test]
    fn test_line_kind() {
        assert_eq!(LineKind::of(""), LineKind::Ignored);
        assert_eq!(LineKind::of("# comment"), LineKind::Ignored);
        assert_eq!(LineKind::of("ADD"), LineKind::Command);
        assert_eq!(LineKind::of("zero"), LineKind::Command);
        assert_eq!(LineKind::of("(1,2)"), LineKind::Polynomial);
        assert_eq!(LineKind::of("-3"), LineKind::Polynomial);
        assert_eq!(LineKind::of(" ADD"), LineKind::Polynomial);
    }
}
