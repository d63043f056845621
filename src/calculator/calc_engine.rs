// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! # Stack calculator
//!
//! Reads lines, pushes polynomials and runs commands on a [`PolyStack`]. Results go to the
//! output writer one per line, errors go to the error writer as `ERROR <line> <MESSAGE>`.
//! A failed line never changes the stack and never stops the processing of later lines.
//!
//! # Example
//! ```
//! use RustedPolyCalc::calculator::calc_engine::Calculator;
//! let input = "(1,1)\n(2,0)+(3,1)\nADD\nPRINT\nSUB\n";
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! Calculator::new().run(input.as_bytes(), &mut out, &mut err).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "(2,0)+(4,1)\n");
//! assert_eq!(String::from_utf8(err).unwrap(), "ERROR 5 STACK UNDERFLOW\n");
//! ```
use crate::calculator::calc_errors::{CalcError, LineError};
use crate::calculator::commands::{Command, LineKind};
use crate::calculator::poly_parser::parse_poly;
use crate::calculator::poly_stack::PolyStack;
use crate::polynomial::poly_engine::Poly;
use log::{debug, info};
use std::io::{self, BufRead, Write};

fn bool_output(b: bool) -> Option<String> {
    Some(if b { "1" } else { "0" }.to_string())
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    pub stack: PolyStack,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            stack: PolyStack::new(),
        }
    }

    /// Runs a single command. Returns the line to print, if the command prints anything.
    ///
    /// Every command checks the depth of the stack before touching it, so on error the
    /// stack is left as it was.
    pub fn execute(&mut self, cmd: Command) -> Result<Option<String>, CalcError> {
        let stack = &mut self.stack;
        match cmd {
            Command::Zero => {
                stack.push(Poly::zero());
                Ok(None)
            }
            Command::IsCoeff => Ok(bool_output(stack.peek()?.is_coeff())),
            Command::IsZero => Ok(bool_output(stack.peek()?.is_zero())),
            Command::Clone => {
                let top = stack.peek()?.clone();
                stack.push(top);
                Ok(None)
            }
            Command::Add | Command::Mul | Command::Sub => {
                stack.ensure(2)?;
                let top = stack.pop()?;
                let below = stack.pop()?;
                let result = match cmd {
                    Command::Add => top + below,
                    Command::Mul => top * below,
                    _ => below - top,
                };
                stack.push(result);
                Ok(None)
            }
            Command::Neg => {
                let top = stack.pop()?;
                stack.push(-top);
                Ok(None)
            }
            Command::IsEq => {
                let top = stack.peek_at(0)?;
                let below = stack.peek_at(1)?;
                Ok(bool_output(top.is_eq(below)))
            }
            Command::Deg => Ok(Some(stack.peek()?.deg().to_string())),
            Command::DegBy(idx) => Ok(Some(stack.peek()?.deg_by(idx).to_string())),
            Command::At(x) => {
                let top = stack.pop()?;
                stack.push(top.at(x));
                Ok(None)
            }
            Command::Print => Ok(Some(stack.peek()?.to_string())),
            Command::Pop => {
                stack.pop()?;
                Ok(None)
            }
            Command::Compose(k) => {
                stack.ensure(k.saturating_add(1))?;
                let p = stack.pop()?;
                let q = stack.pop_many(k)?;
                stack.push(p.compose(&q));
                Ok(None)
            }
        }
    }

    /// Handles one line of input without its line terminator.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>, CalcError> {
        match LineKind::of(line) {
            LineKind::Ignored => Ok(None),
            LineKind::Command => {
                let cmd = Command::parse(line)?;
                debug!("command {:?}, stack depth {}", cmd, self.stack.len());
                self.execute(cmd)
            }
            LineKind::Polynomial => {
                let p = parse_poly(line)?;
                self.stack.push(p);
                Ok(None)
            }
        }
    }

    /// Processes the whole input. Lines are separated by `'\n'` and numbered from 1; bytes
    /// that are not valid UTF-8 end up as replacement characters and so make the line invalid.
    /// Only I/O failures of the writers end the run early.
    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        let mut lines = 0usize;
        let mut failures = 0usize;
        for (idx, raw) in input.split(b'\n').enumerate() {
            let raw = raw?;
            let line = String::from_utf8_lossy(&raw);
            lines = idx + 1;
            match self.process_line(&line) {
                Ok(Some(text)) => writeln!(out, "{}", text)?,
                Ok(None) => {}
                Err(e) => {
                    failures += 1;
                    let report = LineError::new(idx + 1, e);
                    debug!("{}", report);
                    writeln!(err, "{}", report)?;
                }
            }
        }
        out.flush()?;
        err.flush()?;
        info!(
            "processed {} lines, {} errors, {} polynomials left on the stack",
            lines,
            failures,
            self.stack.len()
        );
        Ok(())
    }
}
