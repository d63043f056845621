// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! parse a line of the calculator's polynomial notation into a canonical polynomial.
//!
//! grammar (no whitespace is allowed anywhere):
//! ```text
//!   poly  := coeff | mono ( '+' mono )*
//!   mono  := '(' poly ',' exp ')'
//!   coeff := '-'? digit+        fits in i64
//!   exp   := '-'? digit+        value in 0..=MAX_EXP
//! ```
//! monomials may come in any order, repeat exponents or have zero coefficients: the parsed
//! terms are normalized like any other raw term list.
//!
//! A line nested deeper than [`MAX_NESTING`] parentheses is rejected before parsing, which
//! bounds the recursion of the parser and of every later operation on the value.
//!
//!# Example
//! ```
//! use RustedPolyCalc::calculator::poly_parser::parse_poly;
//! let p = parse_poly("(2,3)+(1,0)+(5,3)").unwrap();
//! assert_eq!(p.to_string(), "(1,0)+(7,3)");
//! ```
use crate::calculator::calc_errors::CalcError;
use crate::polynomial::poly_engine::{MAX_EXP, Poly, PolyCoeff, PolyExp, Term};
use nom::{
    IResult, Parser,
    branch::alt,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, map_res, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair, separated_pair},
};

/// deepest parenthesis nesting accepted on one line
pub const MAX_NESTING: usize = 256;

/// largest number of parentheses open at any point of the line
fn nesting_depth(line: &str) -> usize {
    line.bytes()
        .scan(0usize, |depth, b| {
            match b {
                b'(' => *depth += 1,
                b')' => *depth = depth.saturating_sub(1),
                _ => {}
            }
            Some(*depth)
        })
        .max()
        .unwrap_or(0)
}

/// optional minus followed by decimal digits
fn signed_digits(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('-')), digit1)).parse(input)
}

/// Parses a coefficient; values outside of `i64` are rejected.
pub fn parse_coeff(input: &str) -> IResult<&str, PolyCoeff> {
    map_res(signed_digits, |s: &str| s.parse::<PolyCoeff>()).parse(input)
}

/// Parses an exponent: a signed decimal whose value lies in `0..=MAX_EXP`.
pub fn parse_exp(input: &str) -> IResult<&str, PolyExp> {
    map_res(signed_digits, |s: &str| {
        s.parse::<i64>()
            .ok()
            .and_then(|e| PolyExp::try_from(e).ok())
            .filter(|e| *e <= MAX_EXP)
            .ok_or(CalcError::WrongPolynomial)
    })
    .parse(input)
}

/// Parses an unsigned decimal (digits only).
pub fn parse_unsigned(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>()).parse(input)
}

fn parse_mono(input: &str) -> IResult<&str, Term> {
    map(
        delimited(
            char('('),
            separated_pair(parse_poly_expr, char(','), parse_exp),
            char(')'),
        ),
        |(coeff, exp)| Term::new(exp, coeff),
    )
    .parse(input)
}

fn parse_poly_expr(input: &str) -> IResult<&str, Poly> {
    alt((
        map(separated_list1(char('+'), parse_mono), Poly::from_terms),
        map(parse_coeff, Poly::from_coeff),
    ))
    .parse(input)
}

/// Parses a whole line as a polynomial.
pub fn parse_poly(line: &str) -> Result<Poly, CalcError> {
    if nesting_depth(line) > MAX_NESTING {
        return Err(CalcError::WrongPolynomial);
    }
    all_consuming(parse_poly_expr)
        .parse(line)
        .map(|(_, p)| p)
        .map_err(|_| CalcError::WrongPolynomial)
}

/// Parses a whole command argument as a coefficient.
pub fn parse_coeff_arg(arg: &str) -> Option<PolyCoeff> {
    all_consuming(parse_coeff).parse(arg).ok().map(|(_, v)| v)
}

/// Parses a whole command argument as an unsigned number.
pub fn parse_unsigned_arg(arg: &str) -> Option<usize> {
    all_consuming(parse_unsigned).parse(arg).ok().map(|(_, v)| v)
}
