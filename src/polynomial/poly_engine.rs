// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! # Polynomial Engine Module
//!
//! This module provides the value model of the calculator: sparse polynomials of an arbitrary
//! number of variables with fixed-width integer coefficients, stored recursively.
//!
//! ## Purpose
//!
//! A polynomial of variables x0, x1, x2, ... is seen as a polynomial of the outermost variable
//! x0 whose coefficients are polynomials of x1, x2, ..., and so on down to plain integers.
//!
//! ## Main Structures and Methods
//!
//! ### `Poly` Enum
//! - **Scalar**: `Scalar(i64)` - a constant, the leaf of the tree
//! - **Terms**: `Terms(Vec<Term>)` - sorted list of monomials of the outermost variable
//!
//! ### `Term` Struct
//! - `exp` - exponent of the outermost variable
//! - `coeff` - coefficient, a polynomial of the deeper variables
//!
//! ### Key Methods
//! - `from_terms(terms)` - build the canonical polynomial from a raw list of terms
//! - `zero()`, `from_coeff(c)` - constants
//! - `is_zero()`, `is_coeff()`, `is_canonical()` - structural tests
//!
//! ## Canonical Form
//!
//! Every polynomial produced by this crate obeys:
//! 1. exponents of a term list are strictly increasing
//! 2. no term has a zero coefficient
//! 3. a single term `x^0 * c` with scalar `c` is always stored as `Scalar(c)`,
//!    and an empty term list is always stored as `Scalar(0)`
//!
//! Because of that, structural equality is mathematical equality.

use itertools::Itertools;
use std::fmt;

/// coefficient type
pub type PolyCoeff = i64;
/// exponent type
pub type PolyExp = u32;
/// degree type, `-1` stands for the degree of the zero polynomial
pub type PolyDeg = i64;
/// the largest exponent of any term; products clamp to it
pub const MAX_EXP: PolyExp = i32::MAX as PolyExp;

/// Sparse polynomial of the outermost variable with polynomial coefficients.
///
/// # Examples
/// ```rust, ignore
/// use poly_engine::{Poly, Term};
/// // x0^2 * (1 + x1)
/// let inner = Poly::from_terms(vec![Term::new(0, Poly::from_coeff(1)), Term::new(1, Poly::from_coeff(1))]);
/// let p = Poly::from_terms(vec![Term::new(2, inner)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Poly {
    /// constant polynomial
    Scalar(PolyCoeff),
    /// sorted, non-empty list of monomials of the outermost variable
    Terms(Vec<Term>),
}

/// One monomial `coeff * x^exp` of the outermost variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    pub exp: PolyExp,
    pub coeff: Poly,
}

impl Term {
    pub fn new(exp: PolyExp, coeff: Poly) -> Self {
        Term { exp, coeff }
    }

    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }
}

impl Default for Poly {
    fn default() -> Self {
        Poly::zero()
    }
}

impl From<PolyCoeff> for Poly {
    fn from(c: PolyCoeff) -> Self {
        Poly::Scalar(c)
    }
}

impl Poly {
    //___________________________________CONSTRUCTION____________________________________

    /// the zero polynomial
    pub fn zero() -> Self {
        Poly::Scalar(0)
    }

    /// constant polynomial
    pub fn from_coeff(c: PolyCoeff) -> Self {
        Poly::Scalar(c)
    }

    /// Builds the canonical polynomial equal to the sum of `terms`.
    ///
    /// The input may be unsorted, contain several terms with the same exponent and terms
    /// with zero coefficients. Terms are stably sorted by exponent, neighbours with equal
    /// exponents are merged by adding their coefficients, zero results are dropped and
    /// the result is collapsed to a scalar when it is one.
    pub fn from_terms(mut terms: Vec<Term>) -> Self {
        terms.sort_by_key(|t| t.exp);
        let merged: Vec<Term> = terms
            .into_iter()
            .coalesce(|a, b| {
                if a.exp == b.exp {
                    Ok(Term::new(a.exp, a.coeff + b.coeff))
                } else {
                    Err((a, b))
                }
            })
            .filter(|t| !t.is_zero())
            .collect();
        Poly::collapse(merged)
    }

    /// same as `from_terms` but leaves the given terms untouched
    pub fn from_terms_cloned(terms: &[Term]) -> Self {
        Poly::from_terms(terms.to_vec())
    }

    /// Wraps an already sorted list of nonzero terms, applying the scalar collapse rule.
    pub(crate) fn collapse(mut terms: Vec<Term>) -> Self {
        debug_assert!(terms.iter().all(|t| !t.is_zero()));
        debug_assert!(terms.windows(2).all(|w| w[0].exp < w[1].exp));
        match terms.len() {
            0 => Poly::zero(),
            1 if terms[0].exp == 0 && terms[0].coeff.is_coeff() => {
                terms.pop().map(|t| t.coeff).unwrap_or_default()
            }
            _ => Poly::Terms(terms),
        }
    }

    //___________________________________STRUCTURE____________________________________

    /// is the polynomial identically zero
    pub fn is_zero(&self) -> bool {
        matches!(self, Poly::Scalar(0))
    }

    /// is the polynomial a constant
    pub fn is_coeff(&self) -> bool {
        matches!(self, Poly::Scalar(_))
    }

    /// value of a constant polynomial
    pub fn coeff(&self) -> Option<PolyCoeff> {
        match self {
            Poly::Scalar(c) => Some(*c),
            Poly::Terms(_) => None,
        }
    }

    /// terms of the outermost variable (empty for constants)
    pub fn terms(&self) -> &[Term] {
        match self {
            Poly::Scalar(_) => &[],
            Poly::Terms(terms) => terms,
        }
    }

    /// Checks the canonical form invariants recursively.
    pub fn is_canonical(&self) -> bool {
        match self {
            Poly::Scalar(_) => true,
            Poly::Terms(terms) => {
                let sorted = terms.windows(2).all(|w| w[0].exp < w[1].exp);
                let disguised_scalar =
                    terms.len() == 1 && terms[0].exp == 0 && terms[0].coeff.is_coeff();
                !terms.is_empty()
                    && sorted
                    && !disguised_scalar
                    && terms.iter().all(|t| !t.is_zero() && t.coeff.is_canonical())
            }
        }
    }
}

/// Display implementation in the calculator's text format.
///
/// A constant is printed as a decimal integer, a term list as `(coeff,exp)` monomials
/// joined by `+`, coefficients printed recursively: `(1,0)+((2,1),3)`.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Poly::Scalar(c) => write!(f, "{}", c),
            Poly::Terms(terms) => write!(f, "{}", terms.iter().format("+")),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.coeff, self.exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(v: PolyCoeff) -> Poly {
        Poly::from_coeff(v)
    }

    #[test]
    fn test_from_terms_empty_is_zero() {
        assert_eq!(Poly::from_terms(vec![]), Poly::zero());
    }

    #[test]
    fn test_from_terms_sorts_and_merges() {
        let p = Poly::from_terms(vec![
            Term::new(3, c(1)),
            Term::new(1, c(2)),
            Term::new(3, c(4)),
            Term::new(0, c(0)),
        ]);
        assert_eq!(
            p,
            Poly::Terms(vec![Term::new(1, c(2)), Term::new(3, c(5))])
        );
        assert!(p.is_canonical());
    }

    #[test]
    fn test_from_terms_total_cancellation() {
        let p = Poly::from_terms(vec![Term::new(2, c(7)), Term::new(2, c(-7))]);
        assert!(p.is_zero());
    }

    #[test]
    fn test_from_terms_collapses_to_scalar() {
        let p = Poly::from_terms(vec![Term::new(0, c(4)), Term::new(5, c(1)), Term::new(5, c(-1))]);
        assert_eq!(p, c(4));
        // nested disguised scalar collapses level by level
        let inner = Poly::from_terms(vec![Term::new(0, c(9))]);
        assert_eq!(inner, c(9));
        let outer = Poly::from_terms(vec![Term::new(0, inner)]);
        assert_eq!(outer, c(9));
    }

    #[test]
    fn test_from_terms_keeps_nonscalar_constant_term() {
        let x1 = Poly::from_terms(vec![Term::new(1, c(1))]);
        let p = Poly::from_terms(vec![Term::new(0, x1.clone())]);
        assert_eq!(p, Poly::Terms(vec![Term::new(0, x1)]));
        assert!(p.is_canonical());
    }

    #[test]
    fn test_from_terms_cloned_leaves_input() {
        let terms = vec![Term::new(1, c(1)), Term::new(1, c(1))];
        let p = Poly::from_terms_cloned(&terms);
        assert_eq!(p.to_string(), "(2,1)");
        assert_eq!(terms.len(), 2);
    }

    #[test]
    fn test_is_canonical_rejects_broken_forms() {
        assert!(!Poly::Terms(vec![]).is_canonical());
        assert!(!Poly::Terms(vec![Term::new(0, c(3))]).is_canonical());
        assert!(!Poly::Terms(vec![Term::new(1, c(0))]).is_canonical());
        assert!(!Poly::Terms(vec![Term::new(2, c(1)), Term::new(1, c(1))]).is_canonical());
        assert!(!Poly::Terms(vec![Term::new(1, c(1)), Term::new(1, c(1))]).is_canonical());
    }

    #[test]
    fn test_display() {
        assert_eq!(c(-17).to_string(), "-17");
        let x1 = Poly::from_terms(vec![Term::new(1, c(2))]);
        let p = Poly::from_terms(vec![Term::new(0, c(1)), Term::new(3, x1)]);
        assert_eq!(p.to_string(), "(1,0)+((2,1),3)");
    }

    #[test]
    fn test_accessors() {
        let p = Poly::from_terms(vec![Term::new(2, c(1))]);
        assert_eq!(p.coeff(), None);
        assert_eq!(p.terms().len(), 1);
        assert_eq!(c(5).coeff(), Some(5));
        assert!(c(5).terms().is_empty());
        assert!(Poly::default().is_zero());
        assert_eq!(Poly::from(3), c(3));
    }
}
