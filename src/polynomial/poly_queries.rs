// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
use crate::polynomial::poly_engine::{Poly, PolyDeg};

impl Poly {
    /// Equality of canonical polynomials.
    ///
    /// Canonical form makes the representation unique, so this is plain structural equality:
    /// constants compare by value, term lists compare term by term, and a constant never
    /// equals a term list.
    pub fn is_eq(&self, other: &Poly) -> bool {
        self == other
    }

    /// Total degree: the largest sum of exponents over all monomials, `-1` for zero.
    pub fn deg(&self) -> PolyDeg {
        match self {
            Poly::Scalar(0) => -1,
            Poly::Scalar(_) => 0,
            Poly::Terms(terms) => terms
                .iter()
                .map(|t| PolyDeg::from(t.exp) + t.coeff.deg())
                .max()
                .unwrap_or(-1),
        }
    }

    /// Degree with respect to the variable `var_idx` (0 is the outermost), `-1` for zero.
    ///
    /// A nonzero constant does not depend on any variable and has degree 0 in all of them.
    pub fn deg_by(&self, var_idx: usize) -> PolyDeg {
        match self {
            Poly::Scalar(0) => -1,
            Poly::Scalar(_) => 0,
            Poly::Terms(terms) if var_idx == 0 => terms
                .last()
                .map(|t| PolyDeg::from(t.exp))
                .unwrap_or(-1),
            Poly::Terms(terms) => terms
                .iter()
                .map(|t| t.coeff.deg_by(var_idx - 1))
                .max()
                .unwrap_or(-1),
        }
    }
}
