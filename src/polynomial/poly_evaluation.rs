// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! # Evaluation and Composition
//!
//! - `at(x)` substitutes a number for the outermost variable, so the result has one variable
//!   less: `p(x0, x1, ...)` becomes `p(x, x1, ...)` renumbered as a polynomial of `x1, ...`.
//! - `compose(q)` substitutes polynomials `q[0], ..., q[k-1]` for the variables
//!   `x0, ..., x(k-1)`.
//! - `pow(n)` raises a polynomial to a natural power.
//!
//! Powers are computed by binary exponentiation with wrapping coefficient arithmetic, which
//! gives exactly the result of repeated wrapping multiplication. `x^0 = 1` also for `x = 0`.

use crate::polynomial::poly_engine::{Poly, PolyCoeff, PolyExp};
use log::trace;

impl Poly {
    /// Value of the polynomial at `x0 = x`.
    ///
    /// A constant does not depend on `x0` and is returned unchanged.
    pub fn at(&self, x: PolyCoeff) -> Poly {
        match self {
            Poly::Scalar(_) => self.clone(),
            Poly::Terms(terms) => terms.iter().fold(Poly::zero(), |acc, t| {
                acc + &t.coeff * &Poly::Scalar(x.wrapping_pow(t.exp))
            }),
        }
    }

    /// `self^exp`, with `p^0 = 1`.
    pub fn pow(&self, exp: PolyExp) -> Poly {
        match self {
            Poly::Scalar(c) => Poly::Scalar(c.wrapping_pow(exp)),
            Poly::Terms(_) => num_traits::pow(self.clone(), exp as usize),
        }
    }

    /// Substitutes `q[i]` for the variable `x_i`, `i = 0..q.len()`.
    ///
    /// Composition descends exactly `q.len()` levels. A constant is returned unchanged
    /// whatever the number of substitutes; a term list reached when no substitutes are left
    /// contributes zero.
    pub fn compose(&self, q: &[Poly]) -> Poly {
        trace!("compose: {} with {} substitutes", self, q.len());
        match self {
            Poly::Scalar(_) => self.clone(),
            Poly::Terms(terms) => {
                let Some((q0, rest)) = q.split_first() else {
                    return Poly::zero();
                };
                terms.iter().fold(Poly::zero(), |acc, t| {
                    acc + t.coeff.compose(rest) * q0.pow(t.exp)
                })
            }
        }
    }
}
