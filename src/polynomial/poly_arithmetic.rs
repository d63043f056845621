// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
//! # Polynomial Arithmetic Module
//!
//! Addition, subtraction, multiplication and negation of canonical polynomials.
//!
//! Every operator comes in two flavours:
//! - consuming: `p + q` takes both operands by value and reuses their term buffers
//! - cloning: `&p + &q` leaves both operands alive
//!
//! Coefficient arithmetic wraps around on overflow (two's complement). A coefficient that
//! wraps to zero is dropped like any other zero, so outputs stay canonical.
//!
//! Exponent sums in multiplication saturate at `MAX_EXP`, so every exponent the engine
//! produces is one the parser accepts.

use crate::polynomial::poly_engine::{MAX_EXP, Poly, PolyCoeff, PolyExp, Term};
use itertools::{EitherOrBoth, Itertools};
use num_traits::{One, Zero};
use std::mem;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

//___________________________________ADDITION____________________________________

/// Adds a nonzero constant to a term list.
fn add_coeff_to_terms(c: PolyCoeff, mut terms: Vec<Term>) -> Poly {
    if c == 0 {
        return Poly::collapse(terms);
    }
    match terms.first_mut() {
        Some(first) if first.exp == 0 => {
            let coeff = mem::take(&mut first.coeff);
            first.coeff = coeff + Poly::Scalar(c);
            if first.is_zero() {
                terms.remove(0);
            }
        }
        _ => terms.insert(0, Term::new(0, Poly::Scalar(c))),
    }
    Poly::collapse(terms)
}

/// Whether every exponent of `sub` also occurs in `sup`. Both lists are sorted, so two
/// cursors walk them once.
fn has_all_exps_of(sup: &[Term], sub: &[Term]) -> bool {
    let mut sup_exps = sup.iter().map(|t| t.exp);
    sub.iter().all(|t| sup_exps.any(|e| e == t.exp))
}

/// Adds `sub` into `sup` in place; `sub`'s exponents must be a subset of `sup`'s.
fn absorb_terms(mut sup: Vec<Term>, sub: Vec<Term>) -> Poly {
    let mut i = 0;
    for t in sub {
        while sup[i].exp != t.exp {
            i += 1;
        }
        let c = mem::take(&mut sup[i].coeff);
        sup[i].coeff = c + t.coeff;
    }
    sup.retain(|t| !t.is_zero());
    Poly::collapse(sup)
}

/// Sorted-union merge of two term lists.
fn merge_terms(p: Vec<Term>, q: Vec<Term>) -> Poly {
    let mut merged = Vec::with_capacity(p.len() + q.len());
    for pair in p.into_iter().merge_join_by(q, |a, b| a.exp.cmp(&b.exp)) {
        match pair {
            EitherOrBoth::Left(t) | EitherOrBoth::Right(t) => merged.push(t),
            EitherOrBoth::Both(a, b) => {
                let sum = a.coeff + b.coeff;
                if !sum.is_zero() {
                    merged.push(Term::new(a.exp, sum));
                }
            }
        }
    }
    Poly::collapse(merged)
}

fn add_terms(p: Vec<Term>, q: Vec<Term>) -> Poly {
    if has_all_exps_of(&p, &q) {
        absorb_terms(p, q)
    } else if has_all_exps_of(&q, &p) {
        absorb_terms(q, p)
    } else {
        merge_terms(p, q)
    }
}

impl Add for Poly {
    type Output = Poly;

    fn add(self, rhs: Poly) -> Poly {
        match (self, rhs) {
            (Poly::Scalar(a), Poly::Scalar(b)) => Poly::Scalar(a.wrapping_add(b)),
            (Poly::Scalar(c), Poly::Terms(terms)) | (Poly::Terms(terms), Poly::Scalar(c)) => {
                add_coeff_to_terms(c, terms)
            }
            (Poly::Terms(p), Poly::Terms(q)) => add_terms(p, q),
        }
    }
}

impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        match (self, rhs) {
            (Poly::Scalar(a), Poly::Scalar(b)) => Poly::Scalar(a.wrapping_add(*b)),
            _ => self.clone() + rhs.clone(),
        }
    }
}

impl AddAssign for Poly {
    fn add_assign(&mut self, rhs: Poly) {
        let lhs = mem::take(self);
        *self = lhs + rhs;
    }
}

//___________________________________NEGATION AND SUBTRACTION____________________________________

impl Poly {
    /// negates every scalar leaf in place
    fn negate_in_place(&mut self) {
        match self {
            Poly::Scalar(c) => *c = c.wrapping_neg(),
            Poly::Terms(terms) => terms.iter_mut().for_each(|t| t.coeff.negate_in_place()),
        }
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(mut self) -> Poly {
        self.negate_in_place();
        self
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        -self.clone()
    }
}

impl Sub for Poly {
    type Output = Poly;

    fn sub(self, rhs: Poly) -> Poly {
        self + (-rhs)
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        self.clone() + (-rhs)
    }
}

impl SubAssign for Poly {
    fn sub_assign(&mut self, rhs: Poly) {
        let lhs = mem::take(self);
        *self = lhs - rhs;
    }
}

//___________________________________MULTIPLICATION____________________________________

/// Multiplies every coefficient of a term list by a constant.
fn scale_terms(c: PolyCoeff, terms: Vec<Term>) -> Poly {
    if c == 0 {
        return Poly::zero();
    }
    let scaled: Vec<Term> = terms
        .into_iter()
        .map(|t| Term::new(t.exp, t.coeff * Poly::Scalar(c)))
        .filter(|t| !t.is_zero())
        .collect();
    Poly::collapse(scaled)
}

/// exponent of a product of monomials, clamped to `MAX_EXP`
fn add_exps(a: PolyExp, b: PolyExp) -> PolyExp {
    a.saturating_add(b).min(MAX_EXP)
}

/// All pairwise products, normalized in one go.
fn mul_terms(p: &[Term], q: &[Term]) -> Poly {
    let products: Vec<Term> = p
        .iter()
        .cartesian_product(q.iter())
        .map(|(a, b)| Term::new(add_exps(a.exp, b.exp), &a.coeff * &b.coeff))
        .filter(|t| !t.is_zero())
        .collect();
    Poly::from_terms(products)
}

impl Mul for Poly {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Poly {
        match (self, rhs) {
            (Poly::Scalar(a), Poly::Scalar(b)) => Poly::Scalar(a.wrapping_mul(b)),
            (Poly::Scalar(c), Poly::Terms(terms)) | (Poly::Terms(terms), Poly::Scalar(c)) => {
                scale_terms(c, terms)
            }
            (Poly::Terms(p), Poly::Terms(q)) => mul_terms(&p, &q),
        }
    }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        match (self, rhs) {
            (Poly::Scalar(a), Poly::Scalar(b)) => Poly::Scalar(a.wrapping_mul(*b)),
            (Poly::Scalar(c), Poly::Terms(terms)) | (Poly::Terms(terms), Poly::Scalar(c)) => {
                scale_terms(*c, terms.clone())
            }
            (Poly::Terms(p), Poly::Terms(q)) => mul_terms(p, q),
        }
    }
}

impl MulAssign for Poly {
    fn mul_assign(&mut self, rhs: Poly) {
        let lhs = mem::take(self);
        *self = lhs * rhs;
    }
}

impl Zero for Poly {
    fn zero() -> Self {
        Poly::zero()
    }

    fn is_zero(&self) -> bool {
        Poly::is_zero(self)
    }
}

impl One for Poly {
    fn one() -> Self {
        Poly::Scalar(1)
    }
}
