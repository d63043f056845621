// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]
/// # Polynomial engine
/// a module with the recursive sparse representation of multivariate polynomials
/// 1) builds canonical polynomials from raw (unsorted, duplicated, zero) term lists
/// 2) adds, subtracts, multiplies and negates them keeping the canonical form
/// 3) answers queries: equality, degree, degree by variable
/// 4) evaluates a polynomial at a point and composes polynomials
///# Example
/// ```
/// use RustedPolyCalc::polynomial::poly_engine::{Poly, Term};
/// // 3 + 2x
/// let p = Poly::from_terms(vec![Term::new(0, Poly::from_coeff(3)), Term::new(1, Poly::from_coeff(2))]);
/// assert_eq!(p.to_string(), "(3,0)+(2,1)");
/// assert_eq!(p.deg(), 1);
/// assert_eq!(p.at(5), Poly::from_coeff(13));
/// let square = &p * &p;
/// assert_eq!(square.to_string(), "(9,0)+(12,1)+(4,2)");
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod poly_engine;
/// addition, subtraction, multiplication and negation (consuming and cloning entry points)
pub mod poly_arithmetic;
/// equality and degree queries
pub mod poly_queries;
///________________________________________________________________________________________________________________________________________________
///
/// point evaluation, integer powers and composition
/// Example#
/// ```
/// use RustedPolyCalc::polynomial::poly_engine::{Poly, Term};
/// // p(x0, x1) = x0 * x1
/// let p = Poly::from_terms(vec![Term::new(1, Poly::from_terms(vec![Term::new(1, Poly::from_coeff(1))]))]);
/// // substitute x0 := 2, x1 := 3
/// let r = p.compose(&[Poly::from_coeff(2), Poly::from_coeff(3)]);
/// assert_eq!(r, Poly::from_coeff(6));
/// ```
pub mod poly_evaluation;

mod poly_proptests;
