// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::calculator::calc_engine::Calculator;
use crate::calculator::poly_parser::parse_poly;
use crate::polynomial::poly_engine::{Poly, Term};
use std::error::Error;
use std::io;

/// `x_idx` as a polynomial: the variable wrapped in `idx` constant layers
fn variable(idx: usize) -> Poly {
    let mut v = Poly::from_terms(vec![Term::new(1, Poly::from_coeff(1))]);
    for _ in 0..idx {
        v = Poly::from_terms(vec![Term::new(0, v)]);
    }
    v
}

const SAMPLE_SESSION: &str = "\
# (x0 + 1)^2 evaluated at x0 = 3
(1,0)+(1,1)
CLONE
MUL
PRINT
DEG
AT 3
PRINT
POP
# x0 * x1 composed with x0 := 2, x1 := x0 + 5
2
(5,0)+(1,1)
((1,1),1)
COMPOSE 2
PRINT
# errors are reported and skipped
ADD
(1,2
DEG_BY -1
";

pub fn poly_examples(example: usize) -> Result<(), Box<dyn Error>> {
    match example {
        0 => {
            // BUILDING POLYNOMIALS
            // raw terms may come unsorted, with repeated exponents and zero coefficients
            let raw = vec![
                Term::new(2, Poly::from_coeff(3)),
                Term::new(0, Poly::from_coeff(1)),
                Term::new(2, Poly::from_coeff(-3)),
                Term::new(1, Poly::from_coeff(4)),
                Term::new(5, Poly::zero()),
            ];
            let p = Poly::from_terms(raw);
            println!("normalized: {}", p);
            // a term list of one constant term collapses to the constant
            let c = Poly::from_terms(vec![Term::new(0, Poly::from_coeff(7))]);
            println!("collapsed: {}, is coeff {}", c, c.is_coeff());
            // the same polynomial from its text form
            let q = parse_poly("(4,1)+(1,0)")?;
            println!("parsed {} equals built {}: {}", q, p, q.is_eq(&p));
        }
        1 => {
            // ARITHMETIC AND QUERIES IN TWO VARIABLES
            let x0 = variable(0);
            let x1 = variable(1);
            // (x0 + x1)^2
            let sum = &x0 + &x1;
            let square = &sum * &sum;
            println!("(x0 + x1)^2 = {}", square);
            println!("deg = {}, deg_by x0 = {}, deg_by x1 = {}", square.deg(), square.deg_by(0), square.deg_by(1));
            let diff = &square - &(&x0 * &x0);
            println!("(x0 + x1)^2 - x0^2 = {}", diff);
            println!("negated: {}", -diff);
            // evaluation removes the outermost variable
            println!("at x0 = 2: {}", square.at(2));
            println!("x1^3 = {}", x1.pow(3));
        }
        2 => {
            // COMPOSITION
            // p(x0, x1) = x0^2 + x1, substitute x0 := x0 + 1 and x1 := 3
            let p = parse_poly("((1,1),0)+(1,2)")?;
            let q0 = parse_poly("(1,0)+(1,1)")?;
            let q1 = Poly::from_coeff(3);
            println!("p = {}", p);
            println!("p(x0 + 1, 3) = {}", p.compose(&[q0.clone(), q1]));
            // variables beyond the substitutes contribute zero
            println!("p(x0 + 1) = {}", p.compose(&[q0]));
        }
        3 => {
            // STACK CALCULATOR on a built-in script
            println!("{}", SAMPLE_SESSION);
            let stdout = io::stdout();
            let stderr = io::stderr();
            Calculator::new().run(
                SAMPLE_SESSION.as_bytes(),
                &mut stdout.lock(),
                &mut stderr.lock(),
            )?;
        }
        _ => {
            println!("there are examples 0 to 3");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable() {
        assert_eq!(variable(0).to_string(), "(1,1)");
        assert_eq!(variable(2).to_string(), "(((1,1),0),0)");
        assert_eq!(variable(1).deg_by(1), 1);
    }

    #[test]
    fn test_sample_session() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        Calculator::new()
            .run(SAMPLE_SESSION.as_bytes(), &mut out, &mut err)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "(1,0)+(2,1)+(1,2)\n2\n16\n(10,0)+(2,1)\n"
        );
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "ERROR 17 STACK UNDERFLOW\nERROR 18 WRONG POLY\nERROR 19 DEG BY WRONG VARIABLE\n"
        );
    }

    #[test]
    fn test_examples_run() {
        for example in 0..3 {
            assert!(poly_examples(example).is_ok());
        }
    }
}
