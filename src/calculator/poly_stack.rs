// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
use crate::calculator::calc_errors::CalcError;
use crate::polynomial::poly_engine::Poly;
use log::trace;

/// Stack of polynomials. Owns every element until it is popped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyStack {
    items: Vec<Poly>,
}

impl PolyStack {
    pub fn new() -> Self {
        PolyStack { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, p: Poly) {
        trace!("push {}, depth {}", p, self.items.len() + 1);
        self.items.push(p);
    }

    pub fn pop(&mut self) -> Result<Poly, CalcError> {
        self.items.pop().ok_or(CalcError::StackUnderflow)
    }

    /// the top of the stack
    pub fn peek(&self) -> Result<&Poly, CalcError> {
        self.items.last().ok_or(CalcError::StackUnderflow)
    }

    /// the element `depth` places below the top (`0` is the top)
    pub fn peek_at(&self, depth: usize) -> Result<&Poly, CalcError> {
        self.ensure(depth + 1)?;
        Ok(&self.items[self.items.len() - 1 - depth])
    }

    /// Checks that at least `n` polynomials are on the stack.
    pub fn ensure(&self, n: usize) -> Result<(), CalcError> {
        if self.items.len() >= n {
            Ok(())
        } else {
            Err(CalcError::StackUnderflow)
        }
    }

    /// Removes the top `k` polynomials and returns them ordered from the deepest to the top.
    /// On underflow the stack is left untouched.
    pub fn pop_many(&mut self, k: usize) -> Result<Vec<Poly>, CalcError> {
        self.ensure(k)?;
        let at = self.items.len() - k;
        Ok(self.items.split_off(at))
    }

    /// drops every polynomial left on the stack
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// iterates from the bottom to the top
    pub fn iter(&self) -> impl Iterator<Item = &Poly> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut s = PolyStack::new();
        s.push(Poly::from_coeff(1));
        s.push(Poly::from_coeff(2));
        assert_eq!(s.pop(), Ok(Poly::from_coeff(2)));
        assert_eq!(s.pop(), Ok(Poly::from_coeff(1)));
        assert_eq!(s.pop(), Err(CalcError::StackUnderflow));
        assert!(s.is_empty());
    }

    #[test]
    fn test_peek() {
        let mut s = PolyStack::new();
        assert_eq!(s.peek(), Err(CalcError::StackUnderflow));
        s.push(Poly::from_coeff(7));
        s.push(Poly::from_coeff(8));
        assert_eq!(s.peek(), Ok(&Poly::from_coeff(8)));
        assert_eq!(s.peek_at(1), Ok(&Poly::from_coeff(7)));
        assert_eq!(s.peek_at(2), Err(CalcError::StackUnderflow));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_pop_many() {
        let mut s = PolyStack::new();
        for i in 0..5 {
            s.push(Poly::from_coeff(i));
        }
        assert_eq!(s.pop_many(6), Err(CalcError::StackUnderflow));
        assert_eq!(s.len(), 5);
        let top = s.pop_many(3).unwrap();
        assert_eq!(top, vec![Poly::from_coeff(2), Poly::from_coeff(3), Poly::from_coeff(4)]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.pop_many(0), Ok(vec![]));
    }

    #[test]
    fn test_growth_and_clear() {
        let mut s = PolyStack::new();
        for i in 0..1000 {
            s.push(Poly::from_coeff(i));
        }
        assert_eq!(s.len(), 1000);
        assert_eq!(s.iter().next(), Some(&Poly::from_coeff(0)));
        s.clear();
        assert!(s.is_empty());
    }
}
