//! Operator overloads for polynomials.
//!
//! Every shape delegates to the inherent methods on [`Polynomial`], so
//! `p + q`, `p + &q` and `&p + &q` produce the same polynomial.

use std::ops::{Add, Mul, Neg, Sub};

use crate::dense::Polynomial;

impl Add for Polynomial {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Polynomial::add(&self, &other)
    }
}

impl Add<&Polynomial> for Polynomial {
    type Output = Self;

    fn add(self, other: &Self) -> Self::Output {
        Polynomial::add(&self, other)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: Self) -> Polynomial {
        Polynomial::add(self, other)
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Polynomial::sub(&self, &other)
    }
}

impl Sub<&Polynomial> for Polynomial {
    type Output = Self;

    fn sub(self, other: &Self) -> Self::Output {
        Polynomial::sub(&self, other)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Self) -> Polynomial {
        Polynomial::sub(self, other)
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Polynomial::mul(&self, &other)
    }
}

impl Mul<&Polynomial> for Polynomial {
    type Output = Self;

    fn mul(self, other: &Self) -> Self::Output {
        Polynomial::mul(&self, other)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Self) -> Polynomial {
        Polynomial::mul(self, other)
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}
