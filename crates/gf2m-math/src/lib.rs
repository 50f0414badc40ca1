#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod scalar;
pub mod tables;

pub use gf2m_core::{GfError, GfResult};
pub use tables::GENERATOR;

use alloc::vec::Vec;
use core::fmt;

use gf2m_core::{check_poly, primitive_poly};
use log::{debug, warn};

/// GF(2^m) with precomputed exponent and log tables.
///
/// Elements are `u32` values in `[0, 2^m)` whose bits are polynomial
/// coefficients. Queries assume in-range operands; an out-of-range operand
/// to `multiply`, `divide`, `inverse` or `log` panics on the table index,
/// and `add` simply returns an out-of-range value.
///
/// The tables are never written after construction, so a field can be
/// shared freely between threads behind `&` or `Arc`.
#[derive(Clone, PartialEq, Eq)]
pub struct GaloisField {
    m: u32,
    primitive_poly: u32,
    field_size: u32,
    mask: u32,
    exp_table: Vec<u32>,
    log_table: Vec<u32>,
}

impl GaloisField {
    /// Builds the field for `primitive_poly` of degree `m`.
    ///
    /// Primitivity is NOT verified. A polynomial that is reducible, or
    /// irreducible with `x` of smaller order, yields a degenerate field whose
    /// arithmetic is wrong. Use [`GaloisField::new_checked`] to reject those.
    pub fn new(primitive_poly: u32, m: u32) -> GfResult<Self> {
        check_poly(primitive_poly, m)?;
        let t = tables::gen_tables(primitive_poly, m);
        if t.period != (1 << m) - 1 {
            debug!("GF(2^{}) mod {:#x}: generator period {} (need {})", m, primitive_poly, t.period, (1u32 << m) - 1);
        }
        Ok(Self::from_tables(primitive_poly, m, t))
    }

    /// Like [`GaloisField::new`], but fails with `NotPrimitive` unless the
    /// generator visits every nonzero element. `period` is 0 when the walk
    /// never returns to 1 (no constant term).
    pub fn new_checked(primitive_poly: u32, m: u32) -> GfResult<Self> {
        check_poly(primitive_poly, m)?;
        let t = tables::gen_tables(primitive_poly, m);
        if t.period != (1 << m) - 1 {
            warn!("Rejected {:#x}: generator period {} (need {})", primitive_poly, t.period, (1u32 << m) - 1);
            return Err(GfError::NotPrimitive { poly: primitive_poly, period: t.period });
        }
        Ok(Self::from_tables(primitive_poly, m, t))
    }

    /// Field of degree `m` over the catalogued primitive polynomial.
    pub fn with_degree(m: u32) -> GfResult<Self> {
        Self::new(primitive_poly(m)?, m)
    }

    fn from_tables(primitive_poly: u32, m: u32, t: tables::GfTables) -> Self {
        let field_size = 1u32 << m;
        debug!(
            "Built GF(2^{}) mod {:#x}: {} exp entries, {} log entries",
            m, primitive_poly, t.exp.len(), t.log.len()
        );
        Self {
            m,
            primitive_poly,
            field_size,
            mask: field_size - 1,
            exp_table: t.exp,
            log_table: t.log,
        }
    }

    pub fn degree(&self) -> u32 { self.m }
    pub fn primitive_poly(&self) -> u32 { self.primitive_poly }
    pub fn field_size(&self) -> u32 { self.field_size }
    pub fn mask(&self) -> u32 { self.mask }

    /// Size of the multiplicative group, `2^m - 1`.
    #[inline(always)]
    pub fn order(&self) -> u32 { self.field_size - 1 }

    pub fn exp_table(&self) -> &[u32] { &self.exp_table }
    pub fn log_table(&self) -> &[u32] { &self.log_table }

    pub fn contains(&self, a: u32) -> bool { a < self.field_size }

    #[inline(always)]
    pub fn add(&self, a: u32, b: u32) -> u32 { a ^ b }

    /// Same as [`GaloisField::add`] in characteristic 2.
    #[inline(always)]
    pub fn subtract(&self, a: u32, b: u32) -> u32 { self.add(a, b) }

    #[inline]
    pub fn multiply(&self, a: u32, b: u32) -> u32 {
        if a == 0 || b == 0 { return 0; }
        let idx = (self.log_table[a as usize] + self.log_table[b as usize]) % self.order();
        self.exp_table[idx as usize]
    }

    pub fn divide(&self, a: u32, b: u32) -> GfResult<u32> {
        if b == 0 { return Err(GfError::DivisionByZero); }
        if a == 0 { return Ok(0); }
        let n = self.order();
        let idx = (self.log_table[a as usize] + n - self.log_table[b as usize]) % n;
        Ok(self.exp_table[idx as usize])
    }

    pub fn inverse(&self, a: u32) -> GfResult<u32> {
        if a == 0 { return Err(GfError::ZeroInverse); }
        let n = self.order();
        let idx = (n - self.log_table[a as usize]) % n;
        Ok(self.exp_table[idx as usize])
    }

    /// `g^i` for the generator `g = x`.
    pub fn exp(&self, i: u64) -> u32 {
        self.exp_table[(i % self.order() as u64) as usize]
    }

    /// Discrete log base `g`. `None` for zero.
    pub fn log(&self, a: u32) -> Option<u32> {
        if a == 0 { return None; }
        Some(self.log_table[a as usize])
    }

    /// `a^n`, with `a^0 == 1` for every `a`. Negative powers go through the
    /// inverse, so `0^n` fails for `n < 0`.
    pub fn pow(&self, a: u32, n: i64) -> GfResult<u32> {
        if n == 0 { return Ok(1); }
        if a == 0 {
            return if n > 0 { Ok(0) } else { Err(GfError::ZeroInverse) };
        }
        let n = n.rem_euclid(self.order() as i64) as u64;
        Ok(self.exp(self.log_table[a as usize] as u64 * n))
    }

    /// Multiply without the tables. Reference for [`GaloisField::multiply`].
    pub fn multiply_raw(&self, a: u32, b: u32) -> u32 {
        scalar::mul_raw(a, b, self.primitive_poly, self.field_size)
    }

    /// Multiply in constant time. Table lookups leak operands through the
    /// cache; this does not.
    pub fn multiply_const_time(&self, a: u32, b: u32) -> u32 {
        scalar::mul_const_time(a, b, self.primitive_poly, self.m)
    }
}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("m", &self.m)
            .field("primitive_poly", &format_args!("{:#x}", self.primitive_poly))
            .field("field_size", &self.field_size)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{}) mod {:#x}", self.m, self.primitive_poly)
    }
}
