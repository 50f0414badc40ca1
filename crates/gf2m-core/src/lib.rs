#![no_std]
#[cfg(feature = "std")]
extern crate std;

/// Largest supported field degree. The exponent table alone holds
/// `2 * 2^m` words, so degree 24 already costs 128 MiB.
pub const MAX_DEGREE: u32 = 24;

/// Highest degree covered by [`PRIMITIVE_POLYS`].
pub const MAX_CATALOGUE_DEGREE: u32 = 16;

/// Conventional primitive polynomials over GF(2), indexed by `m - 1`.
/// Bit `i` is the coefficient of `x^i`; bit `m` is always set.
///
/// Every entry is primitive with respect to the generator `x` (= 2).
/// The Rijndael polynomial 0x11B is irreducible but not primitive for
/// generator 2, which is why degree 8 uses 0x11D instead.
pub const PRIMITIVE_POLYS: [u32; MAX_CATALOGUE_DEGREE as usize] = [
    0x3,     // x + 1
    0x7,     // x^2 + x + 1
    0xB,     // x^3 + x + 1
    0x13,    // x^4 + x + 1
    0x25,    // x^5 + x^2 + 1
    0x43,    // x^6 + x + 1
    0x89,    // x^7 + x^3 + 1
    0x11D,   // x^8 + x^4 + x^3 + x^2 + 1
    0x211,   // x^9 + x^4 + 1
    0x409,   // x^10 + x^3 + 1
    0x805,   // x^11 + x^2 + 1
    0x1053,  // x^12 + x^6 + x^4 + x + 1
    0x201B,  // x^13 + x^4 + x^3 + x + 1
    0x4443,  // x^14 + x^10 + x^6 + x + 1
    0x8003,  // x^15 + x + 1
    0x1100B, // x^16 + x^12 + x^3 + x + 1
];

/// Rejects polynomials whose leading term is not `x^m`.
pub fn check_poly(poly: u32, m: u32) -> GfResult<()> {
    check_degree(m)?;
    if poly >> m != 1 {
        return Err(GfError::DegreeMismatch { poly, m });
    }
    Ok(())
}

/// Looks up the catalogued primitive polynomial for degree `m`.
pub fn primitive_poly(m: u32) -> GfResult<u32> {
    if m == 0 || m > MAX_CATALOGUE_DEGREE {
        return Err(GfError::UnknownDegree(m));
    }
    Ok(PRIMITIVE_POLYS[(m - 1) as usize])
}

/// Rejects degrees the table layout cannot represent.
pub fn check_degree(m: u32) -> GfResult<()> {
    if m == 0 || m > MAX_DEGREE {
        return Err(GfError::InvalidDegree(m));
    }
    Ok(())
}

pub type GfResult<T> = Result<T, GfError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GfError {
    /// Divisor was the additive identity.
    DivisionByZero,
    /// Zero has no multiplicative inverse.
    ZeroInverse,
    /// Degree outside `1..=MAX_DEGREE`.
    InvalidDegree(u32),
    /// Leading bit of the polynomial is not bit `m`.
    DegreeMismatch { poly: u32, m: u32 },
    /// Generator cycle closed after `period` steps instead of `2^m - 1`.
    /// A period of 0 means the walk never returned to 1.
    NotPrimitive { poly: u32, period: u32 },
    /// No catalogued primitive polynomial for this degree.
    UnknownDegree(u32),
}

impl core::fmt::Display for GfError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GfError::DivisionByZero => write!(f, "division by zero"),
            GfError::ZeroInverse => write!(f, "zero has no multiplicative inverse"),
            GfError::InvalidDegree(m) => {
                write!(f, "field degree {} outside 1..={}", m, MAX_DEGREE)
            }
            GfError::DegreeMismatch { poly, m } => {
                write!(f, "polynomial {:#x} does not have degree {}", poly, m)
            }
            GfError::NotPrimitive { poly, period: 0 } => {
                write!(f, "polynomial {:#x} is not primitive (generator never returns to 1)", poly)
            }
            GfError::NotPrimitive { poly, period } => {
                write!(f, "polynomial {:#x} is not primitive (generator period {})", poly, period)
            }
            GfError::UnknownDegree(m) => {
                write!(f, "no catalogued primitive polynomial for degree {}", m)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GfError {}
