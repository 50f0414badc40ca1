use alloc::vec;
use alloc::vec::Vec;

use crate::scalar::mul_raw;

/// The generator `x`.
pub const GENERATOR: u32 = 2;

pub struct GfTables {
    pub exp: Vec<u32>, // Doubled: exp[i] == exp[i + order]
    pub log: Vec<u32>,
    /// Steps until the generator walk first returned to 1, or 0 if it
    /// never did. Equals `2^m - 1` exactly when the polynomial is primitive.
    pub period: u32,
}

/// Walks the powers of the generator and records them in both tables.
///
/// The walk always runs the full `2^m - 1` steps. With a non-primitive
/// polynomial the cycle repeats early, later steps overwrite `log` entries,
/// and elements never reached keep a log of 0. Without a constant term,
/// multiplying by `x` is not invertible and the walk may fall to 0 or
/// loop without ever coming back to 1. Either field is degenerate;
/// `period` reports how long the real cycle was.
///
/// `poly` must satisfy `poly >> m == 1`.
pub fn gen_tables(poly: u32, m: u32) -> GfTables {
    let field_size = 1u32 << m;
    let order = field_size - 1;

    let mut exp = vec![0u32; 2 * field_size as usize];
    let mut log = vec![0u32; field_size as usize];
    let mut period = 0;
    let mut x = 1u32; // g^0

    for i in 0..order {
        exp[i as usize] = x;
        exp[(i + order) as usize] = x;
        log[x as usize] = i;

        x = mul_raw(x, GENERATOR, poly, field_size);
        if x == 1 && period == 0 {
            period = i + 1;
        }
    }

    GfTables { exp, log, period }
}
