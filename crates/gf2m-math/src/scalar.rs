/// Carry-less multiply of `a` and `b`, reduced modulo `poly` as it goes.
/// `field_size` is `2^m`; `poly` must have bit `m` set so each reduction
/// clears it again.
///
/// Only used while the tables are built, and as the reference multiply.
pub fn mul_raw(mut a: u32, mut b: u32, poly: u32, field_size: u32) -> u32 {
    let mut p = 0;
    while b != 0 {
        if (b & 1) != 0 { p ^= a; }
        a <<= 1;
        if (a & field_size) != 0 { a ^= poly; }
        b >>= 1;
    }
    p
}

/// Branch-free multiply. Always runs `m` rounds and selects every XOR
/// through a mask, so the timing does not depend on the operands.
/// Both operands must be below `2^m`.
pub fn mul_const_time(mut a: u32, mut b: u32, poly: u32, m: u32) -> u32 {
    let mut p = 0u32;
    for _ in 0..m {
        let take = (b & 1).wrapping_neg();
        p ^= a & take;
        a <<= 1;
        let carry = ((a >> m) & 1).wrapping_neg();
        a ^= poly & carry;
        b >>= 1;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xtime() {
        // x * x^3 wraps to x + 1 in GF(2^4) mod x^4 + x + 1
        assert_eq!(mul_raw(0b1000, 0b10, 0x13, 16), 0b0011);
        assert_eq!(mul_const_time(0b1000, 0b10, 0x13, 4), 0b0011);
    }

    #[test]
    fn test_variants_agree() {
        for a in 0..256 {
            for b in 0..256 {
                assert_eq!(mul_raw(a, b, 0x11D, 256), mul_const_time(a, b, 0x11D, 8));
            }
        }
    }

    #[test]
    fn test_rijndael_vector() {
        // FIPS-197 4.2: {57} * {83} = {c1}
        assert_eq!(mul_raw(0x57, 0x83, 0x11B, 256), 0xC1);
        assert_eq!(mul_const_time(0x57, 0x83, 0x11B, 8), 0xC1);
    }
}
