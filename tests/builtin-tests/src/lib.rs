//! Acceptance fixtures for overflow-checked arithmetic builtins.
//!
//! Each fixture is a table of operand pairs plus whether the operation is
//! expected to overflow. The binaries walk the table and exit with `0` when
//! every row matches, or `-1` at the first row that does not.

/// Signed 16-bit multiply, reporting whether the true product overflowed.
pub fn smul_i16_overflows(a: i16, b: i16) -> bool {
    a.overflowing_mul(b).1
}

/// One row of a fixture table.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    pub a: u16,
    pub b: u16,
    pub overflows: bool,
}

const fn case(a: u16, b: u16, overflows: bool) -> Case {
    Case { a, b, overflows }
}

/// Boundary pairs for the signed 16-bit multiply. Operands are bit patterns,
/// so `0x8000` is `i16::MIN` and `0xFFFF` is `-1`.
pub const SMUL_I16_CASES: &[Case] = &[
    case(0x0000, 0x0000, false),
    case(0x0000, 0x7FFF, false),
    case(0x0000, 0x8000, false),
    case(0x0001, 0x7FFF, false),
    case(0x0001, 0x8000, false),
    case(0x0002, 0x3FFF, false),
    case(0x0002, 0xC000, false),
    case(0x0002, 0x7FFF, true),
    case(0x0002, 0x8000, true),
    case(0x0FFF, 0x0008, false),
    case(0x1000, 0x0008, true),
    case(0x7FFF, 0x0000, false),
    case(0x7FFF, 0x0001, false),
    case(0x7FFF, 0x0002, true),
    case(0x7FFF, 0x7FFF, true),
    case(0x7FFF, 0x8000, true),
    case(0x8000, 0x0000, false),
    case(0x8000, 0x0001, false),
    case(0x8000, 0x0002, true),
    case(0x8000, 0x7FFF, true),
    case(0x8000, 0x8000, true),
    case(0xFFFF, 0x0000, false),
    case(0xFFFF, 0x0001, false),
    case(0xFFFF, 0xFFFF, false),
];

/// Index of the first case whose overflow flag disagrees, if any.
pub fn first_smul_i16_mismatch(cases: &[Case]) -> Option<usize> {
    cases
        .iter()
        .position(|c| smul_i16_overflows(c.a as i16, c.b as i16) != c.overflows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_table_passes() {
        assert_eq!(first_smul_i16_mismatch(SMUL_I16_CASES), None);
    }

    #[test]
    fn min_times_minus_one_overflows() {
        assert!(smul_i16_overflows(i16::MIN, -1));
        assert!(!smul_i16_overflows(i16::MAX, -1));
    }

    #[test]
    fn mismatch_is_reported_at_its_row() {
        let table = [case(0x0001, 0x0001, false), case(0x7FFF, 0x0002, false)];
        assert_eq!(first_smul_i16_mismatch(&table), Some(1));
    }
}
