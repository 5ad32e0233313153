//! Pairwise conflict rule.

/// Whether two (variable, value) assignments attack each other.
///
/// In the N-Queens CSP a variable is a column and its value is the row of
/// that column's queen. Two assignments conflict when they share a row
/// (`col1 == col2`), a "/" diagonal (`row1 + col1 == row2 + col2`), or a
/// "\" diagonal (`row1 − col1 == row2 − col2`, rearranged to stay unsigned).
///
/// The predicate is symmetric. Identical arguments always conflict, so
/// callers compare distinct variables only.
///
/// ```
/// use u_nqueens::csp::conflicts;
///
/// assert!(conflicts(0, 0, 3, 3));
/// assert!(!conflicts(0, 1, 1, 3));
/// ```
pub fn conflicts(row1: usize, col1: usize, row2: usize, col2: usize) -> bool {
    col1 == col2 || row1 + col1 == row2 + col2 || row1 + col2 == row2 + col1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_row_value() {
        assert!(conflicts(0, 4, 5, 4));
    }

    #[test]
    fn test_rising_diagonal() {
        assert!(conflicts(1, 2, 2, 1));
        assert!(conflicts(0, 5, 5, 0));
    }

    #[test]
    fn test_falling_diagonal() {
        assert!(conflicts(0, 0, 7, 7));
        assert!(conflicts(3, 1, 5, 3));
    }

    #[test]
    fn test_knight_move_is_safe() {
        assert!(!conflicts(0, 0, 1, 2));
        assert!(!conflicts(4, 4, 6, 5));
    }

    #[test]
    fn test_exhaustive_symmetry_small_board() {
        for r1 in 0..6 {
            for c1 in 0..6 {
                for r2 in 0..6 {
                    for c2 in 0..6 {
                        assert_eq!(conflicts(r1, c1, r2, c2), conflicts(r2, c2, r1, c1));
                    }
                }
            }
        }
    }

    #[test]
    fn test_matches_signed_formula() {
        for r1 in 0..6usize {
            for c1 in 0..6usize {
                for r2 in 0..6usize {
                    for c2 in 0..6usize {
                        let signed = (r1 as i64 - c1 as i64) == (r2 as i64 - c2 as i64);
                        let expected =
                            c1 == c2 || r1 + c1 == r2 + c2 || signed;
                        assert_eq!(conflicts(r1, c1, r2, c2), expected);
                    }
                }
            }
        }
    }
}
