//! Scoring module - derives a score from the tiles on the board
//!
//! The board keeps no running total. The score shown to the player is
//! recomputed from [`Board::values`](crate::Board::values): a tile of power
//! `p` is worth `sum(i * 2^(i-1)) for i in 1..=p`, which is
//! `(p - 1) * 2^p + 1` in closed form.
//!
//! | Tile | Power | Points |
//! |------|-------|--------|
//! | 2 | 1 | 1 |
//! | 4 | 2 | 5 |
//! | 8 | 3 | 17 |
//! | 2048 | 11 | 20481 |

use crate::types::{Power, EMPTY};

/// Displayed value of a tile (`2^power`), 0 for an empty cell
pub fn display_value(power: Power) -> u64 {
    if power == EMPTY {
        0
    } else {
        1u64 << power
    }
}

/// Points credited for a single tile of the given power
pub fn tile_score(power: Power) -> u64 {
    if power == EMPTY {
        return 0;
    }
    let p = u64::from(power);
    (p - 1) * (1u64 << p) + 1
}

/// Total score of a set of tile powers
pub fn score_for_values(values: &[Power]) -> u64 {
    values.iter().map(|&p| tile_score(p)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Direct summation, to pin the closed form
    fn tile_score_by_sum(power: Power) -> u64 {
        (1..=u64::from(power)).map(|i| i * (1u64 << (i - 1))).sum()
    }

    #[test]
    fn test_closed_form_matches_sum() {
        for p in 0..=17 {
            assert_eq!(tile_score(p), tile_score_by_sum(p), "power {}", p);
        }
    }

    #[test]
    fn test_known_tiles() {
        assert_eq!(tile_score(1), 1);
        assert_eq!(tile_score(2), 5);
        assert_eq!(tile_score(3), 17);
        assert_eq!(tile_score(11), 20481);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(0), 0);
        assert_eq!(display_value(1), 2);
        assert_eq!(display_value(11), 2048);
    }

    #[test]
    fn test_score_for_values() {
        assert_eq!(score_for_values(&[]), 0);
        assert_eq!(score_for_values(&[1, 1, 2]), 7);
    }
}
