//! Line module - slide and merge a single row or column
//!
//! A line is a fixed-size array of power levels. Every function takes the
//! unit step of the move: `-1` packs toward index 0, `+1` toward index `N-1`.
//! Rows and columns are handled identically; the board only decides which
//! lines to extract and write back.

use arrayvec::ArrayVec;

use crate::types::{Power, EMPTY};

#[inline(always)]
fn toward_end(step: i8) -> bool {
    debug_assert!(step == 1 || step == -1, "step must be a unit step");
    step > 0
}

/// Pack all non-empty values against the target end, preserving their order.
pub fn slide<const N: usize>(line: [Power; N], step: i8) -> [Power; N] {
    let filled: ArrayVec<Power, N> = line.iter().copied().filter(|&p| p != EMPTY).collect();

    let mut out = [EMPTY; N];
    let offset = if toward_end(step) { N - filled.len() } else { 0 };
    out[offset..offset + filled.len()].copy_from_slice(&filled);
    out
}

/// Merge equal neighbours once, scanning from the target end.
///
/// The cell nearer the target end receives `power + 1`; its partner is
/// consumed and left empty. A consumed cell cannot merge again in the same
/// pass, so `[v, v, v]` yields exactly one merged pair.
pub fn merge<const N: usize>(line: [Power; N], step: i8) -> [Power; N] {
    let forward = toward_end(step);
    let mut out = [EMPTY; N];
    let mut consumed = [false; N];

    for k in 0..N {
        let pos = if forward { N - 1 - k } else { k };
        if line[pos] == EMPTY || consumed[pos] {
            continue;
        }

        let next = if forward {
            pos.checked_sub(1)
        } else {
            Some(pos + 1).filter(|&n| n < N)
        };

        match next {
            Some(n) if line[n] == line[pos] => {
                out[pos] = line[pos] + 1;
                consumed[n] = true;
            }
            _ => out[pos] = line[pos],
        }
    }

    out
}

/// Slide, merge, slide again. The canonical resolution of one line.
pub fn slide_and_merge<const N: usize>(line: [Power; N], step: i8) -> [Power; N] {
    slide(merge(slide(line, step), step), step)
}

/// True if any two adjacent cells hold the same power.
///
/// Empty cells are not special-cased: two adjacent zeros count as a pair.
/// That only makes sense on a full line, which is the sole place the board
/// asks; do not call this on lines that may contain holes.
pub fn can_merge<const N: usize>(line: [Power; N]) -> bool {
    line.windows(2).any(|w| w[0] == w[1])
}
