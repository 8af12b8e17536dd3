//! Butterfly stage orderings.
//!
//! Stage 0 is the input ordering `[0, 1, ..., N-1]`. Every following stage
//! weaves the previous ordering block by block: blocks double in length from
//! stage to stage, and inside each block the top half and the bottom half are
//! interleaved pairwise. After `log2(N)` stages the items sit in bit-reversed
//! order, the arrangement a decimation-in-time transform reads its input in.

use itertools::interleave;
use log::warn;
use serde::Serialize;

use super::size::FftSize;
use crate::error::ButterflyError;

/// Outcome of weaving one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Weave {
    /// Every block split evenly into top and bottom halves.
    Complete(Vec<usize>),
    /// Some block could not be halved and was copied through unchanged.
    /// Never produced for a valid transform size.
    Degenerate(Vec<usize>),
}

impl Weave {
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Weave::Degenerate(_))
    }

    pub fn as_slice(&self) -> &[usize] {
        match self {
            Weave::Complete(order) | Weave::Degenerate(order) => order,
        }
    }

    pub fn into_order(self) -> Vec<usize> {
        match self {
            Weave::Complete(order) | Weave::Degenerate(order) => order,
        }
    }
}

/// Weave `prev` in consecutive blocks of `block_len`: each block becomes
/// `top[0], bot[0], top[1], bot[1], ...`, blocks kept left to right.
///
/// A trailing block shorter than `block_len` is passed through as-is. A
/// `block_len` that cannot be halved passes the whole ordering through.
/// Either case yields [`Weave::Degenerate`]; the output is always a
/// rearrangement of `prev`.
pub fn weave_blocks(prev: &[usize], block_len: usize) -> Weave {
    if block_len < 2 || block_len % 2 != 0 {
        warn!("block length {block_len} cannot be halved; passing {} items through", prev.len());
        return Weave::Degenerate(prev.to_vec());
    }

    let half = block_len / 2;
    let mut next = Vec::with_capacity(prev.len());
    let mut degenerate = false;

    for (i, block) in prev.chunks(block_len).enumerate() {
        if block.len() < block_len {
            warn!(
                "partial block of {} at offset {} (block length {block_len}); passing through",
                block.len(),
                i * block_len
            );
            degenerate = true;
            next.extend_from_slice(block);
            continue;
        }
        let (top, bot) = block.split_at(half);
        next.extend(interleave(top, bot).copied());
    }

    if degenerate {
        Weave::Degenerate(next)
    } else {
        Weave::Complete(next)
    }
}

/// Number of butterfly stages for a transform of `n` points.
pub fn stage_count(n: usize) -> Result<u32, ButterflyError> {
    if n < 2 || !n.is_power_of_two() {
        return Err(ButterflyError::InvalidSize { size: n });
    }
    Ok(n.trailing_zeros())
}

/// Every stage ordering for a transform of `n` points: `log2(n) + 1` entries,
/// from the identity to the bit-reversed order.
pub fn compute_stage_permutations(n: usize) -> Result<Vec<Vec<usize>>, ButterflyError> {
    let stages = stage_count(n)?;
    Ok(build_orders(n, stages))
}

fn build_orders(n: usize, stages: u32) -> Vec<Vec<usize>> {
    let mut orders: Vec<Vec<usize>> = Vec::with_capacity(stages as usize + 1);
    orders.push((0..n).collect());

    for k in 0..stages {
        let weave = weave_blocks(&orders[k as usize], 1 << (k + 1));
        debug_assert!(
            !weave.is_degenerate(),
            "stage {k} of a {n}-point transform left a partial block"
        );
        orders.push(weave.into_order());
    }
    orders
}

/// The bit-reversal permutation of `[0, n)`: position `i` holds `i` with its
/// `log2(n)` low bits reversed.
pub fn bit_reversal_order(n: usize) -> Result<Vec<usize>, ButterflyError> {
    let bits = stage_count(n)?;
    Ok((0..n)
        .map(|i| i.reverse_bits() >> (usize::BITS - bits))
        .collect())
}

/// True when `order` holds each of `0..order.len()` exactly once.
pub fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &item in order {
        match seen.get_mut(item) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// All stage orderings for one transform size, built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageTable {
    size: FftSize,
    orders: Vec<Vec<usize>>,
}

impl StageTable {
    pub fn new(size: FftSize) -> Self {
        StageTable {
            size,
            orders: build_orders(size.points(), size.log2()),
        }
    }

    pub fn size(&self) -> FftSize {
        self.size
    }

    /// Every ordering, identity first, bit-reversed last.
    pub fn all(&self) -> &[Vec<usize>] {
        &self.orders
    }

    pub fn input(&self) -> &[usize] {
        &self.orders[0]
    }

    pub fn output(&self) -> &[usize] {
        &self.orders[self.orders.len() - 1]
    }

    /// The orderings the stepper walks through: everything between the
    /// identity and the bit-reversed order, `log2(N) - 1` entries.
    pub fn trimmed(&self) -> &[Vec<usize>] {
        &self.orders[1..self.orders.len() - 1]
    }

    pub fn trimmed_count(&self) -> usize {
        self.orders.len() - 2
    }
}
