//! Genetic operators shared by both population layouts.

use mazerun_core::Pos;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GUIDED_SHARE, TOURNAMENT_SIZE};
use crate::maze::Move;

/// Individuals handled by one parallel task. Fixed so that seeded runs do not
/// depend on the number of worker threads.
pub(crate) const CHUNK: usize = 64;

/// Stand-in for a uniform draw of exactly 0 before taking its logarithm.
const MIN_UNIFORM: f64 = 1e-7;

/// Random source for one task of one phase.
///
/// `stream` separates phases (0 for seeding, `generation + 1` for breeding);
/// `chunk` separates tasks within a phase.
pub(crate) fn task_rng(seed: u64, stream: u64, chunk: usize) -> StdRng {
    let mixed = seed
        ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (chunk as u64).wrapping_add(1).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    StdRng::seed_from_u64(mixed)
}

/// The vertical and horizontal moves that point from `start` toward `goal`.
pub(crate) fn goal_bias(start: Pos, goal: Pos) -> (u8, u8) {
    let vertical = if goal.row > start.row { Move::Down } else { Move::Up };
    let horizontal = if goal.col > start.col { Move::Right } else { Move::Left };
    (vertical.gene(), horizontal.gene())
}

/// Whether individual `index` of `population` gets goal-biased genes.
#[inline]
pub(crate) fn is_guided(index: usize, population: usize) -> bool {
    (index as f64) < population as f64 * GUIDED_SHARE
}

/// Fill a fresh genome. Guided genomes draw the vertical bias with
/// probability 0.4, the horizontal bias with 0.4 and a uniform move
/// otherwise; unguided genomes are uniform.
pub(crate) fn seed_genome(genes: &mut [u8], guided: bool, bias: (u8, u8), rng: &mut impl Rng) {
    for gene in genes.iter_mut() {
        *gene = if guided {
            let r: f64 = rng.random();
            if r < 0.4 {
                bias.0
            } else if r < 0.8 {
                bias.1
            } else {
                rng.random_range(0..4)
            }
        } else {
            rng.random_range(0..4)
        };
    }
}

/// Tournament selection: the fittest of `TOURNAMENT_SIZE` uniform draws
/// from `0..population`.
pub(crate) fn tournament(
    fitness: impl Fn(usize) -> f64,
    population: usize,
    rng: &mut impl Rng,
) -> usize {
    let mut best = rng.random_range(0..population);
    for _ in 1..TOURNAMENT_SIZE {
        let contender = rng.random_range(0..population);
        if fitness(contender) > fitness(best) {
            best = contender;
        }
    }
    best
}

/// Single-point crossover: `child = a[..cut] ++ b[cut..]`.
pub(crate) fn crossover(a: &[u8], b: &[u8], child: &mut [u8], cut: usize) {
    child[..cut].copy_from_slice(&a[..cut]);
    child[cut..].copy_from_slice(&b[cut..]);
}

/// Re-draw each gene independently with probability `rate`.
///
/// Instead of testing every gene, the gap to the next mutated gene is drawn
/// from the geometric distribution `floor(ln(u) / ln(1 - rate))`.
pub(crate) fn mutate(genes: &mut [u8], rate: f64, rng: &mut impl Rng) {
    if rate <= 0.0 {
        return;
    }
    // `ln_1p` keeps tiny rates from rounding `1 - rate` to exactly 1.
    let log_keep = (-rate).ln_1p();
    if log_keep >= 0.0 {
        return;
    }
    let mut idx = 0usize;
    while idx < genes.len() {
        let mut u: f64 = rng.random();
        if u == 0.0 {
            u = MIN_UNIFORM;
        }
        // Saturating cast: a huge gap just ends the loop.
        idx = idx.saturating_add((u.ln() / log_keep) as usize);
        if idx < genes.len() {
            genes[idx] = rng.random_range(0..4);
            idx += 1;
        }
    }
}

/// Crossover at a uniform cut in `0..len`, then mutation.
pub(crate) fn breed(a: &[u8], b: &[u8], child: &mut [u8], rate: f64, rng: &mut impl Rng) {
    let cut = rng.random_range(0..child.len());
    crossover(a, b, child, cut);
    mutate(child, rate, rng);
}
