//! Structure-of-arrays GA: all genomes live in one buffer.

use std::cmp::Ordering;

use mazerun_core::{Grid, Path, Solver};
use rand::Rng;
use rayon::prelude::*;

use crate::config::{GeneticParams, ResolvedParams};
use crate::incumbent::Incumbent;
use crate::maze::{Evaluation, FlatMaze};
use crate::ops::{CHUNK, breed, goal_bias, is_guided, seed_genome, task_rng, tournament};
use crate::reconstruct::reconstruct_path;
use crate::{GaOutcome, unreachable_outcome};

/// Population stored column-wise. Genome `i` occupies
/// `genes[i * len..(i + 1) * len]`; its evaluation is spread over `fitness[i]`,
/// `used[i]` and `reached[i]`.
struct Columns {
    len: usize,
    genes: Vec<u8>,
    next_genes: Vec<u8>,
    fitness: Vec<f64>,
    used: Vec<usize>,
    reached: Vec<bool>,
    order: Vec<usize>,
}

impl Columns {
    fn seeded(params: &ResolvedParams, maze: &FlatMaze, seed: u64) -> Self {
        let n = params.population_size;
        let len = params.genome_length;
        let mut genes = vec![0u8; n * len];
        let (start, goal) = maze.endpoints();
        let bias = goal_bias(start, goal);

        genes
            .par_chunks_mut(len * CHUNK)
            .enumerate()
            .for_each(|(chunk, block)| {
                let mut rng = task_rng(seed, 0, chunk);
                for (k, genome) in block.chunks_mut(len).enumerate() {
                    let guided = is_guided(chunk * CHUNK + k, n);
                    seed_genome(genome, guided, bias, &mut rng);
                }
            });

        Self {
            len,
            next_genes: genes.clone(),
            genes,
            fitness: vec![f64::NEG_INFINITY; n],
            used: vec![0; n],
            reached: vec![false; n],
            order: (0..n).collect(),
        }
    }

    #[inline]
    fn genome(&self, i: usize) -> &[u8] {
        &self.genes[i * self.len..(i + 1) * self.len]
    }

    #[inline]
    fn eval(&self, i: usize) -> Evaluation {
        Evaluation {
            fitness: self.fitness[i],
            used_genes: self.used[i],
            reached_goal: self.reached[i],
        }
    }

    fn evaluate(&mut self, maze: &FlatMaze) {
        self.genes
            .par_chunks(self.len)
            .zip(self.fitness.par_iter_mut())
            .zip(self.used.par_iter_mut())
            .zip(self.reached.par_iter_mut())
            .for_each(|(((genome, fitness), used), reached)| {
                let e = maze.walk(genome);
                *fitness = e.fitness;
                *used = e.used_genes;
                *reached = e.reached_goal;
            });
    }

    /// Index of the fittest genome; the lowest index wins ties.
    fn best(&self) -> usize {
        let mut best = 0;
        for (i, &f) in self.fitness.iter().enumerate().skip(1) {
            if f > self.fitness[best] {
                best = i;
            }
        }
        best
    }

    /// Put the `count` fittest indices, best first, at the front of `order`.
    /// The rest of `order` is left unordered.
    fn select_elites(&mut self, count: usize) {
        let fitness = &self.fitness;
        let by_rank =
            |a: &usize, b: &usize| -> Ordering { fitness[*b].total_cmp(&fitness[*a]).then(a.cmp(b)) };

        self.order.clear();
        self.order.extend(0..fitness.len());
        if count == 0 {
            return;
        }
        if count < self.order.len() {
            self.order.select_nth_unstable_by(count - 1, by_rank);
        }
        self.order[..count].sort_unstable_by(by_rank);
    }

    /// Fill `next_genes`: elites in slots `0..elitism`, bred children after.
    fn reproduce(&mut self, params: &ResolvedParams, seed: u64, generation: usize) {
        let elites = params.elitism;
        let len = self.len;
        self.select_elites(elites);

        for (slot, &src) in self.order[..elites].iter().enumerate() {
            self.next_genes[slot * len..(slot + 1) * len]
                .copy_from_slice(&self.genes[src * len..(src + 1) * len]);
        }

        let parents = &self.genes;
        let fitness = &self.fitness;
        let n = fitness.len();
        let rate = params.mutation_rate;
        self.next_genes[elites * len..]
            .par_chunks_mut(len * CHUNK)
            .enumerate()
            .for_each(|(chunk, block)| {
                let mut rng = task_rng(seed, generation as u64 + 1, chunk);
                for child in block.chunks_mut(len) {
                    let a = tournament(|i| fitness[i], n, &mut rng);
                    let b = tournament(|i| fitness[i], n, &mut rng);
                    breed(
                        &parents[a * len..(a + 1) * len],
                        &parents[b * len..(b + 1) * len],
                        child,
                        rate,
                        &mut rng,
                    );
                }
            });
    }

    fn swap(&mut self) {
        std::mem::swap(&mut self.genes, &mut self.next_genes);
    }
}

/// GA that packs the population into flat arrays and selects elites with a
/// partial sort.
///
/// Same operators, defaults and outcome as
/// [`PopulationGa`](crate::PopulationGa); it trades the per-generation full
/// sort for a linear best scan and an `O(n)` elite selection.
#[derive(Debug, Clone, Default)]
pub struct FlatGa {
    params: GeneticParams,
}

impl FlatGa {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: GeneticParams) -> Self {
        Self { params }
    }

    /// Replace the configuration. Non-positive sizes fall back to defaults.
    pub fn set_parameters(
        &mut self,
        population_size: i64,
        generations: i64,
        genome_length: i64,
        mutation_rate: f64,
        elitism: i64,
    ) {
        let seed = self.params.seed;
        self.params = GeneticParams {
            seed,
            ..GeneticParams::new(population_size, generations, genome_length, mutation_rate, elitism)
        };
    }

    pub fn params(&self) -> &GeneticParams {
        &self.params
    }

    /// Evolve a path on `grid`.
    pub fn run(&self, grid: &Grid) -> GaOutcome {
        let params = self.params.resolve(grid.area());
        log::debug!("flat ga: {params:?}");

        if let Some(outcome) = unreachable_outcome(grid) {
            return outcome;
        }

        let seed = params.seed.unwrap_or_else(|| rand::rng().random());
        let maze = FlatMaze::new(grid);
        let mut columns = Columns::seeded(&params, &maze, seed);
        let mut best = Incumbent::new(params.genome_length);
        let mut generations = 0;

        for generation in 0..params.generations {
            generations = generation + 1;
            columns.evaluate(&maze);

            let top = columns.best();
            if best.offer(columns.genome(top), columns.eval(top)) {
                log::debug!(
                    "generation {generation}: best fitness {} (goal: {})",
                    best.eval.fitness,
                    best.eval.reached_goal
                );
            }
            log::trace!(
                "generation {generation}: population best {}, stagnation {}",
                columns.fitness[top],
                best.stagnation
            );

            if best.converged() {
                log::debug!("converged after {generations} generations");
                break;
            }

            columns.reproduce(&params, seed, generation);
            columns.swap();
        }

        GaOutcome {
            path: reconstruct_path(grid, &best.genes, best.eval.used_genes),
            generations,
            best_fitness: best.eval.fitness,
            reached_goal: best.eval.reached_goal,
        }
    }
}

impl Solver for FlatGa {
    fn name(&self) -> String {
        format!(
            "GA SoA (Mut: {:.2}, Elite: {})",
            self.params.mutation_rate, self.params.elitism
        )
    }

    fn solve(&self, grid: &Grid) -> Path {
        self.run(grid).path
    }
}
