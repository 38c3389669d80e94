//! Object-population GA: one record per individual, full sort per generation.

use mazerun_core::{Grid, Path, Solver};
use rand::Rng;
use rayon::prelude::*;

use crate::config::{GeneticParams, ResolvedParams};
use crate::incumbent::Incumbent;
use crate::maze::{Evaluation, FlatMaze};
use crate::ops::{CHUNK, breed, goal_bias, is_guided, seed_genome, task_rng, tournament};
use crate::reconstruct::reconstruct_path;
use crate::{GaOutcome, unreachable_outcome};

#[derive(Debug, Clone)]
struct Individual {
    genes: Vec<u8>,
    eval: Evaluation,
}

impl Individual {
    fn new(genome_length: usize) -> Self {
        Self {
            genes: vec![0; genome_length],
            eval: Evaluation::default(),
        }
    }
}

/// Two generations of individuals, swapped after every reproduction.
struct Population {
    current: Vec<Individual>,
    next: Vec<Individual>,
}

impl Population {
    fn seeded(params: &ResolvedParams, maze: &FlatMaze, seed: u64) -> Self {
        let n = params.population_size;
        let mut current = vec![Individual::new(params.genome_length); n];
        let next = current.clone();
        let (start, goal) = maze.endpoints();
        let bias = goal_bias(start, goal);

        current
            .par_chunks_mut(CHUNK)
            .enumerate()
            .for_each(|(chunk, inds)| {
                let mut rng = task_rng(seed, 0, chunk);
                for (k, ind) in inds.iter_mut().enumerate() {
                    let guided = is_guided(chunk * CHUNK + k, n);
                    seed_genome(&mut ind.genes, guided, bias, &mut rng);
                }
            });

        Self { current, next }
    }

    fn evaluate(&mut self, maze: &FlatMaze) {
        self.current
            .par_iter_mut()
            .for_each(|ind| ind.eval = maze.walk(&ind.genes));
    }

    /// Sort by fitness, best first.
    fn rank(&mut self) {
        self.current
            .par_sort_by(|a, b| b.eval.fitness.total_cmp(&a.eval.fitness));
    }

    /// Fill `next`: ranked elites first, then bred children.
    fn reproduce(&mut self, params: &ResolvedParams, seed: u64, generation: usize) {
        let elites = params.elitism;
        for (dst, src) in self.next[..elites].iter_mut().zip(&self.current[..elites]) {
            dst.genes.copy_from_slice(&src.genes);
            dst.eval = src.eval;
        }

        let parents = &self.current;
        let n = parents.len();
        let rate = params.mutation_rate;
        self.next[elites..]
            .par_chunks_mut(CHUNK)
            .enumerate()
            .for_each(|(chunk, children)| {
                let mut rng = task_rng(seed, generation as u64 + 1, chunk);
                for child in children.iter_mut() {
                    let a = tournament(|i| parents[i].eval.fitness, n, &mut rng);
                    let b = tournament(|i| parents[i].eval.fitness, n, &mut rng);
                    breed(&parents[a].genes, &parents[b].genes, &mut child.genes, rate, &mut rng);
                }
            });
    }

    fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }
}

/// GA that keeps each individual as its own genome buffer and fully sorts
/// the population every generation.
#[derive(Debug, Clone, Default)]
pub struct PopulationGa {
    params: GeneticParams,
}

impl PopulationGa {
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
        log::debug!("population ga: {params:?}");

        if let Some(outcome) = unreachable_outcome(grid) {
            return outcome;
        }

        let seed = params.seed.unwrap_or_else(|| rand::rng().random());
        let maze = FlatMaze::new(grid);
        let mut population = Population::seeded(&params, &maze, seed);
        let mut best = Incumbent::new(params.genome_length);
        let mut generations = 0;

        for generation in 0..params.generations {
            generations = generation + 1;
            population.evaluate(&maze);
            population.rank();

            let top = &population.current[0];
            if best.offer(&top.genes, top.eval) {
                log::debug!(
                    "generation {generation}: best fitness {} (goal: {})",
                    best.eval.fitness,
                    best.eval.reached_goal
                );
            }
            log::trace!(
                "generation {generation}: population best {}, stagnation {}",
                top.eval.fitness,
                best.stagnation
            );

            if best.converged() {
                log::debug!("converged after {generations} generations");
                break;
            }

            population.reproduce(&params, seed, generation);
            population.swap();
        }

        GaOutcome {
            path: reconstruct_path(grid, &best.genes, best.eval.used_genes),
            generations,
            best_fitness: best.eval.fitness,
            reached_goal: best.eval.reached_goal,
        }
    }
}

impl Solver for PopulationGa {
    fn name(&self) -> String {
        format!(
            "GA (Mut: {:.2}, Elite: {})",
            self.params.mutation_rate, self.params.elitism
        )
    }

    fn solve(&self, grid: &Grid) -> Path {
        self.run(grid).path
    }
}
