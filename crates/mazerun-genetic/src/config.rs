//! GA parameters and the defaults derived from the maze size.

/// Upper bound on the area-derived population size.
pub const MAX_DEFAULT_POPULATION: usize = 6000;
/// Lower bound on the area-derived population size.
pub const MIN_DEFAULT_POPULATION: usize = 2000;
/// Generation cap when none is given.
pub const DEFAULT_GENERATIONS: usize = 3000;
/// Upper bound on the area-derived genome length.
pub const MAX_DEFAULT_GENOME: usize = 10_000;
/// Per-gene mutation probability when none is given.
pub const DEFAULT_MUTATION_RATE: f64 = 0.03;
/// Individuals carried over unchanged each generation, before clamping.
pub const DEFAULT_ELITISM: i64 = 50;
/// Individuals sampled per tournament.
pub const TOURNAMENT_SIZE: usize = 5;
/// Generations without improvement after which a successful run stops.
pub const STAGNATION_LIMIT: usize = 200;
/// Base fitness of a walk that reaches the goal; its cost is subtracted.
pub const SUCCESS_FITNESS: f64 = 100_000_000.0;
/// Share of the initial population seeded with goal-biased genes.
pub const GUIDED_SHARE: f64 = 0.7;

/// User-facing GA configuration.
///
/// Population size, generation cap and genome length accept any value;
/// anything `<= 0` means "derive from the maze area". Elitism is clamped to
/// half the population. A `seed` makes runs reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GeneticParams {
    pub population_size: i64,
    pub generations: i64,
    pub genome_length: i64,
    pub mutation_rate: f64,
    pub elitism: i64,
    pub seed: Option<u64>,
}

impl Default for GeneticParams {
    fn default() -> Self {
        Self {
            population_size: -1,
            generations: -1,
            genome_length: -1,
            mutation_rate: DEFAULT_MUTATION_RATE,
            elitism: DEFAULT_ELITISM,
            seed: None,
        }
    }
}

impl GeneticParams {
    /// Parameters in the order the runner's settings panel lists them.
    pub fn new(
        population_size: i64,
        generations: i64,
        genome_length: i64,
        mutation_rate: f64,
        elitism: i64,
    ) -> Self {
        Self {
            population_size,
            generations,
            genome_length,
            mutation_rate,
            elitism,
            seed: None,
        }
    }

    /// Fix the random seed (builder).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Apply the defaults for a maze of `area` cells.
    pub fn resolve(&self, area: usize) -> ResolvedParams {
        let population_size = positive(self.population_size).unwrap_or_else(|| {
            (area.saturating_mul(4)).clamp(MIN_DEFAULT_POPULATION, MAX_DEFAULT_POPULATION)
        });
        let generations = positive(self.generations).unwrap_or(DEFAULT_GENERATIONS);
        let genome_length = positive(self.genome_length)
            .unwrap_or_else(|| area.saturating_mul(3).clamp(1, MAX_DEFAULT_GENOME));
        let mutation_rate = if self.mutation_rate.is_nan() {
            DEFAULT_MUTATION_RATE
        } else {
            self.mutation_rate.clamp(0.0, 1.0)
        };
        let elitism = usize::try_from(self.elitism)
            .unwrap_or(0)
            .min(population_size / 2);

        ResolvedParams {
            population_size,
            generations,
            genome_length,
            mutation_rate,
            elitism,
            seed: self.seed,
        }
    }
}

fn positive(v: i64) -> Option<usize> {
    if v > 0 { usize::try_from(v).ok() } else { None }
}

/// Concrete parameters for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedParams {
    pub population_size: usize,
    pub generations: usize,
    pub genome_length: usize,
    pub mutation_rate: f64,
    pub elitism: usize,
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_scale_with_area() {
        let small = GeneticParams::default().resolve(9);
        assert_eq!(small.population_size, 2000);
        assert_eq!(small.generations, 3000);
        assert_eq!(small.genome_length, 27);
        assert_eq!(small.mutation_rate, 0.03);
        assert_eq!(small.elitism, 50);

        let mid = GeneticParams::default().resolve(1000);
        assert_eq!(mid.population_size, 4000);
        assert_eq!(mid.genome_length, 3000);

        let big = GeneticParams::default().resolve(100_000);
        assert_eq!(big.population_size, 6000);
        assert_eq!(big.genome_length, 10_000);
    }

    #[test]
    fn non_positive_values_fall_back() {
        let p = GeneticParams::new(0, -5, 0, 0.1, 10).resolve(100);
        assert_eq!(p.population_size, 2000);
        assert_eq!(p.generations, 3000);
        assert_eq!(p.genome_length, 300);
        assert_eq!(p.elitism, 10);
    }

    #[test]
    fn explicit_values_are_kept() {
        let p = GeneticParams::new(300, 40, 64, 0.5, 20)
            .with_seed(9)
            .resolve(100);
        assert_eq!(
            p,
            ResolvedParams {
                population_size: 300,
                generations: 40,
                genome_length: 64,
                mutation_rate: 0.5,
                elitism: 20,
                seed: Some(9),
            }
        );
    }

    #[test]
    fn elitism_is_clamped_to_half_the_population() {
        assert_eq!(GeneticParams::new(30, 1, 1, 0.0, 50).resolve(4).elitism, 15);
        assert_eq!(GeneticParams::new(30, 1, 1, 0.0, -3).resolve(4).elitism, 0);
        // Clamped against the defaulted population.
        assert_eq!(GeneticParams::new(-1, 1, 1, 0.0, 5000).resolve(4).elitism, 1000);
    }

    #[test]
    fn mutation_rate_is_clamped() {
        assert_eq!(GeneticParams::new(10, 1, 1, 3.0, 0).resolve(4).mutation_rate, 1.0);
        assert_eq!(GeneticParams::new(10, 1, 1, -1.0, 0).resolve(4).mutation_rate, 0.0);
        assert_eq!(
            GeneticParams::new(10, 1, 1, f64::NAN, 0).resolve(4).mutation_rate,
            DEFAULT_MUTATION_RATE
        );
    }
}
