//! `mazerun`: solve a weighted text maze with one or all solvers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mazerun::{Config, GeneticParams, RunReport, SolverKind, load_maze};

#[derive(Parser, Debug)]
#[command(name = "mazerun")]
#[command(about = "Find a cheap path through a weighted maze", long_about = None)]
struct Args {
    /// Maze file: one row per line, tokens `#`, `S`, `G` or a quoted weight
    maze: PathBuf,

    /// Solver to run: dijkstra, astar, ga, ga-soa or all
    #[arg(short, long, default_value = "all")]
    solver: String,

    /// GA population size (<= 0 derives it from the maze area)
    #[arg(long, allow_negative_numbers = true)]
    population: Option<i64>,

    /// GA generation cap (<= 0 uses the default)
    #[arg(long, allow_negative_numbers = true)]
    generations: Option<i64>,

    /// GA genome length (<= 0 derives it from the maze area)
    #[arg(long, allow_negative_numbers = true)]
    genome_length: Option<i64>,

    /// GA per-gene mutation probability
    #[arg(long)]
    mutation_rate: Option<f64>,

    /// Number of GA individuals copied unchanged into the next generation
    #[arg(long)]
    elitism: Option<i64>,

    /// Seed for reproducible GA runs
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with a `[genetic]` table; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the maze with each found path marked
    #[arg(short, long)]
    render: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Overlay the GA flags that were given on `base`.
    fn genetic_params(&self, base: GeneticParams) -> GeneticParams {
        GeneticParams {
            population_size: self.population.unwrap_or(base.population_size),
            generations: self.generations.unwrap_or(base.generations),
            genome_length: self.genome_length.unwrap_or(base.genome_length),
            mutation_rate: self.mutation_rate.unwrap_or(base.mutation_rate),
            elitism: self.elitism.unwrap_or(base.elitism),
            seed: self.seed.or(base.seed),
        }
    }

    fn solvers(&self, params: GeneticParams) -> Result<Vec<SolverKind>> {
        if self.solver.trim().eq_ignore_ascii_case("all") {
            return Ok(SolverKind::all(params));
        }
        let kind: SolverKind = self.solver.parse()?;
        Ok(vec![kind.with_genetic_params(params)])
    }
}

fn load_config(path: &std::path::Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    Config::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let params = args.genetic_params(config.genetic);

    let grid = load_maze(&args.maze)
        .with_context(|| format!("loading maze {}", args.maze.display()))?;
    log::info!(
        "loaded {}x{} maze from {} (start {}, goal {})",
        grid.rows(),
        grid.cols(),
        args.maze.display(),
        grid.start(),
        grid.goal()
    );

    let reports: Vec<RunReport> = args
        .solvers(params)?
        .iter()
        .map(|solver| mazerun::run(solver, &grid))
        .collect();

    for report in &reports {
        if args.render && !report.path.is_empty() {
            println!("{}", report.name);
            println!("{}", grid.render_path(&report.path));
        }
    }

    let solved = reports.iter().filter(|r| r.success).count();
    log::info!("{solved}/{} solvers reached the goal", reports.len());
    Ok(())
}
