//! The best individual seen across all generations.

use crate::config::STAGNATION_LIMIT;
use crate::maze::Evaluation;

/// Global best of a run, plus a count of generations that failed to beat it.
#[derive(Debug, Clone)]
pub(crate) struct Incumbent {
    pub(crate) genes: Vec<u8>,
    pub(crate) eval: Evaluation,
    pub(crate) stagnation: usize,
}

impl Incumbent {
    pub(crate) fn new(genome_length: usize) -> Self {
        Self {
            genes: vec![0; genome_length],
            eval: Evaluation::default(),
            stagnation: 0,
        }
    }

    /// Offer a generation's best. Installs it and resets stagnation when it
    /// is strictly fitter; otherwise counts one more stagnant generation.
    pub(crate) fn offer(&mut self, genes: &[u8], eval: Evaluation) -> bool {
        if eval.fitness > self.eval.fitness {
            self.genes.copy_from_slice(genes);
            self.eval = eval;
            self.stagnation = 0;
            true
        } else {
            self.stagnation += 1;
            false
        }
    }

    /// A successful best that has not improved for longer than the limit.
    pub(crate) fn converged(&self) -> bool {
        self.eval.reached_goal && self.stagnation > STAGNATION_LIMIT
    }
}
