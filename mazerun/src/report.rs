use std::fmt;
use std::time::{Duration, Instant};

use mazerun_core::{Grid, Path, Solver};

/// What one timed solver run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub name: String,
    pub path: Path,
    /// Sum of the weights entered after the start.
    pub cost: u64,
    /// The path ends on the goal.
    pub success: bool,
    pub elapsed: Duration,
}

impl RunReport {
    /// Wall-clock time in milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "[FAIL] {} found no path | Time: {:.2} ms", self.name, self.millis());
        }
        write!(
            f,
            "[{}] {} | Cost: {} | Time: {:.2} ms | Steps: {}",
            if self.success { "SUCCESS" } else { "FAIL" },
            self.name,
            self.cost,
            self.millis(),
            self.path.len()
        )
    }
}

/// Solve `grid` with `solver`, timing the call, and log the report.
pub fn run<S: Solver + ?Sized>(solver: &S, grid: &Grid) -> RunReport {
    let name = solver.name();
    log::debug!("{name}: solving {}x{} maze", grid.rows(), grid.cols());

    let started = Instant::now();
    let path = solver.solve(grid);
    let elapsed = started.elapsed();

    let report = RunReport {
        cost: path.total_cost(),
        success: path.reached_goal(),
        name,
        path,
        elapsed,
    };
    log::info!("{report}");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerun_core::{GridBuilder, Pos};
    use mazerun_paths::Dijkstra;

    fn report(path: Path, success: bool) -> RunReport {
        RunReport {
            name: "Test".to_string(),
            cost: path.total_cost(),
            path,
            success,
            elapsed: Duration::from_micros(1500),
        }
    }

    #[test]
    fn success_line() {
        let g = GridBuilder::new(1, 3)
            .fill_weight(2)
            .start(Pos::new(0, 0))
            .goal(Pos::new(0, 2))
            .build()
            .unwrap();
        let r = run(&Dijkstra::new(), &g);
        assert!(r.success);
        assert_eq!(r.cost, 4);
        assert_eq!(r.name, "Dijkstra's Algorithm");

        let shown = report(r.path, true).to_string();
        assert_eq!(shown, "[SUCCESS] Test | Cost: 4 | Time: 1.50 ms | Steps: 3");
    }

    #[test]
    fn empty_path_line() {
        assert_eq!(
            report(Path::empty(), false).to_string(),
            "[FAIL] Test found no path | Time: 1.50 ms"
        );
    }

    #[test]
    fn walled_off_goal_is_a_failure() {
        let g = GridBuilder::new(1, 3)
            .start(Pos::new(0, 0))
            .wall(Pos::new(0, 1))
            .goal(Pos::new(0, 2))
            .build()
            .unwrap();
        let r = run(&Dijkstra::new(), &g);
        assert!(!r.success);
        assert!(r.path.is_empty());
        assert_eq!(r.cost, 0);
    }
}
