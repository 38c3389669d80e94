//! Properties every solver must satisfy, checked across solvers.

use mazerun::{
    AStar, Dijkstra, FlatGa, GeneticParams, Grid, GridBuilder, Path, PopulationGa, Pos, Solver,
    SolverKind, parse_maze,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A random maze with start in the top-left and goal in the bottom-right
/// corner. About a quarter of the other cells are walls; weights are 0..=9.
fn random_grid(rng: &mut StdRng) -> Grid {
    let rows = rng.random_range(2..12);
    let cols = rng.random_range(2..12);
    let start = Pos::new(0, 0);
    let goal = Pos::new(rows - 1, cols - 1);

    let mut builder = GridBuilder::new(rows, cols).start(start).goal(goal);
    for row in 0..rows {
        for col in 0..cols {
            let p = Pos::new(row, col);
            if p == start || p == goal {
                continue;
            }
            if rng.random_bool(0.25) {
                builder = builder.wall(p);
            } else {
                builder = builder.weight(p, rng.random_range(0..10));
            }
        }
    }
    builder.build().unwrap()
}

fn small_ga() -> GeneticParams {
    GeneticParams::new(200, 60, 60, 0.05, 10).with_seed(17)
}

fn assert_well_formed(path: &Path, grid: &Grid, who: &str) {
    if path.is_empty() {
        return;
    }
    assert_eq!(path.cells()[0].pos, grid.start(), "{who}: path must begin at the start");
    assert!(path.is_connected(grid), "{who}: path must step between adjacent open cells");
    assert!(path.is_simple(), "{who}: path must not revisit a cell");
}

#[test]
fn three_by_three_scenario() {
    // S . #
    // . . .
    // # . G
    let grid = GridBuilder::new(3, 3)
        .fill_weight(1)
        .start(Pos::new(0, 0))
        .goal(Pos::new(2, 2))
        .wall(Pos::new(0, 2))
        .wall(Pos::new(2, 0))
        .build()
        .unwrap();

    for solver in [SolverKind::Dijkstra(Dijkstra::new()), SolverKind::AStar(AStar::new())] {
        let path = solver.solve(&grid);
        assert_eq!(path.len(), 5, "{}", solver.name());
        assert_eq!(path.total_cost(), 4, "{}", solver.name());
        assert!(path.reached_goal());
    }

    // Parsed endpoints weigh 0, so the same maze read from text costs 3.
    let parsed = parse_maze(
        "S \"1\" #\n\
         \"1\" \"1\" \"1\"\n\
         # \"1\" G",
    )
    .unwrap();
    assert_eq!(Dijkstra::new().solve(&parsed).total_cost(), 3);
}

#[test]
fn quoted_weight_token() {
    let grid = parse_maze("S \"5\" G").unwrap();
    let cell = grid.at(Pos::new(0, 1)).unwrap();
    assert_eq!(cell.weight, 5);
    assert!(!cell.is_wall && !cell.is_start && !cell.is_goal);
    assert_eq!(Dijkstra::new().solve(&grid).total_cost(), 5);
}

#[test]
fn dijkstra_and_astar_agree_on_random_mazes() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..300 {
        let grid = random_grid(&mut rng);
        let d = Dijkstra::new().search(&grid);
        let a = AStar::new().search(&grid);
        match (d, a) {
            (Some(d), Some(a)) => {
                assert_eq!(d.cost, a.cost, "\n{grid}");
                assert_eq!(d.path.total_cost(), d.cost);
                assert_eq!(a.path.total_cost(), a.cost);
                assert!(a.expanded <= grid.area());
                assert_well_formed(&d.path, &grid, "dijkstra");
                assert_well_formed(&a.path, &grid, "astar");
            }
            (None, None) => {}
            (d, a) => panic!("reachability differs: {d:?} vs {a:?}\n{grid}"),
        }
    }
}

#[test]
fn genetic_paths_are_well_formed_and_never_beat_dijkstra() {
    let mut rng = StdRng::seed_from_u64(99);
    let solvers = [
        SolverKind::Genetic(PopulationGa::with_params(small_ga())),
        SolverKind::GeneticSoa(FlatGa::with_params(small_ga())),
    ];
    for _ in 0..10 {
        let grid = random_grid(&mut rng);
        let best = Dijkstra::new().search(&grid).map(|o| o.cost);
        for solver in &solvers {
            let path = solver.solve(&grid);
            assert_well_formed(&path, &grid, &solver.name());
            match best {
                None => assert!(path.is_empty(), "{}: goal is walled off", solver.name()),
                Some(cost) if path.reached_goal() => assert!(path.total_cost() >= cost),
                Some(_) => {}
            }
        }
    }
}

#[test]
fn walled_off_goal_gives_every_solver_an_empty_path() {
    let grid = parse_maze(
        "S \"1\" \"1\"\n\
         \"1\" # #\n\
         \"1\" # G",
    )
    .unwrap();
    for solver in SolverKind::all(small_ga()) {
        let report = mazerun::run(&solver, &grid);
        assert!(report.path.is_empty(), "{}", report.name);
        assert!(!report.success);
    }
}

#[test]
fn every_solver_finds_the_only_corridor() {
    // S 1 1
    // # # 1
    // G 1 1
    let grid = parse_maze(
        "S \"1\" \"1\"\n\
         # # \"1\"\n\
         G \"1\" \"1\"",
    )
    .unwrap();
    for solver in SolverKind::all(small_ga()) {
        let report = mazerun::run(&solver, &grid);
        assert!(report.success, "{}", report.name);
        assert_eq!(report.path.len(), 7, "{}", report.name);
        assert_eq!(report.cost, 5, "{}", report.name);
    }
}

#[test]
fn rendering_marks_the_path() {
    let grid = parse_maze("S \"1\" \"1\"\n# # G").unwrap();
    let path = AStar::new().solve(&grid);
    assert_eq!(grid.render_path(&path), "S**\n##G\n");
}

#[test]
fn grid_text_round_trips() {
    let text = "S \"3\" #\n\"0\" \"12\" G\n";
    let grid = parse_maze(text).unwrap();
    assert_eq!(grid.to_string(), text);
    assert_eq!(parse_maze(&grid.to_string()).unwrap(), grid);
}

#[test]
fn seeded_genetic_runs_are_reproducible() {
    let mut rng = StdRng::seed_from_u64(5);
    let grid = random_grid(&mut rng);
    let ga = PopulationGa::with_params(small_ga());
    let soa = FlatGa::with_params(small_ga());
    assert_eq!(ga.run(&grid), ga.run(&grid));
    assert_eq!(soa.run(&grid).path, soa.run(&grid).path);
}
