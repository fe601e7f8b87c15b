use convect1d::domain::*;
use convect1d::grid::Grid;
use convect1d::initial_conditions;
use convect1d::solver;
use convect1d::stencil::standard_stencils::*;
use convect1d::util::*;

use float_cmp::assert_approx_eq;

const CHUNK_SIZE: usize = 7;

fn worked_example_domain(grid: &Grid) -> OwnedDomain {
    let mut domain = OwnedDomain::new(grid.interval());
    initial_conditions::step_ic_1d(
        &mut domain,
        1.0,
        2.0,
        0.5,
        1.0,
        grid.spacing(),
        CHUNK_SIZE,
    );
    domain
}

#[test]
fn boundary_invariance() {
    // The leftmost point is never modified, whatever the step count
    // and whatever value it starts with.
    let stencil = linear_convection_1d(0.025, 0.05, 1.0).unwrap();
    for n_steps in [0, 1, 2, 5, 25] {
        let interval = Interval::new(0, 40);
        let mut input = OwnedDomain::new(interval);
        input.par_set_values(
            |coord| 0.3 + 0.1 * (coord as f64).sin(),
            CHUNK_SIZE,
        );
        let first = input.view(0);
        let mut output = OwnedDomain::new(interval);

        solver::march(&stencil, &mut input, &mut output, n_steps, CHUNK_SIZE)
            .unwrap();

        assert_approx_eq!(f64, output.view(0), first, ulps = 0);
    }
}

#[test]
fn zero_step_identity() {
    let grid = Grid::new(41, 0.0, 2.0).unwrap();
    let stencil =
        linear_convection_1d(0.025, grid.spacing(), 1.0).unwrap();
    let mut input = worked_example_domain(&grid);
    let expected = input.buffer().to_vec();
    let mut output = OwnedDomain::new(grid.interval());

    solver::march(&stencil, &mut input, &mut output, 0, CHUNK_SIZE).unwrap();

    assert_eq!(output.buffer(), expected.as_slice());
}

#[test]
fn step_count_composition() {
    // a steps then b steps lands on the same state as a + b steps.
    let grid = Grid::new(41, 0.0, 2.0).unwrap();
    let stencil =
        linear_convection_1d(0.025, grid.spacing(), 1.0).unwrap();

    for (a, b) in [(0, 5), (1, 1), (7, 18), (25, 0)] {
        let mut whole_input = worked_example_domain(&grid);
        let mut whole_output = OwnedDomain::new(grid.interval());
        solver::march(
            &stencil,
            &mut whole_input,
            &mut whole_output,
            a + b,
            CHUNK_SIZE,
        )
        .unwrap();

        let mut split_a = worked_example_domain(&grid);
        let mut split_b = OwnedDomain::new(grid.interval());
        solver::march(&stencil, &mut split_a, &mut split_b, a, CHUNK_SIZE)
            .unwrap();
        // Level a sits in split_b; keep marching with the other
        // buffer as scratch.
        solver::march(&stencil, &mut split_b, &mut split_a, b, CHUNK_SIZE)
            .unwrap();

        for i in 0..grid.n_points() {
            assert_approx_eq!(
                f64,
                split_a.buffer()[i],
                whole_output.buffer()[i]
            );
        }
    }
}

#[test]
fn worked_example_smooths_and_translates() {
    // 41 points on [0, 2], dt = 0.025, c = 1, 25 steps: the sharp step
    // is not conserved. The 2.0 plateau erodes and the profile moves
    // right, leaving fractional values in between.
    let grid = Grid::new(41, 0.0, 2.0).unwrap();
    let stencil =
        linear_convection_1d(0.025, grid.spacing(), 1.0).unwrap();
    let mut input = worked_example_domain(&grid);
    let mut output = OwnedDomain::new(grid.interval());

    solver::march(&stencil, &mut input, &mut output, 25, CHUNK_SIZE).unwrap();

    assert_approx_eq!(f64, output.view(0), 1.0, ulps = 0);

    let mut max_value = f64::NEG_INFINITY;
    let mut argmax = 0;
    for coord in grid.interval().coord_iter() {
        let v = output.view(coord);
        if v > max_value {
            max_value = v;
            argmax = coord;
        }
    }

    // Peak no longer reaches 2.0 anywhere.
    assert!(max_value < 2.0);
    assert!(max_value > 1.2);
    // The crest has moved past the initial plateau's right edge.
    assert!(argmax > 20);
    // Repeated fractional blending leaves values strictly between the
    // baseline and the elevated level.
    let blended = output
        .buffer()
        .iter()
        .filter(|v| **v > 1.0 + 1e-9 && **v < 2.0 - 1e-9)
        .count();
    assert!(blended > 0);
    // And no point still sits exactly on the elevated plateau.
    let on_plateau = output
        .buffer()
        .iter()
        .filter(|v| (**v - 2.0).abs() < 1e-9)
        .count();
    assert_eq!(on_plateau, 0);
}

#[test]
fn instability_outside_courant_bound() {
    // Courant number 2: magnitudes grow without bound as the step
    // count increases. Documented behavior of the explicit scheme.
    let grid = Grid::new(41, 0.0, 2.0).unwrap();
    let dx = grid.spacing();
    let dt = 0.1;
    assert!(courant_number(1.0, dt, dx) > 1.0);
    let stencil = linear_convection_1d(dt, dx, 1.0).unwrap();

    let max_abs_after = |n_steps: usize| -> f64 {
        let mut input = worked_example_domain(&grid);
        let mut output = OwnedDomain::new(grid.interval());
        solver::march(&stencil, &mut input, &mut output, n_steps, CHUNK_SIZE)
            .unwrap();
        output.buffer().iter().fold(0.0_f64, |m, v| m.max(v.abs()))
    };

    let m10 = max_abs_after(10);
    let m20 = max_abs_after(20);
    let m40 = max_abs_after(40);
    assert!(m10 > 2.0);
    assert!(m20 > 10.0 * m10);
    assert!(m40 > 10.0 * m20);
    assert!(m40 > 1e6);
}
