//! What happens outside the stability region: the time step is chosen
//! so the Courant number is 2, and uniform noise feeds the scheme
//! content at every frequency. The magnitudes grow without bound,
//! which is the documented behavior of the method, not a bug.

use convect1d::demo_args::Args;
use convect1d::domain::*;
use convect1d::grid::Grid;
use convect1d::image;
use convect1d::initial_conditions;
use convect1d::solver;
use convect1d::stencil::standard_stencils::*;

fn main() {
    let args = Args::cli_parse("unstable_convection_1d");

    let grid = Grid::new(args.points, 0.0, 2.0).unwrap();
    let dx = grid.spacing();
    // Deliberately violate the stability bound.
    let dt = 2.0 * dx / args.wave_speed;
    println!(
        "Courant number: {}",
        courant_number(args.wave_speed, dt, dx)
    );

    let stencil = linear_convection_1d(dt, dx, args.wave_speed).unwrap();

    let mut input = OwnedDomain::new(grid.interval());
    let mut output = OwnedDomain::new(grid.interval());
    initial_conditions::noise_ic_1d(&mut input, 1.0, 2.0, args.chunk_size);

    let mut history =
        image::TimeHistory::new(grid.interval(), args.steps as u32 + 1, -10.0, 10.0);
    history.add_line(0, input.buffer());
    for t in 1..=args.steps as u32 {
        solver::march(&stencil, &mut input, &mut output, 1, args.chunk_size)
            .unwrap();
        std::mem::swap(&mut input, &mut output);
        history.add_line(t, input.buffer());

        let max_abs = input
            .buffer()
            .iter()
            .fold(0.0_f64, |m, v| m.max(v.abs()));
        if t % 5 == 0 {
            println!("step {}: max |u| = {:e}", t, max_abs);
        }
    }

    if args.write_history {
        history.write(&args.output_path("history.png"));
    }
}
