//! The worked example: a square wave on 41 points over [0, 2],
//! dt = 0.025, c = 1, 25 steps. Courant number 0.5, so the wave
//! translates right and smooths out from numerical diffusion.

use convect1d::demo_args::Args;
use convect1d::domain::*;
use convect1d::grid::Grid;
use convect1d::image;
use convect1d::initial_conditions;
use convect1d::solver;
use convect1d::stencil::standard_stencils::*;

fn main() {
    let args = Args::cli_parse("linear_convection_1d");

    let grid = Grid::new(args.points, 0.0, 2.0).unwrap();
    let dx = grid.spacing();
    println!("dx: {}", dx);
    println!(
        "Courant number: {}",
        courant_number(args.wave_speed, args.dt, dx)
    );

    let stencil = linear_convection_1d(args.dt, dx, args.wave_speed).unwrap();

    let mut input = OwnedDomain::new(grid.interval());
    let mut output = OwnedDomain::new(grid.interval());
    let (value_lo, value_hi) = if args.normal_ic {
        initial_conditions::normal_ic_1d(&mut input, args.chunk_size);
        (0.0, 1.0)
    } else {
        initial_conditions::step_ic_1d(
            &mut input,
            1.0,
            2.0,
            0.5,
            1.0,
            dx,
            args.chunk_size,
        );
        (1.0, 2.0)
    };

    let xs = grid.coords();
    let initial = input.buffer().to_vec();
    image::line_plot(
        &args.output_path("initial.png"),
        &xs,
        &[initial.as_slice()],
        600,
        400,
    );

    let mut history = image::TimeHistory::new(
        grid.interval(),
        args.steps as u32 + 1,
        value_lo,
        value_hi,
    );
    history.add_line(0, input.buffer());
    for t in 1..=args.steps as u32 {
        solver::march(&stencil, &mut input, &mut output, 1, args.chunk_size)
            .unwrap();
        std::mem::swap(&mut input, &mut output);
        history.add_line(t, input.buffer());
    }

    image::line_plot(
        &args.output_path("final.png"),
        &xs,
        &[input.buffer()],
        600,
        400,
    );
    image::line_plot(
        &args.output_path("before_after.png"),
        &xs,
        &[initial.as_slice(), input.buffer()],
        600,
        400,
    );
    if args.write_history {
        history.write(&args.output_path("history.png"));
    }
}
