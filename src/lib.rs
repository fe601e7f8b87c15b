pub mod demo_args;
pub mod domain;
pub mod error;
pub mod grid;
pub mod image;
pub mod initial_conditions;
pub mod par_stencil;
pub mod solver;
pub mod stencil;
pub mod util;
