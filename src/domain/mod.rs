//! State vectors and the buffers behind them.
//! A domain pairs a linear buffer with the index interval it covers,
//! so code can address values by grid coordinate. Views let the solver
//! treat an interior slice of a buffer as its own domain.

mod view;

pub use view::*;
