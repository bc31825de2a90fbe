//! # noise-threshold-sim
//!
//! Closed-form comparison of two logical-information models over a sweep of
//! system sizes and noise probabilities, locating where each size crosses
//! from logical survival into noise dominance.
//!
//! Two curves are evaluated at every grid point (n qubits, error rate p):
//!
//! - **Exponential survival**: `(1-p)^n` — the probability that no unit fails.
//! - **Linear coherence**: `max(0, 1 - n·p)` — a signal that dies exactly at
//!   the analytic threshold `p* = 1/n`.
//!
//! Everything here is algebraic: no quantum state is represented and no fault
//! events are sampled during the sweep. The engine is a stateless pipeline
//! (grid → model evaluation → threshold detection → aggregation) whose output
//! is consumed read-only by an external rendering collaborator.
//!
//! ## Usage
//!
//! ```
//! use noise_threshold_sim::prelude::*;
//!
//! let config = SweepConfig {
//!     min_exponent: 2,
//!     max_exponent: 6,
//!     ..SweepConfig::default()
//! };
//! let result = run_sweep(&config).unwrap();
//! for record in &result {
//!     println!("n={}: p* = {}", record.n, record.crossover.analytic_threshold);
//! }
//! ```

pub mod error;
pub mod grid;
pub mod model;
pub mod codes;
pub mod threshold;
pub mod sweep;
pub mod agreement;
pub mod trace;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::grid::*;
    pub use crate::model::*;
    pub use crate::codes::*;
    pub use crate::threshold::*;
    pub use crate::sweep::*;
    pub use crate::agreement::*;
    pub use crate::trace::*;
}
