//! Deterministic current-sweep state machine for the drivebin fixture
//! generator.
//!
//! This crate provides [`SweepState`], the `(id, iq)` cursor that drives
//! fixture generation, as a plain value with pure update functions:
//!
//! - The quadrature axis increments once per sample and cycles every eight
//!   steps, carrying into the direct axis.
//! - The direct axis optionally wraps at an inclusive bound.
//! - The derived torque estimate is a fixed linear combination of the two
//!   indices.
//!
//! # Design Principles
//!
//! - **Pure** - No I/O, no globals; advancing returns a new state.
//! - **Deterministic** - The cursor position after `k` steps is fully
//!   determined by `k` and the wrap bound.
//!
//! # Example
//!
//! ```
//! use sweep::SweepState;
//!
//! let state = SweepState::origin();
//! let after_eight = (0..8).fold(state, |s, _| s.advance(None));
//! assert_eq!(after_eight, SweepState::new(1, 0));
//! ```

mod state;

pub use state::{SweepState, IQ_MAX};
