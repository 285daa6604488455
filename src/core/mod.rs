pub mod counter;
pub mod tracer;

pub use crate::domain::model::{LoopTrace, Parity, StepAction, Tally, TraceStep};
pub use crate::domain::ports::Console;
pub use crate::utils::error::Result;
