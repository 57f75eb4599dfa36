//! Configuration
//!
//! Options are layered, later layers winning at every depth:
//! 1. Built-in defaults
//! 2. Task file global `options`
//! 3. Target `options`
//! 4. CLI flags

mod merge;
mod options;
mod task;

pub use merge::{deep_merge, merge_all};
pub use options::Options;
pub use task::{Task, TaskTarget, DEFAULT_TASK_FILE};
