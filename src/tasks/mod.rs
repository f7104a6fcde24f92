//! Background Tasks Module
//!
//! Contains background tasks that run periodically during service operation.
//!
//! # Tasks
//! - Cleanup: Sweeps expired values out of the in-memory adapter

mod cleanup;

pub use cleanup::{spawn_cleanup_task, stop_cleanup_task};
