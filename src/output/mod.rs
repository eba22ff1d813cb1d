// src/output/mod.rs
//! Output handling with planning separated from execution.
//!
//! Plans are plain data built by pure functions; `deliver` is the only
//! code path that performs I/O.

mod paths;
mod types;
mod writer;

pub use paths::{index_output_path, post_href, post_output_path};
pub use types::{
    CompletedOperation, DeliveryTarget, ExecutionStats, FailedOperation, OutputPlan, OutputReport,
};
pub use writer::{deliver, deliver_all};
