//! Application services (use cases).
//!
//! These services drive the domain engine and coordinate the feed port:
//!
//! - [`classifier`]: one item through every engine stage
//! - [`pipeline`]: a run's batches into a ranked [`Report`]
//! - [`run`]: concurrent retrieval feeding the pipeline

pub mod classifier;
pub mod pipeline;
pub mod report;
pub mod run;

pub use classifier::{Classifier, Diagnosis, Outcome};
pub use pipeline::{Pipeline, SourceBatch};
pub use report::Report;
pub use run::NewsRun;
