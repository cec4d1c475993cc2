//! Report jobs: a chunked read → process → write pipeline over one entity type.

pub mod jobs;
pub mod pipeline;

pub use jobs::{run_job, team_report_job, user_report_job, JobName};
pub use pipeline::{ChunkPipeline, ItemProcessor, ItemReader, ItemWriter, JobReport, JobStatus};
