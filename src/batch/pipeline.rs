use async_trait::async_trait;
use tracing::{debug, error, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Idle,
    Reading,
    Processing,
    Writing,
    Completed,
    Failed,
}

/// Fetches the whole input set once.
#[async_trait]
pub trait ItemReader<T>: Send + Sync {
    async fn read_all(&self) -> anyhow::Result<Vec<T>>;
}

pub trait ItemProcessor<T>: Send + Sync {
    fn process(&self, item: T) -> anyhow::Result<T>;
}

pub trait ItemWriter<T>: Send + Sync {
    fn write(&self, chunk: &[T]) -> anyhow::Result<()>;
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub job: String,
    pub status: JobStatus,
    pub read: usize,
    pub processed: usize,
    pub written: usize,
    /// Writer invocations.
    pub chunks: usize,
    pub error: Option<String>,
}

impl JobReport {
    fn new(job: &str) -> Self {
        Self {
            job: job.to_owned(),
            status: JobStatus::Idle,
            read: 0,
            processed: 0,
            written: 0,
            chunks: 0,
            error: None,
        }
    }

    fn transition(&mut self, next: JobStatus) {
        debug!(job = %self.job, from = ?self.status, to = ?next, "job state");
        self.status = next;
    }

    fn fail(mut self, e: anyhow::Error) -> Self {
        error!(job = %self.job, stage = ?self.status, error = %e, "job failed");
        self.transition(JobStatus::Failed);
        self.error = Some(format!("{e:#}"));
        self
    }
}

pub struct ChunkPipeline<T> {
    name: String,
    chunk_size: usize,
    reader: Box<dyn ItemReader<T>>,
    processor: Box<dyn ItemProcessor<T>>,
    writer: Box<dyn ItemWriter<T>>,
}

impl<T: Send + 'static> ChunkPipeline<T> {
    /// `chunk_size` below 1 is treated as 1.
    pub fn new(
        name: impl Into<String>,
        chunk_size: usize,
        reader: Box<dyn ItemReader<T>>,
        processor: Box<dyn ItemProcessor<T>>,
        writer: Box<dyn ItemWriter<T>>,
    ) -> Self {
        Self {
            name: name.into(),
            chunk_size: chunk_size.max(1),
            reader,
            processor,
            writer,
        }
    }

    /// Reads everything, then processes and writes chunk by chunk. The
    /// first error stops the run and leaves the report `Failed`; chunks
    /// already written stay written. An empty input still gets one
    /// (empty) writer call.
    #[instrument(skip(self), fields(job = %self.name))]
    pub async fn run(&self) -> JobReport {
        let mut report = JobReport::new(&self.name);

        report.transition(JobStatus::Reading);
        let items = match self.reader.read_all().await {
            Ok(items) => items,
            Err(e) => return report.fail(e),
        };
        report.read = items.len();
        info!(items = report.read, chunk_size = self.chunk_size, "job started");

        let mut items = items.into_iter();
        loop {
            let chunk: Vec<T> = items.by_ref().take(self.chunk_size).collect();
            if chunk.is_empty() && report.chunks > 0 {
                break;
            }

            report.transition(JobStatus::Processing);
            let mut processed = Vec::with_capacity(chunk.len());
            for item in chunk {
                match self.processor.process(item) {
                    Ok(item) => {
                        processed.push(item);
                        report.processed += 1;
                    }
                    Err(e) => return report.fail(e),
                }
            }

            report.transition(JobStatus::Writing);
            if let Err(e) = self.writer.write(&processed) {
                return report.fail(e);
            }
            report.written += processed.len();
            report.chunks += 1;
        }

        report.transition(JobStatus::Completed);
        info!(
            processed = report.processed,
            written = report.written,
            chunks = report.chunks,
            "job completed"
        );
        report
    }
}
