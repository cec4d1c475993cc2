use anyhow::Context;
use teamroster::{
    batch::{run_job, JobStatus},
    config::AppConfig,
    db, logging,
    state::AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = AppConfig::from_env()?;
    let job = config
        .batch
        .job
        .context("BATCH_JOB_NAME must name the job to run (teamReportJob or userReportJob)")?;

    let pool = db::connect(&config).await?;
    db::migrate(&pool).await?;
    let state = AppState::from_pool(pool);

    let report = run_job(job, &state, config.batch.chunk_size).await;
    info!(
        job = %report.job,
        status = ?report.status,
        read = report.read,
        written = report.written,
        chunks = report.chunks,
        "job finished"
    );

    if report.status != JobStatus::Completed {
        anyhow::bail!(
            "{} failed: {}",
            report.job,
            report.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}
