use std::{fmt, str::FromStr, sync::Arc};

use async_trait::async_trait;
use tracing::info;

use crate::batch::pipeline::{ChunkPipeline, ItemProcessor, ItemReader, ItemWriter, JobReport};
use crate::state::AppState;
use crate::teams::{Team, TeamUseCase};
use crate::timestamp::format_local;
use crate::users::{User, UserUseCase};

/// Jobs selectable through `BATCH_JOB_NAME`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobName {
    TeamReport,
    UserReport,
}

impl JobName {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobName::TeamReport => "teamReportJob",
            JobName::UserReport => "userReportJob",
        }
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "teamReportJob" => Ok(JobName::TeamReport),
            "userReportJob" => Ok(JobName::UserReport),
            other => anyhow::bail!("unknown batch job: {other}"),
        }
    }
}

fn team_id_label(team_id: Option<i64>) -> String {
    team_id.map_or_else(|| "null".to_owned(), |id| id.to_string())
}

// --- teams ---

pub struct TeamReader {
    teams: Arc<dyn TeamUseCase>,
}

#[async_trait]
impl ItemReader<Team> for TeamReader {
    async fn read_all(&self) -> anyhow::Result<Vec<Team>> {
        Ok(self.teams.list().await?)
    }
}

pub struct TeamReportProcessor;

impl ItemProcessor<Team> for TeamReportProcessor {
    fn process(&self, team: Team) -> anyhow::Result<Team> {
        info!("Processing Team: {} - {}", team.name(), team.description());
        Ok(team)
    }
}

pub struct TeamReportWriter;

impl ItemWriter<Team> for TeamReportWriter {
    fn write(&self, chunk: &[Team]) -> anyhow::Result<()> {
        info!("Writing {} teams to report", chunk.len());
        for team in chunk {
            info!(
                "Team Report: {} - {} (Created: {})",
                team.name(),
                team.description(),
                format_local(&team.created_at())
            );
        }
        Ok(())
    }
}

pub fn team_report_job(teams: Arc<dyn TeamUseCase>, chunk_size: usize) -> ChunkPipeline<Team> {
    ChunkPipeline::new(
        JobName::TeamReport.as_str(),
        chunk_size,
        Box::new(TeamReader { teams }),
        Box::new(TeamReportProcessor),
        Box::new(TeamReportWriter),
    )
}

// --- users ---

pub struct UserReader {
    users: Arc<dyn UserUseCase>,
}

#[async_trait]
impl ItemReader<User> for UserReader {
    async fn read_all(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.users.list().await?)
    }
}

pub struct UserReportProcessor;

impl ItemProcessor<User> for UserReportProcessor {
    fn process(&self, user: User) -> anyhow::Result<User> {
        info!(
            "Processing User: {} - {} (Team ID: {})",
            user.name(),
            user.email(),
            team_id_label(user.team_id())
        );
        Ok(user)
    }
}

pub struct UserReportWriter;

impl ItemWriter<User> for UserReportWriter {
    fn write(&self, chunk: &[User]) -> anyhow::Result<()> {
        info!("Writing {} users to report", chunk.len());
        for user in chunk {
            info!(
                "User Report: {} - {} (Team ID: {}, Created: {})",
                user.name(),
                user.email(),
                team_id_label(user.team_id()),
                format_local(&user.created_at())
            );
        }
        Ok(())
    }
}

pub fn user_report_job(users: Arc<dyn UserUseCase>, chunk_size: usize) -> ChunkPipeline<User> {
    ChunkPipeline::new(
        JobName::UserReport.as_str(),
        chunk_size,
        Box::new(UserReader { users }),
        Box::new(UserReportProcessor),
        Box::new(UserReportWriter),
    )
}

pub async fn run_job(name: JobName, state: &AppState, chunk_size: usize) -> JobReport {
    match name {
        JobName::TeamReport => team_report_job(state.teams.clone(), chunk_size).run().await,
        JobName::UserReport => user_report_job(state.users.clone(), chunk_size).run().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::JobStatus;
    use crate::error::ServiceError;

    #[test]
    fn job_names_parse_and_display() {
        assert_eq!("teamReportJob".parse::<JobName>().unwrap(), JobName::TeamReport);
        assert_eq!("userReportJob".parse::<JobName>().unwrap(), JobName::UserReport);
        assert_eq!(JobName::UserReport.to_string(), "userReportJob");
        assert!("reportJob".parse::<JobName>().is_err());
    }

    #[test]
    fn missing_team_is_labelled_null() {
        assert_eq!(team_id_label(None), "null");
        assert_eq!(team_id_label(Some(3)), "3");
    }

    #[tokio::test]
    async fn team_report_over_empty_set_completes() {
        let state = AppState::fake();
        let report = run_job(JobName::TeamReport, &state, 10).await;

        assert_eq!(report.job, "teamReportJob");
        assert_eq!(report.status, JobStatus::Completed);
        assert_eq!(report.processed, 0);
        assert_eq!(report.chunks, 1);
    }

    #[tokio::test]
    async fn user_report_covers_every_user() {
        let state = AppState::fake();
        for i in 0..25 {
            state
                .users
                .create(format!("user{i}"), format!("user{i}@x.com"), Some(i % 3))
                .await
                .unwrap();
        }

        let report = run_job(JobName::UserReport, &state, 10).await;
        assert_eq!(report.status, JobStatus::Completed);
        assert_eq!(report.read, 25);
        assert_eq!(report.written, 25);
        assert_eq!(report.chunks, 3);
    }

    struct UnavailableTeams;

    #[async_trait]
    impl TeamUseCase for UnavailableTeams {
        async fn list(&self) -> Result<Vec<Team>, ServiceError> {
            Err(anyhow::anyhow!("database unavailable").into())
        }
        async fn create(&self, _name: String, _description: String) -> Result<Team, ServiceError> {
            Err(anyhow::anyhow!("database unavailable").into())
        }
    }

    #[tokio::test]
    async fn storage_failure_marks_job_failed() {
        let report = team_report_job(Arc::new(UnavailableTeams), 10).run().await;
        assert_eq!(report.status, JobStatus::Failed);
        assert_eq!(report.error.as_deref(), Some("database unavailable"));
    }
}
