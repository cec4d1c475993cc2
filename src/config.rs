use std::net::SocketAddr;

use anyhow::Context;

use crate::batch::JobName;

#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Job selected for the batch binary; the API server ignores it.
    pub job: Option<JobName>,
    pub chunk_size: usize,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    pub batch: BatchConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL is not set")?;
        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?;
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "APP_PORT", 8080)?;

        let job = lookup("BATCH_JOB_NAME")
            .map(|name| name.parse::<JobName>())
            .transpose()?;
        let chunk_size = parse_or(&lookup, "BATCH_CHUNK_SIZE", 10)?;
        if chunk_size == 0 {
            anyhow::bail!("BATCH_CHUNK_SIZE must be at least 1");
        }

        Ok(Self {
            database_url,
            max_connections,
            host,
            port,
            batch: BatchConfig { job, chunk_size },
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))?;
        Ok(addr)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x")])).unwrap();
        assert_eq!(cfg.database_url, "postgres://x");
        assert_eq!(cfg.max_connections, 10);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.batch.job, None);
        assert_eq!(cfg.batch.chunk_size, 10);
        assert_eq!(cfg.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn batch_settings_are_parsed() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://x"),
            ("BATCH_JOB_NAME", "teamReportJob"),
            ("BATCH_CHUNK_SIZE", "3"),
        ]))
        .unwrap();
        assert_eq!(cfg.batch.job, Some(JobName::TeamReport));
        assert_eq!(cfg.batch.chunk_size, 3);
    }

    #[test]
    fn unknown_job_and_zero_chunk_are_rejected() {
        assert!(AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://x"),
            ("BATCH_JOB_NAME", "invoiceJob"),
        ]))
        .is_err());

        assert!(AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://x"),
            ("BATCH_CHUNK_SIZE", "0"),
        ]))
        .is_err());
    }

    #[test]
    fn bad_port_is_reported_with_key() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://x"),
            ("APP_PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("APP_PORT"));
    }
}
