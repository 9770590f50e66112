use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
};

use chrono::{DateTime, Utc};
use clap::Parser;

use crate::{domain::models::DaemonStatus, interfaces::cli::Command};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "roost-core",
    version,
    about = "Roost Core (agent daemon control-plane store + inspection CLI)"
)]
pub struct Args {
    #[arg(long, env = "ROOST_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    #[arg(long, env = "ROOST_PORT", default_value_t = 50_051)]
    pub port: u16,

    #[arg(long, env = "ROOST_ENDPOINT", default_value = "http://127.0.0.1:8080")]
    pub endpoint: String,

    #[arg(long, env = "ROOST_MODEL_DIR", default_value = "~/models")]
    pub model_dir: PathBuf,

    #[arg(long, env = "ROOST_DATA_DIR", default_value = "~/.roost")]
    pub data_dir: PathBuf,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "ROOST_JSON_LOGS", default_value_t = false)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub host: IpAddr,
    pub port: u16,
    pub endpoint: String,
    pub model_dir: PathBuf,
    pub data_dir: PathBuf,
    pub log_filter: String,
    pub json_logs: bool,
}

impl RuntimeConfig {
    pub fn from_args(args: &Args) -> Result<Self, String> {
        if args.port == 0 {
            return Err("port must be greater than 0".to_owned());
        }

        let endpoint = args.endpoint.trim();
        if endpoint.is_empty() {
            return Err("endpoint must not be empty".to_owned());
        }

        Ok(Self {
            host: args.host,
            port: args.port,
            endpoint: endpoint.to_owned(),
            model_dir: args.model_dir.clone(),
            data_dir: args.data_dir.clone(),
            log_filter: args.log_filter.clone(),
            json_logs: args.json_logs,
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Point-in-time status snapshot for this process standing in for the
    /// daemon's embedded model server.
    #[must_use]
    pub fn daemon_status(&self, started_at: DateTime<Utc>) -> DaemonStatus {
        let uptime = (Utc::now() - started_at).num_seconds().max(0);

        DaemonStatus {
            bind: self.bind_addr().to_string(),
            endpoint: self.endpoint.clone(),
            model_dir: self.model_dir.display().to_string(),
            llama_server_healthy: true,
            llama_server_running: true,
            llama_server_pid: std::process::id(),
            uptime_seconds: u64::try_from(uptime).unwrap_or(0),
            started_at,
            data_dir: self.data_dir.display().to_string(),
        }
    }
}
