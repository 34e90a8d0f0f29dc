//! Configuration for the endpoint hitter
//!
//! Every flag mirrors an environment variable, so the binary can be
//! driven either from a shell or from a container manifest. The defaults
//! match the production deployment of the service.

use crate::core::{Credentials, DispatcherConfig, RetryPolicy};
use crate::utils::error::{HitterError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// One-line description shown in `--help`
pub const APP_DESCRIPTION: &str = "Small application that is able to hit in parallel a requested \
     endpoint - logging whether the request was successful.";

/// Command-line and environment configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "endpoint-hitter", about = APP_DESCRIPTION, version)]
pub struct Config {
    /// System Code of the application
    #[arg(long, env = "APP_SYSTEM_CODE", default_value = "endpoint-hitter")]
    pub app_system_code: String,

    /// Application name
    #[arg(long, env = "APP_NAME", default_value = "Endpoint Hitter")]
    pub app_name: String,

    /// URL address that the application intends to hit, with a `{uuid}` marker
    #[arg(
        long,
        env = "TARGET_URL",
        default_value = "https://{env-domain}/__post-publication-combiner/{uuid}"
    )]
    pub target_url: String,

    /// GET, POST, PUT
    #[arg(long, env = "METHOD_TYPE", default_value = "POST")]
    pub method_type: String,

    /// User required for authentication
    #[arg(long, env = "AUTH_USER", default_value = "")]
    pub auth_user: String,

    /// Password required for authentication
    #[arg(long, env = "AUTH_PASSWORD", default_value = "")]
    pub auth_password: String,

    /// Number of parallel requests
    #[arg(long, env = "THROTTLE", default_value_t = 100)]
    pub throttle: usize,

    /// Path to the file containing all the input uuids
    #[arg(long, env = "UUID_FILE_PATH", default_value = "uuids.txt")]
    pub uuid_file_path: PathBuf,

    /// Run mode; without a subcommand the uuid file is dispatched once
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

/// Alternative run modes
#[derive(Subcommand, Debug, Clone)]
pub enum Mode {
    /// Start the HTTP surface and dispatch a batch per uploaded file
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
}

impl Config {
    /// Validate the parts clap cannot express
    pub fn validate(&self) -> Result<()> {
        if self.throttle == 0 {
            return Err(HitterError::config("throttle must be at least 1"));
        }
        Ok(())
    }

    /// Assemble the run configuration handed to the dispatcher
    pub fn dispatcher_config(&self) -> DispatcherConfig {
        DispatcherConfig {
            target_url: self.target_url.clone(),
            method_type: self.method_type.clone(),
            credentials: Credentials::new(self.auth_user.clone(), self.auth_password.clone()),
            throttle: self.throttle,
            retry: RetryPolicy::default(),
        }
    }
}
