use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::controller::api::DEFAULT_API_BASE_URL;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base url of the games api; `?api=...` selectors are appended to it.
    #[arg(
        long,
        value_name = "API_BASE_URL",
        default_value = DEFAULT_API_BASE_URL,
        value_parser = crate::args::validation::check_api_base_url
    )]
    pub api_base_url: String,
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "5201")]
    pub port: u16,
    /// Directory served under /static. Skipped with a warning when it doesn't exist.
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,
    #[arg(
        long,
        value_name = "SECONDS",
        default_value = "10",
        value_parser = crate::args::validation::check_positive_secs
    )]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub api_base_url: String,
    pub host: String,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
    pub request_timeout: Duration,
}
