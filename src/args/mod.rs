use clap::Parser;
use std::time::Duration;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

#[must_use]
pub fn args_checks() -> CleanArgs {
    CleanArgs::new(Args::parse())
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        let static_dir = if args.static_dir.is_dir() {
            Some(args.static_dir)
        } else {
            tracing::warn!(
                static_dir = %args.static_dir.display(),
                "static directory not found, /static will not be served"
            );
            None
        };
        CleanArgs {
            api_base_url: args.api_base_url,
            host: args.host,
            port: args.port,
            static_dir,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
        }
    }
}
