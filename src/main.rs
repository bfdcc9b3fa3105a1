//! Entry point for run-as-registry.
use std::process::ExitCode;

use clap::Parser;
use run_as_registry::{
    cli::LauncherArgs,
    lib::telemetry,
    runtime::{self, RuntimeExit},
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LauncherArgs::parse();
    let request = args.into_request().map_err(RuntimeExit::from_error)?;
    runtime::run(request).await
}
