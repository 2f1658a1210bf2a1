use std::process::ExitCode;
use hopper::{Pipeline, SourceConfig};
use hopper::source::RandomSource;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_thread_names(true)
        .init();

    let source = RandomSource::new(&SourceConfig::default());
    match Pipeline::new(source).run() {
        Ok(report) => {
            tracing::info!(
                words = report.producer.words.len(),
                detected = report.detected().count(),
                "all done"
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "pipeline failed");
            ExitCode::FAILURE
        }
    }
}
