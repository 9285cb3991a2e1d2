use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod emf;
mod error;
mod generator;
mod handler;
mod prime;

use config::Config;
use handler::function_handler;
use emf::init_collector;

// Diagnostics go to stderr so stdout carries only the benchmark lines
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    // Config and metrics sink are built once per container lifecycle
    let config = Config::from_env();
    let collector = init_collector(&config.metrics_namespace, &config.service_name)?;
    info!(
        log_count = config.log_count,
        add_cpu_task = config.add_cpu_task,
        namespace = %config.metrics_namespace,
        service = %config.service_name,
        "cold start"
    );

    let config = &config;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(config, collector, event).await
    }))
    .await
}
