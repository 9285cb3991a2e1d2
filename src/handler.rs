use crate::config::Config;
use crate::error::BenchError;
use crate::generator::{CommitEntryGenerator, LogLineGenerator};
use crate::emf::MetricsSink;
use crate::prime::prime_scan;
use lambda_runtime::{Error, LambdaEvent};
use metrics::Unit;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::Value;
use std::hint::black_box;
use std::io::{self, Write};
use std::time::Instant;
use tracing::debug;

const PRIME_SCAN_LIMIT: u32 = 1000;
const LOGS_METRIC: &str = "logs";

#[derive(Serialize, Debug, PartialEq)]
pub struct Response {
    #[serde(rename = "statusCode")]
    status_code: u16,
    body: String,
}

impl Response {
    fn hello() -> Self {
        Self {
            status_code: 200,
            body: "hello".to_string(),
        }
    }
}

// Emit the configured number of raw lines (plus optional prime scans),
// publish the count metric, then print "done". Lines go straight to `out`.
fn run_benchmark<G, M, W>(
    config: &Config,
    generator: &mut G,
    metrics: &M,
    out: &mut W,
) -> Result<Response, BenchError>
where
    G: LogLineGenerator,
    M: MetricsSink + ?Sized,
    W: Write,
{
    let mut cpu_time_ms = 0.0_f64;

    for _ in 0..config.iterations() {
        if config.add_cpu_task {
            let start = Instant::now();
            black_box(prime_scan(black_box(PRIME_SCAN_LIMIT)));
            cpu_time_ms += start.elapsed().as_secs_f64() * 1000.0;
        }
        let line = generator.generate();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }

    if config.add_cpu_task {
        writeln!(out, "total cpu time: {cpu_time_ms}ms")?;
    }
    out.flush()?;

    if !config.log_count.is_nan() {
        metrics.add_metric(LOGS_METRIC, Unit::Count, config.log_count);
    }
    metrics.flush()?;

    writeln!(out, "done")?;
    out.flush()?;

    Ok(Response::hello())
}

// Main Lambda handler - the event payload is ignored
pub async fn function_handler<M>(
    config: &Config,
    metrics: &M,
    event: LambdaEvent<Value>,
) -> Result<Response, Error>
where
    M: MetricsSink + ?Sized,
{
    let mut generator = CommitEntryGenerator::new(StdRng::from_os_rng());
    let response = run_benchmark(config, &mut generator, metrics, &mut io::stdout().lock())?;
    debug!(
        request_id = %event.context.request_id,
        log_count = config.log_count,
        add_cpu_task = config.add_cpu_task,
        "benchmark invocation finished"
    );
    Ok(response)
}
