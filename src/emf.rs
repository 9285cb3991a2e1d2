use crate::error::BenchError;
use metrics::Unit;
use metrics_cloudwatch_embedded::{Builder, Collector};
use std::io;

pub trait MetricsSink {
    fn add_metric(&self, name: &'static str, unit: Unit, value: f64);
    fn flush(&self) -> Result<(), BenchError>;
}

// EMF collector with `service` as the only dimension. Installs the global
// `metrics` recorder, so call it once per process.
pub fn init_collector(namespace: &str, service: &str) -> Result<&'static Collector, lambda_runtime::Error> {
    let collector = Builder::new()
        .cloudwatch_namespace(namespace.to_string())
        .with_dimension("service", service.to_string())
        .init()?;
    Ok(collector)
}

// Values can be fractional or negative, so they go through a gauge. EMF
// itself only carries name, unit and value.
impl MetricsSink for Collector {
    fn add_metric(&self, name: &'static str, unit: Unit, value: f64) {
        metrics::describe_gauge!(name, unit, "");
        metrics::gauge!(name).set(value);
    }

    fn flush(&self) -> Result<(), BenchError> {
        Collector::flush(self, io::stdout().lock())?;
        Ok(())
    }
}
