use std::env;

const DEFAULT_NAMESPACE: &str = "log-burst";
const DEFAULT_SERVICE: &str = "log-burst";

// Settings read once at cold start and shared by every invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // NaN when LOG_COUNT is missing or not a number
    pub log_count: f64,
    pub add_cpu_task: bool,
    pub metrics_namespace: String,
    pub service_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_count: parse_log_count(lookup("LOG_COUNT").as_deref()),
            add_cpu_task: lookup("ADD_CPU_TASK").as_deref() == Some("true"),
            metrics_namespace: non_empty(lookup("POWERTOOLS_METRICS_NAMESPACE"))
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            service_name: non_empty(lookup("POWERTOOLS_SERVICE_NAME"))
                .unwrap_or_else(|| DEFAULT_SERVICE.to_string()),
        }
    }

    // Same count as `for (i = 0; i < log_count; i++)`; NaN and negatives run zero times
    pub fn iterations(&self) -> u64 {
        if self.log_count > 0.0 {
            self.log_count.ceil() as u64
        } else {
            0
        }
    }
}

// Numeric string rules: surrounding whitespace ignored, blank is 0, decimal
// with optional sign/fraction/exponent, or unsigned 0x/0o/0b integers
fn parse_log_count(raw: Option<&str>) -> f64 {
    let Some(count_str) = raw else {
        return f64::NAN;
    };
    let trimmed = count_str.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return match u64::from_str_radix(digits, radix) {
                Ok(count) if !digits.starts_with('+') => count as f64,
                _ => f64::NAN,
            };
        }
    }

    // f64::from_str also takes "inf" and "nan", which don't count as numbers here
    let decimal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_with(&[]);
        assert!(config.log_count.is_nan());
        assert_eq!(config.iterations(), 0);
        assert!(!config.add_cpu_task);
        assert_eq!(config.metrics_namespace, "log-burst");
        assert_eq!(config.service_name, "log-burst");
    }

    #[test]
    fn reads_every_variable() {
        let config = config_with(&[
            ("LOG_COUNT", "250"),
            ("ADD_CPU_TASK", "true"),
            ("POWERTOOLS_METRICS_NAMESPACE", "bench"),
            ("POWERTOOLS_SERVICE_NAME", "node-filter"),
        ]);
        assert_eq!(
            config,
            Config {
                log_count: 250.0,
                add_cpu_task: true,
                metrics_namespace: "bench".to_string(),
                service_name: "node-filter".to_string(),
            }
        );
    }

    #[test]
    fn numeric_log_count_forms() {
        let cases = [
            (" 12 ", 12.0, 12),
            ("+7", 7.0, 7),
            ("3.5", 3.5, 4),
            ("1e2", 100.0, 100),
            ("0x10", 16.0, 16),
            ("0b101", 5.0, 5),
            ("", 0.0, 0),
            ("0", 0.0, 0),
            ("-5", -5.0, 0),
        ];
        for (raw, value, iterations) in cases {
            let config = config_with(&[("LOG_COUNT", raw)]);
            assert_eq!(config.log_count, value, "LOG_COUNT={raw:?}");
            assert_eq!(config.iterations(), iterations, "LOG_COUNT={raw:?}");
        }
    }

    #[test]
    fn non_numeric_log_count_is_nan() {
        for raw in ["abc", "12abc", "NaN", "inf", "infinity", "0x", "0xZZ", "-0x10", "1_000"] {
            let config = config_with(&[("LOG_COUNT", raw)]);
            assert!(config.log_count.is_nan(), "LOG_COUNT={raw:?}");
            assert_eq!(config.iterations(), 0, "LOG_COUNT={raw:?}");
        }
    }

    #[test]
    fn cpu_task_requires_exact_true() {
        for raw in ["TRUE", "True", "1", "yes", " true", ""] {
            assert!(!config_with(&[("ADD_CPU_TASK", raw)]).add_cpu_task, "ADD_CPU_TASK={raw:?}");
        }
        assert!(config_with(&[("ADD_CPU_TASK", "true")]).add_cpu_task);
    }

    #[test]
    fn blank_metric_identity_falls_back_to_default() {
        let config = config_with(&[
            ("POWERTOOLS_METRICS_NAMESPACE", ""),
            ("POWERTOOLS_SERVICE_NAME", "  "),
        ]);
        assert_eq!(config.metrics_namespace, "log-burst");
        assert_eq!(config.service_name, "log-burst");
    }
}
