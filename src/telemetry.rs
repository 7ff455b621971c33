use prometheus::proto::MetricFamily;
use prometheus::{CounterVec, Opts, Registry};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Counters exported at `/metrics`, registered in their own registry.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub quiz_questions: CounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();
        let quiz_questions = CounterVec::new(
            Opts::new(
                "quiz_questions_served_total",
                "Number of questions drawn for quizzes",
            ),
            &["category"],
        )?;
        registry.register(Box::new(quiz_questions.clone()))?;
        Ok(Self {
            registry,
            quiz_questions,
        })
    }

    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }
}

pub fn init_tracing() -> anyhow::Result<()> {
    let mut fmt_layer = fmt::layer();
    if std::env::var("INCLUDE_SPAN_EVENTS").is_ok_and(|value| value.eq_ignore_ascii_case("true")) {
        fmt_layer = fmt_layer.with_span_events(FmtSpan::ENTER | FmtSpan::EXIT);
    }
    let filter_layer =
        EnvFilter::try_from_env("LOG_LEVEL").or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use prometheus::TextEncoder;

    use super::*;

    #[test]
    fn registries_are_independent() {
        let first = Metrics::new().unwrap();
        let second = Metrics::new().unwrap();
        first.quiz_questions.with_label_values(&["all"]).inc();

        let encoder = TextEncoder::new();
        let first_text = encoder.encode_to_string(&first.gather()).unwrap();
        let second_text = encoder.encode_to_string(&second.gather()).unwrap();
        assert!(first_text.contains("quiz_questions_served_total{category=\"all\"} 1"));
        assert!(!second_text.contains("category=\"all\""));
    }
}
