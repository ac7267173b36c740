use asserting::{AssertConfig, Asserter, RecordingReporter};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// An asserter recording into memory, with passes traced.
#[allow(dead_code)]
pub fn recording() -> Asserter<RecordingReporter> {
    let config = AssertConfig {
        trace_passes: true,
        ..AssertConfig::default()
    };
    Asserter::with_config(RecordingReporter::new(), config)
}
