use crate::app_system::ClinicConfig;

/// Installs the process-wide tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `config.log_filter` is used.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=clinic_desk::clients=debug,info cargo run
/// ```
pub fn setup_tracing(config: &ClinicConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
