/// Sets up `env_logger`. `RUST_LOG` overrides the default `warn` filter.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
}
