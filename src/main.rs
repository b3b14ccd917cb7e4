use catch_launcher::cli;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG asks for more,
    // so the test executable's output is not interleaved with ours.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            cli::report_error(&e);
            1
        }
    };
    std::process::exit(code);
}
