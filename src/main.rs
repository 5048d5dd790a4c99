use price_scan::app::run;
use price_scan::config::load_config_or_default;
use std::io;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    // Logs go to stderr, the report owns stdout
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    let config = match load_config_or_default("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match run(&args, &mut stdin.lock(), &mut stdout.lock(), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
