use clap::Parser;
use fixer::app::{handle_fatal_error, init_logging, AppConfig};
use fixer::cli::{execute, Cli};

fn main() {
    let args = Cli::parse();
    let verbose = args.verbose;

    let result = AppConfig::new(verbose).and_then(|app| {
        init_logging(&app);
        execute(&args, &app.working_dir)
    });

    if let Err(e) = result {
        handle_fatal_error(e, verbose);
    }
}
