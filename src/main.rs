use cider::cli::Cli;
use cider::config::{init_logging, Config};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse_args();
    let config = Config::from_env();
    if let Err(e) = init_logging(&config) {
        eprintln!("Error initializing log4rs: {e}");
    }
    log::info!("#Start main()");

    if let Err(e) = run_main(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_main(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Error creating output file {}: {e}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };
    cider::run(cli, &mut out)?;
    out.flush()?;
    Ok(())
}
