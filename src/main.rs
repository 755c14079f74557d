/*!
 * Command-line interface for lsfs
 */

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::debug;

use lsfs::config::{Args, Config};
use lsfs::{load_structure, resolve, Lister, Result};

fn main() -> ExitCode {
    // Parse command line arguments; usage errors exit here
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "lsfs", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = Config::from_args(args);
    debug!("Running with {:?}", config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let root = load_structure(&config.structure_file)?;
    let target = resolve(&root, &config.path)?;
    let output = Lister::new(config.listing).render(target)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
