// src/main.rs

use watch::{Termination, cli, logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(termination) => std::process::exit(termination.exit_code()),
        Err(err) => {
            eprintln!("watch: {err:#}");
            std::process::exit(1);
        }
    }
}

async fn run_main() -> anyhow::Result<Termination> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    Ok(run(args).await?)
}
