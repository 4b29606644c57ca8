use anyhow::Context;
use clap::Parser;
use std::io::Write;
use number_mediator::utils::{logger, validation::Validate};
use number_mediator::{CliConfig, Console, OutputFormat, ViewModelFactory};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting number-mediator");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let config = match cli.load_app_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // Composition root: everything below receives its dependencies from here.
    let factory = ViewModelFactory::new(config)?;
    let view_model = factory.create_main_view_model();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let console = Console::new(view_model, format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.script {
        Some(script) => console
            .run_script(script, &mut out)
            .context("script execution failed")?,
        None => {
            writeln!(out, "{}", number_mediator::Command::HELP)?;
            let stdin = std::io::stdin();
            console
                .run_interactive(stdin.lock(), &mut out)
                .context("interactive session failed")?;
        }
    }

    Ok(())
}
