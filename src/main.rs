use clap::Parser;
use roman_calc::utils::{logger, validation::Validate};
use roman_calc::{CalcSession, CliConfig, Outcome, OutputFormat, StdConsole, TomlConfig};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if let Err(e) = args.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut settings = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    if let Err(e) = settings.validate() {
        eprintln!("❌ Configuration validation failed: {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if args.json {
        settings.set_output_format(OutputFormat::Json);
        logger::init_json_logger(args.verbose, settings.log_level());
    } else {
        logger::init_cli_logger(args.verbose, settings.log_level());
    }

    tracing::info!("Starting roman-calc");
    tracing::debug!("CLI config: {:?}", args);

    let mut session = CalcSession::new(StdConsole::stdio(), settings);

    // evaluation errors are printed by the session and still exit 0
    let result = match &args.expression {
        Some(expression) => session.run_expression(expression),
        None => session.run(),
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("❌ Session failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    match outcome {
        Outcome::Success(evaluation) => {
            tracing::debug!("Finished with {:?} result", evaluation.system)
        }
        Outcome::Failure(e) => tracing::debug!("Finished with error kind {}", e.kind()),
    }

    Ok(())
}
