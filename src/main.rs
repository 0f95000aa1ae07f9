use clap::Parser;
use kma_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(kma_processor::Error::interrupted(
                    "Fetch interrupted by user".to_string(),
                ))
            }
        }
    });

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("KMA Processor - KMA APIHUB typ01 Weather Feed Decoder");
    println!("=====================================================");
    println!();
    println!("Fetch Korea Meteorological Administration APIHUB typ01 text feeds");
    println!("(EUC-KR encoded, fixed-width tables) and decode them into JSON.");
    println!();
    println!("USAGE:");
    println!("    kma-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    forecast    Fetch and decode the short-term land forecast for a region");
    println!("    regions     Fetch and decode the forecast region table");
    println!("    fetch       Fetch any other typ01 resource as raw recoded text");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Forecast for Seoul, human-readable:");
    println!("    kma-processor forecast --reg-id 11B10101 --auth-key <KEY>");
    println!();
    println!("    # City-level regions as JSON (auth key from KMA_AUTH_KEY):");
    println!("    kma-processor regions --category C --format json");
    println!();
    println!("    # Raw passthrough of any typ01 resource:");
    println!("    kma-processor fetch --path fct_medm_reg.php --param tmfc=0");
    println!();
    println!("For detailed help on any command, use:");
    println!("    kma-processor <COMMAND> --help");
}
