use clap::Parser;
use hcdash::cli::{
    actions, handle_action, handle_completions, handle_config_init, handle_status, handle_watch,
    load_config_with_overrides, Cli, Commands, ConfigCommands, PreviewCommands,
};
use hcdash::endpoints::DashboardAction;
use hcdash::logging::init_tracing;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Preview(PreviewCommands::Start(args)) => {
            run_action(DashboardAction::StartPreview, &args).await
        }
        Commands::Preview(PreviewCommands::Stop(args)) => {
            run_action(DashboardAction::StopPreview, &args).await
        }
        Commands::Reload(args) => run_action(DashboardAction::Reload, &args).await,
        Commands::Status(args) => match load_config_with_overrides(&args.connection) {
            Ok(config) => {
                start_logging(&config.logging);
                match handle_status(&args, &config).await {
                    Ok(output) => {
                        println!("{}", output);
                        Ok(())
                    }
                    Err(e) => Err(e),
                }
            }
            Err(e) => Err(e),
        },
        Commands::Watch(args) => match load_config_with_overrides(&args.connection) {
            Ok(config) => {
                start_logging(&config.logging);
                let mut stdout = std::io::stdout();
                handle_watch(&args, &config, &mut stdout).await.map(|_| ())
            }
            Err(e) => Err(e),
        },
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Run a dashboard action. A failure has already been displayed, so it only
/// sets the exit code.
async fn run_action(
    action: DashboardAction,
    args: &hcdash::cli::ActionArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = actions::resolve_action_config(args)?;
    start_logging(&config.logging);

    match handle_action(action, &config).await? {
        Some(body) => {
            println!("{}", body);
            Ok(())
        }
        None => std::process::exit(1),
    }
}

fn start_logging(config: &hcdash::config::LoggingConfig) {
    if let Err(e) = init_tracing(config) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
}
