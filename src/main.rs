use app_verifier::config::{Command, ThemeAction};
use app_verifier::core::ConfigProvider;
use app_verifier::utils::{logger, validation::Validate};
use app_verifier::{
    CheckOutcome, CliConfig, FileStore, FixedTab, HttpVerifier, PopupView, ThemeManager,
    VerificationWorkflow,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_message());
            std::process::exit(2);
        }
    };

    let mut theme = ThemeManager::new(FileStore::new(config.preferences_path()));
    theme.initialize();

    match cli.command {
        Command::Theme { action } => {
            if action == ThemeAction::Toggle {
                theme.toggle();
            }
            println!("{} {}", theme.icon().glyph(), theme.current());
        }
        Command::Check { url } => {
            let mut view = PopupView::new();
            view.apply_theme(theme.current(), theme.icon());

            let verifier = HttpVerifier::new(config.endpoint());
            let mut workflow = VerificationWorkflow::with_view(FixedTab::new(url), verifier, view);

            let outcome = workflow.check().await;
            print!("{}", workflow.view());

            if let CheckOutcome::Failure(_) = outcome {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
