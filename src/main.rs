use clap::Parser;
use std::process::ExitCode;

use support_dash::api::HttpSupportClient;
use support_dash::cli::{Cli, Commands, ConfigAction, OutputOptions};
use support_dash::commands::{
    cmd_analytics, cmd_config_set, cmd_config_show, cmd_create, cmd_dashboard, cmd_draft,
    cmd_fetch, cmd_list, cmd_reply, cmd_resolve, cmd_seed, cmd_status, text_or_stdin,
};
use support_dash::config::Config;
use support_dash::error::Result;
use support_dash::logging::{self, LogTarget};
use support_dash::types::NewTicket;

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().or_else(Config::config_path);
    let config = match &config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };
    let settings = config.resolve(cli.api_base.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Dashboard);
    if !matches!(command, Commands::Dashboard) {
        logging::init(&LogTarget::Stderr)?;
    }

    let client = HttpSupportClient::new(settings.api_base.clone())?;

    match command {
        Commands::Dashboard => cmd_dashboard(&settings).await,
        Commands::List {
            filter,
            all,
            output,
        } => cmd_list(&client, filter, all, output).await,
        Commands::Analytics { output } => cmd_analytics(&client, output).await,
        Commands::Reply { id, text, output } => {
            let text = text_or_stdin(&text)?;
            cmd_reply(&client, &id, &text, output).await
        }
        Commands::Resolve { id, output } => cmd_resolve(&client, &id, output).await,
        Commands::Status { id, status, output } => cmd_status(&client, &id, status, output).await,
        Commands::Seed { output } => cmd_seed(&client, output).await,
        Commands::Fetch { output } => cmd_fetch(&client, output).await,
        Commands::Draft { id, output } => cmd_draft(&client, &id, output).await,
        Commands::Create {
            sender,
            subject,
            body,
            output,
        } => {
            let body = text_or_stdin(&body)?;
            cmd_create(
                &client,
                NewTicket {
                    sender,
                    subject,
                    body,
                },
                output,
            )
            .await
        }
        Commands::Config { action } => match action {
            None => cmd_config_show(config_path.as_deref(), &settings, OutputOptions::default()),
            Some(ConfigAction::Show { output }) => {
                cmd_config_show(config_path.as_deref(), &settings, output)
            }
            Some(ConfigAction::Set { key, value, output }) => {
                cmd_config_set(config_path.as_deref(), &key, &value, output)
            }
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
