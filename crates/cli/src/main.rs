use std::io;
use std::process::ExitCode;

use clap::Parser;

use stockroom_cli::{AppConfig, Cli, Command, execute};
use stockroom_infra::JsonFileRepository;

fn main() -> ExitCode {
    let cli = Cli::parse();
    stockroom_observability::init(cli.log_format);

    let config = AppConfig::resolve(&cli);
    let repo = JsonFileRepository::new(config.file.clone());
    let command = cli.command.clone().unwrap_or(Command::Demo);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match execute(&command, &config, &repo, &mut out) {
        Ok(status) => status.into(),
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
