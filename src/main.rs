use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use mantrid::cli::{
    execute_add, execute_config_example, execute_do, execute_edit, execute_list, execute_remove,
    AliasCommands, Cli, Commands, ConfigCommands,
};
use mantrid::config::{Config, FileManager};
use mantrid::executor::ShellExecutor;
use mantrid::repository::{create_repository, AliasRepository};
use mantrid::{logging, AliasError, App};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(0) => {}
        Ok(exit_code) => std::process::exit(exit_code),
        Err(error) => {
            eprintln!("Error: {error:#}");
            if let Some(suggestion) = error
                .downcast_ref::<AliasError>()
                .and_then(AliasError::suggestion)
            {
                eprintln!("Hint: {suggestion}");
            }
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        // 設定ファイルを読まずに出力する
        Commands::Config {
            command: ConfigCommands::Example,
        } => {
            execute_config_example(&mut io::stdout())?;
            Ok(0)
        }
        Commands::Alias { command } => {
            let app = bootstrap(!matches!(command, AliasCommands::List))?;
            let mut out = io::stdout();

            match command {
                AliasCommands::Add { name, command } => {
                    execute_add(&app.service, &name, &command, &mut out).await?
                }
                AliasCommands::List => execute_list(&app.service, &mut out).await?,
                AliasCommands::Edit { name, new_command } => {
                    execute_edit(&app.service, &name, &new_command, &mut out).await?
                }
                AliasCommands::Remove { name, force } => {
                    let mut input = io::stdin().lock();
                    execute_remove(&app.service, &name, force, &mut input, &mut out).await?
                }
            }
            Ok(0)
        }
        Commands::Do { args } => {
            let app = bootstrap(true)?;
            execute_do(&app, &args).await
        }
    }
}

/// 設定の読み込み、ログ初期化、保存先の準備を行いAppを組み立てる
fn bootstrap(create_directories: bool) -> Result<App<Box<dyn AliasRepository>, ShellExecutor>> {
    let config = Config::load().context("failed to load config")?;
    logging::init(&config);

    if create_directories {
        FileManager::new(&config)
            .ensure_directories()
            .context("failed to create directories")?;
    }

    Ok(App::new(create_repository(&config), ShellExecutor::new()))
}
