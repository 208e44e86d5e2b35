use crate::cli::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        if *path {
            println!("{}", Config::config_file().display());
        }

        if *print_config || !*path {
            if ctx.json {
                crate::cli::print_json(&ctx.cfg)?;
            } else {
                println!("📄 Current configuration:\n");
                print!("{}", serde_yaml::to_string(&ctx.cfg)?);
            }
        }
    }

    Ok(())
}
