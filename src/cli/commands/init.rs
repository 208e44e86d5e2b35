use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the default configuration file.
pub fn handle(force: bool) -> AppResult<()> {
    let path = Config::config_file();

    if Config::init(&path, force)? {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        ));
    }

    Ok(())
}
