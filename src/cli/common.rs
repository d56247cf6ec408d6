use onepassword::api::OnePassword;
use onepassword::config::Config;
use onepassword::error::{OnePasswordError, Result};
use serde::Serialize;

/// Build a client from the resolved config, letting `--vault` win.
pub fn client(vault: Option<&str>) -> Result<OnePassword> {
    let mut config = Config::resolve()?;
    if let Some(v) = vault {
        config.vault.default = v.to_string();
    }
    OnePassword::from_config(&config)
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| OnePasswordError::Json(format!("Cannot serialize output: {}", e)))?;
    println!("{}", text);
    Ok(())
}
