use onepassword::api;
use onepassword::config::Config;
use onepassword::error::Result;
use onepassword::subprocess::SystemRunner;

use crate::cli::common::print_json;

pub fn run() -> Result<()> {
    let config = Config::resolve()?;
    let vaults = api::list_vaults_with(&SystemRunner, &config.cli.program)?;
    print_json(&vaults)
}
