use onepassword::config::Config;
use onepassword::error::Result;
use onepassword::subprocess::SystemRunner;
use onepassword::version;

use crate::cli::common::print_json;
use crate::cli::json_output::VersionResponse;

pub fn run(json: bool) -> Result<()> {
    let config = Config::resolve()?;
    let v = version::get_op_cli_version_with(&SystemRunner, &config.cli.program)?;

    if json {
        print_json(&VersionResponse {
            version: v.to_string(),
            major: v.major(),
            minor: v.minor(),
            patch: v.patch(),
            prerelease: v.is_prerelease(),
        })
    } else {
        println!("{}", v);
        Ok(())
    }
}
