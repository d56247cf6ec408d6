use std::io::Write;

use onepassword::error::Result;
use zeroize::Zeroizing;

use crate::cli::common::{client, print_json};
use crate::cli::json_output::{UuidResponse, ValueResponse};

/// Print one field value. Plain output has no trailing newline so it can be
/// piped straight into other tools.
pub fn run(vault: Option<&str>, item: &str, field: &str, json: bool) -> Result<()> {
    let op = client(vault)?;
    let value = Zeroizing::new(op.get_value(item, field)?);

    if json {
        print_json(&ValueResponse {
            vault: op.vault(),
            item,
            field,
            value: &value,
        })
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(value.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

pub fn run_uuid(vault: Option<&str>, item: &str, json: bool) -> Result<()> {
    let op = client(vault)?;
    let id = op.get_uuid(item)?;

    if json {
        print_json(&UuidResponse {
            vault: op.vault(),
            item,
            id: &id,
        })
    } else {
        println!("{}", id);
        Ok(())
    }
}
