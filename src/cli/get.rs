use onepassword::error::Result;

use crate::cli::common::{client, print_json};

pub fn run(vault: Option<&str>, item: &str, fields: &[String]) -> Result<()> {
    let op = client(vault)?;
    let record = op.get_item(item, fields)?;
    print_json(&record)
}
