use onepassword::error::Result;

use crate::cli::common::{client, print_json};

pub fn run(vault: Option<&str>, categories: &[String], tags: &[String]) -> Result<()> {
    let op = client(vault)?;
    let items = op.list_items(categories, tags)?;
    print_json(&items)
}
