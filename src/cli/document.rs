use std::fs;
use std::io::Write;
use std::path::Path;

use onepassword::error::Result;
use zeroize::Zeroizing;

use crate::cli::common::client;

pub fn run(vault: Option<&str>, item: &str, output: Option<&str>) -> Result<()> {
    let op = client(vault)?;
    let bytes = Zeroizing::new(op.get_document(item)?);

    match output {
        Some(path) => {
            let path = Path::new(path);
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)?;
            }
            fs::write(path, bytes.as_slice())?;
            tracing::info!(path = %path.display(), size = bytes.len(), "document written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
