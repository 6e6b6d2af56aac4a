use anyhow::Result;
use log::info;
use std::fs;

#[derive(Default)]
pub struct FileSystem {}

impl FileSystem {
    /// Returns `None` when the file does not exist yet.
    pub fn read_local(&self, path: &str) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn write_local(&self, path: &str, content: &str) -> Result<()> {
        info!("Writing to local file {} ({} bytes)", path, content.len());
        fs::write(path, content)?;

        Ok(())
    }
}
