use anyhow::bail;
use anyhow::Result;
use log::info;
use web_sys::Storage;

#[derive(Default)]
pub struct FileSystem {}

impl FileSystem {
    /// Returns `None` when the key does not exist in the local storage yet.
    pub fn read_local(&self, path: &str) -> Result<Option<String>> {
        info!("Reading from local storage {}", path);

        match self.storage()?.get(path) {
            Ok(content) => Ok(content),
            Err(_) => bail!("Local storage is not available"),
        }
    }

    pub fn write_local(&self, path: &str, content: &str) -> Result<()> {
        info!("Writing to local storage {} ({} bytes)", path, content.len());

        if self.storage()?.set(path, content).is_err() {
            bail!("Failed to write into local storage");
        }

        Ok(())
    }

    fn storage(&self) -> Result<Storage> {
        let window = match web_sys::window() {
            Some(window) => window,
            None => bail!("Failed to get window"),
        };

        let storage = match window.local_storage() {
            Ok(Some(storage)) => storage,
            _ => bail!("Failed to get local storage"),
        };

        Ok(storage)
    }
}
