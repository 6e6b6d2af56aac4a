use crate::filesystem::FileSystem;
use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use log::debug;
use rustc_hash::FxHashMap;
use std::str::FromStr;

/// `key=value` settings persisted in a local file (native) or in the local storage (web). Lines
/// starting with `#` are comments.
pub struct SettingsStorage {
    path: Option<String>,
    filesystem: FileSystem,
    cache: Option<FxHashMap<String, String>>,
}

impl SettingsStorage {
    pub fn new(path: &str) -> Self {
        Self { path: Some(path.to_string()), filesystem: Default::default(), cache: None }
    }

    /// Storage which never touches the file system.
    pub fn in_memory(content: &str) -> Result<Self> {
        let cache = deserialize(content)?;
        Ok(Self { path: None, filesystem: Default::default(), cache: Some(cache) })
    }

    pub fn get<T>(&mut self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
    {
        match self.load()?.get(key) {
            Some(value) => Ok(Some(value.parse().map_err(|_| anyhow!("Failed to parse setting {}={}", key, value))?)),
            None => Ok(None),
        }
    }

    /// Stores `value` unless the key already exists and `overwrite` is not set. Returns the value
    /// which ends up stored.
    pub fn set<T>(&mut self, key: &str, value: T, overwrite: bool) -> Result<T>
    where
        T: FromStr + ToString,
    {
        let cache = self.load()?;

        if cache.contains_key(key) && !overwrite {
            return self.get(key)?.ok_or_else(|| anyhow!("Key {} not found", key));
        }

        cache.insert(key.to_string(), value.to_string());
        let content = serialize(cache);

        if let Some(path) = &self.path {
            self.filesystem.write_local(path, &content)?;
        }

        Ok(value)
    }

    pub fn keys(&mut self) -> Result<Vec<String>> {
        let mut keys = self.load()?.keys().cloned().collect::<Vec<_>>();
        keys.sort();

        Ok(keys)
    }

    fn load(&mut self) -> Result<&mut FxHashMap<String, String>> {
        if self.cache.is_none() {
            let content = match &self.path {
                Some(path) => self.filesystem.read_local(path)?,
                None => None,
            };

            let settings = match content {
                Some(content) => deserialize(&content)?,
                None => {
                    debug!("Settings {:?} not found, starting with empty storage", self.path);
                    FxHashMap::default()
                }
            };

            self.cache = Some(settings);
        }

        self.cache.as_mut().ok_or_else(|| anyhow!("Settings cache not initialized"))
    }
}

fn serialize(settings: &FxHashMap<String, String>) -> String {
    let mut items = settings.iter().collect::<Vec<_>>();
    items.sort();

    let mut output = String::new();
    for (key, value) in items {
        output.push_str(&format!("{}={}\n", key, value));
    }

    output.trim().to_string()
}

fn deserialize(settings: &str) -> Result<FxHashMap<String, String>> {
    let mut output = FxHashMap::default();

    for (index, line) in settings.lines().map(|p| p.trim()).enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (name, value) = match line.split_once('=') {
            Some(tokens) => tokens,
            None => bail!("Invalid setting at line {}: {}", index + 1, line),
        };

        output.insert(name.trim().to_string(), value.trim().to_string());
    }

    Ok(output)
}
