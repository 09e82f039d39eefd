use crate::core::{DocumentStore, PressRecord};
use crate::utils::error::{IngestError, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Append-only JSON-lines file, indexed by `url` in memory.
pub struct JsonlStore {
    path: PathBuf,
    index: Mutex<HashMap<String, PressRecord>>,
}

impl JsonlStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut index = HashMap::new();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let complete_len = content.rfind('\n').map_or(0, |i| i + 1);

            for (number, line) in content[..complete_len].lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let record: PressRecord = serde_json::from_str(line).map_err(|e| {
                    IngestError::store("open", format!("{}:{}: {}", path.display(), number + 1, e))
                })?;
                index.insert(record.url.clone(), record);
            }

            // 最後一行沒有換行：可能是寫到一半中斷
            let tail = content[complete_len..].trim();
            if !tail.is_empty() {
                match serde_json::from_str::<PressRecord>(tail) {
                    Ok(record) => {
                        OpenOptions::new().append(true).open(&path)?.write_all(b"\n")?;
                        index.insert(record.url.clone(), record);
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Dropping incomplete last line of {}: {}",
                            path.display(),
                            e
                        );
                        OpenOptions::new()
                            .write(true)
                            .open(&path)?
                            .set_len(complete_len as u64)?;
                    }
                }
            }
            tracing::debug!("Loaded {} records from {}", index.len(), path.display());
        }

        Ok(Self {
            path,
            index: Mutex::new(index),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get(&self, url: &str) -> Option<PressRecord> {
        self.index.lock().await.get(url).cloned()
    }

    pub async fn len(&self) -> usize {
        self.index.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.index.lock().await.is_empty()
    }
}

impl DocumentStore for JsonlStore {
    async fn contains_url(&self, url: &str) -> Result<bool> {
        Ok(self.index.lock().await.contains_key(url))
    }

    async fn insert(&self, record: &PressRecord) -> Result<()> {
        let mut index = self.index.lock().await;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let start = file.metadata()?.len();
        if let Err(e) = file.write_all(line.as_bytes()) {
            // 截回寫入前的長度，避免留下半行
            file.set_len(start)?;
            return Err(e.into());
        }

        index.insert(record.url.clone(), record.clone());
        Ok(())
    }
}
