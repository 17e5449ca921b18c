use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A host file in the temp directory, removed again on drop.
pub struct TempHostFile {
    path: PathBuf,
}

impl TempHostFile {
    pub fn new(content: &str) -> anyhow::Result<Self> {
        Self::from_bytes(content.as_bytes())
    }

    /// Writes raw bytes, which need not be valid UTF-8.
    pub fn from_bytes(content: &[u8]) -> anyhow::Result<Self> {
        let id = FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "hostexpand-{}-{id}.txt",
            std::process::id()
        ));
        fs::write(&path, content)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempHostFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub fn bindings(expansion: &hostexpand_common::network::expansion::Expansion) -> Vec<String> {
    expansion.host_ports.iter().map(ToString::to_string).collect()
}
