//! `#include` resolution for DXC

use std::path::{Path, PathBuf};

use hassle_rs::DxcIncludeHandler;
use rhi_sc::sc_trace;

const LOG_SOURCE: &str = "rhi_sc::dxc";

/// Loads included files from disk
///
/// DXC hands over the path it derived from the directive; when that does not
/// exist on its own it is retried under the source's directory.
pub(crate) struct FileIncludeHandler {
    include_dir: Option<PathBuf>,
}

impl FileIncludeHandler {
    pub(crate) fn new(include_dir: Option<&Path>) -> Self {
        Self { include_dir: include_dir.map(Path::to_path_buf) }
    }

    fn candidates(&self, filename: &str) -> Vec<PathBuf> {
        let requested = PathBuf::from(filename);
        let mut candidates = vec![requested.clone()];
        if let Some(dir) = &self.include_dir {
            candidates.push(dir.join(&requested));
            if let Some(name) = requested.file_name() {
                candidates.push(dir.join(name));
            }
        }
        candidates
    }
}

impl DxcIncludeHandler for FileIncludeHandler {
    fn load_source(&mut self, filename: String) -> Option<String> {
        let found = self
            .candidates(&filename)
            .into_iter()
            .find(|candidate| candidate.is_file())?;
        sc_trace!(LOG_SOURCE, "Include '{}' resolved to '{}'", filename, found.display());
        std::fs::read_to_string(found).ok()
    }
}
