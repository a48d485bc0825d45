use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Decides whether an image path can be shown or must fall back to a placeholder.
///
/// Absolute `http(s)` URLs are trusted as-is. Site paths are checked against the
/// static directory once, by [`AssetResolver::scan`]; anything missing, or
/// escaping that directory, is absent. Lookups never touch the disk.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
    present: HashSet<String>,
}

impl AssetResolver {
    /// A resolver that has found no local files.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        AssetResolver {
            root: root.into(),
            present: HashSet::new(),
        }
    }

    /// Records which of `web_paths` exist under `root`. Blocking.
    pub fn scan<I, S>(root: impl Into<PathBuf>, web_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolver = Self::new(root);
        for web_path in web_paths {
            let web_path = web_path.as_ref().trim();
            let Some(relative) = site_relative(web_path) else {
                continue;
            };
            if resolver.root.join(relative).is_file() {
                resolver.present.insert(web_path.to_string());
            }
        }
        resolver
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of local images found by the scan.
    pub fn found(&self) -> usize {
        self.present.len()
    }

    /// Returns the `src` to emit, or `None` when the placeholder should be shown.
    pub fn resolve(&self, web_path: Option<&str>) -> Option<String> {
        let web_path = web_path?.trim();
        if web_path.is_empty() {
            return None;
        }
        if is_remote(web_path) {
            return Some(web_path.to_string());
        }
        self.present
            .contains(web_path)
            .then(|| web_path.to_string())
    }
}

fn is_remote(web_path: &str) -> bool {
    web_path.starts_with("https://") || web_path.starts_with("http://")
}

/// Path under the static directory, or `None` for remote, blank or escaping paths.
fn site_relative(web_path: &str) -> Option<&Path> {
    if web_path.is_empty() || is_remote(web_path) {
        return None;
    }
    let relative = Path::new(web_path.trim_start_matches('/'));
    relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        .then_some(relative)
}
