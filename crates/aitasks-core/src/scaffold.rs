use crate::error::{Result, ScaffoldError};
use crate::io;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Read access to override files.
pub trait Overrides {
    /// Raw bytes of the override at `path`, or `None` if there is none.
    fn load(&self, path: &Path) -> Result<Option<Vec<u8>>>;
}

/// Overrides read from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskOverrides;

impl Overrides for DiskOverrides {
    fn load(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        io::read_if_exists(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    Override,
    Embedded,
}

/// Payload chosen for a generated file. Overrides are carried as raw bytes,
/// never decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub content: Vec<u8>,
    pub source: ContentSource,
}

/// Pick the payload for `source`: the override if one exists, else `default`.
///
/// Nothing is cached; every call consults `overrides` again.
pub fn resolve_content(
    overrides: &dyn Overrides,
    source: &Path,
    default: Option<&str>,
) -> Result<Resolved> {
    if let Some(content) = overrides.load(source)? {
        tracing::debug!(source = %source.display(), "using override");
        return Ok(Resolved {
            content,
            source: ContentSource::Override,
        });
    }
    match default {
        Some(content) => Ok(Resolved {
            content: content.as_bytes().to_vec(),
            source: ContentSource::Embedded,
        }),
        None => Err(ScaffoldError::SourceNotFound(source.to_path_buf())),
    }
}

/// Result of a successful copy-or-default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub target: PathBuf,
    pub source: ContentSource,
    /// Set when the target's directory had to be created.
    pub created_dir: Option<PathBuf>,
}

/// Resolve the payload for `source`, make sure the target's directory exists,
/// then write the payload to `target`, overwriting whatever is there.
pub fn copy_or_default(
    overrides: &dyn Overrides,
    source: &Path,
    target: &Path,
    default: Option<&str>,
) -> Result<Written> {
    let resolved = resolve_content(overrides, source, default)?;

    let created_dir = match target.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) if io::ensure_dir(dir)? => Some(dir.to_path_buf()),
        _ => None,
    };

    io::overwrite(target, &resolved.content)?;

    Ok(Written {
        target: target.to_path_buf(),
        source: resolved.source,
        created_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[derive(Default)]
    struct MapOverrides(HashMap<PathBuf, Vec<u8>>);

    impl Overrides for MapOverrides {
        fn load(&self, path: &Path) -> Result<Option<Vec<u8>>> {
            Ok(self.0.get(path).cloned())
        }
    }

    #[test]
    fn resolve_prefers_override() {
        let mut map = MapOverrides::default();
        map.0
            .insert(PathBuf::from("src/create-prd.md"), b"custom".to_vec());
        let got = resolve_content(&map, Path::new("src/create-prd.md"), Some("default")).unwrap();
        assert_eq!(got.content, b"custom");
        assert_eq!(got.source, ContentSource::Override);
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let map = MapOverrides::default();
        let got = resolve_content(&map, Path::new("src/create-prd.md"), Some("default")).unwrap();
        assert_eq!(got.content, b"default");
        assert_eq!(got.source, ContentSource::Embedded);
    }

    #[test]
    fn resolve_without_source_or_default_fails() {
        let map = MapOverrides::default();
        let err = resolve_content(&map, Path::new("src/missing.md"), None).unwrap_err();
        assert!(matches!(err, ScaffoldError::SourceNotFound(p) if p == Path::new("src/missing.md")));
    }

    #[test]
    fn copy_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a/b/c/create-prd.md");
        let written = copy_or_default(
            &DiskOverrides,
            &dir.path().join("none.md"),
            &target,
            Some("body"),
        )
        .unwrap();
        assert_eq!(written.created_dir.as_deref(), Some(dir.path().join("a/b/c").as_path()));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "body");
    }

    #[test]
    fn copy_reads_override_from_disk() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("override.md");
        std::fs::write(&source, "from disk\n").unwrap();
        let target = dir.path().join("out/create-prd.md");
        let written = copy_or_default(&DiskOverrides, &source, &target, Some("body")).unwrap();
        assert_eq!(written.source, ContentSource::Override);
        assert_eq!(std::fs::read(&target).unwrap(), std::fs::read(&source).unwrap());
    }

    #[test]
    fn copy_keeps_non_utf8_override_bytes() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("override.md");
        let body: &[u8] = b"# R\xe8gles\r\n\xff\xfe end\n";
        std::fs::write(&source, body).unwrap();
        let target = dir.path().join("out/create-prd.md");
        let written = copy_or_default(&DiskOverrides, &source, &target, Some("body")).unwrap();
        assert_eq!(written.source, ContentSource::Override);
        assert_eq!(std::fs::read(&target).unwrap(), body);
    }

    #[test]
    fn copy_twice_is_stable() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("create-prd.md");
        let source = dir.path().join("none.md");
        copy_or_default(&DiskOverrides, &source, &target, Some("body")).unwrap();
        let second = copy_or_default(&DiskOverrides, &source, &target, Some("body")).unwrap();
        assert!(second.created_dir.is_none());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "body");
    }

    #[test]
    fn missing_source_does_not_touch_target_dir() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out/create-prd.md");
        let err = copy_or_default(&DiskOverrides, &dir.path().join("none.md"), &target, None)
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::SourceNotFound(_)));
        assert!(!dir.path().join("out").exists());
    }
}
