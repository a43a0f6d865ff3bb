// crates/find_source_documents/src/lib.rs

use std::io;
use std::path::{Path, PathBuf};

use isolate_common::markers::{EXCLUDED_DIRS, SKIPPED_FILES};
use walkdir::{DirEntry, WalkDir};

/// Expands `input` into the files to extract from.
///
/// A file is returned as-is. A directory is walked recursively in file-name
/// order, never descending into `_build` or `compilationTests` and skipping
/// files known to be deliberately broken.
pub fn find_source_documents<P: AsRef<Path>>(input: P) -> io::Result<Vec<PathBuf>> {
    SourceWalker::new(input.as_ref()).walk()
}

// === Private Implementation === //

struct SourceWalker<'a> {
    root: &'a Path,
    excluded_dirs: &'static [&'static str],
    skipped_files: &'static [&'static str],
}

impl<'a> SourceWalker<'a> {
    fn new(root: &'a Path) -> Self {
        Self {
            root,
            excluded_dirs: EXCLUDED_DIRS,
            skipped_files: SKIPPED_FILES,
        }
    }

    fn walk(&self) -> io::Result<Vec<PathBuf>> {
        let metadata = std::fs::metadata(self.root).map_err(|e| {
            io::Error::new(e.kind(), format!("Cannot read {}: {}", self.root.display(), e))
        })?;
        if metadata.is_file() {
            return Ok(vec![self.root.to_path_buf()]);
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_excluded_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("skipping unreadable entry: {}", err);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if self.is_skipped_file(&entry) {
                log::debug!("skipping {}", entry.path().display());
                continue;
            }
            files.push(entry.into_path());
        }

        log::debug!("{} file(s) found under {}", files.len(), self.root.display());
        Ok(files)
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .map(|name| self.excluded_dirs.contains(&name))
                .unwrap_or(false)
    }

    fn is_skipped_file(&self, entry: &DirEntry) -> bool {
        entry
            .file_name()
            .to_str()
            .map(|name| self.skipped_files.contains(&name))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x").unwrap();
    }

    fn relative(root: &Path, files: Vec<PathBuf>) -> Vec<String> {
        files
            .into_iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_single_file_is_returned() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "only.cpp");
        let file = dir.path().join("only.cpp");
        assert_eq!(find_source_documents(&file).unwrap(), vec![file]);
    }

    #[test]
    fn test_walk_is_sorted_and_recursive() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.cpp");
        touch(dir.path(), "a.cpp");
        touch(dir.path(), "sub/c.rst");
        let files = find_source_documents(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), files), vec!["a.cpp", "b.cpp", "sub/c.rst"]);
    }

    #[test]
    fn test_excluded_directories_are_pruned() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "docs/_build/html/index.rst");
        touch(dir.path(), "test/compilationTests/big/Token.sol");
        touch(dir.path(), "test/keep.cpp");
        let files = find_source_documents(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), files), vec!["test/keep.cpp"]);
    }

    #[test]
    fn test_excluded_name_on_a_file_is_kept() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "_build");
        let files = find_source_documents(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), files), vec!["_build"]);
    }

    #[test]
    fn test_broken_encoding_fixture_is_skipped() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "syntaxTests/invalid_utf8_sequence.sol");
        touch(dir.path(), "syntaxTests/valid.sol");
        let files = find_source_documents(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), files), vec!["syntaxTests/valid.sol"]);
    }

    #[test]
    fn test_explicit_excluded_root_is_walked() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "_build/page.rst");
        let root = dir.path().join("_build");
        let files = find_source_documents(&root).unwrap();
        assert_eq!(relative(&root, files), vec!["page.rst"]);
    }

    #[test]
    fn test_missing_input_errors() {
        let dir = TempDir::new().unwrap();
        let err = find_source_documents(dir.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
