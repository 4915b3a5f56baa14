use std::collections::HashSet;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use spdlog::warn;

use crate::content::front_matter::parse_front_matter;
use crate::content::fs_scan::{dir_exists, list_markdown_files, read_file};
use crate::content::record::FromFrontMatter;

/// One directory of content files, scanned fresh on every call. The
/// root is explicit so tests can point a collection at any directory.
///
/// Error policy: per-file read, parse, and validation failures are
/// logged and skipped; the collection as a whole always loads. A
/// missing root directory degrades to an empty collection.
pub struct Collection<T> {
    root: PathBuf,
    _kind: PhantomData<T>,
}

impl<T: FromFrontMatter> Collection<T> {
    pub fn new(root: PathBuf) -> Collection<T> {
        Collection {
            root,
            _kind: PhantomData,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All valid records in the directory, most recent first. Dates
    /// compare as strings; the stable sort keeps filename order for
    /// equal dates.
    pub fn list_all(&self) -> Vec<T> {
        if !dir_exists(&self.root) {
            warn!("Content directory does not exist: {}", self.root.display());
            return vec![];
        }

        let names = match list_markdown_files(&self.root) {
            Ok(names) => names,
            Err(e) => {
                warn!("Error listing {}: {}", self.root.display(), e);
                return vec![];
            }
        };

        let mut records: Vec<T> = vec![];
        let mut seen: HashSet<String> = HashSet::new();

        for name in names {
            let Some(slug) = name.strip_suffix(".md") else {
                continue;
            };

            if !seen.insert(slug.to_string()) {
                warn!("Duplicate slug '{}', keeping first file", slug);
                continue;
            }

            match self.load_one(slug, &self.root.join(&name)) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping {}: {}", name, e),
            }
        }

        records.sort_by(|a, b| b.date().cmp(a.date()));
        records
    }

    /// Re-reads exactly `<root>/<slug>.md`, independent of the listing
    /// scan. None covers missing file, read failure, parse failure and
    /// validation failure alike.
    pub fn get_by_slug(&self, slug: &str) -> Option<T> {
        if slug.contains("..") || slug.contains('/') || slug.contains('\\') {
            warn!("Rejecting slug with path components: {}", slug);
            return None;
        }

        let path = self.root.join(format!("{}.md", slug));
        match self.load_one(slug, &path) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Could not load {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Slugs of all valid records, in listing order. Derived from the
    /// validated set so a file that fails validation never produces a
    /// route that would 404.
    pub fn list_slugs(&self) -> Vec<String> {
        self.list_all()
            .iter()
            .map(|record| record.slug().to_string())
            .collect()
    }

    fn load_one(&self, slug: &str, path: &Path) -> io::Result<T> {
        let raw = read_file(path)?;
        let parsed = parse_front_matter(&raw)?;
        T::from_front_matter(slug.to_string(), parsed)
    }
}
