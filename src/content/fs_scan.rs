use std::path::Path;
use std::{fs, io};

/// Filesystem boundary of the content pipeline. Every operation here
/// returns a Result instead of panicking, so the loader can treat a
/// vanished file or an unreadable directory as ordinary data.

pub fn dir_exists(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.is_dir(),
        Err(_) => false,
    }
}

pub fn read_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Lists `.md` file names in a directory, non-recursive. Directories
/// and other extensions are skipped. Names are sorted so enumeration
/// order does not depend on the filesystem.
pub fn list_markdown_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = vec![];
    let entries = fs::read_dir(dir)?;
    for entry in entries {
        if let Ok(entry) = entry {
            if let Ok(file_type) = entry.file_type() {
                if !file_type.is_file() {
                    continue;
                }
                let file_name = entry.file_name();
                if let Some(file_name) = file_name.to_str() {
                    if file_name.ends_with(".md") {
                        names.push(file_name.to_string());
                    }
                }
            }
        }
    }
    names.sort();
    Ok(names)
}
