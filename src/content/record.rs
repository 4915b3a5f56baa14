use std::io;
use std::io::ErrorKind;

use crate::content::front_matter::FrontMatter;

/// A blog post loaded from one `.md` file.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub slug: String,
    pub title: String,
    /// Kept as the authored string; collections sort it
    /// lexicographically, which requires one zero-padded date format
    /// across a directory.
    pub date: String,
    pub description: Option<String>,
    pub body: Option<String>,
}

/// A portfolio project. Same shape as a post plus the source language
/// and a repository link.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub description: Option<String>,
    pub body: Option<String>,
    pub language: Option<String>,
    pub repo: Option<String>,
}

/// Mapping seam between parsed front matter and a typed record, so one
/// generic collection serves both content kinds. Field mapping is
/// explicit: unknown keys are ignored, missing optionals stay None.
pub trait FromFrontMatter: Sized {
    fn from_front_matter(slug: String, parsed: FrontMatter) -> io::Result<Self>;

    fn slug(&self) -> &str;
    fn date(&self) -> &str;
}

fn required_field(fields: &FrontMatter, key: &str) -> io::Result<String> {
    match fields.fields.get(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.clone()),
        _ => Err(io::Error::new(
            ErrorKind::InvalidData,
            format!("missing required field '{}'", key),
        )),
    }
}

fn optional_field(fields: &FrontMatter, key: &str) -> Option<String> {
    fields.fields.get(key).cloned()
}

fn optional_body(body: String) -> Option<String> {
    if body.trim().is_empty() {
        None
    } else {
        Some(body)
    }
}

impl FromFrontMatter for Post {
    fn from_front_matter(slug: String, parsed: FrontMatter) -> io::Result<Post> {
        let title = required_field(&parsed, "title")?;
        let date = required_field(&parsed, "date")?;
        let description = optional_field(&parsed, "description");

        Ok(Post {
            slug,
            title,
            date,
            description,
            body: optional_body(parsed.body),
        })
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn date(&self) -> &str {
        &self.date
    }
}

impl FromFrontMatter for Project {
    fn from_front_matter(slug: String, parsed: FrontMatter) -> io::Result<Project> {
        let title = required_field(&parsed, "title")?;
        let date = required_field(&parsed, "date")?;
        let description = optional_field(&parsed, "description");
        let language = optional_field(&parsed, "language");
        let repo = optional_field(&parsed, "repo");

        Ok(Project {
            slug,
            title,
            date,
            description,
            body: optional_body(parsed.body),
            language,
            repo,
        })
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn date(&self) -> &str {
        &self.date
    }
}
