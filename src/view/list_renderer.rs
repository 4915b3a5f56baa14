use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

#[derive(ramhorns::Content)]
pub struct ListEntry {
    pub link: String,
    pub title: String,
    pub date: String,
    pub description: String,
    pub language: Option<String>,
}

#[derive(ramhorns::Content)]
struct ListPage<'a> {
    site_title: &'a str,
    heading: &'a str,
    entries: &'a [ListEntry],
    has_entries: bool,
}

/// Renders the blog and projects listing pages. The same renderer
/// serves both kinds; the project template additionally references the
/// `language` field.
pub struct ListRenderer<'a> {
    pub template: Template<'a>,
}

impl ListRenderer<'_> {
    pub fn new(list_tpl_src: &str) -> io::Result<ListRenderer> {
        let template = match Template::new(list_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(
                    ErrorKind::InvalidInput,
                    format!("Error parsing list template: {}", e),
                ));
            }
        };

        Ok(ListRenderer { template })
    }

    pub fn render(&self, site_title: &str, heading: &str, entries: &[ListEntry]) -> String {
        self.template.render(&ListPage {
            site_title,
            heading,
            entries,
            has_entries: !entries.is_empty(),
        })
    }
}
