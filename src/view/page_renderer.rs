use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

#[derive(ramhorns::Content)]
struct SitePage<'a> {
    site_title: &'a str,
    author: &'a str,
    post_count: i64,
    project_count: i64,
}

/// Renders the static pages (home, about). Both templates get the site
/// identity plus content counts; a template is free to ignore them.
pub struct PageRenderer<'a> {
    pub template: Template<'a>,
}

impl PageRenderer<'_> {
    pub fn new(page_tpl_src: &str) -> io::Result<PageRenderer> {
        let template = match Template::new(page_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(
                    ErrorKind::InvalidInput,
                    format!("Error parsing page template: {}", e),
                ));
            }
        };

        Ok(PageRenderer { template })
    }

    pub fn render(
        &self,
        site_title: &str,
        author: &str,
        post_count: usize,
        project_count: usize,
    ) -> String {
        self.template.render(&SitePage {
            site_title,
            author,
            post_count: post_count as i64,
            project_count: project_count as i64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_home() {
        let template_src = "{{site_title}} by {{author}}: {{post_count}} posts, {{project_count}} projects";
        let renderer = PageRenderer::new(template_src).unwrap();
        let res = renderer.render("jmoray.dev", "J. Moray", 12, 3);
        assert_eq!(res, "jmoray.dev by J. Moray: 12 posts, 3 projects");
    }
}
