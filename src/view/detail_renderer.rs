use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

/// Fields available to the post and project detail templates. The
/// body arrives pre-rendered as HTML, so templates must use the
/// unescaped form `{{{content}}}`.
#[derive(ramhorns::Content)]
pub struct DetailPage<'a> {
    pub site_title: &'a str,
    pub title: &'a str,
    pub date: &'a str,
    pub description: Option<&'a str>,
    pub language: Option<&'a str>,
    pub repo: Option<&'a str>,
    pub content: &'a str,
}

pub struct DetailRenderer<'a> {
    pub template: Template<'a>,
}

impl DetailRenderer<'_> {
    pub fn new(view_tpl_src: &str) -> io::Result<DetailRenderer> {
        let template = match Template::new(view_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(
                    ErrorKind::InvalidInput,
                    format!("Error parsing detail template: {}", e),
                ));
            }
        };

        Ok(DetailRenderer { template })
    }

    pub fn render(&self, page: &DetailPage) -> String {
        self.template.render(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_post_detail() {
        let template_src = r##"
TITLE=[{{title}}]
DATE=[{{date}}]
{{#description}}DESCRIPTION=[{{description}}]{{/description}}
CONTENT=[{{{content}}}]"##;
        let renderer = DetailRenderer::new(template_src).unwrap();
        let res = renderer.render(&DetailPage {
            site_title: "jmoray.dev",
            title: "Alpha & Omega",
            date: "2024-01-01",
            description: Some("First post"),
            language: None,
            repo: None,
            content: "<p>Body</p>",
        });

        assert!(res.contains("TITLE=[Alpha &amp; Omega]"));
        assert!(res.contains("DATE=[2024-01-01]"));
        assert!(res.contains("DESCRIPTION=[First post]"));
        assert!(res.contains("CONTENT=[<p>Body</p>]"));
    }

    #[test]
    fn render_project_detail_with_optional_sections() {
        let template_src =
            "{{#language}}LANG=[{{language}}]{{/language}}{{#repo}}REPO=[{{repo}}]{{/repo}}";
        let renderer = DetailRenderer::new(template_src).unwrap();

        let res = renderer.render(&DetailPage {
            site_title: "t",
            title: "Raytracer",
            date: "2023-11-20",
            description: None,
            language: Some("Rust"),
            repo: Some("https://github.com/jmoray/raytracer"),
            content: "",
        });
        assert_eq!(res, "LANG=[Rust]REPO=[https://github.com/jmoray/raytracer]");

        let res = renderer.render(&DetailPage {
            site_title: "t",
            title: "Raytracer",
            date: "2023-11-20",
            description: None,
            language: None,
            repo: None,
            content: "",
        });
        assert_eq!(res, "");
    }
}
