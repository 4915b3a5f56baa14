use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

/// Outcome banner shown after a contact form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub success: bool,
    pub message: String,
}

#[derive(ramhorns::Content)]
struct ContactPage<'a> {
    site_title: &'a str,
    has_flash: bool,
    flash_success: bool,
    flash_message: &'a str,
}

pub struct ContactRenderer<'a> {
    pub template: Template<'a>,
}

impl ContactRenderer<'_> {
    pub fn new(tpl_src: &str) -> io::Result<ContactRenderer> {
        let template = match Template::new(tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(
                    ErrorKind::InvalidInput,
                    format!("Error parsing contact template: {}", e),
                ));
            }
        };

        Ok(ContactRenderer { template })
    }

    pub fn render(&self, site_title: &str, flash: Option<&Flash>) -> String {
        self.template.render(&ContactPage {
            site_title,
            has_flash: flash.is_some(),
            flash_success: flash.map(|f| f.success).unwrap_or(false),
            flash_message: flash.map(|f| f.message.as_str()).unwrap_or(""),
        })
    }
}

#[derive(ramhorns::Content)]
pub struct MessageRow {
    pub name: String,
    pub email: String,
    pub message: String,
    pub received: String,
}

#[derive(ramhorns::Content)]
struct MessagesPage<'a> {
    site_title: &'a str,
    messages: &'a [MessageRow],
    has_messages: bool,
}

pub struct MessageListRenderer<'a> {
    pub template: Template<'a>,
}

impl MessageListRenderer<'_> {
    pub fn new(tpl_src: &str) -> io::Result<MessageListRenderer> {
        let template = match Template::new(tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(
                    ErrorKind::InvalidInput,
                    format!("Error parsing messages template: {}", e),
                ));
            }
        };

        Ok(MessageListRenderer { template })
    }

    pub fn render(&self, site_title: &str, messages: &[MessageRow]) -> String {
        self.template.render(&MessagesPage {
            site_title,
            messages,
            has_messages: !messages.is_empty(),
        })
    }
}
