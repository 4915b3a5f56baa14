pub mod contact_renderer;
pub mod detail_renderer;
pub mod list_renderer;
pub mod markdown;
pub mod page_renderer;
