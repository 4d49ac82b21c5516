pub mod html;
pub mod site;
pub mod text;

pub use html::PageRenderer;
pub use site::{INDEX_FILE_NAME, SiteWriter, WrittenSite};
pub use text::TextReport;
