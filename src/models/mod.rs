pub mod document;
pub mod loaders;

pub use document::Document;
pub use loaders::load_txt_documents;
