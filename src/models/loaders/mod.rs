pub mod txt_loader;

pub use txt_loader::load_txt_documents;
