mod json_file_repository;
mod traits;

pub use json_file_repository::{JsonFileRepository, StoredBook};
pub use traits::ContactRepository;
