pub mod message;
pub mod conversation;
pub mod config;
pub mod error;


pub use error::ConvoError;
pub type Result<T> = std::result::Result<T, ConvoError>;
