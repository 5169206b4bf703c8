mod env;
pub use env::AppEnv;

mod error;
pub use error::AppError;

mod message;
pub use message::{ChatMessage, ChatRole, ContactMessage};
