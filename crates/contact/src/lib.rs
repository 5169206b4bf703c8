mod error;
pub use error::SubmitError;

mod relay;
pub use relay::{ContactRelay, FALLBACK_EMAIL};

mod validate;
pub use validate::validate_email;
