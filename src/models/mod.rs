pub mod user;
pub mod documents;

pub use user::*;
pub use documents::*;
