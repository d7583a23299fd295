pub mod error;
pub mod record;
pub mod source;

pub use error::*;
pub use record::*;
pub use source::*;
