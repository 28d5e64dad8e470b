pub mod config;
pub mod convert;
pub mod errors;
pub mod format;
pub mod layout;
pub mod vector;

pub use config::{Config, LayoutMode};
pub use convert::convert;
pub use errors::Error;
pub use format::HexStyle;
pub use vector::TestCase;
