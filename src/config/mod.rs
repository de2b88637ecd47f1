pub mod types;
pub mod catalog;
pub mod validator;
pub mod settings;

pub use types::*;
pub use catalog::*;
pub use validator::*;
pub use settings::*;
