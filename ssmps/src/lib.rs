pub mod app;
pub mod batch;
pub mod configs;
pub mod error;
pub mod lookup;
pub mod paths;
pub mod store;

pub use app::{Output, fetch};
pub use error::LookupError;
