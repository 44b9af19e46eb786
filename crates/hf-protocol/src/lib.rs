pub mod error;
pub mod provider;
pub mod snapshot;

pub use error::*;
pub use provider::*;
pub use snapshot::*;
