pub mod configuration;
pub mod error;
pub mod workflow;

pub use configuration::*;
pub use error::*;
pub use workflow::*;

pub type Unit = ();
