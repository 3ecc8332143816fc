mod workflow;

pub use workflow::*;
