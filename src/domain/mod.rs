pub mod event;
pub mod payload;

pub use event::*;
