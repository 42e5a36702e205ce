pub mod catalog;
pub mod chat;
pub mod plot;

pub use catalog::*;
pub use chat::*;
pub use plot::*;
