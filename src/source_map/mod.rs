mod document;
mod resolver;

pub use document::*;
pub use resolver::*;
