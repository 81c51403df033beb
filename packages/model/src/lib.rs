pub mod tree;
pub mod visitor;

pub use tree::*;
pub use visitor::*;
