mod parser;
mod variables;

pub use parser::*;
pub use variables::*;
