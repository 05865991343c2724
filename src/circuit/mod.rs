mod diagram;
mod gate;

pub use diagram::*;
pub use gate::*;
