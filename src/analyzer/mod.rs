mod evaluate;
mod inputs;
mod karnaugh;
mod outputs;

pub use evaluate::*;
pub use inputs::*;
pub use karnaugh::*;
pub use outputs::*;
