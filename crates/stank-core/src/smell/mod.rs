pub mod model;
pub mod render;

pub use model::{FinalEol, Interpreter, LineEnding, Smell};
