mod error;
mod prompt_assembler;

pub use error::*;
pub use prompt_assembler::*;
