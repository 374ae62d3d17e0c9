pub use machine::Machine;
pub use variant::Variant;

pub mod constants;
pub mod disasm;
mod instruction;
mod machine;
pub mod opcode;
mod operations;
pub mod state;
mod variant;
