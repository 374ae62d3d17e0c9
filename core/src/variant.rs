/// Instruction-set capability selector.
///
/// One [`Machine`](crate::Machine) type serves both architectures; the
/// variant only decides which reserved encodings the dispatcher recognizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    Chip8,
    SuperChip,
}

impl Variant {
    /// Whether the Super-Chip scroll/resolution/exit slots are recognized.
    pub fn has_extended_set(self) -> bool {
        match self {
            Variant::Chip8 => false,
            Variant::SuperChip => true,
        }
    }
}
