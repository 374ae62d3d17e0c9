use log::debug;

use crate::opcode::Opcode;
use crate::operations as ops;
use crate::operations::Handler;
use crate::variant::Variant;

fn raw(op: &dyn Opcode) -> u16 {
    u16::from(op.family()) << 12 | op.nnn()
}

/// Selects the handler for an opcode in constant time.
///
/// The family nibble picks the primary row; families 0x0, 0x8, 0xE, and 0xF
/// route through a secondary match on the low nibble or low byte. Matching
/// is exact. Anything unmapped resolves to a no-op: the machine never aborts
/// on an encoding it doesn't know.
pub fn decode(op: &dyn Opcode, variant: Variant) -> Handler {
    match op.family() {
        0x0 => decode_family_0(op, variant),
        0x1 => ops::jp,
        0x2 => ops::call,
        0x3 => ops::se_byte,
        0x4 => ops::sne_byte,
        0x5 if op.n() == 0x0 => ops::se_reg,
        0x6 => ops::ld_byte,
        0x7 => ops::add_byte,
        0x8 => decode_family_8(op),
        0x9 if op.n() == 0x0 => ops::sne_reg,
        0xA => ops::ld_i,
        0xB => ops::jp_v0,
        0xC => ops::rnd,
        0xD => ops::drw,
        0xE => decode_family_e(op),
        0xF => decode_family_f(op, variant),
        _ => unmapped(op),
    }
}

fn decode_family_0(op: &dyn Opcode, variant: Variant) -> Handler {
    match op.kk() {
        0xE0 => ops::cls,
        0xEE => ops::ret,
        // Scroll down n / scroll right / scroll left / exit / low-res / high-res
        0xC0..=0xCF | 0xFB | 0xFC | 0xFD | 0xFE | 0xFF if variant.has_extended_set() => {
            reserved(op)
        }
        _ => unmapped(op),
    }
}

fn decode_family_8(op: &dyn Opcode) -> Handler {
    match op.n() {
        0x0 => ops::ld_reg,
        0x1 => ops::or,
        0x2 => ops::and,
        0x3 => ops::xor,
        0x4 => ops::add_reg,
        0x5 => ops::sub,
        0x6 => ops::shr,
        0x7 => ops::subn,
        0xE => ops::shl,
        _ => unmapped(op),
    }
}

fn decode_family_e(op: &dyn Opcode) -> Handler {
    match op.kk() {
        0x9E => ops::skp,
        0xA1 => ops::sknp,
        _ => unmapped(op),
    }
}

fn decode_family_f(op: &dyn Opcode, variant: Variant) -> Handler {
    match op.kk() {
        0x07 => ops::ld_from_dt,
        0x0A => ops::wait_key,
        0x15 => ops::ld_dt,
        0x18 => ops::ld_st,
        0x1E => ops::add_i,
        0x29 => ops::ld_font,
        0x33 => ops::bcd,
        0x55 => ops::store_regs,
        0x65 => ops::load_regs,
        // Big-digit sprite address / RPL flag save / RPL flag restore
        0x30 | 0x75 | 0x85 if variant.has_extended_set() => reserved(op),
        _ => unmapped(op),
    }
}

fn reserved(op: &dyn Opcode) -> Handler {
    debug!("reserved Super-Chip opcode {:04X}", raw(op));
    ops::nop
}

fn unmapped(op: &dyn Opcode) -> Handler {
    debug!("unmapped opcode {:04X}", raw(op));
    ops::nop
}
