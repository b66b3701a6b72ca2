//! Read-only introspection for debugger and disassembler collaborators.
//!
//! Works entirely from a register snapshot, the instruction bytes, and a
//! side-effect-free `peek` callback; the live engine is never touched.
//! The address arithmetic here mirrors the resolver in `addressing.rs`,
//! including the emulation-mode direct-page wrap quirk, but performs no
//! clocked bus traffic.

use crate::opcodes::OPCODE_TABLE;
use crate::registers::Registers;

/// Number of operand bytes the instruction at `opcode` consumes under
/// the given width flags. Total size is this plus the opcode byte.
#[must_use]
pub fn operand_size(opcode: u8, mem8: bool, idx8: bool) -> u8 {
    OPCODE_TABLE[opcode as usize].mode.operand_bytes(mem8, idx8)
}

/// Compute the effective address the instruction would act on.
///
/// `regs` is a snapshot taken at an instruction boundary with PC at the
/// opcode byte; `operand` holds the operand bytes that follow it; `peek`
/// reads memory without clocking or side effects (indirect modes need
/// it to chase pointers). Returns `None` for modes with no memory
/// effective address: implied, accumulator, immediate, and block move.
pub fn effective_address<F: FnMut(u32) -> u8>(
    regs: &Registers,
    opcode: u8,
    operand: &[u8],
    mut peek: F,
) -> Option<u32> {
    use crate::opcodes::AddrMode as M;

    let byte = u16::from(operand.first().copied().unwrap_or(0));
    let word = byte | (u16::from(operand.get(1).copied().unwrap_or(0)) << 8);
    let long = u32::from(word) | (u32::from(operand.get(2).copied().unwrap_or(0)) << 16);

    let data_addr = |addr: u16| (u32::from(regs.dbr) << 16) | u32::from(addr);
    let program_addr = |addr: u16| (u32::from(regs.k) << 16) | u32::from(addr);

    fn direct(regs: &Registers, offset: u16) -> u16 {
        if regs.emulation && regs.d & 0x00FF == 0 {
            (regs.d & 0xFF00) | (offset & 0x00FF)
        } else {
            regs.d.wrapping_add(offset)
        }
    }

    fn peek_word<F: FnMut(u32) -> u8>(peek: &mut F, addr: u32) -> u16 {
        let lo = peek(addr & 0xFF_FFFF);
        let hi = peek(addr.wrapping_add(1) & 0xFF_FFFF);
        u16::from_le_bytes([lo, hi])
    }

    fn peek_direct_word<F: FnMut(u32) -> u8>(peek: &mut F, regs: &Registers, offset: u16) -> u16 {
        let lo = peek(u32::from(direct(regs, offset)));
        let hi = peek(u32::from(direct(regs, offset.wrapping_add(1))));
        u16::from_le_bytes([lo, hi])
    }

    fn peek_direct_long<F: FnMut(u32) -> u8>(peek: &mut F, regs: &Registers, offset: u16) -> u32 {
        let b1 = peek(u32::from(direct(regs, offset)));
        let b2 = peek(u32::from(direct(regs, offset.wrapping_add(1))));
        let b3 = peek(u32::from(direct(regs, offset.wrapping_add(2))));
        (u32::from(b3) << 16) | (u32::from(b2) << 8) | u32::from(b1)
    }

    match OPCODE_TABLE[opcode as usize].mode {
        M::Imp | M::Acc | M::Imm8 | M::Imm16 | M::ImmM | M::ImmX | M::BlkMov => None,
        M::Abs => Some(data_addr(word)),
        M::AbsIdxX => Some(data_addr(word).wrapping_add(u32::from(regs.x)) & 0xFF_FFFF),
        M::AbsIdxY => Some(data_addr(word).wrapping_add(u32::from(regs.y)) & 0xFF_FFFF),
        M::AbsLng => Some(long),
        M::AbsLngIdxX => Some(long.wrapping_add(u32::from(regs.x)) & 0xFF_FFFF),
        M::AbsJmp => Some(program_addr(word)),
        M::AbsLngJmp => Some(long),
        M::AbsInd => {
            let target = peek_word(&mut peek, u32::from(word));
            Some(program_addr(target))
        }
        M::AbsIndLng => {
            let lo = u32::from(peek_word(&mut peek, u32::from(word)));
            let bank = peek(u32::from(word.wrapping_add(2)));
            Some((u32::from(bank) << 16) | lo)
        }
        M::AbsIdxXInd => {
            let ptr = program_addr(word.wrapping_add(regs.x));
            let target = peek_word(&mut peek, ptr);
            Some(program_addr(target))
        }
        M::Dir => Some(u32::from(direct(regs, byte))),
        M::DirIdxX => Some(u32::from(direct(regs, byte.wrapping_add(regs.x)))),
        M::DirIdxY => Some(u32::from(direct(regs, byte.wrapping_add(regs.y)))),
        M::DirInd => Some(data_addr(peek_direct_word(&mut peek, regs, byte))),
        M::DirIdxIndX => Some(data_addr(peek_direct_word(
            &mut peek,
            regs,
            byte.wrapping_add(regs.x),
        ))),
        M::DirIndIdxY => {
            let base = data_addr(peek_direct_word(&mut peek, regs, byte));
            Some(base.wrapping_add(u32::from(regs.y)) & 0xFF_FFFF)
        }
        M::DirIndLng => Some(peek_direct_long(&mut peek, regs, byte)),
        M::DirIndLngIdxY => Some(
            peek_direct_long(&mut peek, regs, byte).wrapping_add(u32::from(regs.y)) & 0xFF_FFFF,
        ),
        M::Rel => {
            let offset = byte as u8 as i8;
            let target = regs.pc.wrapping_add(2).wrapping_add(offset as u16);
            Some(program_addr(target))
        }
        M::RelLng => {
            let target = regs.pc.wrapping_add(3).wrapping_add(word);
            Some(program_addr(target))
        }
        M::StkRel => Some(u32::from(regs.sp.wrapping_add(byte))),
        M::StkRelIndIdxY => {
            let base = regs.sp.wrapping_add(byte);
            let ptr = peek_word(&mut peek, u32::from(base));
            Some(data_addr(ptr).wrapping_add(u32::from(regs.y)) & 0xFF_FFFF)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Status;

    fn snapshot() -> Registers {
        let mut regs = Registers::new();
        regs.emulation = false;
        regs.p = Status::from_byte(0);
        regs
    }

    #[test]
    fn operand_size_tracks_width_flags() {
        // LDA #imm
        assert_eq!(operand_size(0xA9, true, true), 1);
        assert_eq!(operand_size(0xA9, false, true), 2);
        // LDX #imm follows the index flag
        assert_eq!(operand_size(0xA2, false, true), 1);
        // STA long
        assert_eq!(operand_size(0x8F, true, true), 3);
    }

    #[test]
    fn absolute_uses_data_bank() {
        let mut regs = snapshot();
        regs.dbr = 0x7E;
        // LDA $1234
        let ea = effective_address(&regs, 0xAD, &[0x34, 0x12], |_| 0);
        assert_eq!(ea, Some(0x7E_1234));
    }

    #[test]
    fn direct_indirect_chases_pointer_without_state_changes() {
        let mut regs = snapshot();
        regs.d = 0x0200;
        regs.dbr = 0x12;
        // LDA ($10): pointer at $000210
        let ea = effective_address(&regs, 0xB2, &[0x10], |addr| match addr {
            0x0210 => 0xCD,
            0x0211 => 0xAB,
            _ => 0,
        });
        assert_eq!(ea, Some(0x12_ABCD));
    }

    #[test]
    fn branch_target_stays_in_program_bank() {
        let mut regs = snapshot();
        regs.k = 0x80;
        regs.pc = 0x8000;
        // BRA -2 loops back onto the branch itself
        let ea = effective_address(&regs, 0x80, &[0xFE], |_| 0);
        assert_eq!(ea, Some(0x80_8000));
    }

    #[test]
    fn implied_and_immediate_have_no_address() {
        let regs = snapshot();
        assert_eq!(effective_address(&regs, 0xEA, &[], |_| 0), None);
        assert_eq!(effective_address(&regs, 0xA9, &[0x42], |_| 0), None);
    }
}
