//! Addressing mode resolution for the 65C816.
//!
//! Each mode consumes its operand bytes with program-bank reads (which
//! advance PC and the cycle counter), spends its documented internal
//! cycles, and leaves the operand locator filled in: `operand` holds
//! either a 24-bit effective address or, when `immediate` is set, the
//! raw operand value. Operations never re-derive addresses; they consume
//! the locator through `byte_value`/`word_value`.
//!
//! Width-sensitive immediates (`ImmM`/`ImmX`) size themselves from the
//! flags as they stand at resolution time — a REP/SEP earlier in the
//! instruction stream changes how the very next immediate decodes.

use crate::bus::Bus;
use crate::cpu::W65C816;
use crate::opcodes::AddrMode;

impl W65C816 {
    /// Resolve an addressing mode, filling the operand locator.
    pub(crate) fn resolve<B: Bus>(&mut self, mode: AddrMode, bus: &mut B) {
        match mode {
            AddrMode::Abs => {
                let addr = self.read_operand_word(bus);
                self.operand = self.data_addr(addr);
            }
            AddrMode::AbsIdxX => {
                let addr = self.read_operand_word(bus);
                self.operand =
                    self.data_addr(addr).wrapping_add(u32::from(self.regs.x)) & 0xFF_FFFF;
                bus.idle();
            }
            AddrMode::AbsIdxY => {
                let addr = self.read_operand_word(bus);
                self.operand =
                    self.data_addr(addr).wrapping_add(u32::from(self.regs.y)) & 0xFF_FFFF;
                bus.idle();
            }
            AddrMode::AbsLng => {
                self.operand = self.read_operand_long(bus);
            }
            AddrMode::AbsLngIdxX => {
                let addr = self.read_operand_long(bus);
                self.operand = addr.wrapping_add(u32::from(self.regs.x)) & 0xFF_FFFF;
            }
            AddrMode::AbsJmp => {
                let addr = self.read_operand_word(bus);
                self.operand = self.program_addr(addr);
            }
            AddrMode::AbsLngJmp => {
                self.operand = self.read_operand_long(bus);
            }
            AddrMode::AbsInd => {
                // Pointer lives in bank 0.
                let ptr = self.read_operand_word(bus);
                self.operand = u32::from(self.read_data_word(bus, u32::from(ptr)));
            }
            AddrMode::AbsIndLng => {
                let ptr = self.read_operand_word(bus);
                self.operand = self.read_data_long(bus, u32::from(ptr));
            }
            AddrMode::AbsIdxXInd => {
                // Pointer is program-bank relative, unlike AbsInd.
                let base = self.read_operand_word(bus);
                bus.idle();
                let ptr = self.program_addr(base.wrapping_add(self.regs.x));
                let target = self.read_data_word(bus, ptr);
                self.operand = self.program_addr(target);
            }
            AddrMode::Acc => {
                bus.idle();
            }
            AddrMode::BlkMov => {
                // Destination bank in the low byte, source bank in the high.
                self.operand = u32::from(self.read_operand_word(bus));
            }
            AddrMode::Dir => {
                let offset = u16::from(self.read_operand_byte(bus));
                self.direct_penalty(bus);
                self.operand = u32::from(self.direct_addr(offset));
            }
            AddrMode::DirIdxX => {
                let offset = u16::from(self.read_operand_byte(bus));
                self.direct_penalty(bus);
                bus.idle();
                self.operand = u32::from(self.direct_addr(offset.wrapping_add(self.regs.x)));
            }
            AddrMode::DirIdxY => {
                let offset = u16::from(self.read_operand_byte(bus));
                self.direct_penalty(bus);
                bus.idle();
                self.operand = u32::from(self.direct_addr(offset.wrapping_add(self.regs.y)));
            }
            AddrMode::DirInd => {
                let offset = u16::from(self.read_operand_byte(bus));
                self.direct_penalty(bus);
                let ptr = self.direct_ptr_word(bus, offset);
                self.operand = self.data_addr(ptr);
            }
            AddrMode::DirIdxIndX => {
                let offset = u16::from(self.read_operand_byte(bus));
                self.direct_penalty(bus);
                bus.idle();
                let ptr = self.direct_ptr_word(bus, offset.wrapping_add(self.regs.x));
                self.operand = self.data_addr(ptr);
            }
            AddrMode::DirIndIdxY => {
                let offset = u16::from(self.read_operand_byte(bus));
                self.direct_penalty(bus);
                let ptr = self.direct_ptr_word(bus, offset);
                self.operand =
                    self.data_addr(ptr).wrapping_add(u32::from(self.regs.y)) & 0xFF_FFFF;
                bus.idle();
            }
            AddrMode::DirIndLng => {
                let offset = u16::from(self.read_operand_byte(bus));
                self.direct_penalty(bus);
                self.operand = self.direct_ptr_long(bus, offset);
            }
            AddrMode::DirIndLngIdxY => {
                let offset = u16::from(self.read_operand_byte(bus));
                self.direct_penalty(bus);
                let ptr = self.direct_ptr_long(bus, offset);
                self.operand = ptr.wrapping_add(u32::from(self.regs.y)) & 0xFF_FFFF;
            }
            AddrMode::Imm8 => {
                self.immediate = true;
                self.operand = u32::from(self.read_operand_byte(bus));
            }
            AddrMode::Imm16 => {
                self.immediate = true;
                self.operand = u32::from(self.read_operand_word(bus));
            }
            AddrMode::ImmM => {
                self.immediate = true;
                self.operand = if self.regs.is_mem8() {
                    u32::from(self.read_operand_byte(bus))
                } else {
                    u32::from(self.read_operand_word(bus))
                };
            }
            AddrMode::ImmX => {
                self.immediate = true;
                self.operand = if self.regs.is_idx8() {
                    u32::from(self.read_operand_byte(bus))
                } else {
                    u32::from(self.read_operand_word(bus))
                };
            }
            AddrMode::Imp => {
                bus.idle();
            }
            AddrMode::Rel => {
                self.operand = u32::from(self.read_operand_byte(bus));
            }
            AddrMode::RelLng => {
                self.operand = u32::from(self.read_operand_word(bus));
            }
            AddrMode::StkRel => {
                let offset = self.read_operand_byte(bus);
                bus.idle();
                self.operand = u32::from(self.regs.sp.wrapping_add(u16::from(offset)));
            }
            AddrMode::StkRelIndIdxY => {
                let offset = self.read_operand_byte(bus);
                bus.idle();
                let base = self.regs.sp.wrapping_add(u16::from(offset));
                let ptr = self.read_data_word(bus, u32::from(base));
                self.operand =
                    self.data_addr(ptr).wrapping_add(u32::from(self.regs.y)) & 0xFF_FFFF;
                bus.idle();
            }
        }
    }

    /// Direct-page modes cost one extra cycle when the direct page is not
    /// page-aligned.
    fn direct_penalty<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.d & 0x00FF != 0 {
            bus.idle();
        }
    }
}
