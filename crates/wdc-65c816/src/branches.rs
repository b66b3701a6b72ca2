//! Control transfer: relative branches, jumps, and subroutine
//! call/return pairs.
//!
//! Branch targets never leave the program bank; only the long jump and
//! call forms (JML/JSL/RTL) touch K. JSR/JSL push the address of the
//! instruction's last byte (PC minus one), and RTS/RTL increment after
//! popping, so a call/return pair lands on the following instruction.

use crate::bus::Bus;
use crate::cpu::W65C816;

impl W65C816 {
    /// Taken branches cost one internal cycle, plus another in emulation
    /// mode when the target is in a different page.
    pub(crate) fn branch_rel<B: Bus>(&mut self, bus: &mut B, condition: bool) {
        if condition {
            let offset = self.operand as u8 as i8;
            let target = self.regs.pc.wrapping_add(offset as u16);
            if self.regs.emulation && (target & 0xFF00) != (self.regs.pc & 0xFF00) {
                bus.idle();
            }
            bus.idle();
            self.regs.pc = target;
        }
    }

    /// BRL: unconditional branch with a 16-bit displacement.
    pub(crate) fn brl<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        self.regs.pc = self.regs.pc.wrapping_add(self.operand as u16);
    }

    pub(crate) fn jmp(&mut self) {
        self.regs.pc = self.operand as u16;
    }

    pub(crate) fn jml(&mut self) {
        self.regs.k = (self.operand >> 16) as u8;
        self.regs.pc = self.operand as u16;
    }

    /// JSR absolute.
    pub(crate) fn jsr<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        self.push_word(bus, self.regs.pc.wrapping_sub(1));
        self.regs.pc = self.operand as u16;
    }

    /// JSR (a,X): the indirection already spent the internal cycle.
    pub(crate) fn jsr_ind<B: Bus>(&mut self, bus: &mut B) {
        self.push_word(bus, self.regs.pc.wrapping_sub(1));
        self.regs.pc = self.operand as u16;
    }

    /// JSL: long call, pushing the program bank before the return
    /// address.
    pub(crate) fn jsl<B: Bus>(&mut self, bus: &mut B) {
        self.push_byte(bus, self.regs.k);
        bus.idle();
        self.push_word(bus, self.regs.pc.wrapping_sub(1));
        self.regs.k = (self.operand >> 16) as u8;
        self.regs.pc = self.operand as u16;
    }

    pub(crate) fn rts<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        let addr = self.pop_word(bus);
        bus.idle();
        self.regs.pc = addr.wrapping_add(1);
    }

    pub(crate) fn rtl<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        let addr = self.pop_word(bus);
        self.regs.pc = addr.wrapping_add(1);
        self.regs.k = self.pop_byte(bus);
    }
}
