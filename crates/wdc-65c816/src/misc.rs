//! Loads, stores, register transfers, mode switches, block moves, and
//! the halt instructions.
//!
//! Everything that lands in a register goes through the width-aware
//! setters on `Registers`, so truncation and N/Z updates are uniform.
//! The mode-switch instructions (REP/SEP/XCE) apply their width side
//! effects before returning, because the very next instruction byte is
//! decoded under the new mode.

use crate::bus::Bus;
use crate::cpu::W65C816;
use crate::flags::C;

impl W65C816 {
    // ========================================================================
    // Loads and stores
    // ========================================================================

    pub(crate) fn lda<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_mem8() {
            let value = self.byte_value(bus);
            self.regs.set_a(u16::from(value));
        } else {
            let value = self.word_value(bus);
            self.regs.set_a(value);
        }
    }

    pub(crate) fn ldx<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_idx8() {
            let value = self.byte_value(bus);
            self.regs.set_x(u16::from(value));
        } else {
            let value = self.word_value(bus);
            self.regs.set_x(value);
        }
    }

    pub(crate) fn ldy<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_idx8() {
            let value = self.byte_value(bus);
            self.regs.set_y(u16::from(value));
        } else {
            let value = self.word_value(bus);
            self.regs.set_y(value);
        }
    }

    pub(crate) fn sta<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_mem8() {
            self.write_data(bus, self.operand, self.regs.a as u8);
        } else {
            self.write_data_word(bus, self.operand, self.regs.a);
        }
    }

    pub(crate) fn stx<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_idx8() {
            self.write_data(bus, self.operand, self.regs.x as u8);
        } else {
            self.write_data_word(bus, self.operand, self.regs.x);
        }
    }

    pub(crate) fn sty<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_idx8() {
            self.write_data(bus, self.operand, self.regs.y as u8);
        } else {
            self.write_data_word(bus, self.operand, self.regs.y);
        }
    }

    pub(crate) fn stz<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_mem8() {
            self.write_data(bus, self.operand, 0);
        } else {
            self.write_data_word(bus, self.operand, 0);
        }
    }

    // ========================================================================
    // Whole-register transfers (always 16-bit, N/Z from the full value)
    // ========================================================================

    pub(crate) fn tcd(&mut self) {
        self.regs.d = self.regs.a;
        self.regs.p.update_nz16(self.regs.d);
    }

    pub(crate) fn tdc(&mut self) {
        self.regs.a = self.regs.d;
        self.regs.p.update_nz16(self.regs.a);
    }

    pub(crate) fn tsc(&mut self) {
        self.regs.a = self.regs.sp;
        self.regs.p.update_nz16(self.regs.a);
    }

    // ========================================================================
    // Mode switches
    // ========================================================================

    /// REP: clear the status bits named by the immediate mask.
    pub(crate) fn rep<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        let mask = self.operand as u8;
        self.regs.set_p(self.regs.p.0 & !mask);
    }

    /// SEP: set the status bits named by the immediate mask.
    pub(crate) fn sep<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        let mask = self.operand as u8;
        self.regs.set_p(self.regs.p.0 | mask);
    }

    /// XCE: exchange the carry flag with the emulation-mode flag. This is
    /// the only way in or out of emulation mode.
    pub(crate) fn xce(&mut self) {
        let carry = self.regs.p.is_set(C);
        self.regs.p.set_if(C, self.regs.emulation);
        self.regs.set_emulation(carry);
    }

    /// XBA: swap the accumulator's bytes. N/Z reflect the new low byte.
    pub(crate) fn xba<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        self.regs.a = self.regs.a.swap_bytes();
        self.regs.p.update_nz8(self.regs.a as u8);
    }

    // ========================================================================
    // Block moves
    // ========================================================================

    /// MVN: block move with ascending addresses.
    pub(crate) fn mvn<B: Bus>(&mut self, bus: &mut B) {
        self.block_move(bus, 1);
    }

    /// MVP: block move with descending addresses.
    pub(crate) fn mvp<B: Bus>(&mut self, bus: &mut B) {
        self.block_move(bus, -1);
    }

    /// Move A+1 bytes from the source bank (indexed by X) to the
    /// destination bank (indexed by Y). A is always the full 16-bit
    /// count; the indexes advance at their current width. DBR is left
    /// pointing at the destination bank.
    fn block_move<B: Bus>(&mut self, bus: &mut B, step: i16) {
        let dest_bank = (self.operand & 0xFF) << 16;
        let src_bank = (self.operand & 0xFF00) << 8;
        self.regs.dbr = (self.operand & 0xFF) as u8;

        while self.regs.a != 0xFFFF {
            let value = self.read_data(bus, src_bank | u32::from(self.regs.x));
            self.write_data(bus, dest_bank | u32::from(self.regs.y), value);
            bus.idle();
            bus.idle();

            if self.regs.is_idx8() {
                self.regs.x = u16::from((self.regs.x as u8).wrapping_add_signed(step as i8));
                self.regs.y = u16::from((self.regs.y as u8).wrapping_add_signed(step as i8));
            } else {
                self.regs.x = self.regs.x.wrapping_add_signed(step);
                self.regs.y = self.regs.y.wrapping_add_signed(step);
            }
            self.regs.a = self.regs.a.wrapping_sub(1);
        }
    }

    // ========================================================================
    // Halts
    // ========================================================================

    /// WAI: stop fetching until an interrupt line asserts. A masked IRQ
    /// still wakes the CPU; it just resumes without vectoring.
    pub(crate) fn wai<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        self.waiting = true;
    }

    /// STP: stop the clock until reset.
    pub(crate) fn stp<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        self.stopped = true;
    }
}
