//! Stack operations.
//!
//! Register pushes and pulls follow the active register width, except
//! the direct-page and bank registers, which always move at their fixed
//! width regardless of the M flag. All pulls except PLP set N/Z from
//! the pulled value; PLP rewrites the whole status byte (with the
//! attendant index-truncation side effect, handled by `set_p`).

use crate::bus::Bus;
use crate::cpu::W65C816;

impl W65C816 {
    pub(crate) fn pha<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_mem8() {
            self.push_byte(bus, self.regs.a as u8);
        } else {
            self.push_word(bus, self.regs.a);
        }
    }

    pub(crate) fn phx<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_idx8() {
            self.push_byte(bus, self.regs.x as u8);
        } else {
            self.push_word(bus, self.regs.x);
        }
    }

    pub(crate) fn phy<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_idx8() {
            self.push_byte(bus, self.regs.y as u8);
        } else {
            self.push_word(bus, self.regs.y);
        }
    }

    pub(crate) fn pla<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        if self.regs.is_mem8() {
            let value = self.pop_byte(bus);
            self.regs.set_a(u16::from(value));
        } else {
            let value = self.pop_word(bus);
            self.regs.set_a(value);
        }
    }

    pub(crate) fn plx<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        if self.regs.is_idx8() {
            let value = self.pop_byte(bus);
            self.regs.set_x(u16::from(value));
        } else {
            let value = self.pop_word(bus);
            self.regs.set_x(value);
        }
    }

    pub(crate) fn ply<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        if self.regs.is_idx8() {
            let value = self.pop_byte(bus);
            self.regs.set_y(u16::from(value));
        } else {
            let value = self.pop_word(bus);
            self.regs.set_y(value);
        }
    }

    pub(crate) fn plp<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        let value = self.pop_byte(bus);
        self.regs.set_p(value);
    }

    pub(crate) fn plb<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        self.regs.dbr = self.pop_byte(bus);
        self.regs.p.update_nz8(self.regs.dbr);
    }

    pub(crate) fn pld<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        self.regs.d = self.pop_word(bus);
        self.regs.p.update_nz16(self.regs.d);
    }

    /// PEA: push the 16-bit immediate, independent of register widths.
    pub(crate) fn pea<B: Bus>(&mut self, bus: &mut B) {
        self.push_word(bus, self.operand as u16);
    }

    /// PEI: push the 16-bit pointer read from the direct page.
    pub(crate) fn pei<B: Bus>(&mut self, bus: &mut B) {
        let value = self.word_value(bus);
        self.push_word(bus, value);
    }

    /// PER: push PC plus a 16-bit displacement (position-independent
    /// address materialization).
    pub(crate) fn per<B: Bus>(&mut self, bus: &mut B) {
        bus.idle();
        let value = self.regs.pc.wrapping_add(self.operand as u16);
        self.push_word(bus, value);
    }
}
