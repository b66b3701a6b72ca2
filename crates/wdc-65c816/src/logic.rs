//! Bitwise operations: AND/ORA/EOR, bit tests, and the test-and-set/
//! test-and-reset memory operations.

use crate::bus::Bus;
use crate::cpu::W65C816;
use crate::flags::{N, V, Z};

impl W65C816 {
    pub(crate) fn and<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_mem8() {
            let value = self.byte_value(bus);
            self.regs.set_a(u16::from((self.regs.a as u8) & value));
        } else {
            let value = self.word_value(bus);
            self.regs.set_a(self.regs.a & value);
        }
    }

    pub(crate) fn ora<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_mem8() {
            let value = self.byte_value(bus);
            self.regs.set_a(u16::from((self.regs.a as u8) | value));
        } else {
            let value = self.word_value(bus);
            self.regs.set_a(self.regs.a | value);
        }
    }

    pub(crate) fn eor<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_mem8() {
            let value = self.byte_value(bus);
            self.regs.set_a(u16::from((self.regs.a as u8) ^ value));
        } else {
            let value = self.word_value(bus);
            self.regs.set_a(self.regs.a ^ value);
        }
    }

    /// BIT: Z from A AND operand. The memory forms additionally copy the
    /// operand's top two bits into N and V; the immediate form leaves
    /// them untouched.
    pub(crate) fn bit<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_mem8() {
            let value = self.byte_value(bus);
            self.regs.p.set_if(Z, (self.regs.a as u8) & value == 0);
            if !self.immediate {
                self.regs.p.set_if(N, value & 0x80 != 0);
                self.regs.p.set_if(V, value & 0x40 != 0);
            }
        } else {
            let value = self.word_value(bus);
            self.regs.p.set_if(Z, self.regs.a & value == 0);
            if !self.immediate {
                self.regs.p.set_if(N, value & 0x8000 != 0);
                self.regs.p.set_if(V, value & 0x4000 != 0);
            }
        }
    }

    fn tsb8(&mut self, value: u8) -> u8 {
        self.regs.p.set_if(Z, (self.regs.a as u8) & value == 0);
        value | self.regs.a as u8
    }

    fn tsb16(&mut self, value: u16) -> u16 {
        self.regs.p.set_if(Z, self.regs.a & value == 0);
        value | self.regs.a
    }

    fn trb8(&mut self, value: u8) -> u8 {
        self.regs.p.set_if(Z, (self.regs.a as u8) & value == 0);
        value & !(self.regs.a as u8)
    }

    fn trb16(&mut self, value: u16) -> u16 {
        self.regs.p.set_if(Z, self.regs.a & value == 0);
        value & !self.regs.a
    }

    /// Test and set bits: Z from A AND memory, then OR A into memory.
    pub(crate) fn tsb<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_mem8() {
            self.modify8(bus, Self::tsb8);
        } else {
            self.modify16(bus, Self::tsb16);
        }
    }

    /// Test and reset bits: Z from A AND memory, then clear A's bits in
    /// memory.
    pub(crate) fn trb<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_mem8() {
            self.modify8(bus, Self::trb8);
        } else {
            self.modify16(bus, Self::trb16);
        }
    }
}
