//! Shift and rotate operations, accumulator and memory forms.
//!
//! Memory forms are read-modify-write through the resolved locator;
//! rotates shift through the carry flag.

use crate::bus::Bus;
use crate::cpu::W65C816;
use crate::flags::C;

impl W65C816 {
    fn asl8(&mut self, value: u8) -> u8 {
        self.regs.p.set_if(C, value & 0x80 != 0);
        let result = value << 1;
        self.regs.p.update_nz8(result);
        result
    }

    fn asl16(&mut self, value: u16) -> u16 {
        self.regs.p.set_if(C, value & 0x8000 != 0);
        let result = value << 1;
        self.regs.p.update_nz16(result);
        result
    }

    fn lsr8(&mut self, value: u8) -> u8 {
        self.regs.p.set_if(C, value & 0x01 != 0);
        let result = value >> 1;
        self.regs.p.update_nz8(result);
        result
    }

    fn lsr16(&mut self, value: u16) -> u16 {
        self.regs.p.set_if(C, value & 0x0001 != 0);
        let result = value >> 1;
        self.regs.p.update_nz16(result);
        result
    }

    fn rol8(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.regs.p.is_set(C));
        self.regs.p.set_if(C, value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        self.regs.p.update_nz8(result);
        result
    }

    fn rol16(&mut self, value: u16) -> u16 {
        let carry_in = u16::from(self.regs.p.is_set(C));
        self.regs.p.set_if(C, value & 0x8000 != 0);
        let result = (value << 1) | carry_in;
        self.regs.p.update_nz16(result);
        result
    }

    fn ror8(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.regs.p.is_set(C)) << 7;
        self.regs.p.set_if(C, value & 0x01 != 0);
        let result = (value >> 1) | carry_in;
        self.regs.p.update_nz8(result);
        result
    }

    fn ror16(&mut self, value: u16) -> u16 {
        let carry_in = u16::from(self.regs.p.is_set(C)) << 15;
        self.regs.p.set_if(C, value & 0x0001 != 0);
        let result = (value >> 1) | carry_in;
        self.regs.p.update_nz16(result);
        result
    }

    pub(crate) fn asl<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_mem8() {
            self.modify8(bus, Self::asl8);
        } else {
            self.modify16(bus, Self::asl16);
        }
    }

    pub(crate) fn lsr<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_mem8() {
            self.modify8(bus, Self::lsr8);
        } else {
            self.modify16(bus, Self::lsr16);
        }
    }

    pub(crate) fn rol<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_mem8() {
            self.modify8(bus, Self::rol8);
        } else {
            self.modify16(bus, Self::rol16);
        }
    }

    pub(crate) fn ror<B: Bus>(&mut self, bus: &mut B) {
        if self.regs.is_mem8() {
            self.modify8(bus, Self::ror8);
        } else {
            self.modify16(bus, Self::ror16);
        }
    }

    pub(crate) fn asl_acc(&mut self) {
        if self.regs.is_mem8() {
            let result = self.asl8(self.regs.a as u8);
            self.regs.set_a(u16::from(result));
        } else {
            let result = self.asl16(self.regs.a);
            self.regs.set_a(result);
        }
    }

    pub(crate) fn lsr_acc(&mut self) {
        if self.regs.is_mem8() {
            let result = self.lsr8(self.regs.a as u8);
            self.regs.set_a(u16::from(result));
        } else {
            let result = self.lsr16(self.regs.a);
            self.regs.set_a(result);
        }
    }

    pub(crate) fn rol_acc(&mut self) {
        if self.regs.is_mem8() {
            let result = self.rol8(self.regs.a as u8);
            self.regs.set_a(u16::from(result));
        } else {
            let result = self.rol16(self.regs.a);
            self.regs.set_a(result);
        }
    }

    pub(crate) fn ror_acc(&mut self) {
        if self.regs.is_mem8() {
            let result = self.ror8(self.regs.a as u8);
            self.regs.set_a(u16::from(result));
        } else {
            let result = self.ror16(self.regs.a);
            self.regs.set_a(result);
        }
    }
}
