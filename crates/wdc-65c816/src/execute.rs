//! Operation dispatch.
//!
//! The addressing step has already run and left the operand locator
//! filled in; this match routes the decoded operation to its
//! implementation. Single-flag operations are small enough to live in
//! the match arms themselves.

use crate::bus::Bus;
use crate::cpu::W65C816;
use crate::flags::{C, D, I, N, V, Z};
use crate::opcodes::Op;

impl W65C816 {
    /// Execute one decoded operation against the resolved locator.
    pub(crate) fn execute<B: Bus>(&mut self, op: Op, bus: &mut B) {
        match op {
            Op::Adc => self.adc(bus),
            Op::And => self.and(bus),
            Op::Asl => self.asl(bus),
            Op::AslAcc => self.asl_acc(),
            Op::Bcc => self.branch_rel(bus, !self.regs.p.is_set(C)),
            Op::Bcs => self.branch_rel(bus, self.regs.p.is_set(C)),
            Op::Beq => self.branch_rel(bus, self.regs.p.is_set(Z)),
            Op::Bit => self.bit(bus),
            Op::Bmi => self.branch_rel(bus, self.regs.p.is_set(N)),
            Op::Bne => self.branch_rel(bus, !self.regs.p.is_set(Z)),
            Op::Bpl => self.branch_rel(bus, !self.regs.p.is_set(N)),
            Op::Bra => self.branch_rel(bus, true),
            Op::Brk => self.brk(bus),
            Op::Brl => self.brl(bus),
            Op::Bvc => self.branch_rel(bus, !self.regs.p.is_set(V)),
            Op::Bvs => self.branch_rel(bus, self.regs.p.is_set(V)),
            Op::Clc => self.regs.p.clear(C),
            Op::Cld => self.regs.p.clear(D),
            Op::Cli => self.regs.p.clear(I),
            Op::Clv => self.regs.p.clear(V),
            Op::Cmp => self.cmp(bus),
            Op::Cop => self.cop(bus),
            Op::Cpx => self.cpx(bus),
            Op::Cpy => self.cpy(bus),
            Op::Dec => self.dec(bus),
            Op::DecAcc => self.dec_acc(),
            Op::Dex => self.regs.set_x(self.regs.x.wrapping_sub(1)),
            Op::Dey => self.regs.set_y(self.regs.y.wrapping_sub(1)),
            Op::Eor => self.eor(bus),
            Op::Inc => self.inc(bus),
            Op::IncAcc => self.inc_acc(),
            Op::Inx => self.regs.set_x(self.regs.x.wrapping_add(1)),
            Op::Iny => self.regs.set_y(self.regs.y.wrapping_add(1)),
            Op::Jml => self.jml(),
            Op::Jmp => self.jmp(),
            Op::Jsl => self.jsl(bus),
            Op::Jsr => self.jsr(bus),
            Op::JsrInd => self.jsr_ind(bus),
            Op::Lda => self.lda(bus),
            Op::Ldx => self.ldx(bus),
            Op::Ldy => self.ldy(bus),
            Op::Lsr => self.lsr(bus),
            Op::LsrAcc => self.lsr_acc(),
            Op::Mvn => self.mvn(bus),
            Op::Mvp => self.mvp(bus),
            Op::Nop => {}
            Op::Ora => self.ora(bus),
            Op::Pea => self.pea(bus),
            Op::Pei => self.pei(bus),
            Op::Per => self.per(bus),
            Op::Pha => self.pha(bus),
            Op::Phb => self.push_byte(bus, self.regs.dbr),
            Op::Phd => self.push_word(bus, self.regs.d),
            Op::Phk => self.push_byte(bus, self.regs.k),
            Op::Php => self.push_byte(bus, self.regs.p.0),
            Op::Phx => self.phx(bus),
            Op::Phy => self.phy(bus),
            Op::Pla => self.pla(bus),
            Op::Plb => self.plb(bus),
            Op::Pld => self.pld(bus),
            Op::Plp => self.plp(bus),
            Op::Plx => self.plx(bus),
            Op::Ply => self.ply(bus),
            Op::Rep => self.rep(bus),
            Op::Rol => self.rol(bus),
            Op::RolAcc => self.rol_acc(),
            Op::Ror => self.ror(bus),
            Op::RorAcc => self.ror_acc(),
            Op::Rti => self.rti(bus),
            Op::Rtl => self.rtl(bus),
            Op::Rts => self.rts(bus),
            Op::Sbc => self.sbc(bus),
            Op::Sec => self.regs.p.set(C),
            Op::Sed => self.regs.p.set(D),
            Op::Sei => self.regs.p.set(I),
            Op::Sep => self.sep(bus),
            Op::Sta => self.sta(bus),
            Op::Stp => self.stp(bus),
            Op::Stx => self.stx(bus),
            Op::Sty => self.sty(bus),
            Op::Stz => self.stz(bus),
            Op::Tax => self.regs.set_x(self.regs.a),
            Op::Tay => self.regs.set_y(self.regs.a),
            Op::Tcd => self.tcd(),
            Op::Tcs => self.regs.set_sp(self.regs.a),
            Op::Tdc => self.tdc(),
            Op::Trb => self.trb(bus),
            Op::Tsb => self.tsb(bus),
            Op::Tsc => self.tsc(),
            Op::Tsx => self.regs.set_x(self.regs.sp),
            Op::Txa => self.regs.set_a(self.regs.x),
            Op::Txs => self.regs.set_sp(self.regs.x),
            Op::Txy => self.regs.set_y(self.regs.x),
            Op::Tya => self.regs.set_a(self.regs.y),
            Op::Tyx => self.regs.set_x(self.regs.y),
            Op::Wai => self.wai(bus),
            Op::Wdm => {}
            Op::Xba => self.xba(bus),
            Op::Xce => self.xce(),
        }
    }
}
