//! Static opcode table for the 65C816.
//!
//! Each opcode maps to an (addressing mode, operation) pair. The table is
//! the single source of truth: the dispatcher indexes it to drive the
//! resolve/execute split, and the debug layer reads the same entries to
//! size operands for disassembly. Keeping the mapping as data keeps the
//! two concerns independently testable and makes totality over all 256
//! opcode values a structural property rather than a convention.

/// Addressing mode of an instruction.
///
/// Resolution happens before the operation runs and leaves either an
/// immediate value or a 24-bit effective address in the operand locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrMode {
    /// Absolute: 16-bit address in the data bank.
    Abs,
    /// Absolute indexed by X.
    AbsIdxX,
    /// Absolute indexed by Y.
    AbsIdxY,
    /// Absolute long: 24-bit address.
    AbsLng,
    /// Absolute long indexed by X.
    AbsLngIdxX,
    /// Absolute jump target: 16-bit address in the program bank.
    AbsJmp,
    /// Absolute long jump target: 24-bit address.
    AbsLngJmp,
    /// Absolute indirect: 16-bit pointer in bank 0 (JMP only).
    AbsInd,
    /// Absolute indirect long: 24-bit pointer in bank 0 (JML only).
    AbsIndLng,
    /// Absolute indexed indirect: pointer at K:(addr + X).
    AbsIdxXInd,
    /// Accumulator operand.
    Acc,
    /// Block move: destination and source bank bytes.
    BlkMov,
    /// Direct page.
    Dir,
    /// Direct page indexed by X.
    DirIdxX,
    /// Direct page indexed by Y.
    DirIdxY,
    /// Direct page indirect.
    DirInd,
    /// Direct page indexed indirect: (d,X).
    DirIdxIndX,
    /// Direct page indirect indexed: (d),Y.
    DirIndIdxY,
    /// Direct page indirect long: [d].
    DirIndLng,
    /// Direct page indirect long indexed: [d],Y.
    DirIndLngIdxY,
    /// 8-bit immediate, regardless of width flags.
    Imm8,
    /// 16-bit immediate, regardless of width flags.
    Imm16,
    /// Immediate sized by the accumulator width flag.
    ImmM,
    /// Immediate sized by the index width flag.
    ImmX,
    /// Implied.
    Imp,
    /// Program-counter relative, 8-bit displacement.
    Rel,
    /// Program-counter relative, 16-bit displacement.
    RelLng,
    /// Stack relative: d,S.
    StkRel,
    /// Stack relative indirect indexed: (d,S),Y.
    StkRelIndIdxY,
}

impl AddrMode {
    /// Number of operand bytes the mode consumes under the given width
    /// flags. Immediate modes are the only flag-sensitive entries.
    #[must_use]
    pub const fn operand_bytes(self, mem8: bool, idx8: bool) -> u8 {
        match self {
            Self::Imp | Self::Acc => 0,
            Self::Dir
            | Self::DirIdxX
            | Self::DirIdxY
            | Self::DirInd
            | Self::DirIdxIndX
            | Self::DirIndIdxY
            | Self::DirIndLng
            | Self::DirIndLngIdxY
            | Self::StkRel
            | Self::StkRelIndIdxY
            | Self::Rel
            | Self::Imm8 => 1,
            Self::Abs
            | Self::AbsIdxX
            | Self::AbsIdxY
            | Self::AbsJmp
            | Self::AbsInd
            | Self::AbsIndLng
            | Self::AbsIdxXInd
            | Self::RelLng
            | Self::Imm16
            | Self::BlkMov => 2,
            Self::AbsLng | Self::AbsLngIdxX | Self::AbsLngJmp => 3,
            Self::ImmM => {
                if mem8 {
                    1
                } else {
                    2
                }
            }
            Self::ImmX => {
                if idx8 {
                    1
                } else {
                    2
                }
            }
        }
    }
}

/// Operation kind of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Adc, And, Asl, AslAcc,
    Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Bra, Brk, Brl, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cop, Cpx, Cpy,
    Dec, DecAcc, Dex, Dey,
    Eor,
    Inc, IncAcc, Inx, Iny,
    Jml, Jmp, Jsl, Jsr, JsrInd,
    Lda, Ldx, Ldy, Lsr, LsrAcc,
    Mvn, Mvp,
    Nop,
    Ora,
    Pea, Pei, Per, Pha, Phb, Phd, Phk, Php, Phx, Phy,
    Pla, Plb, Pld, Plp, Plx, Ply,
    Rep, Rol, RolAcc, Ror, RorAcc, Rti, Rtl, Rts,
    Sbc, Sec, Sed, Sei, Sep, Sta, Stp, Stx, Sty, Stz,
    Tax, Tay, Tcd, Tcs, Tdc, Trb, Tsb, Tsc, Tsx, Txa, Txs, Txy, Tya, Tyx,
    Wai, Wdm,
    Xba, Xce,
}

/// One opcode table entry: the (addressing, operation) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeInfo {
    /// Operation to execute.
    pub op: Op,
    /// Addressing mode resolved before the operation runs.
    pub mode: AddrMode,
}

const fn e(op: Op, mode: AddrMode) -> OpcodeInfo {
    OpcodeInfo { op, mode }
}

/// The full 65C816 opcode map, indexed by opcode byte.
///
/// Every value 0-255 is a defined instruction on this CPU (0x42 is WDM,
/// the reserved two-byte no-op), so the table is total by construction.
#[rustfmt::skip]
#[allow(clippy::enum_glob_use)]
pub static OPCODE_TABLE: [OpcodeInfo; 256] = {
    use AddrMode::*;
    use Op::*;
    [
        /* 0x00 */ e(Brk, Imm8),    e(Ora, DirIdxIndX), e(Cop, Imm8),       e(Ora, StkRel),
        /* 0x04 */ e(Tsb, Dir),     e(Ora, Dir),        e(Asl, Dir),        e(Ora, DirIndLng),
        /* 0x08 */ e(Php, Imp),     e(Ora, ImmM),       e(AslAcc, Acc),     e(Phd, Imp),
        /* 0x0C */ e(Tsb, Abs),     e(Ora, Abs),        e(Asl, Abs),        e(Ora, AbsLng),
        /* 0x10 */ e(Bpl, Rel),     e(Ora, DirIndIdxY), e(Ora, DirInd),     e(Ora, StkRelIndIdxY),
        /* 0x14 */ e(Trb, Dir),     e(Ora, DirIdxX),    e(Asl, DirIdxX),    e(Ora, DirIndLngIdxY),
        /* 0x18 */ e(Clc, Imp),     e(Ora, AbsIdxY),    e(IncAcc, Acc),     e(Tcs, Imp),
        /* 0x1C */ e(Trb, Abs),     e(Ora, AbsIdxX),    e(Asl, AbsIdxX),    e(Ora, AbsLngIdxX),
        /* 0x20 */ e(Jsr, AbsJmp),  e(And, DirIdxIndX), e(Jsl, AbsLngJmp),  e(And, StkRel),
        /* 0x24 */ e(Bit, Dir),     e(And, Dir),        e(Rol, Dir),        e(And, DirIndLng),
        /* 0x28 */ e(Plp, Imp),     e(And, ImmM),       e(RolAcc, Acc),     e(Pld, Imp),
        /* 0x2C */ e(Bit, Abs),     e(And, Abs),        e(Rol, Abs),        e(And, AbsLng),
        /* 0x30 */ e(Bmi, Rel),     e(And, DirIndIdxY), e(And, DirInd),     e(And, StkRelIndIdxY),
        /* 0x34 */ e(Bit, DirIdxX), e(And, DirIdxX),    e(Rol, DirIdxX),    e(And, DirIndLngIdxY),
        /* 0x38 */ e(Sec, Imp),     e(And, AbsIdxY),    e(DecAcc, Acc),     e(Tsc, Imp),
        /* 0x3C */ e(Bit, AbsIdxX), e(And, AbsIdxX),    e(Rol, AbsIdxX),    e(And, AbsLngIdxX),
        /* 0x40 */ e(Rti, Imp),     e(Eor, DirIdxIndX), e(Wdm, Imm8),       e(Eor, StkRel),
        /* 0x44 */ e(Mvp, BlkMov),  e(Eor, Dir),        e(Lsr, Dir),        e(Eor, DirIndLng),
        /* 0x48 */ e(Pha, Imp),     e(Eor, ImmM),       e(LsrAcc, Acc),     e(Phk, Imp),
        /* 0x4C */ e(Jmp, AbsJmp),  e(Eor, Abs),        e(Lsr, Abs),        e(Eor, AbsLng),
        /* 0x50 */ e(Bvc, Rel),     e(Eor, DirIndIdxY), e(Eor, DirInd),     e(Eor, StkRelIndIdxY),
        /* 0x54 */ e(Mvn, BlkMov),  e(Eor, DirIdxX),    e(Lsr, DirIdxX),    e(Eor, DirIndLngIdxY),
        /* 0x58 */ e(Cli, Imp),     e(Eor, AbsIdxY),    e(Phy, Imp),        e(Tcd, Imp),
        /* 0x5C */ e(Jml, AbsLngJmp), e(Eor, AbsIdxX),  e(Lsr, AbsIdxX),    e(Eor, AbsLngIdxX),
        /* 0x60 */ e(Rts, Imp),     e(Adc, DirIdxIndX), e(Per, RelLng),     e(Adc, StkRel),
        /* 0x64 */ e(Stz, Dir),     e(Adc, Dir),        e(Ror, Dir),        e(Adc, DirIndLng),
        /* 0x68 */ e(Pla, Imp),     e(Adc, ImmM),       e(RorAcc, Acc),     e(Rtl, Imp),
        /* 0x6C */ e(Jmp, AbsInd),  e(Adc, Abs),        e(Ror, Abs),        e(Adc, AbsLng),
        /* 0x70 */ e(Bvs, Rel),     e(Adc, DirIndIdxY), e(Adc, DirInd),     e(Adc, StkRelIndIdxY),
        /* 0x74 */ e(Stz, DirIdxX), e(Adc, DirIdxX),    e(Ror, DirIdxX),    e(Adc, DirIndLngIdxY),
        /* 0x78 */ e(Sei, Imp),     e(Adc, AbsIdxY),    e(Ply, Imp),        e(Tdc, Imp),
        /* 0x7C */ e(Jmp, AbsIdxXInd), e(Adc, AbsIdxX), e(Ror, AbsIdxX),    e(Adc, AbsLngIdxX),
        /* 0x80 */ e(Bra, Rel),     e(Sta, DirIdxIndX), e(Brl, RelLng),     e(Sta, StkRel),
        /* 0x84 */ e(Sty, Dir),     e(Sta, Dir),        e(Stx, Dir),        e(Sta, DirIndLng),
        /* 0x88 */ e(Dey, Imp),     e(Bit, ImmM),       e(Txa, Imp),        e(Phb, Imp),
        /* 0x8C */ e(Sty, Abs),     e(Sta, Abs),        e(Stx, Abs),        e(Sta, AbsLng),
        /* 0x90 */ e(Bcc, Rel),     e(Sta, DirIndIdxY), e(Sta, DirInd),     e(Sta, StkRelIndIdxY),
        /* 0x94 */ e(Sty, DirIdxX), e(Sta, DirIdxX),    e(Stx, DirIdxY),    e(Sta, DirIndLngIdxY),
        /* 0x98 */ e(Tya, Imp),     e(Sta, AbsIdxY),    e(Txs, Imp),        e(Txy, Imp),
        /* 0x9C */ e(Stz, Abs),     e(Sta, AbsIdxX),    e(Stz, AbsIdxX),    e(Sta, AbsLngIdxX),
        /* 0xA0 */ e(Ldy, ImmX),    e(Lda, DirIdxIndX), e(Ldx, ImmX),       e(Lda, StkRel),
        /* 0xA4 */ e(Ldy, Dir),     e(Lda, Dir),        e(Ldx, Dir),        e(Lda, DirIndLng),
        /* 0xA8 */ e(Tay, Imp),     e(Lda, ImmM),       e(Tax, Imp),        e(Plb, Imp),
        /* 0xAC */ e(Ldy, Abs),     e(Lda, Abs),        e(Ldx, Abs),        e(Lda, AbsLng),
        /* 0xB0 */ e(Bcs, Rel),     e(Lda, DirIndIdxY), e(Lda, DirInd),     e(Lda, StkRelIndIdxY),
        /* 0xB4 */ e(Ldy, DirIdxX), e(Lda, DirIdxX),    e(Ldx, DirIdxY),    e(Lda, DirIndLngIdxY),
        /* 0xB8 */ e(Clv, Imp),     e(Lda, AbsIdxY),    e(Tsx, Imp),        e(Tyx, Imp),
        /* 0xBC */ e(Ldy, AbsIdxX), e(Lda, AbsIdxX),    e(Ldx, AbsIdxY),    e(Lda, AbsLngIdxX),
        /* 0xC0 */ e(Cpy, ImmX),    e(Cmp, DirIdxIndX), e(Rep, Imm8),       e(Cmp, StkRel),
        /* 0xC4 */ e(Cpy, Dir),     e(Cmp, Dir),        e(Dec, Dir),        e(Cmp, DirIndLng),
        /* 0xC8 */ e(Iny, Imp),     e(Cmp, ImmM),       e(Dex, Imp),        e(Wai, Imp),
        /* 0xCC */ e(Cpy, Abs),     e(Cmp, Abs),        e(Dec, Abs),        e(Cmp, AbsLng),
        /* 0xD0 */ e(Bne, Rel),     e(Cmp, DirIndIdxY), e(Cmp, DirInd),     e(Cmp, StkRelIndIdxY),
        /* 0xD4 */ e(Pei, Dir),     e(Cmp, DirIdxX),    e(Dec, DirIdxX),    e(Cmp, DirIndLngIdxY),
        /* 0xD8 */ e(Cld, Imp),     e(Cmp, AbsIdxY),    e(Phx, Imp),        e(Stp, Imp),
        /* 0xDC */ e(Jml, AbsIndLng), e(Cmp, AbsIdxX),  e(Dec, AbsIdxX),    e(Cmp, AbsLngIdxX),
        /* 0xE0 */ e(Cpx, ImmX),    e(Sbc, DirIdxIndX), e(Sep, Imm8),       e(Sbc, StkRel),
        /* 0xE4 */ e(Cpx, Dir),     e(Sbc, Dir),        e(Inc, Dir),        e(Sbc, DirIndLng),
        /* 0xE8 */ e(Inx, Imp),     e(Sbc, ImmM),       e(Nop, Imp),        e(Xba, Imp),
        /* 0xEC */ e(Cpx, Abs),     e(Sbc, Abs),        e(Inc, Abs),        e(Sbc, AbsLng),
        /* 0xF0 */ e(Beq, Rel),     e(Sbc, DirIndIdxY), e(Sbc, DirInd),     e(Sbc, StkRelIndIdxY),
        /* 0xF4 */ e(Pea, Imm16),   e(Sbc, DirIdxX),    e(Inc, DirIdxX),    e(Sbc, DirIndLngIdxY),
        /* 0xF8 */ e(Sed, Imp),     e(Sbc, AbsIdxY),    e(Plx, Imp),        e(Xce, Imp),
        /* 0xFC */ e(JsrInd, AbsIdxXInd), e(Sbc, AbsIdxX), e(Inc, AbsIdxX), e(Sbc, AbsLngIdxX),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_check_known_entries() {
        assert_eq!(OPCODE_TABLE[0xA9].op, Op::Lda);
        assert_eq!(OPCODE_TABLE[0xA9].mode, AddrMode::ImmM);
        assert_eq!(OPCODE_TABLE[0x20].op, Op::Jsr);
        assert_eq!(OPCODE_TABLE[0xFB].op, Op::Xce);
        assert_eq!(OPCODE_TABLE[0x54].op, Op::Mvn);
        assert_eq!(OPCODE_TABLE[0x42].op, Op::Wdm);
    }

    #[test]
    fn immediate_sizing_follows_width_flags() {
        assert_eq!(AddrMode::ImmM.operand_bytes(true, true), 1);
        assert_eq!(AddrMode::ImmM.operand_bytes(false, true), 2);
        assert_eq!(AddrMode::ImmX.operand_bytes(true, false), 2);
        assert_eq!(AddrMode::AbsLng.operand_bytes(true, true), 3);
        assert_eq!(AddrMode::Imp.operand_bytes(false, false), 0);
    }
}
