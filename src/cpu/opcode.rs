//! Opcode decoding: maps each of the 256 possible opcode bytes to a mnemonic,
//! addressing mode, and base cycle count (before any page-cross or
//! branch-taken penalty).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum Mnemonic {
    // Official
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS, CLC, CLD,
    CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY, JMP, JSR, LDA,
    LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP, ROL, ROR, RTI, RTS, SBC, SEC,
    SED, SEI, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,
    // Unofficial, well-defined
    LAX, SAX, DCP, ISB, SLO, RLA, SRE, RRA, ANC, ALR, ARR, SBX,
    // Unofficial, unstable on real hardware; approximated here
    XAA, AHX, TAS, SHY, SHX, LAS,
    /// Documented halt opcode ($02, $12, $22, ...): stops the machine.
    JAM,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implicit,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndexedIndirectX,
    IndirectIndexedY,
}

/// A single decoded opcode entry: mnemonic, addressing mode, and the base
/// cycle count assuming no page-cross or branch-taken penalty applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpcodeInfo {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    pub base_cycles: u8,
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, base_cycles: u8) -> OpcodeInfo {
    OpcodeInfo { mnemonic, mode, base_cycles }
}

/// Decodes a raw opcode byte into its mnemonic, addressing mode, and base
/// cycle count. Every one of the 256 possible byte values is covered:
/// genuinely unassigned slots do not exist on the NMOS 6502, only varying
/// degrees of "officially documented" vs "unofficial".
pub fn decode(opcode: u8) -> OpcodeInfo {
    use AddressingMode::*;
    use Mnemonic::*;

    match opcode {
        0x00 => op(BRK, Implicit, 7),
        0x01 => op(ORA, IndexedIndirectX, 6),
        0x02 => op(JAM, Implicit, 2),
        0x03 => op(SLO, IndexedIndirectX, 8),
        0x04 => op(NOP, ZeroPage, 3),
        0x05 => op(ORA, ZeroPage, 3),
        0x06 => op(ASL, ZeroPage, 5),
        0x07 => op(SLO, ZeroPage, 5),
        0x08 => op(PHP, Implicit, 3),
        0x09 => op(ORA, Immediate, 2),
        0x0A => op(ASL, Accumulator, 2),
        0x0B => op(ANC, Immediate, 2),
        0x0C => op(NOP, Absolute, 4),
        0x0D => op(ORA, Absolute, 4),
        0x0E => op(ASL, Absolute, 6),
        0x0F => op(SLO, Absolute, 6),

        0x10 => op(BPL, Relative, 2),
        0x11 => op(ORA, IndirectIndexedY, 5),
        0x12 => op(JAM, Implicit, 2),
        0x13 => op(SLO, IndirectIndexedY, 8),
        0x14 => op(NOP, ZeroPageX, 4),
        0x15 => op(ORA, ZeroPageX, 4),
        0x16 => op(ASL, ZeroPageX, 6),
        0x17 => op(SLO, ZeroPageX, 6),
        0x18 => op(CLC, Implicit, 2),
        0x19 => op(ORA, AbsoluteY, 4),
        0x1A => op(NOP, Implicit, 2),
        0x1B => op(SLO, AbsoluteY, 7),
        0x1C => op(NOP, AbsoluteX, 4),
        0x1D => op(ORA, AbsoluteX, 4),
        0x1E => op(ASL, AbsoluteX, 7),
        0x1F => op(SLO, AbsoluteX, 7),

        0x20 => op(JSR, Absolute, 6),
        0x21 => op(AND, IndexedIndirectX, 6),
        0x22 => op(JAM, Implicit, 2),
        0x23 => op(RLA, IndexedIndirectX, 8),
        0x24 => op(BIT, ZeroPage, 3),
        0x25 => op(AND, ZeroPage, 3),
        0x26 => op(ROL, ZeroPage, 5),
        0x27 => op(RLA, ZeroPage, 5),
        0x28 => op(PLP, Implicit, 4),
        0x29 => op(AND, Immediate, 2),
        0x2A => op(ROL, Accumulator, 2),
        0x2B => op(ANC, Immediate, 2),
        0x2C => op(BIT, Absolute, 4),
        0x2D => op(AND, Absolute, 4),
        0x2E => op(ROL, Absolute, 6),
        0x2F => op(RLA, Absolute, 6),

        0x30 => op(BMI, Relative, 2),
        0x31 => op(AND, IndirectIndexedY, 5),
        0x32 => op(JAM, Implicit, 2),
        0x33 => op(RLA, IndirectIndexedY, 8),
        0x34 => op(NOP, ZeroPageX, 4),
        0x35 => op(AND, ZeroPageX, 4),
        0x36 => op(ROL, ZeroPageX, 6),
        0x37 => op(RLA, ZeroPageX, 6),
        0x38 => op(SEC, Implicit, 2),
        0x39 => op(AND, AbsoluteY, 4),
        0x3A => op(NOP, Implicit, 2),
        0x3B => op(RLA, AbsoluteY, 7),
        0x3C => op(NOP, AbsoluteX, 4),
        0x3D => op(AND, AbsoluteX, 4),
        0x3E => op(ROL, AbsoluteX, 7),
        0x3F => op(RLA, AbsoluteX, 7),

        0x40 => op(RTI, Implicit, 6),
        0x41 => op(EOR, IndexedIndirectX, 6),
        0x42 => op(JAM, Implicit, 2),
        0x43 => op(SRE, IndexedIndirectX, 8),
        0x44 => op(NOP, ZeroPage, 3),
        0x45 => op(EOR, ZeroPage, 3),
        0x46 => op(LSR, ZeroPage, 5),
        0x47 => op(SRE, ZeroPage, 5),
        0x48 => op(PHA, Implicit, 3),
        0x49 => op(EOR, Immediate, 2),
        0x4A => op(LSR, Accumulator, 2),
        0x4B => op(ALR, Immediate, 2),
        0x4C => op(JMP, Absolute, 3),
        0x4D => op(EOR, Absolute, 4),
        0x4E => op(LSR, Absolute, 6),
        0x4F => op(SRE, Absolute, 6),

        0x50 => op(BVC, Relative, 2),
        0x51 => op(EOR, IndirectIndexedY, 5),
        0x52 => op(JAM, Implicit, 2),
        0x53 => op(SRE, IndirectIndexedY, 8),
        0x54 => op(NOP, ZeroPageX, 4),
        0x55 => op(EOR, ZeroPageX, 4),
        0x56 => op(LSR, ZeroPageX, 6),
        0x57 => op(SRE, ZeroPageX, 6),
        0x58 => op(CLI, Implicit, 2),
        0x59 => op(EOR, AbsoluteY, 4),
        0x5A => op(NOP, Implicit, 2),
        0x5B => op(SRE, AbsoluteY, 7),
        0x5C => op(NOP, AbsoluteX, 4),
        0x5D => op(EOR, AbsoluteX, 4),
        0x5E => op(LSR, AbsoluteX, 7),
        0x5F => op(SRE, AbsoluteX, 7),

        0x60 => op(RTS, Implicit, 6),
        0x61 => op(ADC, IndexedIndirectX, 6),
        0x62 => op(JAM, Implicit, 2),
        0x63 => op(RRA, IndexedIndirectX, 8),
        0x64 => op(NOP, ZeroPage, 3),
        0x65 => op(ADC, ZeroPage, 3),
        0x66 => op(ROR, ZeroPage, 5),
        0x67 => op(RRA, ZeroPage, 5),
        0x68 => op(PLA, Implicit, 4),
        0x69 => op(ADC, Immediate, 2),
        0x6A => op(ROR, Accumulator, 2),
        0x6B => op(ARR, Immediate, 2),
        0x6C => op(JMP, Indirect, 5),
        0x6D => op(ADC, Absolute, 4),
        0x6E => op(ROR, Absolute, 6),
        0x6F => op(RRA, Absolute, 6),

        0x70 => op(BVS, Relative, 2),
        0x71 => op(ADC, IndirectIndexedY, 5),
        0x72 => op(JAM, Implicit, 2),
        0x73 => op(RRA, IndirectIndexedY, 8),
        0x74 => op(NOP, ZeroPageX, 4),
        0x75 => op(ADC, ZeroPageX, 4),
        0x76 => op(ROR, ZeroPageX, 6),
        0x77 => op(RRA, ZeroPageX, 6),
        0x78 => op(SEI, Implicit, 2),
        0x79 => op(ADC, AbsoluteY, 4),
        0x7A => op(NOP, Implicit, 2),
        0x7B => op(RRA, AbsoluteY, 7),
        0x7C => op(NOP, AbsoluteX, 4),
        0x7D => op(ADC, AbsoluteX, 4),
        0x7E => op(ROR, AbsoluteX, 7),
        0x7F => op(RRA, AbsoluteX, 7),

        0x80 => op(NOP, Immediate, 2),
        0x81 => op(STA, IndexedIndirectX, 6),
        0x82 => op(NOP, Immediate, 2),
        0x83 => op(SAX, IndexedIndirectX, 6),
        0x84 => op(STY, ZeroPage, 3),
        0x85 => op(STA, ZeroPage, 3),
        0x86 => op(STX, ZeroPage, 3),
        0x87 => op(SAX, ZeroPage, 3),
        0x88 => op(DEY, Implicit, 2),
        0x89 => op(NOP, Immediate, 2),
        0x8A => op(TXA, Implicit, 2),
        0x8B => op(XAA, Immediate, 2),
        0x8C => op(STY, Absolute, 4),
        0x8D => op(STA, Absolute, 4),
        0x8E => op(STX, Absolute, 4),
        0x8F => op(SAX, Absolute, 4),

        0x90 => op(BCC, Relative, 2),
        0x91 => op(STA, IndirectIndexedY, 6),
        0x92 => op(JAM, Implicit, 2),
        0x93 => op(AHX, IndirectIndexedY, 6),
        0x94 => op(STY, ZeroPageX, 4),
        0x95 => op(STA, ZeroPageX, 4),
        0x96 => op(STX, ZeroPageY, 4),
        0x97 => op(SAX, ZeroPageY, 4),
        0x98 => op(TYA, Implicit, 2),
        0x99 => op(STA, AbsoluteY, 5),
        0x9A => op(TXS, Implicit, 2),
        0x9B => op(TAS, AbsoluteY, 5),
        0x9C => op(SHY, AbsoluteX, 5),
        0x9D => op(STA, AbsoluteX, 5),
        0x9E => op(SHX, AbsoluteY, 5),
        0x9F => op(AHX, AbsoluteY, 5),

        0xA0 => op(LDY, Immediate, 2),
        0xA1 => op(LDA, IndexedIndirectX, 6),
        0xA2 => op(LDX, Immediate, 2),
        0xA3 => op(LAX, IndexedIndirectX, 6),
        0xA4 => op(LDY, ZeroPage, 3),
        0xA5 => op(LDA, ZeroPage, 3),
        0xA6 => op(LDX, ZeroPage, 3),
        0xA7 => op(LAX, ZeroPage, 3),
        0xA8 => op(TAY, Implicit, 2),
        0xA9 => op(LDA, Immediate, 2),
        0xAA => op(TAX, Implicit, 2),
        0xAB => op(LAX, Immediate, 2),
        0xAC => op(LDY, Absolute, 4),
        0xAD => op(LDA, Absolute, 4),
        0xAE => op(LDX, Absolute, 4),
        0xAF => op(LAX, Absolute, 4),

        0xB0 => op(BCS, Relative, 2),
        0xB1 => op(LDA, IndirectIndexedY, 5),
        0xB2 => op(JAM, Implicit, 2),
        0xB3 => op(LAX, IndirectIndexedY, 5),
        0xB4 => op(LDY, ZeroPageX, 4),
        0xB5 => op(LDA, ZeroPageX, 4),
        0xB6 => op(LDX, ZeroPageY, 4),
        0xB7 => op(LAX, ZeroPageY, 4),
        0xB8 => op(CLV, Implicit, 2),
        0xB9 => op(LDA, AbsoluteY, 4),
        0xBA => op(TSX, Implicit, 2),
        0xBB => op(LAS, AbsoluteY, 4),
        0xBC => op(LDY, AbsoluteX, 4),
        0xBD => op(LDA, AbsoluteX, 4),
        0xBE => op(LDX, AbsoluteY, 4),
        0xBF => op(LAX, AbsoluteY, 4),

        0xC0 => op(CPY, Immediate, 2),
        0xC1 => op(CMP, IndexedIndirectX, 6),
        0xC2 => op(NOP, Immediate, 2),
        0xC3 => op(DCP, IndexedIndirectX, 8),
        0xC4 => op(CPY, ZeroPage, 3),
        0xC5 => op(CMP, ZeroPage, 3),
        0xC6 => op(DEC, ZeroPage, 5),
        0xC7 => op(DCP, ZeroPage, 5),
        0xC8 => op(INY, Implicit, 2),
        0xC9 => op(CMP, Immediate, 2),
        0xCA => op(DEX, Implicit, 2),
        0xCB => op(SBX, Immediate, 2),
        0xCC => op(CPY, Absolute, 4),
        0xCD => op(CMP, Absolute, 4),
        0xCE => op(DEC, Absolute, 6),
        0xCF => op(DCP, Absolute, 6),

        0xD0 => op(BNE, Relative, 2),
        0xD1 => op(CMP, IndirectIndexedY, 5),
        0xD2 => op(JAM, Implicit, 2),
        0xD3 => op(DCP, IndirectIndexedY, 8),
        0xD4 => op(NOP, ZeroPageX, 4),
        0xD5 => op(CMP, ZeroPageX, 4),
        0xD6 => op(DEC, ZeroPageX, 6),
        0xD7 => op(DCP, ZeroPageX, 6),
        0xD8 => op(CLD, Implicit, 2),
        0xD9 => op(CMP, AbsoluteY, 4),
        0xDA => op(NOP, Implicit, 2),
        0xDB => op(DCP, AbsoluteY, 7),
        0xDC => op(NOP, AbsoluteX, 4),
        0xDD => op(CMP, AbsoluteX, 4),
        0xDE => op(DEC, AbsoluteX, 7),
        0xDF => op(DCP, AbsoluteX, 7),

        0xE0 => op(CPX, Immediate, 2),
        0xE1 => op(SBC, IndexedIndirectX, 6),
        0xE2 => op(NOP, Immediate, 2),
        0xE3 => op(ISB, IndexedIndirectX, 8),
        0xE4 => op(CPX, ZeroPage, 3),
        0xE5 => op(SBC, ZeroPage, 3),
        0xE6 => op(INC, ZeroPage, 5),
        0xE7 => op(ISB, ZeroPage, 5),
        0xE8 => op(INX, Implicit, 2),
        0xE9 => op(SBC, Immediate, 2),
        0xEA => op(NOP, Implicit, 2),
        0xEB => op(SBC, Immediate, 2),
        0xEC => op(CPX, Absolute, 4),
        0xED => op(SBC, Absolute, 4),
        0xEE => op(INC, Absolute, 6),
        0xEF => op(ISB, Absolute, 6),

        0xF0 => op(BEQ, Relative, 2),
        0xF1 => op(SBC, IndirectIndexedY, 5),
        0xF2 => op(JAM, Implicit, 2),
        0xF3 => op(ISB, IndirectIndexedY, 8),
        0xF4 => op(NOP, ZeroPageX, 4),
        0xF5 => op(SBC, ZeroPageX, 4),
        0xF6 => op(INC, ZeroPageX, 6),
        0xF7 => op(ISB, ZeroPageX, 6),
        0xF8 => op(SED, Implicit, 2),
        0xF9 => op(SBC, AbsoluteY, 4),
        0xFA => op(NOP, Implicit, 2),
        0xFB => op(ISB, AbsoluteY, 7),
        0xFC => op(NOP, AbsoluteX, 4),
        0xFD => op(SBC, AbsoluteX, 4),
        0xFE => op(INC, AbsoluteX, 7),
        0xFF => op(ISB, AbsoluteX, 7),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_opcode_decodes_without_panicking() {
        for opcode in 0u16..=255 {
            let _ = decode(opcode as u8);
        }
    }

    #[test]
    fn halt_opcodes_decode_as_jam() {
        for &opcode in &[0x02u8, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2] {
            assert_eq!(decode(opcode).mnemonic, Mnemonic::JAM);
        }
    }

    #[test]
    fn brk_is_seven_cycles_implicit() {
        let info = decode(0x00);
        assert_eq!(info.mnemonic, Mnemonic::BRK);
        assert_eq!(info.mode, AddressingMode::Implicit);
        assert_eq!(info.base_cycles, 7);
    }
}
