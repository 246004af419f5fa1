//! Textual disassembly.
//!
//! Renders one instruction word in MIPS assembly format for the program
//! printer and the pipeline-latch dump. Branch and jump mnemonics are
//! rendered even though the core executes them as no-ops, so listings of
//! programs assembled for a fuller machine stay readable.

use super::opcodes::*;

/// Disassembles a 32-bit instruction word.
pub fn disassemble(word: u32) -> String {
    let opcode = word >> 26;
    let rs = (word >> 21) & 0x1F;
    let rt = (word >> 16) & 0x1F;
    let rd = (word >> 11) & 0x1F;
    let shamt = (word >> 6) & 0x1F;
    let function = word & 0x3F;
    let imm = word & 0xFFFF;
    let target = word & 0x03FF_FFFF;

    if opcode == OP_RTYPE {
        match function {
            FN_SLL => format!("SLL ${}, ${}, {:#x}", rd, rt, shamt),
            FN_SRL => format!("SRL ${}, ${}, {:#x}", rd, rt, shamt),
            FN_SRA => format!("SRA ${}, ${}, {:#x}", rd, rt, shamt),
            FN_JR => format!("JR ${}", rs),
            FN_JALR => format!("JALR ${}, ${}", rs, rd),
            FN_SYSCALL => "SYSCALL".to_string(),
            FN_MFHI => format!("MFHI ${}", rd),
            FN_MTHI => format!("MTHI ${}", rs),
            FN_MFLO => format!("MFLO ${}", rd),
            FN_MTLO => format!("MTLO ${}", rs),
            FN_MULT => format!("MULT ${}, ${}", rs, rt),
            FN_MULTU => format!("MULTU ${}, ${}", rs, rt),
            FN_DIV => format!("DIV ${}, ${}", rs, rt),
            FN_DIVU => format!("DIVU ${}, ${}", rs, rt),
            FN_ADD => format!("ADD ${}, ${}, ${}", rd, rs, rt),
            FN_ADDU => format!("ADDU ${}, ${}, ${}", rd, rs, rt),
            FN_SUB => format!("SUB ${}, ${}, ${}", rd, rs, rt),
            FN_SUBU => format!("SUBU ${}, ${}, ${}", rd, rs, rt),
            FN_AND => format!("AND ${}, ${}, ${}", rd, rs, rt),
            FN_OR => format!("OR ${}, ${}, ${}", rd, rs, rt),
            FN_XOR => format!("XOR ${}, ${}, ${}", rd, rs, rt),
            FN_NOR => format!("NOR ${}, ${}, ${}", rd, rs, rt),
            FN_SLT => format!("SLT ${}, ${}, ${}", rd, rs, rt),
            _ => format!(".word {:#010x}", word),
        }
    } else {
        match opcode {
            OP_ADDI => format!("ADDI ${}, ${}, {:#x}", rt, rs, imm),
            OP_ADDIU => format!("ADDIU ${}, ${}, {:#x}", rt, rs, imm),
            OP_ANDI => format!("ANDI ${}, ${}, {:#x}", rt, rs, imm),
            OP_ORI => format!("ORI ${}, ${}, {:#x}", rt, rs, imm),
            OP_XORI => format!("XORI ${}, ${}, {:#x}", rt, rs, imm),
            OP_SLTI => format!("SLTI ${}, ${}, {:#x}", rt, rs, imm),
            OP_LUI => format!("LUI ${}, {:#x}", rt, imm),
            OP_LB => format!("LB ${}, {:#x}(${})", rt, imm, rs),
            OP_LH => format!("LH ${}, {:#x}(${})", rt, imm, rs),
            OP_LW => format!("LW ${}, {:#x}(${})", rt, imm, rs),
            OP_SB => format!("SB ${}, {:#x}(${})", rt, imm, rs),
            OP_SH => format!("SH ${}, {:#x}(${})", rt, imm, rs),
            OP_SW => format!("SW ${}, {:#x}(${})", rt, imm, rs),
            OP_BEQ => format!("BEQ ${}, ${}, {:#x}", rs, rt, imm << 2),
            OP_BNE => format!("BNE ${}, ${}, {:#x}", rs, rt, imm << 2),
            OP_BLEZ => format!("BLEZ ${}, {:#x}", rs, imm << 2),
            OP_BGTZ => format!("BGTZ ${}, {:#x}", rs, imm << 2),
            OP_REGIMM => match rt {
                0 => format!("BLTZ ${}, {:#x}", rs, imm << 2),
                1 => format!("BGEZ ${}, {:#x}", rs, imm << 2),
                _ => format!(".word {:#010x}", word),
            },
            OP_J => format!("J {:#x}", target),
            OP_JAL => format!("JAL {:#x}", target),
            _ => format!(".word {:#010x}", word),
        }
    }
}
