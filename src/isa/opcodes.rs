//! Numeric opcode and function-field values.

pub const OP_RTYPE: u32 = 0x00;
pub const OP_REGIMM: u32 = 0x01;
pub const OP_J: u32 = 0x02;
pub const OP_JAL: u32 = 0x03;
pub const OP_BEQ: u32 = 0x04;
pub const OP_BNE: u32 = 0x05;
pub const OP_BLEZ: u32 = 0x06;
pub const OP_BGTZ: u32 = 0x07;
pub const OP_ADDI: u32 = 0x08;
pub const OP_ADDIU: u32 = 0x09;
pub const OP_SLTI: u32 = 0x0A;
pub const OP_ANDI: u32 = 0x0C;
pub const OP_ORI: u32 = 0x0D;
pub const OP_XORI: u32 = 0x0E;
pub const OP_LUI: u32 = 0x0F;
pub const OP_LB: u32 = 0x20;
pub const OP_LH: u32 = 0x21;
pub const OP_LW: u32 = 0x23;
pub const OP_SB: u32 = 0x28;
pub const OP_SH: u32 = 0x29;
pub const OP_SW: u32 = 0x2B;

pub const FN_SLL: u32 = 0x00;
pub const FN_SRL: u32 = 0x02;
pub const FN_SRA: u32 = 0x03;
pub const FN_JR: u32 = 0x08;
pub const FN_JALR: u32 = 0x09;
pub const FN_SYSCALL: u32 = 0x0C;
pub const FN_MFHI: u32 = 0x10;
pub const FN_MTHI: u32 = 0x11;
pub const FN_MFLO: u32 = 0x12;
pub const FN_MTLO: u32 = 0x13;
pub const FN_MULT: u32 = 0x18;
pub const FN_MULTU: u32 = 0x19;
pub const FN_DIV: u32 = 0x1A;
pub const FN_DIVU: u32 = 0x1B;
pub const FN_ADD: u32 = 0x20;
pub const FN_ADDU: u32 = 0x21;
pub const FN_SUB: u32 = 0x22;
pub const FN_SUBU: u32 = 0x23;
pub const FN_AND: u32 = 0x24;
pub const FN_OR: u32 = 0x25;
pub const FN_XOR: u32 = 0x26;
pub const FN_NOR: u32 = 0x27;
pub const FN_SLT: u32 = 0x2A;
