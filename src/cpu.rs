//! The 6502 CPU: status flags, the opcode table, and instruction execution.

mod execute;
mod opcode;
mod status;

pub use execute::{Cpu, CpuBus};
pub use opcode::{decode, AddressingMode, Mnemonic, OpcodeInfo};
pub use status::Status;
