// Branch instructions for 6502 CPU
//
// All eight conditional branches (BCC/BCS/BEQ/BNE/BMI/BPL/BVC/BVS) share one
// handler: the condition to test is the only thing that differs between
// them, and `resolve_address` has already computed the signed target.

use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// Branch on `condition`. Returns the extra cycles this branch
    /// contributes: 0 if not taken, 1 if taken, 2 if taken across a page
    /// boundary (the addressing mode's own page-cross cycle is added here
    /// since branches are never billed through `OpcodeInfo::page_cycle`).
    pub fn op_branch(&mut self, addr: &AddressingResult, condition: bool) -> u8 {
        if !condition {
            return 0;
        }
        let crossed = addr.page_crossed;
        self.pc = addr.address;
        if crossed {
            2
        } else {
            1
        }
    }
}
