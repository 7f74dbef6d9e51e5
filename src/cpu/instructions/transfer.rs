// Register transfer instructions for 6502 CPU

use crate::cpu::Cpu;

impl Cpu {
    /// TAX - Transfer Accumulator to X. Flags affected: Z, N.
    pub fn op_tax(&mut self) {
        self.x = self.a;
        self.update_zero_and_negative(self.x);
    }

    /// TAY - Transfer Accumulator to Y. Flags affected: Z, N.
    pub fn op_tay(&mut self) {
        self.y = self.a;
        self.update_zero_and_negative(self.y);
    }

    /// TXA - Transfer X to Accumulator. Flags affected: Z, N.
    pub fn op_txa(&mut self) {
        self.a = self.x;
        self.update_zero_and_negative(self.a);
    }

    /// TYA - Transfer Y to Accumulator. Flags affected: Z, N.
    pub fn op_tya(&mut self) {
        self.a = self.y;
        self.update_zero_and_negative(self.a);
    }

    /// TSX - Transfer Stack Pointer to X. Flags affected: Z, N.
    pub fn op_tsx(&mut self) {
        self.x = self.sp;
        self.update_zero_and_negative(self.x);
    }

    /// TXS - Transfer X to Stack Pointer. Flags affected: none.
    pub fn op_txs(&mut self) {
        self.sp = self.x;
    }
}
