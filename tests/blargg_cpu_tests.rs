// Blargg-style CPU test ROMs
//
// These are ignored by default since they require the ROM files to be
// present under tests/nes-test-rom/, which this repository does not
// vendor. Run with: cargo test --test blargg_cpu_tests -- --ignored --nocapture

mod common;

use common::run_status_byte_test_rom;

fn run_blargg_test(rom_path: &str) -> Result<(bool, String), String> {
    run_status_byte_test_rom(rom_path, common::MAX_TEST_CYCLES)
}

macro_rules! blargg_test {
    ($name:ident, $path:expr) => {
        #[test]
        #[ignore]
        fn $name() {
            let result = run_blargg_test($path);
            match result {
                Ok((passed, message)) => {
                    println!("\n{}", message);
                    assert!(passed, "test failed: {}", message);
                }
                Err(e) => panic!("test error: {}", e),
            }
        }
    };
}

blargg_test!(
    blargg_cpu_official,
    "tests/nes-test-rom/blargg_nes_cpu_test5/official.nes"
);

blargg_test!(
    instr_test_v5_all,
    "tests/nes-test-rom/instr_test-v5/all_instrs.nes"
);
blargg_test!(
    instr_test_v5_basics,
    "tests/nes-test-rom/instr_test-v5/rom_singles/01-basics.nes"
);
blargg_test!(
    instr_test_v5_implied,
    "tests/nes-test-rom/instr_test-v5/rom_singles/02-implied.nes"
);
blargg_test!(
    instr_test_v5_immediate,
    "tests/nes-test-rom/instr_test-v5/rom_singles/03-immediate.nes"
);
blargg_test!(
    instr_test_v5_zero_page,
    "tests/nes-test-rom/instr_test-v5/rom_singles/04-zero_page.nes"
);
blargg_test!(
    instr_test_v5_zp_xy,
    "tests/nes-test-rom/instr_test-v5/rom_singles/05-zp_xy.nes"
);
blargg_test!(
    instr_test_v5_absolute,
    "tests/nes-test-rom/instr_test-v5/rom_singles/06-absolute.nes"
);
blargg_test!(
    instr_test_v5_abs_xy,
    "tests/nes-test-rom/instr_test-v5/rom_singles/07-abs_xy.nes"
);
blargg_test!(
    instr_test_v5_ind_x,
    "tests/nes-test-rom/instr_test-v5/rom_singles/08-ind_x.nes"
);
blargg_test!(
    instr_test_v5_ind_y,
    "tests/nes-test-rom/instr_test-v5/rom_singles/09-ind_y.nes"
);
blargg_test!(
    instr_test_v5_branches,
    "tests/nes-test-rom/instr_test-v5/rom_singles/10-branches.nes"
);
blargg_test!(
    instr_test_v5_stack,
    "tests/nes-test-rom/instr_test-v5/rom_singles/11-stack.nes"
);
blargg_test!(
    instr_test_v5_jmp_jsr,
    "tests/nes-test-rom/instr_test-v5/rom_singles/12-jmp_jsr.nes"
);
blargg_test!(
    instr_test_v5_rts,
    "tests/nes-test-rom/instr_test-v5/rom_singles/13-rts.nes"
);
blargg_test!(
    instr_test_v5_rti,
    "tests/nes-test-rom/instr_test-v5/rom_singles/14-rti.nes"
);
blargg_test!(
    instr_test_v5_brk,
    "tests/nes-test-rom/instr_test-v5/rom_singles/15-brk.nes"
);
blargg_test!(
    instr_test_v5_special,
    "tests/nes-test-rom/instr_test-v5/rom_singles/16-special.nes"
);

blargg_test!(
    cpu_timing_test,
    "tests/nes-test-rom/cpu_timing_test6/cpu_timing_test.nes"
);

blargg_test!(cpu_reset, "tests/nes-test-rom/cpu_reset/registers.nes");

blargg_test!(
    cpu_dummy_reads,
    "tests/nes-test-rom/cpu_dummy_reads/cpu_dummy_reads.nes"
);

blargg_test!(
    instr_misc_all,
    "tests/nes-test-rom/instr_misc/instr_misc.nes"
);
blargg_test!(
    instr_misc_abs_x_wrap,
    "tests/nes-test-rom/instr_misc/rom_singles/01-abs_x_wrap.nes"
);
blargg_test!(
    instr_misc_branch_wrap,
    "tests/nes-test-rom/instr_misc/rom_singles/02-branch_wrap.nes"
);
blargg_test!(
    instr_misc_dummy_reads,
    "tests/nes-test-rom/instr_misc/rom_singles/03-dummy_reads.nes"
);

blargg_test!(
    instr_timing_all,
    "tests/nes-test-rom/instr_timing/instr_timing.nes"
);
blargg_test!(
    instr_timing_instr,
    "tests/nes-test-rom/instr_timing/rom_singles/1-instr_timing.nes"
);
blargg_test!(
    instr_timing_branch,
    "tests/nes-test-rom/instr_timing/rom_singles/2-branch_timing.nes"
);

blargg_test!(
    branch_timing_basics,
    "tests/nes-test-rom/branch_timing_tests/1.Branch_Basics.nes"
);
blargg_test!(
    branch_timing_backward,
    "tests/nes-test-rom/branch_timing_tests/2.Backward_Branch.nes"
);
blargg_test!(
    branch_timing_forward,
    "tests/nes-test-rom/branch_timing_tests/3.Forward_Branch.nes"
);
