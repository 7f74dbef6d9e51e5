// Interpreter throughput benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use nes_rs::{Cartridge, Cpu, MemoryBus};
use std::hint::black_box;

fn nrom_cpu(fill: impl Fn(&mut [u8; 16384])) -> Cpu {
    let mut prg = [0u8; 16384];
    fill(&mut prg);
    let mut data = vec![0u8; 16 + 16384 + 8192];
    data[0..4].copy_from_slice(b"NES\x1A");
    data[4] = 1;
    data[5] = 1;
    data[16..16 + 16384].copy_from_slice(&prg);

    let cartridge = Cartridge::from_ines_bytes(&data).unwrap();
    let bus = MemoryBus::new(cartridge).unwrap();
    let mut cpu = Cpu::new(bus);
    cpu.pc = 0x8000;
    cpu
}

fn bench_cpu_instructions(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_instructions");

    group.bench_function("nop", |b| {
        let mut cpu = nrom_cpu(|prg| prg.fill(0xEA)); // NOP
        b.iter(|| {
            cpu.step().unwrap();
            black_box(cpu.pc);
        });
    });

    group.bench_function("lda_immediate", |b| {
        let mut cpu = nrom_cpu(|prg| {
            for chunk in prg.chunks_mut(2) {
                chunk[0] = 0xA9; // LDA #imm
                if chunk.len() > 1 {
                    chunk[1] = 0x42;
                }
            }
        });
        b.iter(|| {
            cpu.step().unwrap();
            black_box(cpu.a);
        });
    });

    group.bench_function("adc_immediate", |b| {
        let mut cpu = nrom_cpu(|prg| {
            for chunk in prg.chunks_mut(2) {
                chunk[0] = 0x69; // ADC #imm
                if chunk.len() > 1 {
                    chunk[1] = 0x01;
                }
            }
        });
        b.iter(|| {
            cpu.step().unwrap();
            black_box(cpu.a);
        });
    });

    group.bench_function("sta_absolute", |b| {
        let mut cpu = nrom_cpu(|prg| {
            for chunk in prg.chunks_mut(3) {
                if chunk.len() == 3 {
                    chunk[0] = 0x8D; // STA abs
                    chunk[1] = 0x00;
                    chunk[2] = 0x02;
                }
            }
        });
        b.iter(|| {
            cpu.step().unwrap();
        });
    });

    group.bench_function("jmp_absolute", |b| {
        let mut cpu = nrom_cpu(|prg| {
            prg[0x0000] = 0x4C; // JMP $8000 (infinite self-loop)
            prg[0x0001] = 0x00;
            prg[0x0002] = 0x80;
        });
        b.iter(|| {
            cpu.step().unwrap();
        });
    });

    group.finish();
}

fn bench_instruction_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("instruction_sequences");

    group.bench_function("typical_sequence", |b| {
        let mut cpu = nrom_cpu(|prg| {
            let program: &[u8] = &[
                0xA9, 0x00, // LDA #$00
                0x8D, 0x00, 0x02, // STA $0200
                0xA2, 0x05, // LDX #$05
                0xE8, // INX
                0xCA, // DEX
                0xD0, 0xF6, // BNE back to LDA
            ];
            prg[..program.len()].copy_from_slice(program);
        });
        b.iter(|| {
            for _ in 0..11 {
                cpu.step().unwrap();
            }
        });
    });

    group.finish();
}

fn bench_frame_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_execution");
    group.sample_size(20);

    group.bench_function("1000_cycles", |b| {
        let mut cpu = nrom_cpu(|prg| prg.fill(0xEA));
        b.iter(|| {
            let start = cpu.cycle_count;
            while cpu.cycle_count.wrapping_sub(start) < 1000 {
                cpu.step().unwrap();
            }
        });
    });

    group.bench_function("29780_cycles_one_frame", |b| {
        let mut cpu = nrom_cpu(|prg| prg.fill(0xEA));
        b.iter(|| {
            let start = cpu.cycle_count;
            while cpu.cycle_count.wrapping_sub(start) < 29780 {
                cpu.step().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cpu_instructions,
    bench_instruction_sequence,
    bench_frame_execution
);
criterion_main!(benches);
