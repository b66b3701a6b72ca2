//! Integration tests using the `SingleStepTests` 65816 vectors.
//!
//! Each JSON file holds thousands of single-instruction tests: an
//! initial machine state, the expected final state, and the bus cycles
//! in between. We run one `step()` per test and compare register and
//! memory state.
//!
//! Test data lives in `test-data/65816/v1/*.json` at the workspace root.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use wdc_65c816::{AccessKind, Bus, Status, W65C816};

/// Flat 16MB RAM bus for testing.
struct TestBus {
    ram: Vec<u8>,
}

impl TestBus {
    fn new() -> Self {
        Self {
            ram: vec![0; 0x100_0000],
        }
    }

    fn load_ram(&mut self, entries: &[(u32, u8)]) {
        for &(addr, value) in entries {
            self.ram[(addr & 0xFF_FFFF) as usize] = value;
        }
    }

    fn peek(&self, addr: u32) -> u8 {
        self.ram[(addr & 0xFF_FFFF) as usize]
    }
}

impl Bus for TestBus {
    fn read(&mut self, addr: u32, _kind: AccessKind) -> u8 {
        self.ram[(addr & 0xFF_FFFF) as usize]
    }

    fn write(&mut self, addr: u32, value: u8, _kind: AccessKind) {
        self.ram[(addr & 0xFF_FFFF) as usize] = value;
    }

    fn idle(&mut self) {}
}

/// JSON test case format.
#[derive(Deserialize)]
struct TestCase {
    name: String,
    initial: CpuState,
    #[serde(rename = "final")]
    final_state: CpuState,
}

/// JSON CPU state format.
#[derive(Deserialize)]
struct CpuState {
    pc: u16,
    s: u16,
    p: u8,
    a: u16,
    x: u16,
    y: u16,
    dbr: u8,
    d: u16,
    pbr: u8,
    e: u8,
    ram: Vec<(u32, u8)>,
}

/// Set up the CPU and bus from the initial test state.
fn setup(cpu: &mut W65C816, bus: &mut TestBus, state: &CpuState) {
    bus.load_ram(&state.ram);
    cpu.regs.pc = state.pc;
    cpu.regs.sp = state.s;
    cpu.regs.a = state.a;
    cpu.regs.x = state.x;
    cpu.regs.y = state.y;
    cpu.regs.dbr = state.dbr;
    cpu.regs.d = state.d;
    cpu.regs.k = state.pbr;
    cpu.regs.emulation = state.e != 0;
    cpu.regs.p = Status::from_byte(state.p);
}

/// Compare CPU/bus state against expected, returning mismatches.
fn compare(cpu: &W65C816, bus: &TestBus, expected: &CpuState) -> Vec<String> {
    let mut errors = Vec::new();

    if cpu.regs.pc != expected.pc {
        errors.push(format!(
            "PC: got ${:04X}, want ${:04X}",
            cpu.regs.pc, expected.pc
        ));
    }
    if cpu.regs.k != expected.pbr {
        errors.push(format!(
            "K: got ${:02X}, want ${:02X}",
            cpu.regs.k, expected.pbr
        ));
    }
    if cpu.regs.sp != expected.s {
        errors.push(format!(
            "S: got ${:04X}, want ${:04X}",
            cpu.regs.sp, expected.s
        ));
    }
    if cpu.regs.a != expected.a {
        errors.push(format!(
            "A: got ${:04X}, want ${:04X}",
            cpu.regs.a, expected.a
        ));
    }
    if cpu.regs.x != expected.x {
        errors.push(format!(
            "X: got ${:04X}, want ${:04X}",
            cpu.regs.x, expected.x
        ));
    }
    if cpu.regs.y != expected.y {
        errors.push(format!(
            "Y: got ${:04X}, want ${:04X}",
            cpu.regs.y, expected.y
        ));
    }
    if cpu.regs.dbr != expected.dbr {
        errors.push(format!(
            "DBR: got ${:02X}, want ${:02X}",
            cpu.regs.dbr, expected.dbr
        ));
    }
    if cpu.regs.d != expected.d {
        errors.push(format!(
            "D: got ${:04X}, want ${:04X}",
            cpu.regs.d, expected.d
        ));
    }
    let e = u8::from(cpu.regs.emulation);
    if e != expected.e {
        errors.push(format!("E: got {e}, want {}", expected.e));
    }
    if cpu.regs.p.0 != expected.p {
        errors.push(format!(
            "P: got ${:02X} ({:08b}), want ${:02X} ({:08b})",
            cpu.regs.p.0, cpu.regs.p.0, expected.p, expected.p
        ));
    }

    for &(addr, expected_val) in &expected.ram {
        let actual_val = bus.peek(addr);
        if actual_val != expected_val {
            errors.push(format!(
                "RAM[${addr:06X}]: got ${actual_val:02X}, want ${expected_val:02X}"
            ));
        }
    }

    errors
}

#[test]
#[ignore = "requires test-data/65816 — run with --ignored"]
fn run_all() {
    let test_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("parent of crate dir")
        .parent()
        .expect("workspace root")
        .join("test-data/65816/v1");

    if !test_dir.exists() {
        eprintln!("Test data not found at {}", test_dir.display());
        eprintln!("Skipping SingleStepTests.");
        return;
    }

    let pattern = format!("{}/*.json", test_dir.display());
    let mut files: Vec<_> = glob::glob(&pattern)
        .expect("valid glob pattern")
        .filter_map(Result::ok)
        .collect();
    files.sort();

    let mut total_pass = 0u64;
    let mut total_fail = 0u64;

    for path in &files {
        let data = fs::read_to_string(path).unwrap_or_else(|e| {
            panic!("Failed to read {}: {e}", path.display());
        });
        let tests: Vec<TestCase> = serde_json::from_str(&data).unwrap_or_else(|e| {
            panic!("Failed to parse {}: {e}", path.display());
        });

        let mut file_pass = 0u32;
        let mut file_fail = 0u32;
        let mut first_failures: Vec<String> = Vec::new();

        for test in &tests {
            let mut cpu = W65C816::new();
            let mut bus = TestBus::new();

            setup(&mut cpu, &mut bus, &test.initial);
            cpu.step(&mut bus);

            let errors = compare(&cpu, &bus, &test.final_state);
            if errors.is_empty() {
                file_pass += 1;
            } else {
                file_fail += 1;
                if first_failures.len() < 5 {
                    first_failures.push(format!("  FAIL [{}]: {}", test.name, errors.join(", ")));
                }
            }
        }

        let status = if file_fail == 0 { "PASS" } else { "FAIL" };
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
        println!(
            "{} : {status} — {file_pass}/{} passed",
            name.unwrap_or_default(),
            file_pass + file_fail
        );
        for msg in &first_failures {
            println!("{msg}");
        }

        total_pass += u64::from(file_pass);
        total_fail += u64::from(file_fail);
    }

    println!("Total: {total_pass} passed, {total_fail} failed");
    assert_eq!(total_fail, 0, "{total_fail} single-step tests failed");
}
