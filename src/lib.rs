#![doc = r#"
i8080-core: a cycle-accounted, instruction-accurate Intel 8080
(KR580VM80A) interpreter.

This crate is the core only: it decodes all 256 opcodes (documented and
undocumented), computes flag outcomes, sequences memory/stack/IO
transactions, and reports T-state counts. It does not own memory, does
not own an I/O device, and does not drive wall-clock timing; those are
supplied by a host through the `Memory` and `Io` traits in `memio`.

Modules:
- memio: `Memory` and `Io` traits the host implements to back the CPU.
- cpu: register file, flag arithmetic, and instruction dispatch.

The `i8080-harness` binary (see `src/bin/harness.rs`) is a thin CP/M-style
host built on top of this crate for running the classic 8080 diagnostic
`.COM` images; it is not part of the library's public API.
"#]

pub mod cpu;
pub mod memio;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use cpu::Cpu;
pub use memio::{Io, Memory};
