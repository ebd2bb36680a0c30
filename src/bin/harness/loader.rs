//! `.COM` image loading, CP/M-style: the image is placed at a fixed load
//! address (0x0100 by convention) and a one-byte `RET` stub is planted at
//! the BDOS entry point (0x0005) so `CALL 0x0005` returns to the caller
//! once the harness's trap handler has serviced it.

use super::memory::FlatMemory;
use std::fs;
use std::path::Path;

/// CP/M's fixed BDOS entry point.
pub const BDOS_ENTRY: u16 = 0x0005;
/// CP/M's conventional `.COM` load address.
pub const DEFAULT_LOAD_ADDR: u16 = 0x0100;

pub fn load_com(path: &Path, load_addr: u16, mem: &mut FlatMemory) -> Result<(), String> {
    let data =
        fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    if data.is_empty() {
        return Err(format!("{} is empty", path.display()));
    }
    if load_addr as usize + data.len() > 0x10000 {
        return Err(format!(
            "{} ({} bytes) does not fit at load address {load_addr:#06x}",
            path.display(),
            data.len()
        ));
    }
    mem.load(load_addr, &data);
    mem.load(BDOS_ENTRY, &[0xC9]);
    Ok(())
}
