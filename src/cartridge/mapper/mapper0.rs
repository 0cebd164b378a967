//! NROM (mapper 0).
//!
//! The simplest NES board: no bank switching at all. The CPU sees the whole
//! PRG ROM directly (mirrored if only 16 KiB is present), and the PPU sees the
//! whole CHR ROM/RAM directly.

use crate::{
    cartridge::{
        header::{Header, Mirroring},
        mapper::{ChrStorage, select_chr_storage},
    },
    memory::cpu as cpu_mem,
};

#[derive(Debug, Clone)]
pub struct Nrom {
    prg_rom: Box<[u8]>,
    pub(crate) prg_ram: Box<[u8]>,
    chr: ChrStorage,
    mirroring: Mirroring,
}

impl Nrom {
    pub fn new(header: &Header, prg_rom: Box<[u8]>, chr_rom: Box<[u8]>) -> Self {
        let prg_ram = vec![0; header.prg_ram_size()].into_boxed_slice();
        Self {
            prg_rom,
            prg_ram,
            chr: select_chr_storage(header, chr_rom),
            mirroring: header.mirroring(),
        }
    }

    /// 16 KiB ROMs are mirrored across the full `$8000-$FFFF` window; 32 KiB
    /// ROMs fill it directly. The modulo handles both cases uniformly.
    fn read_prg_rom(&self, addr: u16) -> u8 {
        if self.prg_rom.is_empty() {
            return 0;
        }
        let idx = (addr - cpu_mem::PRG_ROM_START) as usize % self.prg_rom.len();
        self.prg_rom[idx]
    }

    fn read_prg_ram(&self, addr: u16) -> u8 {
        if self.prg_ram.is_empty() {
            return 0;
        }
        let idx = (addr - cpu_mem::PRG_RAM_START) as usize % self.prg_ram.len();
        self.prg_ram[idx]
    }

    fn write_prg_ram(&mut self, addr: u16, data: u8) {
        if self.prg_ram.is_empty() {
            return;
        }
        let idx = (addr - cpu_mem::PRG_RAM_START) as usize % self.prg_ram.len();
        self.prg_ram[idx] = data;
    }

    pub fn cpu_read(&self, addr: u16) -> Option<u8> {
        match addr {
            cpu_mem::PRG_RAM_START..=cpu_mem::PRG_RAM_END => {
                if self.prg_ram.is_empty() {
                    None
                } else {
                    Some(self.read_prg_ram(addr))
                }
            }
            cpu_mem::PRG_ROM_START..=cpu_mem::CPU_ADDR_END => Some(self.read_prg_rom(addr)),
            _ => None,
        }
    }

    pub fn cpu_write(&mut self, addr: u16, data: u8) {
        if (cpu_mem::PRG_RAM_START..=cpu_mem::PRG_RAM_END).contains(&addr) {
            self.write_prg_ram(addr, data);
        }
    }

    pub fn ppu_read(&self, addr: u16) -> u8 {
        self.chr.read(addr)
    }

    pub fn ppu_write(&mut self, addr: u16, data: u8) {
        self.chr.write(addr, data);
    }

    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(prg_rom_banks: u8, prg_ram_banks: u8, chr_rom_banks: u8) -> Header {
        Header {
            prg_rom_banks,
            chr_rom_banks,
            flags6: crate::cartridge::header::Flags6::empty(),
            flags7: crate::cartridge::header::Flags7::empty(),
            prg_ram_banks,
        }
    }

    fn new_nrom(prg_rom_banks: u8, prg_ram_banks: u8, chr_rom_banks: u8) -> Nrom {
        let header = header(prg_rom_banks, prg_ram_banks, chr_rom_banks);
        let prg_size = header.prg_rom_size();
        let prg: Vec<u8> = (0..prg_size).map(|v| (v & 0xFF) as u8).collect();
        let chr = vec![0u8; header.chr_rom_size()];
        Nrom::new(&header, prg.into_boxed_slice(), chr.into_boxed_slice())
    }

    #[test]
    fn mirrors_prg_rom_when_16k() {
        let cart = new_nrom(1, 1, 0);
        let a = cart.cpu_read(cpu_mem::PRG_ROM_START).unwrap();
        let b = cart.cpu_read(cpu_mem::PRG_ROM_START + 0x4000).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reads_and_writes_prg_ram() {
        let mut cart = new_nrom(1, 1, 0);
        cart.cpu_write(cpu_mem::PRG_RAM_START, 0x42);
        assert_eq!(cart.cpu_read(cpu_mem::PRG_RAM_START), Some(0x42));
    }

    #[test]
    fn writes_to_chr_ram() {
        let mut cart = new_nrom(2, 0, 0);
        cart.ppu_write(0x0010, 0x77);
        assert_eq!(cart.ppu_read(0x0010), 0x77);
    }

    #[test]
    fn defaults_to_8k_prg_ram_when_header_declares_zero_banks() {
        let cart = new_nrom(1, 0, 0);
        assert_eq!(cart.prg_ram.len(), 8192);
    }
}
