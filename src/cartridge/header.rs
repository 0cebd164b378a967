//! iNES header parsing.
//!
//! The first 16 bytes of a `.nes` image describe how much PRG/CHR data the
//! cartridge carries, which mapper it needs, and the hardwired nametable
//! mirroring. Only the original iNES 1.0 layout is understood; NES 2.0
//! extensions and trainers are rejected rather than silently mis-parsed.

use bitflags::bitflags;

use crate::error::Error;

const NES_MAGIC: &[u8; 4] = b"NES\x1A";

/// Size of the fixed iNES header in bytes.
pub const NES_HEADER_LEN: usize = 16;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags6: u8 {
        const MIRRORING       = 0b0000_0001;
        const BATTERY         = 0b0000_0010;
        const TRAINER         = 0b0000_0100;
        const FOUR_SCREEN     = 0b0000_1000;
        const MAPPER_LOW_MASK = 0b1111_0000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags7: u8 {
        const VS_UNISYSTEM     = 0b0000_0001;
        const PLAYCHOICE_10    = 0b0000_0010;
        const MAPPER_HIGH_MASK = 0b1111_0000;
    }
}

/// Layout mirroring type for the PPU nametables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mirroring {
    /// Two horizontal nametables that mirror vertically.
    Horizontal,
    /// Two vertical nametables that mirror horizontally.
    Vertical,
    /// Cartridge supplies its own four nametables (unsupported by this core).
    FourScreen,
    /// Single-screen mirroring using the first nametable (`$2000` region).
    SingleScreenLower,
    /// Single-screen mirroring using the second nametable (`$2400` region).
    SingleScreenUpper,
}

/// Parsed iNES 1.0 header (bytes 4..=8; the remainder is unused by this core).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    /// PRG ROM size in 16 KiB units.
    pub prg_rom_banks: u8,
    /// CHR ROM size in 8 KiB units; 0 means the cartridge uses CHR RAM.
    pub chr_rom_banks: u8,
    pub flags6: Flags6,
    pub flags7: Flags7,
    /// PRG RAM size in 8 KiB units. 0 is interpreted as 1 bank.
    pub prg_ram_banks: u8,
}

impl Header {
    /// Parses an iNES 1.0 header from the given byte slice.
    pub fn parse(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < NES_HEADER_LEN {
            return Err(Error::TooShort {
                actual: bytes.len(),
            });
        }
        if &bytes[0..4] != NES_MAGIC {
            return Err(Error::InvalidMagic);
        }

        let flags6 = Flags6::from_bits_truncate(bytes[6]);
        if flags6.contains(Flags6::TRAINER) {
            return Err(Error::TrainerUnsupported);
        }
        if flags6.contains(Flags6::FOUR_SCREEN) {
            return Err(Error::FourScreenMirroringUnsupported);
        }

        Ok(Self {
            prg_rom_banks: bytes[4],
            chr_rom_banks: bytes[5],
            flags6,
            flags7: Flags7::from_bits_truncate(bytes[7]),
            prg_ram_banks: bytes[8],
        })
    }

    /// Mapper ID: low nibble from flags6, high nibble from flags7.
    pub fn mapper(&self) -> u16 {
        let low = (self.flags6.bits() >> 4) as u16;
        let high = (self.flags7.bits() & Flags7::MAPPER_HIGH_MASK.bits()) as u16;
        low | high
    }

    pub fn mirroring(&self) -> Mirroring {
        if self.flags6.contains(Flags6::MIRRORING) {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        }
    }

    pub fn prg_rom_size(&self) -> usize {
        self.prg_rom_banks as usize * 16 * 1024
    }

    pub fn chr_rom_size(&self) -> usize {
        self.chr_rom_banks as usize * 8 * 1024
    }

    /// CHR RAM is present iff no CHR ROM banks were declared.
    pub fn chr_ram_size(&self) -> usize {
        if self.chr_rom_banks == 0 { 8 * 1024 } else { 0 }
    }

    /// 0 banks is interpreted as 1 bank of PRG RAM when the mapper supports it.
    pub fn prg_ram_size(&self) -> usize {
        self.prg_ram_banks.max(1) as usize * 8 * 1024
    }

    pub fn battery_backed(&self) -> bool {
        self.flags6.contains(Flags6::BATTERY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(prg: u8, chr: u8, flags6: u8, flags7: u8) -> [u8; NES_HEADER_LEN] {
        [
            b'N', b'E', b'S', 0x1A, prg, chr, flags6, flags7, 0, 0, 0, 0, 0, 0, 0, 0,
        ]
    }

    #[test]
    fn parses_valid_header() {
        let bytes = header_bytes(2, 1, 0b0000_0001, 0);
        let header = Header::parse(&bytes).expect("header parses");
        assert_eq!(header.prg_rom_size(), 2 * 16 * 1024);
        assert_eq!(header.chr_rom_size(), 8 * 1024);
        assert_eq!(header.mirroring(), Mirroring::Vertical);
        assert_eq!(header.mapper(), 0);
    }

    #[test]
    fn rejects_invalid_magic() {
        let mut bytes = header_bytes(1, 1, 0, 0);
        bytes[..4].copy_from_slice(b"NOPE");
        let err = Header::parse(&bytes).unwrap_err();
        assert!(matches!(err, Error::InvalidMagic));
    }

    #[test]
    fn rejects_trainer() {
        let bytes = header_bytes(1, 1, 0b0000_0100, 0);
        let err = Header::parse(&bytes).unwrap_err();
        assert!(matches!(err, Error::TrainerUnsupported));
    }

    #[test]
    fn rejects_four_screen_mirroring() {
        let bytes = header_bytes(1, 1, 0b0000_1000, 0);
        let err = Header::parse(&bytes).unwrap_err();
        assert!(matches!(err, Error::FourScreenMirroringUnsupported));
    }

    #[test]
    fn combines_mapper_nibbles() {
        // flags6 high nibble = 1, flags7 high nibble = 0 => mapper 1 (MMC1).
        let bytes = header_bytes(1, 1, 0b0001_0000, 0);
        let header = Header::parse(&bytes).expect("header parses");
        assert_eq!(header.mapper(), 1);
    }

    #[test]
    fn zero_prg_ram_banks_defaults_to_one() {
        let bytes = header_bytes(1, 1, 0, 0);
        let header = Header::parse(&bytes).expect("header parses");
        assert_eq!(header.prg_ram_size(), 8 * 1024);
    }
}
