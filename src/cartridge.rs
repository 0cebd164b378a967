//! Cartridge loading and the PRG/CHR/mapper bundle the rest of the system
//! talks to.

pub mod header;
pub mod mapper;

use header::Header;
pub use mapper::Mapper;

use crate::error::Error;
use crate::reset_kind::ResetKind;

/// A loaded `.nes` image: parsed header plus the concrete mapper board that
/// owns PRG/CHR storage.
#[derive(Debug, Clone)]
pub struct Cartridge {
    header: Header,
    mapper: Mapper,
}

impl Cartridge {
    /// Parses an iNES 1.0 image and constructs the matching mapper board.
    ///
    /// Trainers and four-screen mirroring are rejected at the header-parsing
    /// stage; unsupported mapper numbers are rejected here.
    pub fn load(bytes: &[u8]) -> Result<Self, Error> {
        let header = Header::parse(bytes)?;

        let prg_start = header::NES_HEADER_LEN;
        let prg_end = prg_start + header.prg_rom_size();
        let prg_rom = slice_section(bytes, prg_start, prg_end, "PRG ROM")?;

        let chr_start = prg_end;
        let chr_end = chr_start + header.chr_rom_size();
        let chr_rom = slice_section(bytes, chr_start, chr_end, "CHR ROM")?;

        let mapper = match header.mapper() {
            0 => Mapper::Nrom(mapper::Nrom::new(&header, prg_rom, chr_rom)),
            1 => Mapper::Mmc1(mapper::Mmc1::new(&header, prg_rom, chr_rom)),
            other => return Err(Error::UnsupportedMapper(other)),
        };

        Ok(Self { header, mapper })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    pub fn mapper_mut(&mut self) -> &mut Mapper {
        &mut self.mapper
    }

    pub fn cpu_read(&self, addr: u16) -> Option<u8> {
        self.mapper.cpu_read(addr)
    }

    pub fn cpu_write(&mut self, addr: u16, data: u8) {
        self.mapper.cpu_write(addr, data);
    }

    pub fn ppu_read(&self, addr: u16) -> u8 {
        self.mapper.ppu_read(addr)
    }

    pub fn ppu_write(&mut self, addr: u16, data: u8) {
        self.mapper.ppu_write(addr, data);
    }

    pub fn mirroring(&self) -> header::Mirroring {
        self.mapper.mirroring()
    }

    pub fn reset(&mut self, kind: ResetKind) {
        self.mapper.reset(kind);
    }
}

impl crate::ppu::PpuBus for Cartridge {
    fn ppu_read_chr(&self, addr: u16) -> u8 {
        self.mapper.ppu_read(addr)
    }

    fn ppu_write_chr(&mut self, addr: u16, data: u8) {
        self.mapper.ppu_write(addr, data);
    }

    fn mirroring(&self) -> header::Mirroring {
        self.mapper.mirroring()
    }
}

fn slice_section(
    bytes: &[u8],
    start: usize,
    end: usize,
    section: &'static str,
) -> Result<Box<[u8]>, Error> {
    if end > bytes.len() {
        return Err(Error::SectionTooShort {
            section,
            expected: end - start,
            actual: bytes.len().saturating_sub(start),
        });
    }
    Ok(bytes[start..end].to_vec().into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nrom_image(prg_banks: u8, chr_banks: u8) -> Vec<u8> {
        let mut bytes = vec![0u8; header::NES_HEADER_LEN];
        bytes[0..4].copy_from_slice(b"NES\x1A");
        bytes[4] = prg_banks;
        bytes[5] = chr_banks;
        bytes.extend(vec![0u8; prg_banks as usize * 16 * 1024]);
        bytes.extend(vec![0u8; chr_banks as usize * 8 * 1024]);
        bytes
    }

    #[test]
    fn loads_basic_nrom_cartridge() {
        let image = nrom_image(1, 1);
        let cart = Cartridge::load(&image).expect("cartridge loads");
        assert_eq!(cart.mapper().mapper_id(), 0);
    }

    #[test]
    fn errors_when_prg_section_missing() {
        let mut image = nrom_image(2, 1);
        image.truncate(header::NES_HEADER_LEN + 10);
        let err = Cartridge::load(&image).unwrap_err();
        assert!(matches!(err, Error::SectionTooShort { .. }));
    }

    #[test]
    fn errors_when_mapper_not_implemented() {
        let mut image = nrom_image(1, 1);
        image[6] = 0xF0; // mapper number 15, unimplemented
        let err = Cartridge::load(&image).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMapper(15)));
    }

    #[test]
    fn rejects_trainer_flagged_images() {
        let mut image = nrom_image(1, 1);
        image[6] |= 0b0000_0100;
        let err = Cartridge::load(&image).unwrap_err();
        assert!(matches!(err, Error::TrainerUnsupported));
    }
}
