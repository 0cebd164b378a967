//! Full-stack scenarios driven entirely through the public `Nes`/`Cartridge`
//! API: a tiny hand-assembled 6502 program is embedded in a synthetic
//! cartridge image and actually executed by the CPU/PPU/bus together,
//! rather than poking internal state directly.

use nesium_core::Nes;
use nesium_core::cartridge::Cartridge;
use nesium_core::cartridge::header::NES_HEADER_LEN;
use nesium_core::frame::NoopSink;

fn ines_header(prg_banks: u8, chr_banks: u8, mapper: u8) -> Vec<u8> {
    let mut bytes = vec![0u8; NES_HEADER_LEN];
    bytes[0..4].copy_from_slice(b"NES\x1A");
    bytes[4] = prg_banks;
    bytes[5] = chr_banks;
    bytes[6] = (mapper & 0x0F) << 4;
    bytes[7] = mapper & 0xF0;
    bytes
}

/// Builds a single-bank (16 KiB) NROM image, placing `program` at CPU address
/// `$8000` and setting the reset/NMI vectors.
fn nrom_image(program: &[u8], nmi_handler: &[u8]) -> Vec<u8> {
    let mut prg = vec![0u8; 16 * 1024];
    prg[..program.len()].copy_from_slice(program);

    let nmi_offset = 0x0100;
    prg[nmi_offset..nmi_offset + nmi_handler.len()].copy_from_slice(nmi_handler);

    // Reset vector -> $8000 (PRG offset 0).
    prg[0x3FFC] = 0x00;
    prg[0x3FFD] = 0x80;
    // NMI vector -> $8000 + nmi_offset.
    let nmi_addr = 0x8000u16 + nmi_offset as u16;
    prg[0x3FFA] = (nmi_addr & 0xFF) as u8;
    prg[0x3FFB] = (nmi_addr >> 8) as u8;

    let mut bytes = ines_header(1, 1, 0);
    bytes.extend(prg);
    bytes.extend(vec![0u8; 8 * 1024]); // CHR RAM-backed; contents unused here
    bytes
}

#[test]
fn nmi_fires_within_documented_latency_after_vblank() {
    // LDA #$80 ; STA $2000 (enable vblank NMI) ; loop: JMP loop
    let program = [0xA9, 0x80, 0x8D, 0x00, 0x20, 0x4C, 0x05, 0x80];
    // NMI handler: INX ; RTI
    let nmi_handler = [0xE8, 0x40];

    let cart = Cartridge::load(&nrom_image(&program, &nmi_handler)).unwrap();
    let mut nes = Nes::new(cart);
    let mut sink = NoopSink;

    // NMI is enabled within the first handful of CPU cycles of frame 0, long
    // before that frame's vblank; by the time two frames have presented, the
    // handler must have run at least once.
    nes.run_frame(&mut sink).unwrap();
    nes.run_frame(&mut sink).unwrap();

    assert!(
        nes.cpu().x >= 1,
        "NMI handler (INX) never ran: x = {}",
        nes.cpu().x
    );
}

#[test]
fn oam_dma_through_full_stack_copies_page_and_stalls_cpu() {
    // LDA #$AB ; STA $0200 ; LDA #$02 ; STA $4014 (DMA page 2 -> OAM)
    // LDA $2004 (read OAMDATA at index 0, should be $AB) ; loop: JMP loop
    let program = [
        0xA9, 0xAB, // LDA #$AB
        0x8D, 0x00, 0x02, // STA $0200
        0xA9, 0x02, // LDA #$02
        0x8D, 0x14, 0x40, // STA $4014
        0xAD, 0x04, 0x20, // LDA $2004
        0x4C, 0x0D, 0x80, // JMP $800D (self)
    ];
    let cart = Cartridge::load(&nrom_image(&program, &[])).unwrap();
    let mut nes = Nes::new(cart);
    let mut sink = NoopSink;

    // A few hundred CPU cycles covers the whole program plus the 513/514
    // cycle DMA stall; three PPU dots elapse per CPU cycle.
    for _ in 0..3000 {
        nes.tick(&mut sink).unwrap();
    }

    assert_eq!(nes.cpu().a, 0xAB, "OAM byte 0 was not copied by DMA");
}

fn mmc1_rom_with_program(program: &[u8]) -> Vec<u8> {
    let banks = 4usize;
    let bank_size = 16 * 1024;
    let mut prg = vec![0u8; banks * bank_size];
    for (b, chunk) in prg.chunks_mut(bank_size).enumerate() {
        chunk.fill(b as u8);
    }

    // Driver code lives in the fixed last bank ($C000-$FFFF in the default
    // PRG mode 3), so switching the $8000 window never disturbs the code
    // currently executing.
    let last_bank_start = (banks - 1) * bank_size;
    prg[last_bank_start..last_bank_start + program.len()].copy_from_slice(program);
    prg[last_bank_start + 0x3FFC] = 0x00;
    prg[last_bank_start + 0x3FFD] = 0xC0; // reset vector -> $C000

    let mut bytes = ines_header(banks as u8, 0, 1);
    bytes.extend(prg);
    bytes
}

#[test]
fn mmc1_cartridge_switches_prg_bank_through_full_stack() {
    // Serially shifts value 0b00010 (bank 2) into the PRG bank register via
    // five single-bit writes to $E000, one bit per instruction pair, then
    // reads back the freshly-switched-in $8000 window.
    let program = [
        0xA9, 0x00, 0x8D, 0x00, 0xE0, // LDA #$00 ; STA $E000 (bit0 = 0)
        0xA9, 0x01, 0x8D, 0x00, 0xE0, // LDA #$01 ; STA $E000 (bit1 = 1)
        0xA9, 0x00, 0x8D, 0x00, 0xE0, // LDA #$00 ; STA $E000 (bit2 = 0)
        0xA9, 0x00, 0x8D, 0x00, 0xE0, // LDA #$00 ; STA $E000 (bit3 = 0)
        0xA9, 0x00, 0x8D, 0x00, 0xE0, // LDA #$00 ; STA $E000 (bit4 = 0, commits)
        0xAD, 0x00, 0x80, // LDA $8000 (now bank 2's filler byte)
        0x4C, 0x1C, 0xC0, // JMP $C01C (self)
    ];
    let cart = Cartridge::load(&mmc1_rom_with_program(&program)).unwrap();
    let mut nes = Nes::new(cart);
    let mut sink = NoopSink;

    for _ in 0..600 {
        nes.tick(&mut sink).unwrap();
    }

    assert_eq!(nes.cpu().a, 0x02, "PRG bank 2 was not switched into $8000");
}
