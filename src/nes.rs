//! Top-level console: wires the CPU to the bus (which in turn owns the PPU,
//! cartridge, RAM, and controller ports) and drives the combined clock.

use crate::bus::Bus;
use crate::cartridge::Cartridge;
use crate::controller::ControllerPorts;
use crate::cpu::Cpu;
use crate::error::Error;
use crate::frame::FrameSink;
use crate::reset_kind::ResetKind;

/// A fully assembled NES: CPU, PPU, cartridge, RAM, and controllers, reset
/// and ready to run as soon as it is constructed.
#[derive(Debug, Clone)]
pub struct Nes {
    cpu: Cpu,
    bus: Bus,
}

impl Nes {
    pub fn new(cartridge: Cartridge) -> Self {
        let mut nes = Self {
            cpu: Cpu::new(),
            bus: Bus::new(cartridge),
        };
        nes.reset(ResetKind::PowerOn);
        nes
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn controllers_mut(&mut self) -> &mut ControllerPorts {
        self.bus.controllers_mut()
    }

    pub fn reset(&mut self, kind: ResetKind) {
        self.bus.reset(kind);
        self.cpu.reset(&mut self.bus);
        tracing::debug!(?kind, "nes reset");
    }

    /// Advances the console by one PPU dot (and, every third call, one CPU
    /// cycle). Returns `true` on the dot a complete frame becomes ready.
    pub fn tick(&mut self, sink: &mut impl FrameSink) -> Result<bool, Error> {
        self.bus.tick(&mut self.cpu, sink)
    }

    /// Runs ticks until a full frame has been produced, then presents it.
    pub fn run_frame(&mut self, sink: &mut impl FrameSink) -> Result<(), Error> {
        loop {
            if self.tick(sink)? {
                sink.present();
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::NoopSink;

    fn nrom_image() -> Vec<u8> {
        let mut bytes = vec![0u8; crate::cartridge::header::NES_HEADER_LEN];
        bytes[0..4].copy_from_slice(b"NES\x1A");
        bytes[4] = 1;
        bytes[5] = 1;
        bytes.extend(vec![0u8; 16 * 1024]);
        bytes.extend(vec![0u8; 8 * 1024]);
        bytes
    }

    #[test]
    fn power_on_loads_reset_vector_into_pc() {
        let mut image = nrom_image();
        let prg_start = crate::cartridge::header::NES_HEADER_LEN;
        // Reset vector lives at the top of the 16 KiB PRG bank, mirrored at
        // both $C000 and $8000 for a single-bank NROM image.
        image[prg_start + 0x3FFC] = 0x34;
        image[prg_start + 0x3FFD] = 0x12;
        let cart = Cartridge::load(&image).unwrap();
        let nes = Nes::new(cart);
        assert_eq!(nes.cpu().pc, 0x1234);
    }

    #[test]
    fn run_frame_presents_exactly_once() {
        let cart = Cartridge::load(&nrom_image()).unwrap();
        let mut nes = Nes::new(cart);
        let mut sink = NoopSink;
        nes.run_frame(&mut sink).unwrap();
    }
}
