//! Central memory bus: CPU address decoding, OAM DMA, and the 3:1 master
//! clock that keeps the PPU and CPU locked to their native rate.
//!
//! The CPU never talks to RAM, the PPU, or the cartridge directly - it only
//! ever calls [`CpuBus::read`]/[`CpuBus::write`] on whatever implements the
//! trait, and `Bus` is that implementation. This mirrors the explicit
//! bus-context-parameter style used throughout the rest of the core instead
//! of giving every device a shared, cyclic handle to everything else.

use crate::cartridge::Cartridge;
use crate::controller::ControllerPorts;
use crate::cpu::{Cpu, CpuBus};
use crate::error::Error;
use crate::frame::FrameSink;
use crate::memory::cpu as cpu_mem;
use crate::memory::ppu as ppu_mem;
use crate::ppu::Ppu;
use crate::reset_kind::ResetKind;

/// Everything addressable from the CPU's side of the bus, plus the PPU
/// master clock.
#[derive(Debug, Clone)]
pub struct Bus {
    ram: [u8; cpu_mem::INTERNAL_RAM_SIZE],
    ppu: Ppu,
    cartridge: Cartridge,
    controllers: ControllerPorts,

    /// Counts every `tick()` call; the CPU advances on every third one.
    tick_index: u64,
    cpu_cycles: u64,

    /// Stall cycles queued by a `$4014` write, collected by the CPU on the
    /// next `take_dma_stall()` call.
    dma_stall: u32,
}

impl Bus {
    pub fn new(cartridge: Cartridge) -> Self {
        Self {
            ram: [0; cpu_mem::INTERNAL_RAM_SIZE],
            ppu: Ppu::new(),
            cartridge,
            controllers: ControllerPorts::new(),
            tick_index: 0,
            cpu_cycles: 0,
            dma_stall: 0,
        }
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }

    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    pub fn controllers_mut(&mut self) -> &mut ControllerPorts {
        &mut self.controllers
    }

    /// RAM and DMA state reset on power-on; the PPU and cartridge are always
    /// reset, since both define their own power-on/soft-reset distinction.
    pub fn reset(&mut self, kind: ResetKind) {
        if kind == ResetKind::PowerOn {
            self.ram = [0; cpu_mem::INTERNAL_RAM_SIZE];
        }
        self.ppu.reset();
        self.cartridge.reset(kind);
        self.tick_index = 0;
        self.dma_stall = 0;
    }

    /// Advances the machine by one PPU dot; every third call also advances
    /// the CPU by one cycle. Returns `true` on the dot a complete frame
    /// becomes ready to present.
    pub fn tick(&mut self, cpu: &mut Cpu, sink: &mut impl FrameSink) -> Result<bool, Error> {
        let present = self.ppu.clock(&mut self.cartridge, sink);

        self.tick_index += 1;
        if self.tick_index % 3 == 0 {
            cpu.tick(self)?;
            self.cpu_cycles += 1;
        }

        Ok(present)
    }

    fn read_cpu(&mut self, addr: u16) -> u8 {
        match addr {
            cpu_mem::INTERNAL_RAM_START..=cpu_mem::INTERNAL_RAM_MIRROR_END => {
                self.ram[(addr & cpu_mem::INTERNAL_RAM_MASK) as usize]
            }
            cpu_mem::CONTROLLER_PORT_1 => self.controllers.port1.read(),
            cpu_mem::CONTROLLER_PORT_2 => self.controllers.port2.read(),
            cpu_mem::PPU_REGISTER_BASE..=cpu_mem::PPU_REGISTER_END => {
                let reg_addr =
                    ppu_mem::REGISTER_BASE + (addr & ppu_mem::REGISTER_SELECT_MASK);
                self.ppu.cpu_read_register(reg_addr, &self.cartridge)
            }
            // APU channel/status registers and the Nintendo test-mode window
            // have no observable read effect in this core; they read as 0.
            cpu_mem::APU_REGISTER_BASE..=cpu_mem::TEST_MODE_END => 0,
            _ => self.cartridge.cpu_read(addr).unwrap_or(0),
        }
    }

    fn write_cpu(&mut self, addr: u16, data: u8) {
        match addr {
            cpu_mem::INTERNAL_RAM_START..=cpu_mem::INTERNAL_RAM_MIRROR_END => {
                self.ram[(addr & cpu_mem::INTERNAL_RAM_MASK) as usize] = data;
            }
            ppu_mem::OAM_DMA => self.start_oam_dma(data),
            cpu_mem::CONTROLLER_PORT_1 => self.controllers.write_strobe(data),
            cpu_mem::PPU_REGISTER_BASE..=cpu_mem::PPU_REGISTER_END => {
                let reg_addr =
                    ppu_mem::REGISTER_BASE + (addr & ppu_mem::REGISTER_SELECT_MASK);
                self.ppu
                    .cpu_write_register(reg_addr, data, &mut self.cartridge);
            }
            // $4017 (frame counter) and the rest of the APU/test-mode window:
            // accepted but have no modeled effect.
            cpu_mem::APU_REGISTER_BASE..=cpu_mem::TEST_MODE_END => {}
            _ => self.cartridge.cpu_write(addr, data),
        }
    }

    /// Copies one 256-byte page into primary OAM starting at the current
    /// OAMADDR (wrapping), then queues the stall the real DMA unit imposes
    /// on the CPU. The copy itself happens instantly here rather than one
    /// byte every two cycles; no mapper in this core reacts to being read
    /// during DMA, so the difference isn't observable.
    fn start_oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        let oam_addr = self.ppu.oam_addr();
        for i in 0..=255u8 {
            let value = self.read_cpu(base + i as u16);
            self.ppu.oam_dma_write(oam_addr.wrapping_add(i), value);
        }
        self.dma_stall = if self.cpu_cycles % 2 == 1 { 514 } else { 513 };
        tracing::trace!(page, stall = self.dma_stall, "oam dma");
    }
}

impl CpuBus for Bus {
    fn read(&mut self, addr: u16) -> u8 {
        self.read_cpu(addr)
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.write_cpu(addr, data)
    }

    fn nmi_line(&self) -> bool {
        self.ppu.nmi_line()
    }

    fn take_dma_stall(&mut self) -> u32 {
        std::mem::take(&mut self.dma_stall)
    }
}
