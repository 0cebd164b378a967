pub mod bus;
pub mod cartridge;
pub mod controller;
pub mod cpu;
pub mod error;
pub mod frame;
pub mod memory;
pub mod nes;
pub mod ppu;
pub mod reset_kind;

pub use error::Error;
pub use nes::Nes;
pub use reset_kind::ResetKind;

#[cfg(test)]
mod tests {
    use ctor::ctor;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    #[ctor]
    fn init_tracing() {
        let subscriber = FmtSubscriber::builder()
            .with_file(true)
            .with_line_number(true)
            .with_max_level(Level::TRACE)
            .pretty()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}
