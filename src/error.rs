use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Provided buffer is shorter than the 16-byte iNES header.
    TooShort { actual: usize },
    /// Magic number ("NES<EOF>") is missing.
    InvalidMagic,
    /// A ROM section (PRG/CHR) is shorter than advertised.
    SectionTooShort {
        section: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Header advertises a mapper number that this core does not implement.
    UnsupportedMapper(u16),
    /// Header declares four-screen mirroring, which this core does not support.
    FourScreenMirroringUnsupported,
    /// Header declares a trainer; the core refuses to load it rather than discard it silently.
    TrainerUnsupported,
    /// A genuinely unrecognized opcode was fetched.
    UnknownOpcode { opcode: u8, pc: u16 },
    /// A documented CPU halt opcode (`$02`, `$12`, ...) was executed.
    HaltOpcode { opcode: u8, pc: u16 },
    /// Wrapper for I/O errors raised while reading ROMs from disk.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { actual } => {
                write!(f, "header expected 16 bytes, got {actual}")
            }
            Self::InvalidMagic => write!(f, "missing NES magic bytes"),
            Self::SectionTooShort {
                section,
                expected,
                actual,
            } => write!(
                f,
                "{section} section expected {expected} bytes, got {actual}"
            ),
            Self::UnsupportedMapper(mapper) => {
                write!(f, "mapper {mapper} is not implemented")
            }
            Self::FourScreenMirroringUnsupported => {
                write!(f, "four-screen mirroring is not supported")
            }
            Self::TrainerUnsupported => {
                write!(f, "cartridge trainer regions are not supported")
            }
            Self::UnknownOpcode { opcode, pc } => {
                write!(f, "unknown opcode {opcode:#04X} at PC={pc:#06X}")
            }
            Self::HaltOpcode { opcode, pc } => {
                write!(f, "halt opcode {opcode:#04X} executed at PC={pc:#06X}")
            }
            Self::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
