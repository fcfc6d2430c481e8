use std::fmt::Display;

pub type NameTable = &'static [(i32, &'static str)];

/// CPU architecture whose Linux syscall table a record was captured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Arch {
    #[value(name = "x86_64")]
    X86_64,
    Aarch64,
    I386,
}

impl Arch {
    pub fn host() -> Arch {
        if cfg!(target_arch = "aarch64") {
            Arch::Aarch64
        } else if cfg!(target_arch = "x86") {
            Arch::I386
        } else {
            Arch::X86_64
        }
    }
}

/// The Linux ABI flavour of the traced process.
///
/// `Linux32` is a 32 bit binary running on an amd64 host: every argument
/// still occupies a full register slot, so 64 bit values are split in two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Abi {
    Linux(Arch),
    Linux32,
}

impl Abi {
    pub fn quad_slots(&self) -> usize {
        match self {
            Abi::Linux(_) => 1,
            Abi::Linux32 => 2,
        }
    }

    pub fn is_linux32(&self) -> bool {
        matches!(self, Abi::Linux32)
    }

    pub fn syscall_name(&self, code: i32) -> Option<&'static str> {
        let id = usize::try_from(code).ok()?;
        match self {
            Abi::Linux(Arch::X86_64) => syscalls::x86_64::Sysno::new(id).map(|sysno| sysno.name()),
            Abi::Linux(Arch::Aarch64) => {
                syscalls::aarch64::Sysno::new(id).map(|sysno| sysno.name())
            }
            Abi::Linux(Arch::I386) | Abi::Linux32 => {
                syscalls::x86::Sysno::new(id).map(|sysno| sysno.name())
            }
        }
    }

    pub fn syscall_code(&self, name: &str) -> Option<i32> {
        match self {
            Abi::Linux(Arch::X86_64) => name
                .parse::<syscalls::x86_64::Sysno>()
                .ok()
                .map(|sysno| sysno.id()),
            Abi::Linux(Arch::Aarch64) => name
                .parse::<syscalls::aarch64::Sysno>()
                .ok()
                .map(|sysno| sysno.id()),
            Abi::Linux(Arch::I386) | Abi::Linux32 => {
                name.parse::<syscalls::x86::Sysno>().ok().map(|sysno| sysno.id())
            }
        }
    }
}

impl Display for Abi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Abi::Linux(Arch::X86_64) => write!(f, "linux/x86_64"),
            Abi::Linux(Arch::Aarch64) => write!(f, "linux/aarch64"),
            Abi::Linux(Arch::I386) => write!(f, "linux/i386"),
            Abi::Linux32 => write!(f, "linux32"),
        }
    }
}

/// How the leading arguments of a syscall are rendered before the generic
/// printer takes over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgRule {
    // (clockid, ...
    Clock_Id,
    // (clockid, flags, ...
    Clock_Nanosleep,
    // (pid, signal, ...
    Signal_Second,
    // (tgid, tid, signal, ...
    Signal_Third,
    // (signal, ...
    Signal_First,
    // (fd_or_path, length64, ...
    Truncate,
    // (which, ...
    Itimer_Which,
    // (how, ...
    Sigprocmask_How,
}

/// Rendering knobs shared by every decoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeOptions {
    /// print numbers in signed decimal instead of hex
    pub decimal: bool,
    pub colored: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    UnknownSyscall(String, Abi),
    BadInteger(String),
    BadHex(String),
    OddHexLength(usize),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DecodeError::UnknownSyscall(name, abi) => {
                write!(f, "no syscall named {name:?} in the {abi} table")
            }
            DecodeError::BadInteger(text) => write!(f, "not an integer argument: {text:?}"),
            DecodeError::BadHex(text) => write!(f, "not a hex byte string: {text:?}"),
            DecodeError::OddHexLength(len) => {
                write!(f, "hex byte string has an odd number of digits ({len})")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
