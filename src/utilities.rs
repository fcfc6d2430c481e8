use std::borrow::Cow;

use crate::{
    auxiliary::constants::{clock::*, itimer::*, signal::*},
    types::{DecodeError, NameTable},
};

static SIGNAL_NAMES: NameTable = &[
    (SIGHUP, "SIGHUP"),
    (SIGINT, "SIGINT"),
    (SIGQUIT, "SIGQUIT"),
    (SIGILL, "SIGILL"),
    (SIGTRAP, "SIGTRAP"),
    (SIGABRT, "SIGABRT"),
    (SIGBUS, "SIGBUS"),
    (SIGFPE, "SIGFPE"),
    (SIGKILL, "SIGKILL"),
    (SIGUSR1, "SIGUSR1"),
    (SIGSEGV, "SIGSEGV"),
    (SIGUSR2, "SIGUSR2"),
    (SIGPIPE, "SIGPIPE"),
    (SIGALRM, "SIGALRM"),
    (SIGTERM, "SIGTERM"),
    (SIGSTKFLT, "SIGSTKFLT"),
    (SIGCHLD, "SIGCHLD"),
    (SIGCONT, "SIGCONT"),
    (SIGSTOP, "SIGSTOP"),
    (SIGTSTP, "SIGTSTP"),
    (SIGTTIN, "SIGTTIN"),
    (SIGTTOU, "SIGTTOU"),
    (SIGURG, "SIGURG"),
    (SIGXCPU, "SIGXCPU"),
    (SIGXFSZ, "SIGXFSZ"),
    (SIGVTALRM, "SIGVTALRM"),
    (SIGPROF, "SIGPROF"),
    (SIGWINCH, "SIGWINCH"),
    (SIGIO, "SIGIO"),
    (SIGPWR, "SIGPWR"),
    (SIGSYS, "SIGSYS"),
];

static CLOCK_NAMES: NameTable = &[
    (CLOCK_REALTIME, "CLOCK_REALTIME"),
    (CLOCK_MONOTONIC, "CLOCK_MONOTONIC"),
    (CLOCK_PROCESS_CPUTIME_ID, "CLOCK_PROCESS_CPUTIME_ID"),
    (CLOCK_THREAD_CPUTIME_ID, "CLOCK_THREAD_CPUTIME_ID"),
    (CLOCK_MONOTONIC_RAW, "CLOCK_MONOTONIC_RAW"),
    (CLOCK_REALTIME_COARSE, "CLOCK_REALTIME_COARSE"),
    (CLOCK_MONOTONIC_COARSE, "CLOCK_MONOTONIC_COARSE"),
    (CLOCK_BOOTTIME, "CLOCK_BOOTTIME"),
    (CLOCK_REALTIME_ALARM, "CLOCK_REALTIME_ALARM"),
    (CLOCK_BOOTTIME_ALARM, "CLOCK_BOOTTIME_ALARM"),
    (CLOCK_SGI_CYCLE, "CLOCK_SGI_CYCLE"),
    (CLOCK_TAI, "CLOCK_TAI"),
];

static CPUCLOCK_NAMES: NameTable = &[
    (CPUCLOCK_PROF, "CPUCLOCK_PROF"),
    (CPUCLOCK_VIRT, "CPUCLOCK_VIRT"),
    (CPUCLOCK_SCHED, "CPUCLOCK_SCHED"),
];

pub static CLOCK_FLAGS: NameTable = &[(TIMER_ABSTIME, "TIMER_ABSTIME")];

static ITIMER_NAMES: NameTable = &[
    (ITIMER_REAL, "ITIMER_REAL"),
    (ITIMER_VIRTUAL, "ITIMER_VIRTUAL"),
    (ITIMER_PROF, "ITIMER_PROF"),
];

static SIGPROCMASK_HOW_NAMES: NameTable = &[
    (SIG_BLOCK, "SIG_BLOCK"),
    (SIG_UNBLOCK, "SIG_UNBLOCK"),
    (SIG_SETMASK, "SIG_SETMASK"),
];

pub fn lookup_value(table: NameTable, value: i32) -> Option<&'static str> {
    table
        .iter()
        .find(|(table_value, _)| *table_value == value)
        .map(|(_, name)| *name)
}

pub fn parse_as_signal(signum: i32) -> Option<Cow<'static, str>> {
    match signum {
        SIGRTMIN => Some(Cow::Borrowed("SIGRTMIN")),
        SIGRTMAX => Some(Cow::Borrowed("SIGRTMAX")),
        rt if rt > SIGRTMIN && rt < SIGRTMAX => {
            Some(Cow::Owned(format!("SIGRTMIN+{}", rt - SIGRTMIN)))
        }
        _ => lookup_value(SIGNAL_NAMES, signum).map(Cow::Borrowed),
    }
}

// negative clock ids encode a pid/tid plus the cpu clock flavour
pub fn parse_as_clockid(clockid: i32) -> Option<Cow<'static, str>> {
    if clockid >= 0 {
        return lookup_value(CLOCK_NAMES, clockid).map(Cow::Borrowed);
    }
    let pid = !(clockid >> 3);
    if clockid & CLOCKFD_MASK == CLOCKFD_MASK {
        return Some(Cow::Owned(format!("INVALID PERTHREAD|CLOCKFD({pid})")));
    }
    let scope = if clockid & CPUCLOCK_PERTHREAD_MASK != 0 {
        "THREAD"
    } else {
        "PROCESS"
    };
    let which = clockid & CPUCLOCK_CLOCK_MASK;
    let flavour = match lookup_value(CPUCLOCK_NAMES, which) {
        Some(name) => Cow::Borrowed(name),
        None if which == CLOCKFD => Cow::Borrowed("CLOCKFD"),
        None => Cow::Owned(format!("cpuclock({which})")),
    };
    Some(Cow::Owned(format!("{scope}|{flavour}({pid})")))
}

pub fn parse_as_itimer(which: i32) -> Option<&'static str> {
    lookup_value(ITIMER_NAMES, which)
}

pub fn parse_as_sigprocmask_how(how: i32) -> Option<&'static str> {
    lookup_value(SIGPROCMASK_HOW_NAMES, how)
}

/// Decoded flag names in table order plus the bits no flag claimed.
#[derive(Debug, PartialEq, Eq)]
pub struct MaskParts {
    pub names: Vec<&'static str>,
    pub remainder: u32,
}

impl MaskParts {
    pub fn matched(&self) -> bool {
        !self.names.is_empty()
    }
}

pub fn decode_mask(table: NameTable, value: i32) -> MaskParts {
    let mut remaining = value as u32;
    let mut names = Vec::new();
    for &(flag, name) in table {
        let flag = flag as u32;
        if flag != 0 && remaining & flag == flag {
            names.push(name);
            remaining &= !flag;
        }
    }
    MaskParts {
        names,
        remainder: remaining,
    }
}

pub fn lower_32_bits(value: u64) -> u32 {
    (value & 0xFFFFFFFF) as u32
}

// register slots hold ints sign-agnostically, the callee only sees the low word
pub fn parse_as_int(register: u64) -> i32 {
    lower_32_bits(register) as i32
}

pub fn combine_split_quad(low: u64, high: u64) -> u64 {
    u64::from(lower_32_bits(low)) | (u64::from(lower_32_bits(high)) << 32)
}

// kdump's %#x: zero has no 0x prefix
pub fn format_alternate_hex(value: u64) -> String {
    if value == 0 {
        "0".to_owned()
    } else {
        format!("{value:#x}")
    }
}

pub fn parse_register(text: &str) -> Result<u64, DecodeError> {
    let bad = || DecodeError::BadInteger(text.to_owned());
    let trimmed = text.trim();
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex, 16).map_err(|_| bad());
    }
    if trimmed.starts_with('-') {
        return trimmed.parse::<i64>().map(|n| n as u64).map_err(|_| bad());
    }
    trimmed.parse::<u64>().map_err(|_| bad())
}

pub fn parse_hex_bytes(text: &str) -> Result<Vec<u8>, DecodeError> {
    let digits: String = text
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|chara| !chara.is_whitespace() && *chara != ':')
        .collect();
    if !digits.chars().all(|chara| chara.is_ascii_hexdigit()) {
        return Err(DecodeError::BadHex(text.to_owned()));
    }
    if digits.len() % 2 != 0 {
        return Err(DecodeError::OddHexLength(digits.len()));
    }
    (0..digits.len())
        .step_by(2)
        .map(|index| {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map_err(|_| DecodeError::BadHex(text.to_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_names_follow_linux_numbering() {
        assert_eq!(parse_as_signal(9).as_deref(), Some("SIGKILL"));
        assert_eq!(parse_as_signal(16).as_deref(), Some("SIGSTKFLT"));
        assert_eq!(parse_as_signal(17).as_deref(), Some("SIGCHLD"));
        assert_eq!(parse_as_signal(31).as_deref(), Some("SIGSYS"));
        assert_eq!(parse_as_signal(32).as_deref(), Some("SIGRTMIN"));
        assert_eq!(parse_as_signal(35).as_deref(), Some("SIGRTMIN+3"));
        assert_eq!(parse_as_signal(64).as_deref(), Some("SIGRTMAX"));
        assert_eq!(parse_as_signal(0), None);
        assert_eq!(parse_as_signal(65), None);
        assert_eq!(parse_as_signal(-1), None);
    }

    #[test]
    fn static_clock_ids() {
        assert_eq!(parse_as_clockid(0).as_deref(), Some("CLOCK_REALTIME"));
        assert_eq!(parse_as_clockid(7).as_deref(), Some("CLOCK_BOOTTIME"));
        assert_eq!(parse_as_clockid(11).as_deref(), Some("CLOCK_TAI"));
        assert_eq!(parse_as_clockid(12), None);
    }

    #[test]
    fn dynamic_cpu_clock_ids() {
        let make = |pid: i32, perthread: bool, which: i32| {
            let thread_bit = if perthread { CPUCLOCK_PERTHREAD_MASK } else { 0 };
            (!pid << 3) | thread_bit | which
        };
        assert_eq!(
            parse_as_clockid(make(1234, false, CPUCLOCK_PROF)).as_deref(),
            Some("PROCESS|CPUCLOCK_PROF(1234)")
        );
        assert_eq!(
            parse_as_clockid(make(0, true, CPUCLOCK_SCHED)).as_deref(),
            Some("THREAD|CPUCLOCK_SCHED(0)")
        );
        assert_eq!(
            parse_as_clockid(make(42, false, CLOCKFD)).as_deref(),
            Some("PROCESS|CLOCKFD(42)")
        );
        assert_eq!(
            parse_as_clockid(make(42, true, CLOCKFD)).as_deref(),
            Some("INVALID PERTHREAD|CLOCKFD(42)")
        );
    }

    #[test]
    fn mask_decoding_keeps_unclaimed_bits() {
        assert_eq!(
            decode_mask(CLOCK_FLAGS, 1),
            MaskParts {
                names: vec!["TIMER_ABSTIME"],
                remainder: 0
            }
        );
        let partial = decode_mask(CLOCK_FLAGS, 3);
        assert_eq!(partial.names, vec!["TIMER_ABSTIME"]);
        assert_eq!(partial.remainder, 2);
        let none = decode_mask(CLOCK_FLAGS, 4);
        assert!(!none.matched());
        assert_eq!(none.remainder, 4);
    }

    #[test]
    fn split_quads_are_low_word_first() {
        assert_eq!(combine_split_quad(0x1, 0x2), 0x2_0000_0001);
        assert_eq!(
            combine_split_quad(0xFFFF_FFFF_8000_0000, 0),
            0x8000_0000,
        );
    }

    #[test]
    fn alternate_hex_drops_prefix_for_zero() {
        assert_eq!(format_alternate_hex(0), "0");
        assert_eq!(format_alternate_hex(255), "0xff");
    }

    #[test]
    fn register_parsing() {
        assert_eq!(parse_register("42"), Ok(42));
        assert_eq!(parse_register("0x1f"), Ok(0x1f));
        assert_eq!(parse_register("-1"), Ok(u64::MAX));
        assert_eq!(
            parse_register("nope"),
            Err(DecodeError::BadInteger("nope".to_owned()))
        );
    }

    #[test]
    fn hex_byte_parsing() {
        assert_eq!(parse_hex_bytes("0a000000"), Ok(vec![0x0a, 0, 0, 0]));
        assert_eq!(parse_hex_bytes("0a:01"), Ok(vec![0x0a, 0x01]));
        assert_eq!(parse_hex_bytes("abc"), Err(DecodeError::OddHexLength(3)));
        assert!(matches!(parse_hex_bytes("zz"), Err(DecodeError::BadHex(_))));
    }
}
