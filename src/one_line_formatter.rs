use std::io::Write;

use tracing::{debug, warn};

use crate::{
    syscall_skeleton_map::rule_for,
    types::{Abi, ArgRule},
    utilities::{
        combine_split_quad, format_alternate_hex, CLOCK_FLAGS, parse_as_clockid,
        parse_as_int, parse_as_itimer, parse_as_signal, parse_as_sigprocmask_how,
    },
    writer::Printer,
};

/// Walks the register slots of one syscall record. `separator` is what gets
/// printed before the next argument: `(` for the first, `,` afterwards.
#[derive(Debug)]
pub struct ArgCursor<'a> {
    args: &'a [u64],
    position: usize,
    pub separator: char,
}

impl<'a> ArgCursor<'a> {
    pub fn new(args: &'a [u64]) -> Self {
        ArgCursor {
            args,
            position: 0,
            separator: '(',
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.args.len().saturating_sub(self.position)
    }

    pub fn take(&mut self) -> Option<u64> {
        let register = *self.args.get(self.position)?;
        self.position += 1;
        Some(register)
    }
}

pub fn print_number<W: Write>(cursor: &mut ArgCursor, printer: &mut Printer<W>) -> Option<()> {
    let register = cursor.take()?;
    printer.write_char(cursor.separator);
    printer.write_register(register);
    cursor.separator = ',';
    Some(())
}

// a 64 bit value spread over `quad_slots` slots, low word first
pub fn print_number64<W: Write>(
    cursor: &mut ArgCursor,
    printer: &mut Printer<W>,
    quad_slots: usize,
) -> Option<()> {
    let low = cursor.take()?;
    let value = if quad_slots == 2 {
        let high = cursor.take().unwrap_or_else(|| {
            warn!("64 bit argument is missing its high word, assuming zero");
            0
        });
        combine_split_quad(low, high)
    } else {
        low
    };
    printer.write_char(cursor.separator);
    let text = if printer.options().decimal {
        (value as i64).to_string()
    } else {
        format_alternate_hex(value)
    };
    printer.write_numeric(&text);
    cursor.separator = ',';
    Some(())
}

pub fn print_linux_signal<W: Write>(printer: &mut Printer<W>, signum: i32) {
    match parse_as_signal(signum) {
        Some(signame) => printer.write_symbol(&signame),
        None => printer.write_symbol(&format!("SIG {signum}")),
    }
}

pub fn print_linux_clockid<W: Write>(printer: &mut Printer<W>, clockid: i32) {
    match parse_as_clockid(clockid) {
        Some(clock) => printer.write_symbol(&clock),
        None => printer.write_integer_arg(None, clockid),
    }
}

/// Prints the leading arguments of the Linux syscalls whose encodings need
/// interpretation and leaves `cursor` on the first slot it did not consume.
/// Anything else is left for the generic printer.
pub fn format_linux_args<W: Write>(
    abi: Abi,
    syscall_name: &str,
    cursor: &mut ArgCursor,
    printer: &mut Printer<W>,
) -> Option<ArgRule> {
    let rule = rule_for(abi, syscall_name)?;
    debug!(syscall = syscall_name, ?rule, %abi, "decoding linux arguments");
    if apply_rule(rule, abi, cursor, printer).is_none() {
        warn!(
            syscall = syscall_name,
            consumed = cursor.position(),
            "record ran out of argument slots"
        );
    }
    Some(rule)
}

fn apply_rule<W: Write>(
    rule: ArgRule,
    abi: Abi,
    cursor: &mut ArgCursor,
    printer: &mut Printer<W>,
) -> Option<()> {
    use ArgRule::*;
    match rule {
        Clock_Id => {
            let clockid = parse_as_int(cursor.take()?);
            printer.write_char('(');
            print_linux_clockid(printer, clockid);
            cursor.separator = ',';
        }
        Clock_Nanosleep => {
            let clockid = parse_as_int(cursor.take()?);
            printer.write_char('(');
            print_linux_clockid(printer, clockid);
            cursor.separator = ',';
            let flags = parse_as_int(cursor.take()?);
            printer.write_char(',');
            printer.write_mask_arg0(CLOCK_FLAGS, flags);
        }
        Signal_Second => {
            print_number(cursor, printer)?;
            let signum = parse_as_int(cursor.take()?);
            printer.write_char(',');
            print_linux_signal(printer, signum);
        }
        Signal_Third => {
            print_number(cursor, printer)?;
            print_number(cursor, printer)?;
            let signum = parse_as_int(cursor.take()?);
            printer.write_char(',');
            print_linux_signal(printer, signum);
        }
        Signal_First => {
            let signum = parse_as_int(cursor.take()?);
            printer.write_char('(');
            print_linux_signal(printer, signum);
            cursor.separator = ',';
        }
        Truncate => {
            print_number(cursor, printer)?;
            print_number64(cursor, printer, abi.quad_slots())?;
        }
        Itimer_Which => {
            let which = parse_as_int(cursor.take()?);
            printer.write_char('(');
            printer.write_integer_arg(parse_as_itimer(which), which);
            cursor.separator = ',';
        }
        Sigprocmask_How => {
            let how = parse_as_int(cursor.take()?);
            printer.write_char('(');
            printer.write_integer_arg(parse_as_sigprocmask_how(how), how);
            cursor.separator = ',';
        }
    }
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Arch, DecodeOptions};

    const X86_64: Abi = Abi::Linux(Arch::X86_64);

    struct Decoded {
        text: String,
        position: usize,
        separator: char,
        rule: Option<ArgRule>,
    }

    fn decode_with(options: DecodeOptions, abi: Abi, name: &str, args: &[u64]) -> Decoded {
        let mut printer = Printer::new(Vec::new(), options);
        let mut cursor = ArgCursor::new(args);
        let rule = format_linux_args(abi, name, &mut cursor, &mut printer);
        let position = cursor.position();
        let separator = cursor.separator;
        let text = String::from_utf8(printer.into_inner().unwrap()).unwrap();
        Decoded {
            text,
            position,
            separator,
            rule,
        }
    }

    fn decode(abi: Abi, name: &str, args: &[u64]) -> Decoded {
        decode_with(DecodeOptions::default(), abi, name, args)
    }

    fn decimal() -> DecodeOptions {
        DecodeOptions {
            decimal: true,
            ..Default::default()
        }
    }

    #[test]
    fn clock_id_consumes_one_slot() {
        let decoded = decode(X86_64, "clock_gettime", &[1, 0x7ffd_1000]);
        assert_eq!(decoded.text, "(CLOCK_MONOTONIC");
        assert_eq!(decoded.position, 1);
        assert_eq!(decoded.separator, ',');
        assert_eq!(decoded.rule, Some(ArgRule::Clock_Id));
    }

    #[test]
    fn unknown_clock_id_is_marked_invalid() {
        let decoded = decode(X86_64, "timer_create", &[12, 0, 0]);
        assert_eq!(decoded.text, "(<invalid=0xc>");
    }

    #[test]
    fn clock_nanosleep_decodes_flags() {
        let decoded = decode(X86_64, "clock_nanosleep", &[0, 1, 0x1000, 0]);
        assert_eq!(decoded.text, "(CLOCK_REALTIME,0x1<TIMER_ABSTIME>");
        assert_eq!(decoded.position, 2);
        assert_eq!(decoded.separator, ',');

        let relative = decode(X86_64, "clock_nanosleep", &[1, 0, 0x1000, 0]);
        assert_eq!(relative.text, "(CLOCK_MONOTONIC,0");
    }

    #[test]
    fn kill_prints_pid_then_signal() {
        let decoded = decode(X86_64, "kill", &[1234, 9]);
        assert_eq!(decoded.text, "(0x4d2,SIGKILL");
        assert_eq!(decoded.position, 2);

        let decoded = decode_with(decimal(), X86_64, "kill", &[1234, 9]);
        assert_eq!(decoded.text, "(1234,SIGKILL");
    }

    #[test]
    fn unnamed_signal_falls_back_to_number() {
        let decoded = decode_with(decimal(), X86_64, "tkill", &[77, 0]);
        assert_eq!(decoded.text, "(77,SIG 0");
    }

    #[test]
    fn tgkill_prints_two_ids_then_signal() {
        let decoded = decode_with(decimal(), X86_64, "tgkill", &[100, 101, 15]);
        assert_eq!(decoded.text, "(100,101,SIGTERM");
        assert_eq!(decoded.position, 3);
        assert_eq!(decoded.separator, ',');
    }

    #[test]
    fn sigaction_leads_with_signal() {
        let decoded = decode(X86_64, "rt_sigaction", &[2, 0x1000, 0, 8]);
        assert_eq!(decoded.text, "(SIGINT");
        assert_eq!(decoded.position, 1);
        assert_eq!(decoded.separator, ',');
    }

    #[test]
    fn native_truncate_uses_one_slot() {
        let decoded = decode(X86_64, "ftruncate", &[3, 0x1_0000_0000]);
        assert_eq!(decoded.text, "(0x3,0x100000000");
        assert_eq!(decoded.position, 2);
    }

    #[test]
    fn linux32_truncate64_joins_two_slots() {
        let decoded = decode(Abi::Linux32, "ftruncate64", &[3, 0x1, 0x2]);
        assert_eq!(decoded.text, "(0x3,0x200000001");
        assert_eq!(decoded.position, 3);

        let decoded = decode_with(decimal(), Abi::Linux32, "truncate64", &[0x8000, 4096, 0]);
        assert_eq!(decoded.text, "(32768,4096");
    }

    #[test]
    fn linux32_split_value_without_high_word() {
        let decoded = decode(Abi::Linux32, "truncate64", &[0x8000, 5]);
        assert_eq!(decoded.text, "(0x8000,0x5");
        assert_eq!(decoded.position, 2);
    }

    #[test]
    fn itimer_and_sigprocmask_use_integer_arg_form() {
        assert_eq!(decode(X86_64, "setitimer", &[2, 0, 0]).text, "(ITIMER_PROF");
        assert_eq!(decode(X86_64, "getitimer", &[7, 0]).text, "(<invalid=0x7>");
        assert_eq!(
            decode_with(decimal(), X86_64, "getitimer", &[7, 0]).text,
            "(<invalid=7>"
        );
        assert_eq!(
            decode(X86_64, "rt_sigprocmask", &[1, 0, 0, 8]).text,
            "(SIG_UNBLOCK"
        );
        assert_eq!(decode(Abi::Linux32, "sigprocmask", &[2, 0, 0]).text, "(SIG_SETMASK");
    }

    #[test]
    fn short_records_stop_cleanly() {
        let decoded = decode(X86_64, "kill", &[1]);
        assert_eq!(decoded.text, "(0x1");
        assert_eq!(decoded.position, 1);
        assert_eq!(decoded.separator, ',');

        let decoded = decode(X86_64, "clock_nanosleep", &[0]);
        assert_eq!(decoded.text, "(CLOCK_REALTIME");
        assert_eq!(decoded.separator, ',');

        let decoded = decode(X86_64, "rt_sigaction", &[]);
        assert_eq!(decoded.text, "");
        assert_eq!(decoded.separator, '(');
    }

    #[test]
    fn other_syscalls_are_untouched() {
        let decoded = decode(X86_64, "read", &[0, 0x1000, 64]);
        assert_eq!(decoded.text, "");
        assert_eq!(decoded.position, 0);
        assert_eq!(decoded.separator, '(');
        assert_eq!(decoded.rule, None);
    }

    #[test]
    fn signals_use_the_low_word_of_the_slot() {
        let decoded = decode(Abi::Linux32, "signal", &[0xFFFF_FFFF_0000_000E, 1]);
        assert_eq!(decoded.text, "(SIGALRM");
    }
}
