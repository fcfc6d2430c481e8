use std::io::{self, Write};

use tracing::warn;

use crate::{
    auxiliary::constants::sizes::{L_OSIGSET_SIZE, L_SIGSET_SIZE},
    one_line_formatter::print_linux_signal,
    writer::Printer,
};

/// One `STRU` record: a named structure copied out of the traced process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructObject {
    pub name: String,
    pub data: Vec<u8>,
}

impl StructObject {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> StructObject {
        StructObject {
            name: name.into(),
            data,
        }
    }

    pub fn format<W: Write>(&self, printer: &mut Printer<W>) -> io::Result<()> {
        printer.write_general_text("STRU  ");
        if !format_linux_struct(&self.name, &self.data, printer) {
            warn!(
                name = %self.name,
                length = self.data.len(),
                "struct record not understood"
            );
            printer.write_general_text("invalid record\n");
        }
        printer.flush()
    }
}

/// Decodes Linux-only structures. Returns `false`, having printed nothing,
/// for names it does not know or data of the wrong size.
pub fn format_linux_struct<W: Write>(name: &str, data: &[u8], printer: &mut Printer<W>) -> bool {
    match name {
        "l_sigset_t" => {
            // old sigset_t is a single word
            if data.len() < L_OSIGSET_SIZE || data.len() > L_SIGSET_SIZE {
                return false;
            }
            let mut bytes = [0u8; L_SIGSET_SIZE];
            bytes[..data.len()].copy_from_slice(data);
            let mask = u64::from_le_bytes(bytes);
            write_sigset(printer, name, mask, data.len());
            true
        }
        _ => false,
    }
}

fn write_sigset<W: Write>(printer: &mut Printer<W>, name: &str, mask: u64, size: usize) {
    printer.write_general_text(name);
    printer.write_general_text(" [ ");
    let members = (1..=size * 8).filter(|signum| mask & (1 << (signum - 1)) != 0);
    let mut count = 0;
    for signum in members {
        if count != 0 {
            printer.write_general_text(", ");
        }
        print_linux_signal(printer, signum as i32);
        count += 1;
    }
    if count == 0 {
        printer.write_general_text("empty ]\n");
    } else {
        printer.write_general_text(" ]\n");
    }
}
