use std::io::{self, Write};

use tracing::debug;

use crate::{
    one_line_formatter::{format_linux_args, print_number, ArgCursor},
    types::{Abi, DecodeError},
    writer::Printer,
};

/// One `CALL` record: the syscall number and its argument slots as they were
/// captured on entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyscallObject {
    pub abi: Abi,
    pub code: i32,
    pub name: Option<&'static str>,
    pub args: Vec<u64>,
}

impl SyscallObject {
    pub fn build(abi: Abi, code: i32, args: Vec<u64>) -> SyscallObject {
        SyscallObject {
            abi,
            code,
            name: abi.syscall_name(code),
            args,
        }
    }

    pub fn from_name(abi: Abi, name: &str, args: Vec<u64>) -> Result<SyscallObject, DecodeError> {
        let code = abi
            .syscall_code(name)
            .ok_or_else(|| DecodeError::UnknownSyscall(name.to_owned(), abi))?;
        Ok(SyscallObject::build(abi, code, args))
    }

    pub fn format<W: Write>(&self, printer: &mut Printer<W>) -> io::Result<()> {
        printer.write_general_text("CALL  ");
        match self.name {
            Some(name) => printer.write_symbol(name),
            None => printer.write_symbol(&format!("[{}]", self.code)),
        }
        if !self.args.is_empty() {
            let mut cursor = ArgCursor::new(&self.args);
            if let Some(name) = self.name {
                format_linux_args(self.abi, name, &mut cursor, printer);
            }
            debug!(
                code = self.code,
                generic = cursor.remaining(),
                "printing remaining arguments"
            );
            while print_number(&mut cursor, printer).is_some() {}
            printer.write_char(')');
        }
        printer.write_char('\n');
        printer.flush()
    }
}
