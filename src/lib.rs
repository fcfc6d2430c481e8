//! Linux ABI decoders for kdump-style syscall trace dumps.
//!
//! A `CALL` record whose syscall needs interpretation (clock ids, signal
//! numbers, itimer selectors, mask flags, 64 bit values split over two
//! register slots) gets its leading arguments rendered symbolically by
//! [`one_line_formatter::format_linux_args`]; every slot it leaves behind is
//! printed as a plain number. `STRU` records carrying a Linux `l_sigset_t`
//! are expanded into signal names by [`struct_object::format_linux_struct`].
//!
//! ```
//! use kdump_linux::{syscall_object::SyscallObject, types::{Abi, Arch, DecodeOptions}, writer::Printer};
//!
//! let call = SyscallObject::from_name(Abi::Linux(Arch::X86_64), "kill", vec![1234, 9]).unwrap();
//! let mut printer = Printer::new(Vec::new(), DecodeOptions { decimal: true, colored: false });
//! call.format(&mut printer).unwrap();
//! let text = String::from_utf8(printer.into_inner().unwrap()).unwrap();
//! assert_eq!(text, "CALL  kill(1234,SIGKILL)\n");
//! ```
#![allow(non_camel_case_types)]

pub mod auxiliary;
pub mod cli;
mod colors;
pub mod one_line_formatter;
pub mod struct_object;
pub mod syscall_object;
pub mod syscall_skeleton_map;
pub mod types;
pub mod utilities;
pub mod writer;
