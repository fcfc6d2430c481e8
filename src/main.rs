use std::io::BufWriter;

use anyhow::{Context, Result};
use kdump_linux::{
    cli::{Record, KDUMP_ARGS},
    struct_object::StructObject,
    syscall_object::SyscallObject,
    utilities::{parse_hex_bytes, parse_register},
    writer::Printer,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let args = &*KDUMP_ARGS;
    let options = args.decode_options();
    // colored turns itself off when stdout is not a tty, --color means it
    if options.colored {
        colored::control::set_override(true);
    }
    let mut printer = Printer::new(BufWriter::new(std::io::stdout().lock()), options);

    match &args.record {
        Record::Call { syscall, args: slots } => {
            let abi = args.abi();
            let registers = slots
                .iter()
                .map(|slot| parse_register(slot))
                .collect::<Result<Vec<u64>, _>>()?;
            let call = match syscall.parse::<i32>() {
                Ok(code) => SyscallObject::build(abi, code, registers),
                Err(_) => SyscallObject::from_name(abi, syscall, registers)?,
            };
            call.format(&mut printer)
                .context("failed to write CALL record")?;
        }
        Record::Struct { name, data } => {
            let bytes = parse_hex_bytes(data)?;
            StructObject::new(name.as_str(), bytes)
                .format(&mut printer)
                .context("failed to write STRU record")?;
        }
    }
    printer.into_inner().context("failed to flush output")?;
    Ok(())
}
