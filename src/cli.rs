use std::{io::IsTerminal, sync::LazyLock};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::types::{Abi, Arch, DecodeOptions};

pub static KDUMP_ARGS: LazyLock<KdumpArgs> = LazyLock::new(KdumpArgs::parse);

#[derive(Parser, Debug)]
#[command(
    name = "kdump-linux",
    about = "Decode Linux syscall arguments and structures the way kdump prints them.",
    version
)]
pub struct KdumpArgs {
    /// display numbers in decimal instead of hex
    #[arg(short = 'd', long = "decimal")]
    pub decimal: bool,

    /// ABI of the traced process
    #[arg(long, value_enum, default_value_t = AbiFlavour::Linux)]
    pub abi: AbiFlavour,

    /// syscall table for the native linux ABI, defaults to the host's
    #[arg(long, value_enum)]
    pub arch: Option<Arch>,

    /// force colored output
    #[arg(long = "color", action = ArgAction::SetTrue)]
    pub color: bool,

    #[arg(
        long = "no-color",
        action = ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new(),
        env = "NO_COLOR",
        hide = true
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub record: Record,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AbiFlavour {
    Linux,
    Linux32,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Record {
    /// decode a CALL record
    Call {
        /// syscall number or name
        syscall: String,
        /// register slots: decimal, negative decimal or 0x hex
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
    },
    /// decode a STRU record
    Struct {
        /// structure type, e.g. l_sigset_t
        name: String,
        /// raw structure bytes in hex
        data: String,
    },
}

impl KdumpArgs {
    pub fn abi(&self) -> Abi {
        match self.abi {
            AbiFlavour::Linux => Abi::Linux(self.arch.unwrap_or_else(Arch::host)),
            AbiFlavour::Linux32 => Abi::Linux32,
        }
    }

    // https://no-color.org/ wins over terminal detection, --color wins over both
    pub fn colored(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            std::io::stdout().is_terminal()
        }
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            decimal: self.decimal,
            colored: self.colored(),
        }
    }
}
