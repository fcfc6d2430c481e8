use crate::{
    colors::{GENERAL_TEXT_COLOR, INVALID_COLOR, NUMBER_COLOR, SYMBOL_COLOR},
    types::{DecodeOptions, NameTable},
    utilities::{decode_mask, format_alternate_hex, MaskParts},
};
use colored::{ColoredString, Colorize, CustomColor};
use std::io::{self, Write};

/// Collects one output record as colored fragments and writes them out on
/// `flush`. With colors disabled every fragment is plain text.
pub struct Printer<W: Write> {
    sink: W,
    buffer: Vec<ColoredString>,
    options: DecodeOptions,
}

impl<W: Write> Printer<W> {
    pub fn new(sink: W, options: DecodeOptions) -> Self {
        Printer {
            sink,
            buffer: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.sink)
    }

    #[inline(always)]
    fn paint(&self, text: &str, color: fn() -> CustomColor) -> ColoredString {
        if self.options.colored {
            text.custom_color(color())
        } else {
            text.normal()
        }
    }

    #[inline(always)]
    pub fn write_general_text(&mut self, text: &str) {
        let colored = self.paint(text, || *GENERAL_TEXT_COLOR);
        self.buffer.push(colored);
    }

    #[inline(always)]
    pub fn write_char(&mut self, chara: char) {
        let mut utf8 = [0u8; 4];
        self.write_general_text(chara.encode_utf8(&mut utf8));
    }

    #[inline(always)]
    pub fn write_symbol(&mut self, symbol: &str) {
        let colored = self.paint(symbol, || *SYMBOL_COLOR);
        self.buffer.push(colored);
    }

    #[inline(always)]
    pub fn write_numeric(&mut self, numeric: &str) {
        let colored = self.paint(numeric, || *NUMBER_COLOR);
        self.buffer.push(colored);
    }

    #[inline(always)]
    pub fn write_invalid(&mut self, text: &str) {
        let colored = self.paint(text, || *INVALID_COLOR);
        self.buffer.push(colored);
    }

    pub fn flush(&mut self) -> io::Result<()> {
        for colored_text in self.buffer.drain(..) {
            write!(self.sink, "{}", colored_text)?;
        }
        self.sink.flush()
    }

    // a register slot as kdump prints it: %#x, or signed decimal with -d
    pub fn write_register(&mut self, register: u64) {
        let text = if self.options.decimal {
            (register as i64).to_string()
        } else {
            format_alternate_hex(register)
        };
        self.write_numeric(&text);
    }

    /// Symbol for `value`, or `<invalid=...>` when the decoder has none.
    pub fn write_integer_arg(&mut self, decoded: Option<&str>, value: i32) {
        match decoded {
            Some(symbol) => self.write_symbol(symbol),
            None => {
                let text = if self.options.decimal {
                    format!("<invalid={value}>")
                } else {
                    format!("<invalid={}>", format_alternate_hex(u64::from(value as u32)))
                };
                self.write_invalid(&text);
            }
        }
    }

    /// `0` for an empty mask, otherwise `0x..<FLAG|FLAG>`. When no flag
    /// matches at all the leftover bits follow as `<invalid>N`.
    pub fn write_mask_arg0(&mut self, table: NameTable, value: i32) {
        if value == 0 {
            self.write_numeric("0");
            return;
        }
        let MaskParts { names, remainder } = decode_mask(table, value);
        self.write_numeric(&format_alternate_hex(u64::from(value as u32)));
        self.write_general_text("<");
        let mut names_iter = names.iter();
        if let Some(first) = names_iter.next() {
            self.write_symbol(first);
        }
        for name in names_iter {
            self.write_general_text("|");
            self.write_symbol(name);
        }
        self.write_general_text(">");
        if names.is_empty() {
            self.write_invalid(&format!("<invalid>{remainder}"));
        }
    }
}
