use std::convert::Infallible;
use std::io::{self, Write};

/// 欄寬
pub const FIELD_WIDTH: usize = 15;

/// 小數位數
pub const PRECISION: usize = 4;

/// 接收 (t, value) 序列的輸出端。
pub trait TableSink {
    type Error;

    fn emit(&mut self, t: f64, value: f64) -> Result<(), Self::Error>;
}

impl TableSink for Vec<(f64, f64)> {
    type Error = Infallible;

    fn emit(&mut self, t: f64, value: f64) -> Result<(), Infallible> {
        self.push((t, value));
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FixedWidthWriter
// ─────────────────────────────────────────────────────────────────────────────
//
// 每列一組 (t, value)，兩欄皆為定點小數 4 位、右對齊、寬 15：
//
//          0.0000         0.5000

pub struct FixedWidthWriter<W: Write> {
    writer: W
}

impl<W: Write> FixedWidthWriter<W> {
    pub fn new(writer: W) -> FixedWidthWriter<W> {
        FixedWidthWriter { writer }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TableSink for FixedWidthWriter<W> {
    type Error = io::Error;

    fn emit(&mut self, t: f64, value: f64) -> io::Result<()> {
        writeln!(
            self.writer,
            "{:>width$.prec$}{:>width$.prec$}",
            t,
            value,
            width = FIELD_WIDTH,
            prec = PRECISION
        )
    }
}
