use serde::Serialize;
use std::io::Write;

/// Write `data` as 2-space indented JSON followed by a newline.
pub fn write_json<T: Serialize, W: Write>(mut out: W, data: &T) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(data)?;
    writeln!(out, "{}", body)?;
    out.flush()?;
    Ok(())
}

pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    write_json(std::io::stdout().lock(), data)
}
