// src/csv.rs
use std::io::{self, Write};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify a table; the header row is emitted only when given.
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let row = strings!["plain", "a,b", "say \"hi\"", "x\ty"];
        let csv = rows_to_string(None, &[row.clone()], ',');
        assert_eq!(csv, "plain,\"a,b\",\"say \"\"hi\"\"\",x\ty\n");
        let tsv = rows_to_string(None, &[row], '\t');
        assert_eq!(tsv, "plain\ta,b\t\"say \"\"hi\"\"\"\t\"x\ty\"\n");
    }

    #[test]
    fn headers_are_optional() {
        let headers = strings!["A", "B"];
        let rows = vec![strings!["1", "2"]];
        assert_eq!(rows_to_string(Some(&headers), &rows, ','), "A,B\n1,2\n");
        assert_eq!(rows_to_string(None, &rows, ','), "1,2\n");
    }
}
