use std::io::{self, Write};

pub const COLUMN_ALIGN: &str = "c";
pub const CELL_SEPARATOR: &str = " & ";
pub const LINE_BREAK: &str = "\\\\";
pub const ROW_RULE: &str = "\\hline";

pub const TABLE_CLOSE: &str = "\t\t\\end{tabular}\n\t\\end{ruledtabular}\n\\end{table}";

/// Alignment spec for a table of `columns` columns, e.g. `c c c`.
pub fn column_align(columns: usize) -> String {
    vec![COLUMN_ALIGN; columns].join(" ")
}

pub fn table_open(columns: usize) -> String {
    format!(
        "\\begin{{table}}[h]\n\t\\begin{{ruledtabular}}\n\t\t\\begin{{tabular}}{{{}}}",
        column_align(columns)
    )
}

/// Cells joined by ` & ` and terminated by the LaTeX line break. LaTeX special
/// characters are passed through unescaped.
pub fn format_row<S: AsRef<str>>(fields: &[S]) -> String {
    let cells: Vec<&str> = fields.iter().map(AsRef::as_ref).collect();
    format!("{} {}", cells.join(CELL_SEPARATOR), LINE_BREAK)
}

pub fn write_table_open<W: Write>(out: &mut W, columns: usize) -> io::Result<()> {
    writeln!(out, "{}", table_open(columns))
}

pub fn write_row<W: Write, S: AsRef<str>>(out: &mut W, fields: &[S]) -> io::Result<()> {
    writeln!(out, "{}", format_row(fields))?;
    writeln!(out, "{}", ROW_RULE)
}

pub fn write_table_close<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", TABLE_CLOSE)
}
