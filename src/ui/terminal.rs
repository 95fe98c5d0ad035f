use super::{Command, DisplaySurface};
use crate::core::config::OutputFormat;
use crate::pages::browser::{Column, Row, SortKey};
use serde_json::json;
use std::io::{self, Write};

const HELP: &str =
    "commands: open NAME | up | root N|PATH | roots | sort kind|name|size|modified | refresh | exit";

/// Line-oriented surface: prints the table (or JSON lines) to any writer.
pub struct TerminalSurface<W> {
    out: W,
    format: OutputFormat,
    roots: Vec<String>,
    selected_root: Option<usize>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            roots: Vec::new(),
            selected_root: None,
        }
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn selected_root(&self) -> Option<usize> {
        self.selected_root
    }

    /// Interactive prompt; JSON output stays prompt-free so every line parses.
    pub fn prompt(&mut self) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        write!(self.out, "> ")?;
        self.out.flush()
    }

    pub fn print_roots(&mut self) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            let value = json!({
                "roots": self.roots,
                "selected": self.selected_root,
            });
            return self.write_value(&value);
        }
        for (i, root) in self.roots.iter().enumerate() {
            let mark = if Some(i) == self.selected_root { '*' } else { ' ' };
            writeln!(self.out, " {mark}[{i}] {root}")?;
        }
        Ok(())
    }

    pub fn print_help(&mut self) -> io::Result<()> {
        self.message(HELP)
    }

    pub fn message(&mut self, text: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Table => writeln!(self.out, "{text}"),
            OutputFormat::Json => self.write_value(&json!({ "message": text })),
        }
    }

    fn write_value(&mut self, value: &serde_json::Value) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    fn write_table(&mut self, columns: &[Column], rows: &[Row]) -> io::Result<()> {
        let widths: Vec<usize> = columns
            .iter()
            .map(|c| {
                rows.iter()
                    .map(|r| r.cell(c.key).chars().count())
                    .chain(std::iter::once(c.title.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(c.title, *w, c.key))
            .collect();
        writeln!(self.out, "{}", header.join("  ").trim_end())?;

        for row in rows {
            let cells: Vec<String> = columns
                .iter()
                .zip(&widths)
                .map(|(c, w)| pad(row.cell(c.key), *w, c.key))
                .collect();
            writeln!(self.out, "{}", cells.join("  ").trim_end())?;
        }
        Ok(())
    }

    fn write_json(&mut self, rows: &[Row]) -> io::Result<()> {
        for row in rows {
            serde_json::to_writer(&mut self.out, row)?;
            writeln!(self.out)?;
        }
        Ok(())
    }
}

/// Size is right-aligned, everything else left-aligned.
fn pad(text: &str, width: usize, key: SortKey) -> String {
    match key {
        SortKey::Size => format!("{text:>width$}"),
        _ => format!("{text:<width$}"),
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn show_roots(&mut self, roots: &[String], selected: Option<usize>) -> io::Result<()> {
        self.roots = roots.to_vec();
        self.selected_root = selected;
        Ok(())
    }

    fn show_path(&mut self, path: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Table => writeln!(self.out, "{path}"),
            OutputFormat::Json => self.write_value(&json!({ "path": path })),
        }
    }

    fn show_rows(&mut self, columns: &[Column], rows: &[Row]) -> io::Result<()> {
        match self.format {
            OutputFormat::Table => self.write_table(columns, rows),
            OutputFormat::Json => self.write_json(rows),
        }
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Table => {
                writeln!(self.out, "warning: {message} [OK]")?;
                self.out.flush()
            }
            OutputFormat::Json => self.write_value(&json!({ "warning": message })),
        }
    }
}

/// One line of shell input.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    /// `root N`: index into the root options
    RootIndex(usize),
    Roots,
    Help,
    Empty,
    Unknown(String),
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    match (word, rest) {
        ("", _) => Input::Empty,
        ("open" | "cd", name) if !name.is_empty() => Input::Command(Command::Activate {
            name: name.to_string(),
            click_count: 2,
        }),
        ("up" | "..", "") => Input::Command(Command::Up),
        ("root", arg) if !arg.is_empty() => match arg.parse::<usize>() {
            Ok(ix) => Input::RootIndex(ix),
            Err(_) => Input::Command(Command::SelectRoot(arg.to_string())),
        },
        ("roots", "") => Input::Roots,
        ("sort", arg) => match SortKey::parse(arg) {
            Some(key) => Input::Command(Command::Sort(key)),
            None => Input::Unknown(line.to_string()),
        },
        ("refresh", "") => Input::Command(Command::Refresh),
        ("exit" | "quit", "") => Input::Command(Command::Exit),
        ("help" | "?", "") => Input::Help,
        _ => Input::Unknown(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::browser::COLUMNS;

    fn rows() -> Vec<Row> {
        vec![
            Row {
                kind_label: "D".into(),
                name: "b".into(),
                size_label: "[DIR]".into(),
                modified_label: "2024-01-01 00:00:00".into(),
            },
            Row {
                kind_label: "F".into(),
                name: "a.txt".into(),
                size_label: "1,234 bytes ".into(),
                modified_label: "2024-01-02 10:00:00".into(),
            },
        ]
    }

    fn rendered(format: OutputFormat) -> String {
        let mut surface = TerminalSurface::new(Vec::new(), format);
        surface.show_rows(&COLUMNS, &rows()).unwrap();
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn table_aligns_columns() {
        let text = rendered(OutputFormat::Table);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Name"));
        assert!(lines[1].starts_with("D  b"));
        assert!(lines[1].contains("       [DIR]"));
        assert!(lines[2].contains("1,234 bytes "));
    }

    #[test]
    fn json_emits_one_object_per_row() {
        let text = rendered(OutputFormat::Json);
        let parsed: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1]["size_label"], "1,234 bytes ");
        assert_eq!(parsed[0]["kind_label"], "D");
    }

    #[test]
    fn warning_is_printed() {
        let mut surface = TerminalSurface::new(Vec::new(), OutputFormat::Table);
        surface.warn("boom").unwrap();
        assert_eq!(String::from_utf8(surface.into_inner()).unwrap(), "warning: boom [OK]\n");
    }

    #[test]
    fn json_mode_keeps_every_line_parseable() {
        let mut surface = TerminalSurface::new(Vec::new(), OutputFormat::Json);
        surface.show_roots(&["/".to_string()], Some(0)).unwrap();
        surface.prompt().unwrap();
        surface.show_path("/nowhere").unwrap();
        surface.warn("boom").unwrap();
        surface.message("unknown command").unwrap();
        surface.print_help().unwrap();
        surface.print_roots().unwrap();

        let text = String::from_utf8(surface.into_inner()).unwrap();
        let values: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(values.len(), 5);
        assert_eq!(values[0]["path"], "/nowhere");
        assert_eq!(values[1]["warning"], "boom");
        assert_eq!(values[2]["message"], "unknown command");
        assert_eq!(values[4]["roots"][0], "/");
        assert_eq!(values[4]["selected"], 0);
    }

    #[test]
    fn table_roots_mark_the_default() {
        let mut surface = TerminalSurface::new(Vec::new(), OutputFormat::Table);
        surface
            .show_roots(&["C:\\".to_string(), "D:\\".to_string()], Some(0))
            .unwrap();
        surface.print_roots().unwrap();
        let text = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(text, " *[0] C:\\\n  [1] D:\\\n");
    }

    #[test]
    fn parses_shell_input() {
        assert_eq!(
            parse_input("open my dir"),
            Input::Command(Command::Activate {
                name: "my dir".into(),
                click_count: 2
            })
        );
        assert_eq!(parse_input("  up "), Input::Command(Command::Up));
        assert_eq!(parse_input("root 1"), Input::RootIndex(1));
        assert_eq!(
            parse_input("root /mnt"),
            Input::Command(Command::SelectRoot("/mnt".into()))
        );
        assert_eq!(
            parse_input("sort size"),
            Input::Command(Command::Sort(SortKey::Size))
        );
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("sort colour"), Input::Unknown("sort colour".into()));
        assert_eq!(parse_input("quit"), Input::Command(Command::Exit));
    }
}
