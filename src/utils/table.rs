//! Plain-text tables for listing query results.

use unicode_width::UnicodeWidthStr;

const NULL_CELL: &str = "null";

/// A row that knows its column headers and display values.
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<Option<String>>;
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Table {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn from_rows<R: TableRow>(rows: &[R]) -> Self {
        let mut table = Table::new(R::headers().iter().map(|h| h.to_string()).collect());
        for row in rows {
            table.push(row.cells());
        }
        table
    }

    pub fn push(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders a boxed table; numbers are right-aligned, NULL shows as `null`.
    pub fn render(&self) -> String {
        if self.headers.is_empty() {
            return String::new();
        }

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, width) in widths.iter_mut().enumerate() {
                let cell = row.get(i).and_then(|c| c.as_deref()).unwrap_or(NULL_CELL);
                *width = (*width).max(cell.width());
            }
        }

        let separator: String = widths
            .iter()
            .map(|w| format!("+{}", "-".repeat(w + 2)))
            .collect::<String>()
            + "+\n";

        let mut output = String::new();
        output.push_str(&separator);
        let header: String = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("| {} ", pad_center(h, *w)))
            .collect::<String>()
            + "|\n";
        output.push_str(&header);
        output.push_str(&separator);

        for row in &self.rows {
            let line: String = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = row.get(i).and_then(|c| c.as_deref()).unwrap_or(NULL_CELL);
                    if is_numeric(cell) {
                        format!("| {} ", pad_left(cell, *w))
                    } else {
                        format!("| {} ", pad_right(cell, *w))
                    }
                })
                .collect::<String>()
                + "|\n";
            output.push_str(&line);
        }

        output.push_str(&separator);
        let noun = if self.rows.len() == 1 { "row" } else { "rows" };
        output.push_str(&format!("({} {})\n", self.rows.len(), noun));
        output
    }
}

fn is_numeric(cell: &str) -> bool {
    cell.parse::<f64>().is_ok() && cell.chars().any(|c| c.is_ascii_digit())
}

// `format!` pads by char count, which misaligns wide characters.
fn pad_right(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}

fn pad_left(text: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(text.width())), text)
}

fn pad_center(text: &str, width: usize) -> String {
    let gap = width.saturating_sub(text.width());
    let left = gap / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
}
