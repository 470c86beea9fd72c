use crate::application::read_models::{ReportReadModel, RowView, SectionView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Column headers, rendered upper-case
const COLUMN_HEADERS: [&str; COLUMN_COUNT] = ["NAME", "VERSION", "INSTALLED BY"];

const COLUMN_COUNT: usize = 3;

/// TableFormatter adapter for rendering the report as bordered text tables
///
/// Each section becomes a titled table:
///
/// ```text
/// --- Homebrew Formulae ---
/// +------------+---------+--------------+
/// | NAME       | VERSION | INSTALLED BY |
/// +------------+---------+--------------+
/// | packageA * | 1.0.0   |              |
/// +------------+---------+--------------+
/// ```
///
/// Cells are left-aligned and padded to the widest cell of their column,
/// measured in characters.
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Newlines would break the row layout
    fn sanitize_cell(text: &str) -> String {
        text.replace(['\r', '\n'], " ")
    }

    fn cells(row: &RowView) -> [String; COLUMN_COUNT] {
        [
            Self::sanitize_cell(&row.name),
            Self::sanitize_cell(&row.version),
            Self::sanitize_cell(&row.installed_by),
        ]
    }

    fn column_widths(rows: &[[String; COLUMN_COUNT]]) -> [usize; COLUMN_COUNT] {
        let mut widths = COLUMN_HEADERS.map(|header| header.chars().count());
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl TableFormatter {
    fn render_section(&self, output: &mut String, section: &SectionView) {
        output.push('\n');
        output.push_str(&format!("--- {} ---\n", section.title));

        let rows: Vec<[String; COLUMN_COUNT]> = section.rows.iter().map(Self::cells).collect();
        let widths = Self::column_widths(&rows);

        self.render_border(output, &widths);
        self.render_row(output, &COLUMN_HEADERS, &widths);
        self.render_border(output, &widths);
        for row in &rows {
            self.render_row(output, row, &widths);
        }
        self.render_border(output, &widths);
    }

    fn render_border(&self, output: &mut String, widths: &[usize; COLUMN_COUNT]) {
        output.push('+');
        for width in widths {
            output.push_str(&"-".repeat(width + 2));
            output.push('+');
        }
        output.push('\n');
    }

    fn render_row<S: AsRef<str>>(
        &self,
        output: &mut String,
        cells: &[S; COLUMN_COUNT],
        widths: &[usize; COLUMN_COUNT],
    ) {
        output.push('|');
        for (cell, width) in cells.iter().zip(widths) {
            output.push_str(&format!(" {:<width$} |", cell.as_ref(), width = width));
        }
        output.push('\n');
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = String::new();
        for section in &model.sections {
            self.render_section(&mut output, section);
        }
        Ok(output)
    }
}
