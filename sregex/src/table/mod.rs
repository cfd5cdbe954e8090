/// Accumulates rows of cells and renders them with every column padded to its widest cell.
/// Rows may have different lengths; short rows simply leave the trailing columns empty
#[derive(Default, Debug, Clone)]
pub struct Table {
    column_widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn push_row(&mut self, row: Vec<String>) {
        if row.len() > self.column_widths.len() {
            self.column_widths.resize(row.len(), 0);
        }
        self.column_widths
            .iter_mut()
            .zip(&row)
            .for_each(|(width, cell)| *width = (*width).max(cell.chars().count()));
        self.rows.push(row);
    }

    pub fn render(&self, sep: &str) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&self.column_widths)
                    .map(|(cell, width)| {
                        let padding = width.saturating_sub(cell.chars().count());
                        format!("{cell}{}{sep}", " ".repeat(padding))
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
