use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};

use crate::license::PackageRecord;

/// Columns the table renderer knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Package,
    License,
    Author,
    Url,
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Package => "Package",
            Column::License => "License",
            Column::Author => "Author",
            Column::Url => "URL",
        }
    }

    fn cell<'a>(self, record: &'a PackageRecord) -> &'a str {
        match self {
            Column::Package => &record.display_name,
            Column::License => &record.license,
            Column::Author => &record.author,
            Column::Url => &record.homepage,
        }
    }
}

/// Render one row per record for the requested columns, left-aligned, with
/// a header row and ASCII borders.
pub fn render_table(records: &[PackageRecord], columns: &[Column]) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(
        columns
            .iter()
            .map(|column| Cell::new(column.header()))
            .collect::<Vec<_>>(),
    );

    for record in records {
        table.add_row(
            columns
                .iter()
                .map(|column| Cell::new(column.cell(record)))
                .collect::<Vec<_>>(),
        );
    }

    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Left);
    }

    table.to_string()
}
