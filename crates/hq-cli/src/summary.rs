use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use hq_model::{FileProfile, ProfileDetail};

use crate::types::ScanResult;

pub fn print_summary(result: &ScanResult) {
    println!("Output: {}", result.output_dir.display());
    if let Some(path) = &result.cross_report {
        println!("Cross-source report: {}", path.display());
    }
    if let Some(path) = &result.fields_tsv {
        println!("Fields TSV: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("File"),
        header_cell("Kind"),
        header_cell("Size (MB)"),
        header_cell("Rows/Nodes"),
        header_cell("Cols/Paths"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);

    let mut failures = 0usize;
    for profile in &result.profiles {
        if profile.error().is_some() {
            failures += 1;
        }
        table.add_row(profile_row(profile));
    }
    println!("{table}");

    if failures > 0 {
        eprintln!("Failed files:");
        for profile in &result.profiles {
            if let Some(error) = profile.error() {
                eprintln!("- {}: {error}", profile.filepath.display());
            }
        }
    }
}

fn profile_row(profile: &FileProfile) -> Vec<Cell> {
    let (kind, rows, cols, status) = match &profile.detail {
        ProfileDetail::Tabular(tabular) => (
            Cell::new("tabular"),
            Cell::new(tabular.row_count),
            Cell::new(tabular.column_count),
            ok_cell(),
        ),
        ProfileDetail::SemiStructured(structure) => (
            Cell::new(structure.format.to_string()),
            Cell::new(structure.node_count),
            Cell::new(structure.unique_paths),
            ok_cell(),
        ),
        ProfileDetail::Failed { .. } => (
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new("FAILED")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
        ),
    };
    vec![
        Cell::new(&profile.source)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(&profile.filename),
        kind,
        Cell::new(format!("{:.2}", profile.file_size_mb)),
        rows,
        cols,
        status,
    ]
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn ok_cell() -> Cell {
    Cell::new("✓")
        .fg(Color::Green)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
