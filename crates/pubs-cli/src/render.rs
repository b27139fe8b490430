//! Terminal and JSON renderers for engine projections.

use std::io::{self, Write};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use pubs_core::{Projection, ProjectionSink};
use pubs_model::{Catalog, PublicationRecord, ViewState};
use pubs_report::ProjectionReport;

/// Renders each visible group as a heading followed by a table.
pub struct TableSink<W: Write> {
    out: W,
}

impl<W: Write> TableSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProjectionSink for TableSink<W> {
    type Error = io::Error;

    fn apply(&mut self, catalog: &Catalog, projection: &Projection) -> Result<(), Self::Error> {
        if let Some(message) = &projection.message {
            writeln!(self.out, "{message}")?;
        }
        let mut shown_groups = 0usize;
        for (group, group_projection) in projection.visible_groups(&catalog.groups) {
            shown_groups += 1;
            let mut table = Table::new();
            table.set_header(vec![
                header_cell("Year"),
                header_cell("Title"),
                header_cell("Details"),
            ]);
            apply_listing_table_style(&mut table);
            align_column(&mut table, 0, CellAlignment::Right);
            for record in group_projection.visible_records(group) {
                table.add_row(vec![
                    year_cell(record),
                    Cell::new(&record.title).add_attribute(Attribute::Bold),
                    Cell::new(&record.details),
                ]);
            }
            writeln!(
                self.out,
                "{} ({}, {})",
                group.heading,
                group.category,
                count_label(group_projection.visible_count())
            )?;
            writeln!(self.out, "{table}")?;
        }
        if shown_groups == 0 {
            writeln!(self.out, "No publications match the current view.")?;
        }
        self.out.flush()
    }
}

/// Writes a pretty JSON [`ProjectionReport`] per projection.
pub struct JsonSink<W: Write> {
    out: W,
    state: ViewState,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W, state: ViewState) -> Self {
        Self { out, state }
    }
}

impl<W: Write> ProjectionSink for JsonSink<W> {
    type Error = anyhow::Error;

    fn apply(&mut self, catalog: &Catalog, projection: &Projection) -> Result<(), Self::Error> {
        let report = ProjectionReport::build(catalog, projection, &self.state);
        writeln!(self.out, "{}", report.to_json_pretty()?)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Category overview: tag, heading, record count.
pub fn categories_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Heading"),
        header_cell("Records"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for group in &catalog.groups {
        table.add_row(vec![
            Cell::new(group.category.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&group.heading),
            count_cell(group.len()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(catalog.record_count()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_listing_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 publication".to_string()
    } else {
        format!("{count} publications")
    }
}

fn year_cell(record: &PublicationRecord) -> Cell {
    match record.year.as_deref() {
        Some(year) => Cell::new(year),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
