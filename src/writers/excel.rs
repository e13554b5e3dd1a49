//! Spreadsheet writer.
//!
//! One header row followed by one row per clipping. Columns, widths and
//! styling are fixed; the header row carries an autofilter over the data.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};

use super::{WriteError, write_destination};
use crate::models::Clipping;
use crate::models::timestamp::format_timestamp;

const HEADER_BACKGROUND: u32 = 0x595959;

#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Text(String),
    Number(f64),
}

struct Column {
    header: &'static str,
    width: f64,
    value: fn(&Clipping) -> Cell,
}

fn text(value: Option<&str>) -> Cell {
    Cell::Text(value.unwrap_or_default().to_string())
}

/// Plain page numbers become numeric cells; ranges and roman numerals stay text
fn page_number(clipping: &Clipping) -> Cell {
    match clipping.page_number.as_deref() {
        Some(page) => page.parse::<u32>().map_or_else(|_| text(Some(page)), |n| Cell::Number(n.into())),
        None => text(None),
    }
}

const COLUMNS: [Column; 8] = [
    Column {
        header: "Book title",
        width: 20.0,
        value: |c| text(c.book.as_ref().map(|b| b.title.as_str())),
    },
    Column {
        header: "Book author",
        width: 20.0,
        value: |c| text(c.book.as_ref().map(|b| b.author.as_str())),
    },
    Column { header: "Content", width: 100.0, value: |c| text(c.content.as_deref()) },
    Column { header: "Page number", width: 10.0, value: page_number },
    Column { header: "Location", width: 10.0, value: |c| text(c.location.as_deref()) },
    Column {
        header: "Created at",
        width: 10.0,
        value: |c| Cell::Text(c.created_at.as_ref().map(format_timestamp).unwrap_or_default()),
    },
    Column { header: "Clipping type", width: 10.0, value: |c| text(c.clipping_type.as_deref()) },
    Column { header: "Errors", width: 20.0, value: |c| Cell::Text(format!("{:?}", c.errors)) },
];

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_BACKGROUND))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
}

fn data_format() -> Format {
    Format::new()
        .set_font_color(Color::Black)
        .set_background_color(Color::White)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
}

fn build_workbook(clippings: &[Clipping]) -> Result<Vec<u8>, XlsxError> {
    let header_format = header_format();
    let data_format = data_format();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, column) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, column.header, &header_format)?;
        worksheet.set_column_width(col, column.width)?;
    }

    for (index, clipping) in clippings.iter().enumerate() {
        let row = index as u32 + 1;
        for (col, column) in COLUMNS.iter().enumerate() {
            let col = col as u16;
            match (column.value)(clipping) {
                Cell::Text(value) => {
                    worksheet.write_string_with_format(row, col, &value, &data_format)?;
                }
                Cell::Number(value) => {
                    worksheet.write_number_with_format(row, col, value, &data_format)?;
                }
            }
        }
    }

    worksheet.autofilter(0, 0, clippings.len() as u32, (COLUMNS.len() - 1) as u16)?;

    workbook.save_to_buffer()
}

/// Write clippings as a styled `.xlsx` workbook
pub fn write_excel(clippings: &[Clipping], destination: &Path) -> Result<(), WriteError> {
    let buffer = build_workbook(clippings)?;
    write_destination(destination, &buffer)
}
