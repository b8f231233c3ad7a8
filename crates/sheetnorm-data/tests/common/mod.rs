//! Shared test fixtures: minimal XLSX workbooks built in memory.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A fixture cell
#[derive(Debug, Clone)]
pub enum Cell {
    Empty,
    Num(f64),
    Str(&'static str),
    /// Excel date serial, styled with the built-in short date format
    Date(f64),
    Bool(bool),
    /// Error literal such as `#DIV/0!`
    Error(&'static str),
}

/// Style index of the date format in `xl/styles.xml`
const DATE_STYLE: usize = 1;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <cellXfs count="2">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>
    <xf numFmtId="14" fontId="0" fillId="0" borderId="0" xfId="0" applyNumberFormat="1"/>
  </cellXfs>
</styleSheet>"#;

/// A fixture sheet: name plus rows (first row is the header row)
pub struct Sheet {
    pub name: &'static str,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: &'static str, rows: Vec<Vec<Cell>>) -> Self {
        Self { name, rows }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn column_letter(index: usize) -> String {
    let mut index = index + 1;
    let mut letters = Vec::new();
    while index > 0 {
        let rem = (index - 1) % 26;
        letters.push(b'A' + rem as u8);
        index = (index - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap()
}

fn worksheet_xml(rows: &[Vec<Cell>]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (r, row) in rows.iter().enumerate() {
        xml.push_str(&format!(r#"<row r="{}">"#, r + 1));
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", column_letter(c), r + 1);
            match cell {
                Cell::Empty => {}
                Cell::Num(n) => {
                    xml.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, reference, n));
                }
                Cell::Str(s) => {
                    xml.push_str(&format!(
                        r#"<c r="{}" t="str"><v>{}</v></c>"#,
                        reference,
                        escape(s)
                    ));
                }
                Cell::Date(serial) => {
                    xml.push_str(&format!(
                        r#"<c r="{}" s="{}"><v>{}</v></c>"#,
                        reference, DATE_STYLE, serial
                    ));
                }
                Cell::Bool(b) => {
                    xml.push_str(&format!(
                        r#"<c r="{}" t="b"><v>{}</v></c>"#,
                        reference,
                        u8::from(*b)
                    ));
                }
                Cell::Error(e) => {
                    xml.push_str(&format!(
                        r#"<c r="{}" t="e"><v>{}</v></c>"#,
                        reference,
                        escape(e)
                    ));
                }
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Build an XLSX workbook containing the given sheets
pub fn build_xlsx(sheets: &[Sheet]) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    let mut zip = ZipWriter::new(&mut buffer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    let mut overrides = String::new();
    let mut workbook_sheets = String::new();
    let mut relationships = String::new();
    for (i, sheet) in sheets.iter().enumerate() {
        let n = i + 1;
        overrides.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
        workbook_sheets.push_str(&format!(
            r#"<sheet name="{}" sheetId="{n}" r:id="rId{n}"/>"#,
            escape(sheet.name)
        ));
        relationships.push_str(&format!(
            r#"<Relationship Id="rId{n}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{n}.xml"/>"#
        ));
    }

    // [Content_Types].xml
    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
  <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
  {overrides}
</Types>"#
        )
        .as_bytes(),
    )
    .unwrap();

    // _rels/.rels
    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#,
    )
    .unwrap();

    // xl/workbook.xml
    zip.start_file("xl/workbook.xml", options).unwrap();
    zip.write_all(
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>{workbook_sheets}</sheets>
</workbook>"#
        )
        .as_bytes(),
    )
    .unwrap();

    // xl/_rels/workbook.xml.rels
    zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
    zip.write_all(
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  {relationships}
</Relationships>"#
        )
        .as_bytes(),
    )
    .unwrap();

    // xl/styles.xml
    zip.start_file("xl/styles.xml", options).unwrap();
    zip.write_all(STYLES_XML.as_bytes()).unwrap();

    for (i, sheet) in sheets.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)
            .unwrap();
        zip.write_all(worksheet_xml(&sheet.rows).as_bytes()).unwrap();
    }

    zip.finish().unwrap();
    buffer.into_inner()
}

/// Two-sheet sales workbook: "Sales" holds the data, "Notes" is a stub
pub fn sales_workbook() -> Vec<u8> {
    build_xlsx(&[
        Sheet::new(
            "Sales",
            vec![
                vec![
                    Cell::Str(" Region"),
                    Cell::Str("  Sales   Month "),
                    Cell::Str("Revenue "),
                ],
                vec![Cell::Str("North"), Cell::Num(5.0), Cell::Str("1,000")],
                vec![Cell::Str("South"), Cell::Empty, Cell::Empty],
                vec![Cell::Str("East"), Cell::Str("jul"), Cell::Num(250.5)],
                vec![Cell::Str("West"), Cell::Str("2024-03-15"), Cell::Str("12A")],
            ],
        ),
        Sheet::new("Notes", vec![vec![Cell::Str("Comment")]]),
    ])
}

/// Single-sheet workbook
pub fn single_sheet_workbook() -> Vec<u8> {
    build_xlsx(&[Sheet::new(
        "Only",
        vec![
            vec![Cell::Str("Month"), Cell::Str("Units")],
            vec![Cell::Num(1.0), Cell::Str(" 42 ")],
            vec![Cell::Num(13.0), Cell::Str("-7")],
        ],
    )])
}

/// Typed cells: date-formatted serials, booleans and an error literal.
/// 45366 is 2024-03-15 and 45231 is 2023-11-01.
pub fn typed_cells_workbook() -> Vec<u8> {
    build_xlsx(&[Sheet::new(
        "Orders",
        vec![
            vec![
                Cell::Str("Order Month"),
                Cell::Str("Shipped"),
                Cell::Str("Paid"),
                Cell::Str("Margin"),
            ],
            vec![
                Cell::Date(45366.0),
                Cell::Date(45366.0),
                Cell::Bool(true),
                Cell::Error("#DIV/0!"),
            ],
            vec![
                Cell::Date(45231.0),
                Cell::Empty,
                Cell::Bool(false),
                Cell::Num(0.25),
            ],
        ],
    )])
}
