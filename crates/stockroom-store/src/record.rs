//! # Inventory Record Format
//!
//! One product per line, comma separated, no header:
//!
//! ```text
//! name,category,price,quantity
//! Blue Ink,Printers,10.5,50
//! "Ink, Black",Printers,12.0,3      ← quoted because the name has a comma
//! Ink, Red,Printers,11.0,4          ← legacy unquoted line, see below
//! ```
//!
//! ## Writing
//! Fields are quoted only when they contain the delimiter, a quote or a line
//! break. Files of plain names stay identical to the historical format.
//!
//! ## Reading Legacy Lines
//! Older files never quoted anything, so a name with a comma produces more
//! than four fields. The last three fields are always category, price and
//! quantity; everything before them is joined back into the name.
//! ```text
//! ["Ink", " Red", "Printers", "11.0", "4"]
//!  └──── name ───┘ └category┘ └price┘ └qty┘
//! ```
//!
//! ## One Line at a Time
//! Every line is split on its own, so a stray quote can never pull the
//! following lines into its record. A line goes through the CSV reader only
//! when each field that opens with a quote is closed before the next comma
//! or the end of the line. Anything else is split on bare commas and keeps
//! its quotes as typed:
//! ```text
//! "Ink, Black",Printers,12.0,3     → ["Ink, Black", "Printers", "12.0", "3"]
//! "Super" Glue,Office,1.0,2        → ["\"Super\" Glue", "Office", "1.0", "2"]
//! "Deluxe Pen,Office,1.0,2         → ["\"Deluxe Pen", "Office", "1.0", "2"]
//! ```

use csv::{ReaderBuilder, StringRecord};
use stockroom_core::validation::{parse_price, parse_quantity};
use stockroom_core::Product;

use crate::error::SkipReason;

/// Number of columns in a record.
pub const FIELD_COUNT: usize = 4;

/// Delimiter between fields.
pub const DELIMITER: u8 = b',';

/// Builds a product from one record, anchoring on the last three fields.
pub fn parse_record(record: &StringRecord) -> Result<Product, SkipReason> {
    let len = record.len();
    if len < FIELD_COUNT {
        return Err(SkipReason::FieldCount(len));
    }

    let quantity = parse_quantity(&record[len - 1])?;
    let price = parse_price(&record[len - 2])?;
    let category = &record[len - 3];

    let delimiter = char::from(DELIMITER).to_string();
    let name = record
        .iter()
        .take(len - 3)
        .collect::<Vec<_>>()
        .join(&delimiter);

    Ok(Product::new(name, category, price, quantity)?)
}

/// Splits one line of the file into fields.
pub fn split_line(line: &str) -> StringRecord {
    if has_closed_quotes(line) {
        if let Some(record) = read_quoted(line) {
            return record;
        }
    }
    StringRecord::from(line.split(char::from(DELIMITER)).collect::<Vec<_>>())
}

/// True when every field that opens with `"` closes it right before a
/// delimiter or the end of the line (`""` inside is an escaped quote).
fn has_closed_quotes(line: &str) -> bool {
    let bytes = line.as_bytes();
    let mut i = 0;

    loop {
        if bytes.get(i) != Some(&b'"') {
            match bytes[i..].iter().position(|&b| b == DELIMITER) {
                Some(offset) => i += offset + 1,
                None => return true,
            }
            continue;
        }

        i += 1;
        loop {
            match bytes.get(i) {
                None => return false,
                Some(b'"') if bytes.get(i + 1) == Some(&b'"') => i += 2,
                Some(b'"') => {
                    i += 1;
                    break;
                }
                Some(_) => i += 1,
            }
        }

        match bytes.get(i) {
            None => return true,
            Some(&DELIMITER) => i += 1,
            Some(_) => return false,
        }
    }
}

/// Reads exactly one CSV record from a single line.
fn read_quoted(line: &str) -> Option<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(DELIMITER)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => Some(record),
        _ => None,
    }
}
