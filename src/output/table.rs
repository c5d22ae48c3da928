//
//  gqlx
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output
//!
//! Renders response headers as a two-column table using `comfy-table`.
//!
//! ## Example
//!
//! ```rust
//! use gqlx::definitions::Header;
//! use gqlx::output::header_table;
//!
//! let table = header_table(&[Header::new("Content-Type", "application/json")], false);
//! assert!(table.to_string().contains("Content-Type"));
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::definitions::Header;

/// Creates an empty table with the standard styling.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builds a `NAME | VALUE` table with one row per header, in the given order.
///
/// With `color` set, the column titles are cyan.
pub fn header_table(headers: &[Header], color: bool) -> Table {
    let mut table = create_table();

    if color {
        table.set_header(vec![
            Cell::new("NAME").fg(Color::Cyan),
            Cell::new("VALUE").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["NAME", "VALUE"]);
    }

    for header in headers {
        table.add_row(vec![header.name.as_str(), header.value.as_str()]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_table_rows() {
        let headers = vec![
            Header::new("content-type", "application/json"),
            Header::new("x-request-id", "abc"),
        ];
        let table = header_table(&headers, false);

        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("NAME"));
        assert!(rendered.contains("x-request-id"));
        assert!(rendered.contains("application/json"));
    }

    #[test]
    fn test_empty_header_table() {
        let table = header_table(&[], false);
        assert_eq!(table.row_iter().count(), 0);
    }
}
