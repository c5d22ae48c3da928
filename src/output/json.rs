//
//  gqlx
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON rendering

use serde::Serialize;
use std::io::Write;

/// Writes `value` as JSON followed by a newline.
///
/// Pretty-printed unless `compact` is set.
pub fn write_json_to<W: Write, T: Serialize>(
    writer: &mut W,
    value: &T,
    compact: bool,
) -> anyhow::Result<()> {
    if compact {
        serde_json::to_writer(&mut *writer, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}
