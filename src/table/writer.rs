use anyhow::{Context, Result};
use chrono::Local;
use log::{info, warn};
use rust_xlsxwriter::{Color, Format, Workbook as XlsxWorkbook};
use std::path::{Path, PathBuf};

use super::{CellType, Table};
use crate::sorter::Mark;

const COLUMN_WIDTH: u16 = 15;

/// Background fill for a pass/fail marker cell, as `0xRRGGBB`.
pub fn mark_fill(mark: Mark) -> u32 {
    match mark {
        Mark::Check => 0x00FF89,
        Mark::Cross => 0xFF0000,
        Mark::Unknown => 0xFFA500,
    }
}

fn mark_format(mark: Mark) -> Format {
    Format::new().set_background_color(Color::RGB(mark_fill(mark)))
}

/// `<dir>/<stem>_<YYYYmmdd_HHMMSS>.xlsx` next to `path`, so saving never
/// overwrites the file that was opened.
pub fn timestamped_path(path: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let file_stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("table");
    let parent_dir = path.parent().unwrap_or_else(|| Path::new(""));
    parent_dir.join(format!("{}_{}.xlsx", file_stem, timestamp))
}

/// Writes the table, header first, to a single worksheet.
pub fn save_xlsx(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = XlsxWorkbook::new();
    let number_format = Format::new().set_num_format("General");
    let header_format = Format::new().set_bold();
    let check_format = mark_format(Mark::Check);
    let cross_format = mark_format(Mark::Cross);
    let unknown_format = mark_format(Mark::Unknown);

    let worksheet = workbook.add_worksheet();
    if !table.name.is_empty() && worksheet.set_name(&table.name).is_err() {
        warn!("'{}' is not a valid worksheet name, using the default", table.name);
    }

    for col in 0..table.width() {
        worksheet.set_column_width(u16::try_from(col)?, COLUMN_WIDTH)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_idx = u32::try_from(row_idx)?;

        for (col_idx, cell) in row.cells.iter().enumerate() {
            let col_idx = u16::try_from(col_idx)?;

            if row_idx == 0 {
                worksheet.write_string_with_format(row_idx, col_idx, &cell.value, &header_format)?;
                continue;
            }

            match cell.cell_type {
                CellType::Number => {
                    if let Ok(num) = cell.value.trim().parse::<f64>() {
                        worksheet.write_number_with_format(row_idx, col_idx, num, &number_format)?;
                    } else {
                        worksheet.write_string(row_idx, col_idx, &cell.value)?;
                    }
                }
                CellType::Boolean => {
                    if let Ok(b) = cell.value.to_lowercase().parse::<bool>() {
                        worksheet.write_boolean(row_idx, col_idx, b)?;
                    } else {
                        worksheet.write_string(row_idx, col_idx, &cell.value)?;
                    }
                }
                CellType::Text => {
                    let fill = match Mark::from_text(cell.value.trim()) {
                        Some(Mark::Check) => Some(&check_format),
                        Some(Mark::Cross) => Some(&cross_format),
                        Some(Mark::Unknown) => Some(&unknown_format),
                        None => None,
                    };

                    match fill {
                        Some(format) => {
                            worksheet.write_string_with_format(row_idx, col_idx, &cell.value, format)?;
                        }
                        None => {
                            worksheet.write_string(row_idx, col_idx, &cell.value)?;
                        }
                    }
                }
                CellType::Empty => {}
            }
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to write workbook: {}", path.display()))?;

    info!("Saved '{}' to {}", table.name, path.display());
    Ok(())
}
