//! sheetpeek-core: read Excel/ODS workbooks and render them as plain text
//!
//! Two renderings are provided: a full dump of every sheet as aligned tables,
//! and a row-by-row listing of the non-blank cells of one sheet.

pub mod config;
pub mod error;
pub mod logging;
pub mod reader;
pub mod render;

pub use config::PeekConfig;
pub use error::PeekError;
pub use reader::{CellValue, ReadOptions, Sheet, Workbook, read_sheet, read_workbook};
pub use render::{dump_workbook, print_rows, render_table};
