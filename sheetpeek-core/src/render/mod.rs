//! Plain-text renderings of workbooks and sheets

pub mod dump;
pub mod rows;
pub mod table;

pub use dump::dump_workbook;
pub use rows::print_rows;
pub use table::render_table;

/// Width of the `=` rules framing each sheet heading
pub const RULE_WIDTH: usize = 80;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}
