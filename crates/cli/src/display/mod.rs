pub mod table;

pub use table::{print_columns, print_rows, rows_to_json};
