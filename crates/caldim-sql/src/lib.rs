//! SQL output for the calendar dimension table.
//!
//! Renders [`caldim_core::CalendarDay`] sequences as one batched
//! `INSERT INTO ... VALUES` statement and writes it to disk.
//!
//! # Example
//!
//! ```
//! use caldim_sql::{StatementLayout, generate_statement};
//!
//! let rendered = generate_statement("Calendar", 2019, 2019, StatementLayout::Standard).unwrap();
//! assert_eq!(rendered.row_count, 365);
//! assert!(rendered.sql.starts_with("INSERT INTO Calendar (Date, "));
//! ```

mod error;
pub mod row;
pub mod statement;
pub mod writer;

pub use error::{Result, SqlError};
pub use row::{format_row, value_rows};
pub use statement::{
    CALENDAR_COLUMNS, DEFAULT_TABLE_NAME, InsertStatement, RenderedStatement, STANDARD_YEAR_RANGE,
    StatementLayout, generate_statement,
};
pub use writer::{DEFAULT_OUTPUT_FILE, write_statement};
