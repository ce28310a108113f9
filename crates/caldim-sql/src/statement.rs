//! `INSERT` statement assembly for the calendar dimension table.

use std::ops::RangeInclusive;

use serde::Deserialize;
use tracing::debug;

use caldim_core::{CalendarDay, generate};

use crate::error::{Result, SqlError};
use crate::row::value_rows;

/// Default target table.
pub const DEFAULT_TABLE_NAME: &str = "Calendar";

/// Column list of the calendar table, in insert order.
pub const CALENDAR_COLUMNS: [&str; 8] = [
    "Date",
    "dayOfWeekIndex",
    "MonthOfYearIndex",
    "Year",
    "dayOfMonthIndex",
    "isWeekend",
    "isWeekDay",
    "isPublicHoliday",
];

/// Years the standard layout can write as `'YYYY-MM-DD'`.
pub const STANDARD_YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

/// Rough width of one rendered row, used to pre-size the output buffer.
const ROW_CAPACITY: usize = 48;

/// Byte layout of the rendered statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementLayout {
    /// Rows separated by `,` and newline, closed with `;`. Dates in single quotes.
    #[default]
    Standard,
    /// Every row followed by `, ` and newline, including the last one. No
    /// terminator, dates in double quotes.
    Legacy,
}

/// A rendered statement and the number of value rows it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStatement {
    pub sql: String,
    pub row_count: usize,
}

/// Builder for the calendar `INSERT` statement.
#[derive(Debug, Clone)]
pub struct InsertStatement {
    table_name: String,
    layout: StatementLayout,
}

impl InsertStatement {
    /// Create a statement targeting `table_name`.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::InvalidTableName`] unless the name is an identifier
    /// (`[A-Za-z_][A-Za-z0-9_]*`), optionally schema-qualified with dots.
    pub fn new(table_name: impl Into<String>) -> Result<Self> {
        let table_name = table_name.into();
        if !is_valid_table_name(&table_name) {
            return Err(SqlError::InvalidTableName { name: table_name });
        }
        Ok(Self {
            table_name,
            layout: StatementLayout::default(),
        })
    }

    #[must_use]
    pub fn with_layout(mut self, layout: StatementLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn layout(&self) -> StatementLayout {
        self.layout
    }

    /// Check that every year of `from_year..=to_year` fits this layout.
    ///
    /// The standard layout needs four-digit positive years. The legacy layout
    /// prints the year as-is and accepts anything. An inverted range has no
    /// rows and is always accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::UnsupportedYear`] with the first offending bound.
    pub fn validate_years(&self, from_year: i32, to_year: i32) -> Result<()> {
        if self.layout == StatementLayout::Legacy || from_year > to_year {
            return Ok(());
        }
        match [from_year, to_year]
            .into_iter()
            .find(|year| !STANDARD_YEAR_RANGE.contains(year))
        {
            Some(year) => Err(SqlError::UnsupportedYear { year }),
            None => Ok(()),
        }
    }

    /// `INSERT INTO <table> (<columns>) VALUES`, without trailing whitespace.
    pub fn header(&self) -> String {
        format!(
            "INSERT INTO {} ({}) VALUES",
            self.table_name,
            CALENDAR_COLUMNS.join(", ")
        )
    }

    /// Render the full statement from days in the order given.
    pub fn render<I>(&self, days: I) -> RenderedStatement
    where
        I: IntoIterator<Item = CalendarDay>,
    {
        let days = days.into_iter();
        let header = self.header();
        let mut sql = String::with_capacity(header.len() + days.size_hint().0 * ROW_CAPACITY);
        sql.push_str(&header);
        let mut row_count = 0usize;

        match self.layout {
            StatementLayout::Standard => {
                sql.push('\n');
                for row in value_rows(days, self.layout) {
                    if row_count > 0 {
                        sql.push_str(",\n");
                    }
                    sql.push_str(&row);
                    row_count += 1;
                }
                sql.push_str(";\n");
            }
            StatementLayout::Legacy => {
                sql.push_str(" \n");
                for row in value_rows(days, self.layout) {
                    sql.push_str(&row);
                    sql.push_str(", \n");
                    row_count += 1;
                }
            }
        }

        debug!(
            table_name = %self.table_name,
            layout = ?self.layout,
            row_count,
            bytes = sql.len(),
            "rendered insert statement"
        );
        RenderedStatement { sql, row_count }
    }
}

/// Generate and render the statement for a whole year range.
///
/// # Errors
///
/// Fails on an invalid table name, a year the layout cannot write, or a year
/// the calendar cannot represent.
pub fn generate_statement(
    table_name: &str,
    from_year: i32,
    to_year: i32,
    layout: StatementLayout,
) -> Result<RenderedStatement> {
    let statement = InsertStatement::new(table_name)?.with_layout(layout);
    statement.validate_years(from_year, to_year)?;
    let days = generate(from_year, to_year)?;
    Ok(statement.render(days))
}

fn is_valid_table_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_identifier)
}

fn is_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
