//! Calendar generation pipeline.
//!
//! The pipeline runs these stages in order:
//! 1. **Resolve**: layer command-line overrides on an optional config file
//! 2. **Render**: walk the year range and build the statement, tallying each day
//! 3. **Deliver**: replace the output file, print the statement, or skip output
//!
//! Nothing is written before rendering succeeds, so a rejected table name or
//! year leaves the destination untouched.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use caldim_core::generate;
use caldim_sql::{InsertStatement, RenderedStatement, write_statement};

use crate::config::{CalendarConfig, GenerateOptions};
use crate::tally::CalendarTally;

/// Where the rendered statement goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delivery {
    /// Atomically replace the configured output file.
    #[default]
    File,
    /// Write the statement to the supplied writer.
    Stdout,
    /// Render and tally only.
    DryRun,
}

/// Result of one generation run.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub options: GenerateOptions,
    pub delivery: Delivery,
    pub row_count: usize,
    /// File that now holds the statement. `None` unless delivered to a file.
    pub written: Option<PathBuf>,
    pub tally: CalendarTally,
    /// Non-fatal findings, also logged at `warn`.
    pub warnings: Vec<String>,
}

/// Load the config file, if any, and apply `overrides` on top of it.
pub fn resolve_options(
    config_path: Option<&Path>,
    overrides: CalendarConfig,
) -> Result<GenerateOptions> {
    let file_config = match config_path {
        Some(path) => CalendarConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => CalendarConfig::default(),
    };
    file_config
        .resolve(overrides)
        .context("resolve generate options")
}

/// Render the statement for `options` and deliver it.
///
/// `out` receives the statement only for [`Delivery::Stdout`].
pub fn generate_calendar<W: Write>(
    options: GenerateOptions,
    delivery: Delivery,
    out: &mut W,
) -> Result<GenerationOutcome> {
    let span = info_span!(
        "generate",
        from_year = options.from_year,
        to_year = options.to_year,
        table_name = %options.table_name
    );
    let _guard = span.enter();

    let mut warnings = Vec::new();
    if options.from_year > options.to_year {
        warn!(
            from_year = options.from_year,
            to_year = options.to_year,
            "fromYear is after toYear; the statement will contain no rows"
        );
        warnings.push(format!(
            "fromYear {} is after toYear {}; the statement contains no rows",
            options.from_year, options.to_year
        ));
    }

    let (rendered, tally) = render(&options)?;

    let written = match delivery {
        Delivery::Stdout => {
            out.write_all(rendered.sql.as_bytes())
                .and_then(|()| out.flush())
                .context("write statement to stdout")?;
            None
        }
        Delivery::DryRun => {
            info!(output = %options.output.display(), "dry run, nothing written");
            None
        }
        Delivery::File => {
            write_statement(&options.output, &rendered.sql)
                .with_context(|| format!("write {}", options.output.display()))?;
            Some(options.output.clone())
        }
    };

    Ok(GenerationOutcome {
        options,
        delivery,
        row_count: rendered.row_count,
        written,
        tally,
        warnings,
    })
}

fn render(options: &GenerateOptions) -> Result<(RenderedStatement, CalendarTally)> {
    let statement =
        InsertStatement::new(options.table_name.as_str())?.with_layout(options.layout);
    statement.validate_years(options.from_year, options.to_year)?;
    let days = generate(options.from_year, options.to_year).context("generate calendar days")?;
    info!(expected_rows = days.len(), layout = ?options.layout, "generating calendar");

    let start = Instant::now();
    let mut tally = CalendarTally::default();
    let rendered = statement.render(days.inspect(|day| tally.record(day)));
    for year in tally.years() {
        debug!(
            year = year.year,
            days = year.counts.days,
            weekend_days = year.counts.weekend_days,
            public_holidays = year.counts.public_holidays,
            "year generated"
        );
    }
    info!(
        row_count = rendered.row_count,
        duration_ms = start.elapsed().as_millis(),
        "generation complete"
    );
    Ok((rendered, tally))
}
