use std::io;

use anyhow::{Context, Result};
use comfy_table::Table;

use caldim_cli::config::CalendarConfig;
use caldim_cli::pipeline::{Delivery, generate_calendar, resolve_options};
use caldim_core::RECURRING_PUBLIC_HOLIDAYS;
use caldim_sql::StatementLayout;

use crate::cli::{GenerateArgs, HolidaysArgs, LayoutArg};
use crate::summary::{apply_table_style, header_cell};
use crate::types::GenerateResult;

pub fn run_holidays(args: &HolidaysArgs) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(&RECURRING_PUBLIC_HOLIDAYS)
            .context("serialize holidays")?;
        println!("{json}");
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Holiday"),
        header_cell("Month"),
        header_cell("Day"),
    ]);
    apply_table_style(&mut table);
    for holiday in &RECURRING_PUBLIC_HOLIDAYS {
        table.add_row(vec![
            holiday.name.to_string(),
            holiday.month_of_year.to_string(),
            holiday.day_of_month.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let options = resolve_options(args.config.as_deref(), overrides_from_args(args))?;
    let delivery = if args.stdout {
        Delivery::Stdout
    } else if args.dry_run {
        Delivery::DryRun
    } else {
        Delivery::File
    };
    let outcome = generate_calendar(options, delivery, &mut io::stdout().lock())?;
    Ok(GenerateResult {
        outcome,
        show_table: !args.no_summary,
    })
}

fn overrides_from_args(args: &GenerateArgs) -> CalendarConfig {
    CalendarConfig {
        table_name: args.table_name.clone(),
        from_year: args.from_year,
        to_year: args.to_year,
        output: args.output.clone(),
        layout: args.layout.map(|layout| match layout {
            LayoutArg::Standard => StatementLayout::Standard,
            LayoutArg::Legacy => StatementLayout::Legacy,
        }),
    }
}
