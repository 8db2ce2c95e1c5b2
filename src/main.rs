use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::IsTerminal;
use std::path::PathBuf;

use table_sort::app;
use table_sort::batch;
use table_sort::csv_export;
use table_sort::html_export;
use table_sort::json_export;
use table_sort::logging;
use table_sort::sorter::Strategy;
use table_sort::table::{self, writer};
use table_sort::ui;
use table_sort::utils::parse_column;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Table file path (.xlsx, .xlsm, .xlsb, .xls, .ods or .json)
    #[arg(required = true)]
    file_path: PathBuf,

    /// Worksheet to read, defaults to the first one
    #[arg(long, short = 's')]
    sheet: Option<String>,

    /// Column to sort by: zero-based index (2) or letters (C)
    #[arg(long, short = 'c')]
    column: Option<String>,

    /// How cell text is turned into a sort key
    #[arg(long, short = 'k', value_enum, default_value_t = Strategy::Lexical)]
    strategy: Strategy,

    /// Number of times to apply the sort; a second pass flips to descending
    #[arg(long, short = 'n', default_value = "1")]
    repeat: usize,

    /// Export the sorted table as JSON to stdout (for piping)
    #[arg(long, short = 'j')]
    json_export: bool,

    /// Write the sorted table as an HTML report
    #[arg(long)]
    html: Option<PathBuf>,

    /// Stylesheet embedded into the HTML report
    #[arg(long, requires = "html")]
    css: Option<PathBuf>,

    /// Write the sorted table as `;`-separated text
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the sorted table to an xlsx file
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Write log messages to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn is_batch(&self) -> bool {
        self.json_export || self.html.is_some() || self.csv.is_some() || self.output.is_some()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !std::io::stdout().is_terminal() && !cli.is_batch() {
        eprintln!("table-sort error: Pipe detected but -j or --json-export flag not provided.");
        std::process::exit(1);
    }

    logging::init_logging(cli.verbose, cli.log_file.as_deref(), !cli.is_batch())?;

    let mut table = table::open_table(&cli.file_path, cli.sheet.as_deref())?;

    let column = cli.column.as_deref().map(parse_column).transpose()?;

    if !cli.is_batch() {
        let mut app_state = app::AppState::new(table, cli.file_path, cli.strategy)?;
        if let Some(column) = column {
            app_state.selected_col = column;
            app_state.sort_selected_column();
        }
        return ui::run_app(app_state);
    }

    batch::apply_sorts(&mut table, column, cli.strategy, cli.repeat)?;

    if let Some(path) = &cli.output {
        writer::save_xlsx(&table, path)?;
    }

    if let Some(path) = &cli.csv {
        csv_export::export_csv(&table, path)?;
        info!("CSV table written to {}", path.display());
    }

    if let Some(path) = &cli.html {
        html_export::export_html(&table, cli.css.as_deref(), path)
            .with_context(|| format!("Unable to write HTML report: {}", path.display()))?;
        info!("HTML table written to {}", path.display());
    }

    if cli.json_export {
        let json_string = json_export::serialize_to_json(&json_export::table_to_json(&table))?;
        println!("{}", json_string);
    }

    Ok(())
}
