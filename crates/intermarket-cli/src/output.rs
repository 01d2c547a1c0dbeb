use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::Report;
use crate::error::CliError;

pub fn render(report: &Report, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = json!({ "meta": &report.meta, "data": &report.data });
            let text = if pretty {
                serde_json::to_string_pretty(&payload)?
            } else {
                serde_json::to_string(&payload)?
            };
            println!("{text}");
        }
        OutputFormat::Table => {
            for line in &report.table {
                println!("{line}");
            }
        }
    }

    Ok(())
}
