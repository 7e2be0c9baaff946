use crate::cli::commands::resolve_source;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::print_columns;
use crate::core::resolver::resolve_columns;
use crate::errors::AppResult;
use crate::source::load_table;
use crate::ui::messages::{detail, info, warning};

/// Handle the `columns` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Columns { source, format } = cmd {
        let source = resolve_source(source, cfg)?;
        let table = load_table(&source, *format)?;

        info(format!(
            "{} column(s), {} data row(s)",
            table.headers.len(),
            table.len()
        ));
        for (i, h) in table.headers.iter().enumerate() {
            detail(&format!("#{}", i + 1), h);
        }

        if table.is_empty() {
            warning("The sheet has no data rows");
        }

        let columns = resolve_columns(&table.headers)?;
        print_columns(&columns);
    }
    Ok(())
}
