use crate::cli::commands::resolve_source;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{CheckOptions, StatusCheck};
use crate::errors::AppResult;
use crate::notify::Notifier;
use crate::ui::messages::info;
use crate::utils::date::resolve_target_date;
use crate::utils::path::expand_tilde;

/// Handle the `check` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        source,
        date,
        dry_run,
        format,
        export,
        force,
    } = cmd
    {
        let opts = CheckOptions {
            source: resolve_source(source, cfg)?,
            kind: *format,
            target_date: resolve_target_date(date.as_deref(), cfg.target_date.as_deref())?,
            export: export.as_deref().map(expand_tilde),
            force: *force,
        };

        // transport chosen once for the whole run
        let notifier = Notifier::from_config(cfg, *dry_run);
        if *dry_run {
            info("Dry run: emails are printed, not sent");
        }

        let outcome = StatusCheck::run(cfg, &opts, &notifier)?;

        info(format!(
            "{} notification(s) handled by the {} transport",
            outcome.delivered.len(),
            notifier.transport_name()
        ));
    }
    Ok(())
}
