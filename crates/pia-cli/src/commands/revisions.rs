use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, ValueHint};
use pia_common_core::{Clock, FixedClock, SystemClock};
use pia_common_i18n::{CatalogTranslator, Locale};
use pia_revisions::{PanelInputs, RelativeDatePolicy, Revision, RevisionGroups, RevisionsPanel};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};

#[derive(Debug, Parser)]
pub struct RevisionsCommand {
    /// JSON file holding an array of revisions
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Locale of the group labels
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Reference time as RFC 3339; defaults to the current time
    #[arg(long, value_parser = parse_now)]
    pub now: Option<DateTime<Utc>>,
}

fn parse_now(s: &str) -> Result<DateTime<Utc>, String> {
    FixedClock::parse(s)
        .map(|clock| clock.now())
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

/// Grouped revisions, in display order.
#[derive(Debug, Serialize)]
pub struct RevisionsOutput {
    pub locale: String,
    /// Sidebar title, when shown.
    #[serde(skip)]
    pub title: Option<String>,
    pub groups: RevisionGroups<Revision>,
}

impl FormattedOutput for RevisionsOutput {
    fn format_text(&self) -> String {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        for (label, revisions) in self.groups.iter() {
            lines.push(label.to_string());
            for revision in revisions {
                lines.push(format!(
                    "  #{}  {}",
                    revision.id,
                    revision.created_at.format("%Y-%m-%d %H:%M")
                ));
            }
        }
        if self.groups.is_empty() {
            lines.push("No revisions".to_string());
        }
        lines.join("\n")
    }
}

impl RevisionsCommand {
    fn read_revisions(&self) -> Result<Vec<Revision>, CliError> {
        let raw = std::fs::read_to_string(&self.file).map_err(|e| {
            let message = format!("failed to read {}", self.file.display());
            CliError::io_with_path(message, e, &self.file)
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            CliError::validation(
                format!("{} is not a revision list: {e}", self.file.display()),
                Some("file"),
            )
        })
    }

    /// Group the revisions the way the sidebar shows them.
    pub fn group(
        &self,
        ctx: &CommandContext,
        revisions: Vec<Revision>,
    ) -> Result<RevisionsOutput, CliError> {
        let locale = self.locale.unwrap_or_else(|| ctx.config.effective_locale());
        let translator = CatalogTranslator::from_dir(&ctx.config.loader_config(), locale)
            .context("failed to load message catalogs")?;
        let clock: Arc<dyn Clock> = match self.now {
            Some(now) => Arc::new(FixedClock::at(now)),
            None => Arc::new(SystemClock),
        };
        debug!(locale = %locale, now = %clock.now(), "grouping revisions");

        let mut panel = RevisionsPanel::init(
            RelativeDatePolicy::from_config(&ctx.config.revisions),
            Arc::new(translator),
            clock,
            PanelInputs {
                current_version: None,
                revisions,
                show_title: ctx.config.revisions.show_title,
            },
        );
        let output = RevisionsOutput {
            locale: locale.code().to_string(),
            title: panel
                .show_title()
                .then(|| format!("Revisions ({})", locale.name())),
            groups: panel.groups().clone(),
        };
        panel.dispose();
        Ok(output)
    }

    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let revisions = self.read_revisions()?;
        let count = revisions.len();
        let output = self.group(ctx, revisions)?;
        info!(revisions = count, groups = output.groups.len(), "revisions grouped");
        print_output(ctx, &output)
    }
}
