//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::PageSettings;
use crate::error::{Result, ResultExt};
use crate::loader::load_settings;
use crate::pagination::{Paginated, PaginationContext};
use serde_json::json;
use std::fmt::Write as _;
use std::io::{self, Write};
use tracing::{info, warn};

const WRITE_FAILED: &str = "Failed to write output";

/// Settings used by `demo` when no settings file is given
fn demo_settings() -> PageSettings {
    PageSettings {
        default_per_page: Some(3),
        default_page: Some(1),
        max_per_page: Some(5),
    }
}

fn numbers(count: i64) -> Vec<i64> {
    (1..=count).collect()
}

fn reverse(mut items: Vec<i64>) -> Vec<i64> {
    items.reverse();
    items
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing results to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Run the CLI command, writing results to `out`
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Commands::Demo { items } => self.demo(*items, out),
            Commands::Page {
                items,
                page,
                per_page,
                even,
                min,
                reverse,
            } => self.page(
                *items,
                PageOptions {
                    page: *page,
                    per_page: *per_page,
                    even: *even,
                    min: *min,
                    reverse: *reverse,
                },
                out,
            ),
            Commands::Settings => self.settings(out),
        }
    }

    fn settings_or(&self, fallback: PageSettings) -> Result<PageSettings> {
        match &self.cli.config {
            Some(path) => load_settings(path)
                .with_context(|| format!("Failed to load settings from '{}'", path.display())),
            None => Ok(fallback),
        }
    }

    /// Walk one context through a sequence of chained calls
    ///
    /// State carries over between steps, so later steps see the page, size
    /// and transforms set by earlier ones.
    fn demo<W: Write>(&self, items: i64, out: &mut W) -> Result<()> {
        let settings = self.settings_or(demo_settings())?;
        let ctx = PaginationContext::new(numbers(items), settings.into());
        info!("Running demo over {} items", ctx.items_len());

        self.emit(out, "Default pagination", &ctx.paginate())?;

        let result = ctx.page(2).per_page(5).paginate();
        self.emit(out, "Custom page and page size", &result)?;

        let result = ctx.filter_by(|n| n % 2 == 0).paginate();
        self.emit(out, "Even numbers", &result)?;

        let result = ctx.order_by(reverse).paginate();
        self.emit(out, "Reverse order", &result)?;

        let result = ctx
            .page(2)
            .per_page(3)
            .filter_by(|n| *n > 3)
            .order_by(|items| items)
            .paginate();
        self.emit(out, "Page 2 of numbers above 3", &result)?;

        Ok(())
    }

    fn page<W: Write>(&self, items: i64, options: PageOptions, out: &mut W) -> Result<()> {
        let settings = self.settings_or(PageSettings::default())?;
        let ctx = PaginationContext::new(numbers(items), settings.into());

        if let Some(page) = options.page {
            ctx.page(page);
        }
        if let Some(per_page) = options.per_page {
            ctx.per_page(per_page);
        }
        if options.even || options.min.is_some() {
            let PageOptions { even, min, .. } = options;
            ctx.filter_by(move |n| (!even || n % 2 == 0) && !matches!(min, Some(m) if *n <= m));
        }
        if options.reverse {
            ctx.order_by(reverse);
        }

        let result = ctx.paginate();
        if result.meta.is_out_of_range() {
            warn!(
                "Page {} is past the last page ({})",
                result.meta.current_page, result.meta.total_pages_count
            );
        }
        self.emit(out, "Page", &result)
    }

    fn settings<W: Write>(&self, out: &mut W) -> Result<()> {
        let resolved = self.settings_or(PageSettings::default())?.resolve();
        let text = match self.cli.format {
            OutputFormat::Json => format!("{}\n", serde_json::to_string(&resolved)?),
            OutputFormat::Pretty => {
                let max = resolved
                    .max_per_page
                    .map_or_else(|| "unbounded".to_string(), |m| m.to_string());
                format!(
                    "Default page: {}\nDefault per page: {}\nMax per page: {max}\n",
                    resolved.default_page, resolved.default_per_page
                )
            }
        };
        out.write_all(text.as_bytes()).context(WRITE_FAILED)
    }

    fn emit<W: Write>(&self, out: &mut W, title: &str, result: &Paginated<i64>) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => {
                let line = json!({
                    "title": title,
                    "items": result.items,
                    "meta": result.meta,
                });
                format!("{}\n", serde_json::to_string(&line)?)
            }
            OutputFormat::Pretty => render_pretty(title, result),
        };
        out.write_all(text.as_bytes()).context(WRITE_FAILED)
    }
}

/// Options for the `page` command
#[derive(Debug, Clone, Copy)]
struct PageOptions {
    page: Option<i64>,
    per_page: Option<i64>,
    even: bool,
    min: Option<i64>,
    reverse: bool,
}

/// Render a page as a human-readable block
fn render_pretty(title: &str, result: &Paginated<i64>) -> String {
    let meta = &result.meta;
    let mut text = String::new();
    let _ = writeln!(text, "== {title} ==");
    let _ = writeln!(text, "Current Page: {}", meta.current_page);
    let _ = writeln!(text, "Items on Page: {:?}", result.items);
    let _ = writeln!(text, "Total Items: {}", meta.total_items_count);
    let _ = writeln!(text, "Items Per Page: {}", meta.per_page);
    let _ = writeln!(text, "Total Pages: {}", meta.total_pages_count);
    let _ = writeln!(text, "Is First Page: {}", meta.is_first_page);
    let _ = writeln!(text, "Is Last Page: {}", meta.is_last_page);
    if let Some(prev) = meta.prev_page {
        let _ = writeln!(text, "Previous Page: {prev}");
    }
    if let Some(next) = meta.next_page {
        let _ = writeln!(text, "Next Page: {next}");
    }
    text.push('\n');
    text
}
