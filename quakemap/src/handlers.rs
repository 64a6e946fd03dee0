use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use quakemap_core::compose::MapComposition;
use quakemap_core::config::MapSettings;
use quakemap_core::legend::{LEGEND_ENTRIES, legend_rows};
use quakemap_core::pipeline::{RenderOptions, execute_render};
use quakemap_core::report::{
    OutputFormat, generate_html_page, generate_json_report, generate_text_summary, save_report,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::Level;
use url::Url;

pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Expand a leading `~` in an output path
pub fn resolve_output_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

/// Parse `#RRGGBB` (or `#RGB`) into an RGB triple
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').filter(|d| d.is_ascii())?;
    match digits.len() {
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let mut channels = digits
                .chars()
                .map(|c| c.to_digit(16).map(|v| (v * 17) as u8));
            Some((channels.next()??, channels.next()??, channels.next()??))
        }
        _ => None,
    }
}

pub fn render_output(composition: &MapComposition, format: OutputFormat) -> Result<String> {
    let content = match format {
        OutputFormat::Html => generate_html_page(composition).context("failed to build HTML page")?,
        OutputFormat::Json => generate_json_report(composition).context("failed to build JSON")?,
        OutputFormat::Text => generate_text_summary(composition),
    };
    Ok(content)
}

pub async fn handle_render(sub_matches: &ArgMatches, quiet: bool) -> Result<()> {
    let url = sub_matches
        .get_one::<Url>("url")
        .context("--url is required")?;
    let format_str = sub_matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("html");
    let format = OutputFormat::from_str(format_str)
        .with_context(|| format!("unsupported format '{}'", format_str))?;
    let container = sub_matches
        .get_one::<String>("container")
        .map(String::as_str)
        .unwrap_or("map");
    let timeout_secs = sub_matches.get_one::<u64>("timeout").copied();
    let output = sub_matches
        .get_one::<PathBuf>("output")
        .map(|p| resolve_output_path(p));

    let options = RenderOptions {
        feed_url: url.as_str().to_string(),
        settings: MapSettings::default().with_container_id(container),
        timeout_secs,
        show_progress: !quiet,
    };

    let progress_callback = if quiet {
        None
    } else {
        let callback: quakemap_core::pipeline::RenderProgressCallback =
            Arc::new(|msg: String| eprintln!("{} {}", "→".blue(), msg));
        Some(callback)
    };

    let composition = execute_render(options, progress_callback)
        .await
        .with_context(|| format!("failed to render map from {}", url))?;

    let content = render_output(&composition, format)?;

    match output {
        Some(path) => {
            save_report(&content, &path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if !quiet {
                eprintln!(
                    "{} Map with {} markers saved to {}",
                    "✓".green().bold(),
                    composition.marker_count(),
                    path.display().to_string().as_str().bright_white()
                );
            }
        }
        None => print!("{}", content),
    }

    Ok(())
}

pub fn handle_legend() {
    println!("{}", "Depth (km)".bright_white().bold());
    for row in legend_rows(&LEGEND_ENTRIES) {
        let swatch = match hex_to_rgb(&row.color) {
            Some((r, g, b)) => "  ".on_truecolor(r, g, b).to_string(),
            None => "  ".to_string(),
        };
        println!("  {} {:<8} {}", swatch, row.plain_label(), row.color.as_str().bright_black());
    }
}
