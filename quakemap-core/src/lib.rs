pub mod compose;
pub mod config;
pub mod encode;
pub mod error;
pub mod legend;
pub mod pipeline;
pub mod report;

use colored::Colorize;

pub use compose::{MapComposition, compose_map, validate_settings};
pub use encode::{color_for_depth, encode_features, popup_text, radius_for_magnitude};
pub use error::MapError;
pub use pipeline::{RenderOptions, execute_render};

pub fn print_banner() {
    eprintln!(
        "{} {}",
        "quakemap".bright_red().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).as_str().bright_black()
    );
    eprintln!("{}", "earthquake feed -> interactive map".bright_black());
    eprintln!();
}
