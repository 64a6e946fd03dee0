use crate::CLAP_STYLING;
use clap::{arg, command};
use quakemap_feed::DEFAULT_FEED_URL;
use url::Url;

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("quakemap")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("quakemap")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(arg!(-v --"verbose" "Enable debug logging").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("render")
                .about("Fetch the earthquake feed and render it as an interactive map")
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(false)
                        .help("GeoJSON feed to fetch")
                        .value_parser(clap::value_parser!(Url))
                        .default_value(DEFAULT_FEED_URL),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save the map to a file (default: print to stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: html, json, text")
                        .value_parser(["html", "json", "text"])
                        .default_value("html"),
                )
                .arg(
                    arg!(--"container" <ID>)
                        .required(false)
                        .help("Id of the page element the map is mounted into")
                        .default_value("map"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Give up on the feed after this many seconds (default: wait forever)")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(command!("legend").about("Print the depth color legend"))
}
