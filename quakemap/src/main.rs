use quakemap::commands::command_argument_builder;
use quakemap::handlers::{handle_legend, handle_render, init_tracing};
use quakemap_core::print_banner;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");
    let verbose = chosen_command.get_flag("verbose");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    init_tracing(verbose);

    let outcome = match chosen_command.subcommand() {
        Some(("render", primary_command)) => handle_render(primary_command, quiet).await,
        Some(("legend", _)) => {
            handle_legend();
            Ok(())
        }
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = outcome {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}
