use clap::Parser;
use std::process::ExitCode;
use yamlequal::cli::{self, Cli};

fn main() -> ExitCode {
    let args = Cli::parse();

    let color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
    if !color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    cli::logging::init_tracing(args.verbose);

    // Install miette's fancy error handler for readable diagnostics
    if let Err(err) = miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .color(color)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    })) {
        tracing::debug!(%err, "keeping previously installed error handler");
    }

    match cli::run(&args) {
        Ok(code) => code,
        Err(report) => {
            if !args.quiet {
                eprintln!("{:?}", report);
            }
            ExitCode::from(cli::EXIT_ERROR)
        }
    }
}
