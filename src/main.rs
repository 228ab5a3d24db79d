// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
Usage: iced_gallery [OPTIONS] [MANIFEST | DIRECTORY]

Options:
  --lang <ID>         UI language (e.g. en-US, fr)
  --config-dir <DIR>  Directory holding settings.toml
  -v, -vv             Increase log verbosity
  -h, --help          Print this help
";

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let mut filter = EnvFilter::from_default_env();
    for directive in [
        format!("iced_gallery={level}"),
        "wgpu=warn".to_string(),
        "winit=warn".to_string(),
    ] {
        match directive.parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(err) => eprintln!("ignoring log directive {directive}: {err}"),
        }
    }
    fmt().with_env_filter(filter).with_target(true).init();
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbosity = if args.contains("-vv") {
        2
    } else {
        u8::from(args.contains("-v"))
    };
    init_tracing(verbosity);

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --lang");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --config-dir");
        None
    });

    let flags = Flags {
        lang,
        config_dir,
        source: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    tracing::info!(source = ?flags.source, "starting");
    app::run(flags)
}
