// SPDX-License-Identifier: MPL-2.0
use demo_preview::app::{self, Flags};
use demo_preview::ui::demo_preview::Layout;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Component demo previews

USAGE:
  demo_preview [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <LOCALE>          Interface language (en-US, zh-CN)
  --config-dir <DIR>       Directory holding settings.toml
  --demo-dir <DIR>         Directory of extra demo files
  --layout <LAYOUT>        Block layout: titled, minimal or header
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("demo_preview=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        demo_dir: args.opt_value_from_str("--demo-dir")?,
        layout: args.opt_value_from_str::<_, Layout>("--layout")?,
    })
}
