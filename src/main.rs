// SPDX-License-Identifier: MPL-2.0
use naomi_portfolio::app::{self, Flags};
use naomi_portfolio::config::ContentOverrides;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
naomi_portfolio: model portfolio backed by a Sanity content store

USAGE:
  naomi_portfolio [OPTIONS]

OPTIONS:
  --config-dir <DIR>    Read settings.toml from DIR
  --project-id <ID>     Content store project id
  --dataset <NAME>      Content store dataset
  -h, --help            Print this help

ENVIRONMENT:
  NAOMI_PORTFOLIO_CONFIG_DIR, NAOMI_PORTFOLIO_PROJECT_ID,
  NAOMI_PORTFOLIO_DATASET, RUST_LOG
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "naomi_portfolio=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
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

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        content: ContentOverrides {
            project_id: args.opt_value_from_str("--project-id")?,
            dataset: args.opt_value_from_str("--dataset")?,
        },
    })
}
