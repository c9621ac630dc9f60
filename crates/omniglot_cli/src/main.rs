//! Omniglot locale CLI - inspect how the engine sees this machine's locale
//! preferences.

mod config;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use omniglot_locale::{
    accept_language_header, preferred_variant_for, resolve_variant, LocaleState, LocaleTag,
    VariantMap,
};

use crate::config::OmniglotConfig;

#[derive(Parser)]
#[command(name = "omniglot", version, about = "Inspect Omniglot locale preference resolution")]
struct Cli {
    /// Path to the variant mapping resource (overrides omniglot.toml)
    #[arg(long, global = true)]
    mapping: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a locale tag to its content variant
    Resolve {
        /// Locale identifier, e.g. zh-Hant-TW or en_US.UTF-8
        tag: String,
    },
    /// Show the preference list derived from the OS locale snapshot
    Prefs {
        /// Include languages that have no variant mapping
        #[arg(long)]
        all: bool,
    },
    /// Synthesize the weighted Accept-Language header
    Header {
        /// Explicit codes; when omitted, the OS snapshot is used
        tags: Vec<String>,
    },
    /// Pick the preferred variant of a language from the OS preferences
    Variant {
        /// Base language code, e.g. zh
        language: String,
    },
    /// Resolve a wiki-style language code to a locale object
    Locale {
        /// Language code; omit to show the current OS locale
        code: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = OmniglotConfig::load_from_dir(Path::new("."))?;
    let mapping_path = cli.mapping.unwrap_or(config.mapping.path);
    debug!(path = %mapping_path.display(), "using variant mapping");

    LocaleState::init(VariantMap::load(&mapping_path));
    let state = LocaleState::get();

    match cli.command {
        Command::Resolve { tag } => match resolve_variant(state.variants(), &tag) {
            Some(variant) => println!("{variant}"),
            None => match LocaleTag::parse(&tag) {
                Some(parsed) => println!("{}", parsed.language),
                None => anyhow::bail!("`{tag}` has no recognizable language subtag"),
            },
        },
        Command::Prefs { all } => {
            let list = if all {
                state.preferred_languages()
            } else {
                state.preferred_variant_languages().to_vec()
            };
            if list.is_empty() {
                println!("{}", config.fallback.language);
            } else {
                for code in list {
                    println!("{code}");
                }
            }
        }
        Command::Header { tags } => {
            if tags.is_empty() {
                println!("{}", state.accept_language_header());
            } else {
                println!("{}", accept_language_header(&tags));
            }
        }
        Command::Variant { language } => {
            let prefs = state.preferred_variant_languages();
            match preferred_variant_for(&language, prefs) {
                Some(variant) => println!("{variant}"),
                None => println!("{}", config.fallback.language),
            }
        }
        Command::Locale { code } => {
            println!("{}", state.locale_for(code.as_deref()));
        }
    }

    Ok(())
}
