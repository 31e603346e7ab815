// SPDX-License-Identifier: PMPL-1.0-or-later

//! battle-lexicon: resolve localized character names and render ruby markup
//!
//! Reads avatar/enemy JSON dumps and dialogue text, and prints display
//! strings for a chosen locale.

use anyhow::{Context, Result};
use battle_lexicon::config::Config;
use battle_lexicon::locale::negotiate::{locale_cookie, negotiate};
use battle_lexicon::types::LocalizedRecord;
use battle_lexicon::{logging, records, ruby, AvatarRecord, EnemyRecord, NameResolver};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Parser)]
#[command(name = "battle-lexicon")]
#[command(version)]
#[command(about = "Localized character names and ruby markup for battle-data tooling")]
#[command(long_about = None)]
struct Cli {
    /// Config file (YAML, or JSON by extension)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the display name of every avatar in a records file or directory
    Avatar {
        #[command(flatten)]
        names: NamesArgs,
    },

    /// Print the display name of every enemy in a records file or directory
    Enemy {
        #[command(flatten)]
        names: NamesArgs,
    },

    /// Render ruby markup from TEXT, --file, or stdin
    Ruby {
        /// Text to transform
        #[arg(value_name = "TEXT", conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Keep only base text instead of emitting HTML
        #[arg(short, long)]
        strip: bool,
    },

    /// List the supported locales
    Locales,

    /// Pick the active locale from a cookie header and browser language
    Negotiate {
        /// Raw cookie header, e.g. "MYNEXTAPP_LOCALE=ja; theme=night"
        #[arg(long)]
        cookie: Option<String>,

        /// Browser language, e.g. "ja-JP"
        #[arg(long)]
        browser: Option<String>,
    },
}

#[derive(clap::Args)]
struct NamesArgs {
    /// Records file (JSON) or a directory of them
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Locale code (defaults to the configured default locale)
    #[arg(short, long)]
    locale: Option<String>,

    /// Emit a JSON array instead of tab-separated lines
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct NameRow {
    id: String,
    name: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::discover(cli.config.as_deref()).context("loading config")?;
    let table = config.locale_table()?;
    let resolver = NameResolver::new(&table);

    match cli.command {
        Commands::Avatar { names } => {
            let locale = pick_locale(&names, &config, &resolver);
            let avatars: Vec<AvatarRecord> = records::load_records_from(&names.path)
                .with_context(|| format!("reading avatars from {}", names.path.display()))?;
            let rows: Vec<NameRow> = avatars
                .iter()
                .map(|avatar| NameRow {
                    id: avatar.id().to_string(),
                    name: resolver.avatar_name(locale, Some(avatar)),
                })
                .collect();
            print_rows(rows, names.json)?;
        }

        Commands::Enemy { names } => {
            let locale = pick_locale(&names, &config, &resolver);
            let enemies: Vec<EnemyRecord> = records::load_records_from(&names.path)
                .with_context(|| format!("reading enemies from {}", names.path.display()))?;
            let rows: Vec<NameRow> = enemies
                .iter()
                .map(|enemy| NameRow {
                    id: enemy.id().to_string(),
                    name: resolver.enemy_name(locale, Some(enemy)),
                })
                .collect();
            print_rows(rows, names.json)?;
        }

        Commands::Ruby { text, file, strip } => {
            let input = read_text(text, file.as_deref())?;
            let output = if strip {
                ruby::strip(&input)
            } else {
                ruby::transform(&input)
            };
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }

        Commands::Locales => {
            for entry in table.iter() {
                let code = if entry.code == config.default_locale {
                    format!("{:<4}", entry.code).bold().green()
                } else {
                    format!("{:<4}", entry.code).bold()
                };
                println!("{}  {}", code, entry.label);
            }
        }

        Commands::Negotiate { cookie, browser } => {
            let outcome = negotiate(
                &table,
                &config.default_locale,
                cookie.as_deref(),
                browser.as_deref(),
            );
            println!("Locale: {}", outcome.code);
            if outcome.persist {
                println!("Set-Cookie: {}", locale_cookie(&outcome.code));
            }
        }
    }

    Ok(())
}

fn pick_locale<'a>(names: &'a NamesArgs, config: &'a Config, resolver: &NameResolver) -> &'a str {
    let locale = names.locale.as_deref().unwrap_or(&config.default_locale);
    if !resolver.table().contains(locale) {
        warn!("locale '{}' is not supported; every name will be empty", locale);
    }
    locale
}

fn print_rows(rows: Vec<NameRow>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}\t{}", row.id, row.name);
        }
    }
    Ok(())
}

fn read_text(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(buffer)
}
