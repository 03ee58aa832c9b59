//! medialoan CLI
//!
//! Command-line interface for browsing the media rental catalog and
//! running borrow/return transactions against it.

mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use medialoan_catalog::{append_summary_file, BorrowOutcome, CatalogManager, ReturnOutcome};
use medialoan_core::{ContentItem, ContentKind, Member};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "medialoan")]
#[command(about = "Browse and borrow from a media rental catalog", long_about = None)]
struct Cli {
    /// Path to the pipe-delimited catalog file
    #[arg(short, long, global = true, default_value = "catalog.txt")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the full inventory
    List,

    /// List the distinct genre tags across the catalog
    Categories,

    /// Search the catalog by exact title or by genre tag
    Search {
        /// Case-insensitive exact title match (first hit only)
        #[arg(short, long)]
        title: Option<String>,

        /// Case-insensitive genre match (all hits, catalog order)
        #[arg(short, long)]
        genre: Option<String>,
    },

    /// Borrow an item for a member
    Borrow {
        /// Content id to borrow
        id: u32,

        /// Member name the rental is recorded against
        #[arg(short, long)]
        member: String,
    },

    /// Return an item from a member
    Return {
        /// Content id to return
        id: u32,

        /// Member name the return is recorded against
        #[arg(short, long)]
        member: String,
    },

    /// Append an `id, title, isAvailable` summary of the inventory to a file
    Export {
        /// Output file (created if missing, appended otherwise)
        output: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // One manager per invocation, built up front; a load failure means
    // no command runs against a partial catalog.
    let mut manager = CatalogManager::load(&cli.catalog)?;

    match cli.command {
        Commands::List => run_list(&manager),
        Commands::Categories => run_categories(&manager),
        Commands::Search { title, genre } => run_search(&manager, title, genre)?,
        Commands::Borrow { id, member } => run_borrow(&mut manager, id, &member)?,
        Commands::Return { id, member } => run_return(&mut manager, id, &member)?,
        Commands::Export { output } => run_export(&manager, &output)?,
    }

    Ok(())
}

fn run_list(manager: &CatalogManager) {
    for item in manager.inventory() {
        print_summary_line(item);
    }
    println!();
    println!("{} items", manager.len());
}

fn run_categories(manager: &CatalogManager) {
    for category in manager.categories() {
        println!("- {}", category);
    }
}

fn run_search(
    manager: &CatalogManager,
    title: Option<String>,
    genre: Option<String>,
) -> Result<(), CliError> {
    match (title, genre) {
        (Some(title), None) => {
            match manager.search_by_title(&title) {
                Some(item) => print_full_details(item),
                None => println!(
                    "{}",
                    format!("No title matching '{}' was found.", title)
                        .if_supports_color(Stdout, |t| t.dimmed()),
                ),
            }
            Ok(())
        }
        (None, Some(genre)) => {
            let matches = manager.search_by_genre(&genre);
            if matches.is_empty() {
                println!(
                    "{}",
                    format!("No items found in the genre '{}'.", genre)
                        .if_supports_color(Stdout, |t| t.dimmed()),
                );
            } else {
                for item in matches {
                    println!("- {}", item.title);
                }
            }
            Ok(())
        }
        _ => Err(CliError::usage(
            "search needs exactly one of --title or --genre",
        )),
    }
}

fn run_borrow(manager: &mut CatalogManager, id: u32, member_name: &str) -> Result<(), CliError> {
    let mut member = Member::new(member_name);

    match manager.borrow_content(id, &mut member)? {
        BorrowOutcome::Borrowed => {
            let rental = &member.rentals[0];
            println!(
                "{} {} has borrowed: {} (on {})",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                member.name,
                rental.content_title.if_supports_color(Stdout, |t| t.bold()),
                rental.borrowed_on,
            );
        }
        BorrowOutcome::Unavailable => {
            println!(
                "{} The content is not available for borrowing.",
                "\u{2718}".if_supports_color(Stdout, |t| t.yellow()),
            );
        }
    }

    Ok(())
}

fn run_return(manager: &mut CatalogManager, id: u32, member_name: &str) -> Result<(), CliError> {
    let mut member = Member::new(member_name);

    match manager.process_return(id, &mut member)? {
        ReturnOutcome::Returned { on } => {
            let item = &member.history[0];
            println!(
                "{} {} has returned: {} (on {})",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                member.name,
                item.title.if_supports_color(Stdout, |t| t.bold()),
                on,
            );
        }
        ReturnOutcome::AlreadyAvailable => {
            println!(
                "{} Return failed: the item is not checked out.",
                "\u{2718}".if_supports_color(Stdout, |t| t.yellow()),
            );
        }
    }

    Ok(())
}

fn run_export(manager: &CatalogManager, output: &std::path::Path) -> Result<(), CliError> {
    append_summary_file(output, manager.inventory())?;
    println!(
        "{} Summary of {} items appended to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        manager.len(),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// One-line inventory entry: id, kind, title, year, availability.
fn print_summary_line(item: &ContentItem) {
    let status = if item.is_available() {
        format!("{}", "available".if_supports_color(Stdout, |t| t.green()))
    } else {
        format!("{}", "borrowed".if_supports_color(Stdout, |t| t.yellow()))
    };
    println!(
        "  {:>4}  {:<6}  {} ({})  [{}]",
        item.id(),
        item.kind.label(),
        item.title.if_supports_color(Stdout, |t| t.bold()),
        item.release_year,
        status,
    );
}

/// Full record dump, used for title search hits.
fn print_full_details(item: &ContentItem) {
    println!(
        "{} ({})",
        item.title.if_supports_color(Stdout, |t| t.bold()),
        item.release_year,
    );
    println!(
        "  {}    {}",
        "Id:".if_supports_color(Stdout, |t| t.cyan()),
        item.id(),
    );
    println!(
        "  {}  {}",
        "Director:".if_supports_color(Stdout, |t| t.cyan()),
        item.director,
    );
    println!(
        "  {}  {}",
        "Genres:".if_supports_color(Stdout, |t| t.cyan()),
        item.genres.join(", "),
    );
    println!(
        "  {}  {}",
        "About:".if_supports_color(Stdout, |t| t.cyan()),
        item.description,
    );
    match &item.kind {
        ContentKind::Movie {
            runtime_minutes,
            has_credit_scenes,
        } => {
            println!(
                "  {}  {} min{}",
                "Runtime:".if_supports_color(Stdout, |t| t.cyan()),
                runtime_minutes,
                if *has_credit_scenes {
                    " (stay for the credits)"
                } else {
                    ""
                },
            );
        }
        ContentKind::Series {
            total_episodes,
            episodes_per_season,
        } => {
            let seasons: Vec<String> = episodes_per_season
                .iter()
                .map(|(season, count)| format!("S{season}: {count}"))
                .collect();
            println!(
                "  {}  {} across {} seasons ({})",
                "Episodes:".if_supports_color(Stdout, |t| t.cyan()),
                total_episodes,
                episodes_per_season.len(),
                seasons.join(", "),
            );
        }
    }
    println!(
        "  {}  {}",
        "Status:".if_supports_color(Stdout, |t| t.cyan()),
        if item.is_available() {
            "available"
        } else {
            "borrowed"
        },
    );
}
