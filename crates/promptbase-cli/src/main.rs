//! Promptbase CLI - Store, search and curate prompts
//!
//! Thin client over the Promptbase HTTP API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Editor, Input};
use promptbase::SortOrder;
use std::fs;

use api::{PromptResponse, PromptbaseClient};
use config::Config;

#[derive(Parser)]
#[command(name = "promptbase")]
#[command(about = "Promptbase CLI - A simple app to store and retrieve prompts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a prompt
    Add {
        /// Prompt title (will prompt if not provided)
        title: Option<String>,
        /// Prompt body (or use -f for file)
        #[arg(short, long)]
        body: Option<String>,
        /// Read body from file
        #[arg(short, long)]
        file: Option<String>,
        /// Mark as favorite
        #[arg(long)]
        favorite: bool,
    },

    /// List prompts
    List {
        /// Only prompts whose title or body contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Sort order: most-recent, oldest, favorites
        #[arg(long, default_value = "most-recent")]
        sort: SortOrder,
    },

    /// Print a prompt body (clean for piping)
    Show {
        id: i32,
    },

    /// Edit a prompt's title and body
    Edit {
        id: i32,
        /// New title (keeps current if omitted)
        #[arg(short, long)]
        title: Option<String>,
        /// New body (or use -f for file; opens $EDITOR if neither is given)
        #[arg(short, long)]
        body: Option<String>,
        /// Read new body from file
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Toggle favorite
    Fav {
        id: i32,
    },

    /// Delete a prompt
    Rm {
        id: i32,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or change configuration
    Config {
        /// Set the API base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add { title, body, file, favorite } => cmd_add(title, body, file, favorite).await,
        Commands::List { search, sort } => cmd_list(search, sort).await,
        Commands::Show { id } => cmd_show(id).await,
        Commands::Edit { id, title, body, file } => cmd_edit(id, title, body, file).await,
        Commands::Fav { id } => cmd_fav(id).await,
        Commands::Rm { id, yes } => cmd_rm(id, yes).await,
        Commands::Config { base_url } => cmd_config(base_url).await,
    }
}

fn client() -> Result<PromptbaseClient> {
    let config = Config::load()?;
    Ok(PromptbaseClient::new(&config.base_url))
}

/// Resolve body from argument or file; `None` when neither was given
fn body_from_args(body: Option<String>, file: Option<String>) -> Result<Option<String>> {
    match (body, file) {
        (Some(b), None) => Ok(Some(b)),
        (None, Some(f)) => {
            let content = fs::read_to_string(&f)
                .with_context(|| format!("Failed to read file: {}", f))?;
            Ok(Some(content))
        }
        (Some(_), Some(_)) => {
            bail!("Cannot specify both --body and --file");
        }
        (None, None) => Ok(None),
    }
}

fn ensure_filled(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("Please fill in the {} field.", field);
    }
    Ok(())
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_add(
    title: Option<String>,
    body: Option<String>,
    file: Option<String>,
    favorite: bool,
) -> Result<()> {
    let title = match title {
        Some(t) => t,
        None => Input::new()
            .with_prompt("Title")
            .interact_text()
            .context("Failed to read input")?,
    };

    let body = match body_from_args(body, file)? {
        Some(b) => b,
        None => Input::new()
            .with_prompt("Prompt")
            .interact_text()
            .context("Failed to read input")?,
    };

    ensure_filled("title", &title)?;
    ensure_filled("prompt", &body)?;

    let prompt = client()?.create_prompt(&title, &body, favorite).await?;

    println!(
        "{} Prompt added: {} {}",
        "✓".green(),
        prompt.title.cyan(),
        format!("#{}", prompt.id).dimmed()
    );

    Ok(())
}

async fn cmd_list(search: Option<String>, sort: SortOrder) -> Result<()> {
    let prompts = client()?.list_prompts(search.as_deref(), sort).await?;

    if prompts.is_empty() {
        match search {
            Some(q) => println!("No prompts found for '{}'", q),
            None => println!("No prompts yet. Add one with: promptbase add"),
        }
        return Ok(());
    }

    println!("{} prompts ({}):", prompts.len().to_string().green(), sort);
    for prompt in &prompts {
        print_summary(prompt);
    }

    Ok(())
}

fn print_summary(prompt: &PromptResponse) {
    let star = if prompt.is_favorite { "⭐" } else { "  " };
    println!(
        "{} {} {} {}",
        star,
        format!("#{:<4}", prompt.id).dimmed(),
        prompt.title.cyan().bold(),
        format_timestamp(&prompt.created_at).dimmed()
    );
    println!("        {}", truncate_string(&first_line(&prompt.prompt), 70).dimmed());
}

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

async fn cmd_show(id: i32) -> Result<()> {
    let prompt = client()?.get_prompt(id).await?;

    // Title to stderr so stdout is clean for piping
    eprintln!(
        "{} {}",
        prompt.title.cyan().bold(),
        format!("(updated {})", format_timestamp(&prompt.updated_at)).dimmed()
    );
    println!("{}", prompt.prompt);

    Ok(())
}

async fn cmd_edit(
    id: i32,
    title: Option<String>,
    body: Option<String>,
    file: Option<String>,
) -> Result<()> {
    let client = client()?;
    let current = client.get_prompt(id).await?;

    let new_title = title.unwrap_or(current.title);
    let new_body = match body_from_args(body, file)? {
        Some(b) => b,
        None => Editor::new()
            .edit(&current.prompt)
            .context("Failed to open editor")?
            .unwrap_or(current.prompt),
    };

    ensure_filled("title", &new_title)?;
    ensure_filled("prompt", &new_body)?;

    let updated = client.update_prompt(id, &new_title, &new_body).await?;
    println!("{} Prompt updated successfully! {}", "✓".green(), updated.title.cyan());

    Ok(())
}

async fn cmd_fav(id: i32) -> Result<()> {
    let prompt = client()?.toggle_favorite(id).await?;

    if prompt.is_favorite {
        println!("⭐ {} marked as favorite", prompt.title.cyan());
    } else {
        println!("{} {} removed from favorites", "✓".green(), prompt.title.cyan());
    }

    Ok(())
}

async fn cmd_rm(id: i32, yes: bool) -> Result<()> {
    let client = client()?;

    if !yes {
        let prompt = client.get_prompt(id).await?;
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{}'? This cannot be undone", prompt.title))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    client.delete_prompt(id).await?;
    println!("{} Prompt {} deleted", "✓".green(), id);

    Ok(())
}

async fn cmd_config(base_url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(url) = base_url {
        config.set_base_url(&url);
        config.save()?;
        println!("{} Base URL saved to {:?}", "✓".green(), Config::config_path()?);
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);

    let reachable = PromptbaseClient::new(&config.base_url)
        .health()
        .await
        .unwrap_or(false);
    println!(
        "  API: {}",
        if reachable { "Reachable".green() } else { "Unreachable".red() }
    );

    Ok(())
}

fn first_line(s: &str) -> String {
    s.lines().next().unwrap_or_default().to_string()
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("こんにちは世界", 5), "こんにちは...");
        assert_eq!(truncate_string("short", 10), "short");
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("line one\nline two"), "line one");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn test_body_from_args_rejects_both() {
        assert!(body_from_args(Some("b".into()), Some("f.txt".into())).is_err());
        assert_eq!(body_from_args(None, None).unwrap(), None);
        assert_eq!(body_from_args(Some("b".into()), None).unwrap(), Some("b".into()));
    }

    #[test]
    fn test_ensure_filled() {
        assert!(ensure_filled("title", "  ").is_err());
        assert!(ensure_filled("title", "ok").is_ok());
    }

    #[test]
    fn test_format_timestamp() {
        let at = DateTime::parse_from_rfc3339("2024-03-05T09:07:30Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(&at), "2024-03-05 09:07");
    }

    #[test]
    fn test_sort_flag_parses() {
        let cli = Cli::try_parse_from(["promptbase", "list", "--sort", "favorites", "-s", "hello"])
            .unwrap();
        match cli.command {
            Commands::List { search, sort } => {
                assert_eq!(search.as_deref(), Some("hello"));
                assert_eq!(sort, SortOrder::Favorites);
            }
            _ => panic!("expected list command"),
        }
    }
}
