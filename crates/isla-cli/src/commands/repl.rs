//! Interactive session.
//!
//! Plain lines are questions for the guide; lines starting with `/` are
//! navigation commands.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use super::render;
use isla_application::chat_panel::APOLOGY;
use isla_application::view_state::CATALOG_LOAD_FAILED;
use isla_application::{Explorer, SubmitOutcome};
use isla_core::chat::MessageRole;
use isla_core::island::Island;

/// A slash command: name, argument placeholder, help text.
struct SlashCommand {
    name: &'static str,
    argument: Option<&'static str>,
    help: &'static str,
}

static COMMANDS: [SlashCommand; 7] = [
    SlashCommand {
        name: "/islands",
        argument: None,
        help: "list islands",
    },
    SlashCommand {
        name: "/select",
        argument: Some("<id>"),
        help: "focus the guide on one island",
    },
    SlashCommand {
        name: "/show",
        argument: None,
        help: "show the selected island",
    },
    SlashCommand {
        name: "/close",
        argument: None,
        help: "back to all islands",
    },
    SlashCommand {
        name: "/reload",
        argument: None,
        help: "reload the catalog",
    },
    SlashCommand {
        name: "/help",
        argument: None,
        help: "this list",
    },
    SlashCommand {
        name: "/quit",
        argument: None,
        help: "exit",
    },
];

fn find_command(name: &str) -> Option<&'static SlashCommand> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Completes command names, and island ids as the argument of `/select`.
struct IslandHelper {
    island_ids: Vec<String>,
}

impl IslandHelper {
    /// Words that can complete the token ending at the cursor, and where
    /// that token starts.
    fn words_for<'a>(&'a self, line: &'a str) -> (usize, Vec<&'a str>, &'a str) {
        match line.split_once(' ') {
            Some(("/select", partial)) if !partial.contains(' ') => (
                line.len() - partial.len(),
                self.island_ids.iter().map(String::as_str).collect(),
                partial,
            ),
            Some(_) => (line.len(), Vec::new(), ""),
            None if line.starts_with('/') => {
                (0, COMMANDS.iter().map(|command| command.name).collect(), line)
            }
            None => (line.len(), Vec::new(), ""),
        }
    }
}

impl Helper for IslandHelper {}

impl Completer for IslandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words, partial) = self.words_for(&line[..pos]);
        let candidates = words
            .into_iter()
            .filter(|word| word.starts_with(partial))
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Highlighter for IslandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let Some(rest) = line.strip_prefix('/') else {
            return Borrowed(line);
        };
        let (word, tail) = rest.split_once(' ').unwrap_or((rest, ""));
        let name = format!("/{word}");
        let coloured = if find_command(&name).is_some() {
            name.bright_cyan()
        } else {
            name.yellow()
        };
        if tail.is_empty() && !rest.contains(' ') {
            Owned(coloured.to_string())
        } else {
            Owned(format!("{coloured} {tail}"))
        }
    }

    fn highlight_char(&self, line: &str, _pos: usize, _forced: bool) -> bool {
        line.starts_with('/')
    }
}

impl Hinter for IslandHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (_, words, partial) = self.words_for(line);
        if partial.is_empty() {
            return None;
        }
        let word = words
            .into_iter()
            .find(|word| word.starts_with(partial) && word.len() > partial.len())?;
        let argument = find_command(word)
            .and_then(|command| command.argument)
            .map(|argument| format!(" {argument}"))
            .unwrap_or_default();
        Some(format!("{}{}", &word[partial.len()..], argument))
    }
}

impl Validator for IslandHelper {}

fn print_help() {
    println!("{}", "Ask anything about the islands, or use:".dimmed());
    for command in &COMMANDS {
        let usage = match command.argument {
            Some(argument) => format!("{} {}", command.name, argument),
            None => command.name.to_string(),
        };
        println!("  {} {}", format!("{usage:<14}").bright_cyan(), command.help);
    }
}

async fn print_latest_guide_message(explorer: &Explorer) {
    let transcript = explorer.chat().transcript().await;
    if let Some(message) = transcript
        .iter()
        .rev()
        .find(|message| message.role == MessageRole::Assistant)
    {
        println!("{}", message.content.bright_green());
    }
}

fn island_ids(islands: &[Island]) -> Vec<String> {
    islands.iter().map(|island| island.id.clone()).collect()
}

pub async fn run(explorer: &Explorer) -> Result<()> {
    let mut helper = IslandHelper {
        island_ids: Vec::new(),
    };
    match explorer.start().await {
        Ok(islands) => helper.island_ids = island_ids(&islands),
        Err(e) => {
            tracing::warn!(target: "catalog", "Catalog load failed: {}", e);
            println!("{}", CATALOG_LOAD_FAILED.red());
        }
    }

    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== ISLA ===".bright_magenta().bold());
    let session = explorer.chat().session();
    println!(
        "{}",
        format!("session {} (started {})", session.id, session.started_at).dimmed()
    );
    print_latest_guide_message(explorer).await;
    println!("{}", "Type /help for commands.".dimmed());

    loop {
        let prompt = match explorer.coordinator().current_scope().await.island_id() {
            Some(id) => format!("isla [{id}]> "),
            None => "isla> ".to_string(),
        };

        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match trimmed.split_once(' ').unwrap_or((trimmed, "")) {
                    ("/quit" | "/exit", _) => break,
                    ("/help", _) => print_help(),
                    ("/islands", _) => {
                        let catalog = explorer.catalog_state().await;
                        for island in catalog.islands() {
                            println!("{}", render::island_line(island));
                        }
                    }
                    ("/reload", _) => match explorer.reload().await {
                        Ok(islands) => {
                            println!("{}", format!("Loaded {} islands", islands.len()).green());
                            if let Some(helper) = rl.helper_mut() {
                                helper.island_ids = island_ids(&islands);
                            }
                        }
                        Err(_) => println!("{}", CATALOG_LOAD_FAILED.red()),
                    },
                    ("/select", id) if !id.trim().is_empty() => {
                        match explorer.select_island(id.trim()).await {
                            // The species list fills in behind the prompt
                            Ok(_selection) => print_latest_guide_message(explorer).await,
                            Err(e) if e.is_not_found() => println!(
                                "{}",
                                format!("No island '{}'. Try /islands", id.trim()).yellow()
                            ),
                            Err(e) => println!("{}", e.to_string().red()),
                        }
                    }
                    ("/select", _) => println!("{}", "Usage: /select <island id>".yellow()),
                    ("/show", _) => match explorer.detail().await {
                        Some(detail) => render::print_detail(&detail),
                        None => println!("{}", "No island selected".yellow()),
                    },
                    ("/close", _) => {
                        explorer.close_island().await;
                        println!("{}", "Back to all islands".dimmed());
                    }
                    (command, _) if command.starts_with('/') => {
                        println!("{}", format!("Unknown command: {command}").yellow());
                    }
                    _ => match explorer.ask(trimmed).await {
                        SubmitOutcome::Answered(text) => println!("{}", text.bright_green()),
                        SubmitOutcome::Failed => println!("{}", APOLOGY.red()),
                        SubmitOutcome::Busy => {
                            println!("{}", "Still waiting for the previous answer".yellow())
                        }
                        SubmitOutcome::Superseded => {
                            println!("{}", "(reply dropped after the island changed)".dimmed())
                        }
                        SubmitOutcome::Empty => {}
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type /quit to exit.".yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
