use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;

use anyhow::Result;
use clap::{Parser, Subcommand};

use chefai_core::assistant::{parse_recipe_payload, ConversationEngine, WELCOME};
use chefai_core::{Catalog, FilterState, Recipe, SystemClock};

#[derive(Parser)]
#[command(name = "chefai")]
#[command(about = "Chef AI from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the scripted recipe assistant
    Chat {
        /// Skip the fake "thinking" delays
        #[arg(long)]
        fast: bool,
    },
    /// Browse the catalog with the same filters the app uses
    Browse {
        /// Category tab: food | desserts | drinks
        #[arg(long)]
        category: Option<String>,
        /// Subcategory id within the category
        #[arg(long)]
        subcategory: Option<String>,
        /// Cuisine, matched case-insensitively
        #[arg(long)]
        cuisine: Option<String>,
        /// Free-text search over title and description
        #[arg(long)]
        search: Option<String>,
    },
    /// Dump the built-in catalog as JSON
    Export,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { fast } => chat(fast)?,
        Commands::Browse {
            category,
            subcategory,
            cuisine,
            search,
        } => browse(category, subcategory, cuisine, search),
        Commands::Export => export()?,
    }

    Ok(())
}

fn chat(fast: bool) -> Result<()> {
    let engine = ConversationEngine::new(Catalog::builtin(), Arc::new(SystemClock));
    let mut conversation = engine.new_conversation();

    println!("chef> {WELCOME}");
    println!("(empty line to quit)");

    let stdin = io::stdin();
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            break;
        }

        for reply in engine.respond(&mut conversation, input) {
            if !fast {
                thread::sleep(reply.delay);
            }
            render_bot_message(&reply.message.content);
        }
    }

    Ok(())
}

/// Messages that parse as a recipe render as a card; everything else
/// (including malformed JSON) falls back to plain text.
fn render_bot_message(content: &str) {
    match parse_recipe_payload(content) {
        Some(recipe) => render_recipe(&recipe),
        None => println!("chef> {content}"),
    }
}

fn render_recipe(recipe: &Recipe) {
    println!("chef> ── {} ──", recipe.title);
    println!("      {}", recipe.description);
    println!(
        "      {} · {:?} · {} min · serves {}",
        recipe.cuisine,
        recipe.difficulty,
        recipe.prep_time_minutes + recipe.cook_time_minutes,
        recipe.servings
    );
    println!("      Ingredients:");
    for ingredient in &recipe.ingredients {
        match &ingredient.unit {
            Some(unit) => println!("        - {} {} {}", ingredient.quantity, unit, ingredient.name),
            None => println!("        - {} {}", ingredient.quantity, ingredient.name),
        }
    }
    println!("      Steps:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("        {}. {}", i + 1, step);
    }
}

fn browse(
    category: Option<String>,
    subcategory: Option<String>,
    cuisine: Option<String>,
    search: Option<String>,
) {
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    if let Some(category) = &category {
        pairs.push(("category", category.as_str()));
    }
    if let Some(subcategory) = &subcategory {
        pairs.push(("subcategory", subcategory.as_str()));
    }
    if let Some(cuisine) = &cuisine {
        pairs.push(("cuisine", cuisine.as_str()));
    }
    if let Some(search) = &search {
        pairs.push(("search", search.as_str()));
    }

    let filters = FilterState::from_query(pairs);
    let catalog = Catalog::builtin();
    let visible = filters.visible_recipes(catalog);

    if visible.is_empty() {
        println!("No recipes match.");
        return;
    }

    for recipe in visible {
        let premium = if recipe.is_premium_only { " [premium]" } else { "" };
        println!(
            "{:<22} {:<10} {:<10} {}{}",
            recipe.id,
            recipe.category.key(),
            recipe.cuisine,
            recipe.title,
            premium
        );
    }
}

fn export() -> Result<()> {
    let catalog = Catalog::builtin();
    let json = serde_json::to_string_pretty(catalog.recipes())?;
    println!("{json}");
    Ok(())
}
