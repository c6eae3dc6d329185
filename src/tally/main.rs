use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tally::api::{CmdMessage, CmdStatus, ConfigAction, LedgerApi, MessageLevel};
use tally::config::TallyConfig;
use tally::error::{Result, TallyError};
use tally::model::{Item, User};
use tally::store::fs::FileStore;
use uuid::Uuid;

mod args;
use args::{Cli, Commands};

fn main() {
    match run() {
        Ok(CmdStatus::Success) => {}
        Ok(CmdStatus::Error) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<CmdStatus> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.store_dir.clone())?;
    let store = FileStore::open(&data_dir)?;
    let mut api = LedgerApi::new(store, data_dir.clone());

    match cli.command {
        Commands::Config { key, value } => handle_config(&api, key, value),
        Commands::List => handle_list(&api),
        command => {
            let user = resolve_user(&mut api, cli.user, &data_dir)?;
            handle_mutation(&mut api, &user, command)
        }
    }
}

fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }
    if let Ok(dir) = std::env::var("TALLY_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "tally", "tally")
        .ok_or_else(|| TallyError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// Pick the acting user: --user flag, then configured default, then prompt.
/// Login creates the user on first use.
fn resolve_user(
    api: &mut LedgerApi<FileStore>,
    flag: Option<String>,
    data_dir: &Path,
) -> Result<User> {
    let username = match flag {
        Some(name) => name,
        None => match TallyConfig::load(data_dir)?.default_user {
            Some(name) => name,
            None => prompt_line("Enter username: "),
        },
    };

    let result = api.login(&username)?;
    print_messages(&result.messages);
    result
        .user
        .ok_or_else(|| TallyError::Api(format!("Could not log in as {username}")))
}

fn handle_mutation(
    api: &mut LedgerApi<FileStore>,
    user: &User,
    command: Commands,
) -> Result<CmdStatus> {
    match command {
        Commands::Log {
            item_id,
            action,
            amount,
        } => print_result(api.log_transaction(user, Some(item_id), Some(action), Some(amount))?),
        Commands::Create {
            name,
            quantity,
            price,
        } => print_result(api.create_item(user, &name, quantity, price)?),
        Commands::Update {
            item_id,
            name,
            quantity,
            price,
        } => {
            let (name, quantity, price) = source_update_fields(api, item_id, name, quantity, price)?;
            print_result(api.update_item(
                user,
                Some(item_id),
                Some(name),
                Some(quantity),
                Some(price),
            )?)
        }
        Commands::Delete { item_id } => print_result(api.delete_item(user, item_id)?),
        Commands::List | Commands::Config { .. } => unreachable!("handled in run"),
    }
}

/// Interactively source any update field the flags left out. The core only
/// accepts a fully resolved triple; the retry-on-bad-input loop lives here.
fn source_update_fields(
    api: &LedgerApi<FileStore>,
    item_id: Uuid,
    name: Option<String>,
    quantity: Option<i64>,
    price: Option<f64>,
) -> Result<(String, i64, f64)> {
    if name.is_none() || quantity.is_none() || price.is_none() {
        if let Some(current) = api
            .list_items()?
            .listed_items
            .into_iter()
            .find(|item| item.id == item_id)
        {
            println!(
                "Current item: {} {} {}",
                current.name, current.quantity, current.price
            );
        }
    }

    let name = name.unwrap_or_else(|| prompt_line("Enter new name: "));
    let quantity = quantity.unwrap_or_else(|| prompt_parse("quantity", "Enter the quantity: "));
    let price = price.unwrap_or_else(|| prompt_parse("price", "Enter the price: "));
    Ok((name, quantity, price))
}

fn handle_list(api: &LedgerApi<FileStore>) -> Result<CmdStatus> {
    let result = api.list_items()?;
    print_items(&result.listed_items);
    print_messages(&result.messages);
    Ok(result.status)
}

fn handle_config(
    api: &LedgerApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<CmdStatus> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("user"), None) => ConfigAction::ShowUser,
        (Some("user"), Some(v)) => ConfigAction::SetUser(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(CmdStatus::Success);
        }
    };

    let result = api.config(action)?;
    print_messages(&result.messages);
    Ok(result.status)
}

fn print_result(result: tally::api::CmdResult) -> Result<CmdStatus> {
    print_messages(&result.messages);
    Ok(result.status)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }
    for item in items {
        println!(
            "Item ID: {}, Name: {}, Quantity: {}, Price: ${:.2}, Owner: {}",
            item.id, item.name, item.quantity, item.price, item.owner
        );
    }
}

fn prompt_line(prompt: &str) -> String {
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => {
                eprintln!("Input stream closed.");
                std::process::exit(1);
            }
            Ok(_) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
            }
        }
    }
}

fn prompt_parse<T: FromStr>(field: &str, prompt: &str) -> T {
    loop {
        match prompt_line(prompt).parse::<T>() {
            Ok(value) => return value,
            Err(_) => println!("Invalid input for {field}, please try again."),
        }
    }
}
