use chrono::Local;
use clap::Parser;
use log::{debug, info, warn};

use food_storage_rs::cli::Cli;
use food_storage_rs::config::AppConfig;
use food_storage_rs::error::{Result, StorageAppError};
use food_storage_rs::interface::{
    format_added, format_full, format_info, format_peek, format_removed, format_search_result,
    parse_best_before, prompt_best_before, prompt_food_name, prompt_menu_action,
    prompt_search_name, prompt_storage_mode, prompt_weight, MenuAction,
};
use food_storage_rs::logging::init_logging;
use food_storage_rs::models::FoodItem;
use food_storage_rs::storage::{create_storage, Storage};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli)?;
    init_logging(config.level_filter()?)?;

    let mode = match config.mode {
        Some(mode) => mode,
        None => prompt_storage_mode()?,
    };
    let mut storage = create_storage(mode.uses_opposite_door(), config.capacity);
    info!(
        "storage ready: mode={:?} capacity={}",
        storage.mode(),
        storage.capacity()
    );
    println!("{}", mode.door_description());

    loop {
        println!();
        let action = prompt_menu_action()?;
        debug!("menu action: {:?}", action);

        match action {
            MenuAction::Add => cmd_add(storage.as_mut(), &config)?,
            MenuAction::Remove => cmd_remove(storage.as_mut()),
            MenuAction::Peek => println!("{}", format_peek(storage.peek())),
            MenuAction::Display => println!("{}", storage.display()),
            MenuAction::Search => cmd_search(storage.as_ref())?,
            MenuAction::Info => println!("{}", format_info(storage.as_ref())),
            MenuAction::Exit => {
                println!("Exiting. Goodbye!");
                return Ok(());
            }
        }
    }
}

/// Collect a new item and place it in the bin.
fn cmd_add(storage: &mut dyn Storage, config: &AppConfig) -> Result<()> {
    if storage.is_full() {
        warn!("add refused: storage full at {}", storage.capacity());
        println!("{}", format_full(storage.capacity()));
        return Ok(());
    }

    let Some(name) = prompt_food_name(&config.allowed_foods)? else {
        return Ok(());
    };
    let weight = prompt_weight()?;

    let today = Local::now().date_naive();
    let input = prompt_best_before(today, config.max_shelf_days)?;
    let best_before = match parse_best_before(&input, today, config.max_shelf_days) {
        Ok(date) => date,
        Err(e @ (StorageAppError::InvalidDate(_) | StorageAppError::DateOutOfRange { .. })) => {
            warn!("add refused: {}", e);
            println!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let item = FoodItem::new(name, weight, best_before);
    let message = format_added(&item);
    if storage.add(item) {
        info!("added item, size now {}", storage.size());
        println!("{}", message);
    } else {
        warn!("add refused by storage");
        println!("Failed to add item (storage full or invalid item).");
    }
    Ok(())
}

fn cmd_remove(storage: &mut dyn Storage) {
    let removed = storage.remove();
    match &removed {
        Some(item) => info!("removed {}, size now {}", item.name(), storage.size()),
        None => warn!("remove on empty storage"),
    }
    println!("{}", format_removed(removed.as_ref()));
}

fn cmd_search(storage: &dyn Storage) -> Result<()> {
    let name = prompt_search_name()?;
    let distance = storage.search(&name);
    debug!("search '{}' -> {:?}", name, distance);
    println!("{}", format_search_result(storage.mode(), distance));
    Ok(())
}
