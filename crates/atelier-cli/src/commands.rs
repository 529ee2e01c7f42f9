//! Command implementations over the catalog service.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use atelier_authoring::{CategoryInput, EnquiryInput, JourneyInput};
use atelier_catalog::{CatalogConfig, CatalogService, JsonStore};
use atelier_cli::render::{category_summary_table, comparison_table, enquiry_table};

use crate::cli::{CategoryCommand, Cli, Command, EnquiryCommand, JourneyCommand};

pub fn run(cli: &Cli) -> Result<()> {
    let store = JsonStore::open(&cli.data_dir)
        .with_context(|| format!("open content store at {}", cli.data_dir.display()))?;
    let service = CatalogService::new(store, CatalogConfig::default());
    match &cli.command {
        Command::Category(command) => run_category(&service, command),
        Command::Journey(command) => run_journey(&service, command),
        Command::Enquiry(command) => run_enquiry(&service, command),
    }
}

fn run_category(service: &CatalogService<JsonStore>, command: &CategoryCommand) -> Result<()> {
    match command {
        CategoryCommand::Create(args) => {
            let input: CategoryInput = read_payload(&args.file)?;
            let category = service.create_category(&input)?;
            println!("Created category `{}`", category.id);
        }
        CategoryCommand::Update(args) => {
            let patch: CategoryInput = read_payload(&args.file)?;
            let category = service.update_category(&args.id, &patch)?;
            println!("Updated category `{}`", category.id);
        }
        CategoryCommand::Delete(args) => {
            service.delete_category(&args.id)?;
            println!("Deleted category `{}`", args.id);
        }
        CategoryCommand::List => {
            let categories = service.list_categories()?;
            if categories.is_empty() {
                println!("No categories yet.");
            } else {
                println!("{}", category_summary_table(&categories));
            }
        }
        CategoryCommand::Show(args) => {
            let category = service.get_category(&args.id)?;
            println!("{} — {}", category.label, category.heading);
            if !category.description.is_empty() {
                println!("{}", category.description);
            }
            if !category.tags.is_empty() {
                println!("Tags: {}", category.tags.join(", "));
            }
            println!("{}", comparison_table(&category));
        }
    }
    Ok(())
}

fn run_journey(service: &CatalogService<JsonStore>, command: &JourneyCommand) -> Result<()> {
    match command {
        JourneyCommand::Add(args) => {
            let input: JourneyInput = read_payload(&args.file)?;
            let entry = service.create_journey_entry(&input)?;
            println!("Added journey entry `{}`", entry.id);
        }
        JourneyCommand::Update(args) => {
            let patch: JourneyInput = read_payload(&args.file)?;
            let entry = service.update_journey_entry(&args.id, &patch)?;
            println!("Updated journey entry `{}`", entry.id);
        }
        JourneyCommand::Remove(args) => {
            service.delete_journey_entry(&args.id)?;
            println!("Removed journey entry `{}`", args.id);
        }
        JourneyCommand::List => {
            let entries = service.list_journey()?;
            if entries.is_empty() {
                println!("No journey entries yet.");
            }
            for entry in entries {
                if entry.period.is_empty() {
                    println!("{} ({})", entry.title, entry.id);
                } else {
                    println!("{} — {} ({})", entry.period, entry.title, entry.id);
                }
                for paragraph in &entry.paragraphs {
                    println!("  {paragraph}");
                }
            }
        }
    }
    Ok(())
}

fn run_enquiry(service: &CatalogService<JsonStore>, command: &EnquiryCommand) -> Result<()> {
    match command {
        EnquiryCommand::Submit(args) => {
            let input: EnquiryInput = read_payload(&args.file)?;
            let enquiry = service.submit_enquiry(&input)?;
            println!("Recorded enquiry `{}`", enquiry.id);
        }
        EnquiryCommand::List => {
            let enquiries = service.list_enquiries()?;
            if enquiries.is_empty() {
                println!("No enquiries yet.");
            } else {
                println!("{}", enquiry_table(&enquiries));
            }
        }
        EnquiryCommand::Remove(args) => {
            service.delete_enquiry(&args.id)?;
            println!("Removed enquiry `{}`", args.id);
        }
    }
    Ok(())
}

fn read_payload<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read payload {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse payload {}", path.display()))
}
