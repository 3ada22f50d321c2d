use clap::Parser;
use discshelf::application::{
    add_entry, collection_stats, edit_entry, export_backup, import_backup, init, list_entries,
    ownership_status, remove_entry, ConfigService,
};
use discshelf::cli::{
    format_count, format_entry_list, format_ownership, format_stats, Cli, Commands,
};
use discshelf::domain::{EntryDraft, EntryPatch, ImportMode, SortMode};
use discshelf::error::DiscshelfError;
use discshelf::infrastructure::LibraryRepository;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DiscshelfError> {
    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::Add {
            title,
            media,
            purchased,
            memo,
        } => {
            let repo = LibraryRepository::discover()?;
            let entry = add_entry(
                &repo,
                EntryDraft {
                    title,
                    media_type: media,
                    purchase_date: purchased.unwrap_or_default(),
                    memo,
                },
            )?;
            println!("Added \"{}\" ({})", entry.title, entry.id);
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            media,
            purchased,
            memo,
        } => {
            let repo = LibraryRepository::discover()?;
            let patch = EntryPatch {
                title,
                media_type: media,
                purchase_date: purchased,
                memo,
            };
            match edit_entry(&repo, &id, patch)? {
                Some(entry) => println!("Updated \"{}\" ({})", entry.title, entry.id),
                None => println!("No entry with id {}", id),
            }
            Ok(())
        }
        Commands::Remove { id } => {
            let repo = LibraryRepository::discover()?;
            if remove_entry(&repo, &id)? {
                println!("Removed {}", id);
            } else {
                println!("No entry with id {}", id);
            }
            Ok(())
        }
        Commands::List { search, media, sort } => {
            let repo = LibraryRepository::discover()?;
            let sort = sort
                .map(|s| SortMode::from_str(&s))
                .transpose()
                .map_err(DiscshelfError::Config)?;
            let entries = list_entries(&repo, &search, &media, sort)?;
            println!("{}", format_entry_list(&entries));
            Ok(())
        }
        Commands::Stats => {
            let repo = LibraryRepository::discover()?;
            let stats = collection_stats(&repo)?;
            print!("{}", format_stats(&stats));
            Ok(())
        }
        Commands::Owned { title } => {
            let repo = LibraryRepository::discover()?;
            let entry = ownership_status(&repo, &title)?;
            println!("{}", format_ownership(&title, entry.as_ref()));
            Ok(())
        }
        Commands::Export { output } => {
            let repo = LibraryRepository::discover()?;
            let (count, path) = export_backup(&repo, output)?;
            println!("Exported {} to {}", format_count(count), path.display());
            Ok(())
        }
        Commands::Import { file, merge } => {
            let repo = LibraryRepository::discover()?;
            let mode = if merge {
                ImportMode::Merge
            } else {
                ImportMode::Replace
            };
            let count = import_backup(&repo, &file, mode)?;
            println!("Imported {}", format_count(count));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = LibraryRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("default_sort = {}", config.default_sort.as_str());
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: discshelf config [--list | <key> [<value>]]");
                println!("Valid keys: default_sort, created");
                Ok(())
            }
        }
    }
}
