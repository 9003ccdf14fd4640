use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use gmk_application::{
    error::{AppError, BError},
    prelude::*,
};
use gmk_core::{
    gateways::{confirm::ConfirmationGateway, search::SelectedPlace},
    usecases,
};
use gmk_db_jfs::JfsLocationStore;
use gmk_gateways::{
    confirm::{PresetConfirm, TerminalConfirm},
    console::{ConsoleMapWidget, ConsoleSidebar},
    search::NullPlaceSearch,
};

use crate::cfg::Cfg;

#[derive(Debug, Parser)]
#[command(name = "geomarks", version, about = "Save, project and export map locations")]
struct Args {
    /// Directory holding the persistent store
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Save a location
    Add {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Remove the first saved location at the given position
    Remove {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
    /// List the saved locations
    List,
    /// Remove all saved locations, markers and the persisted snapshot
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Export the saved locations as a JSON file
    Export {
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,
    },
    /// Feed a place-search selection through the confirmation gate
    Select {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// Formatted address of the selected place
        #[arg(long)]
        address: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show the marker details for a position
    Show {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
}

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let cfg = Cfg::load(args.config.as_deref())?;
    let data_dir = args.data_dir.unwrap_or_else(|| cfg.data_dir.clone());
    let store = JfsLocationStore::try_new(&data_dir)
        .with_context(|| format!("Cannot open data directory {}", data_dir.display()))?;
    let mut ctx = AppContext::start(
        Box::new(store),
        Box::new(ConsoleMapWidget),
        Box::new(ConsoleSidebar),
        cfg.viewport()?,
    );

    match args.command {
        Command::Add {
            lat,
            lng,
            description,
        } => {
            let location = add_location(
                &mut ctx,
                usecases::NewLocation {
                    lat,
                    lng,
                    description,
                },
            )?;
            println!("Saved \"{}\" at {}", location.description, location.pos);
        }
        Command::Remove { lat, lng } => {
            if remove_location(&mut ctx, lat, lng)? {
                println!("Removed the saved location at {lat},{lng}");
            } else {
                println!("No saved location at {lat},{lng}");
            }
        }
        Command::List => {
            ctx.render_sidebar();
        }
        Command::Clear { yes } => {
            if yes || TerminalConfirm.confirm("Clear all saved locations?") {
                clear_locations(&mut ctx);
            } else {
                println!("Aborted.");
            }
        }
        Command::Export { path } => match export_locations(&ctx, path.as_deref()) {
            Ok(path) => println!("Exported saved locations to {}", path.display()),
            Err(AppError::Business(BError::Parameter(usecases::Error::EmptyRegistry))) => {
                println!("There are no saved locations to export.");
            }
            Err(err) => return Err(err.into()),
        },
        Command::Select {
            lat,
            lng,
            address,
            yes,
        } => {
            let selection = SelectedPlace {
                lat,
                lng,
                formatted_address: address,
            };
            let confirm: Box<dyn ConfirmationGateway> = if yes {
                Box::new(PresetConfirm(true))
            } else {
                Box::new(TerminalConfirm)
            };
            match handle_place_selection(&mut ctx, selection, &*confirm, &NullPlaceSearch)? {
                Some(location) => {
                    println!("Saved \"{}\" at {}", location.description, location.pos)
                }
                None => println!("Not saved."),
            }
        }
        Command::Show { lat, lng } => {
            if !show_location_details(&ctx, lat, lng)? {
                println!("No marker at {lat},{lng}");
            }
        }
    }
    Ok(())
}
