mod cli;
mod config;
mod dirs;
mod output;

use std::io;
use std::process::ExitCode;

use app_api::{
    AppContext, CreateFuelingRequest, DeleteFuelingRequest, OwnerRequest, SettingsPutRequest,
    UpdateFuelingRequest,
};
use clap::Parser;
use fuel_app::{ApiError, AppError, AppPaths, AppState, ensure_app_data_dir};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let json = cli.json;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast::<AppError>() {
            Ok(err) => {
                let api = ApiError::from(*err);
                output::print_error(&api, json);
                ExitCode::FAILURE
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_or_create().map_err(io::Error::other)?;
    if config.created {
        eprintln!("Created config at {}.", config.file.display());
    }

    let configured_dir = cli.data_dir.as_deref().or(config.config.data_dir.as_deref());
    let data_dir = dirs::resolve_data_dir(configured_dir).map_err(io::Error::other)?;
    debug!(
        dir = %data_dir.dir.display(),
        existing = data_dir.matched_existing,
        "resolved data dir"
    );

    let paths = AppPaths::new(data_dir.dir.clone());
    ensure_app_data_dir(&paths)?;
    let app_state = AppState::new(paths.db_path);
    app_state.setup_db()?;

    let ctx = AppContext {
        app_state,
        app_data_dir: data_dir.dir,
    };
    let owner_id = cli.owner.or(config.config.default_owner);
    let owner = || OwnerRequest {
        owner_id: owner_id.clone(),
    };

    match cli.command {
        Command::Add(fields) => {
            let record = app_api::fuelings_create(
                &ctx,
                CreateFuelingRequest {
                    owner_id: owner_id.clone(),
                    date: fields.date,
                    odometer: fields.odometer,
                    price_per_unit_volume: fields.price,
                    total_cost: fields.cost,
                    station: fields.station,
                },
            )?;
            output::print_record(&record, cli.json)?;
        }
        Command::Edit { id, fields } => {
            let record = app_api::fuelings_update(
                &ctx,
                UpdateFuelingRequest {
                    owner_id: owner_id.clone(),
                    id,
                    date: fields.date,
                    odometer: fields.odometer,
                    price_per_unit_volume: fields.price,
                    total_cost: fields.cost,
                    station: fields.station,
                },
            )?;
            output::print_record(&record, cli.json)?;
        }
        Command::Delete { id } => {
            let deleted = app_api::fuelings_delete(
                &ctx,
                DeleteFuelingRequest {
                    owner_id: owner_id.clone(),
                    id: id.clone(),
                },
            )?;
            if cli.json {
                output::print_json(&deleted)?;
            } else {
                println!("Deleted {id}.");
            }
        }
        Command::List => {
            let listed = app_api::fuelings_list(&ctx, owner())?;
            output::print_fuelings(&listed, cli.json)?;
        }
        Command::Stats => {
            let stats = app_api::stats_summary(&ctx, owner())?;
            output::print_stats(&stats, cli.json)?;
        }
        Command::Monthly => {
            let months = app_api::stats_monthly_spend(&ctx, owner())?;
            output::print_monthly(&months, cli.json)?;
        }
        Command::Series => {
            let series = app_api::stats_consumption_series(&ctx, owner())?;
            output::print_series(&series, cli.json)?;
        }
        Command::Owners => {
            let owners = app_api::owners_list(&ctx)?;
            output::print_owners(&owners, cli.json)?;
        }
        Command::DefaultOwner { value } => {
            let settings = match value {
                Some(value) => app_api::settings_put(
                    &ctx,
                    SettingsPutRequest {
                        default_owner: Some(value),
                    },
                )?,
                None => app_api::settings_get(&ctx)?,
            };
            output::print_settings(&settings, cli.json)?;
        }
        Command::Recalc => {
            let updated = app_api::fuelings_recalculate(&ctx, owner())?;
            if cli.json {
                output::print_json(&updated)?;
            } else {
                println!("Rewrote {} consumption values.", updated.updated);
            }
        }
        Command::Clear { yes } => {
            if !yes {
                return Err(AppError::InvalidInput(
                    "refusing to clear records without --yes".to_string(),
                )
                .into());
            }
            let cleared = app_api::fuelings_clear(&ctx, owner())?;
            if cli.json {
                output::print_json(&cleared)?;
            } else {
                println!("Removed {} fill-ups.", cleared.cleared);
            }
        }
    }

    Ok(())
}
