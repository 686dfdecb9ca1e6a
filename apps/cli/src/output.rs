use app_api::{FuelingsResponse, OwnersResponse, SettingsResponse};
use fuel_app::ApiError;
use fuel_core::{ConsumptionPoint, ConsumptionStats, FuelingRecord, MonthlySpend};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_error(err: &ApiError, json: bool) {
    if json && let Ok(body) = serde_json::to_string_pretty(err) {
        eprintln!("{body}");
        return;
    }
    if err.retryable {
        eprintln!("error: {} (try again)", err.message);
    } else {
        eprintln!("error: {}", err.message);
    }
}

fn format_consumption(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |value| format!("{value:.2}"))
}

fn record_line(record: &FuelingRecord) -> String {
    let mut line = format!(
        "{}  {}  {:>10.1}  {:>8.2}  {:>9.2}  {:>7}",
        record.id,
        record.date,
        record.odometer,
        record.volume,
        record.total_cost,
        format_consumption(record.consumption),
    );
    if let Some(station) = &record.station {
        line.push_str("  ");
        line.push_str(station);
    }
    line
}

pub fn print_record(record: &FuelingRecord, json: bool) -> serde_json::Result<()> {
    if json {
        return print_json(record);
    }
    println!("{}", record_line(record));
    Ok(())
}

pub fn print_fuelings(listed: &FuelingsResponse, json: bool) -> serde_json::Result<()> {
    if json {
        return print_json(listed);
    }
    if listed.records.is_empty() {
        println!("No fill-ups recorded for {}.", listed.owner_id);
        return Ok(());
    }
    for record in &listed.records {
        println!("{}", record_line(record));
    }
    Ok(())
}

pub fn print_stats(stats: &ConsumptionStats, json: bool) -> serde_json::Result<()> {
    if json {
        return print_json(stats);
    }
    println!("Fill-ups:            {}", stats.record_count);
    println!("Average consumption: {:.2}", stats.average_consumption);
    println!("Total distance:      {:.1}", stats.total_distance);
    println!("Total volume:        {:.2}", stats.total_volume);
    println!("Total spend:         {:.2}", stats.total_spend);
    Ok(())
}

pub fn print_monthly(months: &[MonthlySpend], json: bool) -> serde_json::Result<()> {
    if json {
        return print_json(&months);
    }
    for month in months {
        println!("{}  {:>10.2}", month.month, month.total_cost);
    }
    Ok(())
}

pub fn print_series(series: &[ConsumptionPoint], json: bool) -> serde_json::Result<()> {
    if json {
        return print_json(&series);
    }
    for point in series {
        println!(
            "{}  {:>10.1}  {:>7.2}",
            point.date, point.odometer, point.consumption
        );
    }
    Ok(())
}

pub fn print_owners(owners: &OwnersResponse, json: bool) -> serde_json::Result<()> {
    if json {
        return print_json(owners);
    }
    for owner in &owners.owners {
        let marker = if owners.default_owner.as_deref() == Some(owner.owner_id.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {}  {:>5} fill-ups  latest {:.1}",
            owner.owner_id, owner.record_count, owner.latest_odometer
        );
    }
    Ok(())
}

pub fn print_settings(settings: &SettingsResponse, json: bool) -> serde_json::Result<()> {
    if json {
        return print_json(settings);
    }
    println!(
        "Default owner: {}",
        settings.default_owner.as_deref().unwrap_or("(none)")
    );
    println!("Database:      {}", settings.db_path);
    Ok(())
}
