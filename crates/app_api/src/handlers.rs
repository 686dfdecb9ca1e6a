use chrono::NaiveDate;
use fuel_app::{AppError, Result};
use fuel_core::{
    ConsumptionPoint, ConsumptionStats, FuelingEdit, FuelingRecord, MonthlySpend, NewFueling,
    latest_odometer, parse_date,
};

use crate::{
    AppContext, ClearedResponse, CreateFuelingRequest, DeleteFuelingRequest, DeletedResponse,
    FuelingsResponse, OwnerRequest, OwnersResponse, SettingsPutRequest, SettingsResponse,
    UpdateFuelingRequest, UpdatedResponse,
};

/// Explicit owner first, then the stored default owner.
fn resolve_owner(ctx: &AppContext, owner_id: Option<String>) -> Result<String> {
    if let Some(owner_id) = owner_id.filter(|value| !value.trim().is_empty()) {
        return Ok(owner_id.trim().to_string());
    }
    ctx.app_state
        .services
        .settings
        .get()?
        .default_owner
        .ok_or_else(|| AppError::InvalidInput("no owner given and no default owner set".to_string()))
}

fn parse_request_date(value: &str) -> Result<NaiveDate> {
    parse_date(value)
        .map_err(|err| AppError::InvalidInput(format!("invalid date {}: {}", value, err)))
}

pub fn fuelings_list(ctx: &AppContext, req: OwnerRequest) -> Result<FuelingsResponse> {
    let owner_id = resolve_owner(ctx, req.owner_id)?;
    let records = ctx.app_state.services.fuelings.list(&owner_id)?;
    Ok(FuelingsResponse {
        latest_odometer: latest_odometer(&records),
        owner_id,
        records,
    })
}

pub fn fuelings_create(ctx: &AppContext, req: CreateFuelingRequest) -> Result<FuelingRecord> {
    let owner_id = resolve_owner(ctx, req.owner_id)?;
    let input = NewFueling {
        date: parse_request_date(&req.date)?,
        odometer: req.odometer,
        price_per_unit_volume: req.price_per_unit_volume,
        total_cost: req.total_cost,
        station: req.station,
    };
    ctx.app_state.services.fuelings.create(&owner_id, input)
}

pub fn fuelings_update(ctx: &AppContext, req: UpdateFuelingRequest) -> Result<FuelingRecord> {
    let owner_id = resolve_owner(ctx, req.owner_id)?;
    let edit = FuelingEdit {
        id: req.id,
        date: parse_request_date(&req.date)?,
        odometer: req.odometer,
        price_per_unit_volume: req.price_per_unit_volume,
        total_cost: req.total_cost,
        station: req.station,
    };
    ctx.app_state.services.fuelings.update(&owner_id, edit)
}

pub fn fuelings_delete(ctx: &AppContext, req: DeleteFuelingRequest) -> Result<DeletedResponse> {
    let owner_id = resolve_owner(ctx, req.owner_id)?;
    ctx.app_state.services.fuelings.delete(&owner_id, &req.id)?;
    Ok(DeletedResponse { deleted: 1 })
}

pub fn fuelings_clear(ctx: &AppContext, req: OwnerRequest) -> Result<ClearedResponse> {
    let owner_id = resolve_owner(ctx, req.owner_id)?;
    let cleared = ctx.app_state.services.fuelings.clear(&owner_id)?;
    Ok(ClearedResponse {
        cleared: cleared as i64,
    })
}

pub fn fuelings_recalculate(ctx: &AppContext, req: OwnerRequest) -> Result<UpdatedResponse> {
    let owner_id = resolve_owner(ctx, req.owner_id)?;
    let updated = ctx.app_state.services.fuelings.recalculate(&owner_id)?;
    Ok(UpdatedResponse {
        updated: updated as i64,
    })
}

pub fn stats_summary(ctx: &AppContext, req: OwnerRequest) -> Result<ConsumptionStats> {
    let owner_id = resolve_owner(ctx, req.owner_id)?;
    ctx.app_state.services.analytics.summary(&owner_id)
}

pub fn stats_monthly_spend(ctx: &AppContext, req: OwnerRequest) -> Result<Vec<MonthlySpend>> {
    let owner_id = resolve_owner(ctx, req.owner_id)?;
    ctx.app_state.services.analytics.monthly_spend(&owner_id)
}

pub fn stats_consumption_series(
    ctx: &AppContext,
    req: OwnerRequest,
) -> Result<Vec<ConsumptionPoint>> {
    let owner_id = resolve_owner(ctx, req.owner_id)?;
    ctx.app_state.services.analytics.consumption_series(&owner_id)
}

pub fn owners_list(ctx: &AppContext) -> Result<OwnersResponse> {
    let owners = ctx.app_state.services.analytics.owners()?;
    let default_owner = ctx.app_state.services.settings.get()?.default_owner;
    Ok(OwnersResponse {
        default_owner,
        owners,
    })
}

pub fn settings_get(ctx: &AppContext) -> Result<SettingsResponse> {
    let settings = ctx.app_state.services.settings.get()?;
    Ok(SettingsResponse {
        default_owner: settings.default_owner,
        db_path: settings.db_path,
        app_data_dir: ctx.app_data_dir.to_string_lossy().to_string(),
    })
}

pub fn settings_put(ctx: &AppContext, req: SettingsPutRequest) -> Result<SettingsResponse> {
    if let Some(owner_id) = req.default_owner.as_deref() {
        ctx.app_state.services.settings.set_default_owner(owner_id)?;
    }
    settings_get(ctx)
}
