//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire one in-memory repository and auth gate into the use cases.
//! - Run a fixed smoke session and print each view model as one JSON line.
//!
//! Usage: `motominder_cli [config.json]`. Without a config file the session
//! runs as an authenticated admin with logging off.

use log::info;
use motominder_core::{
    init_logging_from_config, present_delete, present_get, present_insert, present_list,
    present_update, CoreConfig, DeleteMotorcycleInteractor, DeleteMotorcycleRequest,
    GetMotorcycleInteractor, GetMotorcycleRequest, InMemoryMotorcycleRepository,
    InsertMotorcycleInteractor, InsertMotorcycleRequest, ListMotorcyclesInteractor,
    ListMotorcyclesRequest, MotorcycleDraft, MotorcycleId, StaticAuthGate,
    UpdateMotorcycleInteractor, UpdateMotorcycleRequest,
};
use serde::Serialize;
use std::process::ExitCode;

const DEFAULT_CONFIG: &str = r#"{ "auth": { "authenticated": true, "roles": { "admin": true } } }"#;

fn main() -> ExitCode {
    println!("motominder_core ping={}", motominder_core::ping());
    println!("motominder_core version={}", motominder_core::core_version());

    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("motominder_cli: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: Option<String>) -> Result<(), String> {
    let config = match config_path {
        Some(path) => CoreConfig::from_path(path),
        None => CoreConfig::from_json_str(DEFAULT_CONFIG),
    }
    .map_err(|err| err.to_string())?;

    init_logging_from_config(&config.logging).map_err(|err| err.to_string())?;
    let gate = config.build_auth_gate().map_err(|err| err.to_string())?;
    info!("event=cli_start module=cli status=ok");

    smoke_session(&InMemoryMotorcycleRepository::new(), &gate)
}

fn smoke_session(repo: &InMemoryMotorcycleRepository, gate: &StaticAuthGate) -> Result<(), String> {
    let insert = InsertMotorcycleInteractor::new(repo, gate);
    let get = GetMotorcycleInteractor::new(repo, gate);
    let list = ListMotorcyclesInteractor::new(repo, gate);
    let update = UpdateMotorcycleInteractor::new(repo, gate);
    let delete = DeleteMotorcycleInteractor::new(repo, gate);

    let honda = InsertMotorcycleRequest::new("Honda", "Shadow", 2006, "01234567890123456");
    let inserted = insert.handle(&honda);
    emit(&present_insert(&inserted))?;
    emit(&present_insert(&insert.handle(&honda)))?;
    emit(&present_insert(&insert.handle(&InsertMotorcycleRequest::new(
        "Ford",
        "Falcon",
        2006,
        "ABCDEFGHIJKLMNOPQ",
    ))))?;

    let id = inserted
        .payload()
        .copied()
        .unwrap_or(MotorcycleId::UNASSIGNED);
    emit(&present_get(&get.handle(&GetMotorcycleRequest::new(id))))?;
    emit(&present_update(&update.handle(&UpdateMotorcycleRequest::new(
        id,
        MotorcycleDraft::new("Honda", "Shadow Phantom", 2010, "01234567890123456"),
    ))))?;
    emit(&present_list(&list.handle(&ListMotorcyclesRequest)))?;
    emit(&present_delete(&delete.handle(&DeleteMotorcycleRequest::new(id))))?;
    emit(&present_delete(&delete.handle(&DeleteMotorcycleRequest::new(id))))?;
    Ok(())
}

fn emit(view: &impl Serialize) -> Result<(), String> {
    let line = serde_json::to_string(view).map_err(|err| err.to_string())?;
    println!("{line}");
    Ok(())
}
