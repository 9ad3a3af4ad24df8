//! # IPC Bridge
//!
//! Newline-delimited JSON over any reader/writer pair (stdin/stdout in the
//! binary, in-memory buffers in tests).
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request  ► {"command":"mark_fulfilled","args":{"transactionId":"T1"}}  │
//! │  response ◄ {"ok":{"outcome":"fulfilled","rows":[...]}}                 │
//! │                                                                         │
//! │  request  ► {"command":"select_tab","args":{"tab":"reports"}}           │
//! │  response ◄ {"error":{"code":"VALIDATION_ERROR","message":"...",        │
//! │              "field":..., "clearField":false}}                          │
//! │                                                                         │
//! │  request  ► not json                                                    │
//! │  response ◄ {"error":{"code":"INVALID_REQUEST",...}}   (loop continues) │
//! │                                                                         │
//! │  EOF      ► serve() returns Ok(())                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use station_core::validation::{CustomerInput, TransactionInput};
use tracing::{debug, info, warn};

use crate::commands;
use crate::error::{ApiError, AppError};
use crate::state::{ConfigState, StationState};

/// One request line.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub command: String,

    #[serde(default)]
    pub args: Value,
}

/// One response line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    Ok(Value),
    Error(ApiError),
}

impl From<Result<Value, ApiError>> for Response {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(value) => Response::Ok(value),
            Err(err) => Response::Error(err),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SelectTabArgs {
    tab: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarkFulfilledArgs {
    transaction_id: String,
}

/// Missing `args` reads as `{}`.
fn parse_args<T: DeserializeOwned>(command: &str, args: &Value) -> Result<T, ApiError> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        other => other.clone(),
    };

    serde_json::from_value(args)
        .map_err(|e| ApiError::invalid_request(format!("Invalid args for {command}: {e}")))
}

fn encode<T: Serialize>(payload: T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::internal(e.to_string()))
}

/// Routes a request to its command.
pub fn dispatch(
    request: &Request,
    station: &StationState,
    config: &ConfigState,
) -> Result<Value, ApiError> {
    let command = request.command.as_str();
    let args = &request.args;

    match command {
        "get_view" => encode(commands::view::get_view(station, config)),
        "select_tab" => {
            let SelectTabArgs { tab } = parse_args(command, args)?;
            encode(commands::view::select_tab(station, config, &tab)?)
        }
        "list_transactions" => {
            encode(commands::transaction::list_transactions(station, config))
        }
        "add_transaction" => {
            let input: TransactionInput = parse_args(command, args)?;
            encode(commands::transaction::add_transaction(station, config, input)?)
        }
        "mark_fulfilled" => {
            let MarkFulfilledArgs { transaction_id } = parse_args(command, args)?;
            encode(commands::transaction::mark_fulfilled(
                station,
                config,
                &transaction_id,
            ))
        }
        "list_customers" => encode(commands::customer::list_customers(station)),
        "add_customer" => {
            let input: CustomerInput = parse_args(command, args)?;
            encode(commands::customer::add_customer(station, input)?)
        }
        "get_sales" => encode(commands::sales::get_sales(station, config)),
        "get_config" => encode(commands::config::get_config(config)),
        unknown => Err(ApiError::invalid_request(format!(
            "Unknown command: {unknown}"
        ))),
    }
}

/// Handles one raw line. `None` for blank lines.
pub fn handle_line(line: &str, station: &StationState, config: &ConfigState) -> Option<Response> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let result = match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            debug!(command = %request.command, "Request received");
            dispatch(&request, station, config)
        }
        Err(e) => {
            warn!(error = %e, "Malformed request line");
            Err(ApiError::invalid_request(format!("Malformed request: {e}")))
        }
    };

    Some(Response::from(result))
}

/// Reads requests until EOF, writing one response line per request.
///
/// Lines are read as raw bytes; one that is not UTF-8 is answered like any
/// other malformed line. Only a failing reader or writer ends the loop early.
pub fn serve<R, W>(
    mut reader: R,
    mut writer: W,
    station: &StationState,
    config: &ConfigState,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    info!("IPC bridge listening");

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) => handle_line(line, station, config),
            Err(e) => {
                warn!(error = %e, "Request line is not UTF-8");
                Some(Response::Error(ApiError::invalid_request(format!(
                    "Request is not valid UTF-8: {e}"
                ))))
            }
        };
        let Some(response) = response else {
            continue;
        };

        serde_json::to_writer(&mut writer, &response)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    info!("Input closed, shutting down");
    Ok(())
}
