//! NAPI exports for the run API.

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::config::RunConfig;
use crate::types::Outcome;

/// Run result returned as object (outputs, memory, status, fault, steps).
#[napi(object)]
pub struct RunResultOutput {
    pub outputs: Vec<i64>,
    pub memory: Vec<i64>,
    pub status: String,
    /// Fault kind (`UnknownOpcode` / `OutOfBounds`), absent on success.
    pub fault_kind: Option<String>,
    /// Human-readable fault description, absent on success.
    pub fault: Option<String>,
    pub steps: i64,
}

impl From<Outcome> for RunResultOutput {
    fn from(outcome: Outcome) -> Self {
        Self {
            status: outcome.status.as_str().to_string(),
            fault_kind: outcome.fault.map(|f| f.name().to_string()),
            fault: outcome.fault.map(|f| f.to_string()),
            steps: i64::try_from(outcome.steps).unwrap_or(i64::MAX),
            outputs: outcome.outputs,
            memory: outcome.memory,
        }
    }
}

fn config_from(step_limit: Option<i64>) -> RunConfig {
    match step_limit {
        Some(limit) => RunConfig::with_step_limit(limit.max(0) as u64),
        None => RunConfig::unbounded(),
    }
}

#[napi]
pub fn run_program(
    program: Vec<i64>,
    inputs: Vec<i64>,
    step_limit: Option<i64>,
) -> RunResultOutput {
    crate::run_program_with_config(program, inputs, config_from(step_limit)).into()
}

#[napi]
pub fn run_program_text(
    text: String,
    inputs: Vec<i64>,
    step_limit: Option<i64>,
) -> Result<RunResultOutput> {
    let program = crate::parse_program(&text).map_err(|e| Error::from_reason(e.to_string()))?;
    Ok(crate::run_program_with_config(program, inputs, config_from(step_limit)).into())
}

#[napi]
pub fn parse_program(text: String) -> Result<Vec<i64>> {
    crate::parse_program(&text).map_err(|e| Error::from_reason(e.to_string()))
}

#[napi]
pub fn memory_digest(memory: Vec<i64>) -> Buffer {
    crate::memory_digest(&memory).to_vec().into()
}
