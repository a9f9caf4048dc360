//! Domain services: validation, reference resolution and uniqueness checks
//! in front of the repository ports.
//!
//! Every mutation validates before it touches the store: null references are
//! rejected by field name, dangling references surface as not-found for the
//! referenced kind, and uniqueness keys are checked excluding the row being
//! rewritten.

mod chipsets;
mod connectors;
mod cooling;
mod cpus;
mod dictionaries;
mod gpus;
mod memory;
mod psus;
mod storage;

pub use chipsets::ChipsetsService;
pub use connectors::CpuPowerConnectorsService;
pub use cooling::{CoolersService, FanSizesService, FansService};
pub use cpus::CpusService;
pub use dictionaries::DictionaryService;
pub use gpus::GpusService;
pub use memory::RamModulesService;
pub use psus::PsusService;
pub use storage::{HddsService, SsdsService};

use uuid::Uuid;

use crate::domain::error::{DomainError, EntityKind};
use crate::domain::repo::DictionaryRepository;

pub type DomainResult<T> = Result<T, DomainError>;

/// Storage failures are logged here once and surfaced as opaque database
/// errors; callers never see driver details.
pub(crate) fn storage_error(err: anyhow::Error) -> DomainError {
    tracing::error!(error = %err, "storage operation failed");
    DomainError::database(err.to_string())
}

/// Trims a required name-like field, rejecting blank values.
pub(crate) fn normalized_name(field: &'static str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Resolves a required dictionary reference: null is an invalid parameter
/// named after the field, a dangling id is not-found for the referenced kind.
pub(crate) async fn resolve_dictionary_ref(
    repo: &dyn DictionaryRepository,
    kind: EntityKind,
    field: &'static str,
    id: Option<Uuid>,
) -> DomainResult<Uuid> {
    let id = id.ok_or(DomainError::MissingReference { field })?;
    let found = repo.find_by_id(id).await.map_err(storage_error)?;
    if found.is_none() {
        return Err(DomainError::not_found(kind, id));
    }
    Ok(id)
}
