use thiserror::Error;
use uuid::Uuid;

/// Catalog entity kinds, used in not-found messages and tracing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Socket,
    Vendor,
    RamType,
    MotherboardFormFactor,
    PsuFormFactor,
    PsuCertificate,
    Chipset,
    FanSize,
    CpuPowerConnector,
    Cpu,
    Gpu,
    Psu,
    RamModule,
    Ssd,
    Hdd,
    Cooler,
    Fan,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Socket => "socket",
            Self::Vendor => "vendor",
            Self::RamType => "RAM type",
            Self::MotherboardFormFactor => "motherboard form factor",
            Self::PsuFormFactor => "PSU form factor",
            Self::PsuCertificate => "PSU certificate",
            Self::Chipset => "chipset",
            Self::FanSize => "fan size",
            Self::CpuPowerConnector => "CPU power connector",
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
            Self::Psu => "PSU",
            Self::RamModule => "RAM module",
            Self::Ssd => "SSD",
            Self::Hdd => "HDD",
            Self::Cooler => "cooler",
            Self::Fan => "fan",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain-level errors shared by every catalog service.
///
/// All validation failures are deterministic; nothing here is retryable.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{kind} with id {id} was not found")]
    NotFound { kind: EntityKind, id: Uuid },

    #[error("required reference '{field}' is missing")]
    MissingReference { field: &'static str },

    #[error("collection '{field}' must not be empty")]
    EmptyCollection { field: &'static str },

    #[error("unique constraint violated on ({}): ({})", fields.join(", "), values.join(", "))]
    UniqueViolation {
        fields: Vec<&'static str>,
        values: Vec<String>,
    },

    #[error("validation failed on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn not_found(kind: EntityKind, id: Uuid) -> Self {
        Self::NotFound { kind, id }
    }

    pub fn missing_reference(field: &'static str) -> Self {
        Self::MissingReference { field }
    }

    pub fn empty_collection(field: &'static str) -> Self {
        Self::EmptyCollection { field }
    }

    pub fn unique_violation(
        fields: Vec<&'static str>,
        values: Vec<String>,
    ) -> Self {
        Self::UniqueViolation { fields, values }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DomainError, EntityKind};
    use uuid::Uuid;

    #[test]
    fn not_found_names_kind_and_id() {
        let id = Uuid::nil();
        let e = DomainError::not_found(EntityKind::Chipset, id);
        let msg = e.to_string();
        assert!(msg.contains("chipset"));
        assert!(msg.contains(&id.to_string()));
    }

    #[test]
    fn unique_violation_lists_fields_and_values() {
        let e = DomainError::unique_violation(
            vec!["name", "socket_id"],
            vec!["Z790".to_string(), Uuid::nil().to_string()],
        );
        let msg = e.to_string();
        assert!(msg.contains("name, socket_id"));
        assert!(msg.contains("Z790"));
    }
}
