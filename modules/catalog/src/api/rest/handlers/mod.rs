//! Request handlers, grouped by catalog area.

pub mod chipsets;
pub mod connectors;
pub mod cooling;
pub mod cpus;
pub mod dictionaries;
pub mod gpus;
pub mod memory;
pub mod psus;
pub mod storage;
