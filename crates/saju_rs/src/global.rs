//! Process-wide solar term table, installed once.

use std::sync::OnceLock;

use saju_time::SolarTermTable;

use crate::error::SajuRsError;

static TABLE: OnceLock<SolarTermTable> = OnceLock::new();

/// Install the table. Fails if one is already installed.
pub fn init(table: SolarTermTable) -> Result<(), SajuRsError> {
    TABLE.set(table).map_err(|_| SajuRsError::AlreadyInitialized)
}

/// Install the bundled 1940–2050 table.
///
/// Unlike [`init`], calling this after a table is installed is a no-op.
pub fn init_bundled() -> Result<(), SajuRsError> {
    if TABLE.get().is_some() {
        return Ok(());
    }
    let table = SolarTermTable::bundled()?;
    // A racing initializer may have won; either table is the bundled one.
    let _ = TABLE.set(table);
    Ok(())
}

pub fn is_initialized() -> bool {
    TABLE.get().is_some()
}

pub(crate) fn table() -> Result<&'static SolarTermTable, SajuRsError> {
    TABLE.get().ok_or(SajuRsError::NotInitialized)
}
