mod error;
mod fuelings;
mod helpers;
mod migrations;
mod owners;
mod recalc;
mod settings;

use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;
use tracing::debug;

pub use error::{DbError, Result};
pub use recalc::{FuelingChange, Recalculated};
pub use rusqlite;

pub struct Db {
    conn: Connection,
}

impl Db {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("opening fueling store at {}", path.display());
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "temp_store", "MEMORY")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(Self { conn })
    }
}
