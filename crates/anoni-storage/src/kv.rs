use diesel::connection::SimpleConnection;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use anoni_core::ports::StoreError;

use crate::models::{KvRow, NewKvRow};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

const JOURNAL_MODES: [&str; 6] = ["DELETE", "TRUNCATE", "PERSIST", "MEMORY", "WAL", "OFF"];

fn storage_err(e: impl std::fmt::Display) -> StoreError {
  StoreError::Storage(e.to_string())
}

/// Pragmas aplicados a cada conexión nueva del pool.
#[derive(Debug)]
struct SqlitePragmas {
  journal_mode: Option<&'static str>,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
  fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
    conn.batch_execute("PRAGMA busy_timeout = 5000;").map_err(diesel::r2d2::Error::QueryError)?;
    if let Some(mode) = self.journal_mode {
      conn.batch_execute(&format!("PRAGMA journal_mode = {mode};")).map_err(diesel::r2d2::Error::QueryError)?;
    }
    Ok(())
  }
}

/// Almacén clave/valor sobre una tabla SQLite.
///
/// Los valores son blobs de texto opacos; el formato lo decide quien los
/// escribe. Es el equivalente en disco del `localStorage` del navegador.
#[derive(Clone)]
pub struct KvStore {
  pool: DbPool,
}

impl KvStore {
  /// Abre (o crea) la base en `database_url` y aplica las migraciones.
  ///
  /// `journal_mode` debe ser uno de los modos de SQLite; cualquier otro
  /// valor es un error.
  pub fn open(database_url: &str, journal_mode: Option<&str>) -> Result<Self, StoreError> {
    let journal_mode = match journal_mode {
      None => None,
      Some(mode) => {
        let upper = mode.trim().to_ascii_uppercase();
        let known = JOURNAL_MODES.iter().find(|m| **m == upper).copied();
        Some(known.ok_or_else(|| StoreError::Storage(format!("unsupported journal mode: {mode}")))?)
      }
    };

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
      .connection_customizer(Box::new(SqlitePragmas { journal_mode }))
      .build(manager)
      .map_err(storage_err)?;

    let mut conn = pool.get().map_err(storage_err)?;
    let applied = (&mut *conn).run_pending_migrations(MIGRATIONS).map_err(storage_err)?;
    if !applied.is_empty() {
      info!(database_url, migrations = applied.len(), "applied pending migrations");
    }

    Ok(Self { pool })
  }

  fn conn(&self) -> Result<DbConn, StoreError> {
    self.pool.get().map_err(storage_err)
  }

  pub fn get(&self, entry_key: &str) -> Result<Option<String>, StoreError> {
    use crate::schema::kv_entries::dsl::*;

    let mut conn = self.conn()?;
    kv_entries
      .filter(key.eq(entry_key))
      .select(value)
      .first::<String>(&mut *conn)
      .optional()
      .map_err(storage_err)
  }

  /// Inserta o reemplaza el valor de `entry_key`.
  pub fn put(&self, entry_key: &str, entry_value: &str) -> Result<(), StoreError> {
    use crate::schema::kv_entries::dsl::*;

    let mut conn = self.conn()?;
    diesel::insert_into(kv_entries)
      .values(&NewKvRow { key: entry_key, value: entry_value })
      .on_conflict(key)
      .do_update()
      .set((value.eq(entry_value), updated_at.eq(sql::<Text>("CURRENT_TIMESTAMP"))))
      .execute(&mut *conn)
      .map_err(storage_err)?;

    debug!(key = entry_key, bytes = entry_value.len(), "kv put");
    Ok(())
  }

  /// Todas las entradas, ordenadas por clave.
  pub fn entries(&self) -> Result<Vec<KvRow>, StoreError> {
    use crate::schema::kv_entries::dsl::*;

    let mut conn = self.conn()?;
    kv_entries.select(KvRow::as_select()).order(key.asc()).load(&mut *conn).map_err(storage_err)
  }
}
