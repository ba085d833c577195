use super::{AlarmStore, normalize_prefix};
use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{Alarm, AlarmDraft, AlarmId};

/// Alarm store backed by the SQLite database.
pub struct SqliteAlarmStore {
    pool: DbPool,
}

impl SqliteAlarmStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    ///
    /// Failure is returned to the caller; nothing here terminates the process.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Self::from_pool(pool)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    /// Record an operation in the internal log table (non-blocking).
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        ttlog_quiet(&self.pool.conn, operation, target, message);
    }
}

impl AlarmStore for SqliteAlarmStore {
    fn list(&self) -> AppResult<Vec<Alarm>> {
        Ok(queries::load_alarms(&self.pool.conn)?)
    }

    fn get(&self, id: &AlarmId) -> AppResult<Option<Alarm>> {
        Ok(queries::load_alarm(&self.pool.conn, id)?)
    }

    fn add(&mut self, draft: AlarmDraft) -> AppResult<Alarm> {
        let alarm = Alarm::from_draft(draft);
        queries::insert_alarm(&self.pool.conn, &alarm)?;
        log::debug!("inserted alarm {} at {}", alarm.id, alarm.time);
        Ok(alarm)
    }

    fn add_all(&mut self, drafts: Vec<AlarmDraft>) -> AppResult<Vec<Alarm>> {
        let alarms: Vec<Alarm> = drafts.into_iter().map(Alarm::from_draft).collect();

        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            for alarm in &alarms {
                queries::insert_alarm(&tx, alarm)?;
            }
            tx.commit()
        })?;

        log::debug!("inserted {} alarms in one transaction", alarms.len());
        Ok(alarms)
    }

    fn update(&mut self, id: &AlarmId, draft: AlarmDraft) -> AppResult<Alarm> {
        let mut alarm = self
            .get(id)?
            .ok_or_else(|| AppError::AlarmNotFound(id.to_string()))?;
        alarm.apply(draft);

        if queries::update_alarm(&self.pool.conn, &alarm)? == 0 {
            return Err(AppError::AlarmNotFound(id.to_string()));
        }
        log::debug!("updated alarm {}", alarm.id);
        Ok(alarm)
    }

    fn delete(&mut self, id: &AlarmId) -> AppResult<()> {
        match queries::delete_alarm(&self.pool.conn, id)? {
            0 => Err(AppError::AlarmNotFound(id.to_string())),
            _ => Ok(()),
        }
    }

    fn delete_all(&mut self) -> AppResult<usize> {
        let removed = self.pool.with_conn(queries::delete_all_alarms)?;
        log::debug!("deleted {} alarms", removed);
        Ok(removed)
    }

    fn ids_with_prefix(&self, prefix: &str) -> AppResult<Vec<AlarmId>> {
        let raw = queries::find_ids_by_prefix(&self.pool.conn, &normalize_prefix(prefix))?;
        raw.iter()
            .map(|s| {
                AlarmId::parse(s).ok_or_else(|| AppError::CorruptRecord(format!("bad id '{}'", s)))
            })
            .collect()
    }
}
