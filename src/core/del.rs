use crate::db::log::jlog;
use crate::db::pool::DbPool;
use crate::db::queries::delete_job;
use crate::errors::{AppError, AppResult};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a job and its photo/tag links. Fails if the id is unknown.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let tx = pool.conn.transaction()?;

        let deleted = delete_job(&tx, id)?;
        if deleted == 0 {
            return Err(AppError::JobNotFound(id));
        }

        jlog(&tx, "del", &id.to_string(), "Job deleted")?;

        tx.commit()?;
        Ok(())
    }
}
