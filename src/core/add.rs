use crate::db::log::jlog;
use crate::db::pool::DbPool;
use crate::db::queries::{attach_tag, insert_job, insert_photo};
use crate::errors::AppResult;
use crate::models::job::Job;
use crate::models::photo::PhotoKind;

pub struct AddLogic;

impl AddLogic {
    /// Insert a job together with its photos and tags, atomically.
    /// Returns the new job id.
    pub fn apply(
        pool: &mut DbPool,
        job: Job,
        tags: &[String],
        photos: &[(PhotoKind, String)],
    ) -> AppResult<i64> {
        let tx = pool.conn.transaction()?;

        let id = insert_job(&tx, &job)?;

        for (kind, path) in photos {
            insert_photo(&tx, id, path, *kind)?;
        }

        for tag in tags {
            attach_tag(&tx, id, tag)?;
        }

        jlog(
            &tx,
            "add",
            &id.to_string(),
            &format!("Job added for {}", job.date_str()),
        )?;

        tx.commit()?;
        Ok(id)
    }
}
