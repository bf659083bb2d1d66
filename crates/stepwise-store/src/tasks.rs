use chrono::Utc;
use tracing::instrument;

use stepwise_core::ids::{SubtaskId, TaskId};
use stepwise_core::models::{Subtask, Task};

use crate::database::Database;
use crate::error::StoreError;
use crate::row_helpers;

pub struct TaskRepo {
    db: Database,
}

impl TaskRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a task and its subtasks in one transaction. A failure on any
    /// insert rolls back the whole write, so no orphaned task can remain.
    #[instrument(skip(self, texts), fields(subtask_count = texts.len()))]
    pub fn create_with_subtasks(
        &self,
        title: &str,
        texts: &[String],
    ) -> Result<(Task, Vec<Subtask>), StoreError> {
        let task_id = TaskId::new();
        let now = Utc::now().to_rfc3339();

        self.db.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            tx.execute(
                "INSERT INTO tasks (id, title, created_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![task_id.as_str(), title, now],
            )?;

            let mut subtasks = Vec::with_capacity(texts.len());
            for (position, text) in texts.iter().enumerate() {
                let id = SubtaskId::new();
                tx.execute(
                    "INSERT INTO subtasks (id, task_id, text, completed, position)
                     VALUES (?1, ?2, ?3, 0, ?4)",
                    rusqlite::params![id.as_str(), task_id.as_str(), text, position as u32],
                )?;
                subtasks.push(Subtask {
                    id,
                    task_id: task_id.clone(),
                    text: text.clone(),
                    completed: false,
                    position: position as u32,
                });
            }

            tx.commit()?;

            Ok((
                Task {
                    id: task_id.clone(),
                    title: title.to_string(),
                    created_at: now.clone(),
                },
                subtasks,
            ))
        })
    }

    /// The most recently created task, if any.
    #[instrument(skip(self))]
    pub fn latest(&self) -> Result<Option<Task>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, created_at FROM tasks
                 ORDER BY created_at DESC, id DESC LIMIT 1",
            )?;
            let mut rows = stmt.query([])?;
            match rows.next()? {
                Some(row) => Ok(Some(row_to_task(row)?)),
                None => Ok(None),
            }
        })
    }

    /// All subtasks of a task, in display order.
    #[instrument(skip(self), fields(task_id = %task_id))]
    pub fn subtasks_for(&self, task_id: &TaskId) -> Result<Vec<Subtask>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, task_id, text, completed, position FROM subtasks
                 WHERE task_id = ?1 ORDER BY position ASC",
            )?;
            let mut rows = stmt.query([task_id.as_str()])?;
            let mut results = Vec::new();
            while let Some(row) = rows.next()? {
                results.push(row_to_subtask(row)?);
            }
            Ok(results)
        })
    }

    /// Set a subtask's completed flag and return the updated row.
    #[instrument(skip(self), fields(subtask_id = %id, completed))]
    pub fn set_completed(&self, id: &SubtaskId, completed: bool) -> Result<Subtask, StoreError> {
        self.db.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE subtasks SET completed = ?1 WHERE id = ?2",
                rusqlite::params![completed as i64, id.as_str()],
            )?;
            if changed == 0 {
                return Err(StoreError::NotFound(format!("subtask {id}")));
            }

            let mut stmt = conn.prepare(
                "SELECT id, task_id, text, completed, position FROM subtasks WHERE id = ?1",
            )?;
            let mut rows = stmt.query([id.as_str()])?;
            match rows.next()? {
                Some(row) => row_to_subtask(row),
                None => Err(StoreError::NotFound(format!("subtask {id}"))),
            }
        })
    }
}

fn row_to_task(row: &rusqlite::Row<'_>) -> Result<Task, StoreError> {
    Ok(Task {
        id: TaskId::from_raw(row_helpers::get::<String>(row, 0, "tasks", "id")?),
        title: row_helpers::get(row, 1, "tasks", "title")?,
        created_at: row_helpers::get(row, 2, "tasks", "created_at")?,
    })
}

fn row_to_subtask(row: &rusqlite::Row<'_>) -> Result<Subtask, StoreError> {
    Ok(Subtask {
        id: SubtaskId::from_raw(row_helpers::get::<String>(row, 0, "subtasks", "id")?),
        task_id: TaskId::from_raw(row_helpers::get::<String>(row, 1, "subtasks", "task_id")?),
        text: row_helpers::get(row, 2, "subtasks", "text")?,
        completed: row_helpers::get::<i64>(row, 3, "subtasks", "completed")? != 0,
        position: row_helpers::get::<u32>(row, 4, "subtasks", "position")?,
    })
}
