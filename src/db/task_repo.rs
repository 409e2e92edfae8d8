use rusqlite::{params, Connection, OptionalExtension};

use crate::error::TaskloopError;
use crate::models::{Task, TaskDetails};

/// Insert or replace by id. An existing row keeps its position in the list.
pub fn save_task(conn: &Connection, task: &Task) -> Result<(), TaskloopError> {
    conn.execute(
        "INSERT INTO tasks (entryid, title, description, completed)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(entryid) DO UPDATE SET
            title = excluded.title,
            description = excluded.description,
            completed = excluded.completed",
        params![
            task.id,
            task.details.title,
            task.details.description,
            task.details.completed
        ],
    )?;
    Ok(())
}

pub fn get_task(conn: &Connection, id: &str) -> Result<Option<Task>, TaskloopError> {
    let task = conn
        .query_row(
            "SELECT entryid, title, description, completed FROM tasks WHERE entryid = ?1",
            params![id],
            row_to_task,
        )
        .optional()?;
    Ok(task)
}

pub fn list_tasks(conn: &Connection) -> Result<Vec<Task>, TaskloopError> {
    let mut stmt =
        conn.prepare("SELECT entryid, title, description, completed FROM tasks ORDER BY seq ASC")?;
    let tasks = stmt
        .query_map([], row_to_task)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tasks)
}

/// Returns whether a row was removed.
pub fn delete_task(conn: &Connection, id: &str) -> Result<bool, TaskloopError> {
    let removed = conn.execute("DELETE FROM tasks WHERE entryid = ?1", params![id])?;
    Ok(removed > 0)
}

pub fn delete_all_tasks(conn: &Connection) -> Result<usize, TaskloopError> {
    Ok(conn.execute("DELETE FROM tasks", [])?)
}

fn row_to_task(row: &rusqlite::Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        details: TaskDetails {
            title: row.get(1)?,
            description: row.get(2)?,
            completed: row.get(3)?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::open_in_memory;

    fn task(id: &str, title: &str) -> Task {
        Task::new(id, TaskDetails::new(title, "d"))
    }

    #[test]
    fn save_then_list_in_insertion_order() {
        let conn = open_in_memory().unwrap();
        save_task(&conn, &task("b", "second")).unwrap();
        save_task(&conn, &task("a", "first")).unwrap();
        let ids: Vec<_> = list_tasks(&conn).unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn save_existing_updates_in_place() {
        let conn = open_in_memory().unwrap();
        save_task(&conn, &task("1", "one")).unwrap();
        save_task(&conn, &task("2", "two")).unwrap();
        save_task(&conn, &task("1", "one").complete()).unwrap();

        let tasks = list_tasks(&conn).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, "1");
        assert!(tasks[0].is_completed());
    }

    #[test]
    fn get_missing_is_none() {
        let conn = open_in_memory().unwrap();
        assert_eq!(get_task(&conn, "nope").unwrap(), None);
        save_task(&conn, &task("1", "one")).unwrap();
        assert_eq!(get_task(&conn, "1").unwrap(), Some(task("1", "one")));
    }

    #[test]
    fn delete_and_delete_all() {
        let conn = open_in_memory().unwrap();
        save_task(&conn, &task("1", "one")).unwrap();
        save_task(&conn, &task("2", "two")).unwrap();
        assert!(delete_task(&conn, "1").unwrap());
        assert!(!delete_task(&conn, "1").unwrap());
        assert_eq!(delete_all_tasks(&conn).unwrap(), 1);
        assert!(list_tasks(&conn).unwrap().is_empty());
    }
}
