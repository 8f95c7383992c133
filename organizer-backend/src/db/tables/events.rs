//! Calendar event database operations

use rusqlite::{params, OptionalExtension, Row};

use crate::db::{Database, DbResult};
use crate::models::{Event, EventChanges, EventFilter, NewEvent};

fn row_to_event(row: &Row) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get("id")?,
        title: row.get("title")?,
        date: row.get("date")?,
        time: row.get("time")?,
        event_type: row.get("type")?,
    })
}

impl Database {
    /// List events ordered by date then time.
    pub fn list_events(&self, filter: &EventFilter) -> DbResult<Vec<Event>> {
        let conn = self.conn()?;
        let (sql, arg) = match filter {
            EventFilter::All => (
                "SELECT id, title, date, time, type FROM events ORDER BY date, time, id",
                None,
            ),
            EventFilter::Month(month) => (
                "SELECT id, title, date, time, type FROM events
                 WHERE substr(date, 1, length(?1)) = ?1 ORDER BY date, time, id",
                Some(month.as_str()),
            ),
            EventFilter::Day(day) => (
                "SELECT id, title, date, time, type FROM events WHERE date = ?1 ORDER BY date, time, id",
                Some(day.as_str()),
            ),
        };

        let mut stmt = conn.prepare(sql)?;
        let rows = match arg {
            Some(arg) => stmt.query_map([arg], row_to_event)?.collect::<Result<Vec<_>, _>>()?,
            None => stmt.query_map([], row_to_event)?.collect::<Result<Vec<_>, _>>()?,
        };
        Ok(rows)
    }

    pub fn create_event(&self, event: &NewEvent) -> DbResult<Event> {
        let conn = self.conn()?;
        let event_type: &str = event.event_type.as_ref();
        conn.execute(
            "INSERT INTO events (title, date, time, type) VALUES (?1, ?2, ?3, ?4)",
            params![event.title, event.date, event.time, event_type],
        )?;

        Ok(Event {
            id: conn.last_insert_rowid(),
            title: event.title.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            event_type: event_type.to_string(),
        })
    }

    /// Apply a partial update. Events carry no last-edited stamp.
    pub fn update_event(&self, id: i64, changes: &EventChanges) -> DbResult<Option<Event>> {
        let conn = self.conn()?;
        let event_type: Option<&str> = changes.event_type.as_ref().map(AsRef::as_ref);
        let event = conn
            .query_row(
                "UPDATE events
                 SET title = COALESCE(?1, title), date = COALESCE(?2, date),
                     time = COALESCE(?3, time), type = COALESCE(?4, type)
                 WHERE id = ?5
                 RETURNING id, title, date, time, type",
                params![
                    changes.title,
                    changes.date,
                    changes.time,
                    event_type,
                    id
                ],
                row_to_event,
            )
            .optional()?;
        Ok(event)
    }

    pub fn delete_event(&self, id: i64) -> DbResult<bool> {
        let conn = self.conn()?;
        let rows_affected = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::tables::test_support::empty_db;
    use crate::db::Database;
    use crate::models::{EventChanges, EventFilter, EventType, NewEvent};

    fn add(db: &Database, date: &str, time: &str) -> i64 {
        db.create_event(&NewEvent {
            title: format!("Event {} {}", date, time),
            date: date.to_string(),
            time: time.to_string(),
            event_type: EventType::Class,
        })
        .unwrap()
        .id
    }

    #[test]
    fn test_month_filter_is_prefix_match_in_order() {
        let (_dir, db) = empty_db();
        add(&db, "2024-05-20", "10:00");
        add(&db, "2024-06-01", "08:00");
        add(&db, "2024-05-02", "14:30");
        add(&db, "2024-05-02", "09:00");
        add(&db, "2023-05-02", "09:00");

        let may = db.list_events(&EventFilter::Month("2024-05".to_string())).unwrap();
        let keys: Vec<_> = may.iter().map(|e| (e.date.as_str(), e.time.as_str())).collect();
        assert_eq!(
            keys,
            vec![("2024-05-02", "09:00"), ("2024-05-02", "14:30"), ("2024-05-20", "10:00")]
        );
    }

    #[test]
    fn test_day_filter_and_full_listing() {
        let (_dir, db) = empty_db();
        add(&db, "2024-05-02", "14:30");
        add(&db, "2024-05-02", "09:00");
        add(&db, "2024-05-03", "09:00");

        let day = db.list_events(&EventFilter::Day("2024-05-02".to_string())).unwrap();
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].time, "09:00");

        let all = db.list_events(&EventFilter::All).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].date, "2024-05-03");
    }

    #[test]
    fn test_partial_update() {
        let (_dir, db) = empty_db();
        let id = add(&db, "2024-05-02", "09:00");

        let changes = EventChanges {
            event_type: Some(EventType::Exam),
            ..Default::default()
        };
        let updated = db.update_event(id, &changes).unwrap().unwrap();
        assert_eq!(updated.event_type, "exam");
        assert_eq!(updated.date, "2024-05-02");
        assert_eq!(updated.time, "09:00");

        assert!(db.update_event(id + 100, &changes).unwrap().is_none());
        assert!(db.delete_event(id).unwrap());
        assert!(!db.delete_event(id).unwrap());
    }
}
