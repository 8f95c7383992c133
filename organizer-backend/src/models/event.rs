use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use super::non_empty;
use crate::error::ApiError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Kind of calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EventType {
    Deadline,
    Exam,
    Class,
    Meeting,
}

impl EventType {
    pub fn parse(s: &str) -> Result<Self, ApiError> {
        s.trim().to_lowercase().parse().map_err(|_| {
            ApiError::validation(format!(
                "Invalid event type '{}': expected deadline, exam, class or meeting",
                s
            ))
        })
    }
}

/// A calendar event. `date` and `time` hold the stored `YYYY-MM-DD` / `HH:MM` text.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub event_type: String,
}

/// Validated, normalized fields of an event
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub time: String,
    pub event_type: EventType,
}

pub(crate) fn parse_date(s: &str) -> Result<String, ApiError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| ApiError::validation(format!("Invalid date '{}': expected YYYY-MM-DD", s)))
}

pub(crate) fn parse_time(s: &str) -> Result<String, ApiError> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map(|t| t.format(TIME_FORMAT).to_string())
        .map_err(|_| ApiError::validation(format!("Invalid time '{}': expected HH:MM", s)))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEventRequest {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

impl CreateEventRequest {
    pub fn validate(&self) -> Result<NewEvent, ApiError> {
        let (Some(title), Some(date), Some(time), Some(event_type)) = (
            non_empty(&self.title),
            non_empty(&self.date),
            non_empty(&self.time),
            non_empty(&self.event_type),
        ) else {
            return Err(ApiError::validation("Title, date, time and type are required"));
        };

        Ok(NewEvent {
            title: title.to_string(),
            date: parse_date(date)?,
            time: parse_time(time)?,
            event_type: EventType::parse(event_type)?,
        })
    }
}

/// Partial update. Supplied date/time/type values are validated like on create.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

/// Normalized partial update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventChanges {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub event_type: Option<EventType>,
}

impl UpdateEventRequest {
    pub fn validate(&self) -> Result<EventChanges, ApiError> {
        Ok(EventChanges {
            title: self.title.clone(),
            date: self.date.as_deref().map(parse_date).transpose()?,
            time: self.time.as_deref().map(parse_time).transpose()?,
            event_type: self.event_type.as_deref().map(EventType::parse).transpose()?,
        })
    }
}

/// Query string for `GET /api/events`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventsQuery {
    pub month: Option<String>,
    pub day: Option<String>,
}

/// How events are filtered when listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventFilter {
    All,
    /// Date string starts with the given `YYYY-MM` prefix
    Month(String),
    /// Exact `YYYY-MM-DD` date
    Day(String),
}

impl EventsQuery {
    pub fn filter(&self) -> EventFilter {
        let month = non_empty(&self.month);
        let day = non_empty(&self.day);
        match (month, day) {
            (Some(month), Some(day)) => {
                let day = match day.parse::<u32>() {
                    Ok(n) => format!("{:02}", n),
                    Err(_) => day.to_string(),
                };
                EventFilter::Day(format!("{}-{}", month, day))
            }
            (Some(month), None) => EventFilter::Month(month.to_string()),
            _ => EventFilter::All,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub event_type: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        EventResponse {
            id: event.id.to_string(),
            title: event.title,
            date: event.date,
            time: event.time,
            event_type: event.event_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(month: Option<&str>, day: Option<&str>) -> EventsQuery {
        EventsQuery {
            month: month.map(String::from),
            day: day.map(String::from),
        }
    }

    #[test]
    fn test_event_type_parsing() {
        assert_eq!(EventType::parse("exam").unwrap(), EventType::Exam);
        assert_eq!(EventType::parse(" Meeting ").unwrap(), EventType::Meeting);
        let stored: &str = EventType::Deadline.as_ref();
        assert_eq!(stored, "deadline");
        assert!(EventType::parse("party").is_err());
    }

    #[test]
    fn test_create_normalizes_time() {
        let req = CreateEventRequest {
            title: Some("Calculus exam".to_string()),
            date: Some("2024-05-03".to_string()),
            time: Some("9:30".to_string()),
            event_type: Some("exam".to_string()),
        };
        let event = req.validate().unwrap();
        assert_eq!(event.time, "09:30");
        assert_eq!(event.date, "2024-05-03");
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let mut req = CreateEventRequest {
            title: Some("Calculus exam".to_string()),
            date: Some("2024-05-03".to_string()),
            time: Some("09:30".to_string()),
            event_type: None,
        };
        assert!(req.validate().is_err());

        req.event_type = Some("exam".to_string());
        req.date = Some("03/05/2024".to_string());
        assert!(req.validate().is_err());

        req.date = Some("2024-05-03".to_string());
        req.time = Some("25:00".to_string());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_filter_modes() {
        assert_eq!(query(None, None).filter(), EventFilter::All);
        assert_eq!(query(None, Some("12")).filter(), EventFilter::All);
        assert_eq!(
            query(Some("2024-05"), None).filter(),
            EventFilter::Month("2024-05".to_string())
        );
        assert_eq!(
            query(Some("2024-05"), Some("7")).filter(),
            EventFilter::Day("2024-05-07".to_string())
        );
        assert_eq!(
            query(Some("2024-05"), Some("17")).filter(),
            EventFilter::Day("2024-05-17".to_string())
        );
    }

    #[test]
    fn test_update_validates_supplied_fields_only() {
        let req = UpdateEventRequest {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let changes = req.validate().unwrap();
        assert_eq!(changes.title.as_deref(), Some("Renamed"));
        assert!(changes.date.is_none() && changes.event_type.is_none());

        let bad = UpdateEventRequest {
            event_type: Some("holiday".to_string()),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
