//! Example rows inserted when the database file is first created.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use strum::IntoEnumIterator;

use crate::models::{EventType, NewEvent, DATE_FORMAT};

pub struct SeedDocument {
    pub title: &'static str,
    pub subject: &'static str,
    pub days_ago: i64,
}

pub struct SeedNote {
    pub title: &'static str,
    pub content: &'static str,
    pub color: &'static str,
    pub days_ago: i64,
}

pub const DOCUMENTS: &[SeedDocument] = &[
    SeedDocument { title: "Differential Calculus Notes", subject: "Mathematics", days_ago: 0 },
    SeedDocument { title: "Lab Report", subject: "Physics", days_ago: 1 },
    SeedDocument { title: "Algorithms Summary", subject: "Programming", days_ago: 2 },
    SeedDocument { title: "Equation Exercises", subject: "Mathematics", days_ago: 3 },
    SeedDocument { title: "Organic Chemistry Presentation", subject: "Chemistry", days_ago: 7 },
];

pub const NOTES: &[SeedNote] = &[
    SeedNote {
        title: "Calculus Formulas",
        content: "Derivative of a function: f'(x) = lim h→0 [f(x+h) - f(x)]/h\nChain rule: (f∘g)'(x) = f'(g(x))·g'(x)",
        color: "#FFF9C4",
        days_ago: 0,
    },
    SeedNote {
        title: "Physics Concepts",
        content: "Newton's law: F = m·a\nKinetic energy: Ek = 1/2·m·v²\nPotential energy: Ep = m·g·h",
        color: "#BBDEFB",
        days_ago: 1,
    },
    SeedNote {
        title: "SQL Commands",
        content: "SELECT * FROM table;\nINSERT INTO table VALUES (...);\nUPDATE table SET field = value WHERE condition;",
        color: "#C8E6C9",
        days_ago: 3,
    },
    SeedNote {
        title: "Spanish Vocabulary",
        content: "Investigación - Research\nDesarrollo - Development\nImplementación - Implementation",
        color: "#E1BEE7",
        days_ago: 7,
    },
];

/// Days covered by the generated calendar, starting today.
pub const EVENT_DAYS: i64 = 30;

/// Probability that a day gets no events at all.
const EMPTY_DAY_PROBABILITY: f64 = 0.3;

pub fn titles_for(event_type: EventType) -> &'static [&'static str] {
    match event_type {
        EventType::Deadline => &["Physics Report Due", "Final Project Due", "Exercise Set Due"],
        EventType::Exam => &["Calculus Exam", "Programming Exam", "Chemistry Exam"],
        EventType::Class => &["Programming Class", "Mathematics Class", "Physics Class"],
        EventType::Meeting => &["Chemistry Tutoring", "Study Group Meeting", "Office Hours"],
    }
}

/// Random events for the next [`EVENT_DAYS`] days.
///
/// Each day is empty with probability 0.3, otherwise it gets 1-3 events at
/// HH:00 or HH:30 between 08:00 and 18:30.
pub fn random_events<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Vec<NewEvent> {
    let types: Vec<EventType> = EventType::iter().collect();
    let mut events = Vec::new();

    for offset in 0..EVENT_DAYS {
        if rng.gen_bool(EMPTY_DAY_PROBABILITY) {
            continue;
        }

        let date = (today + Duration::days(offset)).format(DATE_FORMAT).to_string();
        let count = rng.gen_range(1..=3);

        for _ in 0..count {
            let event_type = types[rng.gen_range(0..types.len())];
            let titles = titles_for(event_type);
            let hour = rng.gen_range(8..=18);
            let minutes = if rng.gen_bool(0.5) { "00" } else { "30" };

            events.push(NewEvent {
                title: titles[rng.gen_range(0..titles.len())].to_string(),
                date: date.clone(),
                time: format!("{:02}:{}", hour, minutes),
                event_type,
            });
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_same_seed_same_events() {
        let a = random_events(&mut StdRng::seed_from_u64(42), today());
        let b = random_events(&mut StdRng::seed_from_u64(42), today());
        assert_eq!(a, b);
    }

    #[test]
    fn test_events_respect_constraints() {
        let mut rng = StdRng::seed_from_u64(1234);
        let events = random_events(&mut rng, today());
        let last_day = (today() + Duration::days(EVENT_DAYS - 1)).format(DATE_FORMAT).to_string();

        let mut per_day: HashMap<&str, usize> = HashMap::new();
        for event in &events {
            *per_day.entry(event.date.as_str()).or_default() += 1;

            assert!(event.date.as_str() >= "2024-05-01" && event.date <= last_day);
            assert!(titles_for(event.event_type).contains(&event.title.as_str()));

            let (hour, minutes) = event.time.split_once(':').unwrap();
            let hour: u32 = hour.parse().unwrap();
            assert!((8..=18).contains(&hour));
            assert!(minutes == "00" || minutes == "30");
        }

        assert!(per_day.values().all(|&n| (1..=3).contains(&n)));
        assert!(per_day.len() <= EVENT_DAYS as usize);
    }

    #[test]
    fn test_some_days_are_empty_over_many_runs() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut empty = 0;
        for _ in 0..20 {
            let events = random_events(&mut rng, today());
            let days: std::collections::HashSet<_> = events.iter().map(|e| e.date.clone()).collect();
            empty += EVENT_DAYS as usize - days.len();
        }
        // 600 days at p = 0.3 empty; expect roughly 180
        assert!(empty > 100 && empty < 260, "empty days: {}", empty);
    }
}
