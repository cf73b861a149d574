//! Placeholder data shown when the server is unreachable.

use super::model::{EventItem, NewsItem};
use crate::resource::RecordId;

fn news(id: i64, title: &str, date: &str, content: &str) -> NewsItem {
    NewsItem {
        id: RecordId::Number(id),
        title: title.to_string(),
        date: date.to_string(),
        content: content.to_string(),
        created_at: None,
    }
}

fn event(id: i64, date: &str, title: &str, time: &str) -> EventItem {
    EventItem {
        id: RecordId::Number(id),
        date: date.to_string(),
        title: title.to_string(),
        time: time.to_string(),
        created_at: None,
    }
}

pub fn news_placeholder() -> Vec<NewsItem> {
    vec![
        news(
            1,
            "Frühjahrsputz am 15. März",
            "2024-02-20",
            "Gemeinsam machen wir unsere Anlage fit für den Frühling. Treffpunkt 9 Uhr am Vereinshaus.",
        ),
        news(
            2,
            "Neue Bewässerungsanlage installiert",
            "2024-02-15",
            "Dank der Gemeinschaftsaktion haben wir nun eine moderne Tröpfchenbewässerung in Bereich C.",
        ),
        news(
            3,
            "Jahreshauptversammlung - Einladung",
            "2024-02-10",
            "Wir laden herzlich zur Jahreshauptversammlung am 5. April ein. Tagesordnung folgt per Mail.",
        ),
    ]
}

pub fn events_placeholder() -> Vec<EventItem> {
    vec![
        event(1, "15.03.2025", "Frühjahrsputz", "09:00"),
        event(2, "05.04.2025", "Jahreshauptversammlung", "18:00"),
        event(3, "01.05.2025", "Maifest", "14:00"),
        event(4, "15.06.2025", "Sommerfest", "15:00"),
    ]
}
