//! Event descriptors: the events the views show.

use crate::style::{EventAppearance, LineBreakMode};
use chrono::{DateTime, Duration, Utc};
use core::fmt;
use parking_lot::Mutex;
use std::sync::Arc;
use uuid::Uuid;

/// A unique identifier for an event.
///
/// (this is just a UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(Uuid);

impl EventId {
    pub fn new() -> EventId {
        EventId(Uuid::new_v4())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A closed time interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateInterval {
    /// Creates an interval; returns `None` if it ends before it starts.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<DateInterval> {
        if end < start {
            None
        } else {
            Some(DateInterval { start, end })
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn intersects(&self, other: &DateInterval) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// An event as seen by the timeline views.
///
/// Views only read descriptors; they are shared by reference (`Arc`) so consumers can keep a
/// handle on the exact event a view shows.
pub trait EventDescriptor: fmt::Debug + Send + Sync {
    fn id(&self) -> EventId;

    fn date_interval(&self) -> DateInterval;

    fn is_all_day(&self) -> bool;

    fn text(&self) -> &str;

    fn time_label_text(&self) -> &str;

    fn symbol_label_text(&self) -> &str;

    fn line_break_mode(&self) -> Option<LineBreakMode> {
        None
    }

    fn appearance(&self) -> &EventAppearance;

    /// If true, this descriptor is an editable copy of another event.
    fn is_editing(&self) -> bool;
}

pub type SharedEvent = Arc<Mutex<Event>>;

/// The standard event descriptor.
#[derive(Debug, Clone)]
pub struct Event {
    id: EventId,
    pub text: String,
    pub date_interval: DateInterval,
    pub is_all_day: bool,
    pub time_label_text: String,
    pub symbol_label_text: String,
    pub line_break_mode: Option<LineBreakMode>,
    pub appearance: EventAppearance,
    /// The event this one is an editable copy of.
    edited_event: Option<SharedEvent>,
}

impl Event {
    /// Creates a timed event.
    pub fn new(text: impl Into<String>, date_interval: DateInterval) -> Event {
        Event {
            id: EventId::new(),
            text: text.into(),
            date_interval,
            is_all_day: false,
            time_label_text: String::new(),
            symbol_label_text: String::new(),
            line_break_mode: None,
            appearance: EventAppearance::default(),
            edited_event: None,
        }
    }

    /// Creates an all-day event.
    pub fn all_day(text: impl Into<String>, date_interval: DateInterval) -> Event {
        Event {
            is_all_day: true,
            ..Event::new(text, date_interval)
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn into_shared(self) -> SharedEvent {
        Arc::new(Mutex::new(self))
    }

    /// Returns an editable copy of a shared event.
    ///
    /// The copy gets its own id and keeps a reference to the original, so changes can be
    /// committed back with [`Event::commit_editing`].
    pub fn make_editable(original: &SharedEvent) -> Event {
        let mut copy = original.lock().clone();
        copy.id = EventId::new();
        copy.edited_event = Some(Arc::clone(original));
        copy
    }

    pub fn edited_event(&self) -> Option<&SharedEvent> {
        self.edited_event.as_ref()
    }

    /// Writes this copy’s time interval back into the original event.
    ///
    /// Returns false if this isn’t an editable copy.
    pub fn commit_editing(&self) -> bool {
        match &self.edited_event {
            Some(original) => {
                original.lock().date_interval = self.date_interval;
                true
            }
            None => false,
        }
    }
}

impl EventDescriptor for Event {
    fn id(&self) -> EventId {
        self.id
    }

    fn date_interval(&self) -> DateInterval {
        self.date_interval
    }

    fn is_all_day(&self) -> bool {
        self.is_all_day
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn time_label_text(&self) -> &str {
        &self.time_label_text
    }

    fn symbol_label_text(&self) -> &str {
        &self.symbol_label_text
    }

    fn line_break_mode(&self) -> Option<LineBreakMode> {
        self.line_break_mode
    }

    fn appearance(&self) -> &EventAppearance {
        &self.appearance
    }

    fn is_editing(&self) -> bool {
        self.edited_event.is_some()
    }
}
