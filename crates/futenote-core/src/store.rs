//! Reactive in-memory note store
//!
//! [`NoteStore`] is the single owner of the note collection. It is created
//! once at startup and handed to every consumer; mutations go through
//! [`NoteStore::add`], [`NoteStore::remove`] and [`NoteStore::update`], each of
//! which synchronously publishes a [`StoreEvent`] to all subscribers before
//! returning.
//!
//! The store holds non-`Send` callbacks, so it stays on the thread that
//! created it.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};
use crate::models::{Note, NoteId, NoteInput, NotePatch};
use crate::seed::default_notes;

/// Handle returned by [`NoteStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Kind of mutation that produced a [`StoreEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Added(NoteId),
    Removed(NoteId),
    Updated(NoteId),
}

impl StoreChange {
    /// Id of the affected note
    #[must_use]
    pub const fn note_id(self) -> NoteId {
        match self {
            Self::Added(id) | Self::Removed(id) | Self::Updated(id) => id,
        }
    }
}

/// Notification delivered to subscribers after a mutation.
#[derive(Debug)]
pub struct StoreEvent<'a> {
    pub change: StoreChange,
    /// Store revision after the mutation
    pub revision: u64,
    /// Snapshot of all notes after the mutation, in insertion order
    pub notes: &'a [Note],
}

type Subscriber = Box<dyn FnMut(&StoreEvent<'_>)>;

/// Ordered, observable collection of notes.
pub struct NoteStore {
    notes: Vec<Note>,
    revision: u64,
    last_issued: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl NoteStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            revision: 0,
            last_issued: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a store holding the built-in seed notes
    #[must_use]
    pub fn with_seed() -> Self {
        let notes = default_notes();
        let last_issued = max_id(&notes);
        Self {
            notes,
            last_issued,
            ..Self::new()
        }
    }

    /// Create a store from existing notes, keeping their order.
    ///
    /// Fails if two notes share an id.
    pub fn from_notes(notes: Vec<Note>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(notes.len());
        for note in &notes {
            if !seen.insert(note.id) {
                return Err(Error::DuplicateId(note.id));
            }
        }

        let last_issued = max_id(&notes);
        Ok(Self {
            notes,
            last_issued,
            ..Self::new()
        })
    }

    /// All notes in insertion order
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Look up a note by id
    #[must_use]
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Number of notes
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if the store holds no notes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Number of effective mutations since creation
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a new note and return it.
    ///
    /// The id is the current Unix time in milliseconds, bumped past the
    /// highest id the store has seen so that rapid calls never collide.
    /// If that id would overflow, the first id no note holds is used.
    pub fn add(&mut self, input: NoteInput) -> Note {
        let id = self.next_id();
        let note = Note::from_input(id, input);
        self.notes.push(note.clone());
        self.publish(StoreChange::Added(id));
        note
    }

    /// Remove the first note with the given id. No-op if absent.
    pub fn remove(&mut self, id: NoteId) {
        let Some(index) = self.notes.iter().position(|note| note.id == id) else {
            return;
        };
        self.notes.remove(index);
        self.publish(StoreChange::Removed(id));
    }

    /// Merge a patch into the note with the given id. No-op if absent.
    ///
    /// Subscribers are only notified when a field actually changed.
    pub fn update(&mut self, id: NoteId, patch: NotePatch) {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return;
        };
        if note.apply(patch) {
            self.publish(StoreChange::Updated(id));
        }
    }

    /// Register a callback invoked after every effective mutation
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&StoreEvent<'_>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Drop a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn next_id(&mut self) -> NoteId {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        let start = self
            .last_issued
            .checked_add(1)
            .map_or(now, |next| now.max(next));

        // Once the counter is exhausted the search wraps to the lowest free id.
        let taken: HashSet<u64> = self.notes.iter().map(|note| note.id.get()).collect();
        let raw = (start..=u64::MAX)
            .chain(0..start)
            .find(|raw| !taken.contains(raw))
            .unwrap_or(start);

        self.last_issued = self.last_issued.max(raw);
        NoteId::new(raw)
    }

    fn publish(&mut self, change: StoreChange) {
        self.revision += 1;
        tracing::trace!(?change, revision = self.revision, "note store mutated");

        let event = StoreEvent {
            change,
            revision: self.revision,
            notes: &self.notes,
        };
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&event);
        }
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::with_seed()
    }
}

impl fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteStore")
            .field("notes", &self.notes)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

fn max_id(notes: &[Note]) -> u64 {
    notes.iter().map(|note| note.id.get()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::models::{BadgeType, BadgeValue};
    use crate::resolve::{resolve_note, NoteResolution};
    use pretty_assertions::assert_eq;

    fn titles(store: &NoteStore) -> Vec<String> {
        store.notes().iter().map(|n| n.title.clone()).collect()
    }

    fn recorder(store: &mut NoteStore) -> Rc<RefCell<Vec<(StoreChange, u64, usize)>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        store.subscribe(move |event| {
            sink.borrow_mut()
                .push((event.change, event.revision, event.notes.len()));
        });
        log
    }

    #[test]
    fn test_seed_order() {
        let store = NoteStore::with_seed();
        assert_eq!(titles(&store), vec!["Dashboard", "Kanban", "Inbox", "Users"]);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut store = NoteStore::with_seed();
        store.add(NoteInput::new("Fifth", "five"));
        store.add(NoteInput::new("Sixth", "six"));

        assert_eq!(
            titles(&store),
            vec!["Dashboard", "Kanban", "Inbox", "Users", "Fifth", "Sixth"]
        );
    }

    #[test]
    fn test_add_ids_unique_under_rapid_calls() {
        let mut store = NoteStore::with_seed();
        for i in 0..200 {
            store.add(NoteInput::new(format!("note {i}"), ""));
        }

        let ids: HashSet<NoteId> = store.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), store.len());
        assert_eq!(store.len(), 204);
    }

    #[test]
    fn test_add_never_reuses_existing_id() {
        let far_future = NoteId::new(u64::MAX / 2);
        let mut store = NoteStore::from_notes(vec![Note::new(far_future, "Later", "")]).unwrap();

        let added = store.add(NoteInput::new("Now", ""));
        assert!(added.id > far_future);
    }

    #[test]
    fn test_add_after_max_id_picks_free_id() {
        let top = NoteId::new(u64::MAX);
        let mut store = NoteStore::from_notes(vec![Note::new(top, "Top", "")]).unwrap();

        let first = store.add(NoteInput::new("Next", ""));
        let second = store.add(NoteInput::new("After", ""));

        assert_ne!(first.id, top);
        assert_ne!(second.id, top);
        assert_ne!(first.id, second.id);

        let ids: HashSet<NoteId> = store.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_add_returns_stored_note() {
        let mut store = NoteStore::new();
        let note =
            store.add(NoteInput::new("Hello", "World").with_badge("New", BadgeType::Success));

        assert_eq!(store.get(note.id), Some(&note));
        assert_eq!(note.badge, Some(BadgeValue::from("New")));
    }

    #[test]
    fn test_remove_then_lookup_is_not_found() {
        let mut store = NoteStore::with_seed();
        store.remove(NoteId::new(2));

        assert_eq!(store.len(), 3);
        assert_eq!(
            resolve_note(store.notes(), "2"),
            NoteResolution::NotFound("2".to_string())
        );
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = NoteStore::with_seed();
        let log = recorder(&mut store);

        store.remove(NoteId::new(999));

        assert_eq!(store.len(), 4);
        assert_eq!(store.revision(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_update_title_leaves_other_fields() {
        let mut store = NoteStore::with_seed();
        let before = store.get(NoteId::new(3)).cloned().unwrap();

        store.update(NoteId::new(3), NotePatch::title("Mailbox"));

        let after = store.get(NoteId::new(3)).unwrap();
        assert_eq!(after.title, "Mailbox");
        assert_eq!(after.content, before.content);
        assert_eq!(after.badge, before.badge);
        assert_eq!(after.badge_type, before.badge_type);
        assert_eq!(titles(&store)[2], "Mailbox");
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut store = NoteStore::with_seed();
        let log = recorder(&mut store);

        store.update(NoteId::new(42), NotePatch::title("Nope"));

        assert_eq!(titles(&store), vec!["Dashboard", "Kanban", "Inbox", "Users"]);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_subscribers_see_post_mutation_snapshot() {
        let mut store = NoteStore::with_seed();
        let log = recorder(&mut store);

        let added = store.add(NoteInput::new("New", ""));
        store.update(added.id, NotePatch::content("body"));
        store.remove(NoteId::new(1));

        assert_eq!(
            *log.borrow(),
            vec![
                (StoreChange::Added(added.id), 1, 5),
                (StoreChange::Updated(added.id), 2, 5),
                (StoreChange::Removed(NoteId::new(1)), 3, 4),
            ]
        );
    }

    #[test]
    fn test_subscriber_snapshot_contains_update() {
        let mut store = NoteStore::with_seed();
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        store.subscribe(move |event| {
            let title = event
                .notes
                .iter()
                .find(|n| n.id == event.change.note_id())
                .map(|n| n.title.clone());
            *sink.borrow_mut() = title;
        });

        store.update(NoteId::new(4), NotePatch::title("People"));

        assert_eq!(seen.borrow().as_deref(), Some("People"));
    }

    #[test]
    fn test_unchanged_update_publishes_nothing() {
        let mut store = NoteStore::with_seed();
        let log = recorder(&mut store);

        store.update(NoteId::new(1), NotePatch::title("Dashboard"));

        assert!(log.borrow().is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = NoteStore::with_seed();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.remove(NoteId::new(1));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.remove(NoteId::new(2));

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_from_notes_rejects_duplicate_ids() {
        let notes = vec![
            Note::new(NoteId::new(1), "a", ""),
            Note::new(NoteId::new(1), "b", ""),
        ];
        let err = NoteStore::from_notes(notes).unwrap_err();
        assert!(matches!(err, Error::DuplicateId(id) if id == NoteId::new(1)));
    }
}
