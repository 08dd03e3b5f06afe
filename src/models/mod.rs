//! Data models for the folio client.
//!
//! Entities are flat records mirroring backend rows; the backend of record
//! generates ids and timestamps and returns the canonical record for every
//! create/update. Command structs carry the typed payloads for mutations;
//! query structs carry list filters, with unset fields omitted from the
//! wire.

pub mod agenda;
pub mod backup;
pub mod book;
pub mod collection;
pub mod goal;
pub mod journal;
pub mod note;
pub mod reading;
pub mod session;
pub mod settings;
pub mod stats;
pub mod tag;

pub use agenda::{
    AgendaBlock, AgendaQuery, CreateAgendaBlockCommand, MarkBlockCompletedCommand,
    UpdateAgendaBlockCommand,
};
pub use backup::BackupMetadata;
pub use book::{Book, BookQuery, BookStatus, BookType, CreateBookCommand, UpdateBookCommand};
pub use collection::{
    AddBooksToCollectionCommand, Collection, CreateCollectionCommand, UpdateCollectionCommand,
};
pub use goal::{CreateGoalCommand, Goal, GoalKind};
pub use journal::{CreateJournalEntryCommand, JournalEntry, JournalQuery, UpdateJournalEntryCommand};
pub use note::{CreateNoteCommand, Note, NoteKind, NoteQuery, Sentiment};
pub use reading::{CreateReadingCommand, Reading};
pub use session::{CreateSessionCommand, Session, SessionQuery, UpdateSessionCommand};
pub use settings::Setting;
pub use stats::{BookSummary, CurrentBookStatistics, MonthStatistics, Statistics, TodayStatistics};
pub use tag::{AddTagsToBookCommand, CreateTagCommand, Tag};
