pub mod notifier;
pub mod rules;
pub mod scheduler;
pub mod sent_log;

pub use notifier::{ConsoleNotifier, Notifier, RecordingNotifier};
pub use rules::due_reminders;
pub use scheduler::{ReminderScheduler, TickOutcome};
pub use sent_log::{InMemorySentLog, ReminderSentLog};
