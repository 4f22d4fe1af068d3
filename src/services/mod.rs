pub mod export;
pub mod generation;
pub mod notifier;

pub use export::ExportOrchestrator;
pub use generation::{GenerationRequester, GenerationState};
pub use notifier::{ConsoleNotifier, MemoryNotifier, Notifier};
