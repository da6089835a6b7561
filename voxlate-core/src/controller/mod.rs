pub mod actor;
pub mod events;
pub mod interaction;

pub use actor::{TranslatorActor, TranslatorActorBuilder, TranslatorMessage};
pub use events::{EventSender, TranslatorEvent};
pub use interaction::{Interaction, PreparedRequest, Status, TranslateFailure, Translation};
