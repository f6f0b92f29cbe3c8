pub mod derive;
pub mod gate;
pub mod line_items;
pub mod summary;

pub use derive::{derive_item, DerivedResult};
pub use gate::{check_submittable, FormPhase, GateRejection};
pub use line_items::{BatchSettings, ItemField, ItemsAction, ItemsState, LineItem};
pub use summary::{summarize, AggregateSummary};
