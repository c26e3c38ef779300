//! Create/edit form as a state machine.
//!
//! ```text
//! Idle ──Open*──→ Editing ──Set*──→ Editing
//!                    │
//!                    ├─ submit ok ──→ (store mutation) ──→ Idle
//!                    └─ submit err ─→ Editing { error }
//! ```

mod intent;
mod reducer;
mod state;
mod submit;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormMode, FormState};
pub use submit::{prepare_submit, Submission};
