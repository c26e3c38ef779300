//! Unidirectional state primitives shared by the store, the list view and
//! the user form.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Projection / View
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **State**: plain data, cloned to produce the next state
//! - **Intent**: a user action or a completed side effect (e.g. a fetch)
//! - **Reducer**: pure `(State, Intent) -> State`; no I/O, no clocks

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
