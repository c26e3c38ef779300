use super::intent::Intent;
use super::state::State;

/// Transforms state based on intents.
///
/// All transitions of a slice go through its reducer, which keeps them
/// testable without a running store or network.
pub trait Reducer {
    type State: State;
    type Intent: Intent;

    /// Consume the current state and an intent, return the next state.
    ///
    /// Must be deterministic: identical inputs give identical output.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
