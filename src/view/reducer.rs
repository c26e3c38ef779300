use crate::mvi::Reducer;
use crate::view::intent::ListViewIntent;
use crate::view::state::ListViewState;

pub struct ListViewReducer;

impl Reducer for ListViewReducer {
    type State = ListViewState;
    type Intent = ListViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // The current page is kept; a page past the end renders empty.
            ListViewIntent::SetSearch { text } => ListViewState {
                search: text,
                ..state
            },
            ListViewIntent::ToggleSort => ListViewState {
                order: state.order.toggle(),
                ..state
            },
            ListViewIntent::ChangePage { page, page_size } => {
                let page_size = if state.page_size_options.contains(&page_size) {
                    page_size
                } else {
                    state.page_size
                };
                ListViewState {
                    page: page.max(1),
                    page_size,
                    ..state
                }
            }
        }
    }
}
