use std::rc::Rc;

use shared::{CategoryOption, ExpenseBoard, FlagCatalog, FlagOption, NavLink, PendingExpense};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::notice::Notice;
use crate::services::api::{ApiClient, UpdateError};

/// Tunables for the categorization flow. The fade delay is a presentation
/// choice, so it stays configurable rather than hard-coded at the call
/// sites.
#[derive(Debug, Clone, PartialEq)]
pub struct UseExpensesConfig {
    pub row_fade_out_ms: u32,
}

impl Default for UseExpensesConfig {
    fn default() -> Self {
        Self {
            row_fade_out_ms: 500,
        }
    }
}

/// Board transitions. Routed through a reducer so that continuations from
/// overlapping row submissions always apply to the latest board, never to
/// a stale snapshot.
pub enum BoardAction {
    Load(Vec<PendingExpense>),
    SetCategory {
        expense_id: String,
        category_id: String,
    },
    SetFlag {
        expense_id: String,
        flag_id: Option<String>,
    },
    BeginFade(String),
    Remove(String),
}

#[derive(Clone, PartialEq, Default)]
pub struct BoardState {
    pub board: ExpenseBoard,
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut board = self.board.clone();
        match action {
            BoardAction::Load(expenses) => board = ExpenseBoard::new(expenses),
            BoardAction::SetCategory {
                expense_id,
                category_id,
            } => board.set_category(&expense_id, category_id),
            BoardAction::SetFlag {
                expense_id,
                flag_id,
            } => board.set_flag(&expense_id, flag_id),
            BoardAction::BeginFade(expense_id) => board.begin_fade(&expense_id),
            BoardAction::Remove(expense_id) => board.remove_row(&expense_id),
        }
        Rc::new(Self { board })
    }
}

#[derive(Clone)]
pub struct ExpensesState {
    pub board: ExpenseBoard,
    pub loading: bool,
    pub load_error: Option<String>,
    pub categories: Vec<CategoryOption>,
    pub flags: Vec<FlagOption>,
    pub catalog: FlagCatalog,
    pub nav_links: Vec<NavLink>,
    pub notice: Option<Notice>,
}

pub struct UseExpensesResult {
    pub state: ExpensesState,
    pub actions: UseExpensesActions,
}

#[derive(Clone)]
pub struct UseExpensesActions {
    pub reload: Callback<()>,
    pub on_category_change: Callback<(String, String)>,
    pub on_flag_change: Callback<(String, Option<String>)>,
    pub save_expense: Callback<String>,
    pub dismiss_notice: Callback<()>,
}

#[hook]
pub fn use_expenses(api_client: &ApiClient, config: UseExpensesConfig) -> UseExpensesResult {
    let board = use_reducer(BoardState::default);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);
    let categories = use_state(Vec::<CategoryOption>::new);
    let flags = use_state(Vec::<FlagOption>::new);
    let catalog = use_state(FlagCatalog::default);
    let nav_links = use_state(Vec::<NavLink>::new);
    let notice = use_state(|| None::<Notice>);

    // Initial page load
    let reload = {
        let api_client = api_client.clone();
        let board = board.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let categories = categories.clone();
        let flags = flags.clone();
        let catalog = catalog.clone();
        let nav_links = nav_links.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let board = board.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();
            let categories = categories.clone();
            let flags = flags.clone();
            let catalog = catalog.clone();
            let nav_links = nav_links.clone();

            spawn_local(async move {
                loading.set(true);
                load_error.set(None);

                match api_client.get_pending_expenses().await {
                    Ok(data) => {
                        catalog.set(FlagCatalog::new(data.flags.clone()));
                        categories.set(data.categories);
                        flags.set(data.flags);
                        nav_links.set(data.nav_links);
                        board.dispatch(BoardAction::Load(data.expenses));
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to load pending expenses:", e.clone());
                        load_error.set(Some(e));
                    }
                }

                loading.set(false);
            });
        })
    };

    let on_category_change = {
        let board = board.clone();
        use_callback((), move |(expense_id, category_id): (String, String), _| {
            board.dispatch(BoardAction::SetCategory {
                expense_id,
                category_id,
            });
        })
    };

    let on_flag_change = {
        let board = board.clone();
        use_callback(
            (),
            move |(expense_id, flag_id): (String, Option<String>), _| {
                board.dispatch(BoardAction::SetFlag {
                    expense_id,
                    flag_id,
                });
            },
        )
    };

    // Save one row: validate, POST, fade, remove. Every failure path is
    // terminal for the click; the user re-initiates.
    let save_expense = {
        let api_client = api_client.clone();
        let notice = notice.clone();
        let fade_out_ms = config.row_fade_out_ms;

        use_callback(board.clone(), move |expense_id: String, board| {
            notice.set(None);

            let request = match board.board.prepare_submission(&expense_id) {
                Ok(request) => request,
                Err(e) => {
                    // Validation failure: no network call at all
                    notice.set(Some(Notice::validation(e.message())));
                    return;
                }
            };

            let api_client = api_client.clone();
            let notice = notice.clone();
            let board = board.clone();

            spawn_local(async move {
                match api_client.update_expense(&request).await {
                    Ok(()) => {
                        board.dispatch(BoardAction::BeginFade(expense_id.clone()));
                        gloo::timers::future::TimeoutFuture::new(fade_out_ms).await;
                        board.dispatch(BoardAction::Remove(expense_id));
                    }
                    Err(UpdateError::Rejected(message)) => {
                        notice.set(Some(Notice::error(message)));
                    }
                    Err(UpdateError::Transport(detail)) => {
                        gloo::console::error!("Expense update failed:", detail);
                        notice.set(Some(Notice::error(
                            "Could not reach the server. Please try again.",
                        )));
                    }
                }
            });
        })
    };

    let dismiss_notice = {
        let notice = notice.clone();
        use_callback((), move |_, _| {
            notice.set(None);
        })
    };

    use_effect_with((), {
        let reload = reload.clone();
        move |_| {
            reload.emit(());
            || ()
        }
    });

    let state = ExpensesState {
        board: board.board.clone(),
        loading: *loading,
        load_error: (*load_error).clone(),
        categories: (*categories).clone(),
        flags: (*flags).clone(),
        catalog: (*catalog).clone(),
        nav_links: (*nav_links).clone(),
        notice: (*notice).clone(),
    };

    let actions = UseExpensesActions {
        reload,
        on_category_change,
        on_flag_change,
        save_expense,
        dismiss_notice,
    };

    UseExpensesResult { state, actions }
}
