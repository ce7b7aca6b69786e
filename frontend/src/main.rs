use std::rc::Rc;

use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{ExpenseList, NavBar, NoticeBanner};
use hooks::{use_expenses, UseExpensesConfig};
use services::api::ApiClient;
use services::editor::{EditorHandle, NavigationEditor};

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let expenses = use_expenses(&api_client, UseExpensesConfig::default());
    let state = expenses.state;
    let actions = expenses.actions;

    // The full editor lives on its own server-rendered page; edit clicks
    // just hand off to it.
    let editor = use_memo((), |_| {
        EditorHandle::new(Rc::new(NavigationEditor))
    });

    html! {
        <>
            <header class="header">
                <div class="container">
                    <NavBar links={state.nav_links.clone()} />
                    <h1>{"Categorize imported expenses"}</h1>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <NoticeBanner
                        notice={state.notice.clone()}
                        on_dismiss={actions.dismiss_notice.clone()}
                    />

                    {if state.loading {
                        html! { <div class="loading">{"Loading expenses..."}</div> }
                    } else if let Some(error) = state.load_error.as_ref() {
                        html! {
                            <div class="load-error">
                                <p>{error}</p>
                                <button
                                    type="button"
                                    class="retry-btn"
                                    onclick={
                                        let reload = actions.reload.clone();
                                        Callback::from(move |_| reload.emit(()))
                                    }
                                >
                                    {"Try again"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {
                            <ExpenseList
                                board={state.board.clone()}
                                categories={state.categories.clone()}
                                flags={state.flags.clone()}
                                catalog={state.catalog.clone()}
                                editor={(*editor).clone()}
                                on_category_change={actions.on_category_change.clone()}
                                on_flag_change={actions.on_flag_change.clone()}
                                on_save={actions.save_expense.clone()}
                            />
                        }
                    }}
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
