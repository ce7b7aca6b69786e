use crate::components::ExpenseRowCard;
use crate::services::editor::EditorHandle;
use shared::{CategoryOption, ExpenseBoard, FlagCatalog, FlagOption};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub board: ExpenseBoard,
    pub categories: Vec<CategoryOption>,
    pub flags: Vec<FlagOption>,
    pub catalog: FlagCatalog,
    pub editor: EditorHandle,
    pub on_category_change: Callback<(String, String)>,
    pub on_flag_change: Callback<(String, Option<String>)>,
    pub on_save: Callback<String>,
    /// Host-form dirty notifier, forwarded to every row's flag preview.
    #[prop_or_default]
    pub on_dirty: Option<Callback<()>>,
}

/// The categorization list: one card per pending expense, a visible counter
/// that always equals the number of rendered rows, and the completion
/// notice once everything is categorized.
#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    if props.board.is_complete() {
        return html! {
            <div class="expense-list" id="expense-list">
                <div class="completion-notice">
                    <h3>{"All expenses categorized!"}</h3>
                    <p>
                        <a href="/tricount/import" class="import-link">{"Import more expenses"}</a>
                        {" or "}
                        <a href="/tricount" class="list-link">{"view the full list"}</a>
                        {"."}
                    </p>
                </div>
            </div>
        };
    }

    html! {
        <div class="expense-list" id="expense-list">
            <div class="pending-summary">
                <span class="pending-count">{props.board.remaining()}</span>
                {" expenses left to categorize"}
            </div>
            {for props.board.rows().iter().map(|row| {
                html! {
                    <ExpenseRowCard
                        key={row.expense.id.clone()}
                        row={row.clone()}
                        categories={props.categories.clone()}
                        flags={props.flags.clone()}
                        catalog={props.catalog.clone()}
                        editor={props.editor.clone()}
                        on_category_change={props.on_category_change.clone()}
                        on_flag_change={props.on_flag_change.clone()}
                        on_save={props.on_save.clone()}
                        on_dirty={props.on_dirty.clone()}
                    />
                }
            })}
        </div>
    }
}
