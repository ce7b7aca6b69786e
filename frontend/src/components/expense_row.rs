use crate::components::{EditButton, FlagPreview};
use crate::services::editor::EditorHandle;
use shared::{format_expense_date, CategoryOption, ExpenseRow, FlagCatalog, FlagOption};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseRowCardProps {
    pub row: ExpenseRow,
    pub categories: Vec<CategoryOption>,
    pub flags: Vec<FlagOption>,
    pub catalog: FlagCatalog,
    pub editor: EditorHandle,
    /// (expense id, category id)
    pub on_category_change: Callback<(String, String)>,
    /// (expense id, flag id or None)
    pub on_flag_change: Callback<(String, Option<String>)>,
    pub on_save: Callback<String>,
    /// Host-form dirty notifier, forwarded to the flag preview.
    #[prop_or_default]
    pub on_dirty: Option<Callback<()>>,
}

/// One pending expense with its categorization form. Saving goes through
/// `on_save`; the row itself never talks to the network.
#[function_component(ExpenseRowCard)]
pub fn expense_row_card(props: &ExpenseRowCardProps) -> Html {
    let expense = &props.row.expense;
    let expense_id = expense.id.clone();

    let on_category_change = {
        let on_category_change = props.on_category_change.clone();
        let expense_id = expense_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_category_change.emit((expense_id.clone(), select.value()));
        })
    };

    let on_flag_change = {
        let on_flag_change = props.on_flag_change.clone();
        let expense_id = expense_id.clone();
        Callback::from(move |flag_id: String| {
            let flag_id = (!flag_id.is_empty()).then_some(flag_id);
            on_flag_change.emit((expense_id.clone(), flag_id));
        })
    };

    let onsubmit = {
        let on_save = props.on_save.clone();
        let expense_id = expense_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(expense_id.clone());
        })
    };

    let amount_class = if expense.amount >= 0.0 {
        "amount positive"
    } else {
        "amount negative"
    };

    html! {
        <div
            class={classes!("expense-row", props.row.fading.then_some("fading"))}
            data-expense-id={expense.id.clone()}
        >
            <div class="expense-details">
                <span class="expense-description">{&expense.description}</span>
                <span class="expense-date">{format_expense_date(&expense.date)}</span>
                <span class={amount_class}>{format!("{:.2}", expense.amount)}</span>
            </div>

            <form
                id={format!("categorize-form-{}", expense.id)}
                class="categorize-form"
                onsubmit={onsubmit}
            >
                <select class="category-select" onchange={on_category_change}>
                    <option value="" selected={props.row.category_id.is_empty()}>
                        {"Select a category"}
                    </option>
                    {for props.categories.iter().map(|category| {
                        html! {
                            <option
                                value={category.id.clone()}
                                selected={props.row.category_id == category.id}
                            >
                                {&category.name}
                            </option>
                        }
                    })}
                </select>

                <FlagPreview
                    flags={props.flags.clone()}
                    catalog={props.catalog.clone()}
                    selected={props.row.flag_id.clone().unwrap_or_default()}
                    on_change={on_flag_change}
                    on_dirty={props.on_dirty.clone()}
                />

                <button
                    type="submit"
                    class="save-expense-btn"
                    data-expense-id={expense.id.clone()}
                    disabled={props.row.fading}
                >
                    {"Save"}
                </button>
                <EditButton
                    expense_id={Some(expense.id.clone())}
                    editor={props.editor.clone()}
                />
            </form>
        </div>
    }
}
