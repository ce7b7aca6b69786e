use crate::services::editor::EditorHandle;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EditButtonProps {
    /// Expense this button edits. Buttons without an id render but their
    /// clicks go nowhere.
    #[prop_or_default]
    pub expense_id: Option<String>,
    pub editor: EditorHandle,
}

/// Edit button with exactly one click handler for its lifetime. Re-renders
/// after a partial page replacement replace the node declaratively, so
/// handlers can never accumulate the way manually re-bound listeners do.
#[function_component(EditButton)]
pub fn edit_button(props: &EditButtonProps) -> Html {
    let onclick = {
        let editor = props.editor.clone();
        let expense_id = props.expense_id.clone();
        Callback::from(move |_: MouseEvent| {
            editor.request_edit(expense_id.as_deref());
        })
    };

    html! {
        <button type="button" class="edit-expense-btn" onclick={onclick}>
            {"Edit"}
        </button>
    }
}
