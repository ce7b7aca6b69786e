use std::rc::Rc;

/// Capability to open an expense in the full editor. The categorization
/// page only delegates to it; it never owns the editing flow.
pub trait ExpenseEditor {
    fn load_expense(&self, expense_id: &str);
}

/// Optional editor dependency handed to edit buttons through props. A page
/// without a registered editor still renders its buttons; clicking them is
/// a benign no-op.
#[derive(Clone, Default)]
pub struct EditorHandle {
    editor: Option<Rc<dyn ExpenseEditor>>,
}

impl EditorHandle {
    pub fn new(editor: Rc<dyn ExpenseEditor>) -> Self {
        Self {
            editor: Some(editor),
        }
    }

    /// A handle with no editor behind it.
    pub fn absent() -> Self {
        Self { editor: None }
    }

    pub fn is_present(&self) -> bool {
        self.editor.is_some()
    }

    /// Delegate an edit click. Returns whether the editor was actually
    /// invoked; a missing editor or a button without an expense id both
    /// resolve to `false` without surfacing an error.
    pub fn request_edit(&self, expense_id: Option<&str>) -> bool {
        match (&self.editor, expense_id) {
            (Some(editor), Some(id)) if !id.is_empty() => {
                editor.load_expense(id);
                true
            }
            _ => false,
        }
    }
}

impl PartialEq for EditorHandle {
    fn eq(&self, other: &Self) -> bool {
        match (&self.editor, &other.editor) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Editor that hands off to the server-rendered edit view by navigating
/// the browser to it.
pub struct NavigationEditor;

impl ExpenseEditor for NavigationEditor {
    fn load_expense(&self, expense_id: &str) {
        let target = format!("/tricount/expenses/{}/edit", expense_id);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().assign(&target) {
                gloo::console::error!("Failed to navigate to expense editor:", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    struct CountingEditor {
        calls: Rc<Cell<u32>>,
        last_id: Rc<std::cell::RefCell<String>>,
    }

    impl ExpenseEditor for CountingEditor {
        fn load_expense(&self, expense_id: &str) {
            self.calls.set(self.calls.get() + 1);
            *self.last_id.borrow_mut() = expense_id.to_string();
        }
    }

    fn counting_handle() -> (EditorHandle, Rc<Cell<u32>>, Rc<std::cell::RefCell<String>>) {
        let calls = Rc::new(Cell::new(0));
        let last_id = Rc::new(std::cell::RefCell::new(String::new()));
        let handle = EditorHandle::new(Rc::new(CountingEditor {
            calls: calls.clone(),
            last_id: last_id.clone(),
        }));
        (handle, calls, last_id)
    }

    #[wasm_bindgen_test]
    fn test_each_click_invokes_editor_once() {
        let (handle, calls, last_id) = counting_handle();

        assert!(handle.request_edit(Some("e42")));
        assert_eq!(calls.get(), 1);
        assert_eq!(*last_id.borrow(), "e42");

        // A clone of the handle still drives the same editor, one call per
        // click, no accumulation.
        let clone = handle.clone();
        assert!(clone.request_edit(Some("e43")));
        assert_eq!(calls.get(), 2);
        assert_eq!(*last_id.borrow(), "e43");
    }

    #[wasm_bindgen_test]
    fn test_missing_editor_is_a_noop() {
        let handle = EditorHandle::absent();
        assert!(!handle.is_present());
        assert!(!handle.request_edit(Some("e42")));
    }

    #[wasm_bindgen_test]
    fn test_missing_expense_id_is_a_noop() {
        let (handle, calls, _) = counting_handle();
        assert!(!handle.request_edit(None));
        assert!(!handle.request_edit(Some("")));
        assert_eq!(calls.get(), 0);
    }
}
