use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A flag a user can attach to an expense: a colored, icon-carrying label,
/// distinct from the expense's category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagOption {
    pub id: String,
    /// Hex background color, e.g. "#ff6b6b"
    pub color: String,
    /// Icon class name, e.g. "fa-star"
    pub icon: String,
    pub name: String,
}

/// A category an imported expense can be filed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: String,
    pub name: String,
}

/// One imported expense awaiting categorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingExpense {
    pub id: String,
    pub description: String,
    pub amount: f64,
    /// Human-readable timestamp with timezone (RFC 3339)
    pub date: String,
}

/// A navigation link rendered in the page chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    /// Optional hover tooltip text
    pub tooltip: Option<String>,
}

/// Initial view-model for the categorization page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingExpensesResponse {
    pub expenses: Vec<PendingExpense>,
    pub categories: Vec<CategoryOption>,
    pub flags: Vec<FlagOption>,
    pub nav_links: Vec<NavLink>,
}

/// Payload for the update endpoint. Sent form-encoded, not JSON — the
/// backend owns the field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateExpenseRequest {
    pub expense_id: String,
    pub category_id: String,
    pub flag_id: Option<String>,
}

impl UpdateExpenseRequest {
    /// Key/value pairs in the order the backend expects them.
    pub fn form_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("expense_id", self.expense_id.as_str()),
            ("category_id", self.category_id.as_str()),
        ];
        if let Some(flag_id) = self.flag_id.as_deref() {
            pairs.push(("flag_id", flag_id));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateExpenseResponse {
    pub success: bool,
    pub error: Option<String>,
}

/// Active-link rule for navigation: exact match always wins; a non-root
/// href also matches any path it prefixes.
pub fn nav_link_is_active(href: &str, current_path: &str) -> bool {
    href == current_path || (href != "/" && current_path.starts_with(href))
}

/// Resolved presentation data for the flag preview badge.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagBadge {
    pub background: String,
    pub text_color: String,
    pub icon_class: String,
    pub label: String,
}

/// Lookup of flag options keyed by id, handed to components instead of
/// being read from a page global.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlagCatalog {
    flags: HashMap<String, FlagOption>,
}

impl FlagCatalog {
    pub fn new(options: Vec<FlagOption>) -> Self {
        Self {
            flags: options.into_iter().map(|f| (f.id.clone(), f)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&FlagOption> {
        self.flags.get(id)
    }

    /// Badge for the given flag id. An empty or unknown id resolves to
    /// `None` — the preview's empty state, not an error.
    pub fn badge(&self, id: &str) -> Option<FlagBadge> {
        let flag = self.flags.get(id)?;
        Some(FlagBadge {
            background: flag.color.clone(),
            text_color: contrast_text_color(&flag.color).to_string(),
            icon_class: flag.icon.clone(),
            label: flag.name.clone(),
        })
    }
}

/// Black-or-white text color for a hex background, by perceived luminance.
/// Unparseable colors get dark text.
pub fn contrast_text_color(hex: &str) -> &'static str {
    let digits = hex.trim_start_matches('#');
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    // Byte-indexed slicing below, so multibyte input must bail out here
    if expanded.len() != 6 || !expanded.is_ascii() {
        return "#212529";
    }
    let channel =
        |range: std::ops::Range<usize>| u8::from_str_radix(&expanded[range], 16).map(f64::from);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => {
            let luminance = 0.299 * r + 0.587 * g + 0.114 * b;
            if luminance > 150.0 {
                "#212529"
            } else {
                "#ffffff"
            }
        }
        _ => "#212529",
    }
}

/// "June 5, 2025" from an RFC 3339 timestamp; falls back to the raw string
/// when it does not parse.
pub fn format_expense_date(rfc3339_date: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(rfc3339_date) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => rfc3339_date.to_string(),
    }
}

/// Why a row's form cannot be submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// No category chosen for the row.
    MissingCategory,
    /// The row is no longer on the board.
    UnknownExpense,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingCategory => "Please select a category before saving.",
            ValidationError::UnknownExpense => "This expense is no longer listed.",
        }
    }
}

/// One rendered expense row and its form state.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub expense: PendingExpense,
    pub category_id: String,
    pub flag_id: Option<String>,
    /// Set when the server confirmed the categorization and the row is
    /// fading out, waiting to be removed.
    pub fading: bool,
}

/// Row/counter bookkeeping for the categorization list. The visible counter
/// is `remaining()`, derived from the rows themselves, so it can never
/// disagree with what is displayed and never goes negative.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseBoard {
    rows: Vec<ExpenseRow>,
}

impl ExpenseBoard {
    pub fn new(expenses: Vec<PendingExpense>) -> Self {
        Self {
            rows: expenses
                .into_iter()
                .map(|expense| ExpenseRow {
                    expense,
                    category_id: String::new(),
                    flag_id: None,
                    fading: false,
                })
                .collect(),
        }
    }

    pub fn rows(&self) -> &[ExpenseRow] {
        &self.rows
    }

    /// Number of rows still displayed, fading ones included.
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }

    /// All rows categorized and removed.
    pub fn is_complete(&self) -> bool {
        self.rows.is_empty()
    }

    fn row_mut(&mut self, expense_id: &str) -> Option<&mut ExpenseRow> {
        self.rows.iter_mut().find(|r| r.expense.id == expense_id)
    }

    pub fn set_category(&mut self, expense_id: &str, category_id: String) {
        if let Some(row) = self.row_mut(expense_id) {
            row.category_id = category_id;
        }
    }

    pub fn set_flag(&mut self, expense_id: &str, flag_id: Option<String>) {
        if let Some(row) = self.row_mut(expense_id) {
            row.flag_id = flag_id;
        }
    }

    /// Gate for the save action: builds the update payload, or reports why
    /// the form must not be submitted. No payload means no network call.
    pub fn prepare_submission(
        &self,
        expense_id: &str,
    ) -> Result<UpdateExpenseRequest, ValidationError> {
        let row = self
            .rows
            .iter()
            .find(|r| r.expense.id == expense_id)
            .ok_or(ValidationError::UnknownExpense)?;
        if row.category_id.trim().is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        Ok(UpdateExpenseRequest {
            expense_id: row.expense.id.clone(),
            category_id: row.category_id.clone(),
            flag_id: row.flag_id.clone().filter(|f| !f.is_empty()),
        })
    }

    /// Server confirmed the categorization; the row starts fading but stays
    /// counted until `remove_row` runs after the fade delay.
    pub fn begin_fade(&mut self, expense_id: &str) {
        if let Some(row) = self.row_mut(expense_id) {
            row.fading = true;
        }
    }

    /// Drop the row. Removing an id that is already gone is a no-op, so a
    /// late or duplicate continuation cannot drive the counter negative.
    pub fn remove_row(&mut self, expense_id: &str) {
        self.rows.retain(|r| r.expense.id != expense_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str) -> PendingExpense {
        PendingExpense {
            id: id.to_string(),
            description: format!("Imported expense {id}"),
            amount: -12.5,
            date: "2026-08-01T09:30:00+02:00".to_string(),
        }
    }

    fn board_with(ids: &[&str]) -> ExpenseBoard {
        ExpenseBoard::new(ids.iter().map(|id| expense(id)).collect())
    }

    #[test]
    fn test_nav_link_active_rule() {
        // Exact match
        assert!(nav_link_is_active("/tricount", "/tricount"));
        assert!(nav_link_is_active("/", "/"));
        // Prefix match for non-root hrefs
        assert!(nav_link_is_active("/tricount", "/tricount/import"));
        // Root must not prefix-match everything
        assert!(!nav_link_is_active("/", "/tricount"));
        // Unrelated paths
        assert!(!nav_link_is_active("/flags", "/tricount/import"));
    }

    #[test]
    fn test_flag_badge_resolution() {
        let catalog = FlagCatalog::new(vec![FlagOption {
            id: "3".to_string(),
            color: "#1a1a2e".to_string(),
            icon: "fa-star".to_string(),
            name: "Vacation".to_string(),
        }]);

        let badge = catalog.badge("3").unwrap();
        assert_eq!(badge.background, "#1a1a2e");
        assert_eq!(badge.text_color, "#ffffff");
        assert_eq!(badge.icon_class, "fa-star");
        assert_eq!(badge.label, "Vacation");

        // Unknown and empty ids resolve to the empty preview state
        assert_eq!(catalog.badge("99"), None);
        assert_eq!(catalog.badge(""), None);
    }

    #[test]
    fn test_contrast_text_color() {
        assert_eq!(contrast_text_color("#ffffff"), "#212529");
        assert_eq!(contrast_text_color("#000000"), "#ffffff");
        // Shorthand hex
        assert_eq!(contrast_text_color("#fff"), "#212529");
        // Garbage falls back to dark text
        assert_eq!(contrast_text_color("tomato"), "#212529");
        // Multibyte input must not slice mid-character
        assert_eq!(contrast_text_color("#\u{20ac}\u{20ac}"), "#212529");
        assert_eq!(contrast_text_color("#ééé"), "#212529");
    }

    #[test]
    fn test_submission_requires_category() {
        let mut board = board_with(&["e1"]);

        let err = board.prepare_submission("e1").unwrap_err();
        assert_eq!(err, ValidationError::MissingCategory);

        // Whitespace is not a category either
        board.set_category("e1", "   ".to_string());
        assert_eq!(
            board.prepare_submission("e1").unwrap_err(),
            ValidationError::MissingCategory
        );

        board.set_category("e1", "7".to_string());
        let request = board.prepare_submission("e1").unwrap();
        assert_eq!(request.expense_id, "e1");
        assert_eq!(request.category_id, "7");
        assert_eq!(request.flag_id, None);
    }

    #[test]
    fn test_unknown_expense_rejected() {
        let board = board_with(&["e1"]);
        assert_eq!(
            board.prepare_submission("ghost").unwrap_err(),
            ValidationError::UnknownExpense
        );
    }

    #[test]
    fn test_empty_flag_dropped_from_payload() {
        let mut board = board_with(&["e1"]);
        board.set_category("e1", "7".to_string());
        board.set_flag("e1", Some(String::new()));

        let request = board.prepare_submission("e1").unwrap();
        assert_eq!(request.flag_id, None);
        assert_eq!(
            request.form_pairs(),
            vec![("expense_id", "e1"), ("category_id", "7")]
        );
    }

    #[test]
    fn test_form_pairs_include_flag() {
        let request = UpdateExpenseRequest {
            expense_id: "e2".to_string(),
            category_id: "4".to_string(),
            flag_id: Some("9".to_string()),
        };
        assert_eq!(
            request.form_pairs(),
            vec![("expense_id", "e2"), ("category_id", "4"), ("flag_id", "9")]
        );
    }

    #[test]
    fn test_success_path_counter_and_completion() {
        let mut board = board_with(&["e1", "e2"]);
        assert_eq!(board.remaining(), 2);

        // Fading rows are still displayed, so still counted
        board.begin_fade("e1");
        assert_eq!(board.remaining(), 2);
        assert!(board.rows()[0].fading);

        board.remove_row("e1");
        assert_eq!(board.remaining(), 1);
        assert!(!board.is_complete());

        board.begin_fade("e2");
        board.remove_row("e2");
        assert_eq!(board.remaining(), 0);
        assert!(board.is_complete());
    }

    #[test]
    fn test_remove_is_idempotent_at_zero() {
        let mut board = board_with(&["e1"]);
        board.remove_row("e1");
        board.remove_row("e1");
        board.remove_row("missing");
        assert_eq!(board.remaining(), 0);
        assert!(board.is_complete());
    }

    #[test]
    fn test_format_expense_date() {
        assert_eq!(
            format_expense_date("2026-08-01T09:30:00+02:00"),
            "August 1, 2026"
        );
        assert_eq!(format_expense_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_pending_response_round_trip() {
        let json = r##"{
            "expenses": [{"id":"e1","description":"Taxi","amount":-18.0,"date":"2026-08-01T09:30:00+02:00"}],
            "categories": [{"id":"1","name":"Transport"}],
            "flags": [{"id":"3","color":"#1a1a2e","icon":"fa-star","name":"Vacation"}],
            "nav_links": [{"href":"/tricount","label":"Tricount","tooltip":null}]
        }"##;
        let response: PendingExpensesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.expenses.len(), 1);
        assert_eq!(response.categories[0].name, "Transport");
        assert_eq!(response.flags[0].icon, "fa-star");
        assert_eq!(response.nav_links[0].tooltip, None);
    }

    #[test]
    fn test_update_response_parses_error_field() {
        let ok: UpdateExpenseResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.error, None);

        let failed: UpdateExpenseResponse =
            serde_json::from_str(r#"{"success":false,"error":"Unknown category"}"#).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("Unknown category"));
    }
}
