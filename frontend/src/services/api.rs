use gloo::net::http::Request;
use shared::{PendingExpensesResponse, UpdateExpenseRequest, UpdateExpenseResponse};

/// How an update attempt failed. `Rejected` carries the backend's message;
/// `Transport` means the request never produced a usable response.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateError {
    Rejected(String),
    Transport(String),
}

/// API client for the tricount backend.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against the page's own origin.
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a new API client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the categorization page's view-model: pending expenses,
    /// category options, flag catalog and nav links.
    pub async fn get_pending_expenses(&self) -> Result<PendingExpensesResponse, String> {
        let url = format!("{}/tricount/expenses/pending", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<PendingExpensesResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse pending expenses: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch pending expenses: {}", e)),
        }
    }

    /// Submit one row's categorization. The backend owns the form field
    /// names, so the body is form-encoded rather than JSON.
    pub async fn update_expense(&self, request: &UpdateExpenseRequest) -> Result<(), UpdateError> {
        let url = format!("{}/tricount/expenses/update", self.base_url);
        let body = form_encode(&request.form_pairs());

        let request = Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| UpdateError::Transport(format!("Failed to build request: {}", e)))?;

        match request.send().await {
            Ok(response) => {
                if !response.ok() {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    return Err(UpdateError::Rejected(error_text));
                }
                match response.json::<UpdateExpenseResponse>().await {
                    Ok(body) => interpret_update_response(body),
                    Err(e) => Err(UpdateError::Transport(format!(
                        "Failed to parse response: {}",
                        e
                    ))),
                }
            }
            Err(e) => Err(UpdateError::Transport(format!("Network error: {}", e))),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map the backend's `{ success, error? }` verdict onto the update outcome:
/// a rejection carries the server's message, or a generic fallback when the
/// server sent none.
fn interpret_update_response(response: UpdateExpenseResponse) -> Result<(), UpdateError> {
    if response.success {
        return Ok(());
    }
    Err(UpdateError::Rejected(response.error.unwrap_or_else(|| {
        "The expense could not be updated.".to_string()
    })))
}

fn form_encode(pairs: &[(&'static str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                key,
                String::from(js_sys::encode_uri_component(value))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_form_encode_escapes_values() {
        let encoded = form_encode(&[("expense_id", "e 1"), ("category_id", "a&b")]);
        assert_eq!(encoded, "expense_id=e%201&category_id=a%26b");
    }

    #[wasm_bindgen_test]
    fn test_form_encode_empty() {
        assert_eq!(form_encode(&[]), "");
    }

    #[wasm_bindgen_test]
    fn test_update_verdict_success() {
        let verdict = interpret_update_response(UpdateExpenseResponse {
            success: true,
            error: None,
        });
        assert_eq!(verdict, Ok(()));
    }

    #[wasm_bindgen_test]
    fn test_update_verdict_rejection_keeps_server_message() {
        let verdict = interpret_update_response(UpdateExpenseResponse {
            success: false,
            error: Some("Unknown category".to_string()),
        });
        assert_eq!(
            verdict,
            Err(UpdateError::Rejected("Unknown category".to_string()))
        );
    }

    #[wasm_bindgen_test]
    fn test_update_verdict_rejection_without_message_gets_fallback() {
        let verdict = interpret_update_response(UpdateExpenseResponse {
            success: false,
            error: None,
        });
        assert_eq!(
            verdict,
            Err(UpdateError::Rejected(
                "The expense could not be updated.".to_string()
            ))
        );
    }
}
