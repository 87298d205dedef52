use serde_json::Value;

/// Per-call generation context passed to every LlmBackend::generate invocation.
///
/// Bundles the per-request inputs so the LlmBackend trait signature stays
/// stable as new fields are added. Borrowed for the duration of the call.
pub struct GenerateContext<'a> {
    /// The full prompt text.
    pub prompt: &'a str,
    /// Schema the JSON response must follow.
    pub schema: &'a Value,
}
