//! Operator access gate

/// Decides whether a sender is the single authorized operator.
///
/// The configured identity arrives as text (environment variable) while the
/// sender identity is numeric, so the comparison parses the configured value
/// on every check. Any parse failure resolves to `false`, never an error.
/// There is no session or token caching; the gate runs on every inbound
/// event.
#[derive(Debug, Clone)]
pub struct AccessGate {
    operator_id: String,
}

impl AccessGate {
    /// Create a gate for the configured operator identity
    pub fn new(operator_id: impl Into<String>) -> Self {
        Self {
            operator_id: operator_id.into(),
        }
    }

    /// True iff the sender is the configured operator
    pub fn is_operator(&self, sender_id: i64) -> bool {
        self.operator_id
            .trim()
            .parse::<i64>()
            .map(|id| id == sender_id)
            .unwrap_or(false)
    }
}
