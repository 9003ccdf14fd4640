/// Synchronous yes/no decision presented to the user before a mutation
/// is committed. Declining is a plain no-op for the caller, never a
/// rollback: nothing has been committed yet when the gate runs.
pub trait ConfirmationGateway {
    fn confirm(&self, prompt: &str) -> bool;
}
