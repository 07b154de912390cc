#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Ring the terminal bell (rejected submission)
    Bell,
    Quit,
}
