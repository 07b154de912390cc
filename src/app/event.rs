use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The confirmation delay of submission `generation` is over
    ResetElapsed { generation: u64 },

    /// Tick for UI refresh
    Tick,
}
