use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// New headline text from the typewriter started as `generation`
    Headline { generation: u64, text: String },

    /// Tick for UI refresh
    Tick,
}
