/// Side effects the handler asks the main loop to perform.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Stop the typewriter and start it again from the first word.
    RestartHeadline,
}
