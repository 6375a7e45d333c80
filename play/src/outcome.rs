#[derive(Debug, Clone, PartialEq)]
pub enum Ending {
    /// The engine reported a terminal state with this final score.
    Terminal { score: f32 },
    /// Input ended or the external actor quit.
    Aborted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<A> {
    pub ending: Ending,
    pub history: Vec<A>,
}

impl<A> Outcome<A> {
    pub fn is_terminal(&self) -> bool {
        matches!(self.ending, Ending::Terminal { .. })
    }
}
