/// A backed-up score together with the action that achieves it.
///
/// The action is `None` at terminal and depth-limit leaves and at chance nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<A> {
    pub score: f32,
    pub action: Option<A>,
}

impl<A> SearchResult<A> {
    pub fn new(score: f32, action: Option<A>) -> Self {
        Self { score, action }
    }

    pub fn leaf(score: f32) -> Self {
        Self {
            score,
            action: None,
        }
    }
}
