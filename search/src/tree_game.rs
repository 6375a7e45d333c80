use std::rc::Rc;

use engine::{next_agent, GameEngine};
use rand::Rng;

/// An explicit game tree. Leaves hold agent 0's payoff.
#[derive(Debug)]
pub enum Node {
    Leaf(f32),
    Branch(Vec<Rc<Node>>),
}

pub fn leaf(value: f32) -> Rc<Node> {
    Rc::new(Node::Leaf(value))
}

pub fn branch(children: Vec<Rc<Node>>) -> Rc<Node> {
    Rc::new(Node::Branch(children))
}

pub fn leaves(values: &[f32]) -> Rc<Node> {
    branch(values.iter().map(|v| leaf(*v)).collect())
}

/// A full tree of the given depth with integer leaves and two to four children per branch.
pub fn random_tree<R: Rng>(rng: &mut R, depth: u32) -> Rc<Node> {
    if depth == 0 {
        return leaf(rng.gen_range(-20..=20) as f32);
    }

    let children = rng.gen_range(2..=4);
    branch((0..children).map(|_| random_tree(rng, depth - 1)).collect())
}

#[derive(Clone, Debug)]
pub struct TreeState {
    pub node: Rc<Node>,
    pub agent: usize,
}

impl TreeState {
    pub fn new(node: Rc<Node>) -> Self {
        Self { node, agent: 0 }
    }
}

pub struct TreeGameEngine {
    num_agents: usize,
}

impl TreeGameEngine {
    pub fn new(num_agents: usize) -> Self {
        Self { num_agents }
    }
}

impl GameEngine for TreeGameEngine {
    type Action = usize;
    type State = TreeState;

    fn legal_actions(&self, game_state: &Self::State, _agent: usize) -> Vec<Self::Action> {
        match game_state.node.as_ref() {
            Node::Leaf(_) => vec![],
            Node::Branch(children) => (0..children.len()).collect(),
        }
    }

    fn take_action(
        &self,
        game_state: &Self::State,
        agent: usize,
        action: &Self::Action,
    ) -> Self::State {
        let node = match game_state.node.as_ref() {
            Node::Branch(children) => children[*action].clone(),
            Node::Leaf(_) => panic!("A leaf has no children"),
        };

        TreeState {
            node,
            agent: next_agent(agent, self.num_agents),
        }
    }

    fn is_terminal(&self, game_state: &Self::State) -> bool {
        matches!(game_state.node.as_ref(), Node::Leaf(_))
    }

    fn num_agents(&self, _game_state: &Self::State) -> usize {
        self.num_agents
    }

    fn agent_to_move(&self, game_state: &Self::State) -> usize {
        game_state.agent
    }

    fn score(&self, game_state: &Self::State) -> f32 {
        match game_state.node.as_ref() {
            Node::Leaf(value) => *value,
            Node::Branch(_) => 0.0,
        }
    }
}
