use std::time::Duration;

use common::create_rng;
use engine::GameEngine;
use log::{debug, trace};
use rand::rngs::StdRng;

use crate::{
    random_action, reflex, select_evaluator, Algorithm, AlphaBeta, Evaluator, Expectimax,
    Minimax, NegaScout, Negamax, NoTieBreak, RandomTieBreak, SearchBudget, SearchError,
    SearchOptions, SearchResult, TieBreaker,
};

/// Anything that can pick an action for the agent to move.
pub trait Agent {
    type State;
    type Action;

    fn choose_action(
        &mut self,
        game_state: &Self::State,
    ) -> Result<Option<Self::Action>, SearchError>;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport<A> {
    pub result: SearchResult<A>,
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Runs the configured algorithm on behalf of the agent to move.
///
/// With a node or time budget the search deepens iteratively and keeps the deepest completed
/// result; without one it searches straight to the configured depth.
pub struct SearchAgent<'a, E, V> {
    engine: &'a E,
    evaluator: V,
    options: SearchOptions,
    tie_breaker: Box<dyn TieBreaker>,
    rng: StdRng,
    name: String,
}

pub type BoxedEvaluator<'a, S> = Box<dyn Evaluator<State = S> + 'a>;

impl<'a, E> SearchAgent<'a, E, BoxedEvaluator<'a, E::State>>
where
    E: GameEngine,
{
    /// Builds an agent with the evaluation named in `options`.
    ///
    /// `better` is the game specific evaluation, if the game has one.
    pub fn from_options(
        engine: &'a E,
        options: SearchOptions,
        better: Option<BoxedEvaluator<'a, E::State>>,
    ) -> Result<Self, SearchError> {
        let evaluator = select_evaluator(options.evaluation, engine, better)?;
        Ok(Self::new(engine, evaluator, options))
    }
}

impl<'a, E, V> SearchAgent<'a, E, V>
where
    E: GameEngine,
    V: Evaluator<State = E::State>,
{
    pub fn new(engine: &'a E, evaluator: V, options: SearchOptions) -> Self {
        let tie_breaker: Box<dyn TieBreaker> = if options.tie_break {
            Box::new(RandomTieBreak::new(create_rng(options.seed)))
        } else {
            Box::new(NoTieBreak)
        };

        let name = match options.algorithm {
            Algorithm::Reflex | Algorithm::Random => options.algorithm.to_string(),
            algorithm => format!("{}(depth={})", algorithm, options.depth),
        };

        Self {
            engine,
            evaluator,
            tie_breaker,
            rng: create_rng(options.seed),
            name,
            options,
        }
    }

    pub fn with_tie_breaker<T: TieBreaker + 'static>(mut self, tie_breaker: T) -> Self {
        self.tie_breaker = Box::new(tie_breaker);
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn search(&mut self, game_state: &E::State) -> Result<SearchResult<E::Action>, SearchError> {
        Ok(self.analyze(game_state)?.result)
    }

    pub fn analyze(
        &mut self,
        game_state: &E::State,
    ) -> Result<SearchReport<E::Action>, SearchError> {
        let mut budget = SearchBudget::new(self.options.max_nodes, self.options.move_time());

        let report = if budget.is_limited() && self.is_depth_limited() {
            self.iterative_deepening(game_state, &mut budget)?
        } else {
            let depth = self.options.depth;
            let result = self.search_to_depth(game_state, depth, &mut budget)?;
            SearchReport {
                result,
                depth,
                nodes: budget.nodes(),
                elapsed: budget.elapsed(),
            }
        };

        debug!(
            "{} searched depth {} score {} nodes {} in {:?}",
            self.name, report.depth, report.result.score, report.nodes, report.elapsed
        );

        Ok(report)
    }

    /// Whether the search can be deepened step by step. Depth 0 is always a single leaf.
    fn is_depth_limited(&self) -> bool {
        self.options.depth > 0
            && !matches!(self.options.algorithm, Algorithm::Reflex | Algorithm::Random)
    }

    fn iterative_deepening(
        &mut self,
        game_state: &E::State,
        budget: &mut SearchBudget,
    ) -> Result<SearchReport<E::Action>, SearchError> {
        let mut completed = None;

        for depth in 1..=self.options.depth {
            match self.search_to_depth(game_state, depth, budget) {
                Ok(result) => {
                    trace!(
                        "Completed depth {} score {} nodes {}",
                        depth,
                        result.score,
                        budget.nodes()
                    );
                    completed = Some(SearchReport {
                        result,
                        depth,
                        nodes: budget.nodes(),
                        elapsed: budget.elapsed(),
                    });
                }
                Err(SearchError::BudgetExhausted { nodes }) => {
                    debug!("Budget exhausted at depth {} after {} nodes", depth, nodes);
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        completed.ok_or(SearchError::BudgetExhausted {
            nodes: budget.nodes(),
        })
    }

    fn search_to_depth(
        &mut self,
        game_state: &E::State,
        depth: u32,
        budget: &mut SearchBudget,
    ) -> Result<SearchResult<E::Action>, SearchError> {
        let engine = self.engine;
        let evaluator = &self.evaluator;

        match self.options.algorithm {
            Algorithm::Minimax => Minimax::new(engine, evaluator, depth).search(game_state, budget),
            Algorithm::AlphaBeta => AlphaBeta::new(engine, evaluator, depth, self.options.cutoff)
                .search(game_state, budget),
            Algorithm::Expectimax => {
                Expectimax::new(engine, evaluator, depth).search(game_state, budget)
            }
            Algorithm::Negamax => Negamax::new(engine, evaluator, &mut self.tie_breaker, depth)
                .search(game_state, budget),
            Algorithm::NegaScout => NegaScout::new(engine, evaluator, &mut self.tie_breaker, depth)
                .search(game_state, budget),
            Algorithm::Reflex => reflex(engine, evaluator, game_state, &mut self.rng, budget),
            Algorithm::Random => random_action(engine, evaluator, game_state, &mut self.rng, budget),
        }
    }
}

impl<E, V> Agent for SearchAgent<'_, E, V>
where
    E: GameEngine,
    V: Evaluator<State = E::State>,
{
    type State = E::State;
    type Action = E::Action;

    fn choose_action(
        &mut self,
        game_state: &Self::State,
    ) -> Result<Option<Self::Action>, SearchError> {
        Ok(self.search(game_state)?.action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counting_game::{CountingAction, CountingGameEngine, CountingGameState};
    use crate::{EvaluationKind, ScoreEvaluator};
    use engine::GameState;

    #[test]
    fn test_agent_chooses_action_for_every_algorithm() {
        let engine = CountingGameEngine::new(2);
        let algorithms = [
            Algorithm::Minimax,
            Algorithm::AlphaBeta,
            Algorithm::Expectimax,
            Algorithm::Negamax,
            Algorithm::NegaScout,
            Algorithm::Reflex,
        ];

        for algorithm in algorithms {
            let options = SearchOptions {
                seed: Some(5),
                ..SearchOptions::new(algorithm, 2)
            };
            let mut agent = SearchAgent::new(&engine, ScoreEvaluator::new(&engine), options);

            let action = agent.choose_action(&CountingGameState::initial()).unwrap();

            assert_eq!(action, Some(CountingAction::Increment), "{}", algorithm);
        }
    }

    #[test]
    fn test_agent_name() {
        let engine = CountingGameEngine::new(2);
        let agent = SearchAgent::new(
            &engine,
            ScoreEvaluator::new(&engine),
            SearchOptions::new(Algorithm::AlphaBeta, 3),
        );

        assert_eq!(agent.name(), "alpha-beta(depth=3)");
    }

    #[test]
    fn test_from_options_rejects_missing_better_evaluation() {
        let engine = CountingGameEngine::new(2);
        let options = SearchOptions {
            evaluation: EvaluationKind::Better,
            ..SearchOptions::default()
        };

        let result = SearchAgent::from_options(&engine, options, None);

        assert!(matches!(result, Err(SearchError::NotImplemented(_))));
    }

    #[test]
    fn test_iterative_deepening_keeps_deepest_completed_depth() {
        let engine = CountingGameEngine::new(2);
        let options = SearchOptions {
            max_nodes: Some(50),
            ..SearchOptions::new(Algorithm::Minimax, 5)
        };
        let mut agent = SearchAgent::new(&engine, ScoreEvaluator::new(&engine), options);

        let report = agent.analyze(&CountingGameState::initial()).unwrap();

        assert_eq!(report.depth, 1);
        assert_eq!(report.nodes, 13);
        assert_eq!(report.result.action, Some(CountingAction::Increment));
    }

    #[test]
    fn test_budget_too_small_for_one_depth() {
        let engine = CountingGameEngine::new(2);
        let options = SearchOptions {
            max_nodes: Some(5),
            ..SearchOptions::new(Algorithm::AlphaBeta, 3)
        };
        let mut agent = SearchAgent::new(&engine, ScoreEvaluator::new(&engine), options);

        let result = agent.analyze(&CountingGameState::initial());

        assert_eq!(result, Err(SearchError::BudgetExhausted { nodes: 5 }));
    }

    #[test]
    fn test_depth_zero_with_budget_is_leaf() {
        let engine = CountingGameEngine::new(2);
        let options = SearchOptions {
            max_nodes: Some(50),
            ..SearchOptions::new(Algorithm::Minimax, 0)
        };
        let mut agent = SearchAgent::new(&engine, ScoreEvaluator::new(&engine), options);

        let report = agent.analyze(&CountingGameState::initial()).unwrap();

        assert_eq!(report.depth, 0);
        assert_eq!(report.nodes, 1);
        assert_eq!(report.result, SearchResult::leaf(50.0));
    }

    #[test]
    fn test_unlimited_search_reports_nodes() {
        let engine = CountingGameEngine::new(2);
        let mut agent = SearchAgent::new(
            &engine,
            ScoreEvaluator::new(&engine),
            SearchOptions::new(Algorithm::Minimax, 2),
        );

        let report = agent.analyze(&CountingGameState::initial()).unwrap();

        assert_eq!(report.depth, 2);
        assert_eq!(report.nodes, 1 + 3 + 9 + 27 + 81);
        assert_eq!(report.result.score, 50.0);
    }
}
