use log::debug;
use search::{BoxedEvaluator, SearchAgent, SearchError, SearchOptions};
use shakmaty::Chess;

use crate::{Engine, MaterialEvaluator, PieceValues};

pub type ChessAgent<'a> = SearchAgent<'a, Engine, BoxedEvaluator<'a, Chess>>;

/// A search agent for chess. The `better` evaluation is the material evaluation.
pub fn create_agent(
    engine: &Engine,
    options: SearchOptions,
    piece_values: PieceValues,
) -> Result<ChessAgent<'_>, SearchError> {
    debug!(
        "Creating {} agent, depth {}, evaluation {}, {:?}",
        options.algorithm, options.depth, options.evaluation, piece_values
    );

    let better: BoxedEvaluator<'_, Chess> = Box::new(MaterialEvaluator::new(piece_values));
    SearchAgent::from_options(engine, options, Some(better))
}
