use search::{
    AlphaBetaEngine, Engine, EngineKind, EngineSettings, MctsEngine, RandomAggressiveEngine,
    SearchError, SimpleEngine,
};

/// Builds an engine of the given kind and applies its settings once.
pub fn create(kind: EngineKind, settings: &EngineSettings) -> Result<Box<dyn Engine>, SearchError> {
    let mut engine: Box<dyn Engine> = match kind {
        EngineKind::AlphaBeta => Box::new(AlphaBetaEngine::default()),
        EngineKind::Mcts => Box::new(MctsEngine::default()),
        EngineKind::Simple => Box::new(SimpleEngine::new()),
        EngineKind::RandomAggressive => Box::new(RandomAggressiveEngine::default()),
    };

    if let Some(custom) = engine.custom_settings() {
        custom.apply_custom_settings(settings)?;
    }

    Ok(engine)
}
