use super::{GameplayScene, OptionsScene, QuitScene, Scene, SceneId, TitleScene};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::surface::TextMetrics;
use sdl2::rect::Rect;
use std::collections::HashMap;

/// What a scene may look at while it is being built
pub struct SceneContext<'a> {
    pub window: Rect,
    pub config: &'a GameConfig,
    /// For measuring menu labels during layout
    pub metrics: &'a mut dyn TextMetrics,
}

type SceneConstructor = Box<dyn Fn(&mut SceneContext<'_>) -> Result<Box<dyn Scene>, GameError>>;

/// Maps scene ids to the code that builds them
///
/// New scenes only need a `register` call; the driver never names concrete
/// scene types.
pub struct SceneRegistry {
    constructors: HashMap<SceneId, SceneConstructor>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        SceneRegistry {
            constructors: HashMap::new(),
        }
    }

    /// Registers (or replaces) the constructor for `id`
    pub fn register<F>(&mut self, id: SceneId, constructor: F)
    where
        F: Fn(&mut SceneContext<'_>) -> Result<Box<dyn Scene>, GameError> + 'static,
    {
        self.constructors.insert(id, Box::new(constructor));
    }

    /// Builds a fresh instance of the scene
    pub fn build(&self, id: SceneId, context: &mut SceneContext<'_>) -> Result<Box<dyn Scene>, GameError> {
        let constructor = self
            .constructors
            .get(&id)
            .ok_or(GameError::UnregisteredScene(id))?;
        constructor(context)
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with every scene of the game
pub fn default_registry() -> SceneRegistry {
    let mut registry = SceneRegistry::new();
    registry.register(SceneId::Title, TitleScene::boxed);
    registry.register(SceneId::Options, OptionsScene::boxed);
    registry.register(SceneId::QuitConfirm, QuitScene::boxed);
    registry.register(SceneId::Gameplay, GameplayScene::boxed);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::fake::FixedMetrics;

    #[test]
    fn test_default_registry_builds_every_scene() {
        let registry = default_registry();
        let config = GameConfig::default();
        let mut metrics = FixedMetrics;
        let mut context = SceneContext {
            window: Rect::new(0, 0, 640, 360),
            config: &config,
            metrics: &mut metrics,
        };

        for id in [SceneId::Title, SceneId::Options, SceneId::QuitConfirm, SceneId::Gameplay] {
            let scene = registry.build(id, &mut context).unwrap();
            assert_eq!(scene.id(), id);
        }
    }

    #[test]
    fn test_unregistered_scene_is_an_error() {
        let registry = SceneRegistry::new();
        let config = GameConfig::default();
        let mut metrics = FixedMetrics;
        let mut context = SceneContext {
            window: Rect::new(0, 0, 640, 360),
            config: &config,
            metrics: &mut metrics,
        };

        let result = registry.build(SceneId::Options, &mut context);
        assert!(matches!(result, Err(GameError::UnregisteredScene(SceneId::Options))));
    }
}
