use super::{menu_transition, Scene, SceneContext, SceneId, Transition};
use crate::error::GameError;
use crate::gui::{MenuEntry, MenuLayout, MenuStyle, Target};
use crate::input::{HeldKeys, InputEvent};
use crate::surface::Surface;

/// Options menu
///
/// Only "Back" does anything yet; the other entries lead back into this
/// scene.
pub struct OptionsScene {
    menu: MenuLayout,
}

impl OptionsScene {
    pub fn new(context: &mut SceneContext<'_>) -> Result<Self, GameError> {
        let config = context.config;
        let style = MenuStyle::from_config(&config.menus.options, &config.assets.default_font)?;
        let stay = Target::Scene(SceneId::Options);
        let entries = [
            MenuEntry::header("Options"),
            MenuEntry::item("Resolution", stay),
            MenuEntry::item("Fullscreen", stay),
            MenuEntry::item("Keys", stay),
            MenuEntry::item("Mute sounds", stay),
            MenuEntry::item("Back", Target::Scene(SceneId::Title)),
        ];
        let menu = MenuLayout::build(context.window, &entries, &style, context.metrics)?;
        Ok(OptionsScene { menu })
    }

    pub fn boxed(context: &mut SceneContext<'_>) -> Result<Box<dyn Scene>, GameError> {
        Ok(Box::new(Self::new(context)?))
    }
}

impl Scene for OptionsScene {
    fn id(&self) -> SceneId {
        SceneId::Options
    }

    fn handle_input(&mut self, events: &[InputEvent], _held: &HeldKeys) -> Transition {
        menu_transition(&mut self.menu, events, SceneId::Title)
    }

    fn update(&mut self) {}

    fn render(&self, surface: &mut dyn Surface) -> Result<(), GameError> {
        self.menu.render(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::surface::fake::{FixedMetrics, RecordingSurface};
    use sdl2::keyboard::Keycode;
    use sdl2::rect::Rect;

    fn options() -> OptionsScene {
        let config = GameConfig::default();
        let mut metrics = FixedMetrics;
        let mut context = SceneContext {
            window: Rect::new(0, 0, 640, 360),
            config: &config,
            metrics: &mut metrics,
        };
        OptionsScene::new(&mut context).unwrap()
    }

    fn press(scene: &mut OptionsScene, keys: &[Keycode]) -> Transition {
        let events: Vec<InputEvent> = keys.iter().map(|&k| InputEvent::KeyDown(k)).collect();
        scene.handle_input(&events, &HeldKeys::default())
    }

    #[test]
    fn test_placeholder_entries_keep_the_scene() {
        let mut scene = options();
        assert_eq!(
            press(&mut scene, &[Keycode::Down, Keycode::Return]),
            Transition::Switch(SceneId::Options)
        );
    }

    #[test]
    fn test_back_returns_to_title() {
        let mut scene = options();
        assert_eq!(
            press(&mut scene, &[Keycode::Up, Keycode::Return]),
            Transition::Switch(SceneId::Title)
        );
    }

    #[test]
    fn test_escape_returns_to_title() {
        let mut scene = options();
        assert_eq!(press(&mut scene, &[Keycode::Escape]), Transition::Switch(SceneId::Title));
    }

    #[test]
    fn test_renders_every_entry() {
        let scene = options();
        let mut surface = RecordingSurface::new();
        scene.render(&mut surface).unwrap();
        assert_eq!(
            surface.texts(),
            vec!["Options", "Resolution", "Fullscreen", "Keys", "Mute sounds", "Back"]
        );
    }
}
