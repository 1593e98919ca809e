use super::{menu_transition, Scene, SceneContext, SceneId, Transition};
use crate::error::GameError;
use crate::gui::{MenuEntry, MenuLayout, MenuStyle, Target};
use crate::input::{HeldKeys, InputEvent};
use crate::surface::Surface;

/// "Do you really want to quit?" dialog
pub struct QuitScene {
    menu: MenuLayout,
}

impl QuitScene {
    pub fn new(context: &mut SceneContext<'_>) -> Result<Self, GameError> {
        let config = context.config;
        let style = MenuStyle::from_config(&config.menus.quit, &config.assets.default_font)?;
        let entries = [
            MenuEntry::header("Do you really want to quit?"),
            MenuEntry::item("Yes", Target::Exit),
            MenuEntry::item("No", Target::Scene(SceneId::Title)),
        ];
        let menu = MenuLayout::build(context.window, &entries, &style, context.metrics)?;
        Ok(QuitScene { menu })
    }

    pub fn boxed(context: &mut SceneContext<'_>) -> Result<Box<dyn Scene>, GameError> {
        Ok(Box::new(Self::new(context)?))
    }

    #[cfg(test)]
    pub fn menu(&self) -> &MenuLayout {
        &self.menu
    }
}

impl Scene for QuitScene {
    fn id(&self) -> SceneId {
        SceneId::QuitConfirm
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
    use crate::surface::fake::FixedMetrics;
    use sdl2::keyboard::Keycode;
    use sdl2::mouse::MouseButton;
    use sdl2::rect::Rect;

    fn dialog() -> QuitScene {
        let config = GameConfig::default();
        let mut metrics = FixedMetrics;
        let mut context = SceneContext {
            window: Rect::new(0, 0, 640, 360),
            config: &config,
            metrics: &mut metrics,
        };
        QuitScene::new(&mut context).unwrap()
    }

    #[test]
    fn test_uses_wider_spacing() {
        let scene = dialog();
        // 360 / 25
        assert_eq!(scene.menu().headers()[0].position().1, 14);
    }

    #[test]
    fn test_yes_quits() {
        let mut scene = dialog();
        let events = [InputEvent::KeyDown(Keycode::Down), InputEvent::KeyDown(Keycode::Return)];
        assert_eq!(scene.handle_input(&events, &HeldKeys::default()), Transition::Quit);
    }

    #[test]
    fn test_clicking_no_returns_to_title() {
        let mut scene = dialog();
        let (x, y) = scene.menu().items()[1].position();
        let events = [InputEvent::MouseDown {
            button: MouseButton::Left,
            x,
            y,
        }];
        assert_eq!(
            scene.handle_input(&events, &HeldKeys::default()),
            Transition::Switch(SceneId::Title)
        );
    }

    #[test]
    fn test_escape_returns_to_title() {
        let mut scene = dialog();
        let events = [InputEvent::KeyDown(Keycode::Escape)];
        assert_eq!(
            scene.handle_input(&events, &HeldKeys::default()),
            Transition::Switch(SceneId::Title)
        );
    }
}
