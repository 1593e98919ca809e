use super::{menu_transition, Scene, SceneContext, SceneId, Transition};
use crate::error::GameError;
use crate::gui::{MenuEntry, MenuLayout, MenuStyle, Target};
use crate::input::{HeldKeys, InputEvent};
use crate::surface::Surface;

const TITLE_HEADER: &str = "Bunny hop";

/// Main menu shown at startup
pub struct TitleScene {
    menu: MenuLayout,
}

impl TitleScene {
    pub fn new(context: &mut SceneContext<'_>) -> Result<Self, GameError> {
        let config = context.config;
        let style = MenuStyle::from_config(&config.menus.title, &config.assets.default_font)?;
        let entries = [
            MenuEntry::header(TITLE_HEADER),
            MenuEntry::item("Start game", Target::Scene(SceneId::Gameplay)),
            MenuEntry::item("Options", Target::Scene(SceneId::Options)),
            MenuEntry::item("Quit", Target::Scene(SceneId::QuitConfirm)),
        ];
        let menu = MenuLayout::build(context.window, &entries, &style, context.metrics)?;
        Ok(TitleScene { menu })
    }

    pub fn boxed(context: &mut SceneContext<'_>) -> Result<Box<dyn Scene>, GameError> {
        Ok(Box::new(Self::new(context)?))
    }

    #[cfg(test)]
    pub fn menu(&self) -> &MenuLayout {
        &self.menu
    }
}

impl Scene for TitleScene {
    fn id(&self) -> SceneId {
        SceneId::Title
    }

    fn handle_input(&mut self, events: &[InputEvent], _held: &HeldKeys) -> Transition {
        // Escape on the title asks before leaving
        menu_transition(&mut self.menu, events, SceneId::QuitConfirm)
    }

    fn update(&mut self) {}

    fn render(&self, surface: &mut dyn Surface) -> Result<(), GameError> {
        self.menu.render(surface)
    }
}
