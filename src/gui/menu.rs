//! Full-screen Menu Layout
//!
//! A menu is built once from an ordered list of [`MenuEntry`] values. Headers
//! are stacked at the top of the window; the selectable items share the
//! space left below them, centred as a block. Every entry is centred
//! horizontally.
//!
//! ```text
//!   spacing
//!   Header            <- offset grows by each header's height
//!   ...
//!                     <- center(height - offset, block)
//!   Item 0
//!   spacing
//!   Item 1
//!   spacing
//! ```
//!
//! Positions are fixed when the layout is built; nothing moves afterwards.

use crate::assets::TextKey;
use crate::config::MenuStyleConfig;
use crate::error::{AssetError, ConfigError, GameError};
use crate::input::InputEvent;
use crate::palette;
use crate::scene::SceneId;
use crate::surface::{Surface, TextMetrics};
use log::debug;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Where selecting a menu item leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Scene(SceneId),
    /// Terminate the game
    Exit,
}

/// One line of a menu descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    Header(String),
    Item(String, Target),
}

impl MenuEntry {
    pub fn header(text: &str) -> Self {
        MenuEntry::Header(text.to_string())
    }

    pub fn item(text: &str, target: Target) -> Self {
        MenuEntry::Item(text.to_string(), target)
    }
}

/// What the player asked a menu to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Select(Target),
    /// Escape: leave towards the parent scene
    Back,
}

/// Resolved appearance of a menu
#[derive(Debug, Clone)]
pub struct MenuStyle {
    pub font: String,
    pub header_size: u16,
    pub item_size: u16,
    pub text_color: Color,
    pub background: Color,
    pub highlight: Color,
    pub spacing_ratio: u32,
}

impl MenuStyle {
    /// Resolves color names; `default_font` is used when the style names none
    pub fn from_config(config: &MenuStyleConfig, default_font: &str) -> Result<Self, ConfigError> {
        Ok(MenuStyle {
            font: config
                .font
                .clone()
                .unwrap_or_else(|| default_font.to_string()),
            header_size: config.header_size,
            item_size: config.item_size,
            text_color: palette::color(&config.text_color)?,
            background: palette::color(&config.background)?,
            highlight: palette::color(&config.highlight)?,
            spacing_ratio: config.spacing_ratio.max(1),
        })
    }
}

/// A positioned label
///
/// Headers carry no target and never take part in selection.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    label: String,
    font: String,
    size: u16,
    color: Color,
    target: Option<Target>,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl MenuItem {
    pub fn label(&self) -> &str {
        &self.label
    }

    #[cfg(test)]
    pub fn target(&self) -> Option<Target> {
        self.target
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Top-left edge inclusive, bottom-right edge exclusive
    pub fn is_hovered(&self, x: i32, y: i32) -> bool {
        self.x <= x
            && x < self.x + self.width as i32
            && self.y <= y
            && y < self.y + self.height as i32
    }

    fn text_key(&self) -> TextKey {
        TextKey::new(self.font.clone(), self.size, self.color, self.label.clone())
    }
}

/// A laid-out menu with its selection state
pub struct MenuLayout {
    window: Rect,
    style: MenuStyle,
    headers: Vec<MenuItem>,
    items: Vec<MenuItem>,
    highlighted: Option<usize>,
}

impl MenuLayout {
    /// Measures every entry and fixes its position inside `window`
    pub fn build(
        window: Rect,
        entries: &[MenuEntry],
        style: &MenuStyle,
        metrics: &mut dyn TextMetrics,
    ) -> Result<MenuLayout, AssetError> {
        let spacing = window.height() / style.spacing_ratio.max(1);

        let mut headers = Vec::new();
        let mut measured_items = Vec::new();
        let mut offset = spacing;

        for entry in entries {
            match entry {
                MenuEntry::Header(text) => {
                    let key = TextKey::new(
                        style.font.clone(),
                        style.header_size,
                        style.text_color,
                        text.clone(),
                    );
                    let (width, height) = metrics.text_size(&key)?;
                    headers.push(MenuItem {
                        label: text.clone(),
                        font: style.font.clone(),
                        size: style.header_size,
                        color: style.text_color,
                        target: None,
                        x: window.x() + center(window.width(), width) as i32,
                        y: window.y() + offset as i32,
                        width,
                        height,
                    });
                    offset += height;
                }
                MenuEntry::Item(text, target) => {
                    let key = TextKey::new(
                        style.font.clone(),
                        style.item_size,
                        style.text_color,
                        text.clone(),
                    );
                    let size = metrics.text_size(&key)?;
                    measured_items.push((text.clone(), *target, size));
                }
            }
        }

        let item_height = measured_items
            .iter()
            .map(|&(_, _, (_, height))| height)
            .max()
            .unwrap_or(0);
        let pitch = item_height + spacing;
        let block = measured_items.len() as u32 * pitch;
        let top = offset + center(window.height().saturating_sub(offset), block);

        let items = measured_items
            .into_iter()
            .enumerate()
            .map(|(index, (label, target, (width, height)))| MenuItem {
                label,
                font: style.font.clone(),
                size: style.item_size,
                color: style.text_color,
                target: Some(target),
                x: window.x() + center(window.width(), width) as i32,
                y: window.y() + (top + index as u32 * pitch) as i32,
                width,
                height,
            })
            .collect();

        Ok(MenuLayout {
            window,
            style: style.clone(),
            headers,
            items,
            highlighted: None,
        })
    }

    #[cfg(test)]
    pub fn headers(&self) -> &[MenuItem] {
        &self.headers
    }

    #[cfg(test)]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    #[cfg(test)]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Move highlight down (wraps to top)
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(index) => (index + 1) % self.items.len(),
        });
    }

    /// Move highlight up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None | Some(0) => self.items.len() - 1,
            Some(index) => index - 1,
        });
    }

    /// Activates the item at `index`; `None` when it leads nowhere
    fn select(&self, index: usize) -> Option<MenuAction> {
        let item = self.items.get(index)?;
        debug!("Menu item '{}' selected", item.label());
        item.target.map(MenuAction::Select)
    }

    /// First item under the pointer, in list order
    pub fn item_at(&self, x: i32, y: i32) -> Option<usize> {
        self.items.iter().position(|item| item.is_hovered(x, y))
    }

    /// Applies one input event to the selection state
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<MenuAction> {
        match *event {
            InputEvent::KeyDown(Keycode::Down) => {
                self.select_next();
                None
            }
            InputEvent::KeyDown(Keycode::Up) => {
                self.select_previous();
                None
            }
            InputEvent::KeyDown(Keycode::Return)
            | InputEvent::KeyDown(Keycode::KpEnter)
            | InputEvent::KeyDown(Keycode::Space) => {
                self.highlighted.and_then(|index| self.select(index))
            }
            InputEvent::KeyDown(Keycode::Escape) => Some(MenuAction::Back),
            InputEvent::MouseDown {
                button: MouseButton::Left,
                x,
                y,
            } => self.item_at(x, y).and_then(|index| self.select(index)),
            InputEvent::MouseMove { x, y } => {
                if let Some(index) = self.item_at(x, y) {
                    self.highlighted = Some(index);
                }
                None
            }
            _ => None,
        }
    }

    /// Background, headers, items, then the highlight outline
    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), GameError> {
        surface.fill_rect(self.style.background, Some(self.window))?;

        for entry in self.headers.iter().chain(self.items.iter()) {
            let (x, y) = entry.position();
            surface.draw_text(&entry.text_key(), x, y)?;
        }

        if let Some(item) = self.highlighted.and_then(|index| self.items.get(index)) {
            surface.draw_rect(self.style.highlight, item.bounds())?;
        }

        Ok(())
    }
}

/// Offset that centres `actual` inside `max`, never negative
pub fn center(max: u32, actual: u32) -> u32 {
    (max / 2).saturating_sub(actual / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetError;
    use crate::surface::fake::{DrawOp, FixedMetrics, RecordingSurface};

    /// Ten pixels of height per character, so every label has its own height
    struct TallerWhenLonger;

    impl TextMetrics for TallerWhenLonger {
        fn text_size(&mut self, key: &TextKey) -> Result<(u32, u32), AssetError> {
            let chars = key.label.chars().count() as u32;
            Ok((chars * key.size as u32 / 2, chars * 10))
        }
    }

    fn window() -> Rect {
        Rect::new(0, 0, 640, 360)
    }

    fn style() -> MenuStyle {
        MenuStyle::from_config(&MenuStyleConfig::default(), "fff_tusj.ttf").unwrap()
    }

    fn title_entries() -> Vec<MenuEntry> {
        vec![
            MenuEntry::header("Bunny hop"),
            MenuEntry::item("Start game", Target::Scene(SceneId::Gameplay)),
            MenuEntry::item("Options", Target::Scene(SceneId::Options)),
            MenuEntry::item("Quit", Target::Scene(SceneId::QuitConfirm)),
        ]
    }

    fn title_menu() -> MenuLayout {
        MenuLayout::build(window(), &title_entries(), &style(), &mut FixedMetrics).unwrap()
    }

    fn key(code: Keycode) -> InputEvent {
        InputEvent::KeyDown(code)
    }

    fn click(x: i32, y: i32) -> InputEvent {
        InputEvent::MouseDown {
            button: MouseButton::Left,
            x,
            y,
        }
    }

    #[test]
    fn test_center_never_goes_negative() {
        assert_eq!(center(640, 100), 270);
        assert_eq!(center(100, 300), 0);
        assert_eq!(center(281, 171), 55);
    }

    #[test]
    fn test_header_starts_one_spacing_from_top() {
        let menu = title_menu();
        // 360 / 50 = 7; "Bunny hop" at 72 pt is 9 * 36 wide
        let header = &menu.headers()[0];
        assert_eq!(header.position(), (158, 7));
        assert_eq!(header.bounds(), Rect::new(158, 7, 324, 72));
        assert_eq!(header.target(), None);
    }

    #[test]
    fn test_items_are_centred_below_headers() {
        let menu = title_menu();
        // offset = 7 + 72 = 79, pitch = 50 + 7, block = 171
        // top = 79 + center(281, 171) = 134
        let positions: Vec<(i32, i32)> = menu.items().iter().map(|i| i.position()).collect();
        assert_eq!(positions, vec![(195, 134), (233, 191), (270, 248)]);
    }

    #[test]
    fn test_spacing_follows_ratio() {
        let mut quit_style = style();
        quit_style.spacing_ratio = 25;
        let entries = [
            MenuEntry::header("Sure?"),
            MenuEntry::item("Yes", Target::Exit),
            MenuEntry::item("No", Target::Scene(SceneId::Title)),
        ];
        let menu = MenuLayout::build(window(), &entries, &quit_style, &mut FixedMetrics).unwrap();

        // 360 / 25 = 14
        assert_eq!(menu.headers()[0].position().1, 14);
        let gap = menu.items()[1].position().1 - menu.items()[0].position().1;
        assert_eq!(gap, 50 + 14);
    }

    #[test]
    fn test_pitch_uses_tallest_item() {
        let entries = [
            MenuEntry::header("Hop"),
            MenuEntry::item("Go", Target::Scene(SceneId::Gameplay)),
            MenuEntry::item("Settings", Target::Scene(SceneId::Options)),
            MenuEntry::item("Exit", Target::Exit),
        ];
        let menu = MenuLayout::build(window(), &entries, &style(), &mut TallerWhenLonger).unwrap();
        let items = menu.items();

        let heights: Vec<u32> = items.iter().map(|i| i.bounds().height()).collect();
        assert_eq!(heights, vec![20, 80, 40]);

        // offset = 7 + 30, pitch = 80 + 7, block = 261, top = 37 + center(323, 261)
        let tops: Vec<i32> = items.iter().map(|i| i.position().1).collect();
        assert_eq!(tops, vec![68, 155, 242]);

        for pair in items.windows(2) {
            let (upper, lower) = (pair[0].bounds(), pair[1].bounds());
            assert_eq!(lower.y() - upper.y(), 87);
            assert!(upper.bottom() + 7 <= lower.y());
            assert!(!upper.has_intersection(lower));
        }
        assert!(items[2].bounds().bottom() <= 360);
    }

    #[test]
    fn test_headers_stack_without_gap() {
        let entries = [
            MenuEntry::header("First"),
            MenuEntry::header("Second"),
            MenuEntry::item("Only", Target::Exit),
        ];
        let menu = MenuLayout::build(window(), &entries, &style(), &mut FixedMetrics).unwrap();

        assert_eq!(menu.headers()[0].position().1, 7);
        assert_eq!(menu.headers()[1].position().1, 7 + 72);
    }

    #[test]
    fn test_layout_respects_window_origin() {
        let offset_window = Rect::new(100, 50, 640, 360);
        let menu =
            MenuLayout::build(offset_window, &title_entries(), &style(), &mut FixedMetrics).unwrap();
        assert_eq!(menu.headers()[0].position(), (258, 57));
        assert_eq!(menu.items()[0].position(), (295, 184));
    }

    #[test]
    fn test_nothing_highlighted_initially() {
        let mut menu = title_menu();
        assert_eq!(menu.highlighted(), None);
        assert_eq!(menu.handle_event(&key(Keycode::Return)), None);
    }

    #[test]
    fn test_down_wraps_to_first_item() {
        let mut menu = title_menu();
        for expected in [0, 1, 2, 0] {
            menu.handle_event(&key(Keycode::Down));
            assert_eq!(menu.highlighted(), Some(expected));
        }
    }

    #[test]
    fn test_up_wraps_to_last_item() {
        let mut menu = title_menu();
        menu.handle_event(&key(Keycode::Up));
        assert_eq!(menu.highlighted(), Some(2));

        menu.handle_event(&key(Keycode::Down));
        assert_eq!(menu.highlighted(), Some(0));
        menu.handle_event(&key(Keycode::Up));
        assert_eq!(menu.highlighted(), Some(2));
    }

    #[test]
    fn test_confirm_keys_select_highlighted_target() {
        let mut menu = title_menu();
        menu.handle_event(&key(Keycode::Down));
        menu.handle_event(&key(Keycode::Down));

        let expected = Some(MenuAction::Select(Target::Scene(SceneId::Options)));
        assert_eq!(menu.handle_event(&key(Keycode::Return)), expected);
        assert_eq!(menu.handle_event(&key(Keycode::KpEnter)), expected);
        assert_eq!(menu.handle_event(&key(Keycode::Space)), expected);
    }

    #[test]
    fn test_escape_goes_back() {
        let mut menu = title_menu();
        assert_eq!(menu.handle_event(&key(Keycode::Escape)), Some(MenuAction::Back));
    }

    #[test]
    fn test_click_hit_test_edges() {
        let mut menu = title_menu();
        // "Quit": 100x50 at (270, 248)
        let quit = Some(MenuAction::Select(Target::Scene(SceneId::QuitConfirm)));

        assert_eq!(menu.handle_event(&click(270, 248)), quit);
        assert_eq!(menu.handle_event(&click(369, 297)), quit);
        assert_eq!(menu.handle_event(&click(370, 297)), None);
        assert_eq!(menu.handle_event(&click(369, 298)), None);
        assert_eq!(menu.handle_event(&click(269, 248)), None);
    }

    #[test]
    fn test_right_click_is_ignored() {
        let mut menu = title_menu();
        let event = InputEvent::MouseDown {
            button: MouseButton::Right,
            x: 300,
            y: 260,
        };
        assert_eq!(menu.handle_event(&event), None);
    }

    #[test]
    fn test_header_is_not_clickable() {
        let mut menu = title_menu();
        assert_eq!(menu.handle_event(&click(200, 20)), None);
    }

    #[test]
    fn test_mouse_motion_highlights_item_under_pointer() {
        let mut menu = title_menu();
        menu.handle_event(&InputEvent::MouseMove { x: 300, y: 200 });
        assert_eq!(menu.highlighted(), Some(1));

        menu.handle_event(&InputEvent::MouseMove { x: 5, y: 5 });
        assert_eq!(menu.highlighted(), Some(1));
    }

    #[test]
    fn test_empty_menu_navigation_is_a_no_op() {
        let entries = [MenuEntry::header("Nothing here")];
        let mut menu = MenuLayout::build(window(), &entries, &style(), &mut FixedMetrics).unwrap();
        menu.select_next();
        menu.select_previous();
        assert_eq!(menu.highlighted(), None);
    }

    #[test]
    fn test_render_order_and_outline() {
        let mut menu = title_menu();
        let style = style();
        let mut surface = RecordingSurface::new();

        menu.render(&mut surface).unwrap();
        assert_eq!(surface.ops[0], DrawOp::Fill(style.background, Some(window())));
        assert_eq!(surface.texts(), vec!["Bunny hop", "Start game", "Options", "Quit"]);
        assert!(!surface.ops.iter().any(|op| matches!(op, DrawOp::Outline(..))));

        menu.handle_event(&key(Keycode::Up));
        let mut surface = RecordingSurface::new();
        menu.render(&mut surface).unwrap();
        assert_eq!(
            surface.ops.last(),
            Some(&DrawOp::Outline(style.highlight, Rect::new(270, 248, 100, 50)))
        );
    }
}
