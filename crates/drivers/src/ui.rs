use std::time::Duration;

use font8x8::UnicodeFonts;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use tracing::info;
use wardrobe_application::{
    ApplicationService, CreateOutfitCommand, OutfitView, RenderSelectionCommand, RenderedSlot,
    StepCategoryCommand,
};
use wardrobe_domain::{Category, Direction, DisplaySize, Wardrobe};

use crate::config::AppConfig;

const PANEL_PADDING: usize = 10;
const BUTTON_GAP: usize = 6;
const BUTTON_MARGIN: usize = 4;
const BUTTON_HEIGHT: usize = 22;
const BUTTON_PADDING: usize = 6;
const GLYPH_SIZE: usize = 8;

const BUTTON_FACE: u32 = 0xF6EBDA;
const BUTTON_BORDER: u32 = 0x8A6F4D;
const BUTTON_TEXT: u32 = 0x2B2118;
const IMAGE_BORDER: u32 = 0x8A6F4D;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiAction {
    Step(Category, Direction),
    CreateOutfit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    left: usize,
    top: usize,
    width: usize,
    height: usize,
}

impl Rect {
    fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left as f32
            && y >= self.top as f32
            && x < (self.left + self.width) as f32
            && y < (self.top + self.height) as f32
    }
}

/// A control and the action it triggers once clicked.
#[derive(Debug, Clone, Copy)]
struct Button {
    label: &'static str,
    rect: Rect,
    action: UiAction,
}

#[derive(Debug, Clone)]
struct Layout {
    tops_image: Rect,
    bottoms_image: Rect,
    buttons: Vec<Button>,
}

impl Layout {
    /// Tops panel over bottoms panel, each an image with a button row below.
    fn new(window_width: usize, window_height: usize, image: DisplaySize) -> Self {
        let image_width = image.width as usize;
        let image_height = image.height as usize;
        let panel_height = window_height / 2;
        let image_left = window_width.saturating_sub(image_width) / 2;

        let image_rect = |panel_top: usize| Rect {
            left: image_left,
            top: panel_top + PANEL_PADDING,
            width: image_width,
            height: image_height,
        };
        let tops_image = image_rect(0);
        let bottoms_image = image_rect(panel_height);

        let mut buttons = Vec::with_capacity(5);
        for (category, image_rect) in [
            (Category::Tops, tops_image),
            (Category::Bottoms, bottoms_image),
        ] {
            let row_top = image_rect.top + image_rect.height + BUTTON_GAP;
            let prev_width = button_width("Prev");
            let next_width = button_width("Next");
            buttons.push(Button {
                label: "Prev",
                rect: Rect {
                    left: BUTTON_MARGIN,
                    top: row_top,
                    width: prev_width,
                    height: BUTTON_HEIGHT,
                },
                action: UiAction::Step(category, Direction::Previous),
            });
            buttons.push(Button {
                label: "Next",
                rect: Rect {
                    left: window_width.saturating_sub(BUTTON_MARGIN + next_width),
                    top: row_top,
                    width: next_width,
                    height: BUTTON_HEIGHT,
                },
                action: UiAction::Step(category, Direction::Next),
            });

            if category == Category::Bottoms {
                let label = "CREATE OUTFIT";
                let width = button_width(label);
                buttons.push(Button {
                    label,
                    rect: Rect {
                        left: window_width.saturating_sub(width) / 2,
                        top: row_top,
                        width,
                        height: BUTTON_HEIGHT,
                    },
                    action: UiAction::CreateOutfit,
                });
            }
        }

        Self {
            tops_image,
            bottoms_image,
            buttons,
        }
    }

    fn button_at(&self, x: f32, y: f32) -> Option<UiAction> {
        self.buttons
            .iter()
            .find(|button| button.rect.contains(x, y))
            .map(|button| button.action)
    }

    fn image_rect(&self, category: Category) -> Rect {
        match category {
            Category::Tops => self.tops_image,
            Category::Bottoms => self.bottoms_image,
        }
    }
}

/// Turns raw mouse state into clicks: a button fires when the press and the
/// release both land on it.
#[derive(Debug, Default)]
struct ClickTracker {
    was_down: bool,
    pressed: Option<UiAction>,
}

impl ClickTracker {
    fn update(&mut self, mouse_down: bool, hovered: Option<UiAction>) -> Option<UiAction> {
        let mut clicked = None;
        if mouse_down && !self.was_down {
            self.pressed = hovered;
        } else if !mouse_down && self.was_down {
            clicked = self.pressed.take().filter(|action| Some(*action) == hovered);
        }
        self.was_down = mouse_down;
        clicked
    }

    fn pressed(&self) -> Option<UiAction> {
        if self.was_down {
            self.pressed
        } else {
            None
        }
    }
}

pub fn launch_window(
    service: &mut ApplicationService,
    mut wardrobe: Wardrobe,
    config: &AppConfig,
) -> Result<(), String> {
    let width = config.window_width;
    let height = config.window_height;
    let size = config.image_size();
    let background = config.background_color()?;
    let layout = Layout::new(width, height, size);

    let mut window = Window::new(&config.title, width, height, WindowOptions::default())
        .map_err(|error| format!("failed to start UI window: {error}"))?;
    window.limit_update_rate(Some(Duration::from_micros(16_000)));

    let mut shown = OutfitView {
        top: service.render_selection(
            &wardrobe,
            RenderSelectionCommand {
                category: Category::Tops,
                size,
            },
        ),
        bottom: service.render_selection(
            &wardrobe,
            RenderSelectionCommand {
                category: Category::Bottoms,
                size,
            },
        ),
    };
    let mut clicks = ClickTracker::default();
    let mut buffer = vec![background; width * height];
    info!(title = %config.title, "window opened");

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let mut actions: Vec<UiAction> = window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .filter_map(key_action)
            .collect();

        let hovered = window
            .get_mouse_pos(MouseMode::Discard)
            .and_then(|(x, y)| layout.button_at(x, y));
        let mouse_down = window.get_mouse_down(MouseButton::Left);
        if let Some(action) = clicks.update(mouse_down, hovered) {
            actions.push(action);
        }

        for action in actions {
            dispatch(service, &mut wardrobe, &mut shown, action, config)?;
        }

        draw_frame(
            &mut buffer,
            width,
            background,
            &layout,
            &shown,
            hovered,
            clicks.pressed(),
        );
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|error| format!("failed to draw window: {error}"))?;
    }

    Ok(())
}

fn dispatch(
    service: &mut ApplicationService,
    wardrobe: &mut Wardrobe,
    shown: &mut OutfitView,
    action: UiAction,
    config: &AppConfig,
) -> Result<(), String> {
    let size = config.image_size();
    match action {
        UiAction::Step(category, direction) => {
            let slot = service
                .step_category(
                    wardrobe,
                    StepCategoryCommand {
                        category,
                        direction,
                        size,
                    },
                )
                .map_err(|error| format!("step failed: {error}"))?;
            replace_slot(shown, slot);
        }
        UiAction::CreateOutfit => {
            *shown = service
                .create_outfit(
                    wardrobe,
                    CreateOutfitCommand {
                        sound_effect: config.sound_effect.clone(),
                        size,
                    },
                )
                .map_err(|error| format!("create outfit failed: {error}"))?;
        }
    }
    Ok(())
}

fn replace_slot(shown: &mut OutfitView, slot: RenderedSlot) {
    match slot.category {
        Category::Tops => shown.top = slot,
        Category::Bottoms => shown.bottom = slot,
    }
}

fn key_action(key: Key) -> Option<UiAction> {
    match key {
        Key::Left => Some(UiAction::Step(Category::Tops, Direction::Previous)),
        Key::Right => Some(UiAction::Step(Category::Tops, Direction::Next)),
        Key::A => Some(UiAction::Step(Category::Bottoms, Direction::Previous)),
        Key::D => Some(UiAction::Step(Category::Bottoms, Direction::Next)),
        Key::Space => Some(UiAction::CreateOutfit),
        _ => None,
    }
}

fn draw_frame(
    buffer: &mut [u32],
    width: usize,
    background: u32,
    layout: &Layout,
    shown: &OutfitView,
    hovered: Option<UiAction>,
    pressed: Option<UiAction>,
) {
    buffer.fill(background);

    for slot in [&shown.top, &shown.bottom] {
        draw_slot(buffer, width, layout.image_rect(slot.category), slot);
    }

    for button in &layout.buttons {
        let face = if pressed == Some(button.action) {
            darken_color(BUTTON_FACE, 40)
        } else if hovered == Some(button.action) {
            lighten_color(BUTTON_FACE, 12)
        } else {
            BUTTON_FACE
        };
        draw_button(buffer, width, button, face);
    }
}

fn draw_slot(buffer: &mut [u32], width: usize, rect: Rect, slot: &RenderedSlot) {
    let frame = &slot.frame;
    let draw_width = (frame.width as usize).min(rect.width);
    let draw_height = (frame.height as usize).min(rect.height);
    let start_x = rect.left + (rect.width - draw_width) / 2;
    let start_y = rect.top + (rect.height - draw_height) / 2;

    for y in 0..draw_height {
        for x in 0..draw_width {
            if let Some(color) = frame.pixel(x as u32, y as u32) {
                set_pixel(buffer, width, start_x + x, start_y + y, color);
            }
        }
    }

    draw_rect(
        buffer,
        width,
        rect.left.saturating_sub(1),
        rect.top.saturating_sub(1),
        rect.width + 2,
        rect.height + 2,
        IMAGE_BORDER,
    );
}

fn draw_button(buffer: &mut [u32], width: usize, button: &Button, face: u32) {
    let rect = button.rect;
    fill_rect(buffer, width, rect.left, rect.top, rect.width, rect.height, face);
    draw_rect(
        buffer,
        width,
        rect.left,
        rect.top,
        rect.width,
        rect.height,
        BUTTON_BORDER,
    );

    let text_width = button.label.chars().count() * GLYPH_SIZE;
    let text_x = rect.left + rect.width.saturating_sub(text_width) / 2;
    let text_y = rect.top + rect.height.saturating_sub(GLYPH_SIZE) / 2;
    draw_text(buffer, width, text_x, text_y, button.label, BUTTON_TEXT);
}

fn button_width(label: &str) -> usize {
    label.chars().count() * GLYPH_SIZE + 2 * BUTTON_PADDING
}

fn fill_rect(buffer: &mut [u32], width: usize, left: usize, top: usize, w: usize, h: usize, color: u32) {
    for y in top..top.saturating_add(h) {
        for x in left..left.saturating_add(w) {
            set_pixel(buffer, width, x, y, color);
        }
    }
}

fn draw_rect(buffer: &mut [u32], width: usize, left: usize, top: usize, w: usize, h: usize, color: u32) {
    if w == 0 || h == 0 {
        return;
    }
    let right = left + w - 1;
    let bottom = top + h - 1;
    for x in left..=right {
        set_pixel(buffer, width, x, top, color);
        set_pixel(buffer, width, x, bottom, color);
    }
    for y in top..=bottom {
        set_pixel(buffer, width, left, y, color);
        set_pixel(buffer, width, right, y, color);
    }
}

fn darken_color(color: u32, amount: u8) -> u32 {
    let r = ((color >> 16) & 0xFF).saturating_sub(u32::from(amount));
    let g = ((color >> 8) & 0xFF).saturating_sub(u32::from(amount));
    let b = (color & 0xFF).saturating_sub(u32::from(amount));
    (r << 16) | (g << 8) | b
}

fn lighten_color(color: u32, amount: u8) -> u32 {
    let r = (((color >> 16) & 0xFF) + u32::from(amount)).min(0xFF);
    let g = (((color >> 8) & 0xFF) + u32::from(amount)).min(0xFF);
    let b = ((color & 0xFF) + u32::from(amount)).min(0xFF);
    (r << 16) | (g << 8) | b
}

fn set_pixel(buffer: &mut [u32], width: usize, x: usize, y: usize, color: u32) {
    let height = buffer.len() / width;
    if x < width && y < height {
        buffer[y * width + x] = color;
    }
}

fn draw_text(buffer: &mut [u32], width: usize, x: usize, y: usize, text: &str, color: u32) {
    let mut cursor_x = x;
    for ch in text.chars() {
        draw_char(buffer, width, cursor_x, y, ch, color);
        cursor_x = cursor_x.saturating_add(GLYPH_SIZE);
    }
}

fn draw_char(buffer: &mut [u32], width: usize, x: usize, y: usize, ch: char, color: u32) {
    let glyph = font8x8::BASIC_FONTS.get(ch).unwrap_or([0; 8]);
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..GLYPH_SIZE {
            if (bits >> col) & 1 == 1 {
                set_pixel(buffer, width, x + col, y + row, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use wardrobe_domain::{ImageId, RenderedImage};

    use super::*;

    fn classic_layout() -> Layout {
        Layout::new(220, 500, DisplaySize::new(200, 200))
    }

    fn center(rect: Rect) -> (f32, f32) {
        (
            (rect.left + rect.width / 2) as f32,
            (rect.top + rect.height / 2) as f32,
        )
    }

    fn button(layout: &Layout, action: UiAction) -> Button {
        *layout
            .buttons
            .iter()
            .find(|button| button.action == action)
            .expect("button for action")
    }

    #[test]
    fn layout_has_one_button_per_control() {
        let layout = classic_layout();
        let actions: HashSet<UiAction> =
            layout.buttons.iter().map(|button| button.action).collect();
        assert_eq!(layout.buttons.len(), 5);
        assert_eq!(actions.len(), 5);
        assert_eq!(
            button(&layout, UiAction::CreateOutfit).label,
            "CREATE OUTFIT"
        );
        assert_eq!(
            button(&layout, UiAction::Step(Category::Tops, Direction::Previous)).label,
            "Prev"
        );
        assert_eq!(
            button(&layout, UiAction::Step(Category::Bottoms, Direction::Next)).label,
            "Next"
        );
    }

    #[test]
    fn controls_fit_inside_the_window_without_overlapping() {
        let layout = classic_layout();
        for button in &layout.buttons {
            assert!(button.rect.left + button.rect.width <= 220, "{}", button.label);
            assert!(button.rect.top + button.rect.height <= 500, "{}", button.label);
        }
        for (index, first) in layout.buttons.iter().enumerate() {
            for second in &layout.buttons[index + 1..] {
                let apart_x = first.rect.left + first.rect.width <= second.rect.left
                    || second.rect.left + second.rect.width <= first.rect.left;
                let apart_y = first.rect.top + first.rect.height <= second.rect.top
                    || second.rect.top + second.rect.height <= first.rect.top;
                assert!(apart_x || apart_y, "{} overlaps {}", first.label, second.label);
            }
        }
        assert!(layout.tops_image.top + layout.tops_image.height < layout.bottoms_image.top);
    }

    #[test]
    fn hit_testing_finds_buttons_and_ignores_images() {
        let layout = classic_layout();
        let next_top = button(&layout, UiAction::Step(Category::Tops, Direction::Next));
        let (x, y) = center(next_top.rect);
        assert_eq!(layout.button_at(x, y), Some(next_top.action));

        let (x, y) = center(layout.tops_image);
        assert_eq!(layout.button_at(x, y), None);
    }

    #[test]
    fn click_fires_only_on_release_over_the_same_button() {
        let create = Some(UiAction::CreateOutfit);
        let mut clicks = ClickTracker::default();

        assert_eq!(clicks.update(false, create), None);
        assert_eq!(clicks.update(true, create), None);
        assert_eq!(clicks.pressed(), create);
        assert_eq!(clicks.update(true, create), None);
        assert_eq!(clicks.update(false, create), create);
        assert_eq!(clicks.update(false, create), None);

        let prev = Some(UiAction::Step(Category::Tops, Direction::Previous));
        assert_eq!(clicks.update(true, create), None);
        assert_eq!(clicks.update(false, prev), None);
    }

    #[test]
    fn keys_map_to_category_steps() {
        assert_eq!(
            key_action(Key::Right),
            Some(UiAction::Step(Category::Tops, Direction::Next))
        );
        assert_eq!(
            key_action(Key::A),
            Some(UiAction::Step(Category::Bottoms, Direction::Previous))
        );
        assert_eq!(key_action(Key::Space), Some(UiAction::CreateOutfit));
        assert_eq!(key_action(Key::Q), None);
    }

    #[test]
    fn replace_slot_updates_only_its_category() {
        let size = DisplaySize::new(2, 2);
        let slot = |category: Category, path: &str| RenderedSlot {
            category,
            image: ImageId::new(path),
            frame: RenderedImage::placeholder(size),
        };
        let mut shown = OutfitView {
            top: slot(Category::Tops, "tops/a.png"),
            bottom: slot(Category::Bottoms, "bottoms/x.png"),
        };

        replace_slot(&mut shown, slot(Category::Bottoms, "bottoms/y.png"));
        assert_eq!(shown.top.image.as_str(), "tops/a.png");
        assert_eq!(shown.bottom.image.as_str(), "bottoms/y.png");
    }

    #[test]
    fn frame_draws_images_inside_their_rects() {
        let layout = classic_layout();
        let size = DisplaySize::new(200, 200);
        let shown = OutfitView {
            top: RenderedSlot {
                category: Category::Tops,
                image: ImageId::new("tops/a.png"),
                frame: RenderedImage {
                    width: 200,
                    height: 200,
                    pixels: vec![0xFF0000; size.pixel_count()],
                },
            },
            bottom: RenderedSlot {
                category: Category::Bottoms,
                image: ImageId::new("bottoms/x.png"),
                frame: RenderedImage::placeholder(size),
            },
        };
        let mut buffer = vec![0; 220 * 500];
        draw_frame(&mut buffer, 220, 0xE3C396, &layout, &shown, None, None);

        let (x, y) = center(layout.tops_image);
        assert_eq!(buffer[y as usize * 220 + x as usize], 0xFF0000);
        let (x, y) = center(layout.bottoms_image);
        assert_eq!(
            buffer[y as usize * 220 + x as usize],
            RenderedImage::PLACEHOLDER_COLOR
        );
        assert_eq!(buffer[0], 0xE3C396);
    }

    #[test]
    fn color_helpers_saturate() {
        assert_eq!(darken_color(0x102030, 0x20), 0x000010);
        assert_eq!(lighten_color(0xF0F0F0, 0x20), 0xFFFFFF);
    }
}
