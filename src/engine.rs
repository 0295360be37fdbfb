use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::config::WidgetConfig;
use crate::hit;
use crate::input::{Button, Cursor, InputState};
use crate::lines::{GuideLines, Line, Orientation};
use crate::model::ModelStore;
use crate::render;
use crate::scale::Point;
use crate::scene::{self, Scene};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A line moved and the model has already been updated.
    LineMoved { line: Line, value: f64 },
    /// Resize the canvas element to the given pixel size.
    ResizeCanvas { width: u32, height: u32 },
    SetCursor(Cursor),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies. Owns the host model: every accepted line move is written
/// back with `set` followed by `commit` before the handler returns.
pub struct EngineCore<M: ModelStore> {
    pub model: M,
    pub lines: GuideLines,
    pub config: WidgetConfig,
    pub input: InputState,
    pub cursor: Cursor,
    /// Natural image size in image pixels, known once the image has loaded.
    pub image_size: Option<(u32, u32)>,
}

impl<M: ModelStore> EngineCore<M> {
    /// Seed line positions and configuration from the model.
    ///
    /// Never fails: unusable values are logged and replaced with defaults.
    #[must_use]
    pub fn from_model(model: M) -> Self {
        let lines = GuideLines::from_model(&model);
        let config = WidgetConfig::from_model(&model);
        Self {
            model,
            lines,
            config,
            input: InputState::default(),
            cursor: Cursor::default(),
            image_size: None,
        }
    }

    // --- Image ---

    /// The background image finished loading with the given natural size.
    pub fn on_image_loaded(&mut self, width: u32, height: u32) -> Vec<Action> {
        self.image_size = Some((width, height));
        let (width, height) = scene::canvas_size(self.config.scale, width, height);
        vec![Action::ResizeCanvas { width, height }, Action::RenderNeeded]
    }

    // --- Input events ---

    /// Start dragging the line under the pointer, if any.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let Some(line) = hit::grab_test(screen_pt, &self.lines, self.config.scale) else {
            return Vec::new();
        };

        tracing::debug!(%line, "drag start");
        self.input = InputState::Dragging { line, anchor: screen_pt };
        self.set_cursor(Cursor::for_orientation(line.orientation())).into_iter().collect()
    }

    /// Move the dragged line, or update the hover cursor when idle.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::Dragging { line, anchor } = self.input else {
            let hover = hit::hover_cursor(screen_pt, &self.lines, self.config.scale);
            return self.set_cursor(hover).into_iter().collect();
        };

        let delta_px = match line.orientation() {
            Orientation::Vertical => screen_pt.x - anchor.x,
            Orientation::Horizontal => screen_pt.y - anchor.y,
        };
        let value = self.lines.get(line) + self.config.scale.screen_dist_to_image(delta_px);

        let mut actions = Vec::new();
        if self.lines.try_set(line, value) {
            self.model.set(line.key(), serde_json::Value::from(value));
            self.model.commit();
            self.input = InputState::Dragging { line, anchor: screen_pt };
            tracing::trace!(%line, value, "line moved");
            actions.push(Action::LineMoved { line, value });
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// End any drag.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    /// The pointer left the canvas; ends any drag.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    // --- Queries ---

    /// The line being dragged, if any.
    #[must_use]
    pub fn dragged_line(&self) -> Option<Line> {
        self.input.dragged_line()
    }

    /// Layout of the current frame, or `None` until the image has loaded.
    #[must_use]
    pub fn scene(&self) -> Option<Scene<'_>> {
        let (w, h) = self.image_size?;
        Some(scene::build(&self.lines, self.config.scale, &self.config.style, w, h))
    }

    fn end_drag(&mut self) -> Vec<Action> {
        if let Some(line) = self.input.dragged_line() {
            tracing::debug!(%line, value = self.lines.get(line), "drag end");
        }
        self.input = InputState::Idle;
        self.set_cursor(Cursor::Default).into_iter().collect()
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Option<Action> {
        if self.cursor == cursor {
            return None;
        }
        self.cursor = cursor;
        Some(Action::SetCursor(cursor))
    }
}

/// The full overlay engine. Wraps `EngineCore` and owns the browser canvas,
/// its 2D context and the background image.
pub struct Engine<M: ModelStore> {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    image: HtmlImageElement,
    pub core: EngineCore<M>,
}

impl<M: ModelStore> Engine<M> {
    /// Bind a core to a canvas element and the image it will draw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, image: HtmlImageElement, core: EngineCore<M>) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, image, core })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    #[must_use]
    pub fn image(&self) -> &HtmlImageElement {
        &self.image
    }

    // --- Delegated events ---

    /// Size the canvas to the loaded image and draw the first frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a canvas call fails.
    pub fn on_image_loaded(&mut self) -> Result<(), JsValue> {
        let actions = self.core.on_image_loaded(self.image.natural_width(), self.image.natural_height());
        self.apply(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if a canvas call fails.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_down(screen_pt, button);
        self.apply(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if a canvas call fails.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_move(screen_pt);
        self.apply(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if a canvas call fails.
    pub fn on_pointer_up(&mut self) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_up();
        self.apply(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if a canvas call fails.
    pub fn on_pointer_leave(&mut self) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_leave();
        self.apply(actions)
    }

    // --- Render ---

    /// Draw the current state to the canvas. Draws nothing before the image loads.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a canvas call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let Some(scene) = self.core.scene() else {
            return Ok(());
        };
        render::draw(&self.ctx, &self.image, &scene)
    }

    fn apply(&mut self, actions: Vec<Action>) -> Result<(), JsValue> {
        for action in actions {
            match action {
                Action::ResizeCanvas { width, height } => {
                    self.canvas.set_width(width);
                    self.canvas.set_height(height);
                }
                Action::SetCursor(cursor) => {
                    self.canvas.style().set_property("cursor", cursor.css())?;
                }
                Action::RenderNeeded => self.render()?,
                Action::LineMoved { .. } => {}
            }
        }
        Ok(())
    }
}
