use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{
    foundation::core::Rgba8,
    foundation::error::{TilePaintError, TilePaintResult},
    theme::RenderTheme,
};

/// Shared, immutable theme definition loaded from JSON.
///
/// A definition is never rescaled itself. Each render gets its own [`Theme`] via
/// [`ThemeDef::instantiate`], so concurrent renders at different zoom levels never observe each
/// other's scale factors.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThemeDef {
    /// Number of levels per drawing layer.
    pub levels: usize,
    /// Stroke width used by styles that do not set their own.
    #[serde(default = "default_base_stroke_width")]
    pub base_stroke_width: f32,
    /// Named styles, keyed by the name the rule engine refers to them with.
    #[serde(default)]
    pub styles: BTreeMap<String, StyleDef>,
}

fn default_base_stroke_width() -> f32 {
    1.0
}

/// A single named style.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleDef {
    /// Level within a layer this style paints at.
    pub level: usize,
    /// Unscaled stroke width; `None` falls back to the theme's base width when stroked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
    /// Unscaled font size for text-bearing styles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Paint color.
    #[serde(default)]
    pub color: Rgba8,
}

impl ThemeDef {
    /// Parse and validate a theme definition.
    pub fn from_json_str(s: &str) -> TilePaintResult<Self> {
        let def: Self =
            serde_json::from_str(s).map_err(|e| TilePaintError::serde(e.to_string()))?;
        def.validate()?;
        Ok(def)
    }

    /// Check that every style fits the declared level count and carries sane sizes.
    pub fn validate(&self) -> TilePaintResult<()> {
        if !self.base_stroke_width.is_finite() || self.base_stroke_width < 0.0 {
            return Err(TilePaintError::validation(
                "base_stroke_width must be finite and >= 0",
            ));
        }
        for (name, style) in &self.styles {
            if style.level >= self.levels {
                return Err(TilePaintError::validation(format!(
                    "style '{name}' uses level {} but the theme declares {} levels",
                    style.level, self.levels
                )));
            }
            for (what, v) in [
                ("stroke_width", style.stroke_width),
                ("font_size", style.font_size),
            ] {
                if let Some(v) = v
                    && (!v.is_finite() || v < 0.0)
                {
                    return Err(TilePaintError::validation(format!(
                        "style '{name}' {what} must be finite and >= 0"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Build a fresh, unscaled per-render theme over a shared definition.
    pub fn instantiate(self: &Arc<Self>) -> Theme {
        Theme::new(Arc::clone(self))
    }
}

/// Per-render theme instance: a shared definition plus this render's scale factors.
#[derive(Clone, Debug)]
pub struct Theme {
    def: Arc<ThemeDef>,
    stroke_scale: f32,
    text_scale: f32,
}

impl Theme {
    /// Wrap a definition with unit scale factors.
    pub fn new(def: Arc<ThemeDef>) -> Self {
        Self {
            def,
            stroke_scale: 1.0,
            text_scale: 1.0,
        }
    }

    /// Underlying shared definition.
    pub fn def(&self) -> &ThemeDef {
        &self.def
    }

    /// Look up a style definition by name.
    pub fn style(&self, name: &str) -> Option<&StyleDef> {
        self.def.styles.get(name)
    }

    /// Current stroke scale factor.
    pub fn stroke_scale(&self) -> f32 {
        self.stroke_scale
    }

    /// Current text scale factor.
    pub fn text_scale(&self) -> f32 {
        self.text_scale
    }

    /// Scaled stroke width for `name`, or `None` if the style is unknown.
    pub fn stroke_width(&self, name: &str) -> Option<f32> {
        let style = self.style(name)?;
        let base = style.stroke_width.unwrap_or(self.def.base_stroke_width);
        Some(base * self.stroke_scale)
    }

    /// Scaled font size for `name`, or `None` if the style is unknown or carries no text.
    pub fn font_size(&self, name: &str) -> Option<f32> {
        self.style(name)?.font_size.map(|s| s * self.text_scale)
    }
}

impl RenderTheme for Theme {
    fn levels(&self) -> usize {
        self.def.levels
    }

    fn scale_stroke_width(&mut self, factor: f32) {
        self.stroke_scale = factor;
    }

    fn scale_text_size(&mut self, factor: f32) {
        self.text_scale = factor;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/model.rs"]
mod tests;
