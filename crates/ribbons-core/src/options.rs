use crate::color::{DEFAULT_TARGET_COLOR, Palette};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Background/font scheme applied to a figure layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// White plot and paper backgrounds, black font.
    #[default]
    Light,
    /// Black plot and paper backgrounds, white font.
    Dark,
    /// Leave backgrounds and font color to the plotly.js template.
    Plotly,
}

impl Theme {
    pub fn background(self) -> Option<&'static str> {
        match self {
            Theme::Light => Some("white"),
            Theme::Dark => Some("black"),
            Theme::Plotly => None,
        }
    }

    pub fn font_color(self) -> Option<&'static str> {
        match self {
            Theme::Light => Some("black"),
            Theme::Dark => Some("white"),
            Theme::Plotly => None,
        }
    }
}

/// Options recognised by the flow diagram builder and its figure wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FlowOptions {
    /// Source category colors. `None` uses the plotly colorway.
    pub palette: Option<Palette>,
    /// Single color shared by every target category.
    pub target_color: String,
    /// When set, link colors are rewritten to this alpha.
    pub opacity: Option<f64>,
    pub title: Option<String>,
    pub theme: Theme,
    pub font_size: f64,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            palette: None,
            target_color: DEFAULT_TARGET_COLOR.to_string(),
            opacity: None,
            title: None,
            theme: Theme::default(),
            font_size: 11.0,
        }
    }
}

impl FlowOptions {
    pub const DEFAULT_TITLE: &'static str = "Concept -> Predictions";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = Some(Palette::from_colors(colors));
        self
    }

    pub fn with_target_color(mut self, color: impl Into<String>) -> Self {
        self.target_color = color.into();
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The palette in effect for source categories.
    pub fn effective_palette(&self) -> Palette {
        self.palette.clone().unwrap_or_default()
    }

    pub fn effective_title(&self) -> &str {
        self.title.as_deref().unwrap_or(Self::DEFAULT_TITLE)
    }

    /// Parses options from a JSON object; missing keys keep their defaults.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::default().with_overrides(value)
    }

    /// Applies a JSON object of option overrides on top of these options.
    ///
    /// Every key present in `overrides` replaces the current value outright (a palette override
    /// swaps the whole list); unknown keys are rejected.
    pub fn with_overrides(&self, overrides: &Value) -> Result<Self> {
        let Value::Object(incoming) = overrides else {
            return Err(Error::InvalidOptions {
                message: "overrides must be a JSON object".to_string(),
            });
        };
        let mut current = serde_json::to_value(self)?;
        if let Value::Object(fields) = &mut current {
            fields.extend(incoming.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        serde_json::from_value(current).map_err(|e| Error::InvalidOptions {
            message: e.to_string(),
        })
    }
}
