//! Persisted container/loads document.
//!
//! Dimensions are stored as decimal strings and coerced when converted into engine
//! input: container axes fall back to `10`, load axes to `1`. Colors ride along with
//! each load entry and never reach the engine.

use crate::error::Result;
use crate::model::{Container, Item};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_CONTAINER_NAME: &str = "Container";
pub const TEU_CONTAINER_NAME: &str = "20-foot container (TEU - Twenty-foot Equivalent Unit)";
pub const DEFAULT_CONTAINER_DIM: f64 = 10.0;
pub const DEFAULT_LOAD_DIM: f64 = 1.0;
/// Size given to a new load row when there is nothing to copy from.
pub const NEW_LOAD_SIZE: (&str, &str) = ("1.2", "1.0");

/// RGBA color with channels in `[0, 1]`. Only used for rendering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color(pub [f64; 4]);

impl Default for Color {
    fn default() -> Self {
        Color([0.5, 0.5, 0.5, 0.8])
    }
}

impl Color {
    /// Random mid-tone color (channels in `[0.3, 0.9]`, alpha `0.8`).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Color([
            rng.gen_range(0.3..=0.9),
            rng.gen_range(0.3..=0.9),
            rng.gen_range(0.3..=0.9),
            0.8,
        ])
    }

    pub fn clamped(self) -> Self {
        Color(self.0.map(|c| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) }))
    }

    /// Channels truncated to 8-bit.
    pub fn to_rgba8(&self) -> [u8; 4] {
        self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8)
    }

    /// `#rrggbbaa`
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContainerEntry {
    #[serde(default = "default_container_name")]
    pub name: String,
    #[serde(default = "default_container_dim_text", deserialize_with = "dim_text")]
    pub width: String,
    #[serde(default = "default_container_dim_text", deserialize_with = "dim_text")]
    pub height: String,
}

impl Default for ContainerEntry {
    fn default() -> Self {
        Self {
            name: default_container_name(),
            width: default_container_dim_text(),
            height: default_container_dim_text(),
        }
    }
}

impl ContainerEntry {
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            DEFAULT_CONTAINER_NAME
        } else {
            name
        }
    }

    /// Engine container with invalid axes replaced by `10`.
    pub fn resolve(&self) -> Container {
        Container::new(
            parse_dim(&self.width, DEFAULT_CONTAINER_DIM, "container.width"),
            parse_dim(&self.height, DEFAULT_CONTAINER_DIM, "container.height"),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_load_dim_text", deserialize_with = "dim_text")]
    pub width: String,
    #[serde(default = "default_load_dim_text", deserialize_with = "dim_text")]
    pub height: String,
    #[serde(default, deserialize_with = "lenient_color")]
    pub color: Color,
}

impl LoadEntry {
    /// Name shown for the load at zero-based `row`.
    pub fn display_name(&self, row: usize) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            format!("Load {}", row + 1)
        } else {
            name.to_string()
        }
    }

    /// Engine item for the load at zero-based `row`; invalid axes become `1`.
    pub fn resolve(&self, row: usize) -> Item {
        Item::new(
            row,
            parse_dim(&self.width, DEFAULT_LOAD_DIM, "load.width"),
            parse_dim(&self.height, DEFAULT_LOAD_DIM, "load.height"),
            self.display_name(row),
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub container: ContainerEntry,
    #[serde(default)]
    pub loads: Vec<LoadEntry>,
}

impl Document {
    /// A 10x10 container holding a single `1.2 x 1.0` load.
    pub fn new_default(color: Color) -> Self {
        let mut doc = Document::default();
        doc.push_load(None, None, None, color);
        doc
    }

    /// A 20-foot (2.44 x 6.06) container with a single `1.2 x 1.0` load.
    pub fn teu(color: Color) -> Self {
        let mut doc = Document {
            container: ContainerEntry {
                name: TEU_CONTAINER_NAME.to_string(),
                width: "2.44".to_string(),
                height: "6.06".to_string(),
            },
            loads: Vec::new(),
        };
        doc.push_load(None, None, None, color);
        doc
    }

    /// Appends a load. A missing name becomes `Load {n}`; missing dimensions are
    /// copied from the last load when it has a valid value, else `1.2 x 1.0`.
    pub fn push_load(
        &mut self,
        name: Option<String>,
        width: Option<String>,
        height: Option<String>,
        color: Color,
    ) -> &LoadEntry {
        let prev = self.loads.last();
        let width = width
            .or_else(|| prev.map(|l| l.width.clone()).filter(|t| is_valid_dim(t)))
            .unwrap_or_else(|| NEW_LOAD_SIZE.0.to_string());
        let height = height
            .or_else(|| prev.map(|l| l.height.clone()).filter(|t| is_valid_dim(t)))
            .unwrap_or_else(|| NEW_LOAD_SIZE.1.to_string());
        let name = name.unwrap_or_else(|| format!("Load {}", self.loads.len() + 1));
        self.loads.push(LoadEntry {
            name,
            width,
            height,
            color,
        });
        &self.loads[self.loads.len() - 1]
    }

    /// Removes the load at zero-based `index`.
    pub fn remove_load(&mut self, index: usize) -> Option<LoadEntry> {
        if index < self.loads.len() {
            Some(self.loads.remove(index))
        } else {
            None
        }
    }

    /// Engine input: the resolved container and one item per load, `id` = row index.
    pub fn to_request(&self) -> (Container, Vec<Item>) {
        let container = self.container.resolve();
        let items = self
            .loads
            .iter()
            .enumerate()
            .map(|(row, load)| load.resolve(row))
            .collect();
        (container, items)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Pretty JSON with 4-space indentation.
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let doc = Self::from_json_str(&fs::read_to_string(path)?)?;
        debug!(path = %path.display(), loads = doc.loads.len(), "document loaded");
        Ok(doc)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?)?;
        debug!(path = %path.display(), loads = self.loads.len(), "document saved");
        Ok(())
    }
}

fn is_valid_dim(text: &str) -> bool {
    matches!(text.trim().parse::<f64>(), Ok(v) if v.is_finite() && v > 0.0)
}

/// Parses a dimension, falling back to `default` when the text is blank,
/// non-numeric, non-finite or not positive.
pub fn parse_dim(text: &str, default: f64, field: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        warn!(field, default, "missing dimension; using default");
        return default;
    }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        Ok(v) => {
            warn!(field, value = v, default, "dimension must be positive; using default");
            default
        }
        Err(e) => {
            warn!(field, text = t, default, error = %e, "invalid dimension; using default");
            default
        }
    }
}

fn default_container_name() -> String {
    DEFAULT_CONTAINER_NAME.to_string()
}
fn default_container_dim_text() -> String {
    "10".to_string()
}
fn default_load_dim_text() -> String {
    "1".to_string()
}

// Accepts `"2.44"` as well as `2.44`; anything else becomes blank and is
// defaulted (with a warning) on resolve.
fn dim_text<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<String, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_color<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<Color, D::Error> {
    let v = Value::deserialize(de)?;
    let channels: Option<Vec<f64>> = v
        .as_array()
        .and_then(|a| a.iter().map(Value::as_f64).collect());
    match channels {
        Some(c) if c.len() == 4 => Ok(Color([c[0], c[1], c[2], c[3]]).clamped()),
        _ => {
            warn!(color = %v, "invalid color; using default");
            Ok(Color::default())
        }
    }
}
