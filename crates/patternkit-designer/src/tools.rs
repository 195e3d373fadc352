//! Tool identifiers and the tool catalog shown by the palettes.
//!
//! Tool ids are an open set owned by the presentation layer. The engine
//! only gives meaning to the ones it acts on and carries the rest as
//! [`ToolId::Other`].

use std::fmt;
use std::str::FromStr;

use patternkit_core::constants::SEAM_ALLOWANCE_PRESETS;
use patternkit_core::units::{format_length, MeasurementSystem};

use crate::model::PieceKind;

#[derive(Debug, Clone, PartialEq)]
pub enum ToolId {
    Line,
    Curve,
    Select,
    Cut,
    Rectangle,
    Grain,
    /// `seam-<width>`: apply a seam allowance of that width.
    Seam(f64),
    Other(String),
}

impl ToolId {
    /// Piece kind a drawing tool produces, `None` for every other tool.
    pub fn drawn_kind(&self) -> Option<PieceKind> {
        match self {
            ToolId::Line => Some(PieceKind::Line),
            ToolId::Curve => Some(PieceKind::Curve),
            ToolId::Rectangle => Some(PieceKind::Rectangle),
            _ => None,
        }
    }
}

impl FromStr for ToolId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "line" => ToolId::Line,
            "curve" => ToolId::Curve,
            "select" => ToolId::Select,
            "cut" => ToolId::Cut,
            "rectangle" => ToolId::Rectangle,
            "grain" => ToolId::Grain,
            other => match other.strip_prefix("seam-").map(str::parse::<f64>) {
                Some(Ok(width)) if width.is_finite() && width > 0.0 => ToolId::Seam(width),
                _ => ToolId::Other(other.to_string()),
            },
        })
    }
}

impl From<&str> for ToolId {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(tool) => tool,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolId::Line => write!(f, "line"),
            ToolId::Curve => write!(f, "curve"),
            ToolId::Select => write!(f, "select"),
            ToolId::Cut => write!(f, "cut"),
            ToolId::Rectangle => write!(f, "rectangle"),
            ToolId::Grain => write!(f, "grain"),
            ToolId::Seam(width) => write!(f, "seam-{}", width),
            ToolId::Other(id) => write!(f, "{}", id),
        }
    }
}

/// Palette a tool button lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolGroup {
    PatternTools,
    PatternFeatures,
    Construction,
    SeamWidths,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolEntry {
    pub id: String,
    pub code: &'static str,
    pub label: String,
    pub group: ToolGroup,
}

impl ToolEntry {
    fn new(id: &str, code: &'static str, label: &str, group: ToolGroup) -> Self {
        Self {
            id: id.to_string(),
            code,
            label: label.to_string(),
            group,
        }
    }

    pub fn tool(&self) -> ToolId {
        ToolId::from(self.id.as_str())
    }
}

const SEAM_CODES: [&str; 5] = ["G0041", "G0042", "G0043", "G0044", "G0045"];

/// Every tool button offered by the toolbar and sidebar palettes.
pub fn tool_catalog(system: MeasurementSystem) -> Vec<ToolEntry> {
    use ToolGroup::*;

    let mut entries = vec![
        ToolEntry::new("line", "PAT001", "Line", PatternTools),
        ToolEntry::new("curve", "PAT0012", "Curve", PatternTools),
        ToolEntry::new("convert", "PAT0013", "Convert", PatternTools),
        ToolEntry::new("rotate", "PAT0014", "Rotate", PatternTools),
        ToolEntry::new("select", "PAT002", "Select", PatternTools),
        ToolEntry::new("cut", "PAT0021", "Cut Line", PatternTools),
        ToolEntry::new("rectangle", "PAT003", "Rectangle", PatternTools),
        ToolEntry::new("godet", "PAT0031", "Godet", PatternTools),
        ToolEntry::new("mirror", "PAT004", "Mirror", PatternTools),
        ToolEntry::new("type", "PAT0081", "Type", PatternFeatures),
        ToolEntry::new("grain", "PAT0082", "Grain", PatternFeatures),
        ToolEntry::new("notch", "PAT0083", "Notch", PatternFeatures),
        ToolEntry::new("buttonhole", "PAT0084", "Button Hole", PatternFeatures),
        ToolEntry::new("button", "PAT00841", "Button", PatternFeatures),
        ToolEntry::new("duplicate", "CON001", "Duplicate", Construction),
        ToolEntry::new("zoom", "CON002", "Zoom", Construction),
        ToolEntry::new("view", "CON003", "View", Construction),
        ToolEntry::new("copy", "CON004", "Copy", Construction),
        ToolEntry::new("paste", "CON005", "Paste", Construction),
        ToolEntry::new("save", "CON006", "Save", Construction),
        ToolEntry::new("delete", "CON007", "Delete", Construction),
        ToolEntry::new("seam", "PAT0072", "Seam", Construction),
    ];

    for (width, code) in SEAM_ALLOWANCE_PRESETS.iter().zip(SEAM_CODES) {
        entries.push(ToolEntry {
            id: format!("seam-{}", width),
            code,
            label: format_length(*width, system),
            group: SeamWidths,
        });
    }
    entries
}
