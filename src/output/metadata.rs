use serde::{Deserialize, Serialize};

/// File name of the generator's combined action → metadata map, written at
/// the assets root.
pub const METADATA_FILE: &str = "metadata.json";

/// Playback rate assumed when packing sheets without generator metadata.
pub const DEFAULT_SHEET_FPS: u32 = 12;

/// Per-action record emitted by the generation stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionMetadata {
    pub action: String,
    pub frame_count: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub fps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Per-action descriptor written next to a packed sprite sheet.
///
/// The five count/dimension fields are always measured from the frames on
/// disk; generator metadata only ever contributes `fps` and `description`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetMetadata {
    pub action: String,
    pub frame_count: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub fps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
