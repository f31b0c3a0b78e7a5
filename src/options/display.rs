use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Display toggles.
pub struct DisplayOptions {
    /// Whether the reference floor under the scene starts visible.
    #[schemars(title = "Show Floor")]
    pub show_floor: bool,
}
