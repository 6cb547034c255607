use macroquad::prelude::{vec2, Vec2};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2> for Vec2f {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Vec2f {
    pub fn to_json(self) -> Value {
        json!({ "x": self.x, "y": self.y })
    }
}

impl From<Vec2f> for Vec2 {
    fn from(v: Vec2f) -> Self {
        vec2(v.x, v.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// `pos` is opaque to the relay and echoed as received.
    Move {
        pos: Value,
    },
    /// The relay never looks at `pellet_pos`; the claim alone triggers a grow.
    PelletEaten {
        #[serde(rename = "pelletPos", default, skip_serializing_if = "Option::is_none")]
        pellet_pos: Option<Vec2f>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    Move { pos: Value },
    Grow { amount: u32 },
}
