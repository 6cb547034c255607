use crate::constants::GROW_AMOUNT;
use crate::net::messages::{ClientMessage, ServerMessage};

/// The broadcast an inbound client message causes, if any.
///
/// Pellet claims are trusted as-is: there is no check that the sender was
/// anywhere near a pellet, and any client can make every client grow.
pub fn route(message: ClientMessage) -> Option<ServerMessage> {
    match message {
        ClientMessage::Move { pos } => Some(ServerMessage::Move { pos }),
        ClientMessage::PelletEaten { .. } => Some(ServerMessage::Grow {
            amount: GROW_AMOUNT,
        }),
        ClientMessage::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::messages::Vec2f;
    use serde_json::json;

    #[test]
    fn move_is_echoed_verbatim() {
        let pos = json!({ "x": 12.0, "y": -7.5, "id": "p1" });
        assert_eq!(
            route(ClientMessage::Move { pos: pos.clone() }),
            Some(ServerMessage::Move { pos })
        );
    }

    #[test]
    fn move_pos_of_any_shape_is_echoed() {
        for pos in [json!({ "x": 1 }), json!("here"), json!([1, 2]), json!(null)] {
            assert_eq!(
                route(ClientMessage::Move { pos: pos.clone() }),
                Some(ServerMessage::Move { pos })
            );
        }
    }

    #[test]
    fn pellet_claim_becomes_fixed_grow() {
        let near = ClientMessage::PelletEaten {
            pellet_pos: Some(Vec2f { x: 10.0, y: 10.0 }),
        };
        let far = ClientMessage::PelletEaten {
            pellet_pos: Some(Vec2f { x: 1.0e6, y: -1.0e6 }),
        };
        assert_eq!(route(near), Some(ServerMessage::Grow { amount: 5 }));
        assert_eq!(route(far), Some(ServerMessage::Grow { amount: 5 }));
        assert_eq!(
            route(ClientMessage::PelletEaten { pellet_pos: None }),
            Some(ServerMessage::Grow { amount: 5 })
        );
    }

    #[test]
    fn unknown_messages_are_dropped() {
        assert_eq!(route(ClientMessage::Unknown), None);
    }
}
