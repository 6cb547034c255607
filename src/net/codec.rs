use crate::net::messages::{ClientMessage, ServerMessage};

pub fn encode_server_json(msg: &ServerMessage) -> Result<String, serde_json::Error> {
    serde_json::to_string(msg)
}

pub fn encode_client_json(msg: &ClientMessage) -> Result<String, serde_json::Error> {
    serde_json::to_string(msg)
}

pub fn decode_client_json(bytes: &[u8]) -> Result<ClientMessage, serde_json::Error> {
    serde_json::from_slice(bytes)
}

pub fn decode_server_json(bytes: &[u8]) -> Result<ServerMessage, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::messages::Vec2f;
    use crate::net::relay::route;
    use proptest::prelude::*;
    use serde_json::json;

    fn echo(frame: &str) -> String {
        let msg = decode_client_json(frame.as_bytes()).unwrap();
        encode_server_json(&route(msg).unwrap()).unwrap()
    }

    #[test]
    fn grow_uses_wire_shape() {
        let text = encode_server_json(&ServerMessage::Grow { amount: 5 }).unwrap();
        assert_eq!(text, r#"{"type":"grow","amount":5}"#);
    }

    #[test]
    fn move_uses_wire_shape() {
        let msg = ServerMessage::Move {
            pos: Vec2f { x: 1.5, y: -2.0 }.to_json(),
        };
        let text = encode_server_json(&msg).unwrap();
        assert_eq!(text, r#"{"type":"move","pos":{"x":1.5,"y":-2.0}}"#);
    }

    #[test]
    fn move_echo_keeps_pos_bytes() {
        let frames = [
            r#"{"type":"move","pos":{"x":0.123456789012345,"y":1e300}}"#,
            r#"{"type":"move","pos":{"x":1,"y":2,"id":"p1"}}"#,
            r#"{"type":"move","pos":{"y":2,"x":1}}"#,
            r#"{"type":"move","pos":{"x":1}}"#,
            r#"{"type":"move","pos":"here"}"#,
            r#"{"type":"move","pos":null}"#,
        ];
        for frame in frames {
            assert_eq!(echo(frame), frame);
        }
    }

    #[test]
    fn client_move_report_is_a_point() {
        let msg = ClientMessage::Move {
            pos: Vec2f { x: 3.0, y: 4.0 }.to_json(),
        };
        let text = encode_client_json(&msg).unwrap();
        assert_eq!(text, r#"{"type":"move","pos":{"x":3.0,"y":4.0}}"#);
        assert_eq!(
            decode_client_json(text.as_bytes()).unwrap(),
            ClientMessage::Move {
                pos: json!({ "x": 3.0, "y": 4.0 })
            }
        );
    }

    #[test]
    fn pellet_eaten_decodes_camel_case_payload() {
        let msg = decode_client_json(br#"{"type":"pelletEaten","pelletPos":{"x":10,"y":10}}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::PelletEaten {
                pellet_pos: Some(Vec2f { x: 10.0, y: 10.0 })
            }
        );
    }

    #[test]
    fn pellet_eaten_without_payload_still_decodes() {
        let msg = decode_client_json(br#"{"type":"pelletEaten"}"#).unwrap();
        assert_eq!(msg, ClientMessage::PelletEaten { pellet_pos: None });
    }

    #[test]
    fn client_pellet_eaten_encodes_camel_case() {
        let msg = ClientMessage::PelletEaten {
            pellet_pos: Some(Vec2f { x: 3.0, y: 4.0 }),
        };
        let text = encode_client_json(&msg).unwrap();
        assert_eq!(text, r#"{"type":"pelletEaten","pelletPos":{"x":3.0,"y":4.0}}"#);
    }

    #[test]
    fn unknown_type_is_not_an_error() {
        let msg = decode_client_json(br#"{"type":"chat","text":"hi"}"#).unwrap();
        assert_eq!(msg, ClientMessage::Unknown);
    }

    #[test]
    fn malformed_frames_are_errors() {
        assert!(decode_client_json(b"not json").is_err());
        assert!(decode_client_json(br#"{"pos":{"x":1,"y":2}}"#).is_err());
        assert!(decode_client_json(br#"{"type":"move"}"#).is_err());
        assert!(decode_server_json(br#"{"type":"grow","amount":-1}"#).is_err());
    }

    #[test]
    fn server_grow_decodes() {
        let msg = decode_server_json(br#"{"type":"grow","amount":5}"#).unwrap();
        assert_eq!(msg, ServerMessage::Grow { amount: 5 });
    }

    proptest! {
        #[test]
        fn arbitrary_bytes_dont_crash_client_decoder(
            bytes in prop::collection::vec(any::<u8>(), 0..512),
        ) {
            let _ = decode_client_json(&bytes);
        }

        #[test]
        fn arbitrary_bytes_dont_crash_server_decoder(
            bytes in prop::collection::vec(any::<u8>(), 0..512),
        ) {
            let _ = decode_server_json(&bytes);
        }
    }
}
