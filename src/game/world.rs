use macroquad::prelude::*;

use crate::constants::{MOVE_REPORT_INTERVAL, PELLET_COUNT, PELLET_RADIUS, WORLD_SIZE};
use crate::game::pellets::Pellets;
use crate::game::snake::Snake;
use crate::net::messages::{ClientMessage, ServerMessage, Vec2f};

/// Local simulation for one client: its snake and the pellets it can see.
pub struct World {
    pub snake: Snake,
    pub pellets: Pellets,
    frame: u64,
}

impl World {
    pub fn new() -> Self {
        let center = vec2(WORLD_SIZE * 0.5, WORLD_SIZE * 0.5);
        Self::from_parts(
            Snake::new_at(center),
            Pellets::scatter(PELLET_COUNT, WORLD_SIZE, PELLET_RADIUS),
        )
    }

    pub fn from_parts(snake: Snake, pellets: Pellets) -> Self {
        Self {
            snake,
            pellets,
            frame: 0,
        }
    }

    /// Advances one frame and returns what should be sent to the relay.
    pub fn step(&mut self) -> Vec<ClientMessage> {
        self.frame = self.frame.wrapping_add(1);
        self.snake.update();

        let mut outbound: Vec<ClientMessage> = self
            .pellets
            .eat_colliding(self.snake.head_pos())
            .into_iter()
            .map(|p| ClientMessage::PelletEaten {
                pellet_pos: Some(p.pos.into()),
            })
            .collect();

        if self.frame % MOVE_REPORT_INTERVAL == 0 {
            let head: Vec2f = self.snake.head_pos().into();
            outbound.push(ClientMessage::Move { pos: head.to_json() });
        }

        outbound
    }

    pub fn apply(&mut self, msg: &ServerMessage) {
        match msg {
            ServerMessage::Grow { amount } => self.snake.grow(*amount),
            // Echoed positions carry no sender identity.
            ServerMessage::Move { .. } => {}
        }
    }
}
