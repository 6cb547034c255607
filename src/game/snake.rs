use std::collections::VecDeque;

use macroquad::prelude::*;

use crate::constants::{INITIAL_SNAKE_LENGTH, MOVE_EPSILON, SNAKE_SPEED};

/// A snake whose head chases a target point.
///
/// Segments are stored head first. The length never shrinks: `update` keeps
/// it constant and `grow` is the only way it changes.
pub struct Snake {
    pub speed: f32,
    target: Vec2,
    segments: VecDeque<Vec2>,
}

impl Snake {
    pub fn new_at(head: Vec2) -> Self {
        Self::with_length(head, INITIAL_SNAKE_LENGTH)
    }

    pub fn with_length(head: Vec2, length: usize) -> Self {
        let segments = std::iter::repeat(head).take(length.max(1)).collect();
        Self {
            speed: SNAKE_SPEED,
            target: head,
            segments,
        }
    }

    pub fn head_pos(&self) -> Vec2 {
        self.segments[0]
    }

    pub fn tail_pos(&self) -> Vec2 {
        self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.segments.iter().copied()
    }

    pub fn update_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Steps the head `speed` units toward the target, dropping the tail.
    pub fn update(&mut self) {
        let to_target = self.target - self.head_pos();
        let dist = to_target.length();
        if dist < MOVE_EPSILON {
            return;
        }

        let head = self.head_pos() + to_target / dist * self.speed;
        self.segments.push_front(head);
        self.segments.pop_back();
    }

    /// Appends `amount` copies of the tail; each one trails the body on later moves.
    pub fn grow(&mut self, amount: u32) {
        let tail = self.tail_pos();
        self.segments.extend(std::iter::repeat(tail).take(amount as usize));
    }

    pub fn draw(&self, to_screen: impl Fn(Vec2) -> Vec2, radius: f32) {
        let body = Color::from_rgba(120, 230, 90, 255);
        let head_color = Color::from_rgba(210, 255, 140, 255);

        let mut prev: Option<Vec2> = None;
        for p in self.segments.iter().rev() {
            let sp = to_screen(*p);
            if let Some(pp) = prev {
                draw_line(pp.x, pp.y, sp.x, sp.y, radius * 2.0, body);
            }
            prev = Some(sp);
        }

        let head = to_screen(self.head_pos());
        draw_circle(head.x, head.y, radius * 1.2, head_color);
    }
}
