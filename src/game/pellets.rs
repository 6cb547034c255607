use macroquad::prelude::*;
use macroquad::rand::gen_range;

use crate::constants::PELLET_PICKUP_MARGIN;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pellet {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// The local pellet field. Eaten pellets are gone for the rest of the session.
#[derive(Default)]
pub struct Pellets {
    items: Vec<Pellet>,
}

impl Pellets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scatter(count: usize, world_size: f32, radius: f32) -> Self {
        let mut pellets = Self::new();
        for _ in 0..count {
            let pos = vec2(gen_range(0.0, world_size), gen_range(0.0, world_size));
            pellets.spawn(pos, radius);
        }
        pellets
    }

    pub fn spawn(&mut self, pos: Vec2, radius: f32) {
        let palette = [
            Color::from_rgba(120, 220, 255, 255),
            Color::from_rgba(255, 120, 200, 255),
            Color::from_rgba(255, 210, 120, 255),
        ];
        let color = palette[gen_range(0, palette.len())];
        self.items.push(Pellet { pos, radius, color });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pellet> {
        self.items.iter()
    }

    /// Removes and returns every pellet the head is touching.
    pub fn eat_colliding(&mut self, head: Vec2) -> Vec<Pellet> {
        let mut eaten = Vec::new();
        self.items.retain(|p| {
            let reach = p.radius + PELLET_PICKUP_MARGIN;
            if head.distance(p.pos) < reach {
                eaten.push(*p);
                false
            } else {
                true
            }
        });
        eaten
    }

    pub fn draw(&self, to_screen: impl Fn(Vec2) -> Vec2) {
        let margin = 32.0;
        for p in &self.items {
            let sp = to_screen(p.pos);
            if sp.x < -margin
                || sp.y < -margin
                || sp.x > screen_width() + margin
                || sp.y > screen_height() + margin
            {
                continue;
            }
            draw_circle(sp.x, sp.y, p.radius, p.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_stays_inside_world() {
        let pellets = Pellets::scatter(200, 500.0, 5.0);
        assert_eq!(pellets.len(), 200);
        for p in pellets.iter() {
            assert!((0.0..=500.0).contains(&p.pos.x));
            assert!((0.0..=500.0).contains(&p.pos.y));
            assert_eq!(p.radius, 5.0);
        }
    }

    #[test]
    fn head_within_reach_eats_pellet() {
        let mut pellets = Pellets::new();
        pellets.spawn(vec2(100.0, 100.0), 5.0);
        pellets.spawn(vec2(400.0, 400.0), 5.0);

        let eaten = pellets.eat_colliding(vec2(100.0 + 5.0 + PELLET_PICKUP_MARGIN - 0.5, 100.0));
        assert_eq!(eaten.len(), 1);
        assert_eq!(eaten[0].pos, vec2(100.0, 100.0));
        assert_eq!(pellets.len(), 1);
    }

    #[test]
    fn head_at_exact_reach_does_not_eat() {
        let mut pellets = Pellets::new();
        pellets.spawn(vec2(0.0, 0.0), 5.0);
        let eaten = pellets.eat_colliding(vec2(5.0 + PELLET_PICKUP_MARGIN, 0.0));
        assert!(eaten.is_empty());
        assert_eq!(pellets.len(), 1);
    }

    #[test]
    fn eaten_pellet_is_never_eaten_again() {
        let mut pellets = Pellets::new();
        pellets.spawn(vec2(10.0, 10.0), 5.0);

        assert_eq!(pellets.eat_colliding(vec2(10.0, 10.0)).len(), 1);
        assert!(pellets.eat_colliding(vec2(10.0, 10.0)).is_empty());
        assert!(pellets.is_empty());
        assert_eq!(pellets.iter().count(), 0);
    }

    #[test]
    fn several_pellets_can_be_eaten_at_once() {
        let mut pellets = Pellets::new();
        pellets.spawn(vec2(0.0, 0.0), 5.0);
        pellets.spawn(vec2(3.0, 0.0), 5.0);
        pellets.spawn(vec2(-3.0, 0.0), 5.0);
        assert_eq!(pellets.eat_colliding(vec2(0.0, 0.0)).len(), 3);
    }
}
