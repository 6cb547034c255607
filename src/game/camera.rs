use macroquad::prelude::*;

/// Camera that keeps `center` (the snake head) fixed at the middle of the screen.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub center: Vec2,
    pub screen_center: Vec2,
}

impl Camera {
    pub fn follow(center: Vec2, screen_size: Vec2) -> Self {
        Self {
            center,
            screen_center: screen_size * 0.5,
        }
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.screen_center + (world - self.center)
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.center + (screen - self.screen_center)
    }
}
