use macroquad::prelude::*;

use crate::client::net::ClientRuntime;
use crate::client::ClientConfig;
use crate::constants::{SNAKE_SEGMENT_RADIUS, WORLD_SIZE};
use crate::game::camera::Camera;
use crate::game::world::World;

/// First active touch, otherwise the mouse.
fn pointer_position() -> Vec2 {
    if let Some(t) = touches()
        .into_iter()
        .find(|t| !matches!(t.phase, TouchPhase::Ended | TouchPhase::Cancelled))
    {
        return t.position;
    }
    let (mx, my) = mouse_position();
    vec2(mx, my)
}

fn draw_world_border(camera: &Camera) {
    let top_left = camera.world_to_screen(vec2(0.0, 0.0));
    draw_rectangle_lines(
        top_left.x,
        top_left.y,
        WORLD_SIZE,
        WORLD_SIZE,
        4.0,
        Color::from_rgba(255, 90, 90, 110),
    );
}

fn draw_hud(world: &World, online: bool) {
    let status = if online { "online" } else { "offline" };
    let color = if online {
        Color::from_rgba(255, 255, 255, 200)
    } else {
        Color::from_rgba(255, 140, 120, 220)
    };
    draw_text(&format!("length {}", world.snake.len()), 16.0, 28.0, 24.0, color);
    draw_text(status, 16.0, 54.0, 20.0, color);
}

pub async fn run() {
    let config = ClientConfig::default();
    let runtime = ClientRuntime::connect(config.server_url);
    let mut world = World::new();

    loop {
        while let Some(msg) = runtime.try_recv() {
            world.apply(&msg);
        }

        // Pointer is in screen space; the camera sits on the head from last frame.
        let screen = vec2(screen_width(), screen_height());
        let camera = Camera::follow(world.snake.head_pos(), screen);
        world.snake.update_target(camera.screen_to_world(pointer_position()));

        for msg in world.step() {
            runtime.send(msg);
        }

        let camera = Camera::follow(world.snake.head_pos(), screen);
        clear_background(Color::from_rgba(12, 14, 20, 255));
        draw_world_border(&camera);
        world.pellets.draw(|p| camera.world_to_screen(p));
        world
            .snake
            .draw(|p| camera.world_to_screen(p), SNAKE_SEGMENT_RADIUS);
        draw_hud(&world, runtime.is_connected());

        next_frame().await;
    }
}
