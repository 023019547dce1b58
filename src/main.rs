//! Cloud Dash entry point
//!
//! Thin macroquad frontend over the simulation core: window setup, keyboard
//! polling, 60 fps frame pacing, and all drawing. No gameplay rules live
//! here.

use macroquad::prelude::*;

use cloud_dash::audio::MusicDirector;
use cloud_dash::config::GameConfig;
use cloud_dash::consts::{BOOST_SIZE, TICK_RATE};
use cloud_dash::sim::{GamePhase, GameState, ObstacleKind, TickInput, tick};

const BACKGROUND: Color = Color::new(0.04, 0.04, 0.16, 1.0);
const NEON_GREEN: Color = Color::new(0.22, 1.0, 0.08, 1.0);
const NEON_BLUE: Color = Color::new(0.0, 0.75, 1.0, 1.0);
const NEON_PINK: Color = Color::new(1.0, 0.08, 0.58, 1.0);
const NEON_ORANGE: Color = Color::new(1.0, 0.6, 0.0, 1.0);
const GOLD: Color = Color::new(1.0, 0.84, 0.0, 1.0);

fn window_conf() -> Conf {
    Conf {
        window_title: "Cloud Dash".to_string(),
        window_width: 800,
        window_height: 400,
        window_resizable: false,
        ..Default::default()
    }
}

fn now_ms() -> u64 {
    (get_time() * 1000.0) as u64
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = GameConfig::load_or_default("config.json");
    let seed = macroquad::miniquad::date::now() as u64;
    log::info!("run seed {seed}");

    let mut state = GameState::new(config, seed, now_ms());
    let mut music = MusicDirector::load("assets/audio/theme.ogg").await;
    let frame_budget = 1.0 / f64::from(TICK_RATE);

    loop {
        let frame_start = get_time();

        let input = TickInput {
            jump: is_key_pressed(KeyCode::Space),
            restart: is_key_pressed(KeyCode::R),
            any_key: get_last_key_pressed().is_some(),
        };
        tick(&mut state, &input, now_ms());
        music.apply(state.music_volume());

        draw(&state);
        next_frame().await;

        // Hold the loop at the simulation rate on uncapped displays
        let elapsed = get_time() - frame_start;
        if elapsed < frame_budget {
            std::thread::sleep(std::time::Duration::from_secs_f64(frame_budget - elapsed));
        }
    }
}

fn draw(state: &GameState) {
    clear_background(BACKGROUND);

    if state.phase == GamePhase::Ready {
        draw_centered_text("Press SPACE to start", state.config.screen_height / 2.0, 36.0, NEON_GREEN);
    }

    // Ground strip with highlight line
    let ground_y = state.config.ground_y();
    draw_rectangle(
        0.0,
        ground_y,
        state.config.screen_width,
        state.config.ground_height,
        NEON_BLUE,
    );
    draw_line(0.0, ground_y, state.config.screen_width, ground_y, 3.0, NEON_GREEN);

    for boost in &state.boost_items {
        draw_boost(boost);
    }

    draw_player(state);

    for obstacle in &state.obstacles {
        draw_obstacle(obstacle);
    }

    draw_text(&format!("Score: {}", state.score), 10.0, 40.0, 36.0, NEON_GREEN);
    draw_status_badges(state);

    if state.phase == GamePhase::GameOver {
        let mid = state.config.screen_height / 2.0;
        draw_centered_text_at("Game Over!", 2.0, mid - 28.0, 48.0, Color::new(0.08, 0.08, 0.08, 1.0));
        draw_centered_text("Game Over!", mid - 30.0, 48.0, NEON_PINK);
        draw_centered_text("Press R to restart", mid + 30.0, 36.0, NEON_GREEN);
    }
}

fn draw_player(state: &GameState) {
    let player = &state.player;
    let center = player.rect.center();

    if player.shield_active {
        draw_circle(center.x, center.y, 25.0, Color::new(0.0, 0.4, 1.0, 0.4));
    }
    if player.boost_active {
        draw_circle(center.x, center.y, 30.0, Color::new(0.22, 1.0, 0.08, 0.3));
    }

    draw_rectangle_ex(
        center.x,
        center.y,
        player.rect.w,
        player.rect.h,
        DrawRectangleParams {
            offset: vec2(0.5, 0.5),
            rotation: player.rotation.to_radians(),
            color: NEON_GREEN,
        },
    );
}

fn draw_obstacle(obstacle: &cloud_dash::sim::Obstacle) {
    let color = neon_color(obstacle.color);
    let glow = Color::new(color.r, color.g, color.b, 0.4);
    let rect = &obstacle.rect;

    match obstacle.kind {
        ObstacleKind::Triangle => {
            let [a, b, c] = obstacle.verts;
            let (a, b, c) = (vec2(a.x, a.y), vec2(b.x, b.y), vec2(c.x, c.y));
            draw_triangle(
                a + vec2(-5.0, 5.0),
                b + vec2(5.0, 5.0),
                c + vec2(0.0, -5.0),
                glow,
            );
            draw_triangle(a, b, c, color);
            draw_triangle_lines(a, b, c, 2.0, WHITE);
        }
        ObstacleKind::Platform => {
            draw_rectangle(rect.x - 5.0, rect.y - 5.0, rect.w + 10.0, rect.h + 10.0, glow);
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, WHITE);
        }
    }
}

fn draw_boost(boost: &cloud_dash::sim::BoostItem) {
    let cx = boost.rect.x + BOOST_SIZE / 2.0;
    let cy = boost.rect.y + BOOST_SIZE / 2.0 + boost.bounce_offset();

    draw_circle(cx, cy, boost.glow_radius(), Color::new(1.0, 0.6, 0.0, 0.4));
    draw_circle(cx, cy, 25.0, NEON_ORANGE);
    draw_circle(cx, cy, 22.0, GOLD);

    let label = measure_text("x2", None, 20, 1.0);
    draw_text("x2", cx - label.width / 2.0, cy + label.height / 2.0, 20.0, WHITE);
}

fn draw_status_badges(state: &GameState) {
    let right = state.config.screen_width - 10.0;
    let mut y = 30.0;

    if state.player.shield_active {
        draw_right_text("Protected", right, y, 20.0, NEON_BLUE);
        y += 25.0;
    }
    if state.player.boost_active {
        let seconds = state.player.boost_seconds_left(now_ms(), &state.config);
        draw_right_text(&format!("x2 Score: {seconds}s"), right, y, 20.0, NEON_ORANGE);
    }
}

fn neon_color(rgb: [u8; 3]) -> Color {
    Color::from_rgba(rgb[0], rgb[1], rgb[2], 255)
}

fn draw_centered_text(text: &str, y: f32, size: f32, color: Color) {
    draw_centered_text_at(text, 0.0, y, size, color);
}

fn draw_centered_text_at(text: &str, x_offset: f32, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    let x = (screen_width() - dims.width) / 2.0 + x_offset;
    draw_text(text, x, y, size, color);
}

fn draw_right_text(text: &str, right: f32, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, right - dims.width, y, size, color);
}
