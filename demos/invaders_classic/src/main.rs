//! Space Invaders written flat against the engine: no scene graph, no
//! groups, no physics registry. Everything lives in one game struct and
//! one update function, the way a first prototype would.

mod assets;

use anyhow::Result;
use ember2d::{
    Aabb, DrawSurface, Engine, EngineContext, Game, InputState, KeyCode, Sprite, TextureHandle,
    Vec2,
};

const WIDTH: f32 = 640.0;
const HEIGHT: f32 = 480.0;

const ROWS: usize = 5;
const COLUMNS: usize = 11;
const COLUMN_PITCH: f32 = 30.0;
const ROW_PITCH: f32 = 30.0;

const MARCH_INTERVAL: f32 = 0.25;
const MARCH_STEP: f32 = 5.0;
const MARCH_DROP: f32 = 16.0;
const FORMATION_SPAN: f32 = COLUMN_PITCH * (COLUMNS as f32 - 1.0) + 24.0;

const LASER_SIZE: Vec2 = Vec2 { x: 3.0, y: 10.0 };
const LASER_SPEED: f32 = 5.0 / 0.03;
const LASER_PARKED: Vec2 = Vec2 { x: 0.0, y: -10.0 };
const LASER_COLOR: [f32; 4] = [0.286, 0.820, 0.102, 1.0];

const CANNON_SIZE: f32 = 32.0;
const CANNON_SPEED: f32 = 200.0;
const POINTS_PER_KILL: u32 = 20;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
    Eclipse,
    Crab,
    Squid,
}

impl Kind {
    fn for_row(row: usize) -> Self {
        match row {
            0 | 1 => Kind::Eclipse,
            2 | 3 => Kind::Crab,
            _ => Kind::Squid,
        }
    }

    fn size(self) -> Vec2 {
        match self {
            Kind::Squid => Vec2::new(16.0, 16.0),
            _ => Vec2::new(24.0, 16.0),
        }
    }
}

/// Bottom row is row 0; higher rows stack upward from the anchor.
fn invader_bounds(anchor: Vec2, row: usize, column: usize) -> Aabb {
    let kind = Kind::for_row(row);
    Aabb::from_parts(
        Vec2::new(
            anchor.x + COLUMN_PITCH * column as f32,
            anchor.y - ROW_PITCH * row as f32,
        ),
        kind.size(),
    )
}

/// Advances the anchor one step, flipping direction and dropping a row at
/// either playfield edge. Returns the new march direction.
fn step_march(anchor: &mut Vec2, direction: f32) -> f32 {
    anchor.x += MARCH_STEP * direction;
    if anchor.x <= 0.0 {
        anchor.y += MARCH_DROP;
        1.0
    } else if anchor.x + FORMATION_SPAN > WIDTH {
        anchor.y += MARCH_DROP;
        -1.0
    } else {
        direction
    }
}

struct Textures {
    eclipse: TextureHandle,
    crab: TextureHandle,
    squid: TextureHandle,
    cannon: TextureHandle,
}

struct ClassicGame {
    alive: [[bool; COLUMNS]; ROWS],
    anchor: Vec2,
    direction: f32,
    march_timer: f32,
    frame: u32,
    frame_timer: f32,
    laser: Vec2,
    laser_flying: bool,
    cannon_x: f32,
    score: u32,
    over: bool,
    textures: Option<Textures>,
}

impl ClassicGame {
    fn new() -> Self {
        Self {
            alive: [[true; COLUMNS]; ROWS],
            anchor: Vec2::new(50.0, 200.0),
            direction: -1.0,
            march_timer: 0.0,
            frame: 0,
            frame_timer: 0.0,
            laser: LASER_PARKED,
            laser_flying: false,
            cannon_x: WIDTH / 2.0,
            score: 0,
            over: false,
            textures: None,
        }
    }

    fn cannon_y(&self) -> f32 {
        HEIGHT - 50.0
    }

    fn live_count(&self) -> usize {
        self.alive
            .iter()
            .map(|row| row.iter().filter(|&&a| a).count())
            .sum()
    }

    fn park_laser(&mut self) {
        self.laser = LASER_PARKED;
        self.laser_flying = false;
    }

    fn step(&mut self, input: &InputState, dt: f32) {
        if self.over {
            return;
        }

        if input.is_key_down(KeyCode::ArrowLeft) {
            self.cannon_x = (self.cannon_x - CANNON_SPEED * dt).max(0.0);
        } else if input.is_key_down(KeyCode::ArrowRight) {
            self.cannon_x = (self.cannon_x + CANNON_SPEED * dt).min(WIDTH - CANNON_SIZE);
        }
        if input.is_key_down(KeyCode::Space) && !self.laser_flying {
            self.laser = Vec2::new(self.cannon_x + CANNON_SIZE / 2.0, self.cannon_y());
            self.laser_flying = true;
        }

        if self.laser_flying {
            self.laser.y -= LASER_SPEED * dt;
            if self.laser.y < LASER_SIZE.y {
                self.park_laser();
            }
        }

        self.march_timer += dt;
        while self.march_timer >= MARCH_INTERVAL {
            self.march_timer -= MARCH_INTERVAL;
            self.direction = step_march(&mut self.anchor, self.direction);
        }

        self.frame_timer += dt;
        while self.frame_timer >= MARCH_INTERVAL {
            self.frame_timer -= MARCH_INTERVAL;
            self.frame ^= 1;
        }

        if self.laser_flying {
            'scan: for row in 0..ROWS {
                for column in 0..COLUMNS {
                    if !self.alive[row][column] {
                        continue;
                    }
                    if invader_bounds(self.anchor, row, column).contains_point(self.laser) {
                        self.alive[row][column] = false;
                        self.score += POINTS_PER_KILL;
                        self.park_laser();
                        break 'scan;
                    }
                }
            }
        }

        let lowest_row = self.anchor.y + Kind::for_row(0).size().y;
        if self.live_count() == 0 || lowest_row >= self.cannon_y() {
            self.over = true;
        }
    }
}

impl Game for ClassicGame {
    fn init(&mut self, ctx: &mut EngineContext<'_>) -> Result<()> {
        self.textures = Some(Textures {
            eclipse: ctx.load_texture_from_bytes(assets::ECLIPSE_PNG)?,
            crab: ctx.load_texture_from_bytes(assets::CRAB_PNG)?,
            squid: ctx.load_texture_from_bytes(assets::SQUID_PNG)?,
            cannon: ctx.load_texture_from_bytes(assets::CANNON_PNG)?,
        });
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext<'_>) -> Result<()> {
        let dt = ctx.delta_seconds();
        self.step(ctx.input(), dt);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut EngineContext<'_>) -> Result<()> {
        let frame_row = self.frame;
        let renderer = ctx.renderer();
        let mut frame = renderer.begin_frame()?;
        {
            let mut surface = renderer.surface_frame(&mut frame);
            surface.clear([0.0, 0.0, 0.0, 1.0])?;

            if let Some(textures) = &self.textures {
                for row in 0..ROWS {
                    for column in 0..COLUMNS {
                        if !self.alive[row][column] {
                            continue;
                        }
                        let bounds = invader_bounds(self.anchor, row, column);
                        let texture = match Kind::for_row(row) {
                            Kind::Eclipse => textures.eclipse,
                            Kind::Crab => textures.crab,
                            Kind::Squid => textures.squid,
                        };
                        // Sheets stack two animation frames vertically.
                        let sprite = Sprite::new(texture, bounds.position, bounds.size)
                            .with_source([0.0, frame_row as f32 * 0.5, 1.0, 0.5]);
                        surface.draw_sprite(&sprite)?;
                    }
                }

                let cannon = Sprite::new(
                    textures.cannon,
                    Vec2::new(self.cannon_x, self.cannon_y()),
                    Vec2::new(CANNON_SIZE, CANNON_SIZE),
                );
                surface.draw_sprite(&cannon)?;
            }

            if self.laser_flying {
                surface.fill_rect(Aabb::from_parts(self.laser, LASER_SIZE), LASER_COLOR)?;
            }

            let score = format!("{}", self.score);
            surface.draw_text(
                &score,
                Vec2::new(WIDTH / 10.0, 8.0),
                6.0,
                [1.0, 1.0, 1.0, 1.0],
            )?;

            if self.over {
                let banner = "GAME OVER";
                let width = ember2d::render::measure_text(banner, 6.0);
                surface.draw_text(
                    banner,
                    Vec2::new((WIDTH - width) / 2.0, HEIGHT / 2.0),
                    6.0,
                    [1.0, 1.0, 1.0, 1.0],
                )?;
            }
        }
        renderer.end_frame(frame)?;
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    Engine::new()
        .with_title("Space Invaders Classic")
        .with_size(WIDTH as u32, HEIGHT as u32)
        .run(ClassicGame::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invader_rows_stack_upward_from_anchor() {
        let anchor = Vec2::new(50.0, 200.0);
        let bottom = invader_bounds(anchor, 0, 0);
        let top = invader_bounds(anchor, 4, 0);
        assert_eq!(bottom.position, Vec2::new(50.0, 200.0));
        assert_eq!(top.position, Vec2::new(50.0, 80.0));
        assert_eq!(top.size, Vec2::new(16.0, 16.0));
    }

    #[test]
    fn test_march_flips_and_drops_at_left_edge() {
        let mut anchor = Vec2::new(4.0, 100.0);
        let direction = step_march(&mut anchor, -1.0);
        assert_eq!(direction, 1.0);
        assert_eq!(anchor, Vec2::new(-1.0, 116.0));
    }

    #[test]
    fn test_march_flips_and_drops_at_right_edge() {
        let start_x = WIDTH - FORMATION_SPAN - 2.0;
        let mut anchor = Vec2::new(start_x, 100.0);
        let direction = step_march(&mut anchor, 1.0);
        assert_eq!(direction, -1.0);
        assert_eq!(anchor.y, 116.0);
    }

    #[test]
    fn test_hit_removes_invader_scores_and_parks_laser() {
        let mut game = ClassicGame::new();
        game.anchor = Vec2::new(50.0, 420.0);
        game.laser = Vec2::new(116.0, 430.0);
        game.laser_flying = true;

        game.step(&InputState::new(), 0.016);

        assert!(!game.alive[0][2]);
        assert_eq!(game.score, POINTS_PER_KILL);
        assert!(!game.laser_flying);
        assert_eq!(game.laser, LASER_PARKED);
    }

    #[test]
    fn test_cleared_board_ends_the_game() {
        let mut game = ClassicGame::new();
        game.alive = [[false; COLUMNS]; ROWS];
        game.step(&InputState::new(), 0.016);
        assert!(game.over);
    }
}
