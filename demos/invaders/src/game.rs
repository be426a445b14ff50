use anyhow::Result;
use ember2d::{
    Aabb, EngineContext, Game, GameObject, Group, GroupId, InputState, KeyboardController,
    ObjectHandle, Physics, PhysicsConfig, Scene, Vec2,
};

use crate::assets;
use crate::entities::{
    Cannon, FormationDrive, Invader, InvaderKind, Laser, ScoreBoard, CANNON_SIZE, COLUMN_PITCH,
    FORMATION_ROWS, INVADERS_PER_ROW, LASER_LENGTH, LASER_WIDTH, POINTS_PER_KILL, ROW_PITCH,
};

pub const PLAYFIELD_WIDTH: f32 = 640.0;
pub const PLAYFIELD_HEIGHT: f32 = 480.0;

const FORMATION_ORIGIN: Vec2 = Vec2 { x: 50.0, y: 200.0 };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// The framework-based game: one scene holding the cannon, the laser, the
/// score board, and the invader formation, with collision rules wired at
/// setup.
pub struct InvadersGame {
    scene: Scene,
    cannon: ObjectHandle,
    laser: ObjectHandle,
    score: ObjectHandle,
    formation: GroupId,
    phase: Phase,
}

impl InvadersGame {
    pub fn new() -> Self {
        let physics = Physics::new(PhysicsConfig::new(Vec2::new(
            PLAYFIELD_WIDTH,
            PLAYFIELD_HEIGHT,
        )));
        let mut scene = Scene::new(physics);

        let cannon = scene.add_object(
            GameObject::new(
                Aabb::new(
                    PLAYFIELD_WIDTH / 2.0,
                    PLAYFIELD_HEIGHT - 50.0,
                    CANNON_SIZE,
                    CANNON_SIZE,
                ),
                Cannon::new(),
            )
            .with_controller(KeyboardController::default()),
        );

        let laser = scene.add_object(GameObject::new(
            Aabb::from_parts(
                Laser::parked_position(),
                Vec2::new(LASER_WIDTH, LASER_LENGTH),
            ),
            Laser::new(),
        ));

        let score = scene.add_object(GameObject::new(Aabb::default(), ScoreBoard::new()));

        let mut formation =
            Group::new(FORMATION_ORIGIN).with_drive(FormationDrive::new(INVADERS_PER_ROW));
        for row in 0..FORMATION_ROWS {
            for column in 0..INVADERS_PER_ROW {
                let kind = InvaderKind::for_row(row);
                let position = Vec2::new(
                    FORMATION_ORIGIN.x + COLUMN_PITCH * column as f32,
                    FORMATION_ORIGIN.y - ROW_PITCH * row as f32,
                );
                formation.add_member(
                    GameObject::new(Aabb::from_parts(position, kind.size()), Invader::new(kind)),
                    row,
                    column,
                );
            }
        }
        let formation = scene.add_group(formation);

        // One pair rule per formation slot, plus the wall rule that parks
        // a laser leaving the playfield.
        scene.on_collide_group(laser, formation);
        scene.on_collide_walls(laser);

        Self {
            scene,
            cannon,
            laser,
            score,
            formation,
            phase: Phase::Playing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.scene
            .object(self.score)
            .and_then(|o| o.behavior::<ScoreBoard>())
            .map(|s| s.score())
            .unwrap_or(0)
    }

    /// One frame of game logic, renderer-free.
    pub fn tick(&mut self, input: &InputState, dt: f32) {
        if self.phase == Phase::GameOver {
            return;
        }

        self.scene.update(input, dt);

        // Collisions first: the parked laser sits outside the playfield and
        // keeps raising its wall event, which must not swallow a launch.
        for event in self.scene.drain_collisions() {
            match event.other {
                Some(invader) => {
                    self.scene.destroy(invader);
                    self.park_laser();
                    if let Some(score) = self
                        .scene
                        .object_mut(self.score)
                        .and_then(|o| o.behavior_mut::<ScoreBoard>())
                    {
                        score.add(POINTS_PER_KILL);
                    }
                }
                None => self.park_laser(),
            }
        }

        let fire_requested = self
            .scene
            .object_mut(self.cannon)
            .and_then(|o| o.behavior_mut::<Cannon>())
            .map(|c| c.take_fire_request())
            .unwrap_or(false);
        if fire_requested {
            self.try_fire();
        }

        if self.formation_cleared() || self.formation_reached_cannon() {
            log::info!("game over, final score {}", self.score());
            self.phase = Phase::GameOver;
        }
    }

    fn try_fire(&mut self) {
        let muzzle = self.scene.object(self.cannon).map(|c| {
            Vec2::new(
                c.state.bounds.position.x + CANNON_SIZE / 2.0,
                c.state.bounds.position.y,
            )
        });
        let Some(muzzle) = muzzle else { return };

        if let Some(laser) = self.scene.object_mut(self.laser) {
            let ready = laser.behavior::<Laser>().map(|l| l.is_ready()).unwrap_or(false);
            if ready {
                laser.state.bounds.position = muzzle;
                if let Some(behavior) = laser.behavior_mut::<Laser>() {
                    behavior.launch();
                }
            }
        }
    }

    fn park_laser(&mut self) {
        if let Some(laser) = self.scene.object_mut(self.laser) {
            laser.state.bounds.position = Laser::parked_position();
            if let Some(behavior) = laser.behavior_mut::<Laser>() {
                behavior.park();
            }
        }
    }

    fn formation_cleared(&self) -> bool {
        self.scene
            .group(self.formation)
            .map(|g| g.live_count() == 0)
            .unwrap_or(true)
    }

    fn formation_reached_cannon(&self) -> bool {
        let Some(cannon_top) = self
            .scene
            .object(self.cannon)
            .map(|c| c.state.bounds.position.y)
        else {
            return false;
        };
        self.scene
            .member_handles(self.formation)
            .iter()
            .any(|&handle| {
                self.scene
                    .object(handle)
                    .filter(|o| o.is_active())
                    .map(|o| o.state.bounds.bottom() >= cannon_top)
                    .unwrap_or(false)
            })
    }
}

impl Default for InvadersGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for InvadersGame {
    fn init(&mut self, ctx: &mut EngineContext<'_>) -> Result<()> {
        let eclipse = ctx.load_texture_from_bytes(assets::ECLIPSE_PNG)?;
        let crab = ctx.load_texture_from_bytes(assets::CRAB_PNG)?;
        let squid = ctx.load_texture_from_bytes(assets::SQUID_PNG)?;
        let cannon = ctx.load_texture_from_bytes(assets::CANNON_PNG)?;

        for handle in self.scene.member_handles(self.formation) {
            if let Some(invader) = self
                .scene
                .object_mut(handle)
                .and_then(|o| o.behavior_mut::<Invader>())
            {
                let texture = match invader.kind() {
                    InvaderKind::Eclipse => eclipse,
                    InvaderKind::Crab => crab,
                    InvaderKind::Squid => squid,
                };
                invader.set_texture(texture);
            }
        }
        if let Some(behavior) = self
            .scene
            .object_mut(self.cannon)
            .and_then(|o| o.behavior_mut::<Cannon>())
        {
            behavior.set_texture(cannon);
        }
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext<'_>) -> Result<()> {
        let dt = ctx.delta_seconds();
        self.tick(ctx.input(), dt);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut EngineContext<'_>) -> Result<()> {
        use ember2d::DrawSurface;

        let renderer = ctx.renderer();
        let mut frame = renderer.begin_frame()?;
        {
            let mut surface = renderer.surface_frame(&mut frame);
            self.scene.render(&mut surface)?;

            if self.phase == Phase::GameOver {
                let scale = 6.0;
                let banner = "GAME OVER";
                let width = ember2d::render::measure_text(banner, scale);
                let size = surface.size();
                surface.draw_text(
                    banner,
                    Vec2::new((size.x - width) / 2.0, size.y / 2.0),
                    scale,
                    [1.0, 1.0, 1.0, 1.0],
                )?;
            }
        }
        renderer.end_frame(frame)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember2d::KeyCode;

    fn advance(game: &mut InvadersGame, input: &InputState, frames: usize) {
        for _ in 0..frames {
            game.tick(input, 0.016);
        }
    }

    #[test]
    fn test_fire_launches_parked_laser_from_cannon() {
        let mut game = InvadersGame::new();
        let mut input = InputState::new();
        input.press(KeyCode::Space);
        game.tick(&input, 0.016);

        let laser = game.scene.object(game.laser).unwrap();
        assert!(!laser.behavior::<Laser>().unwrap().is_ready());
        let cannon = game.scene.object(game.cannon).unwrap();
        assert_eq!(
            laser.state.bounds.position.x,
            cannon.state.bounds.position.x + CANNON_SIZE / 2.0
        );
    }

    #[test]
    fn test_laser_hit_runs_exactly_one_cycle() {
        let mut game = InvadersGame::new();

        // Park the formation so that row 0, column 2 sits at 110..134 x
        // 420..436 and put the flying laser origin inside it.
        game.scene.group_mut(game.formation).unwrap().anchor = Vec2::new(50.0, 420.0);
        {
            let laser = game.scene.object_mut(game.laser).unwrap();
            laser.state.bounds.position = Vec2::new(116.0, 430.0);
            laser.behavior_mut::<Laser>().unwrap().launch();
        }

        let input = InputState::new();
        game.tick(&input, 0.016);

        assert_eq!(game.score(), POINTS_PER_KILL);
        let formation = game.scene.group(game.formation).unwrap();
        assert_eq!(
            formation.live_count(),
            FORMATION_ROWS * INVADERS_PER_ROW - 1
        );
        let laser = game.scene.object(game.laser).unwrap();
        assert!(laser.behavior::<Laser>().unwrap().is_ready());
        assert_eq!(laser.state.bounds.position, Laser::parked_position());

        // Nothing left to hit where the laser is parked: one cycle only.
        game.tick(&input, 0.016);
        assert_eq!(game.score(), POINTS_PER_KILL);
    }

    #[test]
    fn test_invaders_reaching_cannon_end_the_game() {
        let mut game = InvadersGame::new();
        game.scene.group_mut(game.formation).unwrap().anchor =
            Vec2::new(50.0, PLAYFIELD_HEIGHT - 40.0);

        let input = InputState::new();
        game.tick(&input, 0.016);
        assert_eq!(game.phase(), Phase::GameOver);

        // Game over freezes the scene.
        let before = game.score();
        advance(&mut game, &input, 5);
        assert_eq!(game.score(), before);
    }

    #[test]
    fn test_clearing_the_formation_ends_the_game() {
        let mut game = InvadersGame::new();
        for handle in game.scene.member_handles(game.formation) {
            game.scene.destroy(handle);
        }
        let input = InputState::new();
        game.tick(&input, 0.016);
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn test_formation_starts_at_origin_and_marches() {
        let mut game = InvadersGame::new();
        let input = InputState::new();

        // 16 frames at 16 ms crosses the quarter-second march interval.
        advance(&mut game, &input, 16);
        let anchor = game.scene.group(game.formation).unwrap().anchor;
        assert_eq!(anchor, Vec2::new(FORMATION_ORIGIN.x - 5.0, FORMATION_ORIGIN.y));
    }
}
