use std::any::Any;

use anyhow::Result;
use ember2d::{
    Behavior, Command, DrawSurface, GroupDrive, Member, ObjectState, Sprite, TextureHandle,
    TickContext, Vec2,
};

pub const INVADERS_PER_ROW: usize = 11;
pub const FORMATION_ROWS: usize = 5;
pub const COLUMN_PITCH: f32 = 30.0;
pub const ROW_PITCH: f32 = 30.0;

/// The formation steps every quarter second.
pub const MARCH_INTERVAL: f32 = 0.25;
pub const MARCH_STEP: f32 = 5.0;
pub const MARCH_DROP: f32 = 16.0;

/// Sprite sheets flip frames every quarter second.
pub const ANIMATION_INTERVAL: f32 = 0.25;

pub const LASER_WIDTH: f32 = 3.0;
pub const LASER_LENGTH: f32 = 10.0;
/// 5 px every 30 ms in the old interval timer.
pub const LASER_SPEED: f32 = 5.0 / 0.03;
pub const LASER_COLOR: [f32; 4] = [0.286, 0.820, 0.102, 1.0];

pub const CANNON_SIZE: f32 = 32.0;
pub const CANNON_SPEED: f32 = 200.0;

pub const POINTS_PER_KILL: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvaderKind {
    Eclipse,
    Crab,
    Squid,
}

impl InvaderKind {
    /// Rows count from the bottom of the formation: two rows of eclipses,
    /// two of crabs, squids on top.
    pub fn for_row(row: usize) -> Self {
        match row {
            0 | 1 => InvaderKind::Eclipse,
            2 | 3 => InvaderKind::Crab,
            _ => InvaderKind::Squid,
        }
    }

    pub fn size(self) -> Vec2 {
        match self {
            InvaderKind::Eclipse | InvaderKind::Crab => Vec2::new(24.0, 16.0),
            InvaderKind::Squid => Vec2::new(16.0, 16.0),
        }
    }
}

/// A formation member: derives its position from the group anchor and
/// flips between the two frames of its sheet.
pub struct Invader {
    kind: InvaderKind,
    texture: Option<TextureHandle>,
    frame: usize,
    frame_timer: f32,
}

impl Invader {
    pub fn new(kind: InvaderKind) -> Self {
        Self {
            kind,
            texture: None,
            frame: 0,
            frame_timer: 0.0,
        }
    }

    pub fn kind(&self) -> InvaderKind {
        self.kind
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn set_texture(&mut self, texture: TextureHandle) {
        self.texture = Some(texture);
    }
}

impl Behavior for Invader {
    fn update(&mut self, state: &mut ObjectState, ctx: &TickContext<'_>) {
        if let Some(anchor) = ctx.anchor {
            state.bounds.position = Vec2::new(
                anchor.position.x + COLUMN_PITCH * anchor.column as f32,
                anchor.position.y - ROW_PITCH * anchor.row as f32,
            );
        }

        self.frame_timer += ctx.dt;
        while self.frame_timer >= ANIMATION_INTERVAL {
            self.frame_timer -= ANIMATION_INTERVAL;
            self.frame ^= 1;
        }
    }

    fn render(&self, state: &ObjectState, surface: &mut dyn DrawSurface) -> Result<()> {
        match self.texture {
            Some(texture) => {
                // Two frames stacked vertically in the sheet.
                let source = [0.0, self.frame as f32 * 0.5, 1.0, 0.5];
                surface.draw_sprite(
                    &Sprite::new(texture, state.bounds.position, state.bounds.size)
                        .with_source(source),
                )
            }
            None => surface.fill_rect(state.bounds, [1.0, 1.0, 1.0, 1.0]),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Marches the formation anchor: a step sideways every interval, dropping
/// a row and reversing at the playfield edges. The formation span is
/// measured once at construction.
pub struct FormationDrive {
    timer: f32,
    direction: f32,
    span: f32,
}

impl FormationDrive {
    pub fn new(columns: usize) -> Self {
        Self {
            timer: 0.0,
            // The march starts leftwards.
            direction: -1.0,
            span: COLUMN_PITCH * (columns - 1) as f32 + 24.0,
        }
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }
}

impl GroupDrive for FormationDrive {
    fn update(&mut self, anchor: &mut Vec2, _members: &[Option<Member>], ctx: &TickContext<'_>) {
        self.timer += ctx.dt;
        while self.timer >= MARCH_INTERVAL {
            self.timer -= MARCH_INTERVAL;
            anchor.x += MARCH_STEP * self.direction;

            if self.direction < 0.0 && anchor.x <= 0.0 {
                self.direction = 1.0;
                anchor.y += MARCH_DROP;
            } else if self.direction > 0.0 && anchor.x + self.span > ctx.playfield.x {
                self.direction = -1.0;
                anchor.y += MARCH_DROP;
            }
        }
    }
}

/// The cannon's one projectile. Parked above the top edge until launched;
/// flies straight up until a collision or wall event parks it again.
pub struct Laser {
    in_flight: bool,
}

impl Laser {
    pub fn new() -> Self {
        Self { in_flight: false }
    }

    pub fn parked_position() -> Vec2 {
        Vec2::new(0.0, -LASER_LENGTH)
    }

    pub fn is_ready(&self) -> bool {
        !self.in_flight
    }

    pub fn launch(&mut self) {
        self.in_flight = true;
    }

    pub fn park(&mut self) {
        self.in_flight = false;
    }
}

impl Behavior for Laser {
    fn update(&mut self, state: &mut ObjectState, ctx: &TickContext<'_>) {
        if self.in_flight {
            state.bounds.position.y -= LASER_SPEED * ctx.dt;
        }
    }

    fn render(&self, state: &ObjectState, surface: &mut dyn DrawSurface) -> Result<()> {
        surface.fill_rect(state.bounds, LASER_COLOR)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The player. Moves on held left/right, raises a fire request the game
/// resolves against the laser after the scene update.
pub struct Cannon {
    texture: Option<TextureHandle>,
    wants_fire: bool,
}

impl Cannon {
    pub fn new() -> Self {
        Self {
            texture: None,
            wants_fire: false,
        }
    }

    pub fn set_texture(&mut self, texture: TextureHandle) {
        self.texture = Some(texture);
    }

    pub fn take_fire_request(&mut self) -> bool {
        std::mem::take(&mut self.wants_fire)
    }
}

impl Behavior for Cannon {
    fn update(&mut self, state: &mut ObjectState, ctx: &TickContext<'_>) {
        match state.command {
            Command::Left => {
                state.bounds.position.x =
                    (state.bounds.position.x - CANNON_SPEED * ctx.dt).max(0.0);
            }
            Command::Right => {
                let limit = ctx.playfield.x - state.bounds.size.x;
                state.bounds.position.x =
                    (state.bounds.position.x + CANNON_SPEED * ctx.dt).min(limit);
            }
            Command::Fire => {
                self.wants_fire = true;
            }
            Command::None => {}
        }
    }

    fn render(&self, state: &ObjectState, surface: &mut dyn DrawSurface) -> Result<()> {
        match self.texture {
            Some(texture) => surface.draw_sprite(&Sprite::new(
                texture,
                state.bounds.position,
                state.bounds.size,
            )),
            None => surface.fill_rect(state.bounds, [1.0, 1.0, 1.0, 1.0]),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Kill tally, drawn in the top-left tenth of the surface.
pub struct ScoreBoard {
    score: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self { score: 0 }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add(&mut self, points: u32) {
        self.score += points;
    }
}

impl Behavior for ScoreBoard {
    fn update(&mut self, _state: &mut ObjectState, _ctx: &TickContext<'_>) {}

    fn render(&self, _state: &ObjectState, surface: &mut dyn DrawSurface) -> Result<()> {
        let position = Vec2::new(surface.size().x / 10.0, 8.0);
        surface.draw_text(&self.score.to_string(), position, 6.0, [1.0, 1.0, 1.0, 1.0])
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember2d::{Aabb, GameObject, Group, InputState};

    const PLAYFIELD: Vec2 = Vec2 { x: 640.0, y: 480.0 };

    fn ctx(input: &InputState, dt: f32) -> TickContext<'_> {
        TickContext::new(input, dt, PLAYFIELD)
    }

    #[test]
    fn test_kind_per_row() {
        assert_eq!(InvaderKind::for_row(0), InvaderKind::Eclipse);
        assert_eq!(InvaderKind::for_row(1), InvaderKind::Eclipse);
        assert_eq!(InvaderKind::for_row(2), InvaderKind::Crab);
        assert_eq!(InvaderKind::for_row(3), InvaderKind::Crab);
        assert_eq!(InvaderKind::for_row(4), InvaderKind::Squid);
    }

    #[test]
    fn test_invader_follows_anchor() {
        let mut group = Group::new(Vec2::new(50.0, 200.0));
        let kind = InvaderKind::Eclipse;
        group.add_member(
            GameObject::new(Aabb::from_parts(Vec2::ZERO, kind.size()), Invader::new(kind)),
            1,
            2,
        );

        let input = InputState::new();
        group.update(&ctx(&input, 0.016));
        assert_eq!(
            group.member(0).map(|m| m.state.bounds.position),
            Some(Vec2::new(110.0, 170.0))
        );
    }

    #[test]
    fn test_animation_flips_every_interval() {
        let mut invader = Invader::new(InvaderKind::Crab);
        let mut state = ObjectState::new(Aabb::new(0.0, 0.0, 24.0, 16.0));
        let input = InputState::new();

        for _ in 0..15 {
            invader.update(&mut state, &ctx(&input, 0.016));
        }
        assert_eq!(invader.frame(), 0);
        invader.update(&mut state, &ctx(&input, 0.016));
        assert_eq!(invader.frame(), 1);
    }

    #[test]
    fn test_formation_marches_left_then_bounces() {
        let mut drive = FormationDrive::new(INVADERS_PER_ROW);
        let mut anchor = Vec2::new(10.0, 200.0);
        let input = InputState::new();

        // Two steps left: 10 -> 5 -> 0, then the bounce at the wall.
        drive.update(&mut anchor, &[], &ctx(&input, MARCH_INTERVAL));
        assert_eq!(anchor, Vec2::new(5.0, 200.0));
        drive.update(&mut anchor, &[], &ctx(&input, MARCH_INTERVAL));
        assert_eq!(anchor, Vec2::new(0.0, 216.0));
        assert_eq!(drive.direction(), 1.0);
        drive.update(&mut anchor, &[], &ctx(&input, MARCH_INTERVAL));
        assert_eq!(anchor, Vec2::new(5.0, 216.0));
    }

    #[test]
    fn test_formation_bounces_off_right_edge() {
        let mut drive = FormationDrive::new(INVADERS_PER_ROW);
        drive.direction = 1.0;
        // Span is 30 * 10 + 24 = 324; the step past 640 - 324 = 316 drops.
        let mut anchor = Vec2::new(314.0, 200.0);
        let input = InputState::new();

        drive.update(&mut anchor, &[], &ctx(&input, MARCH_INTERVAL));
        assert_eq!(anchor, Vec2::new(319.0, 216.0));
        assert_eq!(drive.direction(), -1.0);
    }

    #[test]
    fn test_laser_flies_only_after_launch() {
        let mut laser = Laser::new();
        let mut state = ObjectState::new(Aabb::from_parts(
            Laser::parked_position(),
            Vec2::new(LASER_WIDTH, LASER_LENGTH),
        ));
        let input = InputState::new();

        laser.update(&mut state, &ctx(&input, 0.1));
        assert_eq!(state.bounds.position, Laser::parked_position());
        assert!(laser.is_ready());

        laser.launch();
        state.bounds.position = Vec2::new(320.0, 430.0);
        laser.update(&mut state, &ctx(&input, 0.03));
        assert!((state.bounds.position.y - 425.0).abs() < 1e-3);
        assert!(!laser.is_ready());
    }

    #[test]
    fn test_cannon_moves_on_command_and_clamps() {
        let mut cannon = Cannon::new();
        let mut state = ObjectState::new(Aabb::new(5.0, 430.0, CANNON_SIZE, CANNON_SIZE));
        let input = InputState::new();

        state.command = Command::Left;
        cannon.update(&mut state, &ctx(&input, 0.1));
        assert_eq!(state.bounds.position.x, 0.0);

        state.command = Command::Right;
        state.bounds.position.x = 630.0;
        cannon.update(&mut state, &ctx(&input, 0.1));
        assert_eq!(state.bounds.position.x, PLAYFIELD.x - CANNON_SIZE);
    }

    #[test]
    fn test_cannon_fire_request_is_one_shot() {
        let mut cannon = Cannon::new();
        let mut state = ObjectState::new(Aabb::new(0.0, 0.0, CANNON_SIZE, CANNON_SIZE));
        let input = InputState::new();

        state.command = Command::Fire;
        cannon.update(&mut state, &ctx(&input, 0.016));
        assert!(cannon.take_fire_request());
        assert!(!cannon.take_fire_request());
    }
}
