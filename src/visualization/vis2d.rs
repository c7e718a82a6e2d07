use bevy::app::AppExit;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::PrimaryWindow;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::simulation::interaction::{ButtonPulse, InputSnapshot};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::vec2::NVec2;

#[derive(Component)]
struct BallIndex(pub usize);

/// Spawn-color RNG, owned here and handed into the controller each frame.
#[derive(Resource)]
struct SpawnRng(SmallRng);

/// Input snapshot for the current frame, rebuilt before the physics step.
#[derive(Resource, Default)]
struct FrameInput(InputSnapshot);

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} balls",
        scenario.world.balls.len()
    );

    App::new()
        .insert_resource(scenario)
        .insert_resource(SpawnRng(SmallRng::from_entropy()))
        .init_resource::<FrameInput>()
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_camera_system)
        .add_systems(
            Update,
            (
                gather_input_system,
                physics_step_system,
                sync_balls_system,
                debug_overlay_system,
            )
                .chain(),
        )
        .run();
}

/// Simulation coordinates (top-left origin, y down, pixels) to Bevy
/// world coordinates (centered origin, y up).
fn to_render(p: NVec2, params: &Parameters) -> Vec2 {
    Vec2::new(
        (p.x - params.screen_width / 2.0) as f32,
        (params.screen_height / 2.0 - p.y) as f32,
    )
}

fn setup_camera_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn button_pulse(mouse: &ButtonInput<MouseButton>, button: MouseButton) -> ButtonPulse {
    ButtonPulse {
        down: mouse.just_pressed(button),
        held: mouse.pressed(button),
        up: mouse.just_released(button),
    }
}

fn gather_input_system(
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut input: ResMut<FrameInput>,
) {
    let snapshot = &mut input.0;

    // Window cursor coordinates are already the simulation's pixel
    // space; keep the last known position when the cursor leaves.
    if let Ok(window) = windows.get_single() {
        if let Some(pos) = window.cursor_position() {
            snapshot.pointer = NVec2::new(pos.x as f64, pos.y as f64);
        }
    }

    snapshot.left = button_pulse(&mouse, MouseButton::Left);
    snapshot.middle = button_pulse(&mouse, MouseButton::Middle);
    snapshot.right = button_pulse(&mouse, MouseButton::Right);
    snapshot.spawn = ButtonPulse {
        down: keys.just_pressed(KeyCode::Space),
        held: keys.pressed(KeyCode::Space),
        up: keys.just_released(KeyCode::Space),
    };
    snapshot.quit = keys.just_pressed(KeyCode::Escape);
}

fn physics_step_system(
    mut scenario: ResMut<Scenario>,
    input: Res<FrameInput>,
    time: Res<Time>,
    mut rng: ResMut<SpawnRng>,
    mut exit: EventWriter<AppExit>,
) {
    if input.0.quit {
        exit.send(AppExit);
        return;
    }

    let dt = time.delta_seconds() as f64;

    // Overruns are reported, never compensated: the step below still
    // advances by the full real dt in one go.
    let budget = 1.0 / scenario.parameters.fps;
    if dt > budget {
        warn!(
            "frame over budget: {:.1}ms elapsed, {:.1}ms target",
            dt * 1000.0,
            budget * 1000.0
        );
    }

    scenario.step(&input.0, dt, &mut rng.0);
}

/// Spawn mesh entities for balls created since last frame and copy
/// positions/radii into transforms. Meshes are unit circles scaled by
/// the radius, so a growing spawn is just a transform update.
fn sync_balls_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut spawned: Local<usize>,
    mut query: Query<(&BallIndex, &mut Transform)>,
) {
    let params = &scenario.parameters;

    for (i, ball) in scenario.world.balls.iter().enumerate().skip(*spawned) {
        let color = Color::rgba_u8(ball.color.r, ball.color.g, ball.color.b, ball.color.a);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(1.0))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_translation(to_render(ball.position, params).extend(0.0))
                    .with_scale(Vec3::splat(ball.radius as f32)),
                ..Default::default()
            },
            BallIndex(i),
        ));
    }
    *spawned = scenario.world.balls.len();

    for (BallIndex(i), mut transform) in &mut query {
        if let Some(ball) = scenario.world.balls.get(*i) {
            transform.translation = to_render(ball.position, params).extend(0.0);
            transform.scale = Vec3::splat(ball.radius as f32);
        }
    }
}

/// Per-ball force (magenta) and velocity (white) debug vectors, plus
/// the pick line while the right button is held on a picked ball.
fn debug_overlay_system(scenario: Res<Scenario>, input: Res<FrameInput>, mut gizmos: Gizmos) {
    let params = &scenario.parameters;

    for record in scenario.draw_records() {
        let center = to_render(record.center, params);
        gizmos.line_2d(
            center,
            to_render(record.force_end, params),
            Color::rgb(1.0, 0.0, 1.0),
        );
        gizmos.line_2d(center, to_render(record.velocity_end, params), Color::WHITE);
    }

    if let Some((from, to)) = scenario.pick_line(&input.0) {
        gizmos.line_2d(
            to_render(from, params),
            to_render(to, params),
            Color::rgb(0.5, 0.5, 1.0),
        );
    }
}
