use approx::assert_relative_eq;
use battletanks_core::common::constants::SHELL_SPEED;
use battletanks_core::common::controls::InputState;
use battletanks_core::common::direction::Direction;
use battletanks_core::common::entity::{DomainMask, EntityId, EntityKind};
use battletanks_core::common::obstacle::ObstacleKind;
use battletanks_core::common::scene::Scene;
use battletanks_core::utils::Vector2;
use test_log::test;

fn scene() -> Scene {
    Scene::default()
}

fn shell_velocity(scene: &Scene, id: EntityId) -> Vector2 {
    match &scene.get(id).expect("shell should be alive").kind {
        EntityKind::Shell(shell) => shell.velocity,
        other => panic!("expected a shell, got {other:?}"),
    }
}

#[test]
fn velocity_magnitude_is_shell_speed_for_every_facing() {
    let directions = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    for direction in directions {
        let mut scene = scene();
        let id = scene.fire_shell(Vector2::new(300.0, 300.0), direction, DomainMask::COMBAT);

        let velocity = shell_velocity(&scene, id);
        assert_relative_eq!(velocity.magnitude(), SHELL_SPEED);

        let expected = direction.unit().scale(SHELL_SPEED);
        assert_relative_eq!(velocity.x, expected.x);
        assert_relative_eq!(velocity.y, expected.y);
    }
}

#[test]
fn spawn_applies_muzzle_offset_and_rotation() {
    // default shell sprite is 8x16
    let muzzle = Vector2::new(100.0, 100.0);
    let cases = [
        (Direction::West, Vector2::new(88.0, 92.0), 90.0),
        (Direction::North, Vector2::new(96.0, 84.0), 0.0),
        (Direction::South, Vector2::new(96.0, 100.0), 180.0),
        (Direction::East, Vector2::new(100.0, 92.0), -90.0),
    ];

    for (direction, expected_pos, expected_rot) in cases {
        let mut scene = scene();
        let id = scene.fire_shell(muzzle, direction, DomainMask::COMBAT);
        let entity = scene.get(id).unwrap();
        assert_relative_eq!(entity.position.x, expected_pos.x);
        assert_relative_eq!(entity.position.y, expected_pos.y);
        assert_relative_eq!(entity.sprite.rotation_deg, expected_rot);
    }
}

#[test]
fn shell_is_removed_when_it_leaves_the_field() {
    // default field is 22x17 cells of 32 = 704x544
    let mut scene = scene();
    let id = scene.fire_shell(Vector2::new(700.0, 100.0), Direction::East, DomainMask::COMBAT);

    scene.update(&InputState::new(), 0.1);

    assert!(!scene.contains(id));
}

#[test]
fn shell_inside_the_field_keeps_flying() {
    let mut scene = scene();
    let id = scene.fire_shell(Vector2::new(300.0, 300.0), Direction::North, DomainMask::COMBAT);
    let before = scene.get(id).unwrap().position;

    scene.update(&InputState::new(), 0.1);

    let after = scene.get(id).expect("still in flight").position;
    assert_relative_eq!(after.y, before.y - SHELL_SPEED * 0.1);
    assert_relative_eq!(after.x, before.x);
}

#[test]
fn shell_destroys_brick_wall_and_itself() {
    let mut scene = scene();
    // brick wall at cell (3,3) covers screen rect (96,96)..(128,128)
    let wall = scene.spawn_obstacle(ObstacleKind::BrickWall, 3, 3, DomainMask::COMBAT);
    // spawns at (108,134), just below the wall, flying north
    let shell = scene.fire_shell(Vector2::new(112.0, 150.0), Direction::North, DomainMask::COMBAT);
    assert_eq!(scene.len(), 2);

    scene.update(&InputState::new(), 0.1);

    assert!(!scene.contains(wall));
    assert!(!scene.contains(shell));
    assert!(scene.is_empty());
}

#[test]
fn concrete_wall_stops_the_shell_and_survives() {
    let mut scene = scene();
    let wall = scene.spawn_obstacle(ObstacleKind::ConcreteWall, 3, 3, DomainMask::COMBAT);
    let shell = scene.fire_shell(Vector2::new(112.0, 150.0), Direction::North, DomainMask::COMBAT);

    scene.update(&InputState::new(), 0.1);

    assert!(scene.contains(wall));
    assert!(!scene.contains(shell));
}

#[test]
fn shell_flies_through_bush_and_water() {
    for kind in [ObstacleKind::Bush, ObstacleKind::Water] {
        let mut scene = scene();
        let obstacle = scene.spawn_obstacle(kind, 3, 3, DomainMask::COMBAT);
        let shell =
            scene.fire_shell(Vector2::new(112.0, 150.0), Direction::North, DomainMask::COMBAT);

        scene.update(&InputState::new(), 0.1);

        assert!(scene.contains(obstacle), "{kind:?} should survive");
        assert!(scene.contains(shell), "shell should pass over {kind:?}");
    }
}

#[test]
fn head_on_shells_destroy_each_other_in_one_frame() {
    let mut scene = scene();
    let a = scene.fire_shell(Vector2::new(100.0, 100.0), Direction::East, DomainMask::COMBAT);
    let b = scene.fire_shell(Vector2::new(120.0, 100.0), Direction::West, DomainMask::COMBAT);

    scene.update(&InputState::new(), 0.05);

    assert!(!scene.contains(a));
    assert!(!scene.contains(b));
}

#[test]
fn disjoint_domains_never_collide() {
    let mut scene = scene();
    let wall = scene.spawn_obstacle(ObstacleKind::BrickWall, 3, 3, DomainMask::new(0b10));
    let shell = scene.fire_shell(Vector2::new(112.0, 150.0), Direction::North, DomainMask::new(0b01));

    scene.update(&InputState::new(), 0.1);

    assert!(scene.contains(wall));
    assert!(scene.contains(shell));
}

#[test]
fn shell_passes_over_a_tank() {
    let mut scene = scene();
    let tank = scene.spawn_tank(Vector2::new(100.0, 100.0), true, DomainMask::COMBAT);
    let shell = scene.fire_shell(Vector2::new(116.0, 150.0), Direction::North, DomainMask::COMBAT);

    scene.update(&InputState::new(), 0.1);

    assert!(scene.contains(tank));
    assert!(scene.contains(shell));
}

#[test]
fn kill_is_idempotent() {
    let mut scene = scene();
    let id = scene.fire_shell(Vector2::new(300.0, 300.0), Direction::East, DomainMask::COMBAT);

    scene.kill(id);
    assert!(!scene.contains(id));
    // second removal of the same id is a no-op
    scene.kill(id);
    assert!(scene.is_empty());

    scene.update(&InputState::new(), 0.1);
}
