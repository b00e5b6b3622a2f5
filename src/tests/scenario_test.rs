//! Concrete end-to-end scenarios: one behavior, one tilemap, a fixed frame
//! budget, an exact expected outcome. Each test is a single named situation
//! rather than a sweep, chosen to pin down a specific rule from the physics
//! kernel or behavior scheduler that a property test can't phrase cleanly.

use crate::constants::{operator_address, property_address};
use crate::entity::{ActionDefinition, Character, ConditionDefinition, StatusEffectDefinition};
use crate::math::Fixed;
use crate::state::GameState;
use alloc::vec;
use alloc::vec::Vec;

fn no_actions() -> Vec<ActionDefinition> {
    Vec::new()
}

fn no_conditions() -> Vec<ConditionDefinition> {
    Vec::new()
}

fn no_status_effects() -> Vec<StatusEffectDefinition> {
    Vec::new()
}

/// S1 — falls to floor then rests. 16x16 character starts at (128, 16),
/// gravity 0.5, floor tile row spans y in [208, 224). Within 60 frames the
/// bottom edge must settle flush on the floor and stay there.
#[test]
fn s1_falls_to_floor_then_rests() {
    let mut tilemap = [[0u8; 16]; 15];
    for x in 0..16 {
        tilemap[13][x] = 1; // row 13 spans y in [208, 224)
    }

    let mut character = Character::new(0, 0);
    character.core.pos = (Fixed::from_int(128), Fixed::from_int(16));
    character.core.size = (16, 16);

    let mut game_state = GameState::new_with_gravity(
        1,
        tilemap,
        Fixed::from_raw(16), // 0.5
        vec![character],
        no_actions(),
        no_conditions(),
        Vec::new(),
        no_status_effects(),
    )
    .unwrap();

    let mut landed = false;
    for _ in 0..60 {
        game_state.advance_frame().unwrap();
        if game_state.characters[0].core.collision.2 {
            landed = true;
            break;
        }
    }
    assert!(landed, "character never reached the floor within 60 frames");

    let resting_y = game_state.characters[0].core.pos.1;
    assert_eq!(
        resting_y.add(Fixed::from_int(16)).to_int(),
        208,
        "bottom edge must be flush with the floor"
    );
    assert_eq!(game_state.characters[0].core.vel.1, Fixed::ZERO);

    for _ in 0..100 {
        game_state.advance_frame().unwrap();
        assert_eq!(
            game_state.characters[0].core.pos.1, resting_y,
            "resting contact must hold position steady"
        );
        assert!(game_state.characters[0].core.collision.2);
    }
}

/// S2 — turn-around at a wall. A character running right at `move_speed=2`
/// reaches the right wall, flips direction, runs back left, reaches the
/// left wall, and flips again — at least two direction changes within the
/// 300-frame budget.
#[test]
fn s2_turn_around_at_wall() {
    let mut tilemap = [[0u8; 16]; 15];
    for y in 0..15 {
        tilemap[y][0] = 1; // left wall, x in [0, 16)
        tilemap[y][15] = 1; // right wall, x in [240, 256)
    }

    let mut character = Character::new(0, 0);
    character.core.pos = (Fixed::from_int(32), Fixed::from_int(192));
    character.core.size = (16, 16);
    character.core.dir.0 = 1; // facing right
    character.move_speed = Fixed::from_int(2);
    // A freshly-constructed EntityCore defaults every collision flag to
    // true (nothing has probed the tilemap yet); a character starting in
    // open space away from every wall must not read stale contact on its
    // very first frame, before `resolve_and_flag_collisions` ever runs.
    character.core.collision = (false, false, false, false);

    // IS_WALL_LEANING: true while touching either side wall.
    let is_wall_leaning = ConditionDefinition::new(
        Fixed::ONE,
        vec![
            operator_address::READ_PROP,
            0,
            property_address::CHARACTER_COLLISION_LEFT,
            operator_address::READ_PROP,
            1,
            property_address::CHARACTER_COLLISION_RIGHT,
            operator_address::OR,
            2,
            0,
            1,
            operator_address::EXIT_WITH_VAR,
            2,
        ],
    );
    let always = ConditionDefinition::new(Fixed::ONE, vec![operator_address::EXIT, 1]);

    // TURN_AROUND: flip facing and immediately re-derive velocity from the
    // new facing, so the same frame's physics step carries the character
    // away from the wall before the next frame re-evaluates this condition.
    let turn_around = ActionDefinition {
        energy_cost: 0,
        cooldown: 1,
        args: [0; 8],
        spawns: [0; 4],
        script: vec![
            operator_address::READ_PROP,
            0,
            property_address::ENTITY_DIR_HORIZONTAL,
            operator_address::NEGATE,
            0,
            operator_address::WRITE_PROP,
            property_address::ENTITY_DIR_HORIZONTAL,
            0,
            operator_address::READ_PROP,
            1,
            property_address::CHARACTER_MOVE_SPEED,
            operator_address::MUL,
            2,
            0,
            1,
            operator_address::WRITE_PROP,
            property_address::CHARACTER_VEL_X,
            2,
            operator_address::EXIT,
            0,
        ],
    };

    // RUN: velocity = facing * move_speed, every frame it's selected.
    let run = ActionDefinition {
        energy_cost: 0,
        cooldown: 0,
        args: [0; 8],
        spawns: [0; 4],
        script: vec![
            operator_address::READ_PROP,
            0,
            property_address::ENTITY_DIR_HORIZONTAL,
            operator_address::READ_PROP,
            1,
            property_address::CHARACTER_MOVE_SPEED,
            operator_address::MUL,
            2,
            0,
            1,
            operator_address::WRITE_PROP,
            property_address::CHARACTER_VEL_X,
            2,
            operator_address::EXIT,
            0,
        ],
    };

    character.behaviors = vec![(0, 0), (1, 1)]; // (IS_WALL_LEANING, TURN_AROUND), (ALWAYS, RUN)

    let mut game_state = GameState::new(
        1,
        tilemap,
        vec![character],
        vec![turn_around, run],
        vec![is_wall_leaning, always],
        Vec::new(),
        no_status_effects(),
    )
    .unwrap();

    let mut direction_changes = 0;
    let mut prev_dir = game_state.characters[0].core.dir.0;
    let mut touched_right = false;

    for _ in 0..300 {
        game_state.advance_frame().unwrap();
        let character = &game_state.characters[0];
        if character.core.dir.0 != prev_dir {
            direction_changes += 1;
            prev_dir = character.core.dir.0;
        }
        if character.core.collision.1 {
            touched_right = true;
        }
    }

    assert!(touched_right, "character never reached the right wall");
    assert!(
        direction_changes >= 2,
        "expected at least two direction changes within 300 frames, got {}",
        direction_changes
    );
}

/// S3 — position correction cap. A wall tile sits at x in [240, 256). An
/// 18px-class overlap exceeds `MAX_CORRECTION` (8px) and is left uncorrected
/// (x unchanged); a 6px overlap is corrected back out to x=224.
#[test]
fn s3_position_correction_cap() {
    let mut tilemap = [[0u8; 16]; 15];
    tilemap[6][15] = 1; // wall tile, x in [240,256), y in [96,112)

    let mut deep_overlap = Character::new(0, 0);
    deep_overlap.core.pos = (Fixed::from_int(242), Fixed::from_int(96));
    deep_overlap.core.size = (16, 16);

    let mut game_state = GameState::new(
        1,
        tilemap,
        vec![deep_overlap],
        no_actions(),
        no_conditions(),
        Vec::new(),
        no_status_effects(),
    )
    .unwrap();
    game_state.advance_frame().unwrap();
    assert_eq!(
        game_state.characters[0].core.pos.0,
        Fixed::from_int(242),
        "overlap beyond MAX_CORRECTION must be left uncorrected"
    );

    let mut shallow_overlap = Character::new(0, 0);
    shallow_overlap.core.pos = (Fixed::from_int(230), Fixed::from_int(96));
    shallow_overlap.core.size = (16, 16);

    let mut game_state = GameState::new(
        1,
        tilemap,
        vec![shallow_overlap],
        no_actions(),
        no_conditions(),
        Vec::new(),
        no_status_effects(),
    )
    .unwrap();
    game_state.advance_frame().unwrap();
    assert_eq!(
        game_state.characters[0].core.pos.0,
        Fixed::from_int(224),
        "overlap within MAX_CORRECTION must be pushed out flush with the wall face"
    );
}

/// S4 — inverted gravity. `direction.vertical = 0` applies gravity upward;
/// over 15 frames of constant 0.5 acceleration (ignoring collisions)
/// `velocity.y` reaches exactly -7.5 and `y` decreases every frame.
#[test]
fn s4_inverted_gravity_accelerates_upward() {
    let mut character = Character::new(0, 0);
    character.core.pos = (Fixed::from_int(64), Fixed::from_int(100));
    character.core.size = (16, 16);
    character.core.dir.1 = 0; // inverted gravity

    let mut game_state = GameState::new_with_gravity(
        1,
        [[0; 16]; 15],
        Fixed::from_raw(16), // 0.5
        vec![character],
        no_actions(),
        no_conditions(),
        Vec::new(),
        no_status_effects(),
    )
    .unwrap();

    let mut prev_y = game_state.characters[0].core.pos.1;
    for frame in 1..=15 {
        game_state.advance_frame().unwrap();
        let y = game_state.characters[0].core.pos.1;
        assert!(y.raw() < prev_y.raw(), "y must decrease every frame, failed at frame {}", frame);
        prev_y = y;
    }

    assert_eq!(
        game_state.characters[0].core.vel.1,
        Fixed::from_raw(-240), // -7.5
        "velocity.y must reach exactly -7.5 after 15 frames of constant 0.5 acceleration"
    );
}

/// S5 — energy cap. Passive regen never pushes energy past `energy_cap`,
/// and with no consumers it converges to exactly the cap.
#[test]
fn s5_energy_never_exceeds_cap() {
    let mut character = Character::new(0, 0);
    character.energy = 90;
    character.energy_cap = 100;
    character.energy_regen = 5;
    character.energy_regen_rate = 30;

    let mut game_state = GameState::new(
        1,
        [[0; 16]; 15],
        vec![character],
        no_actions(),
        no_conditions(),
        Vec::new(),
        no_status_effects(),
    )
    .unwrap();

    for _ in 0..200 {
        game_state.advance_frame().unwrap();
        assert!(game_state.characters[0].energy <= 100);
    }
    assert_eq!(game_state.characters[0].energy, 100);
}

/// S6 — a ONLY_ONCE condition that writes a sticky flag onto the character
/// (via `CHARACTER_ENERGY_CHARGE`, the only spare persistent byte reachable
/// from a condition script) and returns the flag's prior negation. A second
/// behavior always matches. The net effect: behavior A fires exactly once,
/// on the very first frame, and behavior B fires on every frame after.
#[test]
fn s6_only_once_condition_fires_first_frame_only() {
    let only_once = ConditionDefinition::new(
        Fixed::ONE,
        vec![
            operator_address::READ_CHARACTER_PROPERTY,
            0,
            0,
            property_address::CHARACTER_ENERGY_CHARGE,
            operator_address::ASSIGN_BYTE,
            1,
            1,
            operator_address::WRITE_CHARACTER_PROPERTY,
            0,
            property_address::CHARACTER_ENERGY_CHARGE,
            1,
            operator_address::NOT,
            2,
            0,
            operator_address::EXIT_WITH_VAR,
            2,
        ],
    );
    let always = ConditionDefinition::new(Fixed::ONE, vec![operator_address::EXIT, 1]);

    // Action A: marks vel.x = 1 so it's distinguishable from action B.
    let action_a = ActionDefinition {
        energy_cost: 0,
        cooldown: 0,
        args: [0; 8],
        spawns: [0; 4],
        script: vec![
            operator_address::ASSIGN_FIXED,
            0,
            1,
            0,
            operator_address::WRITE_PROP,
            property_address::CHARACTER_VEL_X,
            0,
            operator_address::EXIT,
            0,
        ],
    };
    // Action B: marks vel.x = 2.
    let action_b = ActionDefinition {
        energy_cost: 0,
        cooldown: 0,
        args: [0; 8],
        spawns: [0; 4],
        script: vec![
            operator_address::ASSIGN_FIXED,
            0,
            2,
            0,
            operator_address::WRITE_PROP,
            property_address::CHARACTER_VEL_X,
            0,
            operator_address::EXIT,
            0,
        ],
    };

    let mut character = Character::new(0, 0);
    character.behaviors = vec![(0, 0), (1, 1)]; // (ONLY_ONCE, A), (ALWAYS, B)

    let mut game_state = GameState::new(
        1,
        [[0; 16]; 15],
        vec![character],
        vec![action_a, action_b],
        vec![only_once, always],
        Vec::new(),
        no_status_effects(),
    )
    .unwrap();

    game_state.advance_frame().unwrap();
    assert_eq!(
        game_state.characters[0].core.vel.0,
        Fixed::from_int(1),
        "frame 1 must run action A"
    );

    for frame in 2..=20 {
        game_state.advance_frame().unwrap();
        assert_eq!(
            game_state.characters[0].core.vel.0,
            Fixed::from_int(2),
            "frame {} must run action B",
            frame
        );
    }
}
