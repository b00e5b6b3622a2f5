//! Test position correction specifically

use crate::entity::Character;
use crate::math::Fixed;
use crate::state::GameState;
use crate::tilemap::{CollisionRect, Tilemap};
use alloc::vec;

#[test]
fn test_position_correction_directly() {
    // Floor at row 14 (y = 224)
    let mut tilemap_data = [[0u8; 16]; 15];
    for x in 0..16 {
        tilemap_data[14][x] = 1;
    }
    let tilemap = Tilemap::new(tilemap_data);

    let mut character = Character::new(0, 0);
    // bottom at 193+32=225, overlaps floor at 224
    character.core.pos = (Fixed::from_int(32), Fixed::from_int(193));
    character.core.size = (16, 32);

    let initial_rect = CollisionRect::from_entity(character.core.pos, character.core.size);
    assert!(
        tilemap.check_collision(initial_rect),
        "Character should initially be overlapping with floor"
    );

    let mut game_state =
        GameState::new(1, tilemap_data, vec![character], vec![], vec![], vec![], vec![]).unwrap();
    game_state.advance_frame().unwrap();

    let corrected = &game_state.characters[0];
    let corrected_rect = CollisionRect::from_entity(corrected.core.pos, corrected.core.size);
    assert!(
        !game_state.tile_map.check_collision(corrected_rect),
        "Character should no longer be overlapping after correction"
    );

    assert!(
        corrected.core.pos.1.to_int() < 193,
        "Character should have been pushed up from y=193"
    );
    assert_eq!(
        corrected.core.pos.1.to_int(),
        192,
        "Character should be positioned at y=192 to rest on floor"
    );
    assert!(corrected.core.collision.2, "bottom collision flag should be set");
}
