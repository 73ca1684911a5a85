use hecs::World;

use crate::components::{Character, Floor, GravityAffected, Grounded, Position, GRAVITY};

/// Accelerate airborne bodies downward. Bodies resting on a floor keep their
/// vertical velocity so standing still stays still.
pub fn gravity_system(world: &mut World, dt: f32) {
    for (_entity, (character, grounded)) in world
        .query_mut::<(&mut Character, Option<&Grounded>)>()
        .with::<&GravityAffected>()
    {
        if grounded.is_none() {
            character.velocity.y += GRAVITY * dt;
        }
    }
}

/// Integrate positions, land bodies that crossed a floor on the way down and
/// rebuild the `Grounded` markers from this step's contacts.
pub fn move_and_slide_system(world: &mut World, dt: f32) {
    let floors: Vec<Floor> = world.query::<&Floor>().iter().map(|(_, f)| *f).collect();

    let mut landed = Vec::new();
    let mut airborne = Vec::new();

    for (entity, (position, character)) in world.query_mut::<(&mut Position, &mut Character)>() {
        let before = position.0;
        // Semi-implicit Euler: velocity was updated first, now position.
        position.0 += character.velocity * dt;

        // Highest floor under the body that it passed through (or sits on).
        let support = floors
            .iter()
            .filter(|f| f.spans(position.0.x) && before.y <= f.y && position.0.y >= f.y)
            .map(|f| f.y)
            .reduce(f32::min);

        match support {
            Some(y) if character.velocity.y >= 0.0 => {
                position.0.y = y;
                character.velocity.y = 0.0;
                landed.push(entity);
            }
            _ => airborne.push(entity),
        }
    }

    // insert_one replaces the marker if it already exists.
    for entity in landed {
        let _ = world.insert_one(entity, Grounded);
    }
    for entity in airborne {
        let _ = world.remove_one::<Grounded>(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn body(world: &mut World, y: f32, vy: f32) -> hecs::Entity {
        let mut character = Character::new();
        character.velocity = Vec2::new(0.0, vy);
        world.spawn((Position(Vec2::new(0.0, y)), character, GravityAffected))
    }

    #[test]
    fn falling_body_lands_on_floor() {
        let mut world = World::new();
        world.spawn((Floor::infinite(100.0),));
        let e = body(&mut world, 95.0, 600.0);

        move_and_slide_system(&mut world, 1.0 / 60.0);

        assert_eq!(world.get::<&Position>(e).unwrap().0.y, 100.0);
        assert_eq!(world.get::<&Character>(e).unwrap().velocity.y, 0.0);
        assert!(world.get::<&Grounded>(e).is_ok());
    }

    #[test]
    fn rising_body_leaves_floor() {
        let mut world = World::new();
        world.spawn((Floor::infinite(100.0),));
        let e = body(&mut world, 100.0, -650.0);
        world.insert_one(e, Grounded).unwrap();

        move_and_slide_system(&mut world, 1.0 / 60.0);

        assert!(world.get::<&Position>(e).unwrap().0.y < 100.0);
        assert!(world.get::<&Grounded>(e).is_err());
    }

    #[test]
    fn gravity_skips_grounded_bodies() {
        let mut world = World::new();
        let airborne = body(&mut world, 0.0, 0.0);
        let resting = body(&mut world, 0.0, 0.0);
        world.insert_one(resting, Grounded).unwrap();

        gravity_system(&mut world, 0.5);

        assert_eq!(world.get::<&Character>(airborne).unwrap().velocity.y, 490.0);
        assert_eq!(world.get::<&Character>(resting).unwrap().velocity.y, 0.0);
    }
}
