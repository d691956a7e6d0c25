//! The composite figure: a blue, red-coated character with a yellow beak and
//! a hammer, standing on a green ground plane between two hedge rows.
//!
//! Every recipe is kept in the order it was authored. Most parts translate,
//! then scale, then rotate in place; the arms, cuffs and hands rotate first
//! so the tilt swings them around the world origin.

use crate::gfx::{geometry::Shape, transform::Recipe};

use super::scene::SceneDescription;

pub const SKY: [f32; 4] = [0.113, 0.870, 0.831, 1.0];

const GROUND: [f32; 3] = [0.0, 0.3, 0.0];
const GREEN: [f32; 3] = [0.0, 0.5, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const RED: [f32; 3] = [1.0, 0.0, 0.0];
const ORANGE: [f32; 3] = [1.0, 0.5, 0.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const WHITE: [f32; 3] = [0.99, 0.97, 0.97];
const BLACK: [f32; 3] = [0.0, 0.0, 0.0];
const BROWN: [f32; 3] = [0.5, 0.3, 0.1];

/// Hedge spheres per row.
const HEDGE_LENGTH: u32 = 15;

/// Builds the figure's meshes and its 73 instances.
pub fn figure() -> SceneDescription {
    let mut scene = SceneDescription::new();

    let ground = scene.add_mesh("ground", Shape::Plane, GROUND);
    let sphere_green = scene.add_mesh("sphere green", Shape::Sphere, GREEN);
    let sphere_blue = scene.add_mesh("sphere blue", Shape::Sphere, BLUE);
    let sphere_red = scene.add_mesh("sphere red", Shape::Sphere, RED);
    let sphere_orange = scene.add_mesh("sphere orange", Shape::Sphere, ORANGE);
    let sphere_yellow = scene.add_mesh("sphere yellow", Shape::Sphere, YELLOW);
    let sphere_white = scene.add_mesh("sphere white", Shape::Sphere, WHITE);
    let sphere_black = scene.add_mesh("sphere black", Shape::Sphere, BLACK);
    let cylinder_brown = scene.add_mesh("cylinder brown", Shape::Cylinder, BROWN);
    let cylinder_white = scene.add_mesh("cylinder white", Shape::Cylinder, WHITE);
    let triangle_yellow = scene.add_mesh("triangle yellow", Shape::Triangle, YELLOW);
    let triangle_red = scene.add_mesh("triangle red", Shape::Triangle, RED);
    let pyramid = scene.add_mesh("pyramid", Shape::Pyramid, YELLOW);

    scene.add_instance("ground", ground, Recipe::new().translate(0.0, 0.0, 8.0));

    // belt, yellow teeth pointing down
    for (name, x) in [
        ("belt yellow 1", 0.1),
        ("belt yellow 2", -0.1),
        ("belt yellow 3", -0.3),
    ] {
        scene.add_instance(
            name,
            triangle_yellow,
            Recipe::new()
                .translate(x, 1.2, 8.8)
                .scale(0.3, 0.3, 0.3)
                .rotate(180.0, 0.0, 0.0, 1.0),
        );
    }
    scene.add_instance(
        "belt yellow 4",
        triangle_yellow,
        Recipe::new()
            .translate(-0.5, 1.2, 8.8)
            .scale(0.3, 0.3, 0.3)
            .rotate(180.0, 0.0, 0.0, 1.0)
            .rotate(5.0, 0.0, 1.0, 0.0),
    );

    // star on both faces of the hammer head
    for (names, z) in [
        (["star front 1", "star front 2"], 8.9),
        (["star back 1", "star back 2"], 7.55),
    ] {
        scene.add_instance(
            names[0],
            triangle_yellow,
            Recipe::new().translate(-1.1, 1.8, z).scale(0.6, 0.6, 0.6),
        );
        scene.add_instance(
            names[1],
            triangle_yellow,
            Recipe::new()
                .translate(-1.175, 2.1, z)
                .scale(0.6, 0.6, 0.6)
                .rotate(60.0, 0.0, 0.0, 1.0),
        );
    }

    // belt, red teeth pointing up
    for (name, x) in [
        ("belt red 1", 0.5),
        ("belt red 2", 0.3),
        ("belt red 3", 0.1),
        ("belt red 4", -0.1),
    ] {
        scene.add_instance(
            name,
            triangle_red,
            Recipe::new()
                .translate(x, 1.05, 8.8)
                .scale(0.3, 0.3, 0.3)
                .rotate(0.0, 0.0, 0.0, 1.0),
        );
    }
    scene.add_instance(
        "belt red 5",
        triangle_red,
        Recipe::new()
            .translate(-0.3, 1.05, 8.8)
            .scale(0.15, 0.15, 0.15)
            .rotate(5.0, 0.0, 1.0, 0.0),
    );

    // hedges either side of the path
    for i in 1..=HEDGE_LENGTH {
        for x in [-2.0, 2.0] {
            scene.add_instance(
                "hedge",
                sphere_green,
                Recipe::new().translate(x, 0.5, i as f32).scale(0.25, 0.25, 0.25),
            );
        }
    }

    scene.add_instance(
        "body",
        sphere_blue,
        Recipe::new().translate(0.0, 1.0, 8.25).scale(0.5, 0.5, 0.5),
    );
    scene.add_instance(
        "head",
        sphere_blue,
        Recipe::new().translate(0.0, 1.65, 8.25).scale(0.25, 0.25, 0.25),
    );

    scene.add_instance(
        "hat",
        sphere_red,
        Recipe::new().translate(0.0, 1.9, 8.25).scale(0.2, 0.2, 0.2),
    );
    scene.add_instance(
        "coat",
        sphere_red,
        Recipe::new().translate(0.0, 0.95, 7.85).scale(0.65, 0.65, 0.4),
    );
    scene.add_instance(
        "right arm",
        sphere_red,
        Recipe::rotated(-15.0, 0.0, 0.0, 1.0)
            .translate(0.5, 1.25, 7.8)
            .scale(0.4, 0.15, 0.4),
    );
    scene.add_instance(
        "left arm",
        sphere_red,
        Recipe::rotated(15.0, 0.0, 0.0, 1.0)
            .translate(-0.6, 1.25, 7.8)
            .scale(0.4, 0.15, 0.4),
    );
    scene.add_instance(
        "hammer end front",
        sphere_red,
        Recipe::new().translate(-1.43, 1.9, 8.8).scale(0.25, 0.25, 0.0),
    );
    scene.add_instance(
        "hammer end back",
        sphere_red,
        Recipe::new().translate(-1.43, 1.9, 7.6).scale(0.25, 0.25, 0.0),
    );

    // mirrored along X, so the brim's winding flips; no culling makes that harmless
    scene.add_instance(
        "hat brim",
        sphere_yellow,
        Recipe::new().translate(0.0, 1.8, 8.25).scale(-0.3, 0.1, 0.3),
    );
    scene.add_instance(
        "hat badge",
        sphere_yellow,
        Recipe::new().translate(0.0, 1.9, 8.5).scale(0.05, 0.05, 0.05),
    );

    scene.add_instance(
        "right eye",
        sphere_white,
        Recipe::new().translate(0.1, 1.675, 8.45).scale(0.05, 0.1, 0.05),
    );
    scene.add_instance(
        "left eye",
        sphere_white,
        Recipe::new().translate(-0.1, 1.675, 8.45).scale(0.05, 0.1, 0.05),
    );
    scene.add_instance(
        "right glint",
        sphere_white,
        Recipe::new().translate(0.105, 1.685, 8.53).scale(0.015, 0.015, 0.015),
    );
    scene.add_instance(
        "left glint",
        sphere_white,
        Recipe::new().translate(-0.105, 1.685, 8.53).scale(0.015, 0.015, 0.015),
    );
    scene.add_instance(
        "coat lining",
        sphere_white,
        Recipe::new().translate(0.0, 0.95, 8.0).scale(0.6, 0.6, 0.4),
    );
    scene.add_instance(
        "right cuff",
        sphere_white,
        Recipe::rotated(-10.0, 0.0, 0.0, 1.0)
            .translate(0.95, 1.19, 7.9)
            .scale(0.3, 0.1, 0.3),
    );
    scene.add_instance(
        "left cuff",
        sphere_white,
        Recipe::rotated(10.0, 0.0, 0.0, 1.0)
            .translate(-1.0, 1.19, 7.9)
            .scale(0.3, 0.1, 0.3),
    );
    scene.add_instance(
        "hat pompom",
        sphere_white,
        Recipe::new().translate(0.0, 2.1, 8.15).scale(0.1, 0.1, 0.1),
    );

    scene.add_instance(
        "right pupil",
        sphere_black,
        Recipe::new().translate(0.105, 1.675, 8.49).scale(0.035, 0.075, 0.035),
    );
    scene.add_instance(
        "left pupil",
        sphere_black,
        Recipe::new().translate(-0.105, 1.675, 8.49).scale(0.035, 0.075, 0.035),
    );

    scene.add_instance(
        "right foot",
        sphere_orange,
        Recipe::new().translate(0.5, 0.5, 8.0).scale(0.3, 0.1, 0.3),
    );
    scene.add_instance(
        "left foot",
        sphere_orange,
        Recipe::new().translate(-0.5, 0.5, 8.0).scale(0.3, 0.1, 0.3),
    );
    scene.add_instance(
        "right hand",
        sphere_orange,
        Recipe::new()
            .set_identity()
            .rotate(-5.5, 0.0, 0.0, 1.0)
            .translate(1.22, 1.1, 8.0)
            .scale(0.3, 0.1, 0.3),
    );
    scene.add_instance(
        "left hand",
        sphere_orange,
        Recipe::new()
            .set_identity()
            .rotate(5.0, 0.0, 0.0, 1.0)
            .translate(-1.33, 1.1, 8.0)
            .scale(0.3, 0.1, 0.3),
    );

    scene.add_instance(
        "hammer handle",
        cylinder_brown,
        Recipe::new()
            .translate(-1.4, 1.2, 8.2)
            .rotate(0.0, 0.0, 0.0, 1.0)
            .scale(0.3, 1.5, 0.3),
    );
    scene.add_instance(
        "hammer head",
        cylinder_brown,
        Recipe::new()
            .translate(-1.45, 1.9, 8.2)
            .rotate(90.0, 1.0, 0.0, 0.0)
            .scale(0.55, 1.05, 0.55),
    );
    for (name, z) in [("hammer ring front", 8.55), ("hammer ring back", 7.8)] {
        scene.add_instance(
            name,
            cylinder_white,
            Recipe::new()
                .translate(-1.45, 1.9, z)
                .rotate(90.0, 1.0, 0.0, 0.0)
                .scale(0.5, 0.4, 0.5),
        );
    }

    scene.add_instance(
        "beak",
        pyramid,
        Recipe::new()
            .translate(0.0, 1.55, 8.4)
            .scale(0.25, 0.1, 0.25)
            .rotate(90.0, 1.0, 0.0, 0.0),
    );

    scene
}
