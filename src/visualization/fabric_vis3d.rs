use bevy::prelude::*;
use bevy::math::primitives::Sphere;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

use crate::simulation::fabric::sample_fabric;
use crate::simulation::integrator::taylor_step;
use crate::simulation::scenario::Scenario;

/// Component tagging each sphere with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Component tagging the fabric line mesh
#[derive(Component)]
struct FabricGrid;

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 45.0;

/// Height of the camera above the lattice plane
const CAMERA_HEIGHT: f32 = 20.0;

/// Minimum visual radius so tiny bodies are still visible
const MIN_BODY_RADIUS: f32 = 0.05;

/// Entrypoint: run the Bevy 3D viewer over a built scenario
pub fn run_3d(scenario: Scenario) {
    println!("run_3d: starting Bevy 3D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(Update, (physics_step_3d, sync_transforms_3d, update_fabric_3d).chain())
        .run();
}

/// Startup system: spawn camera, light, the fabric grid, and one sphere per body
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    // 3D camera above the lattice plane, looking at the origin
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)), // pure black
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, CAMERA_HEIGHT, CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    // Basic point light
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, CAMERA_HEIGHT, CAMERA_DISTANCE),
        ..Default::default()
    });

    // Fabric: a line-list mesh whose positions are rewritten every frame
    let fabric_vertices = sample_fabric(&scenario.system, &scenario.constants);
    let fabric_mesh = Mesh::new(
        PrimitiveTopology::LineList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, fabric_vertices);

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(fabric_mesh),
            material: materials.add(StandardMaterial {
                base_color: Color::srgb(1.0, 1.0, 1.0), // white
                unlit: true,
                ..Default::default()
            }),
            ..Default::default()
        },
        FabricGrid,
    ));

    // Spawn one sphere per body, colored from the catalog
    for (i, b) in scenario.system.bodies.iter().enumerate() {
        let radius_screen = ((b.diameter / 2.0) as f32).max(MIN_BODY_RADIUS);
        let [cr, cg, cb, ca] = b.color;

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(radius_screen).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgba(cr, cg, cb, ca),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_xyz(
                    b.x.x as f32,
                    b.x.y as f32,
                    b.x.z as f32,
                ),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Per-frame physics: drain the step clock and integrate whole fixed steps
fn physics_step_3d(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        constants,
        forces,
        clock,
    } = &mut *scenario;

    let steps = clock.advance(time.delta_seconds_f64(), constants.dt);
    for _ in 0..steps {
        taylor_step(system, forces, constants);
    }
}

/// Copy body positions into sphere transforms
fn sync_transforms_3d(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation = Vec3::new(
                b.x.x as f32,
                b.x.y as f32,
                b.x.z as f32,
            );
        }
    }
}

/// Resample the fabric from the post-step body positions and rewrite the
/// line mesh's position attribute
fn update_fabric_3d(
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    query: Query<&Handle<Mesh>, With<FabricGrid>>,
) {
    for handle in &query {
        if let Some(mesh) = meshes.get_mut(handle) {
            let vertices = sample_fabric(&scenario.system, &scenario.constants);
            mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
        }
    }
}
