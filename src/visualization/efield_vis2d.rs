use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::render::texture::ImageSampler;
use bevy::window::WindowResolution;

use crate::field::sampler::FieldGrid;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

#[derive(Component)]
struct ParticleIndex(pub usize);

/// Heat-map buffer and the texture it is uploaded to each frame
#[derive(Resource)]
struct FieldMap {
    grid: FieldGrid,
    image: Handle<Image>,
}

const PARTICLE_RADIUS: f32 = 2.0;
const FIELD_TINT_ALPHA: f32 = 127.0 / 255.0;
const FIELD_Z: f32 = 1.0;

/// World box coordinates (y down, origin at a corner) to screen space
/// (y up, origin at the window center)
fn world_to_screen(p: NVec2, box_extent: f64) -> Vec2 {
    let half = box_extent / 2.0;
    Vec2::new((p.x - half) as f32, (half - p.y) as f32)
}

pub fn run_2d(scenario: Scenario) {
    let window = Window {
        title: scenario.display.title.clone(),
        resolution: WindowResolution::new(scenario.display.width as f32, scenario.display.height as f32),
        resizable: false,
        ..default()
    };

    App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_systems(Startup, (setup_particles_system, setup_field_system))
        .add_systems(
            Update,
            (
                physics_step_system,
                field_sample_system,
                sync_transforms_system,
                draw_box_system,
            )
                .chain(),
        )
        .run();
}

fn setup_particles_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    info!(
        "run_2d: starting viewer with {} particles, box {}, field grid {}x{}",
        scenario.system.len(),
        scenario.parameters.box_extent,
        scenario.parameters.grid_resolution,
        scenario.parameters.grid_resolution
    );

    commands.spawn(Camera2dBundle::default());

    let circle = Mesh2dHandle(meshes.add(Circle::new(PARTICLE_RADIUS)));
    let positive = materials.add(ColorMaterial::from(Color::srgb(1.0, 0.0, 0.0)));
    let negative = materials.add(ColorMaterial::from(Color::srgb(0.0, 0.0, 1.0)));

    for (i, p) in scenario.system.particles.iter().enumerate() {
        let pos = world_to_screen(p.x, scenario.parameters.box_extent);
        let material = if p.is_negative() { negative.clone() } else { positive.clone() };

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: circle.clone(),
                material,
                transform: Transform::from_xyz(pos.x, pos.y, 0.0),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn setup_field_system(mut commands: Commands, scenario: Res<Scenario>, mut images: ResMut<Assets<Image>>) {
    let resolution = scenario.parameters.grid_resolution;
    let extent = scenario.parameters.box_extent as f32;

    let mut image = Image::new_fill(
        Extent3d {
            width: resolution as u32,
            height: resolution as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[0, 0, 0, 0],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    image.sampler = ImageSampler::nearest();
    let image = images.add(image);

    // Stretched over the whole box, half transparent
    commands.spawn(SpriteBundle {
        texture: image.clone(),
        sprite: Sprite {
            color: Color::srgba(1.0, 1.0, 1.0, FIELD_TINT_ALPHA),
            custom_size: Some(Vec2::splat(extent)),
            ..default()
        },
        transform: Transform::from_xyz(0.0, 0.0, FIELD_Z),
        ..default()
    });

    commands.insert_resource(FieldMap {
        grid: FieldGrid::new(resolution),
        image,
    });
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    scenario.advance(time.delta_seconds_f64());
}

fn field_sample_system(scenario: Res<Scenario>, mut field: ResMut<FieldMap>, mut images: ResMut<Assets<Image>>) {
    let FieldMap { grid, image } = &mut *field;
    let params = &scenario.parameters;

    // Compute, then upload
    grid.sample(&scenario.system.particles, params.box_extent, params.field_scale);
    if let Some(texture) = images.get_mut(&*image) {
        texture.data.copy_from_slice(grid.as_bytes());
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&ParticleIndex, &mut Transform)>) {
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(p) = scenario.system.particles.get(*i) {
            let pos = world_to_screen(p.x, scenario.parameters.box_extent);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

fn draw_box_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let extent = scenario.parameters.box_extent as f32;
    gizmos.rect_2d(Vec2::ZERO, 0.0, Vec2::splat(extent), Color::BLACK);
}
