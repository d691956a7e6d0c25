//! Per-frame draw orchestration.

use crate::{
    error::InitError,
    gfx::{
        camera::{derive_projection_matrix, derive_view_matrix, ViewState},
        context::{
            GraphicsContext, UniformLocation, UNIFORM_MODEL, UNIFORM_PROJECTION, UNIFORM_VIEW,
        },
    },
};

use super::scene::Scene;

/// Replays a [`Scene`] against a [`GraphicsContext`] every frame.
///
/// Construction resolves the three matrix uniforms and configures the
/// context once; drawing afterwards cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct SceneRenderer {
    model: UniformLocation,
    view: UniformLocation,
    projection: UniformLocation,
}

impl SceneRenderer {
    /// # Errors
    /// [`InitError::UniformLocationMissing`] if the shading program lacks the
    /// model, view or projection matrix.
    pub fn new<C: GraphicsContext + ?Sized>(
        ctx: &mut C,
        clear_color: [f32; 4],
    ) -> Result<Self, InitError> {
        let locate = |name: &str| {
            ctx.uniform_location(name)
                .ok_or_else(|| InitError::UniformLocationMissing(name.to_string()))
        };
        let model = locate(UNIFORM_MODEL)?;
        let view = locate(UNIFORM_VIEW)?;
        let projection = locate(UNIFORM_PROJECTION)?;

        ctx.set_clear_color(clear_color);
        ctx.enable_depth_test();

        Ok(Self {
            model,
            view,
            projection,
        })
    }

    /// Records one frame without presenting it: view and projection first,
    /// then a clear, then every instance in declared order.
    pub fn record_frame<C: GraphicsContext + ?Sized>(
        &self,
        ctx: &mut C,
        scene: &Scene,
        state: &ViewState,
    ) {
        ctx.set_uniform_matrix(self.view, &derive_view_matrix(&state.camera));
        ctx.set_uniform_matrix(self.projection, &derive_projection_matrix(&state.projection));

        ctx.clear();

        for (instance, geometry) in scene.iter() {
            ctx.set_uniform_matrix(self.model, &instance.recipe.compose());
            geometry.bind(ctx);
            ctx.draw(instance.draw_mode, geometry.count());
        }
    }

    /// Records and presents one frame.
    pub fn render_frame<C: GraphicsContext + ?Sized>(
        &self,
        ctx: &mut C,
        scene: &Scene,
        state: &ViewState,
    ) {
        self.record_frame(ctx, scene, state);
        ctx.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        camera::ControlSurface,
        context::{BufferHandle, DrawMode, ATTRIB_COLOR, ATTRIB_POSITION},
        geometry::Shape,
        recording::{Command, RecordingContext},
        scene::{figure, SceneDescription},
        transform::Recipe,
    };

    const CLEAR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    fn small_scene(ctx: &mut RecordingContext) -> Scene {
        let mut desc = SceneDescription::new();
        let ground = desc.add_mesh("ground", Shape::Plane, [0.0, 0.3, 0.0]);
        let ball = desc.add_mesh("ball", Shape::Sphere, [0.0, 0.0, 1.0]);
        desc.add_instance("ground", ground, Recipe::new().translate(0.0, 0.0, 8.0));
        desc.add_instance(
            "ball",
            ball,
            Recipe::new().translate(0.0, 1.0, 8.25).scale(0.5, 0.5, 0.5),
        );
        desc.upload(ctx).unwrap()
    }

    #[test]
    fn test_new_configures_context() {
        let mut ctx = RecordingContext::new();
        SceneRenderer::new(&mut ctx, CLEAR).unwrap();
        assert_eq!(
            ctx.commands,
            vec![Command::SetClearColor(CLEAR), Command::EnableDepthTest]
        );
    }

    #[test]
    fn test_missing_uniform_fails_initialization() {
        let mut ctx = RecordingContext::new().without_uniform(UNIFORM_VIEW);
        let err = SceneRenderer::new(&mut ctx, CLEAR).unwrap_err();
        assert!(matches!(err, InitError::UniformLocationMissing(ref name) if name == "view"));
        assert!(ctx.commands.is_empty());
    }

    #[test]
    fn test_frame_command_order() {
        let mut ctx = RecordingContext::new();
        let scene = small_scene(&mut ctx);
        let renderer = SceneRenderer::new(&mut ctx, CLEAR).unwrap();
        ctx.take_commands();

        let state = ViewState::default();
        renderer.render_frame(&mut ctx, &scene, &state);
        let frame = ctx.take_commands();

        let view = ctx.uniform_location(UNIFORM_VIEW).unwrap();
        let projection = ctx.uniform_location(UNIFORM_PROJECTION).unwrap();
        let model = ctx.uniform_location(UNIFORM_MODEL).unwrap();
        let ground = &scene.instances()[0];
        let ball = &scene.instances()[1];

        assert_eq!(
            frame,
            vec![
                Command::SetUniform {
                    location: view,
                    matrix: derive_view_matrix(&state.camera).into()
                },
                Command::SetUniform {
                    location: projection,
                    matrix: derive_projection_matrix(&state.projection).into()
                },
                Command::Clear,
                Command::SetUniform {
                    location: model,
                    matrix: ground.recipe.compose().into()
                },
                Command::BindVertexBuffer {
                    slot: ATTRIB_POSITION,
                    buffer: BufferHandle(0)
                },
                Command::BindVertexBuffer {
                    slot: ATTRIB_COLOR,
                    buffer: BufferHandle(1)
                },
                Command::Draw {
                    mode: DrawMode::Strip,
                    count: 4
                },
                Command::SetUniform {
                    location: model,
                    matrix: ball.recipe.compose().into()
                },
                Command::BindVertexBuffer {
                    slot: ATTRIB_POSITION,
                    buffer: BufferHandle(2)
                },
                Command::BindVertexBuffer {
                    slot: ATTRIB_COLOR,
                    buffer: BufferHandle(3)
                },
                Command::BindIndexBuffer(BufferHandle(4)),
                Command::Draw {
                    mode: DrawMode::ListIndexed,
                    count: 2400
                },
                Command::Present,
            ]
        );
    }

    #[test]
    fn test_frames_are_deterministic() {
        let mut ctx = RecordingContext::new();
        let scene = figure().upload(&mut ctx).unwrap();
        let renderer = SceneRenderer::new(&mut ctx, CLEAR).unwrap();
        ctx.take_commands();

        let state = ViewState::default();
        renderer.render_frame(&mut ctx, &scene, &state);
        let first = ctx.take_commands();
        renderer.render_frame(&mut ctx, &scene, &state);
        let second = ctx.take_commands();

        assert_eq!(first, second);
    }

    #[test]
    fn test_frame_reflects_triggered_control() {
        let mut ctx = RecordingContext::new();
        let scene = small_scene(&mut ctx);
        let renderer = SceneRenderer::new(&mut ctx, CLEAR).unwrap();
        ctx.take_commands();

        let mut state = ViewState::default();
        renderer.render_frame(&mut ctx, &scene, &state);
        let before = ctx.take_commands();

        ControlSurface::default().trigger("fov-", &mut state);
        renderer.render_frame(&mut ctx, &scene, &state);
        let after = ctx.take_commands();

        // only the projection upload differs
        assert_eq!(before.len(), after.len());
        let differing: Vec<usize> = (0..before.len())
            .filter(|&i| before[i] != after[i])
            .collect();
        assert_eq!(differing, vec![1]);
    }

    #[test]
    fn test_figure_draws_every_instance() {
        let mut ctx = RecordingContext::new();
        let scene = figure().upload(&mut ctx).unwrap();
        let renderer = SceneRenderer::new(&mut ctx, CLEAR).unwrap();
        ctx.take_commands();

        renderer.record_frame(&mut ctx, &scene, &ViewState::default());
        let frame = ctx.take_commands();

        let draws = frame
            .iter()
            .filter(|c| matches!(c, Command::Draw { .. }))
            .count();
        assert_eq!(draws, scene.instances().len());
        assert!(!frame.contains(&Command::Present));
    }
}
