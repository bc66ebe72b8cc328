use log::{debug, info};
use orrery_engine::{
    App, AppConfig, Capabilities, DrawStats, EngineContext, FrameClock, FrameData, FrameLayout,
    HostBufferRenderer, InputEvent, InputQueue, InputSampler, OrreryError, Parallax, Renderer,
    ResizeDebouncer, ResizeRequest, Result, SphereBuffer, TextureId, TextureManifest,
    TextureRegistry, UiEvent,
};
use orrery_engine::systems::render::build_sphere_buffer;
use orrery_engine::systems::spin::apply_spin;

/// Render loop state. `start` is the only transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

/// Generic app runner that wires up the render loop.
///
/// Each concrete app creates a `thread_local!` AppRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct AppRunner<A: App> {
    app: A,
    ctx: EngineContext,
    config: AppConfig,
    state: LoopState,
    clock: FrameClock,
    input: InputQueue,
    sampler: InputSampler,
    resize: ResizeDebouncer,
    /// Whether any viewport size has been applied yet.
    sized: bool,
    parallax: Parallax,
    spheres: SphereBuffer,
    renderer: Option<HostBufferRenderer>,
    frame: u64,
}

impl<A: App> AppRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let mut runner = Self {
            app,
            ctx: EngineContext::default(),
            config: AppConfig::default(),
            state: LoopState::Idle,
            clock: FrameClock::new(0.1),
            input: InputQueue::new(),
            sampler: InputSampler::new(0.0, 0.0),
            resize: ResizeDebouncer::new(0.0),
            sized: false,
            parallax: Parallax::new(0.0, 0.0),
            spheres: SphereBuffer::new(0),
            renderer: None,
            frame: 0,
        };
        runner.apply_config(config);
        runner
    }

    /// Rebuild everything that depends on the config. Queued input is kept.
    fn apply_config(&mut self, config: AppConfig) {
        self.ctx = EngineContext::new(&config);
        self.sampler = InputSampler::new(self.ctx.viewport.width, self.ctx.viewport.height);
        self.clock = FrameClock::new(config.max_frame_delta);
        self.resize = ResizeDebouncer::new(config.resize_debounce_secs);
        self.parallax = Parallax::new(config.parallax_rate, config.parallax_amplitude);
        self.spheres = SphereBuffer::new(config.max_instances);
        self.config = config;
    }

    /// Override config fields from JSON. Only allowed before `init`.
    pub fn configure(&mut self, json: &str) -> Result<()> {
        if self.state != LoopState::Idle {
            return Err(OrreryError::InvalidConfig("configure must be called before init".into()));
        }
        let config = self.config.merged(json)?;
        info!("config override applied");
        self.apply_config(config);
        Ok(())
    }

    /// Negotiate the rendering context, load textures, build the scene and
    /// start the loop. Any error leaves the runner idle.
    pub fn init(&mut self, caps: Capabilities) -> Result<()> {
        if self.state == LoopState::Running {
            return Ok(());
        }
        self.config.validate()?;
        let tier = caps.negotiate()?;

        // A failed earlier attempt may have left nodes behind
        self.ctx = EngineContext::new(&self.config);
        if let Some(json) = self.app.texture_manifest() {
            let manifest = TextureManifest::from_json(json)?;
            self.ctx.textures = TextureRegistry::from_manifest(&manifest);
            info!("texture manifest loaded: {} textures", self.ctx.textures.len());
        }

        self.app.init(&mut self.ctx)?;
        self.renderer = Some(HostBufferRenderer::new(FrameLayout::from_config(&self.config), tier));
        self.start();
        Ok(())
    }

    fn start(&mut self) {
        self.state = LoopState::Running;
        info!("render loop running ({} nodes)", self.ctx.scene.len());
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame at host time `now_ms`. A tick while idle does nothing.
    pub fn tick(&mut self, now_ms: f64) -> Option<DrawStats> {
        if self.state != LoopState::Running {
            return None;
        }
        let time = self.clock.tick(now_ms);

        for event in self.input.drain() {
            self.apply_input(event);
        }

        if let Some(req) = self.resize.advance(time.delta) {
            self.apply_resize(req);
        }

        self.app.update(&mut self.ctx, time, &self.sampler);

        self.ctx.camera.group_offset = self.parallax.step(self.sampler.cursor(), time.delta);
        apply_spin(&mut self.ctx.scene, time.elapsed);

        build_sphere_buffer(&self.ctx.scene, &self.ctx.textures, &mut self.spheres);
        let background = self
            .ctx
            .textures
            .background()
            .map(|id| (id, self.ctx.textures.is_ready(id)));
        let frame = FrameData {
            frame: self.frame,
            elapsed: time.elapsed,
            scroll: self.sampler.scroll(),
            viewport: self.ctx.viewport,
            camera: self.ctx.camera.uniform(),
            lighting: self.ctx.lights.uniform(),
            spheres: &self.spheres.instances,
            spheres_dropped: self.spheres.dropped,
            background,
            events: &self.ctx.events,
        };
        let stats = self.renderer.as_mut().map(|r| r.draw(&frame));

        self.ctx.clear_frame_data();
        self.sampler.end_frame();
        self.frame += 1;
        stats
    }

    fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.sampler.set_pointer(x, y),
            InputEvent::Scroll { y } => self.sampler.set_scroll(y),
            InputEvent::Resize { width, height, device_pixel_ratio } => {
                let req = ResizeRequest { width, height, device_pixel_ratio };
                if self.sized {
                    self.resize.request(req);
                } else {
                    // First size is applied at once so frame 0 has the right aspect
                    self.apply_resize(req);
                }
            }
            InputEvent::TextureLoaded { slot } => {
                if self.ctx.textures.mark_loaded(TextureId(slot)) {
                    debug!("texture slot {slot} ready");
                }
            }
            InputEvent::TextureFailed { slot } => {
                if self.ctx.textures.mark_failed(TextureId(slot)) {
                    self.ctx.emit_event(UiEvent::texture_fallback(slot));
                }
            }
        }
    }

    fn apply_resize(&mut self, req: ResizeRequest) {
        self.sized = true;
        self.ctx.resize(req.width, req.height, req.device_pixel_ratio);
        self.sampler.set_viewport(req.width, req.height);
        let (w, h) = self.ctx.viewport.buffer_size();
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(w, h);
        }
        debug!(
            "viewport {}x{} @ {} (aspect {:.3})",
            req.width,
            req.height,
            self.ctx.viewport.pixel_ratio(),
            self.ctx.camera.aspect
        );
    }

    // ---- Accessors for host reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.renderer.as_ref().map_or(std::ptr::null(), |r| r.as_ptr())
    }

    /// The last frame written, or an empty slice before init.
    pub fn frame_buffer(&self) -> &[f32] {
        match &self.renderer {
            Some(r) => r.as_slice(),
            None => &[],
        }
    }

    pub fn frame_len(&self) -> u32 {
        self.renderer.as_ref().map_or(0, |r| r.len() as u32)
    }

    pub fn frame_layout(&self) -> FrameLayout {
        FrameLayout::from_config(&self.config)
    }

    /// Slot list the host loader should fetch, as JSON.
    pub fn texture_manifest_json(&self) -> Result<String> {
        self.ctx.textures.to_host_json()
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn app(&self) -> &A {
        &self.app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use orrery_engine::bridge::protocol::{HEADER_EVENT_COUNT, HEADER_INSTANCE_COUNT};
    use orrery_engine::{CameraPose, FrameTime, Material, MeshComponent, Node};

    const MANIFEST: &str = r#"{
        "background": "stars",
        "textures": {
            "stars": { "path": "/textures/2k_stars.jpg" },
            "sun": { "path": "/textures/2k_sun.jpg", "fallback": [1.0, 0.8, 0.2] }
        }
    }"#;

    #[derive(Default)]
    struct Recorder {
        updates: u32,
        scroll_seen: Vec<f32>,
        /// Spheres spawned on top of the textured one.
        extra_spheres: u32,
        /// Fail `init` after the scene has been built.
        fail_init: bool,
    }

    impl App for Recorder {
        fn texture_manifest(&self) -> Option<&str> {
            Some(MANIFEST)
        }

        fn init(&mut self, ctx: &mut EngineContext) -> Result<()> {
            let material = ctx.textures.material("sun", Material::default().fallback);
            let id = ctx.scene.next_id();
            ctx.scene.spawn(Node::new(id).with_mesh(MeshComponent::sphere(1.0, material)).with_spin(2.0));
            for i in 0..self.extra_spheres {
                let id = ctx.scene.next_id();
                let at = Vec3::new(i as f32 * 3.0 + 3.0, 0.0, 0.0);
                ctx.scene.spawn(Node::new(id).with_position(at).with_mesh(MeshComponent::sphere(1.0, Material::default())));
            }
            ctx.camera.set_pose(CameraPose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO));
            if self.fail_init {
                return Err(OrreryError::InvalidConfig("scene rejected".into()));
            }
            Ok(())
        }

        fn update(&mut self, _ctx: &mut EngineContext, _time: FrameTime, input: &InputSampler) {
            self.updates += 1;
            if input.scroll_changed() {
                self.scroll_seen.push(input.scroll());
            }
        }
    }

    fn running() -> AppRunner<Recorder> {
        let mut runner = AppRunner::new(Recorder::default());
        runner.init(Capabilities::new(true, true)).unwrap();
        runner
    }

    #[test]
    fn idle_tick_is_a_no_op() {
        let mut runner = AppRunner::new(Recorder::default());
        assert_eq!(runner.state(), LoopState::Idle);
        assert!(runner.tick(16.0).is_none());
        assert_eq!(runner.app().updates, 0);
        assert!(runner.frame_ptr().is_null());
    }

    #[test]
    fn init_without_context_stays_idle() {
        let mut runner = AppRunner::new(Recorder::default());
        let err = runner.init(Capabilities::new(false, false)).unwrap_err();
        assert!(matches!(err, OrreryError::UnsupportedContext { .. }));
        assert_eq!(runner.state(), LoopState::Idle);
    }

    #[test]
    fn tick_draws_once_per_frame() {
        let mut runner = running();
        let stats = runner.tick(0.0).unwrap();
        assert_eq!(stats.spheres, 1);
        assert_eq!(runner.app().updates, 1);
        assert!(!runner.frame_ptr().is_null());
        assert_eq!(runner.frame_len() as usize, runner.frame_layout().buffer_total_floats);
    }

    #[test]
    fn scroll_is_applied_when_changed() {
        let mut runner = running();
        runner.push_input(InputEvent::Resize { width: 800.0, height: 600.0, device_pixel_ratio: 1.0 });
        runner.tick(0.0);
        runner.tick(16.0);
        runner.push_input(InputEvent::Scroll { y: 720.0 });
        runner.tick(32.0);
        let seen = &runner.app().scroll_seen;
        assert_eq!(seen.len(), 2, "first frame plus one scroll change");
        assert!((seen[1] - 1.2).abs() < 1e-6);
    }

    #[test]
    fn first_resize_is_immediate_then_debounced() {
        let mut runner = running();
        runner.push_input(InputEvent::Resize { width: 1000.0, height: 500.0, device_pixel_ratio: 3.0 });
        runner.tick(0.0);
        assert!((runner.context().camera.aspect - 2.0).abs() < 1e-6);
        assert_eq!(runner.context().viewport.pixel_ratio(), 2.0);

        runner.push_input(InputEvent::Resize { width: 500.0, height: 500.0, device_pixel_ratio: 1.0 });
        runner.tick(16.0);
        assert!((runner.context().camera.aspect - 2.0).abs() < 1e-6, "still debouncing");
        for i in 2..20 {
            runner.tick(16.0 * i as f64);
        }
        assert!((runner.context().camera.aspect - 1.0).abs() < 1e-6);
    }

    #[test]
    fn texture_failure_emits_one_fallback_event() {
        let mut runner = running();
        let sun = runner.context().textures.resolve("sun").unwrap();
        runner.push_input(InputEvent::TextureFailed { slot: sun.0 });
        runner.push_input(InputEvent::TextureFailed { slot: sun.0 });
        runner.tick(0.0);
        let header = runner.frame_buffer();
        assert_eq!(header[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(header[HEADER_INSTANCE_COUNT], 1.0);

        // Events are per-frame
        runner.tick(16.0);
        let header = runner.frame_buffer();
        assert_eq!(header[HEADER_EVENT_COUNT], 0.0);
    }

    #[test]
    fn spin_follows_elapsed_time() {
        let mut runner = running();
        runner.tick(1000.0);
        runner.tick(3000.0);
        let node = runner.context().scene.iter().next().unwrap();
        assert!((node.rotation.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn configure_after_init_is_rejected() {
        let mut runner = AppRunner::new(Recorder::default());
        runner.configure(r#"{ "max_instances": 4 }"#).unwrap();
        assert_eq!(runner.config().max_instances, 4);
        runner.init(Capabilities::new(false, true)).unwrap();
        assert!(runner.configure("{}").is_err());
        assert_eq!(runner.frame_layout().max_instances, 4);
    }

    #[test]
    fn host_manifest_lists_slots() {
        let runner = running();
        let json = runner.texture_manifest_json().unwrap();
        assert!(json.contains("2k_sun.jpg"));
        assert!(json.contains("\"background\":true"));
    }

    #[test]
    fn spheres_past_capacity_are_reported_as_dropped() {
        let mut runner = AppRunner::new(Recorder { extra_spheres: 2, ..Default::default() });
        runner.configure(r#"{ "max_instances": 1 }"#).unwrap();
        runner.init(Capabilities::new(true, true)).unwrap();
        let stats = runner.tick(0.0).unwrap();
        assert_eq!(stats.spheres, 1);
        assert_eq!(stats.dropped, 2);
        assert_eq!(runner.frame_buffer()[HEADER_INSTANCE_COUNT], 1.0);
    }

    #[test]
    fn failed_init_can_be_retried_without_duplicate_nodes() {
        let mut runner = AppRunner::new(Recorder { fail_init: true, ..Default::default() });
        assert!(runner.init(Capabilities::new(true, true)).is_err());
        assert_eq!(runner.state(), LoopState::Idle);
        assert!(runner.init(Capabilities::new(true, true)).is_err());
        assert_eq!(runner.context().scene.len(), 1);
    }
}
