use wgpu::{
    util::{BufferInitDescriptor, DeviceExt},
    Adapter, BufferUsages, Color, CommandEncoderDescriptor, Device, FragmentState, LoadOp,
    MultisampleState, Operations, PipelineLayoutDescriptor, PrimitiveState, PrimitiveTopology,
    PushConstantRange, Queue, RenderPassColorAttachment, RenderPassDescriptor, RenderPipeline,
    RenderPipelineDescriptor, ShaderModuleDescriptor, ShaderSource, ShaderStages, Surface,
    SurfaceConfiguration, SurfaceError, VertexState,
};
pub use winit::dpi::PhysicalSize;

use crate::{geometry::Point, mesh::Vertex, picker::ColorPicker};

/// Share of the shorter window side covered by the wheel's diameter.
const WHEEL_FILL: f32 = 0.9;

/// Draws a [`ColorPicker`] into a window and feeds it pointer input.
///
/// The background is cleared to the committed colour; the wheel is drawn on
/// top while enabled.
pub struct Canvas {
    picker: ColorPicker,
    surface: Surface,
    _adapter: Adapter,
    queue: Queue,
    device: Device,
    colorwheel_pipeline: RenderPipeline,
    surface_config: SurfaceConfiguration,
    colorwheel_enabled: bool,
    pointer_down: bool,
}

impl Canvas {
    /// Tracks the pointer; releasing it over the wheel selects a colour.
    ///
    /// Returns whether the window needs a redraw.
    pub fn mouse_at(&mut self, down: bool, pos: [f32; 2]) -> bool {
        let point = Point::from(pos);
        let was_down = self.pointer_down;
        self.pointer_down = down;
        if !self.colorwheel_enabled {
            return false;
        }
        match (was_down, down) {
            (false, true) => {
                self.picker.touch_down(point);
                false
            }
            (true, true) => {
                self.picker.touch_move(point);
                false
            }
            (true, false) => self.picker.touch_up(point).is_some(),
            (false, false) => false,
        }
    }

    pub fn color_wheel_toggle(&mut self) {
        self.colorwheel_enabled = !self.colorwheel_enabled;
    }

    #[must_use]
    pub const fn is_color_wheel_enabled(&self) -> bool {
        self.colorwheel_enabled
    }

    pub fn shift_depth(&mut self, steps: isize) {
        self.picker.wheel_mut().shift_depth(steps);
    }

    fn create_colorwheel_pipeline(
        device: &Device,
        surface_config: &SurfaceConfiguration,
    ) -> RenderPipeline {
        let colorwheel_shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("color wheel shader"),
            source: ShaderSource::Wgsl(std::borrow::Cow::Borrowed(include_str!("colorwheel.wgsl"))),
        });
        let viewport = PushConstantRange {
            stages: ShaderStages::VERTEX,
            range: 0..std::mem::size_of::<[f32; 2]>() as u32,
        };
        let colorwheel_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("color wheel layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[viewport],
        });
        device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("color wheel pipeline"),
            layout: Some(&colorwheel_layout),
            vertex: VertexState {
                module: &colorwheel_shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
            },
            fragment: Some(FragmentState {
                module: &colorwheel_shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleList,
                ..PrimitiveState::default()
            },
            depth_stencil: None,
            multisample: MultisampleState::default(),
            multiview: None,
        })
    }

    /// # Panics
    /// If the surface reports no supported formats for `adapter`.
    pub fn new(
        window_size: PhysicalSize<u32>,
        surface: Surface,
        device: Device,
        adapter: Adapter,
        queue: Queue,
        picker: ColorPicker,
    ) -> Self {
        let capabilities = surface.get_capabilities(&adapter);
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: capabilities.formats[0],
            width: window_size.width.max(1),
            height: window_size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: capabilities.alpha_modes[0],
            view_formats: vec![],
        };
        surface.configure(&device, &surface_config);
        let colorwheel_pipeline = Self::create_colorwheel_pipeline(&device, &surface_config);
        let mut canvas = Self {
            picker,
            surface,
            _adapter: adapter,
            queue,
            device,
            colorwheel_pipeline,
            surface_config,
            colorwheel_enabled: true,
            pointer_down: false,
        };
        canvas.fit_wheel(window_size);
        canvas
    }

    pub fn redraw_canvas(&mut self) {
        let output_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                return;
            }
            Err(err) => {
                log::warn!("skipping frame: {err}");
                return;
            }
        };
        let mesh = self.picker.wheel().mesh();
        let vertex_buffer = self.device.create_buffer_init(&BufferInitDescriptor {
            label: Some("color wheel vertices"),
            contents: bytemuck::cast_slice(&mesh),
            usage: BufferUsages::VERTEX,
        });
        let viewport = [
            self.surface_config.width as f32,
            self.surface_config.height as f32,
        ];
        let selected = self.picker.color();
        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("color wheel encoder"),
            });
        {
            let view = output_texture
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());
            let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: None,
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(Color {
                            r: f64::from(selected.r),
                            g: f64::from(selected.g),
                            b: f64::from(selected.b),
                            a: 1.0,
                        }),
                        store: true,
                    },
                })],
                depth_stencil_attachment: None,
            });
            if self.colorwheel_enabled && !mesh.is_empty() {
                rpass.set_pipeline(&self.colorwheel_pipeline);
                rpass.set_push_constants(ShaderStages::VERTEX, 0, bytemuck::bytes_of(&viewport));
                rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
                rpass.draw(0..mesh.len() as u32, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        output_texture.present();
    }

    pub fn resize_window(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.surface_config.width = new_size.width;
        self.surface_config.height = new_size.height;
        self.surface.configure(&self.device, &self.surface_config);
        self.fit_wheel(new_size);
    }

    /// Centres the wheel in the window and scales it to fit.
    fn fit_wheel(&mut self, size: PhysicalSize<u32>) {
        let (width, height) = (size.width as f32, size.height as f32);
        let origin = Point::new(width / 2.0, height / 2.0);
        let radius = width.min(height) * WHEEL_FILL / 2.0;
        if let Err(err) = self.picker.wheel_mut().resize(origin, radius) {
            log::warn!("keeping previous wheel layout: {err}");
        }
    }
}
