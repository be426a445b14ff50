use std::collections::HashMap;

use anyhow::{anyhow, Result};
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;
use wgpu::{
    vertex_attr_array, AddressMode, BindGroupDescriptor, BindGroupEntry, BindGroupLayout,
    BindGroupLayoutDescriptor, BindGroupLayoutEntry, BindingResource, BindingType, Buffer,
    BufferBindingType, BufferUsages, ColorTargetState, ColorWrites, CommandEncoder,
    CommandEncoderDescriptor, CompositeAlphaMode, DeviceDescriptor, Extent3d, FilterMode,
    FragmentState, Instance, LoadOp, MultisampleState, Operations, Origin3d,
    PipelineLayoutDescriptor, PresentMode, PrimitiveState, RenderPassColorAttachment,
    RenderPassDescriptor, RenderPipeline, RenderPipelineDescriptor, RequestAdapterOptions, Sampler,
    SamplerBindingType, SamplerDescriptor, ShaderModuleDescriptor, ShaderSource,
    SurfaceConfiguration, TexelCopyBufferLayout, TexelCopyTextureInfo, Texture, TextureAspect,
    TextureDescriptor, TextureDimension, TextureFormat, TextureSampleType, TextureUsages,
    TextureView, TextureViewDescriptor, TextureViewDimension, VertexState,
};
use winit::{dpi::PhysicalSize, window::Window};

use crate::math::{Aabb, Vec2};
use crate::render::font;
use crate::render::sprite::{Sprite, TextureHandle};
use crate::render::DrawSurface;

/// Queued sprite draw command (batched rendering).
struct SpriteDrawCommand {
    uniform_offset: u64,
    texture_handle: TextureHandle,
}

/// Wrapper around wgpu surface/device setup and simple frame management.
pub struct Renderer<'window> {
    backend: WgpuBackend<'window>,
}

impl<'window> Renderer<'window> {
    pub fn new(window: &'window Window, vsync: bool) -> Result<Self> {
        let backend = WgpuBackend::new(window, vsync)?;
        Ok(Self { backend })
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.backend.resize(new_size);
    }

    pub fn begin_frame(&mut self) -> Result<Frame> {
        self.backend.begin_frame()
    }

    pub fn clear(&mut self, frame: &mut Frame, color: [f32; 4]) -> Result<()> {
        self.backend.clear(frame, color)
    }

    pub fn draw_sprite(&mut self, frame: &mut Frame, sprite: &Sprite) -> Result<()> {
        self.backend.draw_sprite(frame, sprite)
    }

    pub fn end_frame(&mut self, frame: Frame) -> Result<()> {
        self.backend.end_frame(frame)
    }

    pub fn load_texture_from_bytes(&mut self, bytes: &[u8]) -> Result<TextureHandle> {
        self.backend.load_texture_from_bytes(bytes)
    }

    /// Load a texture from raw RGBA8 data (no PNG decoding).
    ///
    /// `data` must be `width * height * 4` bytes in RGBA8 format.
    pub fn load_texture_from_rgba(
        &mut self,
        data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<TextureHandle> {
        self.backend.load_texture_from_rgba(data, width, height, false)
    }

    pub fn texture_size(&self, handle: TextureHandle) -> Option<(u32, u32)> {
        self.backend.texture_size(handle)
    }

    pub fn surface_size(&self) -> (u32, u32) {
        self.backend.surface_size()
    }

    /// The built-in 1x1 white texture backing `fill_rect`.
    pub fn white_texture(&self) -> TextureHandle {
        self.backend.white_texture
    }

    /// The built-in bitmap font atlas backing `draw_text`.
    pub fn font_texture(&self) -> TextureHandle {
        self.backend.font_texture
    }

    /// Borrow this renderer and a frame together as a `DrawSurface`.
    pub fn surface_frame<'a>(&'a mut self, frame: &'a mut Frame) -> SurfaceFrame<'a, 'window> {
        SurfaceFrame {
            renderer: self,
            frame,
        }
    }
}

/// A renderer and an in-flight frame, presented as one drawing surface.
pub struct SurfaceFrame<'a, 'window> {
    renderer: &'a mut Renderer<'window>,
    frame: &'a mut Frame,
}

impl DrawSurface for SurfaceFrame<'_, '_> {
    fn clear(&mut self, color: [f32; 4]) -> Result<()> {
        self.renderer.clear(self.frame, color)
    }

    fn fill_rect(&mut self, rect: Aabb, color: [f32; 4]) -> Result<()> {
        let sprite = Sprite::new(self.renderer.white_texture(), rect.position, rect.size)
            .with_tint(color);
        self.renderer.draw_sprite(self.frame, &sprite)
    }

    fn draw_sprite(&mut self, sprite: &Sprite) -> Result<()> {
        self.renderer.draw_sprite(self.frame, sprite)
    }

    fn draw_text(&mut self, text: &str, position: Vec2, scale: f32, color: [f32; 4]) -> Result<()> {
        let font_texture = self.renderer.font_texture();
        let glyph_size = Vec2::new(
            font::GLYPH_WIDTH as f32 * scale,
            font::GLYPH_HEIGHT as f32 * scale,
        );
        let mut x = position.x;
        for ch in text.chars() {
            if let Some(uv) = font::glyph_uv(ch) {
                let sprite = Sprite::new(font_texture, Vec2::new(x, position.y), glyph_size)
                    .with_source(uv)
                    .with_tint(color);
                self.renderer.draw_sprite(self.frame, &sprite)?;
            }
            x += font::GLYPH_ADVANCE as f32 * scale;
        }
        Ok(())
    }

    fn size(&self) -> Vec2 {
        let (width, height) = self.renderer.surface_size();
        Vec2::new(width as f32, height as f32)
    }
}

pub struct Frame {
    surface_texture: Option<wgpu::SurfaceTexture>,
    view: TextureView,
    encoder: Option<CommandEncoder>,
    sprite_draws: Vec<SpriteDrawCommand>,
}

impl Drop for Frame {
    fn drop(&mut self) {
        // If the frame wasn't properly ended we still present the surface
        // texture to avoid leaking it. The encoder drops on its own.
        if let Some(surface_texture) = self.surface_texture.take() {
            surface_texture.present();
        }
    }
}

struct TextureEntry {
    /// The underlying GPU texture. Must be kept alive for the view/sampler
    /// to be valid.
    #[allow(dead_code)]
    texture: Texture,
    view: TextureView,
    sampler: Sampler,
    size: (u32, u32),
}

struct SpritePipeline {
    pipeline: RenderPipeline,
    vertex_buffer: Buffer,
    uniform_buffer: Buffer,
    bind_group_layout: BindGroupLayout,
    uniform_alignment: u64,
}

// Maximum number of sprites we can draw per frame.
const MAX_SPRITES_PER_FRAME: usize = 2048;
const UNIFORM_BUFFER_SIZE: u64 = MAX_SPRITES_PER_FRAME as u64 * 256;

struct WgpuBackend<'window> {
    surface: wgpu::Surface<'window>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: SurfaceConfiguration,
    present_mode: PresentMode,
    sprite_pipeline: SpritePipeline,
    textures: HashMap<TextureHandle, TextureEntry>,
    next_texture_id: u32,
    uniform_write_offset: u64,
    bind_group_cache: HashMap<TextureHandle, wgpu::BindGroup>,
    white_texture: TextureHandle,
    font_texture: TextureHandle,
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct SpriteVertex {
    position: [f32; 2],
    uv: [f32; 2],
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct SpriteUniforms {
    mvp: [[f32; 4]; 4],
    color: [f32; 4],
    uv_offset: [f32; 2],
    uv_scale: [f32; 2],
}

const SPRITE_VERTICES: [SpriteVertex; 6] = [
    SpriteVertex {
        position: [-0.5, -0.5],
        uv: [0.0, 0.0], // Top-left (WebGPU convention)
    },
    SpriteVertex {
        position: [0.5, -0.5],
        uv: [1.0, 0.0], // Top-right
    },
    SpriteVertex {
        position: [0.5, 0.5],
        uv: [1.0, 1.0], // Bottom-right
    },
    SpriteVertex {
        position: [-0.5, -0.5],
        uv: [0.0, 0.0], // Top-left
    },
    SpriteVertex {
        position: [0.5, 0.5],
        uv: [1.0, 1.0], // Bottom-right
    },
    SpriteVertex {
        position: [-0.5, 0.5],
        uv: [0.0, 1.0], // Bottom-left
    },
];

impl<'window> WgpuBackend<'window> {
    fn new(window: &'window Window, vsync: bool) -> Result<Self> {
        let instance = Instance::default();
        let surface = instance.create_surface(window)?;

        let adapter = pollster::block_on(instance.request_adapter(&RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("wgpu adapter: {}", adapter.get_info().name);

        let (device, queue) = pollster::block_on(adapter.request_device(&DeviceDescriptor {
            label: Some("ember2d-device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            experimental_features: Default::default(),
            memory_hints: Default::default(),
            trace: wgpu::Trace::Off,
        }))?;

        let size = window.inner_size();
        let capabilities = surface.get_capabilities(&adapter);
        let format = capabilities
            .formats
            .iter()
            .copied()
            .find(|format| format.is_srgb())
            .unwrap_or(capabilities.formats[0]);

        let present_mode = choose_present_mode(&capabilities.present_modes, vsync);
        let alpha_mode = choose_alpha_mode(&capabilities.alpha_modes);

        let surface_config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let sprite_pipeline = create_sprite_pipeline(&device, format);

        let mut backend = Self {
            surface,
            device,
            queue,
            surface_config,
            present_mode,
            sprite_pipeline,
            textures: HashMap::new(),
            next_texture_id: 1,
            uniform_write_offset: 0,
            bind_group_cache: HashMap::new(),
            white_texture: TextureHandle(0),
            font_texture: TextureHandle(0),
        };

        backend.white_texture =
            backend.load_texture_from_rgba(&[255, 255, 255, 255], 1, 1, false)?;
        let (atlas_width, atlas_height) = font::atlas_size();
        let atlas = font::build_atlas_rgba();
        backend.font_texture =
            backend.load_texture_from_rgba(&atlas, atlas_width, atlas_height, true)?;

        Ok(backend)
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }

        self.surface_config.width = new_size.width;
        self.surface_config.height = new_size.height;
        self.surface_config.present_mode = self.present_mode;
        self.surface.configure(&self.device, &self.surface_config);
    }

    fn begin_frame(&mut self) -> Result<Frame> {
        // Reset the uniform offset and per-frame bind group cache.
        self.uniform_write_offset = 0;
        self.bind_group_cache.clear();

        loop {
            match self.surface.get_current_texture() {
                Ok(surface_texture) => {
                    let view = surface_texture
                        .texture
                        .create_view(&TextureViewDescriptor::default());
                    let encoder = self
                        .device
                        .create_command_encoder(&CommandEncoderDescriptor {
                            label: Some("frame-encoder"),
                        });

                    return Ok(Frame {
                        surface_texture: Some(surface_texture),
                        view,
                        encoder: Some(encoder),
                        sprite_draws: Vec::new(),
                    });
                }
                Err(e) => match e {
                    wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                        self.surface.configure(&self.device, &self.surface_config);
                        continue;
                    }
                    wgpu::SurfaceError::Timeout => {
                        continue;
                    }
                    wgpu::SurfaceError::OutOfMemory => {
                        return Err(anyhow!("Surface ran out of memory"));
                    }
                    wgpu::SurfaceError::Other => {
                        return Err(anyhow!("Surface error: Other"));
                    }
                },
            }
        }
    }

    fn clear(&mut self, frame: &mut Frame, color: [f32; 4]) -> Result<()> {
        let encoder = frame
            .encoder
            .as_mut()
            .ok_or_else(|| anyhow!("Frame already ended"))?;

        {
            let _pass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("clear-pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(wgpu::Color {
                            r: color[0] as f64,
                            g: color[1] as f64,
                            b: color[2] as f64,
                            a: color[3] as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                multiview_mask: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            drop(_pass);
        }

        Ok(())
    }

    fn draw_sprite(&mut self, frame: &mut Frame, sprite: &Sprite) -> Result<()> {
        let texture = self
            .textures
            .get(&sprite.texture)
            .ok_or_else(|| anyhow!("Unknown texture handle"))?;

        if self.uniform_write_offset >= UNIFORM_BUFFER_SIZE {
            return Err(anyhow!(
                "Too many sprites drawn in one frame (max: {})",
                MAX_SPRITES_PER_FRAME
            ));
        }

        // Pixel space with the origin at the top-left, y growing downward.
        let projection = Mat4::orthographic_rh(
            0.0,
            self.surface_config.width as f32,
            self.surface_config.height as f32,
            0.0,
            -1.0,
            1.0,
        );
        let center = sprite.position + sprite.size * 0.5;
        let model = Mat4::from_translation(Vec3::new(center.x, center.y, 0.0))
            * Mat4::from_scale(Vec3::new(sprite.size.x, sprite.size.y, 1.0));
        let mvp = projection * model;

        let (uv_offset, uv_scale) = if let Some(rect) = sprite.source {
            ([rect[0], rect[1]], [rect[2], rect[3]])
        } else {
            ([0.0, 0.0], [1.0, 1.0])
        };

        let uniforms = SpriteUniforms {
            mvp: mvp.to_cols_array_2d(),
            color: sprite.tint,
            uv_offset,
            uv_scale,
        };

        let aligned_offset = if self.uniform_write_offset == 0 {
            0
        } else {
            (self.uniform_write_offset + self.sprite_pipeline.uniform_alignment - 1)
                & !(self.sprite_pipeline.uniform_alignment - 1)
        };

        self.queue.write_buffer(
            &self.sprite_pipeline.uniform_buffer,
            aligned_offset,
            bytemuck::bytes_of(&uniforms),
        );

        // Bind groups are per texture; the dynamic offset selects the
        // uniform slice when flushing.
        let uniform_size = std::mem::size_of::<SpriteUniforms>() as u64;
        self.bind_group_cache
            .entry(sprite.texture)
            .or_insert_with(|| {
                self.device.create_bind_group(&BindGroupDescriptor {
                    label: Some("sprite-bind-group"),
                    layout: &self.sprite_pipeline.bind_group_layout,
                    entries: &[
                        BindGroupEntry {
                            binding: 0,
                            resource: BindingResource::Buffer(wgpu::BufferBinding {
                                buffer: &self.sprite_pipeline.uniform_buffer,
                                offset: 0,
                                size: std::num::NonZeroU64::new(uniform_size),
                            }),
                        },
                        BindGroupEntry {
                            binding: 1,
                            resource: BindingResource::TextureView(&texture.view),
                        },
                        BindGroupEntry {
                            binding: 2,
                            resource: BindingResource::Sampler(&texture.sampler),
                        },
                    ],
                })
            });

        frame.sprite_draws.push(SpriteDrawCommand {
            uniform_offset: aligned_offset,
            texture_handle: sprite.texture,
        });

        self.uniform_write_offset = aligned_offset + self.sprite_pipeline.uniform_alignment;

        Ok(())
    }

    fn flush_sprites(&mut self, frame: &mut Frame) -> Result<()> {
        if frame.sprite_draws.is_empty() {
            return Ok(());
        }

        let encoder = frame
            .encoder
            .as_mut()
            .ok_or_else(|| anyhow!("Frame already ended"))?;

        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("sprite-pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Load, // keep the clear pass result
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            multiview_mask: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        pass.set_pipeline(&self.sprite_pipeline.pipeline);
        pass.set_vertex_buffer(0, self.sprite_pipeline.vertex_buffer.slice(..));

        for draw_cmd in &frame.sprite_draws {
            if let Some(bind_group) = self.bind_group_cache.get(&draw_cmd.texture_handle) {
                pass.set_bind_group(0, bind_group, &[draw_cmd.uniform_offset as u32]);
                pass.draw(0..SPRITE_VERTICES.len() as u32, 0..1);
            } else {
                return Err(anyhow!("Bind group not found for texture handle"));
            }
        }

        drop(pass);
        Ok(())
    }

    fn end_frame(&mut self, mut frame: Frame) -> Result<()> {
        self.flush_sprites(&mut frame)?;

        let encoder = frame
            .encoder
            .take()
            .ok_or_else(|| anyhow!("Frame already ended"))?;
        self.queue.submit(Some(encoder.finish()));

        let surface_texture = frame
            .surface_texture
            .take()
            .ok_or_else(|| anyhow!("Frame already ended"))?;
        surface_texture.present();
        Ok(())
    }

    fn load_texture_from_bytes(&mut self, bytes: &[u8]) -> Result<TextureHandle> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        let dimensions = image.dimensions();
        self.load_texture_from_rgba(&image, dimensions.0, dimensions.1, false)
    }

    /// Upload raw RGBA8 data. `nearest` selects crisp point sampling
    /// (used for the font atlas); sprites default to linear.
    fn load_texture_from_rgba(
        &mut self,
        data: &[u8],
        width: u32,
        height: u32,
        nearest: bool,
    ) -> Result<TextureHandle> {
        let size = Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = self.device.create_texture(&TextureDescriptor {
            label: Some("texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: TextureFormat::Rgba8UnormSrgb,
            usage: TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.queue.write_texture(
            TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: Origin3d::ZERO,
                aspect: TextureAspect::All,
            },
            data,
            TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&TextureViewDescriptor::default());

        let filter = if nearest {
            FilterMode::Nearest
        } else {
            FilterMode::Linear
        };
        let sampler = self.device.create_sampler(&SamplerDescriptor {
            label: Some(if nearest {
                "font-sampler"
            } else {
                "sprite-sampler"
            }),
            address_mode_u: AddressMode::ClampToEdge,
            address_mode_v: AddressMode::ClampToEdge,
            address_mode_w: AddressMode::ClampToEdge,
            mag_filter: filter,
            min_filter: filter,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let handle = TextureHandle(self.next_texture_id);
        self.next_texture_id += 1;
        self.textures.insert(
            handle,
            TextureEntry {
                texture,
                view,
                sampler,
                size: (width, height),
            },
        );

        Ok(handle)
    }

    fn texture_size(&self, handle: TextureHandle) -> Option<(u32, u32)> {
        self.textures.get(&handle).map(|t| t.size)
    }

    fn surface_size(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }
}

fn create_sprite_pipeline(device: &wgpu::Device, surface_format: TextureFormat) -> SpritePipeline {
    let shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some("sprite-shader"),
        source: ShaderSource::Wgsl(include_str!("sprite.wgsl").into()),
    });

    let bind_group_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("sprite-bind-group-layout"),
        entries: &[
            BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: BindingType::Buffer {
                    ty: BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<SpriteUniforms>() as u64,
                    ),
                },
                count: None,
            },
            BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: BindingType::Texture {
                    sample_type: TextureSampleType::Float { filterable: true },
                    view_dimension: TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: BindingType::Sampler(SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });

    let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("sprite-pipeline-layout"),
        bind_group_layouts: &[&bind_group_layout],
        immediate_size: 0,
    });

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sprite-vertices"),
        contents: bytemuck::cast_slice(&SPRITE_VERTICES),
        usage: BufferUsages::VERTEX,
    });

    // Required uniform buffer alignment (usually 256 bytes).
    let uniform_alignment = device.limits().min_uniform_buffer_offset_alignment as u64;

    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("sprite-uniform-buffer"),
        size: UNIFORM_BUFFER_SIZE,
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some("sprite-pipeline"),
        layout: Some(&pipeline_layout),
        vertex: VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<SpriteVertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &vertex_attr_array![0 => Float32x2, 1 => Float32x2],
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: PrimitiveState::default(),
        depth_stencil: None,
        multisample: MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    SpritePipeline {
        pipeline,
        vertex_buffer,
        uniform_buffer,
        bind_group_layout,
        uniform_alignment,
    }
}

fn choose_present_mode(modes: &[PresentMode], vsync: bool) -> PresentMode {
    if vsync {
        modes
            .iter()
            .copied()
            .find(|mode| matches!(mode, PresentMode::Fifo | PresentMode::FifoRelaxed))
            .unwrap_or(PresentMode::Fifo)
    } else {
        modes
            .iter()
            .copied()
            .find(|mode| matches!(mode, PresentMode::Immediate | PresentMode::Mailbox))
            .unwrap_or(PresentMode::Immediate)
    }
}

fn choose_alpha_mode(modes: &[CompositeAlphaMode]) -> CompositeAlphaMode {
    modes
        .iter()
        .copied()
        .find(|mode| matches!(mode, CompositeAlphaMode::Auto))
        .unwrap_or_else(|| modes.first().copied().unwrap_or(CompositeAlphaMode::Opaque))
}
