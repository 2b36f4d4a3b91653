//! Instanced WebGPU renderer for the shared scene.
//!
//! Everything draws as one instanced quad pipeline: cube proxies as rotating
//! square outlines, sphere bodies as shaded discs, particles as small fading
//! discs. Instance order is draw order (no depth buffer), which keeps
//! particles on top of the bodies that emitted them.

use glam::{Mat4, Vec3};
use multiwin_core::{
    FrameOutput, InstanceKind, CAMERA_FOVY, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR,
};
use web_sys as web;
use wgpu::util::DeviceExt;

const INITIAL_INSTANCE_CAPACITY: usize = 256;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    world_offset: [f32; 4], // xy used, zw padding
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceData {
    pos: [f32; 3],
    half_extent: f32,
    color: [f32; 4],
    rot: [f32; 2],
    kind: f32,
    _pad: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    instance_capacity: usize,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Quad vertex buffer (two triangles), local coords in [-1, 1]
        let quad_vertices: [f32; 12] = [
            -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = create_instance_buffer(&device, INITIAL_INSTANCE_CAPACITY);
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let vertex_buffers = [
            // slot 0: quad positions
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceData>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x2,
                        offset: 32,
                        shader_location: 4,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 40,
                        shader_location: 5,
                    },
                ],
            },
        ];

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
            bind_group,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn view_proj(&self) -> [[f32; 4]; 4] {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(CAMERA_FOVY, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
        (proj * view).to_cols_array_2d()
    }

    pub fn render(&mut self, output: &FrameOutput) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: self.view_proj(),
                world_offset: [output.world_offset.x, output.world_offset.y, 0.0, 0.0],
            }),
        );

        let instance_data: Vec<InstanceData> = output
            .instances
            .iter()
            .map(|inst| InstanceData {
                pos: inst.position.to_array(),
                half_extent: inst.half_extent,
                color: [inst.color[0], inst.color[1], inst.color[2], inst.opacity],
                rot: inst.rotation.to_array(),
                kind: match inst.kind {
                    InstanceKind::Cube => 0.0,
                    InstanceKind::Sphere => 1.0,
                    InstanceKind::Particle => 2.0,
                },
                _pad: 0.0,
            })
            .collect();
        if instance_data.len() > self.instance_capacity {
            self.instance_capacity = instance_data.len().next_power_of_two();
            self.instance_vb = create_instance_buffer(&self.device, self.instance_capacity);
        }
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&instance_data));

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("rpass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
        rpass.draw(0..6, 0..(instance_data.len() as u32));
        drop(rpass);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instance_vb"),
        size: (std::mem::size_of::<InstanceData>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

const SHADER_SRC: &str = r#"
struct VsOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) color: vec4<f32>,
  @location(1) local: vec2<f32>,
  @location(2) kind: f32,
};
struct Uniforms { view_proj: mat4x4<f32>, world_offset: vec4<f32> };
@group(0) @binding(0) var<uniform> u: Uniforms;

@vertex
fn vs_main(
  @location(0) v_pos: vec2<f32>,
  @location(1) i_pos: vec3<f32>,
  @location(2) i_half: f32,
  @location(3) i_color: vec4<f32>,
  @location(4) i_rot: vec2<f32>,
  @location(5) i_kind: f32,
) -> VsOut {
  // Spin the quad by the accumulated y rotation, tilt it by x.
  let c = cos(i_rot.y);
  let s = sin(i_rot.y);
  var local = vec2<f32>(v_pos.x * c - v_pos.y * s, v_pos.x * s + v_pos.y * c);
  local.y = local.y * cos(i_rot.x);
  let world = vec4<f32>(i_pos + u.world_offset.xyz, 1.0)
    + vec4<f32>(local * i_half, 0.0, 0.0);
  var out: VsOut;
  out.pos = u.view_proj * world;
  out.color = i_color;
  out.local = v_pos; // untransformed local for the shape mask
  out.kind = i_kind;
  return out;
}

@fragment
fn fs_main(inf: VsOut) -> @location(0) vec4<f32> {
  var rgb = inf.color.rgb;
  var alpha = inf.color.a;
  if (inf.kind < 0.5) {
    // Cube proxy: square outline band.
    let edge = max(abs(inf.local.x), abs(inf.local.y));
    alpha = alpha * smoothstep(0.82, 0.88, edge) * (1.0 - smoothstep(0.97, 1.0, edge));
  } else {
    // Sphere body or particle: disc with a soft rim.
    let r = length(inf.local);
    alpha = alpha * (1.0 - smoothstep(0.92, 1.0, r));
    if (inf.kind < 1.5) {
      // Slight radial shading so bodies read as volumes.
      rgb = rgb * (1.0 - 0.35 * r);
    }
  }
  return vec4<f32>(rgb, alpha);
}
"#;
