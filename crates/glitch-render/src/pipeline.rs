//! Two-stage composite pipeline
//!
//! The scene is either rendered into an owned off-surface texture and then
//! copied onto the host's destination view in one blit (buffered), or
//! rendered straight onto the destination view (direct). The strategy is
//! chosen once at initialization and cached; a failed buffered setup falls
//! back to direct for the rest of the session rather than erroring out.

use thiserror::Error;
use vello::{AaConfig, RenderParams, Renderer, RendererOptions, Scene, peniko};
use wgpu::util::TextureBlitter;

/// Pipeline error types
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("vello renderer: {0}")]
    Renderer(String),
    #[error("scene render failed: {0}")]
    Render(String),
}

/// Strategy interface for getting a scene onto the visible surface
pub trait CompositeTarget {
    /// Strategy name for logs
    fn kind(&self) -> &'static str;

    /// Render `scene` and make it visible on `dest`
    fn composite(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &Scene,
        dest: &wgpu::TextureView,
        size: (u32, u32),
    ) -> Result<(), RenderError>;
}

fn new_renderer(device: &wgpu::Device) -> Result<Renderer, RenderError> {
    Renderer::new(
        device,
        RendererOptions {
            pipeline_cache: None,
            ..Default::default()
        },
    )
    .map_err(|e| RenderError::Renderer(e.to_string()))
}

fn render_params(size: (u32, u32)) -> RenderParams {
    RenderParams {
        base_color: peniko::Color::TRANSPARENT,
        width: size.0,
        height: size.1,
        antialiasing_method: AaConfig::Area,
    }
}

/// Draw into an owned off-surface texture, then blit onto the destination
pub struct BufferedTarget {
    renderer: Renderer,
    blitter: TextureBlitter,
    texture: Option<wgpu::Texture>,
    view: Option<wgpu::TextureView>,
    size: (u32, u32),
}

impl BufferedTarget {
    /// Create the buffered strategy for a destination of `dest_format`
    pub fn new(
        device: &wgpu::Device,
        dest_format: wgpu::TextureFormat,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            renderer: new_renderer(device)?,
            blitter: TextureBlitter::new(device, dest_format),
            texture: None,
            view: None,
            size: (0, 0),
        })
    }

    fn ensure_buffer(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.size == (width, height) && self.texture.is_some() {
            return;
        }

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Glitch Offscreen Buffer"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                | wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::STORAGE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&Default::default());

        self.texture = Some(texture);
        self.view = Some(view);
        self.size = (width, height);
    }
}

impl CompositeTarget for BufferedTarget {
    fn kind(&self) -> &'static str {
        "buffered"
    }

    fn composite(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &Scene,
        dest: &wgpu::TextureView,
        size: (u32, u32),
    ) -> Result<(), RenderError> {
        let (width, height) = size;
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.ensure_buffer(device, width, height);
        let Some(view) = self.view.as_ref() else {
            return Ok(());
        };

        self.renderer
            .render_to_texture(device, queue, scene, view, &render_params(size))
            .map_err(|e| RenderError::Render(e.to_string()))?;

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Glitch Composite Blit"),
        });
        self.blitter.copy(device, &mut encoder, view, dest);
        queue.submit(Some(encoder.finish()));
        Ok(())
    }
}

/// Draw straight onto the destination view
///
/// The destination must be a storage-compatible `Rgba8Unorm` view; hosts
/// that can only offer a swapchain view should let the buffered strategy
/// handle format conversion instead.
pub struct DirectTarget {
    renderer: Renderer,
}

impl DirectTarget {
    pub fn new(device: &wgpu::Device) -> Result<Self, RenderError> {
        Ok(Self {
            renderer: new_renderer(device)?,
        })
    }
}

impl CompositeTarget for DirectTarget {
    fn kind(&self) -> &'static str {
        "direct"
    }

    fn composite(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &Scene,
        dest: &wgpu::TextureView,
        size: (u32, u32),
    ) -> Result<(), RenderError> {
        if size.0 == 0 || size.1 == 0 {
            return Ok(());
        }
        self.renderer
            .render_to_texture(device, queue, scene, dest, &render_params(size))
            .map_err(|e| RenderError::Render(e.to_string()))
    }
}

/// Pick the composite strategy once for the session
///
/// Buffered is attempted unless performance mode asks for the cheap path; a
/// construction failure degrades to direct with a warning, never an error.
pub fn select_target(
    device: &wgpu::Device,
    dest_format: wgpu::TextureFormat,
    performance_mode: bool,
) -> Result<Box<dyn CompositeTarget>, RenderError> {
    if !performance_mode {
        match BufferedTarget::new(device, dest_format) {
            Ok(target) => {
                log::debug!("composite target: buffered");
                return Ok(Box::new(target));
            }
            Err(e) => {
                log::warn!("off-surface buffering unavailable ({}), drawing direct", e);
            }
        }
    }

    let target = DirectTarget::new(device)?;
    log::debug!("composite target: direct");
    Ok(Box::new(target))
}
