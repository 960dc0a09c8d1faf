use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = *caps.formats.first()?;

    let found = if prefer_srgb {
        [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ]
        .into_iter()
        .find(|f| caps.formats.contains(f))
    } else {
        caps.formats.iter().copied().find(|f| !f.is_srgb())
    };

    Some(found.unwrap_or(first))
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Picks the largest supported sample count that does not exceed `requested`.
pub(crate) fn choose_sample_count(
    flags: wgpu::TextureFormatFeatureFlags,
    requested: u32,
) -> u32 {
    [16, 8, 4, 2]
        .into_iter()
        .filter(|&n| n <= requested)
        .find(|&n| flags.sample_count_supported(n))
        .unwrap_or(1)
}

/// Updates `config`/`size` for a new drawable size.
///
/// Returns `true` when the surface must be reconfigured. wgpu does not accept
/// a 0x0 configuration; in that case only `size` is recorded.
pub(crate) fn apply_resize(
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) -> bool {
    *size = new_size;

    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    true
}

pub(crate) fn map_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(formats: Vec<wgpu::TextureFormat>) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats,
            ..Default::default()
        }
    }

    fn config() -> wgpu::SurfaceConfiguration {
        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: wgpu::TextureFormat::Bgra8Unorm,
            width: 1200,
            height: 800,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    // ── surface format ────────────────────────────────────────────────────

    #[test]
    fn linear_format_preferred_when_srgb_not_wanted() {
        let c = caps(vec![
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Bgra8Unorm,
        ]);
        assert_eq!(choose_surface_format(&c, false), Some(wgpu::TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn srgb_format_preferred_when_wanted() {
        let c = caps(vec![
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ]);
        assert_eq!(choose_surface_format(&c, true), Some(wgpu::TextureFormat::Rgba8UnormSrgb));
    }

    #[test]
    fn falls_back_to_first_format() {
        let c = caps(vec![wgpu::TextureFormat::Bgra8UnormSrgb]);
        assert_eq!(choose_surface_format(&c, false), Some(wgpu::TextureFormat::Bgra8UnormSrgb));
        assert_eq!(choose_surface_format(&caps(vec![]), false), None);
    }

    // ── sample count ──────────────────────────────────────────────────────

    #[test]
    fn requested_sample_count_kept_when_supported() {
        let flags = wgpu::TextureFormatFeatureFlags::MULTISAMPLE_X4;
        assert_eq!(choose_sample_count(flags, 4), 4);
    }

    #[test]
    fn sample_count_lowered_when_unsupported() {
        let flags = wgpu::TextureFormatFeatureFlags::MULTISAMPLE_X2;
        assert_eq!(choose_sample_count(flags, 4), 2);
        assert_eq!(choose_sample_count(wgpu::TextureFormatFeatureFlags::empty(), 4), 1);
    }

    #[test]
    fn sample_count_never_exceeds_request() {
        let flags = wgpu::TextureFormatFeatureFlags::MULTISAMPLE_X4
            | wgpu::TextureFormatFeatureFlags::MULTISAMPLE_X8;
        assert_eq!(choose_sample_count(flags, 1), 1);
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_updates_configuration() {
        let mut cfg = config();
        let mut size = PhysicalSize::new(1200, 800);
        assert!(apply_resize(&mut cfg, &mut size, PhysicalSize::new(640, 480)));
        assert_eq!((cfg.width, cfg.height), (640, 480));
        assert_eq!(size, PhysicalSize::new(640, 480));
    }

    #[test]
    fn zero_size_resize_defers_configuration() {
        let mut cfg = config();
        let mut size = PhysicalSize::new(1200, 800);
        assert!(!apply_resize(&mut cfg, &mut size, PhysicalSize::new(0, 0)));
        assert_eq!((cfg.width, cfg.height), (1200, 800));
        assert_eq!(size, PhysicalSize::new(0, 0));
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn surface_errors_map_to_actions() {
        assert_eq!(map_surface_error(&wgpu::SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(map_surface_error(&wgpu::SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(map_surface_error(&wgpu::SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
    }
}
