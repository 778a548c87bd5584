/// Picks the surface format from what the surface supports.
///
/// With `prefer_srgb` an sRGB format wins when one exists; otherwise a linear
/// (non-sRGB) format is preferred so color channels reach the screen unchanged.
pub(super) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = *formats.first()?;

    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb() == prefer_srgb)
        .or(Some(first))
}

/// Requested alpha mode if supported, else the first supported one.
pub(super) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, TextureFormat};

    const FORMATS: [TextureFormat; 3] = [
        TextureFormat::Bgra8UnormSrgb,
        TextureFormat::Bgra8Unorm,
        TextureFormat::Rgba16Float,
    ];

    #[test]
    fn format_follows_srgb_preference() {
        assert_eq!(choose_surface_format(&FORMATS, true), Some(TextureFormat::Bgra8UnormSrgb));
        assert_eq!(choose_surface_format(&FORMATS, false), Some(TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn format_falls_back_to_first() {
        let only_srgb = [TextureFormat::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&only_srgb, false), Some(TextureFormat::Rgba8UnormSrgb));
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn alpha_mode_falls_back() {
        let supported = [CompositeAlphaMode::Opaque];
        assert_eq!(
            choose_alpha_mode(&supported, Some(CompositeAlphaMode::PreMultiplied)),
            CompositeAlphaMode::Opaque
        );
        assert_eq!(
            choose_alpha_mode(&supported, Some(CompositeAlphaMode::Opaque)),
            CompositeAlphaMode::Opaque
        );
        assert_eq!(choose_alpha_mode(&[], None), CompositeAlphaMode::Auto);
    }
}
