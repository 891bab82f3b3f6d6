use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Check that raster target dimensions are usable
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), ValidationError> {
    if width == 0 || height == 0 {
        return Err(ValidationError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Convert a normalized color channel to 8-bit (round to nearest)
pub fn to_channel_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// Convert an 8-bit color channel to normalized
pub fn from_channel_u8(channel: u8) -> f32 {
    channel as f32 / 255.0
}

/// Convert a normalized RGBA color to 8-bit channels
pub fn to_rgba8(color: [f32; 4]) -> [u8; 4] {
    [
        to_channel_u8(color[0]),
        to_channel_u8(color[1]),
        to_channel_u8(color[2]),
        to_channel_u8(color[3]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimensions() {
        assert!(validate_dimensions(100, 100).is_ok());
        assert!(validate_dimensions(1, 1).is_ok());

        assert!(matches!(
            validate_dimensions(0, 100),
            Err(ValidationError::InvalidDimensions {
                width: 0,
                height: 100
            })
        ));
        assert!(matches!(
            validate_dimensions(100, 0),
            Err(ValidationError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_channel_conversion() {
        assert_eq!(to_channel_u8(0.0), 0);
        assert_eq!(to_channel_u8(1.0), 255);
        assert_eq!(to_channel_u8(0.5), 128);

        // Out-of-range input clamps rather than wrapping
        assert_eq!(to_channel_u8(-1.0), 0);
        assert_eq!(to_channel_u8(2.0), 255);
    }

    #[test]
    fn test_channel_round_trip() {
        for channel in [0u8, 1, 127, 128, 254, 255] {
            assert_eq!(to_channel_u8(from_channel_u8(channel)), channel);
        }
    }

    #[test]
    fn test_to_rgba8() {
        assert_eq!(to_rgba8([1.0, 0.0, 0.0, 1.0]), [255, 0, 0, 255]);
        assert_eq!(to_rgba8([0.0, 0.0, 1.0, 0.5]), [0, 0, 255, 128]);
    }
}
