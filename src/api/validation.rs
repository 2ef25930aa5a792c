use crate::core::Viewport;
use crate::error::{GraphError, GraphResult};
use crate::interaction::KineticScrollConfig;

use super::{BarAppearance, BarGraphConfig};

pub(super) fn validate_viewport(viewport: Viewport) -> GraphResult<Viewport> {
    if !viewport.is_valid() {
        return Err(GraphError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

pub(super) fn validate_bar_width(bar_width_px: u32) -> GraphResult<f64> {
    if bar_width_px == 0 {
        return Err(GraphError::InvalidData("bar width must be > 0".to_owned()));
    }
    Ok(f64::from(bar_width_px))
}

pub(super) fn validate_appearance(appearance: BarAppearance) -> GraphResult<BarAppearance> {
    appearance.bar_color.validate()?;
    appearance.highlight_color.validate()?;
    appearance.background_color.validate()?;
    Ok(appearance)
}

pub(super) fn validate_kinetic_scroll_config(
    config: KineticScrollConfig,
) -> GraphResult<KineticScrollConfig> {
    if !config.decay_per_second.is_finite()
        || config.decay_per_second <= 0.0
        || config.decay_per_second >= 1.0
    {
        return Err(GraphError::InvalidData(
            "kinetic scroll decay_per_second must be finite and in (0, 1)".to_owned(),
        ));
    }
    if !config.stop_velocity_abs.is_finite() || config.stop_velocity_abs <= 0.0 {
        return Err(GraphError::InvalidData(
            "kinetic scroll stop_velocity_abs must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_config(config: BarGraphConfig) -> GraphResult<BarGraphConfig> {
    validate_viewport(config.viewport)?;
    validate_bar_width(config.bar_width_px)?;
    validate_appearance(config.appearance)?;
    validate_kinetic_scroll_config(config.kinetic_scroll)?;
    Ok(config)
}

pub(super) fn validate_scroll_offset(offset: f64) -> GraphResult<f64> {
    if !offset.is_finite() {
        return Err(GraphError::InvalidData(
            "scroll offset must be finite".to_owned(),
        ));
    }
    Ok(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bar_width_is_rejected() {
        assert!(validate_bar_width(0).is_err());
        assert_eq!(validate_bar_width(12).expect("valid width"), 12.0);
    }

    #[test]
    fn kinetic_decay_must_be_a_fraction() {
        let mut config = KineticScrollConfig::default();
        assert!(validate_kinetic_scroll_config(config).is_ok());
        config.decay_per_second = 1.0;
        assert!(validate_kinetic_scroll_config(config).is_err());
    }
}
