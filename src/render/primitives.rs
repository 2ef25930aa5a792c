use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Default highlight stroke, a third darker than white.
    pub const LIGHT_GRAY: Self = Self::rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from 8-bit channels, as host toolkits usually store them.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        let unit = |channel: u8| f64::from(channel) / 255.0;
        Self::rgb(unit(red), unit(green), unit(blue))
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> GraphResult<()> {
        let channels = [self.red, self.green, self.blue, self.alpha];
        if channels
            .iter()
            .all(|value| value.is_finite() && (0.0..=1.0).contains(value))
        {
            return Ok(());
        }
        Err(GraphError::InvalidData(format!(
            "color channels must be finite and within [0, 1], got {self:?}"
        )))
    }
}

/// Draw command for one bar: a vertical stroke of `width` pixels centered on
/// `x_center`, running from `y_bottom` up to `y_top` in screen space.
///
/// `reveal` is the drawn fraction of the stroke measured from the bottom, so
/// backends can show the progressive reveal without tracking time themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPrimitive {
    pub index: usize,
    pub x_center: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub width: f64,
    pub color: Color,
    pub reveal: f64,
}

impl BarPrimitive {
    /// Top of the currently visible part of the stroke.
    #[must_use]
    pub fn revealed_y_top(self) -> f64 {
        self.y_bottom - (self.y_bottom - self.y_top) * self.reveal
    }

    #[must_use]
    pub fn x_left(self) -> f64 {
        self.x_center - self.width / 2.0
    }

    #[must_use]
    pub fn x_right(self) -> f64 {
        self.x_center + self.width / 2.0
    }

    pub fn validate(self) -> GraphResult<()> {
        if !self.x_center.is_finite() || !self.y_top.is_finite() || !self.y_bottom.is_finite() {
            return Err(GraphError::InvalidData(
                "bar coordinates must be finite".to_owned(),
            ));
        }
        if self.y_top > self.y_bottom {
            return Err(GraphError::InvalidData(
                "bar top must not be below its bottom".to_owned(),
            ));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(GraphError::InvalidData(
                "bar width must be finite and > 0".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal) {
            return Err(GraphError::InvalidData(
                "bar reveal progress must be in [0, 1]".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_maps_to_unit_channels() {
        let color = Color::from_rgb8(255, 0, 51);
        assert_eq!(color, Color::rgb(1.0, 0.0, 0.2));
        assert!(color.with_alpha(0.5).validate().is_ok());
        assert!(color.with_alpha(1.5).validate().is_err());
    }

    #[test]
    fn half_revealed_bar_stops_midway() {
        let bar = BarPrimitive {
            index: 0,
            x_center: 20.0,
            y_top: 10.0,
            y_bottom: 110.0,
            width: 10.0,
            color: Color::WHITE,
            reveal: 0.5,
        };
        assert_eq!(bar.revealed_y_top(), 60.0);
        assert_eq!((bar.x_left(), bar.x_right()), (15.0, 25.0));
        assert!(bar.validate().is_ok());
        assert!(BarPrimitive { reveal: 1.2, ..bar }.validate().is_err());
    }
}
