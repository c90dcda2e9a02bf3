use std::fmt;

/// HSL color with its renderer descriptors computed up front.
///
/// `css` is what a 2D canvas consumes (`hsl(h,s%,l%)`, rounded to integers);
/// `rgb` serves draw targets that don't speak CSS.
#[derive(Debug, Clone, PartialEq)]
pub struct HslColor {
    hue: f32,
    saturation: f32,
    lightness: f32,
    css: String,
    rgb: [f32; 3],
}

impl HslColor {
    /// `hue` in degrees, `saturation` and `lightness` in 0..=1.
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        let css = format!(
            "hsl({},{}%,{}%)",
            hue.round() as i32,
            (saturation * 100.0).round() as i32,
            (lightness * 100.0).round() as i32,
        );
        Self {
            hue,
            saturation,
            lightness,
            css,
            rgb: hsl_to_rgb(hue, saturation, lightness),
        }
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn lightness(&self) -> f32 {
        self.lightness
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn rgb(&self) -> [f32; 3] {
        self.rgb
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css)
    }
}

/// Standard HSL → RGB conversion, all channels in 0..=1.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let (r1, g1, b1) = if h_prime < 1.0 {
        (c, x, 0.0)
    } else if h_prime < 2.0 {
        (x, c, 0.0)
    } else if h_prime < 3.0 {
        (0.0, c, x)
    } else if h_prime < 4.0 {
        (0.0, x, c)
    } else if h_prime < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    let m = l - c / 2.0;
    [r1 + m, g1 + m, b1 + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb(actual: [f32; 3], expected: [f32; 3]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-5, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn css_descriptor_is_rounded() {
        let color = HslColor::new(0.72, 1.0, 0.5);
        assert_eq!(color.css(), "hsl(1,100%,50%)");
        assert_eq!(color.to_string(), "hsl(1,100%,50%)");
    }

    #[test]
    fn primaries() {
        assert_rgb(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
        assert_rgb(hsl_to_rgb(120.0, 1.0, 0.5), [0.0, 1.0, 0.0]);
        assert_rgb(hsl_to_rgb(240.0, 1.0, 0.5), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn grey_when_unsaturated() {
        assert_rgb(hsl_to_rgb(200.0, 0.0, 0.25), [0.25, 0.25, 0.25]);
    }

    #[test]
    fn hue_wraps() {
        assert_rgb(hsl_to_rgb(360.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
    }

    #[test]
    fn components_are_kept() {
        let color = HslColor::new(180.0, 0.5, 0.25);
        assert_eq!(color.hue(), 180.0);
        assert_eq!(color.saturation(), 0.5);
        assert_eq!(color.lightness(), 0.25);
        assert_rgb(color.rgb(), hsl_to_rgb(180.0, 0.5, 0.25));
    }
}
