//! Placement of the background image

use std::{fmt, str::FromStr};

/// How the background image is placed on the canvas
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BackgroundFit {
    /// Draw at the natural size of the image, anchored top left
    #[default]
    Natural,
    /// Scale by [`aspect_fit_ratio`] so the whole image is visible, anchored top left
    Contain,
}

#[derive(Debug)]
/// Failed to parse a fit name
pub struct FitError {}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Use one of `natural` or `contain`")
    }
}

impl std::error::Error for FitError {}

impl FromStr for BackgroundFit {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural" => Ok(Self::Natural),
            "contain" => Ok(Self::Contain),
            _ => Err(FitError {}),
        }
    }
}

impl fmt::Display for BackgroundFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Natural => "natural",
            Self::Contain => "contain",
        })
    }
}

impl BackgroundFit {
    /// The size an image of `image` pixels is drawn at on a `target` canvas
    pub fn draw_size(self, image: (u32, u32), target: (u32, u32)) -> (u32, u32) {
        match self {
            Self::Natural => image,
            Self::Contain => {
                let ratio = aspect_fit_ratio(image, target);
                let w = (image.0 as f64 * ratio).round() as u32;
                let h = (image.1 as f64 * ratio).round() as u32;
                (w, h)
            }
        }
    }
}

/// The largest uniform scale factor at which `image` still fits into `target`
///
/// Returns `1.0` for an empty image.
///
/// ```
/// use cardgen::aspect_fit_ratio;
/// assert_eq!(aspect_fit_ratio((1500, 1050), (750, 1050)), 0.5);
/// assert_eq!(aspect_fit_ratio((375, 350), (750, 1050)), 2.0);
/// ```
pub fn aspect_fit_ratio(image: (u32, u32), target: (u32, u32)) -> f64 {
    if image.0 == 0 || image.1 == 0 {
        return 1.0;
    }
    let h_ratio = target.0 as f64 / image.0 as f64;
    let v_ratio = target.1 as f64 / image.1 as f64;
    h_ratio.min(v_ratio)
}

#[cfg(test)]
mod tests {
    use super::{aspect_fit_ratio, BackgroundFit};

    #[test]
    fn test_draw_size() {
        let canvas = (750, 1050);
        assert_eq!(BackgroundFit::Natural.draw_size((800, 1200), canvas), (800, 1200));
        assert_eq!(BackgroundFit::Contain.draw_size((1500, 2100), canvas), (750, 1050));
        assert_eq!(BackgroundFit::Contain.draw_size((1500, 1500), canvas), (750, 750));
        assert_eq!(BackgroundFit::Contain.draw_size((0, 10), canvas), (0, 10));
        assert_eq!(aspect_fit_ratio((0, 0), canvas), 1.0);
    }

    #[test]
    fn test_parse_fit() {
        assert_eq!("contain".parse::<BackgroundFit>().unwrap(), BackgroundFit::Contain);
        assert_eq!(BackgroundFit::default(), BackgroundFit::Natural);
        assert!("cover".parse::<BackgroundFit>().is_err());
        assert!("fit".parse::<BackgroundFit>().is_err());
        for fit in [BackgroundFit::Natural, BackgroundFit::Contain] {
            assert_eq!(fit.to_string().parse::<BackgroundFit>().unwrap(), fit);
        }
    }
}
