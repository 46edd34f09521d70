//! WCAG relative luminance and contrast ratio
//!
//! Uses the WCAG 2.0 definition of relative luminance (linear segment
//! threshold 0.03928) so light/dark classification and warnings agree with
//! published contrast checkers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::conversion::Color;
use crate::constants::wcag;

/// Compute the relative luminance of a color.
///
/// Each channel is normalized to [0, 1], gamma-expanded, and combined as
///   L = 0.2126 * R + 0.7152 * G + 0.0722 * B
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
pub fn relative_luminance(color: Color) -> f64 {
    let srgb = color.to_srgb();
    let [wr, wg, wb] = wcag::LUMINANCE_WEIGHTS;
    wr * linearize(srgb.red) + wg * linearize(srgb.green) + wb * linearize(srgb.blue)
}

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result does not depend on argument order.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + wcag::CONTRAST_FLARE) / (darker + wcag::CONTRAST_FLARE)
}

fn linearize(channel: f64) -> f64 {
    if channel <= wcag::GAMMA_THRESHOLD {
        channel / wcag::LINEAR_DIVISOR
    } else {
        ((channel + wcag::GAMMA_OFFSET) / wcag::GAMMA_SCALE).powf(wcag::GAMMA_EXPONENT)
    }
}

/// Highest WCAG level a contrast ratio satisfies for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContrastGrade {
    /// Below 3:1
    Fail,
    /// At least 3:1, enough for large text only
    AaLarge,
    /// At least 4.5:1
    Aa,
    /// At least 7:1
    Aaa,
}

impl ContrastGrade {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= wcag::AAA_NORMAL_TEXT {
            ContrastGrade::Aaa
        } else if ratio >= wcag::AA_NORMAL_TEXT {
            ContrastGrade::Aa
        } else if ratio >= wcag::AA_LARGE_TEXT {
            ContrastGrade::AaLarge
        } else {
            ContrastGrade::Fail
        }
    }

    /// Whether normal-size body text is readable at level AA
    pub fn passes_normal_text(self) -> bool {
        self >= ContrastGrade::Aa
    }
}

impl fmt::Display for ContrastGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContrastGrade::Fail => "fail",
            ContrastGrade::AaLarge => "AA (large text)",
            ContrastGrade::Aa => "AA",
            ContrastGrade::Aaa => "AAA",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn black_and_white_luminance() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
        assert_relative_eq!(relative_luminance(Color::WHITE), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn black_on_white_is_21() {
        assert_relative_eq!(contrast_ratio(Color::WHITE, Color::BLACK), 21.0, epsilon = 1e-9);
    }

    #[test]
    fn same_color_is_1() {
        let c = Color::new(0x33, 0x66, 0xcc);
        assert_eq!(contrast_ratio(c, c), 1.0);
    }

    #[test]
    fn linear_segment_below_threshold() {
        // 10/255 ≈ 0.0392 sits just under the 0.03928 threshold
        let lum = relative_luminance(Color::new(10, 10, 10));
        assert_relative_eq!(lum, (10.0 / 255.0) / 12.92, epsilon = 1e-12);
    }

    #[test]
    fn green_dominates_luminance() {
        let red = relative_luminance(Color::new(255, 0, 0));
        let green = relative_luminance(Color::new(0, 255, 0));
        let blue = relative_luminance(Color::new(0, 0, 255));
        assert_relative_eq!(red, 0.2126, epsilon = 1e-9);
        assert_relative_eq!(green, 0.7152, epsilon = 1e-9);
        assert_relative_eq!(blue, 0.0722, epsilon = 1e-9);
    }

    #[test]
    fn known_gray_pair_is_low_contrast() {
        let ratio = contrast_ratio(Color::new(0xcc, 0xcc, 0xcc), Color::new(0xdd, 0xdd, 0xdd));
        assert!(ratio > 1.0 && ratio < 1.5, "ratio = {ratio}");
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(ContrastGrade::from_ratio(21.0), ContrastGrade::Aaa);
        assert_eq!(ContrastGrade::from_ratio(7.0), ContrastGrade::Aaa);
        assert_eq!(ContrastGrade::from_ratio(4.5), ContrastGrade::Aa);
        assert_eq!(ContrastGrade::from_ratio(3.2), ContrastGrade::AaLarge);
        assert_eq!(ContrastGrade::from_ratio(1.0), ContrastGrade::Fail);
        assert!(ContrastGrade::Aa.passes_normal_text());
        assert!(!ContrastGrade::AaLarge.passes_normal_text());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn color() -> impl Strategy<Value = Color> {
            any::<[u8; 3]>().prop_map(Color::from)
        }

        proptest! {
            #[test]
            fn contrast_is_symmetric(a in color(), b in color()) {
                prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
            }

            #[test]
            fn contrast_is_bounded(a in color(), b in color()) {
                let ratio = contrast_ratio(a, b);
                prop_assert!(ratio >= 1.0);
                prop_assert!(ratio <= 21.0 + 1e-9);
            }

            #[test]
            fn self_contrast_is_one(c in color()) {
                prop_assert_eq!(contrast_ratio(c, c), 1.0);
            }

            #[test]
            fn luminance_in_unit_range(c in color()) {
                let lum = relative_luminance(c);
                prop_assert!((0.0..=1.0 + 1e-12).contains(&lum));
            }
        }
    }
}
