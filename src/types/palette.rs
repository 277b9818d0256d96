//! Fixed palettes used by the texture pipelines.
//!
//! Every palette is a read-only mapping from a semantic name to a colour,
//! defined once at compile time. The defaults reproduce the catalyst
//! resource pack: a purple ore over a deepslate-grey stone base.

use super::Colour;

/// A three-stop gradient palette for brightness-based recolouring.
///
/// Source pixels darker than the midpoint map onto the shadow-to-base
/// segment, brighter pixels onto the base-to-highlight segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientPalette {
    pub shadow: Colour,
    pub base: Colour,
    pub highlight: Colour,
}

impl GradientPalette {
    /// The catalyst ingot palette.
    pub const CATALYST: Self = Self {
        shadow: Colour::rgb(91, 33, 182),     // #5B21B6
        base: Colour::rgb(139, 92, 246),      // #8B5CF6
        highlight: Colour::rgb(196, 181, 253), // #C4B5FD
    };
}

/// Named colours for painting ore veins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrePalette {
    pub base: Colour,
    pub shadow: Colour,
    pub light: Colour,
    pub sparkle: Colour,
}

impl OrePalette {
    /// The catalyst ore palette.
    pub const CATALYST: Self = Self {
        base: Colour::rgb(139, 92, 246),    // #8B5CF6
        shadow: Colour::rgb(91, 33, 182),   // #5B21B6
        light: Colour::rgb(196, 181, 253),  // #C4B5FD
        sparkle: Colour::rgb(245, 243, 255), // #F5F3FF (rare)
    };

    /// Check whether `colour` is one of the four vein colours.
    pub fn contains(&self, colour: Colour) -> bool {
        colour == self.base
            || colour == self.shadow
            || colour == self.light
            || colour == self.sparkle
    }
}

/// A stone palette, ordered darkest to lightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StonePalette {
    colours: [Colour; 6],
}

impl StonePalette {
    /// The deepslate palette.
    pub const DEEPSLATE: Self = Self {
        colours: [
            Colour::rgb(30, 30, 34), // #1E1E22
            Colour::rgb(37, 37, 42), // #25252A
            Colour::rgb(44, 44, 50), // #2C2C32
            Colour::rgb(51, 51, 58), // #33333A
            Colour::rgb(59, 59, 68), // #3B3B44
            Colour::rgb(69, 69, 80), // #454550
        ],
    };

    /// All colours, darkest first.
    pub fn colours(&self) -> &[Colour; 6] {
        &self.colours
    }

    /// The darkest colour, used for dark pockets.
    pub fn darkest(&self) -> Colour {
        self.colours[0]
    }

    /// Check whether `colour` is one of the palette entries.
    pub fn contains(&self, colour: Colour) -> bool {
        self.colours.contains(&colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalyst_gradient_values() {
        let p = GradientPalette::CATALYST;
        assert_eq!(p.shadow, Colour::from_hex("#5B21B6").unwrap());
        assert_eq!(p.base, Colour::from_hex("#8B5CF6").unwrap());
        assert_eq!(p.highlight, Colour::from_hex("#C4B5FD").unwrap());
    }

    #[test]
    fn test_ore_palette_contains() {
        let p = OrePalette::CATALYST;
        assert!(p.contains(p.base));
        assert!(p.contains(p.sparkle));
        assert!(!p.contains(Colour::BLACK));
    }

    #[test]
    fn test_stone_palette_ordered_darkest_first() {
        let p = StonePalette::DEEPSLATE;
        let brightnesses: Vec<f32> = p.colours().iter().map(|c| c.brightness()).collect();
        for pair in brightnesses.windows(2) {
            assert!(pair[0] < pair[1], "palette must run darkest to lightest");
        }
        assert_eq!(p.darkest(), p.colours()[0]);
    }

    #[test]
    fn test_stone_palette_all_opaque() {
        for &c in StonePalette::DEEPSLATE.colours() {
            assert!(c.is_opaque());
        }
    }
}
